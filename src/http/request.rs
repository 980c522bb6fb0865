//! Fluent request builder

use crate::config::{HttpMethod, TransportConfig};
use crate::error::{CurlError, Result};
use crate::http::reqwest_transport::ReqwestTransport;
use crate::http::response::Response;
use crate::http::transport::{Transport, TransportOption, TransportOutcome};
use crate::utils::UrlUtils;
use url::form_urlencoded;
use url::Url;

/// Validated, chainable configuration of a single GET or POST exchange.
///
/// A builder starts without a URL and refuses to dispatch until
/// [`set_url`](Self::set_url) succeeds. Redirects are followed and the
/// response body is captured unless switched off.
///
/// Every dispatch re-applies all options to the transport, so an instance
/// may be reused sequentially. Use one builder per in-flight request.
#[derive(Debug)]
pub struct RequestBuilder<T: Transport> {
    transport: T,
    url: Option<Url>,
    follow_redirects: bool,
    capture_response: bool,
}

impl RequestBuilder<ReqwestTransport> {
    /// Builder backed by the reqwest transport
    pub fn with_config(config: TransportConfig) -> Self {
        Self::new(ReqwestTransport::new(config))
    }
}

impl<T: Transport> RequestBuilder<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            url: None,
            follow_redirects: true,
            capture_response: true,
        }
    }

    /// Set the target URL. On error the previously stored URL is kept.
    pub fn set_url(&mut self, candidate: &str) -> Result<&mut Self> {
        let url = UrlUtils::validate_url(candidate)?;
        self.url = Some(url);
        Ok(self)
    }

    pub fn follow_redirects(&mut self, enabled: bool) -> &mut Self {
        self.follow_redirects = enabled;
        self
    }

    /// With capture disabled a successful exchange yields [`Response::Completed`].
    pub fn capture_response(&mut self, enabled: bool) -> &mut Self {
        self.capture_response = enabled;
        self
    }

    pub fn url(&self) -> Option<&Url> {
        self.url.as_ref()
    }

    pub fn is_following_redirects(&self) -> bool {
        self.follow_redirects
    }

    pub fn is_capturing_response(&self) -> bool {
        self.capture_response
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn into_transport(self) -> T {
        self.transport
    }

    /// Send a GET request
    pub fn get(&mut self) -> Result<Response> {
        self.dispatch(HttpMethod::Get, None)
    }

    /// Send a POST request with `fields` as a URL-encoded form body.
    ///
    /// Fields are encoded in iteration order; no fields means an empty body.
    pub fn post<I, K, V>(&mut self, fields: I) -> Result<Response>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        if self.url.is_none() {
            return Err(CurlError::MissingUrl);
        }
        let body = encode_form(fields);
        self.dispatch(HttpMethod::Post, Some(body))
    }

    fn dispatch(&mut self, method: HttpMethod, body: Option<String>) -> Result<Response> {
        let url = self.url.clone().ok_or(CurlError::MissingUrl)?;

        self.transport.configure(TransportOption::Url(url));
        self.transport
            .configure(TransportOption::FollowLocation(self.follow_redirects));
        self.transport
            .configure(TransportOption::ReturnTransfer(self.capture_response));
        self.transport.configure(TransportOption::Method(method));
        if let Some(body) = body {
            self.transport.configure(TransportOption::PostFields(body));
        }

        match self.transport.execute() {
            TransportOutcome::Body(body) => Ok(Response::Body(body)),
            TransportOutcome::Completed => Ok(Response::Completed),
            // The error state belongs to this execute call; read it first.
            TransportOutcome::Failed => Err(CurlError::Transport {
                code: self.transport.last_error_code(),
                message: self.transport.last_error_message(),
            }),
        }
    }
}

/// Encode key/value pairs as `application/x-www-form-urlencoded`
pub fn encode_form<I, K, V>(fields: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in fields {
        serializer.append_pair(key.as_ref(), value.as_ref());
    }
    serializer.finish()
}

#[cfg(test)]
mod tests {
    use super::encode_form;
    use std::collections::BTreeMap;

    #[test]
    fn encode_form_keeps_iteration_order() {
        assert_eq!(encode_form([("a", "1"), ("b", "2")]), "a=1&b=2");
        assert_eq!(encode_form([("b", "2"), ("a", "1")]), "b=2&a=1");
    }

    #[test]
    fn encode_form_empty_is_empty() {
        assert_eq!(encode_form(Vec::<(&str, &str)>::new()), "");
    }

    #[test]
    fn encode_form_percent_encodes_keys_and_values() {
        assert_eq!(
            encode_form([("full name", "Jane Doe"), ("q&a", "x=y/z")]),
            "full+name=Jane+Doe&q%26a=x%3Dy%2Fz"
        );
        assert_eq!(encode_form([("city", "Zürich")]), "city=Z%C3%BCrich");
    }

    #[test]
    fn encode_form_accepts_borrowed_maps() {
        let mut fields = BTreeMap::new();
        fields.insert("z".to_string(), "last".to_string());
        fields.insert("a".to_string(), "first".to_string());
        assert_eq!(encode_form(&fields), "a=first&z=last");
    }
}
