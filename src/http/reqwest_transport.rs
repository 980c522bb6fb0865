//! reqwest-backed transport

use crate::config::{HttpMethod, TransportConfig};
use crate::exit_code;
use crate::http::transport::{Transport, TransportOption, TransportOutcome};
use crate::output::OutputWriter;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, ClientBuilder, Method};
use url::Url;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

#[derive(Debug, Clone, PartialEq, Eq)]
struct TransportFailure {
    code: i32,
    message: String,
}

impl TransportFailure {
    fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    fn from_reqwest(err: &reqwest::Error) -> Self {
        Self::new(exit_code::transport_code_for_reqwest(err), err.to_string())
    }
}

/// Transport that performs exchanges with a reqwest client.
///
/// Each [`execute`](Transport::execute) call builds its own client and a
/// current-thread tokio runtime and drops both before returning. It must
/// therefore not be called from inside another tokio runtime.
#[derive(Debug)]
pub struct ReqwestTransport {
    config: TransportConfig,
    output: OutputWriter,
    url: Option<Url>,
    method: HttpMethod,
    follow_location: bool,
    return_transfer: bool,
    post_fields: Option<String>,
    last_error: Option<TransportFailure>,
}

impl ReqwestTransport {
    pub fn new(config: TransportConfig) -> Self {
        let output = OutputWriter::new(config.output.clone());
        Self {
            config,
            output,
            url: None,
            method: HttpMethod::Get,
            follow_location: false,
            return_transfer: false,
            post_fields: None,
            last_error: None,
        }
    }

    fn build_client(&self) -> Result<Client, TransportFailure> {
        let mut builder = ClientBuilder::new()
            .timeout(self.config.timeout)
            .connect_timeout(self.config.connect_timeout)
            .redirect(if self.follow_location {
                reqwest::redirect::Policy::limited(self.config.max_redirects as usize)
            } else {
                reqwest::redirect::Policy::none()
            });

        if let Some(user_agent) = &self.config.user_agent {
            builder = builder.user_agent(user_agent.as_str());
        }

        if let Some(proxy_config) = &self.config.proxy {
            let proxy = reqwest::Proxy::all(&proxy_config.url).map_err(|e| {
                TransportFailure::new(
                    exit_code::FAILED_INIT,
                    format!("Invalid proxy '{}': {}", proxy_config.url, e),
                )
            })?;

            let proxy = if let (Some(username), Some(password)) =
                (&proxy_config.username, &proxy_config.password)
            {
                proxy.basic_auth(username, password)
            } else {
                proxy
            };

            builder = builder.proxy(proxy);
        }

        if !self.config.verify_certs {
            builder = builder.danger_accept_invalid_certs(true);
        }

        builder.build().map_err(|e| TransportFailure::from_reqwest(&e))
    }

    fn perform(&self) -> Result<TransportOutcome, TransportFailure> {
        let url = self
            .url
            .clone()
            .ok_or_else(|| TransportFailure::new(exit_code::URL_MALFORMAT, "No URL set"))?;

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| {
                TransportFailure::new(
                    exit_code::FAILED_INIT,
                    format!("Failed to create async runtime: {}", e),
                )
            })?;
        let client = self.build_client()?;

        log::debug!("{} {}", self.method, url);

        let body = runtime.block_on(async {
            let request = match self.method {
                HttpMethod::Get => client.request(Method::GET, url),
                HttpMethod::Post => client
                    .request(Method::POST, url)
                    .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
                    .body(self.post_fields.clone().unwrap_or_default()),
            }
            .header(ACCEPT, "*/*");

            let response = request
                .send()
                .await
                .map_err(|e| TransportFailure::from_reqwest(&e))?;
            log::debug!("< {} from {}", response.status(), response.url());

            response
                .bytes()
                .await
                .map_err(|e| TransportFailure::from_reqwest(&e))
        })?;

        if self.return_transfer {
            let text = String::from_utf8(body.to_vec()).map_err(|e| {
                TransportFailure::new(
                    exit_code::RECV_ERROR,
                    format!("Response body is not valid UTF-8: {}", e),
                )
            })?;
            return Ok(TransportOutcome::Body(text));
        }

        self.output
            .write(&body)
            .map_err(|e| TransportFailure::new(exit_code::WRITE_ERROR, e.to_string()))?;
        Ok(TransportOutcome::Completed)
    }
}

impl Transport for ReqwestTransport {
    fn configure(&mut self, option: TransportOption) {
        match option {
            TransportOption::Url(url) => self.url = Some(url),
            TransportOption::Method(method) => {
                self.method = method;
                if method == HttpMethod::Get {
                    self.post_fields = None;
                }
            }
            TransportOption::FollowLocation(enabled) => self.follow_location = enabled,
            TransportOption::ReturnTransfer(enabled) => self.return_transfer = enabled,
            TransportOption::PostFields(body) => self.post_fields = Some(body),
        }
    }

    fn execute(&mut self) -> TransportOutcome {
        self.last_error = None;
        match self.perform() {
            Ok(outcome) => outcome,
            Err(failure) => {
                log::debug!("transfer failed ({}): {}", failure.code, failure.message);
                self.last_error = Some(failure);
                TransportOutcome::Failed
            }
        }
    }

    fn last_error_code(&self) -> i32 {
        self.last_error.as_ref().map_or(0, |failure| failure.code)
    }

    fn last_error_message(&self) -> String {
        self.last_error
            .as_ref()
            .map(|failure| failure.message.clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::ReqwestTransport;
    use crate::config::{ProxyConfig, TransportConfig};
    use crate::http::transport::{Transport, TransportOption, TransportOutcome};

    #[test]
    fn execute_without_url_reports_malformed_url() {
        let mut transport = ReqwestTransport::new(TransportConfig::default());
        assert_eq!(transport.execute(), TransportOutcome::Failed);
        assert_eq!(transport.last_error_code(), 3);
        assert_eq!(transport.last_error_message(), "No URL set");
    }

    #[test]
    fn invalid_proxy_is_an_init_failure() {
        let config = TransportConfig {
            proxy: Some(ProxyConfig {
                url: "not a proxy".to_string(),
                username: None,
                password: None,
            }),
            ..TransportConfig::default()
        };
        let mut transport = ReqwestTransport::new(config);
        transport.configure(TransportOption::Url(
            "http://127.0.0.1/".parse().expect("valid url"),
        ));

        assert_eq!(transport.execute(), TransportOutcome::Failed);
        assert_eq!(transport.last_error_code(), 2);
        assert!(transport.last_error_message().contains("Invalid proxy"));
    }

    #[test]
    fn error_state_is_empty_before_any_failure() {
        let transport = ReqwestTransport::new(TransportConfig::default());
        assert_eq!(transport.last_error_code(), 0);
        assert!(transport.last_error_message().is_empty());
    }
}
