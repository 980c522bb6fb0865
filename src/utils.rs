//! Utility functions and helpers

use crate::error::{CurlError, Result};
use std::time::Duration;
use url::Url;

/// Schemes the request builder accepts
pub const SUPPORTED_SCHEMES: &[&str] = &["http", "https"];

/// URL validation and parsing utilities
pub struct UrlUtils;

impl UrlUtils {
    /// Validate and normalize an absolute URL.
    ///
    /// Unlike a browser address bar, no scheme is guessed: `example.com` is
    /// rejected, as are empty input, unsupported schemes and URLs without a host.
    pub fn validate_url(input: &str) -> Result<Url> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(CurlError::InvalidUrl("empty URL".to_string()));
        }

        let url = Url::parse(trimmed)
            .map_err(|e| CurlError::InvalidUrl(format!("Invalid URL '{}': {}", input, e)))?;

        if !SUPPORTED_SCHEMES.contains(&url.scheme()) {
            return Err(CurlError::InvalidUrl(format!(
                "Unsupported scheme '{}' in '{}'",
                url.scheme(),
                input
            )));
        }

        match url.host_str() {
            Some(host) if !host.is_empty() => Ok(url),
            _ => Err(CurlError::InvalidUrl(format!("Missing host in '{}'", input))),
        }
    }
}

/// String utilities
pub struct StringUtils;

impl StringUtils {
    /// Parse a `key=value` form field. The value may be empty or contain `=`.
    pub fn parse_field(input: &str) -> Result<(String, String)> {
        match input.split_once('=') {
            Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
            _ => Err(CurlError::Config(format!(
                "Invalid form field: '{}'. Expected 'key=value'",
                input
            ))),
        }
    }

    /// Parse timeout values (supports suffixes like 's', 'm', 'h')
    pub fn parse_timeout(input: &str) -> Result<Duration> {
        if let Ok(seconds) = input.parse::<u64>() {
            return Ok(Duration::from_secs(seconds));
        }

        let (number_part, suffix) = if let Some(stripped) = input.strip_suffix('s') {
            (stripped, 1)
        } else if let Some(stripped) = input.strip_suffix('m') {
            (stripped, 60)
        } else if let Some(stripped) = input.strip_suffix('h') {
            (stripped, 3600)
        } else {
            return Err(CurlError::Config(format!(
                "Invalid timeout format: '{}'. Use number with optional suffix (s/m/h)",
                input
            )));
        };

        let number: u64 = number_part
            .parse()
            .map_err(|_| CurlError::Config(format!("Invalid timeout number: '{}'", number_part)))?;

        Ok(Duration::from_secs(number * suffix))
    }
}

#[cfg(test)]
mod tests {
    use super::{StringUtils, UrlUtils};
    use crate::error::CurlError;
    use std::time::Duration;

    #[test]
    fn validate_url_rejects_invalid_input() {
        for input in ["", "   ", "invalid-url", "example.com", "http://", "/relative/path"] {
            let err = UrlUtils::validate_url(input).expect_err(input);
            assert!(matches!(err, CurlError::InvalidUrl(_)), "{input}");
        }
    }

    #[test]
    fn validate_url_rejects_unsupported_scheme() {
        let err = UrlUtils::validate_url("mailto:user@example.com").expect_err("no host");
        assert!(matches!(err, CurlError::InvalidUrl(_)));
        let err = UrlUtils::validate_url("ftp://example.com/file").expect_err("ftp");
        assert!(matches!(err, CurlError::InvalidUrl(_)));
    }

    #[test]
    fn validate_url_accepts_and_normalizes() {
        let url = UrlUtils::validate_url("HTTP://Example.com").expect("valid url");
        assert_eq!(url.as_str(), "http://example.com/");

        let url = UrlUtils::validate_url("https://example.com/path?q=1").expect("valid url");
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.path(), "/path");
        assert_eq!(url.query(), Some("q=1"));
    }

    #[test]
    fn parse_field_splits_on_first_equals() {
        assert_eq!(
            StringUtils::parse_field("a=1").expect("field"),
            ("a".to_string(), "1".to_string())
        );
        assert_eq!(
            StringUtils::parse_field("expr=x=y").expect("field"),
            ("expr".to_string(), "x=y".to_string())
        );
        assert_eq!(
            StringUtils::parse_field("empty=").expect("field"),
            ("empty".to_string(), String::new())
        );

        for input in ["missing", "=value"] {
            let err = StringUtils::parse_field(input).expect_err("invalid field");
            assert!(matches!(err, CurlError::Config(_)));
        }
    }

    #[test]
    fn parse_timeout_parses_suffixes() {
        assert_eq!(
            StringUtils::parse_timeout("10").expect("seconds"),
            Duration::from_secs(10)
        );
        assert_eq!(
            StringUtils::parse_timeout("2m").expect("minutes"),
            Duration::from_secs(120)
        );
        assert_eq!(
            StringUtils::parse_timeout("1h").expect("hours"),
            Duration::from_secs(3600)
        );

        let err = StringUtils::parse_timeout("5x").expect_err("invalid suffix");
        assert!(matches!(err, CurlError::Config(_)));

        let err = StringUtils::parse_timeout("xs").expect_err("invalid number");
        assert!(matches!(err, CurlError::Config(_)));
    }
}
