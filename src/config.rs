//! Configuration management for tinycurl

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// HTTP method enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let method = match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        };
        write!(f, "{}", method)
    }
}

impl FromStr for HttpMethod {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "GET" => Ok(HttpMethod::Get),
            "POST" => Ok(HttpMethod::Post),
            _ => Err(()),
        }
    }
}

/// Proxy configuration
#[derive(Debug, Clone)]
pub struct ProxyConfig {
    pub url: String,
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Where a non-captured response body is written
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    /// `None` writes to stdout
    pub file: Option<PathBuf>,
}

/// Settings of the production transport. Opaque to the request builder.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub max_redirects: u32,
    pub user_agent: Option<String>,
    pub verify_certs: bool,
    pub proxy: Option<ProxyConfig>,
    pub output: OutputConfig,
}

impl Default for TransportConfig {
    fn default() -> Self {
        TransportConfig {
            timeout: Duration::from_secs(300),
            connect_timeout: Duration::from_secs(30),
            max_redirects: 50,
            user_agent: Some(format!("tinycurl/{}", crate::VERSION)),
            verify_certs: true,
            proxy: None,
            output: OutputConfig::default(),
        }
    }
}
