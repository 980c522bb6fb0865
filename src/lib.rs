//! tinycurl - a validated, chainable HTTP request builder
//!
//! The [`http::RequestBuilder`] checks its target URL when it is assigned,
//! applies redirect and capture options to an injected [`http::Transport`],
//! and turns transport failures into typed [`CurlError`] values.
//!
//! ```no_run
//! use tinycurl::config::TransportConfig;
//! use tinycurl::http::RequestBuilder;
//!
//! # fn main() -> tinycurl::Result<()> {
//! let response = RequestBuilder::with_config(TransportConfig::default())
//!     .set_url("http://example.com")?
//!     .follow_redirects(true)
//!     .post([("a", "1"), ("b", "2")])?;
//! println!("{:?}", response.body());
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod exit_code;
pub mod http;
pub mod logging;
pub mod output;
pub mod utils;

pub use error::{CurlError, Result};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
