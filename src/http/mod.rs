//! HTTP request building and execution
//!
//! [`RequestBuilder`] owns the validation and failure-translation logic and
//! talks to the network only through the [`Transport`] trait.
//! [`ReqwestTransport`] is the production implementation.

pub mod request;
pub mod response;
pub mod reqwest_transport;
pub mod transport;

pub use request::{encode_form, RequestBuilder};
pub use reqwest_transport::ReqwestTransport;
pub use response::Response;
pub use transport::{Transport, TransportOption, TransportOutcome};
