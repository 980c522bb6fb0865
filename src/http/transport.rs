//! Transport abstraction used by the request builder

use crate::config::HttpMethod;
use url::Url;

/// The closed set of options a [`Transport`] understands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportOption {
    Url(Url),
    Method(HttpMethod),
    /// Follow `Location` headers on 3xx responses
    FollowLocation(bool),
    /// Hand the body back to the caller instead of writing it out
    ReturnTransfer(bool),
    /// Form encoded request body
    PostFields(String),
}

/// Result of a single [`Transport::execute`] call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportOutcome {
    Body(String),
    Completed,
    /// Details are available through `last_error_code`/`last_error_message`
    /// until the next call to `execute`.
    Failed,
}

/// Performs the actual network exchange on behalf of a request builder.
pub trait Transport {
    fn configure(&mut self, option: TransportOption);

    /// Run the exchange synchronously with the options configured so far.
    fn execute(&mut self) -> TransportOutcome;

    fn last_error_code(&self) -> i32;

    fn last_error_message(&self) -> String;
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn configure(&mut self, option: TransportOption) {
        (**self).configure(option)
    }

    fn execute(&mut self) -> TransportOutcome {
        (**self).execute()
    }

    fn last_error_code(&self) -> i32 {
        (**self).last_error_code()
    }

    fn last_error_message(&self) -> String {
        (**self).last_error_message()
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn configure(&mut self, option: TransportOption) {
        (**self).configure(option)
    }

    fn execute(&mut self) -> TransportOutcome {
        (**self).execute()
    }

    fn last_error_code(&self) -> i32 {
        (**self).last_error_code()
    }

    fn last_error_message(&self) -> String {
        (**self).last_error_message()
    }
}
