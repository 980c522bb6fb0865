//! Successful request results

/// Payload of a successful exchange.
///
/// The variant tells which capture policy was in force, so an empty captured
/// body and a deliberately discarded body stay distinguishable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Captured response body
    Body(String),
    /// Transfer succeeded; the body went to the transport's own output
    Completed,
}

impl Response {
    pub fn body(&self) -> Option<&str> {
        match self {
            Response::Body(body) => Some(body),
            Response::Completed => None,
        }
    }

    pub fn into_body(self) -> Option<String> {
        match self {
            Response::Body(body) => Some(body),
            Response::Completed => None,
        }
    }

    pub fn is_captured(&self) -> bool {
        matches!(self, Response::Body(_))
    }
}
