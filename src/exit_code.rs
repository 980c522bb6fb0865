//! curl-compatible numeric codes for errors

use crate::error::CurlError;

pub const FAILED_INIT: i32 = 2;
pub const URL_MALFORMAT: i32 = 3;
pub const COULDNT_CONNECT: i32 = 7;
pub const WRITE_ERROR: i32 = 23;
pub const OPERATION_TIMEDOUT: i32 = 28;
pub const GOT_NOTHING: i32 = 52;
pub const TOO_MANY_REDIRECTS: i32 = 47;
pub const RECV_ERROR: i32 = 56;
pub const UNKNOWN: i32 = 43;

/// Process exit code for an error surfaced to the CLI
pub fn exit_code_for_error(err: &CurlError) -> i32 {
    match err {
        CurlError::InvalidUrl(_) | CurlError::MissingUrl => URL_MALFORMAT,
        CurlError::Config(_) => FAILED_INIT,
        CurlError::Io(_) => WRITE_ERROR,
        CurlError::Transport { code, .. } if (1..=255).contains(code) => *code,
        CurlError::Transport { .. } => UNKNOWN,
    }
}

/// Native error code for a failed reqwest exchange
pub fn transport_code_for_reqwest(err: &reqwest::Error) -> i32 {
    if err.is_timeout() {
        return OPERATION_TIMEDOUT;
    }
    if err.is_redirect() {
        return TOO_MANY_REDIRECTS;
    }
    if err.is_connect() {
        return COULDNT_CONNECT;
    }
    if err.is_builder() {
        return FAILED_INIT;
    }
    if err.is_body() || err.is_decode() {
        return RECV_ERROR;
    }
    if err.is_request() {
        return GOT_NOTHING;
    }
    UNKNOWN
}

#[cfg(test)]
mod tests {
    use super::exit_code_for_error;
    use crate::error::CurlError;

    #[test]
    fn exit_code_maps_invalid_and_missing_url() {
        let err = CurlError::InvalidUrl("bad".to_string());
        assert_eq!(exit_code_for_error(&err), 3);
        assert_eq!(exit_code_for_error(&CurlError::MissingUrl), 3);
    }

    #[test]
    fn exit_code_passes_transport_code_through() {
        let err = CurlError::Transport {
            code: 7,
            message: "Couldn't connect".to_string(),
        };
        assert_eq!(exit_code_for_error(&err), 7);
    }

    #[test]
    fn exit_code_clamps_out_of_range_transport_code() {
        let err = CurlError::Transport {
            code: 0,
            message: String::new(),
        };
        assert_eq!(exit_code_for_error(&err), 43);
        let err = CurlError::Transport {
            code: 1000,
            message: String::new(),
        };
        assert_eq!(exit_code_for_error(&err), 43);
    }
}
