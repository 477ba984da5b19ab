//! Unified error types for shiftsearch.
//!
//! Every backend failure collapses into one of three kinds: the request never
//! completed, the server answered with a non-2xx status, or the body did not
//! carry a results collection.

/// Unified error type shared by the console and its backends.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Request could not be sent, or timed out.
    #[error("NETWORK_ERROR: {0}")]
    Network(String),

    /// Server answered with a non-2xx status.
    #[error("HTTP_STATUS: {status}")]
    HttpStatus { status: u16 },

    /// Response body is missing the `content` collection or is not JSON.
    #[error("MALFORMED_RESPONSE: {0}")]
    MalformedResponse(String),

    /// Search term is empty once excluded characters are stripped.
    #[error("EMPTY_QUERY")]
    EmptyQuery,

    /// A setting value outside its allowed set.
    #[error("INVALID_SETTING: {0}")]
    InvalidSetting(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::HttpStatus { status: 503 };
        assert_eq!(err.to_string(), "HTTP_STATUS: 503");

        let err = Error::MalformedResponse("missing content".to_string());
        assert!(err.to_string().contains("MALFORMED_RESPONSE"));
        assert!(err.to_string().contains("missing content"));
    }

    #[test]
    fn test_empty_query_display() {
        assert_eq!(Error::EmptyQuery.to_string(), "EMPTY_QUERY");
    }
}
