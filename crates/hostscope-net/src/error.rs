//! Internal error types for probe transfers.
//!
//! These never cross the prober boundary as call-level errors; the
//! prober folds them into the `error` field of the result record.

use thiserror::Error;

/// Result type alias for probe transfers.
pub type NetResult<T> = Result<T, NetError>;

/// Errors from a single probe transfer.
#[derive(Debug, Error)]
pub enum NetError {
    /// Endpoint answered with a non-success HTTP status.
    #[error("endpoint returned HTTP {status}: {url}")]
    RequestFailed {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// Network or HTTP client error (DNS failure, timeout, reset).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Endpoint URL failed to parse.
    #[error("invalid endpoint URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_failed_message_names_status_and_url() {
        let err = NetError::RequestFailed {
            status: 503,
            url: "https://example.com/down".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("503"));
        assert!(msg.contains("example.com"));
    }

    #[test]
    fn invalid_url_converts_from_parse_error() {
        let parse_err = url::Url::parse("not a url").unwrap_err();
        let err: NetError = parse_err.into();
        assert!(err.to_string().contains("invalid endpoint URL"));
    }
}
