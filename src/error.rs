use std::fmt;

/// Unified error type for catalog API operations.
///
/// The three kinds are mutually exclusive so callers can pick a failure
/// policy per kind: timeouts want a manual retry, catalog rejections want
/// the body shown to the user, transport faults want the raw message.
#[derive(Debug)]
pub enum ApiError {
    /// The request exceeded its deadline. Never retried automatically;
    /// the user re-triggers the fetch by hand.
    Timeout(reqwest::Error),
    /// The catalog returned a non-success status. Body text is kept
    /// verbatim for diagnostic display.
    Catalog {
        status: reqwest::StatusCode,
        body: String,
    },
    /// Any other failure to complete the request or parse its body
    /// (connection reset, DNS failure, malformed JSON).
    Transport(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Timeout(e) => write!(f, "Request timed out: {}", e),
            ApiError::Catalog { status, body } => write!(f, "Catalog error {}: {}", status, body),
            ApiError::Transport(msg) => write!(f, "Transport error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Timeout(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout(err)
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_display_keeps_body_verbatim() {
        let err = ApiError::Catalog {
            status: reqwest::StatusCode::FORBIDDEN,
            body: "{\"error\":\"missing api key\"}".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("403"));
        assert!(text.contains("missing api key"));
    }

    #[test]
    fn json_error_maps_to_transport() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        match ApiError::from(parse_err) {
            ApiError::Transport(msg) => assert!(!msg.is_empty()),
            other => panic!("Expected Transport, got: {other:?}"),
        }
    }
}
