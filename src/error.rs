// src/error.rs
// Error taxonomy for chat completion calls

use thiserror::Error;

/// Why a completion call failed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompletionError {
    #[error("authentication failed: {0}")]
    Auth(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("rate limited: {0}")]
    RateLimited(String),

    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

/// Convenience type alias for completion results
pub type Result<T> = std::result::Result<T, CompletionError>;

impl CompletionError {
    /// Classify a non-success HTTP status from the completions endpoint
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            401 | 403 => CompletionError::Auth(message),
            429 => CompletionError::RateLimited(message),
            _ => CompletionError::Api { status, message },
        }
    }

    /// Convert to the string shown to end users
    pub fn to_user_string(&self) -> String {
        format!("An error occurred: {}", self)
    }
}

impl From<reqwest::Error> for CompletionError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            CompletionError::MalformedResponse(err.to_string())
        } else {
            CompletionError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for CompletionError {
    fn from(err: serde_json::Error) -> Self {
        CompletionError::MalformedResponse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification() {
        assert!(matches!(
            CompletionError::from_status(401, "bad key"),
            CompletionError::Auth(_)
        ));
        assert!(matches!(
            CompletionError::from_status(403, "forbidden"),
            CompletionError::Auth(_)
        ));
        assert!(matches!(
            CompletionError::from_status(429, "slow down"),
            CompletionError::RateLimited(_)
        ));
        assert_eq!(
            CompletionError::from_status(500, "boom"),
            CompletionError::Api {
                status: 500,
                message: "boom".to_string()
            }
        );
    }

    #[test]
    fn test_display_includes_description() {
        let err = CompletionError::Api {
            status: 503,
            message: "overloaded".to_string(),
        };
        assert_eq!(err.to_string(), "API error 503: overloaded");
    }

    #[test]
    fn test_to_user_string() {
        let err = CompletionError::Auth("Incorrect API key provided".to_string());
        let shown = err.to_user_string();
        assert!(shown.starts_with("An error occurred: "));
        assert!(shown.contains("Incorrect API key provided"));
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: CompletionError = json_err.into();
        assert!(matches!(err, CompletionError::MalformedResponse(_)));
    }
}
