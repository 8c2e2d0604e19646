use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InputError(String),

    #[error("A search is already in progress")]
    SearchInProgress,

    #[error("Request failed: {0}")]
    TransportError(String),

    #[error("Unexpected response: {0}")]
    DecodeError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::TransportError("Request timeout".to_string())
        } else if err.is_connect() {
            AppError::TransportError("Failed to connect to the anime API".to_string())
        } else if let Some(status) = err.status() {
            AppError::TransportError(format!("HTTP {}", status))
        } else if err.is_decode() {
            AppError::DecodeError(err.to_string())
        } else {
            AppError::TransportError(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::DecodeError(err.to_string())
    }
}

impl AppError {
    /// Errors raised before any request went out.
    pub fn is_input_error(&self) -> bool {
        matches!(self, AppError::InputError(_) | AppError::SearchInProgress)
    }

    /// Message shown to the user. Transport and decode failures read the same way.
    pub fn user_message(&self) -> String {
        match self {
            AppError::InputError(msg)
            | AppError::TransportError(msg)
            | AppError::DecodeError(msg) => msg.clone(),
            other => other.to_string(),
        }
    }
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_error_maps_to_decode_error() {
        let err = serde_json::from_str::<serde_json::Value>("{\"data\": [").unwrap_err();
        let app_err: AppError = err.into();
        assert!(matches!(app_err, AppError::DecodeError(_)));
    }

    #[test]
    fn test_input_errors_are_flagged() {
        assert!(AppError::InputError("empty".into()).is_input_error());
        assert!(AppError::SearchInProgress.is_input_error());
        assert!(!AppError::TransportError("down".into()).is_input_error());
        assert!(!AppError::DecodeError("bad".into()).is_input_error());
    }

    #[test]
    fn test_user_message_strips_category_prefix() {
        let err = AppError::TransportError("HTTP 503 Service Unavailable".into());
        assert_eq!(err.user_message(), "HTTP 503 Service Unavailable");
        assert_eq!(
            err.to_string(),
            "Request failed: HTTP 503 Service Unavailable"
        );
    }
}
