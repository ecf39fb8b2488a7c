use gorestaurant_api::ApiError;
use thiserror::Error;

/// Everything that can go wrong between a screen and the backend
///
/// Reads and writes are kept apart so the caller can tell a screen that
/// failed to load from an action that failed to go through.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to fetch data")]
    Fetch(#[source] ApiError),

    #[error("Failed to submit")]
    Submit(#[source] ApiError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl Error {
    pub fn is_fetch(&self) -> bool {
        matches!(self, Error::Fetch(_))
    }

    pub fn is_submit(&self) -> bool {
        matches!(self, Error::Submit(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_api_error_shows_up_once_in_the_chain() {
        let error = Error::Submit(ApiError::RequestFailed("Status 500: boom".into()));

        assert_eq!(error.to_string(), "Failed to submit");
        let source = error.source().map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("API request failed: Status 500: boom"));
    }

    #[test]
    fn test_error_kinds() {
        assert!(Error::Fetch(ApiError::NotFound("food 1".into())).is_fetch());
        assert!(!Error::Fetch(ApiError::NotFound("food 1".into())).is_submit());
        assert!(Error::Submit(ApiError::NotFound("orders".into())).is_submit());
    }
}
