//! Error types for the extraction pipeline

use thiserror::Error;

/// Errors that can occur during an extraction
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Request failed validation before any network call
    #[error("{0}")]
    Validation(String),

    /// DNS, connect, TLS, timeout, or non-2xx response from the target site
    #[error("Network error: {cause}")]
    Network { cause: String },

    /// Unexpected fault during parsing, selection, or normalization
    #[error("Processing error: {0}")]
    Processing(String),

    /// Generation call failed or returned unusable output
    #[error("Generation error: {0}")]
    Generation(String),

    /// The generation client was never configured (e.g. missing API key)
    #[error("{0}")]
    Configuration(String),
}

impl ExtractError {
    /// Create a network error from a reqwest error
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        let cause = if err.is_timeout() {
            "request timed out".to_string()
        } else if err.is_connect() {
            format!("failed to connect: {}", err)
        } else {
            err.to_string()
        };
        ExtractError::Network { cause }
    }

    /// Boundary-facing message for this error
    ///
    /// Generation failures are collapsed into a generic message so that
    /// provider-internal detail never reaches the caller.
    pub fn user_message(&self) -> String {
        match self {
            ExtractError::Generation(_) => {
                "Extraction failed: generation call did not produce a result".to_string()
            }
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_error_prefix() {
        let err = ExtractError::Network {
            cause: "connection refused".to_string(),
        };
        assert_eq!(err.to_string(), "Network error: connection refused");
        assert!(err.user_message().starts_with("Network error:"));
    }

    #[test]
    fn test_processing_error_prefix() {
        let err = ExtractError::Processing("no content".to_string());
        assert_eq!(err.to_string(), "Processing error: no content");
    }

    #[test]
    fn test_generation_error_is_generic_for_users() {
        let err = ExtractError::Generation("quota exceeded for project 12345".to_string());
        let msg = err.user_message();
        assert!(msg.starts_with("Extraction failed:"));
        assert!(!msg.contains("quota"));
    }

    #[test]
    fn test_validation_error_verbatim() {
        let err = ExtractError::Validation("URL is required".to_string());
        assert_eq!(err.user_message(), "URL is required");
    }
}
