//! Error types for the campaign engine.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Validation and state-conflict errors surface verbatim to callers; storage and
//! transport causes stay behind the opaque `Internal` variant and are only logged.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors produced by campaign persistence.
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// The requested campaign does not exist
    #[error("campaign not found: {0}")]
    NotFound(String),

    /// The storage backend failed
    #[error("storage failure: {0}")]
    Storage(String),
}

/// Errors produced by the mail transport.
#[derive(Error, Debug)]
pub enum MailerError {
    /// A message could not be built for a recipient
    #[error("failed to build message: {0}")]
    Message(String),

    /// The transport rejected or failed the delivery
    #[error("transport failure: {0}")]
    Transport(String),
}

/// Errors returned by the campaign service to its callers.
///
/// Storage and transport causes are never carried here; they are logged at
/// the service boundary and collapsed into `Internal`.
#[derive(Error, Debug)]
pub enum CampaignError {
    /// Input failed a domain rule; the message is the single first-failing rule
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The requested campaign does not exist
    #[error("campaign not found")]
    NotFound,

    /// The operation is illegal in the campaign's current status
    #[error("campaign status invalid")]
    StatusInvalid,

    /// Storage or transport failure, deliberately opaque
    #[error("internal error")]
    Internal,
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with RepositoryError
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Convenience type alias for Results with MailerError
pub type MailerResult<T> = Result<T, MailerError>;

/// Convenience type alias for Results with CampaignError
pub type CampaignResult<T> = Result<T, CampaignError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CampaignError::NotFound;
        assert_eq!(err.to_string(), "campaign not found");

        let err = CampaignError::StatusInvalid;
        assert_eq!(err.to_string(), "campaign status invalid");

        let err = CampaignError::Internal;
        assert_eq!(err.to_string(), "internal error");

        let err = ConfigError::MissingVar("SMTP_HOST".to_string());
        assert_eq!(err.to_string(), "Missing required environment variable: SMTP_HOST");
    }

    #[test]
    fn test_validation_error_passes_through_verbatim() {
        let err = CampaignError::from(ValidationError::NameMin);
        assert_eq!(err.to_string(), "name is required with min 5");
    }

    #[test]
    fn test_repository_error_variants() {
        let err = RepositoryError::NotFound("abc".to_string());
        assert!(err.to_string().contains("abc"));

        let err = RepositoryError::Storage("connection refused".to_string());
        assert!(err.to_string().contains("connection refused"));
    }
}
