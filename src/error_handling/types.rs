//! Error type definitions.
//!
//! This module defines the error taxonomy of the lookup pipeline. Error
//! messages double as user-visible text in per-domain results, so they are
//! short and human-readable.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Errors raised while resolving tenant information for a single domain.
///
/// These never escape the orchestrator: each is caught at the per-domain task
/// boundary and converted into the result's `error` string.
#[derive(Error, Debug)]
pub enum LookupError {
    /// Domain failed the syntax check; raised before any network call.
    #[error("Invalid domain format")]
    InvalidDomain,

    /// The discovery endpoint answered non-2xx. This is a legitimate negative
    /// result (the domain has no Microsoft tenant), not a transport failure.
    #[error("No Microsoft tenant found for this domain")]
    TenantNotFound,

    /// The discovery document could not be parsed or is missing `issuer`.
    #[error("Invalid tenant response")]
    InvalidTenantResponse,

    /// The issuer URL does not carry a tenant identifier path segment.
    #[error("Could not extract tenant ID")]
    MissingTenantId,

    /// Transport-level failure talking to the discovery endpoint.
    #[error("Failed to retrieve tenant information: {0}")]
    Transport(#[from] ReqwestError),
}

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_are_user_facing() {
        assert_eq!(LookupError::InvalidDomain.to_string(), "Invalid domain format");
        assert_eq!(
            LookupError::TenantNotFound.to_string(),
            "No Microsoft tenant found for this domain"
        );
        assert_eq!(
            LookupError::InvalidTenantResponse.to_string(),
            "Invalid tenant response"
        );
        assert_eq!(
            LookupError::MissingTenantId.to_string(),
            "Could not extract tenant ID"
        );
    }
}
