// ABOUTME: Unified error types for PayPal REST client operations
// ABOUTME: Error taxonomy, stable error codes, and retry hints for callers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 paypal-rest-client contributors

//! # Error Handling
//!
//! Every operation in the client returns [`AppResult`]. Errors are never
//! retried internally; [`PayPalError::is_retryable`] is a hint for callers
//! that implement their own retry policy.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Stable error codes for logging and for callers that map errors to responses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Caller supplied an illegal argument combination
    InvalidArgument,
    /// Provider answered with a non-success status, or could not be reached
    ApiCallFailed,
    /// Response body did not match the expected JSON shape
    DecodeError,
    /// Request did not complete within the transport timeout
    Timeout,
    /// Client configuration is missing or malformed
    ConfigInvalid,
}

impl ErrorCode {
    /// Wire representation of this code
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidArgument => "INVALID_ARGUMENT",
            Self::ApiCallFailed => "API_CALL_FAILED",
            Self::DecodeError => "DECODE_ERROR",
            Self::Timeout => "TIMEOUT",
            Self::ConfigInvalid => "CONFIG_INVALID",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors surfaced by the PayPal REST client
#[derive(Debug, Error)]
pub enum PayPalError {
    /// Illegal argument combination, detected before any network call
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Non-success HTTP status, or a transport failure before any status arrived
    #[error("API call failed: {body}")]
    ApiCallFailed {
        /// HTTP status when the provider answered, `None` for transport failures
        status: Option<u16>,
        /// Raw response body (or transport error text) for diagnostics
        body: String,
    },

    /// Response body is not valid JSON or lacks required fields
    #[error("Decode error: {0}")]
    DecodeError(String),

    /// Transport timeout elapsed
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// Missing or malformed configuration value
    #[error("Configuration error: {0}")]
    Config(String),
}

impl PayPalError {
    /// Create an invalid argument error
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Create an API failure for a response that carried `status`
    #[must_use]
    pub fn api_status(status: u16, body: impl Into<String>) -> Self {
        Self::ApiCallFailed {
            status: Some(status),
            body: body.into(),
        }
    }

    /// Create an API failure for a request that never got a response
    #[must_use]
    pub fn transport(message: impl Into<String>) -> Self {
        Self::ApiCallFailed {
            status: None,
            body: message.into(),
        }
    }

    /// Create a decode error
    #[must_use]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::DecodeError(message.into())
    }

    /// Create a configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Stable code for this error
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidArgument(_) => ErrorCode::InvalidArgument,
            Self::ApiCallFailed { .. } => ErrorCode::ApiCallFailed,
            Self::DecodeError(_) => ErrorCode::DecodeError,
            Self::Timeout(_) => ErrorCode::Timeout,
            Self::Config(_) => ErrorCode::ConfigInvalid,
        }
    }

    /// HTTP status returned by the provider, if one was received
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::ApiCallFailed { status, .. } => *status,
            _ => None,
        }
    }

    /// Whether repeating the same call could succeed
    ///
    /// Timeouts, transport failures, rate limiting and 5xx responses are
    /// transient. Everything else needs a different request.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::Timeout(_) | Self::ApiCallFailed { status: None, .. } => true,
            Self::ApiCallFailed {
                status: Some(status),
                ..
            } => *status == 429 || *status >= 500,
            Self::InvalidArgument(_) | Self::DecodeError(_) | Self::Config(_) => false,
        }
    }
}

impl From<serde_json::Error> for PayPalError {
    fn from(error: serde_json::Error) -> Self {
        Self::DecodeError(error.to_string())
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, PayPalError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            PayPalError::invalid_argument("x").code(),
            ErrorCode::InvalidArgument
        );
        assert_eq!(
            PayPalError::api_status(401, "unauthorized").code(),
            ErrorCode::ApiCallFailed
        );
        assert_eq!(PayPalError::decode("x").code(), ErrorCode::DecodeError);
        assert_eq!(PayPalError::config("x").code(), ErrorCode::ConfigInvalid);
    }

    #[test]
    fn test_api_failure_display_carries_body() {
        let error = PayPalError::api_status(401, "unauthorized");
        assert_eq!(error.to_string(), "API call failed: unauthorized");
        assert_eq!(error.status(), Some(401));
    }

    #[test]
    fn test_retry_hints() {
        assert!(PayPalError::Timeout("slow".into()).is_retryable());
        assert!(PayPalError::transport("connection refused").is_retryable());
        assert!(PayPalError::api_status(503, "").is_retryable());
        assert!(PayPalError::api_status(429, "").is_retryable());
        assert!(!PayPalError::api_status(400, "").is_retryable());
        assert!(!PayPalError::invalid_argument("x").is_retryable());
    }

    #[test]
    fn test_serde_json_error_maps_to_decode() {
        let parse: Result<serde_json::Value, _> = serde_json::from_str("{not json");
        let error = PayPalError::from(parse.unwrap_err());
        assert_eq!(error.code(), ErrorCode::DecodeError);
    }

    #[test]
    fn test_error_code_serialization() {
        let json = serde_json::to_string(&ErrorCode::ApiCallFailed).unwrap();
        assert_eq!(json, "\"API_CALL_FAILED\"");
        assert_eq!(ErrorCode::Timeout.to_string(), "TIMEOUT");
    }
}
