/*
[INPUT]:  Error sources (HTTP, API payloads, auth, webhooks)
[OUTPUT]: Structured error types with context and retry hints
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

use crate::types::{ApiErrorDetail, ErrorsEnvelope};

/// Main error type for the Ringline SDK
#[derive(Error, Debug)]
pub enum RinglineError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response
    #[error("API error (status {status}): {}", .errors.first().map(|e| e.title.as_str()).unwrap_or("unknown"))]
    Api {
        status: u16,
        errors: Vec<ApiErrorDetail>,
    },

    /// Authentication failed
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    /// OAuth access token is expired
    #[error("Access token expired, please re-authenticate")]
    TokenExpired,

    /// Webhook signature does not match the payload
    #[error("Invalid webhook signature")]
    InvalidSignature,

    /// Webhook timestamp is outside the accepted tolerance
    #[error("Webhook timestamp outside tolerance ({age_secs}s old)")]
    StaleWebhook { age_secs: i64 },

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Invalid response from server
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded, retry after {retry_after}s")]
    RateLimit { retry_after: u64 },

    /// Connection timeout
    #[error("Connection timeout after {duration}s")]
    Timeout { duration: u64 },
}

impl RinglineError {
    /// Check if the error is retryable
    pub fn is_retryable(&self) -> bool {
        match self {
            RinglineError::Http(_)
            | RinglineError::RateLimit { .. }
            | RinglineError::Timeout { .. }
            | RinglineError::InvalidResponse(_) => true,
            RinglineError::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Get retry delay in seconds (if retryable)
    pub fn retry_delay(&self) -> Option<u64> {
        match self {
            RinglineError::RateLimit { retry_after } => Some(*retry_after),
            RinglineError::Timeout { .. } => Some(1),
            _ => None,
        }
    }

    /// Check if error indicates authentication failure
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            RinglineError::Authentication { .. }
                | RinglineError::TokenExpired
                | RinglineError::InvalidSignature
        )
    }

    /// API error codes carried in the response payload, if any
    pub fn error_codes(&self) -> Vec<&str> {
        match self {
            RinglineError::Api { errors, .. } => {
                errors.iter().map(|e| e.code.as_str()).collect()
            }
            _ => Vec::new(),
        }
    }

    /// Create an API error from a status code and a plain message
    pub fn api_error(status: StatusCode, message: impl Into<String>) -> Self {
        RinglineError::Api {
            status: status.as_u16(),
            errors: vec![ApiErrorDetail {
                code: status.as_u16().to_string(),
                title: message.into(),
                detail: None,
                source: None,
                meta: None,
            }],
        }
    }

    /// Map a non-2xx response body to the right error variant.
    ///
    /// Understands the documented `{"errors": [...]}` payload and degrades to
    /// a synthetic single-entry error when the body is something else.
    pub(crate) fn from_response(status: StatusCode, body: &str) -> Self {
        let errors = serde_json::from_str::<ErrorsEnvelope>(body)
            .map(|envelope| envelope.errors)
            .unwrap_or_default();

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            let message = errors
                .first()
                .map(|e| e.title.clone())
                .unwrap_or_else(|| format!("status {}", status.as_u16()));
            return RinglineError::Authentication { message };
        }

        if errors.is_empty() {
            let snippet: String = body.chars().take(200).collect();
            return RinglineError::api_error(status, snippet.trim().to_string());
        }

        RinglineError::Api {
            status: status.as_u16(),
            errors,
        }
    }
}

/// Result type alias for Ringline operations
pub type Result<T> = std::result::Result<T, RinglineError>;
