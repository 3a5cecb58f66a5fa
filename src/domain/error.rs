//! Domain Layer - Error Taxonomy
//!
//! Normalizes raw backend failures into the small set of error kinds the
//! controllers care about. Every surfaced error is user-retryable; nothing
//! here is treated as fatal.

use thiserror::Error;

/// Common result type for backend operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors produced while talking to the backend
///
/// Partial bulk failures are deliberately NOT an error variant: a fallback
/// loop reports an aggregate [`BulkReport`](crate::domain::BulkReport) and
/// never throws out of the loop.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Network/transport failure, no HTTP response was received
    #[error("{message}")]
    Fetch { message: String },
    /// 4xx response with a structured message body
    #[error("{message}")]
    Validation { status: u16, message: String },
    /// 401/403; session refresh is the HTTP-client collaborator's job
    #[error("authentication required (HTTP {status})")]
    Auth { status: u16 },
    /// 5xx or any other non-success response
    #[error("{message}")]
    Server { status: u16, message: String },
}

impl ApiError {
    /// Classify a non-success HTTP response into an error variant
    ///
    /// `body` is the raw response body; the human-readable message is derived
    /// via [`normalize_message`].
    pub fn from_response(status: u16, reason: Option<&str>, body: &str) -> Self {
        match status {
            401 | 403 => ApiError::Auth { status },
            400..=499 => ApiError::Validation {
                status,
                message: normalize_message(status, reason, body),
            },
            _ => ApiError::Server {
                status,
                message: normalize_message(status, reason, body),
            },
        }
    }

    /// HTTP status code, if one was received
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Fetch { .. } => None,
            ApiError::Validation { status, .. }
            | ApiError::Auth { status }
            | ApiError::Server { status, .. } => Some(*status),
        }
    }
}

/// Build one human-readable message from a raw error response
///
/// Preference order: structured `message` field, structured `error` field,
/// HTTP status reason, literal "Unknown error". The status code is always
/// appended so support tickets can quote it.
pub fn normalize_message(status: u16, reason: Option<&str>, body: &str) -> String {
    let text = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("message")
                .or_else(|| v.get("error"))
                .and_then(|m| m.as_str().map(str::to_string))
        })
        .or_else(|| reason.filter(|r| !r.is_empty()).map(str::to_string))
        .unwrap_or_else(|| "Unknown error".to_string());
    format!("{} (HTTP {})", text, status)
}
