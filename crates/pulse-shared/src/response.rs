//! Structured error body returned by every failing endpoint.

use serde::{Deserialize, Serialize};

/// Wire shape of an API error: a stable machine-readable `kind`, a
/// human-readable `message`, and the HTTP status for clients that cannot
/// see transport metadata. Never carries stack traces or internal ids.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub kind: String,
    pub message: String,
    pub status: u16,
}

impl ErrorBody {
    pub fn new(status: u16, kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            message: message.into(),
            status,
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(400, "validation", message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(401, "unauthorized", message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(404, "not_found", message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(409, "conflict", message)
    }

    pub fn internal() -> Self {
        Self::new(500, "internal", "Internal server error")
    }
}
