// ── Core error types ──
//
// The interaction path never returns errors; a failed fetch simply
// resolves to an empty pool. `FetchError` is the contract an async option
// source uses to report why it produced nothing.

use thiserror::Error;

/// Failure reported by an async option source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Option source unavailable: {message}")]
    Unavailable { message: String },

    #[error("Option request timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl FetchError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }
}
