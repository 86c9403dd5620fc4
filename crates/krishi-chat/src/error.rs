//! Error types for the conversational interface.
//!
//! The resolver itself is total and has no error path; everything here
//! concerns session lifecycle.

use krishi_core::error::KrishiError;

/// Errors from the chat session manager.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("session is closed")]
    SessionClosed,
    #[error("invalid reply delay range: min {min}ms exceeds max {max}ms")]
    InvalidDelayRange { min: u64, max: u64 },
    #[error("session state error: {0}")]
    State(String),
}

impl From<ChatError> for KrishiError {
    fn from(err: ChatError) -> Self {
        KrishiError::Chat(err.to_string())
    }
}
