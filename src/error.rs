//! Failure signal shared by every validator in the crate.

use thiserror::Error;

/// A rejected input.
///
/// Carries the human-readable message a caller is expected to surface next
/// to the offending form field. Validators reject immediately on the first
/// violation; there is no partial success and no warning level.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The rejection message.
    pub fn message(&self) -> &str {
        &self.message
    }
}
