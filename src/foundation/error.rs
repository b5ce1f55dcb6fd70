/// Convenience result type used across the walkthrough core.
pub type WalkthroughResult<T> = Result<T, WalkthroughError>;

/// Top-level error taxonomy.
///
/// The core is pure: tokenization never fails and an idle dispatch pass is not an error. What
/// remains are contract violations caught at construction boundaries, plus JSON export.
#[derive(thiserror::Error, Debug)]
pub enum WalkthroughError {
    /// Invalid caller-provided data (malformed interleavings, zero line numbers, duplicate phases).
    #[error("validation error: {0}")]
    Validation(String),

    /// JSON export of scene or excerpt state failed.
    #[error("serialization error: {0}")]
    Serde(String),
}

impl WalkthroughError {
    /// Build a [`WalkthroughError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`WalkthroughError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for WalkthroughError {
    fn from(e: serde_json::Error) -> Self {
        Self::serde(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
