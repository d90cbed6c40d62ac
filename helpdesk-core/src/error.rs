//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Article not found in the loaded topics
    #[error("Article not found: {0}")]
    ArticleNotFound(String),

    /// The backend answered with a failure envelope or a non-success HTTP status
    #[error("API error: {path} - {message}")]
    Api { path: String, message: String },

    /// Transport failure (connection refused, timeout, TLS...)
    #[error("Network error: {0}")]
    Network(String),

    /// serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Storage layer error (topic cache)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Invalid configuration (bad API root, ...)
    #[error("Config error: {0}")]
    Config(String),
}

impl CoreError {
    /// Whether it is expected behavior (user input, resource does not exist, etc.) is used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added. **
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::ArticleNotFound(_) | Self::Validation(_) | Self::Api { .. } => true,
            Self::Network(_) | Self::Serialization(_) | Self::Storage(_) | Self::Config(_) => {
                false
            }
        }
    }

    /// Log this error at the level matching [`Self::is_expected`].
    pub fn log(&self, context: &str) {
        if self.is_expected() {
            log::warn!("{context}: {self}");
        } else {
            log::error!("{context}: {self}");
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
