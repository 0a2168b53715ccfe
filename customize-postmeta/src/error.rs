//! Error types and error handling

use thiserror::Error;

/// Result alias for customizer field operations
pub type CustomizeResult<T> = Result<T, CustomizeError>;

/// Errors raised by field controllers and the field registry
#[derive(Debug, Error)]
pub enum CustomizeError {
    /// Strict validation rejected a page template candidate.
    ///
    /// The message is the localized, user-facing rejection string.
    #[error("{message}")]
    InvalidPageTemplate {
        /// Localized user-facing message
        message: String,
    },

    /// A controller was already registered for this meta key
    #[error("a field controller is already registered for meta key `{meta_key}`")]
    DuplicateField {
        /// Meta key of the rejected registration
        meta_key: String,
    },

    /// Serializing the script export object failed
    #[error("failed to serialize script exports: {0}")]
    Export(#[from] serde_json::Error),
}
