//! Error types for reading parser output.

use thiserror::Error;

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors raised while decoding or validating a parse tree.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The node `type` tag is not one of the known node kinds.
    #[error("Unknown node type: {tag}")]
    UnknownNodeType { tag: String },

    /// The parser output could not be decoded.
    #[cfg(feature = "serde")]
    #[error("Invalid parse data: {0}")]
    Json(#[from] serde_json::Error),
}
