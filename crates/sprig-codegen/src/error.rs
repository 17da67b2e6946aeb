//! Error types for code generation.

use sprig_core::CoreError;
use thiserror::Error;

/// Result type alias for codegen operations.
pub type Result<T> = std::result::Result<T, CodegenError>;

/// Errors that can occur during code generation.
///
/// Every variant is an internal-consistency failure: generation is a pure
/// function of its inputs, so retrying never helps.
#[derive(Error, Debug)]
pub enum CodegenError {
    /// Invalid parser output.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// An import flag outside the known framework schema.
    #[error("Unknown import '{symbol}' from module '{module}'")]
    UnknownImport {
        module: String,
        symbol: String,
    },

    /// A style declaration that cannot be emitted.
    #[error("Invalid style '{property}' on node '{node}': {message}")]
    InvalidStyle {
        node: String,
        property: String,
        message: String,
    },

    /// Template rendering error.
    #[error("Template error: {0}")]
    TemplateError(#[from] handlebars::RenderError),

    /// Invalid template.
    #[error("Invalid template: {0}")]
    InvalidTemplate(#[from] handlebars::TemplateError),
}
