//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Schema loading error.
    #[error("schema parse error: {0}")]
    Parse(#[from] recstruct_schema::ParseError),

    /// Record resolution error.
    #[error("schema error: {0}")]
    Schema(#[from] recstruct_schema::SchemaError),
}

impl CodegenError {
    /// Short name of the error category, used in diagnostics.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Parse(e) => e.kind(),
            Self::Schema(e) => e.kind(),
        }
    }
}
