//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types.
//!
//! ```ignore
//! use recstruct::prelude::*;
//! ```

// Schema types
pub use recstruct_schema::{
    Field, File, InputFormat, Namespace, ParseError, Record, RecordId, ResolvedFile,
    ResolvedRecord, SchemaError,
};

// Codegen types
pub use recstruct_codegen::{CodegenError, Generator, GeneratorConfig};
