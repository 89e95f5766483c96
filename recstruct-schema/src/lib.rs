//! # recstruct Schema
//!
//! Record schema model, loaders and inheritance resolver.
//!
//! This crate provides:
//! - The in-memory record model (files, namespaces, records, fields)
//! - The XML front-end and input format dispatch
//! - Base-reference resolution with duplicate, undefined and cycle detection
//! - Full field list aggregation across the inheritance chain

pub mod error;
pub mod format;
pub mod model;
pub mod parser;
pub mod resolve;

pub use error::{ParseError, SchemaError};
pub use format::{InputFormat, load_path, load_str};
pub use model::{Field, File, Namespace, Record};
pub use parser::parse_file;
pub use resolve::{Ancestors, RecordId, ResolvedFile, ResolvedNamespace, ResolvedRecord};
