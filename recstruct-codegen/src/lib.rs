//! # recstruct Codegen
//!
//! C++ struct generation from record schemas.
//!
//! This crate provides:
//! - Include directive and namespace block generation
//! - Struct declarations with single inheritance
//! - Aggregate constructors forwarding inherited fields to the base

pub mod config;
pub mod cpp;
pub mod error;
pub mod generator;

pub use config::GeneratorConfig;
pub use error::CodegenError;
pub use generator::Generator;

use recstruct_schema::{InputFormat, ResolvedFile};

/// Generates C++ code from an XML record schema string.
///
/// # Arguments
/// * `xml` - XML schema content
///
/// # Returns
/// Generated C++ code as a string.
///
/// # Errors
/// Returns `CodegenError` if loading or resolution fails.
pub fn generate_from_xml(xml: &str) -> Result<String, CodegenError> {
    generate_with(xml, InputFormat::Xml, GeneratorConfig::default())
}

/// Generates C++ code from an XML record schema file.
///
/// # Arguments
/// * `path` - Path to the XML schema file
///
/// # Returns
/// Generated C++ code as a string.
///
/// # Errors
/// Returns `CodegenError` if reading, loading, or resolution fails.
pub fn generate_from_file(path: &std::path::Path) -> Result<String, CodegenError> {
    let file = recstruct_schema::load_path(path, InputFormat::Xml)?;
    let resolved = ResolvedFile::resolve(file)?;
    Ok(Generator::new(&resolved).generate())
}

/// Generates C++ code from schema source in any supported format.
///
/// # Errors
/// Returns `CodegenError` if the format is unsupported or loading or
/// resolution fails.
pub fn generate_with(
    source: &str,
    format: InputFormat,
    config: GeneratorConfig,
) -> Result<String, CodegenError> {
    let file = recstruct_schema::load_str(source, format)?;
    let resolved = ResolvedFile::resolve(file)?;
    Ok(Generator::with_config(&resolved, config).generate())
}
