//! Input format selection.
//!
//! Every front-end converges on the same [`File`] model. Only the XML
//! front-end exists today; selecting anything else fails loudly instead of
//! yielding an empty schema.

use crate::error::ParseError;
use crate::model::File;
use crate::parser::parse_file;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// Schema source syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFormat {
    /// Attribute-based XML markup.
    #[default]
    Xml,
    /// Brace-based declaration syntax (`namespace a.b { struct R : public B { ... } }`).
    /// Recognised but not implemented.
    Cpp,
}

impl InputFormat {
    /// Looks up a format by its command-line name.
    ///
    /// # Errors
    /// Returns `ParseError::UnsupportedFormat` for unknown names.
    pub fn from_name(name: &str) -> Result<Self, ParseError> {
        match name {
            "xml" => Ok(Self::Xml),
            "cpp" => Ok(Self::Cpp),
            other => Err(ParseError::unsupported(other)),
        }
    }

    /// Returns the command-line name of the format.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Xml => "xml",
            Self::Cpp => "cpp",
        }
    }

    /// Returns true if a loader exists for this format.
    #[must_use]
    pub const fn is_supported(self) -> bool {
        matches!(self, Self::Xml)
    }
}

impl FromStr for InputFormat {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Loads a schema from source text in the given format.
///
/// # Errors
/// Returns `ParseError` if the source is malformed or the format has no loader.
pub fn load_str(source: &str, format: InputFormat) -> Result<File, ParseError> {
    match format {
        InputFormat::Xml => parse_file(source),
        InputFormat::Cpp => Err(ParseError::unsupported(format.name())),
    }
}

/// Reads and loads a schema file in the given format.
///
/// The format is checked before the file is opened.
///
/// # Errors
/// Returns `ParseError` if the file cannot be read, is not UTF-8, is
/// malformed, or the format has no loader.
pub fn load_path(path: &Path, format: InputFormat) -> Result<File, ParseError> {
    if !format.is_supported() {
        return Err(ParseError::unsupported(format.name()));
    }
    debug!(path = %path.display(), %format, "loading schema");
    let bytes = std::fs::read(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_str(std::str::from_utf8(&bytes)?, format)
}
