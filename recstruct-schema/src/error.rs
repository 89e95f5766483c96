//! Error types for schema loading and resolution.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for schema loading operations.
#[derive(Debug, Error)]
pub enum ParseError {
    /// XML parsing error.
    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Malformed attribute.
    #[error("malformed attribute: {0}")]
    Attr(#[from] quick_xml::events::attributes::AttrError),

    /// Invalid escape sequence in an attribute value.
    #[error("invalid escape sequence: {0}")]
    Escape(#[from] quick_xml::escape::EscapeError),

    /// UTF-8 decoding error.
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// Missing required attribute.
    #[error("missing required attribute '{attribute}' on element '{element}'")]
    MissingAttribute {
        /// Element name.
        element: String,
        /// Attribute name.
        attribute: String,
    },

    /// Unknown element encountered.
    #[error("unknown element '{element}' in context '{context}'")]
    UnknownElement {
        /// Element name.
        element: String,
        /// Parent context.
        context: String,
    },

    /// Invalid document structure.
    #[error("invalid schema structure: {message}")]
    InvalidStructure {
        /// Error message.
        message: String,
    },

    /// Input format with no loader behind it.
    #[error("unsupported input format '{format}'")]
    UnsupportedFormat {
        /// Requested format name.
        format: String,
    },

    /// Reading the input failed.
    #[error("cannot read '{}': {source}", path.display())]
    Io {
        /// Input path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}

/// Error type for record resolution.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Two records share a name anywhere in the file.
    #[error(
        "duplicate record name '{name}' (declared in namespace '{first_namespace}' and again in '{second_namespace}')"
    )]
    DuplicateRecordName {
        /// Record name.
        name: String,
        /// Namespace of the first declaration.
        first_namespace: String,
        /// Namespace of the conflicting declaration.
        second_namespace: String,
    },

    /// Base reference names a record that does not exist.
    #[error("record '{record}' extends undefined record '{base}'")]
    UnresolvedBase {
        /// Record carrying the reference.
        record: String,
        /// Missing base name.
        base: String,
    },

    /// Base chain loops back on itself.
    #[error("cyclic inheritance at record '{record}': {path}")]
    CyclicInheritance {
        /// First record found on the cycle.
        record: String,
        /// Rendered cycle, e.g. `A -> B -> A`.
        path: String,
    },
}

impl ParseError {
    /// Creates a missing attribute error.
    pub fn missing_attr(element: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self::MissingAttribute {
            element: element.into(),
            attribute: attribute.into(),
        }
    }

    /// Creates an unknown element error.
    pub fn unknown_element(element: impl Into<String>, context: impl Into<String>) -> Self {
        Self::UnknownElement {
            element: element.into(),
            context: context.into(),
        }
    }

    /// Creates an invalid structure error.
    pub fn structure(message: impl Into<String>) -> Self {
        Self::InvalidStructure {
            message: message.into(),
        }
    }

    /// Creates an unsupported format error.
    pub fn unsupported(format: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            format: format.into(),
        }
    }

    /// Short name of the error category, used in diagnostics.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UnsupportedFormat { .. } => "UnsupportedFormatError",
            Self::Io { .. } => "IoError",
            _ => "SchemaSyntaxError",
        }
    }
}

impl SchemaError {
    /// Short name of the error category, used in diagnostics.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::DuplicateRecordName { .. } => "DuplicateRecordNameError",
            Self::UnresolvedBase { .. } => "UnresolvedBaseError",
            Self::CyclicInheritance { .. } => "CyclicInheritanceError",
        }
    }
}
