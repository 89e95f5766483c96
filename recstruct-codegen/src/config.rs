//! Generator configuration.

/// Default number of spaces before member lines.
pub const DEFAULT_INDENT: u8 = 4;

/// Widest indentation the command line accepts.
pub const MAX_INDENT: u8 = 16;

/// Options controlling the emitted C++.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Emit an aggregate constructor in every struct.
    pub constructors: bool,
    /// Spaces before field and constructor lines.
    pub indent: u8,
}

impl GeneratorConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            constructors: true,
            indent: DEFAULT_INDENT,
        }
    }

    /// Enables or disables constructor emission.
    #[must_use]
    pub fn constructors(mut self, enabled: bool) -> Self {
        self.constructors = enabled;
        self
    }

    /// Sets the member indentation width.
    #[must_use]
    pub fn indent(mut self, width: u8) -> Self {
        self.indent = width;
        self
    }

    /// Returns the indentation prefix.
    #[must_use]
    pub fn indent_str(&self) -> String {
        " ".repeat(usize::from(self.indent))
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new()
    }
}
