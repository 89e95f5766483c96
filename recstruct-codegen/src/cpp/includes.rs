//! Include directive generation.

use recstruct_schema::ResolvedFile;

/// Generator for `#include` directives.
pub struct IncludeGenerator<'a> {
    file: &'a ResolvedFile,
}

impl<'a> IncludeGenerator<'a> {
    /// Creates a new include generator.
    #[must_use]
    pub fn new(file: &'a ResolvedFile) -> Self {
        Self { file }
    }

    /// Generates one directive per include, in declaration order.
    #[must_use]
    pub fn generate(&self) -> String {
        let mut output = String::new();

        for include in &self.file.includes {
            output.push_str(&format!("#include <{}>\n", include));
        }

        output
    }
}
