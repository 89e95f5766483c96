//! Main code generator.

use crate::config::GeneratorConfig;
use crate::cpp::{IncludeGenerator, RecordGenerator};
use recstruct_schema::ResolvedFile;
use std::io::Write;
use tracing::debug;

/// Main code generator that produces the complete C++ source.
pub struct Generator<'a> {
    file: &'a ResolvedFile,
    config: GeneratorConfig,
}

impl<'a> Generator<'a> {
    /// Creates a new generator with the default configuration.
    #[must_use]
    pub fn new(file: &'a ResolvedFile) -> Self {
        Self::with_config(file, GeneratorConfig::default())
    }

    /// Creates a new generator with the given configuration.
    #[must_use]
    pub fn with_config(file: &'a ResolvedFile, config: GeneratorConfig) -> Self {
        Self { file, config }
    }

    /// Generates the complete source text.
    #[must_use]
    pub fn generate(&self) -> String {
        let mut output = String::new();

        output.push_str(&IncludeGenerator::new(self.file).generate());

        let records = RecordGenerator::new(self.file, &self.config);
        for namespace in &self.file.namespaces {
            output.push_str(&format!("namespace {} {{\n", namespace.name));
            for id in &namespace.records {
                output.push_str(&records.generate(*id));
            }
            output.push_str("}\n");
        }

        debug!(
            bytes = output.len(),
            namespaces = self.file.namespaces.len(),
            records = self.file.len(),
            constructors = self.config.constructors,
            "generated C++ source"
        );

        output
    }

    /// Generates the source and writes it to `out` in one piece.
    ///
    /// # Errors
    /// Returns the underlying I/O error if writing or flushing fails.
    pub fn write_to<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        out.write_all(self.generate().as_bytes())?;
        out.flush()
    }
}
