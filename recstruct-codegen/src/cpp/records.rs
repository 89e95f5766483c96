//! Struct declaration generation.

use crate::config::GeneratorConfig;
use crate::cpp::constructors::ConstructorGenerator;
use recstruct_schema::{RecordId, ResolvedFile};

/// Generator for record struct blocks.
pub struct RecordGenerator<'a> {
    file: &'a ResolvedFile,
    config: &'a GeneratorConfig,
}

impl<'a> RecordGenerator<'a> {
    /// Creates a new record generator.
    #[must_use]
    pub fn new(file: &'a ResolvedFile, config: &'a GeneratorConfig) -> Self {
        Self { file, config }
    }

    /// Generates the struct block for a record.
    #[must_use]
    pub fn generate(&self, id: RecordId) -> String {
        let mut output = String::new();
        let record = self.file.record(id);
        let indent = self.config.indent_str();

        match self.file.base(id) {
            Some(base) => {
                output.push_str(&format!("struct {} : public {} {{\n", record.name, base.name))
            }
            None => output.push_str(&format!("struct {} {{\n", record.name)),
        }

        // Own fields only; inherited ones live in the base.
        for field in &record.fields {
            output.push_str(&format!("{}{} {};\n", indent, field.type_name, field.name));
        }

        if self.config.constructors {
            output.push_str(&ConstructorGenerator::new(self.file, self.config).generate(id));
        }

        output.push_str("};\n");

        output
    }
}
