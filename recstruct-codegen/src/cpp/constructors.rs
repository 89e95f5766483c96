//! Aggregate constructor generation.
//!
//! The constructor takes the record's full field list. Fields inherited from
//! the base are forwarded to the base constructor; the rest are initialized
//! directly:
//!
//! ```text
//! Derived(a:int, b:int, c:int) : Base(a, b), c(c) {}
//! ```

use crate::config::GeneratorConfig;
use recstruct_schema::{RecordId, ResolvedFile};

/// Generator for aggregate constructors.
pub struct ConstructorGenerator<'a> {
    file: &'a ResolvedFile,
    config: &'a GeneratorConfig,
}

impl<'a> ConstructorGenerator<'a> {
    /// Creates a new constructor generator.
    #[must_use]
    pub fn new(file: &'a ResolvedFile, config: &'a GeneratorConfig) -> Self {
        Self { file, config }
    }

    /// Generates the constructor line for a record.
    #[must_use]
    pub fn generate(&self, id: RecordId) -> String {
        let record = self.file.record(id);
        let all_fields = self.file.all_fields(id);
        let base_names: Vec<&str> = self
            .file
            .base_fields(id)
            .iter()
            .map(|f| f.name.as_str())
            .collect();

        let params: Vec<String> = all_fields
            .iter()
            .map(|f| format!("{}:{}", f.name, f.type_name))
            .collect();

        let mut initializers = Vec::new();
        if let Some(base) = self.file.base(id) {
            initializers.push(format!("{}({})", base.name, base_names.join(", ")));
        }
        initializers.extend(
            all_fields
                .iter()
                .filter(|f| !base_names.contains(&f.name.as_str()))
                .map(|f| format!("{0}({0})", f.name)),
        );

        let mut output = String::new();
        output.push_str(&self.config.indent_str());
        output.push_str(&format!("{}({})", record.name, params.join(", ")));
        if !initializers.is_empty() {
            output.push_str(&format!(" : {}", initializers.join(", ")));
        }
        output.push_str(" {}\n");

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use recstruct_schema::parse_file;

    fn resolve(xml: &str) -> ResolvedFile {
        ResolvedFile::resolve(parse_file(xml).expect("Failed to parse")).expect("Failed to resolve")
    }

    fn constructor_for(file: &ResolvedFile, name: &str) -> String {
        let config = GeneratorConfig::default();
        ConstructorGenerator::new(file, &config).generate(file.get(name).unwrap())
    }

    const SCHEMA: &str = r#"<File><Namespace name="a.b.c">
    <Record name="BaseRecord">
        <Field name="field1" type="int"/>
        <Field name="field2" type="std::string"/>
    </Record>
    <Record name="DerivedRecord" extends="BaseRecord">
        <Field name="field3" type="int"/>
        <Field name="field4" type="const char*"/>
    </Record>
    <Record name="Marker" extends="DerivedRecord"/>
    <Record name="Empty"/>
    <Record name="FromEmpty" extends="Empty">
        <Field name="only" type="bool"/>
    </Record>
</Namespace></File>"#;

    #[test]
    fn test_root_constructor_initializes_all_fields() {
        let file = resolve(SCHEMA);
        assert_eq!(
            constructor_for(&file, "BaseRecord"),
            "    BaseRecord(field1:int, field2:std::string) : field1(field1), field2(field2) {}\n"
        );
    }

    #[test]
    fn test_derived_constructor_delegates_inherited_fields() {
        let file = resolve(SCHEMA);
        assert_eq!(
            constructor_for(&file, "DerivedRecord"),
            "    DerivedRecord(field1:int, field2:std::string, field3:int, field4:const char*) : BaseRecord(field1, field2), field3(field3), field4(field4) {}\n"
        );
    }

    #[test]
    fn test_derived_without_own_fields_has_no_trailing_comma() {
        let file = resolve(SCHEMA);
        assert_eq!(
            constructor_for(&file, "Marker"),
            "    Marker(field1:int, field2:std::string, field3:int, field4:const char*) : DerivedRecord(field1, field2, field3, field4) {}\n"
        );
    }

    #[test]
    fn test_empty_root_constructor() {
        let file = resolve(SCHEMA);
        assert_eq!(constructor_for(&file, "Empty"), "    Empty() {}\n");
    }

    #[test]
    fn test_base_without_fields_still_delegates() {
        let file = resolve(SCHEMA);
        assert_eq!(
            constructor_for(&file, "FromEmpty"),
            "    FromEmpty(only:bool) : Empty(), only(only) {}\n"
        );
    }

    #[test]
    fn test_shadowed_field_not_initialized_directly() {
        let file = resolve(
            r#"<File><Namespace name="n">
    <Record name="A"><Field name="x" type="int"/></Record>
    <Record name="B" extends="A"><Field name="x" type="long"/><Field name="y" type="int"/></Record>
</Namespace></File>"#,
        );
        assert_eq!(
            constructor_for(&file, "B"),
            "    B(x:int, x:long, y:int) : A(x), y(y) {}\n"
        );
    }

    #[test]
    fn test_empty_type_passes_through() {
        let file = resolve(
            r#"<File><Namespace name="n"><Record name="R"><Field name="v" type=""/></Record></Namespace></File>"#,
        );
        assert_eq!(constructor_for(&file, "R"), "    R(v:) : v(v) {}\n");
    }

    #[test]
    fn test_custom_indent() {
        let file = resolve(SCHEMA);
        let config = GeneratorConfig::new().indent(2);
        let output =
            ConstructorGenerator::new(&file, &config).generate(file.get("Empty").unwrap());
        assert_eq!(output, "  Empty() {}\n");
    }
}
