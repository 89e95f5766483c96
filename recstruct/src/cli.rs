//! Command-line pipeline: load, resolve, generate, write.

use anyhow::Context;
use clap::Parser;
use recstruct_codegen::config::{DEFAULT_INDENT, MAX_INDENT};
use recstruct_codegen::{CodegenError, Generator, GeneratorConfig};
use recstruct_schema::{InputFormat, ResolvedFile};
use std::io::BufWriter;
use std::path::PathBuf;
use tracing::info;

/// Generate C++ structs from a record schema.
#[derive(Parser, Debug, Clone)]
#[command(name = "recstruct", version, about)]
pub struct Cli {
    /// Schema source file
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output file (stdout if omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Input format
    #[arg(short, long, default_value = "xml")]
    pub format: String,

    /// Do not emit aggregate constructors
    #[arg(long)]
    pub no_constructors: bool,

    /// Spaces before member lines
    #[arg(
        long,
        default_value_t = DEFAULT_INDENT,
        value_parser = clap::value_parser!(u8).range(..=i64::from(MAX_INDENT))
    )]
    pub indent: u8,
}

impl Cli {
    /// Builds the generator configuration from the flags.
    #[must_use]
    pub fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig::new()
            .constructors(!self.no_constructors)
            .indent(self.indent)
    }
}

/// Loads and resolves the schema named by `cli`.
///
/// # Errors
/// Returns `CodegenError` if the format is unsupported, the input cannot be
/// read, or loading or resolution fails.
pub fn resolve_input(cli: &Cli) -> Result<ResolvedFile, CodegenError> {
    let format = InputFormat::from_name(&cli.format)?;
    let file = recstruct_schema::load_path(&cli.input, format)?;
    Ok(ResolvedFile::resolve(file)?)
}

/// Loads, resolves and renders the schema named by `cli`.
///
/// Nothing is written anywhere; a failure leaves no partial output.
///
/// # Errors
/// Returns `CodegenError` if the format is unsupported, the input cannot be
/// read, or loading or resolution fails.
pub fn render(cli: &Cli) -> Result<String, CodegenError> {
    let resolved = resolve_input(cli)?;
    Ok(Generator::with_config(&resolved, cli.generator_config()).generate())
}

/// Runs the whole pipeline and writes the result to the chosen destination.
///
/// The destination is only opened once the schema has resolved, and
/// generation itself cannot fail, so a rejected schema leaves no output.
///
/// # Errors
/// Returns an error if loading or resolution fails or the output cannot be
/// written.
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let resolved = resolve_input(cli)?;
    let generator = Generator::with_config(&resolved, cli.generator_config());

    match &cli.output {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("cannot create '{}'", path.display()))?;
            generator
                .write_to(&mut BufWriter::new(file))
                .with_context(|| format!("cannot write '{}'", path.display()))?;
        }
        None => generator
            .write_to(&mut std::io::stdout().lock())
            .context("cannot write to stdout")?,
    }

    info!(input = %cli.input.display(), records = resolved.len(), "generation complete");
    Ok(())
}

/// Returns the diagnostic category of a pipeline error.
#[must_use]
pub fn error_kind(err: &anyhow::Error) -> &'static str {
    err.downcast_ref::<CodegenError>()
        .map_or("IoError", CodegenError::kind)
}

/// Renders a pipeline error for the terminal.
///
/// Library errors already embed their cause in the message, so only output
/// errors, which carry context, are printed with their source chain.
#[must_use]
pub fn error_message(err: &anyhow::Error) -> String {
    match err.downcast_ref::<CodegenError>() {
        Some(inner) => inner.to_string(),
        None => format!("{err:#}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHEMA: &str = r#"<File><Include name="string"/><Namespace name="n">
    <Record name="Base"><Field name="a" type="int"/></Record>
    <Record name="Child" extends="Base"><Field name="b" type="std::string"/></Record>
</Namespace></File>"#;

    fn cli_for(input: PathBuf, output: Option<PathBuf>, format: &str) -> Cli {
        Cli {
            input,
            output,
            format: format.to_string(),
            no_constructors: false,
            indent: DEFAULT_INDENT,
        }
    }

    fn schema_file(dir: &std::path::Path, xml: &str) -> PathBuf {
        let path = dir.join("schema.xml");
        std::fs::write(&path, xml).expect("Failed to write schema");
        path
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["recstruct", "-i", "schema.xml"]).expect("Failed to parse");
        assert_eq!(cli.input, PathBuf::from("schema.xml"));
        assert_eq!(cli.output, None);
        assert_eq!(cli.format, "xml");
        assert!(!cli.no_constructors);
        assert_eq!(cli.generator_config(), GeneratorConfig::default());
    }

    #[test]
    fn test_cli_long_flags() {
        let cli = Cli::try_parse_from([
            "recstruct",
            "--input",
            "in.xml",
            "--output",
            "out.h",
            "--format",
            "cpp",
            "--no-constructors",
            "--indent",
            "2",
        ])
        .expect("Failed to parse");

        assert_eq!(cli.output, Some(PathBuf::from("out.h")));
        assert_eq!(cli.format, "cpp");
        assert!(!cli.generator_config().constructors);
        assert_eq!(cli.generator_config().indent, 2);
    }

    #[test]
    fn test_cli_indent_is_bounded() {
        let max = MAX_INDENT.to_string();
        let cli = Cli::try_parse_from(["recstruct", "-i", "in.xml", "--indent", max.as_str()])
            .expect("Failed to parse");
        assert_eq!(cli.generator_config().indent, MAX_INDENT);

        for width in ["17", "256", "18446744073709551615", "-1"] {
            let err = Cli::try_parse_from(["recstruct", "-i", "in.xml", "--indent", width])
                .unwrap_err();
            assert_eq!(err.exit_code(), 2);
        }
    }

    #[test]
    fn test_cli_input_required() {
        assert!(Cli::try_parse_from(["recstruct", "-o", "out.h"]).is_err());
    }

    #[test]
    fn test_render() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let cli = cli_for(schema_file(dir.path(), SCHEMA), None, "xml");

        let output = render(&cli).expect("Failed to render");
        assert!(output.contains("struct Child : public Base {\n"));
        assert!(output.contains("    Child(a:int, b:std::string) : Base(a), b(b) {}\n"));
    }

    #[test]
    fn test_run_writes_output_file() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let out = dir.path().join("out.h");
        let mut cli = cli_for(schema_file(dir.path(), SCHEMA), Some(out.clone()), "xml");
        cli.no_constructors = true;

        run(&cli).expect("Failed to run");
        let written = std::fs::read_to_string(&out).expect("Failed to read output");
        assert_eq!(written, render(&cli).unwrap());
        assert!(!written.contains("Base("));
    }

    #[test]
    fn test_run_failure_writes_nothing() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let out = dir.path().join("out.h");
        let input = schema_file(
            dir.path(),
            r#"<File><Namespace name="n"><Record name="A" extends="A"/></Namespace></File>"#,
        );
        let cli = cli_for(input, Some(out.clone()), "xml");

        let err = run(&cli).unwrap_err();
        assert_eq!(error_kind(&err), "CyclicInheritanceError");
        assert_eq!(
            error_message(&err),
            "schema error: cyclic inheritance at record 'A': A -> A"
        );
        assert!(!out.exists());
    }

    #[test]
    fn test_unknown_format_kind() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let cli = cli_for(schema_file(dir.path(), SCHEMA), None, "yaml");

        let err = run(&cli).unwrap_err();
        assert_eq!(error_kind(&err), "UnsupportedFormatError");
    }

    #[test]
    fn test_output_error_kind() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let out = dir.path().join("missing").join("out.h");
        let cli = cli_for(schema_file(dir.path(), SCHEMA), Some(out), "xml");

        let err = run(&cli).unwrap_err();
        assert_eq!(error_kind(&err), "IoError");
        assert!(error_message(&err).starts_with("cannot create"));
    }
}
