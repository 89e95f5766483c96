//! Generates C++ from the bundled sample schema and prints it.
//!
//! Run with: `cargo run --example generate`

use recstruct::prelude::*;
use std::path::Path;

fn main() -> Result<(), CodegenError> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("schemas")
        .join("records.xml");

    let file = recstruct::schema::load_path(&path, InputFormat::Xml)?;
    let resolved = ResolvedFile::resolve(file)?;

    for (id, record) in resolved.records() {
        let fields: Vec<_> = resolved
            .all_fields(id)
            .iter()
            .map(|f| f.name.as_str())
            .collect();
        println!("// {} has fields: {}", record.name, fields.join(", "));
    }

    print!("{}", Generator::new(&resolved).generate());
    Ok(())
}
