//! # recstruct
//!
//! Generate C++ structs from declarative record schemas.
//!
//! A schema groups records into namespaces. Each record has ordered, typed
//! fields and may extend one other record. recstruct resolves the inheritance
//! chains and emits one `struct` per record, optionally with an aggregate
//! constructor that forwards inherited fields to the base constructor.
//!
//! ## Quick Start
//!
//! ```ignore
//! let xml = r#"<File>
//!     <Include name="string"/>
//!     <Namespace name="shapes">
//!         <Record name="Shape"><Field name="name" type="std::string"/></Record>
//!         <Record name="Circle" extends="Shape"><Field name="r" type="double"/></Record>
//!     </Namespace>
//! </File>"#;
//!
//! let cpp = recstruct::codegen::generate_from_xml(xml)?;
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - Record model, XML loader and resolver
//! - [`codegen`] - C++ generation from resolved schemas
//! - [`cli`] - The `recstruct` command-line pipeline

pub mod cli;
pub mod prelude;

/// Record model, loading and resolution.
pub mod schema {
    pub use recstruct_schema::*;
}

/// C++ generation from resolved schemas.
pub mod codegen {
    pub use recstruct_codegen::*;
}

// Re-export commonly used items at the crate root
pub use recstruct_codegen::{CodegenError, Generator, GeneratorConfig};
pub use recstruct_schema::{InputFormat, ResolvedFile};
