//! C++ code generation modules.

pub mod constructors;
pub mod includes;
pub mod records;

pub use constructors::ConstructorGenerator;
pub use includes::IncludeGenerator;
pub use records::RecordGenerator;
