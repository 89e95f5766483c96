//! Record schema model.
//!
//! This module contains the data structures produced by the loaders: a
//! [`File`] of includes and namespaces, each namespace holding records and
//! each record holding fields. Base references are kept as raw names; the
//! [`crate::resolve`] module links them.

/// Complete loaded schema document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct File {
    /// Include names, in declaration order.
    pub includes: Vec<String>,
    /// Namespaces, in declaration order.
    pub namespaces: Vec<Namespace>,
}

impl File {
    /// Creates a new empty file.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an include.
    pub fn add_include(&mut self, name: impl Into<String>) {
        self.includes.push(name.into());
    }

    /// Adds a namespace.
    pub fn add_namespace(&mut self, namespace: Namespace) {
        self.namespaces.push(namespace);
    }

    /// Iterates over every record in declaration order, paired with its namespace.
    pub fn records(&self) -> impl Iterator<Item = (&Namespace, &Record)> {
        self.namespaces
            .iter()
            .flat_map(|ns| ns.records.iter().map(move |r| (ns, r)))
    }

    /// Returns the total number of records across all namespaces.
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.namespaces.iter().map(|ns| ns.records.len()).sum()
    }
}

/// Named, order-preserving group of records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespace {
    /// Dotted namespace name.
    pub name: String,
    /// Records, in declaration order.
    pub records: Vec<Record>,
}

impl Namespace {
    /// Creates a new empty namespace.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            records: Vec::new(),
        }
    }

    /// Adds a record to the namespace.
    pub fn add_record(&mut self, record: Record) {
        self.records.push(record);
    }
}

/// Record definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Record name.
    pub name: String,
    /// Name of the record this one extends, if any.
    pub base: Option<String>,
    /// Own fields, in declaration order.
    pub fields: Vec<Field>,
}

impl Record {
    /// Creates a new record with no fields.
    #[must_use]
    pub fn new(name: impl Into<String>, base: Option<String>) -> Self {
        Self {
            name: name.into(),
            base,
            fields: Vec::new(),
        }
    }

    /// Adds a field to the record.
    pub fn add_field(&mut self, field: Field) {
        self.fields.push(field);
    }
}

/// Field definition within a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Field name.
    pub name: String,
    /// Type expression, copied verbatim to the output. May be empty.
    pub type_name: String,
}

impl Field {
    /// Creates a new field definition.
    #[must_use]
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
        }
    }
}
