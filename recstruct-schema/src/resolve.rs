//! Record resolution.
//!
//! This module turns a loaded [`File`] into a [`ResolvedFile`]: an arena of
//! records addressed by [`RecordId`], a global name index, and base links
//! checked for existence and cycles. Resolution runs after the whole document
//! is loaded, so a record may extend a base declared further down the file.

use crate::error::SchemaError;
use crate::model::{Field, File};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use tracing::{debug, trace};

/// Index of a record inside a [`ResolvedFile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(usize);

impl RecordId {
    /// Returns the arena index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Record with its base reference linked.
#[derive(Debug, Clone)]
pub struct ResolvedRecord {
    /// Record name.
    pub name: String,
    /// Name of the enclosing namespace.
    pub namespace: String,
    /// Resolved base record.
    pub base: Option<RecordId>,
    /// Own fields, in declaration order.
    pub fields: Vec<Field>,
}

/// Namespace listing its records by id.
#[derive(Debug, Clone)]
pub struct ResolvedNamespace {
    /// Dotted namespace name.
    pub name: String,
    /// Records in declaration order.
    pub records: Vec<RecordId>,
}

/// Resolved schema ready for code generation.
#[derive(Debug, Clone)]
pub struct ResolvedFile {
    /// Include names, in declaration order.
    pub includes: Vec<String>,
    /// Namespaces, in declaration order.
    pub namespaces: Vec<ResolvedNamespace>,
    records: Vec<ResolvedRecord>,
    records_by_name: HashMap<String, RecordId>,
}

impl ResolvedFile {
    /// Resolves a loaded file.
    ///
    /// # Errors
    /// Returns `SchemaError::DuplicateRecordName` if two records share a name,
    /// `SchemaError::UnresolvedBase` if a base reference names no record, and
    /// `SchemaError::CyclicInheritance` if a base chain loops.
    pub fn resolve(file: File) -> Result<Self, SchemaError> {
        let mut records: Vec<ResolvedRecord> = Vec::with_capacity(file.record_count());
        let mut records_by_name: HashMap<String, RecordId> = HashMap::new();
        let mut base_names: Vec<Option<String>> = Vec::with_capacity(file.record_count());
        let mut namespaces = Vec::with_capacity(file.namespaces.len());

        for ns in file.namespaces {
            let mut ids = Vec::with_capacity(ns.records.len());
            for record in ns.records {
                let id = RecordId(records.len());
                match records_by_name.entry(record.name.clone()) {
                    Entry::Occupied(existing) => {
                        let first = &records[existing.get().index()];
                        return Err(SchemaError::DuplicateRecordName {
                            name: record.name,
                            first_namespace: first.namespace.clone(),
                            second_namespace: ns.name,
                        });
                    }
                    Entry::Vacant(slot) => {
                        slot.insert(id);
                    }
                }
                base_names.push(record.base);
                records.push(ResolvedRecord {
                    name: record.name,
                    namespace: ns.name.clone(),
                    base: None,
                    fields: record.fields,
                });
                ids.push(id);
            }
            namespaces.push(ResolvedNamespace {
                name: ns.name,
                records: ids,
            });
        }

        for (record, base_name) in records.iter_mut().zip(base_names) {
            let Some(base_name) = base_name else {
                continue;
            };
            let base = records_by_name.get(&base_name).copied().ok_or_else(|| {
                SchemaError::UnresolvedBase {
                    record: record.name.clone(),
                    base: base_name.clone(),
                }
            })?;
            trace!(record = %record.name, base = %base_name, "linked base record");
            record.base = Some(base);
        }

        let resolved = Self {
            includes: file.includes,
            namespaces,
            records,
            records_by_name,
        };
        resolved.check_cycles()?;

        debug!(
            records = resolved.records.len(),
            derived = resolved.records.iter().filter(|r| r.base.is_some()).count(),
            "resolved schema"
        );

        Ok(resolved)
    }

    /// Rejects any base chain that revisits a record.
    fn check_cycles(&self) -> Result<(), SchemaError> {
        #[derive(Clone, Copy)]
        enum Mark {
            Unvisited,
            OnPath,
            Done,
        }

        let mut marks = vec![Mark::Unvisited; self.records.len()];
        let mut path: Vec<RecordId> = Vec::new();

        for start in 0..self.records.len() {
            let mut current = Some(RecordId(start));
            while let Some(id) = current {
                match marks[id.index()] {
                    Mark::Done => break,
                    Mark::OnPath => {
                        let from = path.iter().position(|p| *p == id).unwrap_or(0);
                        let mut names: Vec<&str> = path[from..]
                            .iter()
                            .map(|p| self.records[p.index()].name.as_str())
                            .collect();
                        names.push(&self.records[id.index()].name);
                        return Err(SchemaError::CyclicInheritance {
                            record: self.records[id.index()].name.clone(),
                            path: names.join(" -> "),
                        });
                    }
                    Mark::Unvisited => {
                        marks[id.index()] = Mark::OnPath;
                        path.push(id);
                        current = self.records[id.index()].base;
                    }
                }
            }
            for id in path.drain(..) {
                marks[id.index()] = Mark::Done;
            }
        }

        Ok(())
    }

    /// Looks up a record id by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<RecordId> {
        self.records_by_name.get(name).copied()
    }

    /// Returns the record with the given id.
    ///
    /// # Panics
    /// Panics if the id does not belong to this file.
    #[must_use]
    pub fn record(&self, id: RecordId) -> &ResolvedRecord {
        &self.records[id.index()]
    }

    /// Looks up a record by name.
    #[must_use]
    pub fn record_by_name(&self, name: &str) -> Option<&ResolvedRecord> {
        self.get(name).map(|id| self.record(id))
    }

    /// Iterates over all records in declaration order.
    pub fn records(&self) -> impl Iterator<Item = (RecordId, &ResolvedRecord)> {
        self.records
            .iter()
            .enumerate()
            .map(|(i, r)| (RecordId(i), r))
    }

    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the file has no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the resolved base of a record.
    #[must_use]
    pub fn base(&self, id: RecordId) -> Option<&ResolvedRecord> {
        self.record(id).base.map(|b| self.record(b))
    }

    /// Iterates over the ancestors of a record, nearest first.
    #[must_use]
    pub fn ancestors(&self, id: RecordId) -> Ancestors<'_> {
        Ancestors {
            file: self,
            next: self.record(id).base,
        }
    }

    /// Returns the full field list of a record: every ancestor's own fields,
    /// root first, followed by the record's own fields.
    #[must_use]
    pub fn all_fields(&self, id: RecordId) -> Vec<&Field> {
        let mut chain: Vec<RecordId> = self.ancestors(id).collect();
        chain.reverse();
        chain.push(id);
        chain
            .into_iter()
            .flat_map(|c| self.record(c).fields.iter())
            .collect()
    }

    /// Returns the full field list of a record's base, empty for a root record.
    #[must_use]
    pub fn base_fields(&self, id: RecordId) -> Vec<&Field> {
        match self.record(id).base {
            Some(base) => self.all_fields(base),
            None => Vec::new(),
        }
    }
}

/// Iterator over a record's base chain.
#[derive(Debug, Clone)]
pub struct Ancestors<'a> {
    file: &'a ResolvedFile,
    next: Option<RecordId>,
}

impl Iterator for Ancestors<'_> {
    type Item = RecordId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        self.next = self.file.record(id).base;
        Some(id)
    }
}
