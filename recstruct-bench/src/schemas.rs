//! Synthetic schema generation.

/// Shape of a generated schema.
#[derive(Debug, Clone, Copy)]
pub struct SchemaShape {
    /// Number of namespaces.
    pub namespaces: usize,
    /// Records per namespace.
    pub records: usize,
    /// Own fields per record.
    pub fields: usize,
    /// Length of each inheritance chain; every `depth` records start a new root.
    pub depth: usize,
}

impl SchemaShape {
    /// Creates a new shape.
    #[must_use]
    pub const fn new(namespaces: usize, records: usize, fields: usize, depth: usize) -> Self {
        Self {
            namespaces,
            records,
            fields,
            depth,
        }
    }

    /// Total number of records.
    #[must_use]
    pub const fn total_records(&self) -> usize {
        self.namespaces * self.records
    }
}

/// Builds an XML schema with the given shape.
///
/// Records are named `R<ns>_<i>`. Within a namespace each record extends the
/// previous one unless it starts a new chain. A depth of zero produces only
/// root records.
#[must_use]
pub fn synthetic_xml(shape: SchemaShape) -> String {
    let mut xml = String::from("<File>\n    <Include name=\"string\"/>\n");

    for ns in 0..shape.namespaces {
        xml.push_str(&format!("    <Namespace name=\"bench.ns{}\">\n", ns));
        for i in 0..shape.records {
            let starts_chain = shape.depth == 0 || i % shape.depth == 0;
            if starts_chain {
                xml.push_str(&format!("        <Record name=\"R{}_{}\">\n", ns, i));
            } else {
                xml.push_str(&format!(
                    "        <Record name=\"R{}_{}\" extends=\"R{}_{}\">\n",
                    ns,
                    i,
                    ns,
                    i - 1
                ));
            }
            for f in 0..shape.fields {
                xml.push_str(&format!(
                    "            <Field name=\"f{}_{}\" type=\"std::uint64_t\"/>\n",
                    i, f
                ));
            }
            xml.push_str("        </Record>\n");
        }
        xml.push_str("    </Namespace>\n");
    }

    xml.push_str("</File>\n");
    xml
}
