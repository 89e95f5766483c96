//! Record schema XML parser.
//!
//! This module reads the attribute-based XML front-end into a [`File`].
//! Base references are recorded as written; linking them is left to
//! [`crate::resolve`].
//!
//! ```xml
//! <File>
//!     <Include name="string"/>
//!     <Namespace name="a.b.c">
//!         <Record name="BaseRecord">
//!             <Field name="field1" type="int"/>
//!         </Record>
//!         <Record name="DerivedRecord" extends="BaseRecord">
//!             <Field name="field2" type="const char*"/>
//!         </Record>
//!     </Namespace>
//! </File>
//! ```

use crate::error::ParseError;
use crate::model::{Field, File, Namespace, Record};
use quick_xml::Reader;
use quick_xml::escape::unescape;
use quick_xml::events::attributes::Attribute;
use quick_xml::events::{BytesStart, Event};
use tracing::debug;

/// Parses a record schema from an XML string.
///
/// # Arguments
/// * `xml` - XML schema content
///
/// # Returns
/// Loaded file with unresolved base references.
///
/// # Errors
/// Returns `ParseError` if the XML is malformed, an element is unknown or a
/// required attribute is missing.
pub fn parse_file(xml: &str) -> Result<File, ParseError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut file: Option<File> = None;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) => {
                let name = element_name(e)?;
                check_root(&name, file.is_some())?;
                file = Some(parse_file_body(&mut reader)?);
            }
            Event::Empty(ref e) => {
                let name = element_name(e)?;
                check_root(&name, file.is_some())?;
                file = Some(File::new());
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    let file = file.ok_or_else(|| ParseError::structure("no File element found"))?;
    if file.namespaces.is_empty() {
        return Err(ParseError::structure("File contains no Namespace element"));
    }

    debug!(
        includes = file.includes.len(),
        namespaces = file.namespaces.len(),
        records = file.record_count(),
        "parsed XML schema"
    );

    Ok(file)
}

/// Accepts exactly one `File` root element.
fn check_root(name: &str, seen: bool) -> Result<(), ParseError> {
    if name != "File" {
        return Err(ParseError::unknown_element(name, "document"));
    }
    if seen {
        return Err(ParseError::structure("multiple File elements"));
    }
    Ok(())
}

/// Parses the children of the `File` element up to its end tag.
fn parse_file_body(reader: &mut Reader<&[u8]>) -> Result<File, ParseError> {
    let mut file = File::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) => match element_name(e)?.as_str() {
                "Include" => {
                    file.add_include(parse_include(e)?);
                    skip_leaf(reader, "Include")?;
                }
                "Namespace" => {
                    let mut namespace = parse_namespace(e)?;
                    parse_namespace_body(reader, &mut namespace)?;
                    file.add_namespace(namespace);
                }
                other => return Err(ParseError::unknown_element(other, "File")),
            },
            Event::Empty(ref e) => match element_name(e)?.as_str() {
                "Include" => file.add_include(parse_include(e)?),
                "Namespace" => file.add_namespace(parse_namespace(e)?),
                other => return Err(ParseError::unknown_element(other, "File")),
            },
            Event::End(_) => break,
            Event::Eof => return Err(unexpected_eof("File")),
            _ => {}
        }
        buf.clear();
    }

    Ok(file)
}

/// Parses the records of a namespace up to its end tag.
fn parse_namespace_body(
    reader: &mut Reader<&[u8]>,
    namespace: &mut Namespace,
) -> Result<(), ParseError> {
    let context = format!("Namespace '{}'", namespace.name);
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) => match element_name(e)?.as_str() {
                "Record" => {
                    let mut record = parse_record(e, &context)?;
                    parse_record_body(reader, &mut record)?;
                    namespace.add_record(record);
                }
                other => return Err(ParseError::unknown_element(other, context)),
            },
            Event::Empty(ref e) => match element_name(e)?.as_str() {
                "Record" => namespace.add_record(parse_record(e, &context)?),
                other => return Err(ParseError::unknown_element(other, context)),
            },
            Event::End(_) => break,
            Event::Eof => return Err(unexpected_eof(&context)),
            _ => {}
        }
        buf.clear();
    }

    Ok(())
}

/// Parses the fields of a record up to its end tag.
fn parse_record_body(reader: &mut Reader<&[u8]>, record: &mut Record) -> Result<(), ParseError> {
    let context = format!("Record '{}'", record.name);
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) => match element_name(e)?.as_str() {
                "Field" => {
                    record.add_field(parse_field(e, &context)?);
                    skip_leaf(reader, "Field")?;
                }
                other => return Err(ParseError::unknown_element(other, context)),
            },
            Event::Empty(ref e) => match element_name(e)?.as_str() {
                "Field" => record.add_field(parse_field(e, &context)?),
                other => return Err(ParseError::unknown_element(other, context)),
            },
            Event::End(_) => break,
            Event::Eof => return Err(unexpected_eof(&context)),
            _ => {}
        }
        buf.clear();
    }

    Ok(())
}

/// Consumes a leaf element written in open/close form, rejecting children.
fn skip_leaf(reader: &mut Reader<&[u8]>, element: &str) -> Result<(), ParseError> {
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) | Event::Empty(ref e) => {
                return Err(ParseError::unknown_element(element_name(e)?, element));
            }
            Event::End(_) => break,
            Event::Eof => return Err(unexpected_eof(element)),
            _ => {}
        }
        buf.clear();
    }

    Ok(())
}

/// Parses the include name.
fn parse_include(e: &BytesStart<'_>) -> Result<String, ParseError> {
    let mut name = None;

    for attr in e.attributes() {
        let attr = attr?;
        if attr_key(&attr)? == "name" {
            name = Some(attr_value(&attr)?);
        }
    }

    name.ok_or_else(|| ParseError::missing_attr("Include", "name"))
}

/// Parses the namespace element attributes.
fn parse_namespace(e: &BytesStart<'_>) -> Result<Namespace, ParseError> {
    let mut name = None;

    for attr in e.attributes() {
        let attr = attr?;
        if attr_key(&attr)? == "name" {
            name = Some(attr_value(&attr)?);
        }
    }

    let name = name.ok_or_else(|| ParseError::missing_attr("Namespace", "name"))?;
    Ok(Namespace::new(name))
}

/// Parses the record element attributes.
///
/// An empty `extends` value is treated the same as an absent one.
fn parse_record(e: &BytesStart<'_>, context: &str) -> Result<Record, ParseError> {
    let mut name = None;
    let mut base = None;

    for attr in e.attributes() {
        let attr = attr?;
        match attr_key(&attr)? {
            "name" => name = Some(attr_value(&attr)?),
            "extends" => base = Some(attr_value(&attr)?).filter(|b| !b.is_empty()),
            _ => {}
        }
    }

    let name =
        name.ok_or_else(|| ParseError::missing_attr(format!("Record in {context}"), "name"))?;
    Ok(Record::new(name, base))
}

/// Parses a field element. The type may be empty but must be present.
fn parse_field(e: &BytesStart<'_>, context: &str) -> Result<Field, ParseError> {
    let mut name = None;
    let mut type_name = None;

    for attr in e.attributes() {
        let attr = attr?;
        match attr_key(&attr)? {
            "name" => name = Some(attr_value(&attr)?),
            "type" => type_name = Some(attr_value(&attr)?),
            _ => {}
        }
    }

    let name =
        name.ok_or_else(|| ParseError::missing_attr(format!("Field in {context}"), "name"))?;
    let type_name = type_name.ok_or_else(|| {
        ParseError::missing_attr(format!("Field '{name}' in {context}"), "type")
    })?;

    Ok(Field::new(name, type_name))
}

fn element_name(e: &BytesStart<'_>) -> Result<String, ParseError> {
    Ok(std::str::from_utf8(e.name().as_ref())?.to_string())
}

fn attr_key<'a>(attr: &'a Attribute<'_>) -> Result<&'a str, ParseError> {
    Ok(std::str::from_utf8(attr.key.as_ref())?)
}

fn attr_value(attr: &Attribute<'_>) -> Result<String, ParseError> {
    let raw = std::str::from_utf8(&attr.value)?;
    Ok(unescape(raw)?.into_owned())
}

fn unexpected_eof(context: &str) -> ParseError {
    ParseError::structure(format!("unexpected end of document inside {context}"))
}
