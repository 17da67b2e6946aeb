//! Style collection and style table emission.
//!
//! Nodes with identical declarations share one table entry. Entries are named
//! in the order their signature was first seen, so names are stable for a
//! given input.

use std::fmt;

use indexmap::IndexMap;
use sprig_core::{Literal, StyleMap};

use crate::error::{CodegenError, Result};
use crate::ident::{identifier_camel, is_plain_key};
use crate::imports::{ImportFlags, Primitive};
use crate::writer::{format_number, CodeWriter};

/// Name of the style table binding in generated code.
pub const STYLES_BINDING: &str = "styles";

/// Reference from a node to its style table entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StyleRef {
    pub key: String,
}

impl fmt::Display for StyleRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", STYLES_BINDING, self.key)
    }
}

/// A deduplicated style table entry.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleEntry {
    pub key: String,
    /// Declarations sorted by property name
    pub declarations: Vec<(String, Literal)>,
}

/// Accumulates the style table for one generation run.
#[derive(Debug, Clone)]
pub struct StyleCollector {
    prefix: String,
    table: IndexMap<String, StyleEntry>,
}

impl StyleCollector {
    /// Create an empty collector naming entries `<prefix>_<n>`.
    ///
    /// The prefix is sanitized into an identifier, so `card-style` names
    /// entries `cardStyle_0`, `cardStyle_1`, ...
    pub fn new(prefix: impl Into<String>) -> Self {
        let raw = prefix.into();
        let prefix = identifier_camel(&raw);
        if prefix != raw {
            tracing::warn!(raw = %raw, prefix = %prefix, "style prefix is not an identifier, sanitized");
        }
        Self {
            prefix,
            table: IndexMap::new(),
        }
    }

    /// Register the declarations of `node` and return its style reference.
    ///
    /// Returns `None` for a node without declarations.
    pub fn register(&mut self, node: &str, declarations: &StyleMap) -> Result<Option<StyleRef>> {
        if declarations.is_empty() {
            return Ok(None);
        }
        let (signature, sorted) = canonicalize(node, declarations)?;

        if let Some(entry) = self.table.get(&signature) {
            return Ok(Some(StyleRef { key: entry.key.clone() }));
        }

        let key = format!("{}_{}", self.prefix, self.table.len());
        tracing::trace!(node, key = %key, "new style entry");
        self.table.insert(
            signature,
            StyleEntry {
                key: key.clone(),
                declarations: sorted,
            },
        );
        Ok(Some(StyleRef { key }))
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Entries in first-seen order.
    pub fn entries(&self) -> impl Iterator<Item = &StyleEntry> {
        self.table.values()
    }
}

/// Compute the order-independent signature of a declaration set.
fn canonicalize(node: &str, declarations: &StyleMap) -> Result<(String, Vec<(String, Literal)>)> {
    let mut sorted: Vec<(String, Literal)> = declarations
        .iter()
        .map(|(property, value)| (property.clone(), value.clone()))
        .collect();
    sorted.sort_by(|a, b| a.0.cmp(&b.0));

    let mut signature = String::new();
    for (property, value) in &sorted {
        if property.is_empty() {
            return Err(CodegenError::InvalidStyle {
                node: node.to_string(),
                property: property.clone(),
                message: "property name is empty".to_string(),
            });
        }
        if let Some(n) = value.as_number().filter(|n| !n.is_finite()) {
            return Err(CodegenError::InvalidStyle {
                node: node.to_string(),
                property: property.clone(),
                message: format!("{} is not a finite number", n),
            });
        }
        let value = match value {
            Literal::Number(n) => format_number(*n),
            Literal::String(s) => format!("{:?}", s),
        };
        signature.push_str(&format!("{:?}={};", property, value));
    }
    Ok((signature, sorted))
}

/// Write the style table declaration.
///
/// A non-empty table goes through `StyleSheet.create`; an empty one is a
/// plain object so that it needs no import.
pub fn write_style_sheet(writer: &mut CodeWriter, styles: &StyleCollector, flags: &mut ImportFlags) {
    writer.write("const ").write(STYLES_BINDING).write(" = ");
    if styles.is_empty() {
        writer.write("{};");
        return;
    }

    flags.set(Primitive::StyleSheet);
    writer.write("StyleSheet.create(").open_block();
    for entry in styles.entries() {
        writer.write(&entry.key).write(": ").open_block();
        for (property, value) in &entry.declarations {
            write_key(writer, property);
            writer.write(": ").literal(value).write(",").newline();
        }
        writer.close_block().write(",").newline();
    }
    writer.close_block().write(");");
}

fn write_key(writer: &mut CodeWriter, property: &str) {
    if is_plain_key(property) {
        writer.write(property);
    } else {
        writer.quote(property);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn styles(pairs: &[(&str, Literal)]) -> StyleMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_identical_declarations_share_entry() {
        let mut collector = StyleCollector::new("style");
        let a = styles(&[("padding", Literal::Number(8.0)), ("color", "red".into())]);
        let b = styles(&[("color", "red".into()), ("padding", Literal::Number(8.0))]);

        let ref_a = collector.register("A", &a).unwrap();
        let ref_b = collector.register("B", &b).unwrap();

        assert_eq!(ref_a, ref_b);
        assert_eq!(collector.len(), 1);
    }

    #[test]
    fn test_distinct_declarations_get_new_names() {
        let mut collector = StyleCollector::new("style");
        let first = collector
            .register("A", &styles(&[("padding", Literal::Number(8.0))]))
            .unwrap()
            .unwrap();
        let second = collector
            .register("B", &styles(&[("padding", Literal::Number(16.0))]))
            .unwrap()
            .unwrap();
        let third = collector
            .register("C", &styles(&[("padding", "8".into())]))
            .unwrap()
            .unwrap();

        assert_eq!(first.key, "style_0");
        assert_eq!(second.key, "style_1");
        assert_eq!(third.key, "style_2");
        assert_eq!(first.to_string(), "styles.style_0");
    }

    #[test]
    fn test_empty_declarations_have_no_reference() {
        let mut collector = StyleCollector::new("style");
        assert_eq!(collector.register("A", &StyleMap::new()).unwrap(), None);
        assert!(collector.is_empty());
    }

    #[test]
    fn test_custom_prefix() {
        let mut collector = StyleCollector::new("s");
        let style = collector
            .register("A", &styles(&[("flex", Literal::Number(1.0))]))
            .unwrap()
            .unwrap();
        assert_eq!(style.key, "s_0");
    }

    #[test]
    fn test_invalid_declarations() {
        let mut collector = StyleCollector::new("style");
        let err = collector
            .register("Box", &styles(&[("", Literal::Number(1.0))]))
            .unwrap_err();
        assert!(matches!(err, CodegenError::InvalidStyle { ref node, .. } if node == "Box"));

        let err = collector
            .register("Box", &styles(&[("width", Literal::Number(f64::NAN))]))
            .unwrap_err();
        assert!(err.to_string().contains("not a finite number"));
        assert!(collector.is_empty());
    }

    #[test]
    fn test_write_empty_table() {
        let mut writer = CodeWriter::default();
        let mut flags = ImportFlags::new();
        write_style_sheet(&mut writer, &StyleCollector::new("style"), &mut flags);

        assert_eq!(writer.as_str(), "const styles = {};");
        assert!(flags.is_empty());
    }

    #[test]
    fn test_write_table() {
        let mut collector = StyleCollector::new("style");
        collector
            .register(
                "Card",
                &styles(&[("padding", Literal::Number(16.0)), ("backgroundColor", "#fff".into())]),
            )
            .unwrap();
        collector
            .register("Title", &styles(&[("font-family", "Inter".into())]))
            .unwrap();

        let mut writer = CodeWriter::default();
        let mut flags = ImportFlags::new();
        write_style_sheet(&mut writer, &collector, &mut flags);

        let expected = "\
const styles = StyleSheet.create({
  style_0: {
    backgroundColor: '#fff',
    padding: 16,
  },
  style_1: {
    'font-family': 'Inter',
  },
});";
        assert_eq!(writer.as_str(), expected);
        assert!(flags.is_set(Primitive::StyleSheet));
    }

    #[test]
    fn test_prefix_is_sanitized() {
        let mut collector = StyleCollector::new("card-style");
        let style = collector
            .register("Box", &styles(&[("padding", Literal::Number(4.0))]))
            .unwrap()
            .unwrap();
        assert_eq!(style.to_string(), "styles.cardStyle_0");

        let mut writer = CodeWriter::default();
        write_style_sheet(&mut writer, &collector, &mut ImportFlags::new());
        assert!(writer.as_str().contains("\n  cardStyle_0: {\n"));
    }

    #[test]
    fn test_empty_prefix() {
        let mut collector = StyleCollector::new("");
        let decl = styles(&[("margin", Literal::Number(1.0))]);
        assert_eq!(collector.register("a", &decl).unwrap().unwrap().key, "__0");
    }
}
