//! Function component emission.
//!
//! Walks the component tree depth-first and writes one JSX element per node.
//! Style lookups go through the [`StyleCollector`], local state through the
//! state hook emitter, and every framework primitive referenced is recorded
//! in the [`ImportFlags`].

use std::borrow::Cow;

use sprig_core::{ComponentOptions, ExportStyle, Literal, Node, NodeType, ParseData, StyleMap};
use sprig_layout::{classify, LayoutClass};

use crate::error::Result;
use crate::ident::identifier_pascal;
use crate::imports::{ImportFlags, Primitive};
use crate::state::write_state_hooks;
use crate::styles::{StyleCollector, StyleRef};
use crate::writer::CodeWriter;

/// Accumulators shared by the emitters of one generation run.
pub struct BodyEmitter<'a> {
    options: &'a ComponentOptions,
    flags: &'a mut ImportFlags,
    styles: &'a mut StyleCollector,
}

impl<'a> BodyEmitter<'a> {
    pub fn new(
        options: &'a ComponentOptions,
        flags: &'a mut ImportFlags,
        styles: &'a mut StyleCollector,
    ) -> Self {
        Self { options, flags, styles }
    }

    /// Write the exported function component for the root of `data`.
    pub fn write_function(&mut self, writer: &mut CodeWriter, data: &ParseData) -> Result<()> {
        let root = &data.root.node;
        let export = match self.options.export_style {
            ExportStyle::Named => "export function ",
            ExportStyle::Default => "export default function ",
        };

        writer
            .write(export)
            .write(&identifier_pascal(&root.name))
            .write("() ")
            .open_block();

        write_state_hooks(writer, self.flags, data);

        if self.is_empty_component(root) {
            tracing::debug!(component = %root.name, "empty component, no markup");
        } else {
            writer.write("return (").newline().increase_indent();
            self.write_node(writer, root)?;
            writer.decrease_indent().write(");").newline();
        }

        writer.close_block();
        Ok(())
    }

    /// A childless container without declarations renders nothing.
    fn is_empty_component(&self, root: &Node) -> bool {
        root.node_type.is_container()
            && root.children.is_empty()
            && self.declarations(root, classify(root)).is_empty()
    }

    fn write_node(&mut self, writer: &mut CodeWriter, node: &Node) -> Result<()> {
        let layout = classify(node);
        let declarations = self.declarations(node, layout);
        let style = self.styles.register(&node.name, &declarations)?;
        tracing::trace!(node = %node.name, kind = %node.node_type, %layout, "emit node");

        match node.node_type {
            NodeType::Component
            | NodeType::Instance
            | NodeType::Frame
            | NodeType::Group
            | NodeType::Rectangle => self.write_view(writer, node, style.as_ref()),
            NodeType::Text => {
                self.write_text(writer, node, style.as_ref());
                Ok(())
            }
        }
    }

    fn write_view(
        &mut self,
        writer: &mut CodeWriter,
        node: &Node,
        style: Option<&StyleRef>,
    ) -> Result<()> {
        self.flags.set(Primitive::View);
        writer.write("<View");
        write_style_attr(writer, style);

        if node.children.is_empty() {
            writer.write(" />").newline();
            return Ok(());
        }

        writer.write(">").newline().increase_indent();
        for child in &node.children {
            self.write_node(writer, child)?;
        }
        writer.decrease_indent().write("</View>").newline();
        Ok(())
    }

    fn write_text(&mut self, writer: &mut CodeWriter, node: &Node, style: Option<&StyleRef>) {
        if !node.children.is_empty() {
            tracing::warn!(node = %node.name, "text node has children, ignoring them");
        }

        self.flags.set(Primitive::Text);
        let content = node.characters.as_deref().unwrap_or(&node.name);
        writer.write("<Text");
        write_style_attr(writer, style);
        writer.write(">{").quote(content).write("}</Text>").newline();
    }

    /// Node declarations plus any the layout classification implies.
    fn declarations<'n>(&self, node: &'n Node, layout: LayoutClass) -> Cow<'n, StyleMap> {
        match layout.flex_direction() {
            Some(direction)
                if self.options.row_from_layout && !node.styles.contains_key("flexDirection") =>
            {
                let mut styles = node.styles.clone();
                styles.insert("flexDirection".to_string(), Literal::from(direction));
                Cow::Owned(styles)
            }
            _ => Cow::Borrowed(&node.styles),
        }
    }
}

fn write_style_attr(writer: &mut CodeWriter, style: Option<&StyleRef>) {
    if let Some(style) = style {
        writer.write(" style={").write(&style.to_string()).write("}");
    }
}
