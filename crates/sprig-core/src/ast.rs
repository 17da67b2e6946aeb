//! Parse tree types handed over by the design-tool parser.

use indexmap::IndexMap;

use crate::types::{LayoutMode, Literal, NodeType};

/// Style declarations of a node, keyed by property name.
pub type StyleMap = IndexMap<String, Literal>;

/// Local state table: page name -> component name -> ordered entries.
pub type LocalState = IndexMap<String, IndexMap<String, Vec<StateEntry>>>;

/// Output of the design-tool parser for one component.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ParseData {
    /// The component being generated
    pub root: ParseRoot,
    /// Per-component local state declarations
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub local_state: Option<LocalState>,
}

impl ParseData {
    /// Create parse data for a root node without local state.
    pub fn new(node: Node) -> Self {
        Self {
            root: ParseRoot { node },
            local_state: None,
        }
    }

    /// Decode parser output from JSON.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Add a local state entry for a component on a page.
    pub fn with_state(
        mut self,
        page: impl Into<String>,
        component: impl Into<String>,
        entry: StateEntry,
    ) -> Self {
        self.local_state
            .get_or_insert_with(LocalState::new)
            .entry(page.into())
            .or_default()
            .entry(component.into())
            .or_default()
            .push(entry);
        self
    }

    /// Local state entries registered for `component` on `page`.
    pub fn state_for(&self, page: &str, component: &str) -> Option<&[StateEntry]> {
        self.local_state
            .as_ref()?
            .get(page)?
            .get(component)
            .map(Vec::as_slice)
    }

    /// Total number of nodes in the tree.
    pub fn node_count(&self) -> usize {
        self.root.node.descendants().count()
    }
}

/// Wrapper around the root node, mirroring the parser's output shape.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParseRoot {
    pub node: Node,
}

/// Reference to the page that contains a node.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageRef {
    pub name: String,
}

/// One local state declaration: `(name, initial value)`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StateEntry(pub String, pub Literal);

impl StateEntry {
    pub fn new(name: impl Into<String>, value: impl Into<Literal>) -> Self {
        Self(name.into(), value.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    pub fn value(&self) -> &Literal {
        &self.1
    }
}

/// A node of the design tree.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub node_type: NodeType,
    pub name: String,
    /// Containing page, set on the root node
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub page: Option<PageRef>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub layout: LayoutMode,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Vec::is_empty"))]
    pub children: Vec<Node>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "IndexMap::is_empty"))]
    pub styles: StyleMap,
    /// Text content of a text leaf
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub characters: Option<String>,
}

impl Node {
    /// Create a node of the given kind.
    pub fn new(node_type: NodeType, name: impl Into<String>) -> Self {
        Self {
            node_type,
            name: name.into(),
            page: None,
            layout: LayoutMode::None,
            children: Vec::new(),
            styles: StyleMap::new(),
            characters: None,
        }
    }

    pub fn component(name: impl Into<String>) -> Self {
        Self::new(NodeType::Component, name)
    }

    pub fn frame(name: impl Into<String>) -> Self {
        Self::new(NodeType::Frame, name)
    }

    pub fn group(name: impl Into<String>) -> Self {
        Self::new(NodeType::Group, name)
    }

    pub fn text(name: impl Into<String>) -> Self {
        Self::new(NodeType::Text, name)
    }

    /// Set the containing page.
    pub fn on_page(mut self, page: impl Into<String>) -> Self {
        self.page = Some(PageRef { name: page.into() });
        self
    }

    /// Set the auto-layout mode.
    pub fn with_layout(mut self, layout: LayoutMode) -> Self {
        self.layout = layout;
        self
    }

    /// Add a child node.
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Add a style declaration.
    pub fn with_style(mut self, property: impl Into<String>, value: impl Into<Literal>) -> Self {
        self.styles.insert(property.into(), value.into());
        self
    }

    /// Set the text content.
    pub fn with_characters(mut self, characters: impl Into<String>) -> Self {
        self.characters = Some(characters.into());
        self
    }

    /// Name of the containing page, if known.
    pub fn page_name(&self) -> Option<&str> {
        self.page.as_ref().map(|page| page.name.as_str())
    }

    /// Iterate over this node and all of its descendants, depth-first.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }
}

/// Depth-first iterator over a subtree.
pub struct Descendants<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}
