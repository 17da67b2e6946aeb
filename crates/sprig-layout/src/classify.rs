//! Column/row classification of container nodes.

use std::fmt;

use sprig_core::{LayoutMode, Node, NodeType};

/// Flow direction of a node's children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutClass {
    /// Children stacked top to bottom
    Column,
    /// Children placed left to right
    Row,
    /// No auto-layout information
    Unknown,
}

impl LayoutClass {
    /// Value of the `flexDirection` style this class requires, if any.
    ///
    /// Columns are the framework default, so only rows need a declaration.
    pub fn flex_direction(&self) -> Option<&'static str> {
        match self {
            Self::Row => Some("row"),
            Self::Column | Self::Unknown => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Column => "column",
            Self::Row => "row",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for LayoutClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a node's layout.
///
/// A group wrapping exactly one child is a column. Otherwise the auto-layout
/// attribute decides: vertical flow is a column, horizontal flow is a row, and
/// anything else is unknown.
pub fn classify(node: &Node) -> LayoutClass {
    if node.node_type == NodeType::Group && node.children.len() == 1 {
        return LayoutClass::Column;
    }
    match node.layout {
        LayoutMode::Vertical => LayoutClass::Column,
        LayoutMode::Horizontal => LayoutClass::Row,
        LayoutMode::None => LayoutClass::Unknown,
    }
}
