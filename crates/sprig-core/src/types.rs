//! Core value types for parse trees.

use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

/// Kind of a design node.
///
/// The set is closed: an unrecognised tag is rejected while decoding, so every
/// emitter can dispatch with an exhaustive `match`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "&'static str"))]
pub enum NodeType {
    Component,
    Instance,
    Frame,
    Group,
    Rectangle,
    Text,
}

impl NodeType {
    /// Tag as written by the design-tool parser.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Component => "COMPONENT",
            Self::Instance => "INSTANCE",
            Self::Frame => "FRAME",
            Self::Group => "GROUP",
            Self::Rectangle => "RECTANGLE",
            Self::Text => "TEXT",
        }
    }

    /// Whether nodes of this kind may hold children.
    pub fn is_container(&self) -> bool {
        !matches!(self, Self::Text)
    }
}

impl FromStr for NodeType {
    type Err = CoreError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "COMPONENT" => Ok(Self::Component),
            "INSTANCE" => Ok(Self::Instance),
            "FRAME" => Ok(Self::Frame),
            "GROUP" => Ok(Self::Group),
            "RECTANGLE" => Ok(Self::Rectangle),
            "TEXT" => Ok(Self::Text),
            _ => Err(CoreError::UnknownNodeType { tag: tag.to_string() }),
        }
    }
}

impl TryFrom<String> for NodeType {
    type Error = CoreError;

    fn try_from(tag: String) -> Result<Self, Self::Error> {
        tag.parse()
    }
}

impl From<NodeType> for &'static str {
    fn from(node_type: NodeType) -> Self {
        node_type.as_str()
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Auto-layout flow attribute of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum LayoutMode {
    /// No auto-layout
    #[default]
    None,
    /// Children flow top to bottom
    Vertical,
    /// Children flow left to right
    Horizontal,
}

/// A string or numeric literal, used for style values and initial state.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Literal {
    Number(f64),
    String(String),
}

impl Literal {
    /// Get as number if it's a number value.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Literal::Number(n) => Some(*n),
            Literal::String(_) => None,
        }
    }
}

impl From<&str> for Literal {
    fn from(s: &str) -> Self {
        Literal::String(s.to_string())
    }
}

impl From<String> for Literal {
    fn from(s: String) -> Self {
        Literal::String(s)
    }
}

impl From<f64> for Literal {
    fn from(n: f64) -> Self {
        Literal::Number(n)
    }
}

impl From<i32> for Literal {
    fn from(n: i32) -> Self {
        Literal::Number(n as f64)
    }
}
