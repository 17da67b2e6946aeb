//! Layout classification for design nodes.
//!
//! Decides whether a node lays its children out as a column, a row, or in a
//! way the generator cannot express with a flex direction. The rule only looks
//! at the node's own attributes and its direct child count.
//!
//! # Example
//!
//! ```
//! use sprig_core::{LayoutMode, Node};
//! use sprig_layout::{classify, LayoutClass};
//!
//! let toolbar = Node::frame("Toolbar").with_layout(LayoutMode::Horizontal);
//! assert_eq!(classify(&toolbar), LayoutClass::Row);
//! ```

mod classify;

pub use classify::{classify, LayoutClass};
