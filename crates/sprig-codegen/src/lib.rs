//! React Native code generation from parsed design trees.
//!
//! Turns a [`ParseData`] tree and [`Settings`] into one source file with
//! three regions: the import block, an exported function component, and a
//! `StyleSheet` table. All three come out of a single traversal; the emitters
//! share per-run accumulators ([`ImportFlags`], [`StyleCollector`]) that the
//! orchestrator owns and lends out.
//!
//! # Example
//!
//! ```
//! use sprig_codegen::{generate_code, ParseData, Settings};
//! use sprig_core::{LayoutMode, Node, StateEntry};
//!
//! let card = Node::frame("Card")
//!     .on_page("Page1")
//!     .with_layout(LayoutMode::Vertical)
//!     .with_child(Node::text("Title"));
//! let data = ParseData::new(card).with_state("Page1", "Card", StateEntry::new("count", 0));
//!
//! let code = generate_code(&data, &Settings::default())?;
//! assert!(code.starts_with("import {useState} from 'react';"));
//! # Ok::<(), sprig_codegen::CodegenError>(())
//! ```

pub mod body;
pub mod error;
pub mod generators;
pub mod ident;
pub mod imports;
pub mod preview;
pub mod state;
pub mod styles;
pub mod writer;

pub use sprig_core::{ParseData, Settings};

pub use error::{CodegenError, Result};
pub use generators::{generate_code, CodeGenerator, GeneratedFile, ReactNativeGenerator, TemplateEngine};
pub use ident::{identifier_camel, identifier_pascal};
pub use imports::{ImportFlags, Module, Primitive};
pub use preview::{render_preview_entry, PreviewOptions};
pub use styles::{StyleCollector, StyleRef};
pub use writer::CodeWriter;
