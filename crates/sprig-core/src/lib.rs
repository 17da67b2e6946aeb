//! Core types for the Sprig code generator.
//!
//! This crate provides the foundational types shared by the other sprig crates:
//! - The parse tree handed over by the design-tool parser (`ParseData`, `Node`)
//! - Literal and enum value types (node tags, layout modes, style values)
//! - Generation settings
//! - Error types

pub mod ast;
pub mod errors;
pub mod settings;
pub mod types;

pub use ast::*;
pub use errors::*;
pub use settings::*;
pub use types::*;
