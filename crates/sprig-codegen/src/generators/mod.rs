//! Code generators for target UI frameworks.

mod react_native;
mod templates;

pub use react_native::{generate_code, ReactNativeGenerator};
pub use templates::TemplateEngine;

use sprig_core::ParseData;

use crate::error::Result;
use crate::ident::identifier_pascal;

/// Common trait for code generators.
pub trait CodeGenerator {
    /// Target framework name.
    fn framework_name(&self) -> &'static str;

    /// Extension of generated source files, without the dot.
    fn file_extension(&self) -> &'static str;

    /// Generate the source file for the component at the root of `data`.
    fn generate(&self, data: &ParseData) -> Result<String>;

    /// Generate the source file together with its conventional file name.
    fn generate_file(&self, data: &ParseData) -> Result<GeneratedFile> {
        let content = self.generate(data)?;
        Ok(GeneratedFile {
            path: format!(
                "{}.{}",
                identifier_pascal(&data.root.node.name),
                self.file_extension()
            ),
            content,
        })
    }
}

/// A generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// File path relative to the output directory.
    pub path: String,
    /// File content.
    pub content: String,
}
