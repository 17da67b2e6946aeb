//! React Native code generator.
//!
//! Output layout: imports, blank line, function component, blank line, style
//! table, trailing newline. The import block comes first in the text but is
//! computed last, from the flags the body and style table recorded.

use sprig_core::{ParseData, Settings};

use super::{CodeGenerator, GeneratedFile};
use crate::body::BodyEmitter;
use crate::error::Result;
use crate::imports::{write_imports, ImportFlags};
use crate::preview::{render_preview_entry, PreviewOptions};
use crate::styles::{write_style_sheet, StyleCollector};
use crate::writer::CodeWriter;

/// React Native code generator.
///
/// Holds only immutable settings; every call to [`CodeGenerator::generate`]
/// starts from fresh import flags and an empty style table.
#[derive(Debug, Clone, Default)]
pub struct ReactNativeGenerator {
    settings: Settings,
}

impl ReactNativeGenerator {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Generate the file and wrap it in a preview entry module.
    pub fn generate_preview(&self, data: &ParseData, options: &PreviewOptions) -> Result<GeneratedFile> {
        let file = self.generate_file(data)?;
        let content = render_preview_entry(&file.content, &data.root.node.name, options)?;
        Ok(GeneratedFile {
            path: format!("preview.{}", self.file_extension()),
            content,
        })
    }
}

impl CodeGenerator for ReactNativeGenerator {
    fn framework_name(&self) -> &'static str {
        "React Native"
    }

    fn file_extension(&self) -> &'static str {
        "tsx"
    }

    fn generate(&self, data: &ParseData) -> Result<String> {
        generate_code(data, &self.settings)
    }
}

/// Generate the complete source file for the component at the root of `data`.
pub fn generate_code(data: &ParseData, settings: &Settings) -> Result<String> {
    let span = tracing::debug_span!("generate_code", component = %data.root.node.name);
    let _enter = span.enter();

    let mut flags = ImportFlags::new();
    let mut styles = StyleCollector::new(settings.component.style_prefix.as_str());

    let mut body = CodeWriter::new(&settings.writer);
    BodyEmitter::new(&settings.component, &mut flags, &mut styles).write_function(&mut body, data)?;

    let mut sheet = CodeWriter::new(&settings.writer);
    write_style_sheet(&mut sheet, &styles, &mut flags);

    let mut imports = CodeWriter::new(&settings.writer);
    write_imports(&mut imports, &flags)?;

    let mut out = CodeWriter::new(&settings.writer);
    out.write_raw(imports.as_str())
        .blank_line()
        .write_raw(body.as_str())
        .blank_line()
        .write_raw(sheet.as_str())
        .newline_if_last_not();

    tracing::debug!(
        primitives = flags.len(),
        style_entries = styles.len(),
        bytes = out.as_str().len(),
        "generated component"
    );
    Ok(out.into_string())
}
