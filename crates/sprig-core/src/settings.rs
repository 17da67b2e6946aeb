//! Generation settings.
//!
//! Every field has a default, so an empty JSON object is a valid settings
//! document.

/// Settings for one generation run.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct Settings {
    /// Options forwarded to the code writer
    pub writer: WriterOptions,
    /// Output-shaping toggles
    pub component: ComponentOptions,
}

impl Settings {
    /// Decode settings from JSON.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Formatting options for the code writer.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct WriterOptions {
    /// Spaces per indentation level (ignored when `use_tabs` is set)
    pub indent_number_of_spaces: usize,
    pub use_tabs: bool,
    pub quote_style: QuoteStyle,
    pub new_line: NewLine,
}

impl Default for WriterOptions {
    fn default() -> Self {
        Self {
            indent_number_of_spaces: 2,
            use_tabs: false,
            quote_style: QuoteStyle::Single,
            new_line: NewLine::Lf,
        }
    }
}

/// Quote character for string literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum QuoteStyle {
    #[default]
    Single,
    Double,
}

impl QuoteStyle {
    pub fn as_char(&self) -> char {
        match self {
            Self::Single => '\'',
            Self::Double => '"',
        }
    }
}

/// Line terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NewLine {
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "\n"))]
    Lf,
    #[cfg_attr(feature = "serde", serde(rename = "\r\n"))]
    CrLf,
}

impl NewLine {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
        }
    }
}

/// Options that change the shape of the generated component.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct ComponentOptions {
    /// How the component function is exported
    pub export_style: ExportStyle,
    /// Prefix of generated style-table keys (`style_0`, `style_1`, ...)
    pub style_prefix: String,
    /// Add `flexDirection: 'row'` to nodes classified as rows
    pub row_from_layout: bool,
}

impl Default for ComponentOptions {
    fn default() -> Self {
        Self {
            export_style: ExportStyle::Named,
            style_prefix: "style".to_string(),
            row_from_layout: true,
        }
    }
}

/// Export form of the component function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ExportStyle {
    /// `export function Name()`
    #[default]
    Named,
    /// `export default function Name()`
    Default,
}
