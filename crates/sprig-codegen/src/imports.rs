//! Import flag registry and import statement emission.
//!
//! Emitters record every framework symbol they reference while walking the
//! tree. The registry is only read once, after the body and style table are
//! complete, to produce the import block that precedes them in the output.

use std::collections::BTreeSet;
use std::fmt;

use smallvec::SmallVec;

use crate::error::{CodegenError, Result};
use crate::writer::CodeWriter;

/// A module the generated code imports from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Module {
    React,
    ReactNative,
}

impl Module {
    /// All modules, in the order their import statements are emitted.
    pub const ALL: [Module; 2] = [Module::React, Module::ReactNative];

    pub fn path(&self) -> &'static str {
        match self {
            Self::React => "react",
            Self::ReactNative => "react-native",
        }
    }
}

/// A framework symbol the generated code may reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Primitive {
    /// Local state hook
    UseState,
    /// Layout container
    View,
    /// Text wrapper
    Text,
    /// Style table factory
    StyleSheet,
}

impl Primitive {
    pub const ALL: [Primitive; 4] = [
        Primitive::UseState,
        Primitive::View,
        Primitive::Text,
        Primitive::StyleSheet,
    ];

    pub fn module(&self) -> Module {
        match self {
            Self::UseState => Module::React,
            Self::View | Self::Text | Self::StyleSheet => Module::ReactNative,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::UseState => "useState",
            Self::View => "View",
            Self::Text => "Text",
            Self::StyleSheet => "StyleSheet",
        }
    }

    /// Find the primitive exported as `symbol` by the module at `path`.
    pub fn lookup(path: &str, symbol: &str) -> Option<Primitive> {
        Self::ALL
            .into_iter()
            .find(|p| p.module().path() == path && p.symbol() == symbol)
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.module().path(), self.symbol())
    }
}

/// Record of the framework symbols used during one generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportFlags {
    used: BTreeSet<Primitive>,
    unknown: Vec<(String, String)>,
}

impl ImportFlags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a primitive as used. Setting a flag twice has no further effect.
    pub fn set(&mut self, primitive: Primitive) {
        self.used.insert(primitive);
    }

    /// Mark a symbol as used by module path and name.
    ///
    /// Entry point for flags forwarded by a host as `(module, symbol)`
    /// strings; the generator itself uses [`ImportFlags::set`]. Pairs outside the known schema are retained and reported when the
    /// import block is written.
    pub fn set_raw(&mut self, path: &str, symbol: &str) {
        match Primitive::lookup(path, symbol) {
            Some(primitive) => self.set(primitive),
            None => {
                let pair = (path.to_string(), symbol.to_string());
                if !self.unknown.contains(&pair) {
                    self.unknown.push(pair);
                }
            }
        }
    }

    pub fn is_set(&self, primitive: Primitive) -> bool {
        self.used.contains(&primitive)
    }

    /// Number of distinct primitives used.
    pub fn len(&self) -> usize {
        self.used.len()
    }

    pub fn is_empty(&self) -> bool {
        self.used.is_empty() && self.unknown.is_empty()
    }

    /// Used symbols of `module`, sorted by name.
    pub fn symbols(&self, module: Module) -> SmallVec<[&'static str; 4]> {
        let mut symbols: SmallVec<[&'static str; 4]> = self
            .used
            .iter()
            .filter(|p| p.module() == module)
            .map(|p| p.symbol())
            .collect();
        symbols.sort_unstable();
        symbols
    }
}

/// Write one import statement per module that has at least one used symbol.
pub fn write_imports(writer: &mut CodeWriter, flags: &ImportFlags) -> Result<()> {
    if let Some((module, symbol)) = flags.unknown.first() {
        return Err(CodegenError::UnknownImport {
            module: module.clone(),
            symbol: symbol.clone(),
        });
    }

    for module in Module::ALL {
        let symbols = flags.symbols(module);
        if symbols.is_empty() {
            continue;
        }
        writer
            .write("import {")
            .write(&symbols.join(", "))
            .write("} from ")
            .quote(module.path())
            .write(";")
            .newline();
    }
    Ok(())
}
