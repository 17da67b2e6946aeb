//! Indentation-aware text buffer for emitting source code.

use std::fmt;

use sprig_core::{Literal, WriterOptions};

/// Accumulates generated source text.
///
/// Indentation is inserted lazily when the first token of a line is written,
/// so callers never deal with leading whitespace.
#[derive(Debug, Clone)]
pub struct CodeWriter {
    buf: String,
    indent_level: usize,
    indent_unit: String,
    quote: char,
    new_line: &'static str,
}

impl CodeWriter {
    /// Create an empty writer with the given formatting options.
    pub fn new(options: &WriterOptions) -> Self {
        let indent_unit = if options.use_tabs {
            "\t".to_string()
        } else {
            " ".repeat(options.indent_number_of_spaces)
        };
        Self {
            buf: String::new(),
            indent_level: 0,
            indent_unit,
            quote: options.quote_style.as_char(),
            new_line: options.new_line.as_str(),
        }
    }

    /// Append a token. Must not contain line breaks.
    pub fn write(&mut self, text: &str) -> &mut Self {
        if text.is_empty() {
            return self;
        }
        if self.at_line_start() {
            for _ in 0..self.indent_level {
                self.buf.push_str(&self.indent_unit);
            }
        }
        self.buf.push_str(text);
        self
    }

    /// Append a string literal using the configured quote character.
    pub fn quote(&mut self, text: &str) -> &mut Self {
        let mut literal = String::with_capacity(text.len() + 2);
        literal.push(self.quote);
        for c in text.chars() {
            match c {
                '\\' => literal.push_str("\\\\"),
                '\n' => literal.push_str("\\n"),
                '\r' => literal.push_str("\\r"),
                '\t' => literal.push_str("\\t"),
                '\u{2028}' => literal.push_str("\\u2028"),
                '\u{2029}' => literal.push_str("\\u2029"),
                c if c == self.quote => {
                    literal.push('\\');
                    literal.push(c);
                }
                c => literal.push(c),
            }
        }
        literal.push(self.quote);
        self.write(&literal)
    }

    /// Append a literal: strings are quoted, numbers are written bare.
    pub fn literal(&mut self, value: &Literal) -> &mut Self {
        match value {
            Literal::String(s) => self.quote(s),
            Literal::Number(n) => self.write(&format_number(*n)),
        }
    }

    /// Append pre-rendered text verbatim.
    pub fn write_raw(&mut self, text: &str) -> &mut Self {
        self.buf.push_str(text);
        self
    }

    /// End the current line.
    pub fn newline(&mut self) -> &mut Self {
        self.buf.push_str(self.new_line);
        self
    }

    /// End the current line unless the buffer already ends with one.
    pub fn newline_if_last_not(&mut self) -> &mut Self {
        if !self.at_line_start() {
            self.newline();
        }
        self
    }

    /// Ensure an empty line follows the current content.
    ///
    /// Does nothing on an empty buffer, so a blank line is never the first
    /// line of output.
    pub fn blank_line(&mut self) -> &mut Self {
        if self.buf.is_empty() {
            return self;
        }
        self.newline_if_last_not();
        let double = self.new_line.repeat(2);
        if !self.buf.ends_with(&double) {
            self.newline();
        }
        self
    }

    /// Write `{`, end the line, and indent the following lines.
    pub fn open_block(&mut self) -> &mut Self {
        self.write("{").newline().increase_indent()
    }

    /// Close the innermost block with `}`.
    pub fn close_block(&mut self) -> &mut Self {
        self.newline_if_last_not().decrease_indent().write("}")
    }

    pub fn increase_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    pub fn decrease_indent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn into_string(self) -> String {
        self.buf
    }

    fn at_line_start(&self) -> bool {
        self.buf.is_empty() || self.buf.ends_with('\n')
    }
}

impl Default for CodeWriter {
    fn default() -> Self {
        Self::new(&WriterOptions::default())
    }
}

impl fmt::Display for CodeWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buf)
    }
}

/// Format a number as a JavaScript numeric literal.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n == f64::INFINITY {
        "Infinity".to_string()
    } else if n == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else {
        // Shortest round-trip form; integral values print without a fraction
        n.to_string()
    }
}
