//! Identifier sanitization.
//!
//! Turns free-form design labels into legal JavaScript identifiers. The
//! mapping is a pure function; two labels that differ only in punctuation or
//! casing map to the same identifier and no disambiguation is attempted.

use convert_case::{Case, Casing};
use once_cell::sync::Lazy;
use regex::Regex;

/// Runs of characters that cannot appear in an identifier.
static ILLEGAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\p{L}\p{Nd}]+").unwrap());

/// Words that cannot be bound as identifiers, plus names the generated module
/// declares itself.
const RESERVED: &[&str] = &[
    // Keywords and literals
    "await", "break", "case", "catch", "class", "const", "continue", "debugger",
    "default", "delete", "do", "else", "enum", "export", "extends", "false",
    "finally", "for", "function", "if", "implements", "import", "in",
    "instanceof", "interface", "let", "new", "null", "package", "private",
    "protected", "public", "return", "static", "super", "switch", "this",
    "throw", "true", "try", "typeof", "var", "void", "while", "with", "yield",
    "arguments", "eval", "undefined", "NaN", "Infinity",
    // Module-level bindings of generated code
    "styles", "useState", "StyleSheet", "Text", "View",
];

/// Convert a label to a camelCase identifier (`set_count` -> `setCount`).
pub fn identifier_camel(raw: &str) -> String {
    finish(words(raw).to_case(Case::Camel))
}

/// Convert a label to a PascalCase identifier (`my card` -> `MyCard`).
pub fn identifier_pascal(raw: &str) -> String {
    finish(words(raw).to_case(Case::Pascal))
}

/// Whether `name` can be emitted as an unquoted object key.
pub fn is_plain_key(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' || first == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

fn words(raw: &str) -> String {
    ILLEGAL.replace_all(raw, " ").trim().to_string()
}

fn finish(mut ident: String) -> String {
    if ident.is_empty() {
        return "_".to_string();
    }
    if ident.starts_with(|c: char| c.is_numeric()) {
        ident.insert(0, '_');
    }
    if RESERVED.contains(&ident.as_str()) {
        ident.push('_');
    }
    ident
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case() {
        assert_eq!(identifier_camel("count"), "count");
        assert_eq!(identifier_camel("set_count"), "setCount");
        assert_eq!(identifier_camel("is open"), "isOpen");
        assert_eq!(identifier_camel("Selected-Tab"), "selectedTab");
        assert_eq!(identifier_camel("set_isOpen"), "setIsOpen");
    }

    #[test]
    fn test_pascal_case() {
        assert_eq!(identifier_pascal("Card"), "Card");
        assert_eq!(identifier_pascal("profile card"), "ProfileCard");
        assert_eq!(identifier_pascal("button/primary"), "ButtonPrimary");
    }

    #[test]
    fn test_illegal_characters_are_dropped() {
        assert_eq!(identifier_camel("price ($)"), "price");
        assert_eq!(identifier_camel("!!!"), "_");
        assert_eq!(identifier_camel(""), "_");
    }

    #[test]
    fn test_leading_digit_is_prefixed() {
        assert_eq!(identifier_camel("2 items"), "_2Items");
        assert_eq!(identifier_pascal("404"), "_404");
    }

    #[test]
    fn test_reserved_words_are_suffixed() {
        assert_eq!(identifier_camel("default"), "default_");
        assert_eq!(identifier_camel("Styles"), "styles_");
        assert_eq!(identifier_pascal("view"), "View_");
        assert_eq!(identifier_pascal("text"), "Text_");
    }

    #[test]
    fn test_collisions_are_not_disambiguated() {
        assert_eq!(identifier_camel("my-value"), identifier_camel("my value"));
    }

    #[test]
    fn test_plain_keys() {
        assert!(is_plain_key("padding"));
        assert!(is_plain_key("_private"));
        assert!(!is_plain_key("font-size"));
        assert!(!is_plain_key("2x"));
        assert!(!is_plain_key(""));
    }
}
