//! Preview entry module.
//!
//! Wraps a generated component in a module that mounts it with `AppRegistry`
//! behind an error boundary, ready to be handed to a bundler.

use serde::Serialize;

use crate::error::Result;
use crate::generators::TemplateEngine;

/// Top-level bindings of the entry start with `__`, a prefix that
/// [`identifier_pascal`](crate::ident::identifier_pascal) never produces.
const PREVIEW_ENTRY: &str = r#"import __SprigReact from 'react';
import {AppRegistry as __SprigAppRegistry} from 'react-native';

{{{code}}}
const __sprigFallbackStyle = {color: 'red'};

export function __SprigMain() {
  return (
    <__SprigErrorBoundary fallback={<pre style={__sprigFallbackStyle}>Component error. Check console.</pre>}>
      <{{pascal_case component}} />
    </__SprigErrorBoundary>
  );
}

__SprigAppRegistry.registerComponent('main', () => __SprigMain);
__SprigAppRegistry.runApplication('main', {
  rootTag: document.getElementById('{{root_tag}}'),
});

class __SprigErrorBoundary extends __SprigReact.Component {
  constructor(props) {
    super(props);
    this.state = {hasError: false};
  }

  static getDerivedStateFromError() {
    return {hasError: true};
  }

  componentDidCatch(error, info) {
    console.error(error, info.componentStack);
  }

  render() {
    if (this.state.hasError)
      return this.props.fallback;
    return this.props.children;
  }
}
"#;

/// Options for the preview entry module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewOptions {
    /// Id of the DOM element the preview mounts on
    pub root_tag: String,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            root_tag: "component".to_string(),
        }
    }
}

#[derive(Serialize)]
struct PreviewContext<'a> {
    code: &'a str,
    component: &'a str,
    root_tag: &'a str,
}

/// Render the preview entry for generated `code` whose root node is named
/// `component`.
pub fn render_preview_entry(code: &str, component: &str, options: &PreviewOptions) -> Result<String> {
    let mut engine = TemplateEngine::new();
    engine.register_template("preview_entry", PREVIEW_ENTRY)?;
    engine.render(
        "preview_entry",
        &PreviewContext {
            code,
            component,
            root_tag: &options.root_tag,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::{CodeGenerator, ReactNativeGenerator};
    use crate::ident::identifier_pascal;
    use sprig_core::{Node, ParseData};

    #[test]
    fn test_entry_embeds_component() {
        let code = "export function ProfileCard() {\n}\n";
        let entry = render_preview_entry(code, "profile card", &PreviewOptions::default()).unwrap();

        assert!(entry.contains("export function ProfileCard() {\n}\n"));
        assert!(entry.contains("      <ProfileCard />\n"));
        assert!(entry.contains("document.getElementById('component')"));
        assert!(entry.contains("import {AppRegistry as __SprigAppRegistry} from 'react-native';"));
    }

    #[test]
    fn test_custom_root_tag() {
        let options = PreviewOptions {
            root_tag: "app".to_string(),
        };
        let entry = render_preview_entry("", "Card", &options).unwrap();
        assert!(entry.contains("document.getElementById('app')"));
    }

    #[test]
    fn test_generator_preview_file() {
        let gen = ReactNativeGenerator::default();
        let data = ParseData::new(Node::frame("Card").with_child(Node::text("Hi")));

        let file = gen.generate_preview(&data, &PreviewOptions::default()).unwrap();
        assert_eq!(file.path, "preview.tsx");
        assert!(file.content.contains(&gen.generate(&data).unwrap()));
        assert!(file.content.contains("<Card />"));
    }

    #[test]
    fn test_entry_names_do_not_clash_with_component() {
        let gen = ReactNativeGenerator::default();
        for name in ["Main", "ErrorBoundary", "React", "AppRegistry", "fallback style"] {
            let data = ParseData::new(Node::frame(name).with_child(Node::text("Hi")));
            let file = gen.generate_preview(&data, &PreviewOptions::default()).unwrap();

            let component = identifier_pascal(name);
            assert!(!component.starts_with("__"));
            let declaration = format!("export function {}()", component);
            assert_eq!(file.content.matches(&declaration).count(), 1, "{}", name);
            for binding in [
                "function __SprigMain(",
                "class __SprigErrorBoundary ",
                "const __sprigFallbackStyle ",
            ] {
                assert_eq!(file.content.matches(binding).count(), 1);
            }
        }
    }
}
