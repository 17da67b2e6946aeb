//! Local state hook emission.

use std::collections::HashSet;

use sprig_core::ParseData;

use crate::ident::identifier_camel;
use crate::imports::{ImportFlags, Primitive};
use crate::writer::CodeWriter;

/// Write one `useState` declaration per local state entry of the root
/// component, in declaration order.
///
/// State is looked up by the raw page and component names. A component
/// without local state, or a root without a page, emits nothing.
pub fn write_state_hooks(writer: &mut CodeWriter, flags: &mut ImportFlags, data: &ParseData) {
    let root = &data.root.node;
    let Some(page) = root.page_name() else {
        tracing::debug!(component = %root.name, "root has no page, skipping local state");
        return;
    };
    let Some(entries) = data.state_for(page, &root.name) else {
        return;
    };

    let mut seen = HashSet::new();
    for entry in entries {
        if !seen.insert(entry.name()) {
            tracing::warn!(
                component = %root.name,
                state = entry.name(),
                "duplicate local state name, generated bindings will collide"
            );
        }

        let getter = identifier_camel(entry.name());
        let setter = identifier_camel(&format!("set_{}", entry.name()));
        writer
            .write("const [")
            .write(&getter)
            .write(", ")
            .write(&setter)
            .write("] = useState(")
            .literal(entry.value())
            .write(");")
            .newline();
        flags.set(Primitive::UseState);
    }
}
