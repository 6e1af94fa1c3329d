//! Markup Host
//!
//! An in-memory [`RenderHost`] whose nodes serialize to markup text. Useful for
//! previews, snapshots and tests of descriptor trees without a real UI.
//!
//! Structured components serialize as an element named after the component.
//! Their default slot is written inline and every named slot as a
//! `<template #name>` block:
//!
//! ```text
//! <Card title="Hi"><template #header><h1>Title</h1></template>Body</Card>
//! ```
//!
//! Tag, component and slot names are escaped like text. Attributes whose name
//! could break out of the tag are dropped.

use std::collections::HashMap;
use std::fmt;

use serde_json::Value;

use super::descriptor::Attributes;
use super::host::RenderHost;
use super::registry::Target;
use super::slots::{Children, Rendered};

/// A structured component known to the markup host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupComponent {
    name: String,
}

impl MarkupComponent {
    pub fn new(name: impl Into<String>) -> Self {
        MarkupComponent { name: name.into() }
    }

    /// Element name the component serializes as
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Node built by [`MarkupHost`].
#[derive(Debug, Clone)]
pub struct MarkupNode {
    pub target: Target<MarkupComponent>,
    pub attributes: Option<Attributes>,
    pub children: Option<Children<MarkupNode>>,
}

impl MarkupNode {
    /// Tag or component name
    pub fn name(&self) -> &str {
        match &self.target {
            Target::Tag(tag) => tag,
            Target::Component(component) => component.name(),
        }
    }

    /// Serialize this node, expanding slots
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        self.write_markup(&mut out);
        out
    }

    fn write_markup(&self, out: &mut String) {
        let name = self.name();
        out.push('<');
        escape_into(name, out);
        if let Some(attributes) = &self.attributes {
            write_attributes(attributes, out);
        }
        out.push('>');

        match &self.children {
            Some(Children::Nodes(nodes)) => write_sequence(nodes, out),
            Some(Children::Slots(slots)) => {
                write_sequence(&slots.render_default(), out);
                for (slot, content) in slots.named() {
                    out.push_str("<template #");
                    escape_into(slot, out);
                    out.push('>');
                    write_sequence(&content(), out);
                    out.push_str("</template>");
                }
            }
            None => {}
        }

        out.push_str("</");
        escape_into(name, out);
        out.push('>');
    }
}

impl fmt::Display for MarkupNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_markup())
    }
}

/// Serialize a generated sequence
pub fn render_markup(items: &[Rendered<MarkupNode>]) -> String {
    let mut out = String::new();
    write_sequence(items, &mut out);
    out
}

fn write_sequence(items: &[Rendered<MarkupNode>], out: &mut String) {
    for item in items {
        match item {
            Rendered::Text(text) => escape_into(text, out),
            Rendered::Node(node) => node.write_markup(out),
        }
    }
}

/// `false` and `null` omit the attribute, `true` writes it bare.
fn write_attributes(attributes: &Attributes, out: &mut String) {
    for (name, value) in attributes {
        if !is_attribute_name(name) {
            ::log::warn!("[JsonView] Dropping attribute with invalid name `{}`", name);
            continue;
        }
        let text = match value {
            Value::Null | Value::Bool(false) => continue,
            Value::Bool(true) => {
                out.push(' ');
                out.push_str(name);
                continue;
            }
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        escape_into(&text, out);
        out.push('"');
    }
}

/// Non-empty, and free of whitespace, quotes, `<`, `>`, `/`, `=` and controls.
fn is_attribute_name(name: &str) -> bool {
    !name.is_empty()
        && !name.chars().any(|c| {
            c.is_whitespace()
                || c.is_control()
                || matches!(c, '"' | '\'' | '<' | '>' | '/' | '=')
        })
}

fn escape_into(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}

/// Host with a fixed global component namespace.
///
/// # Example
///
/// ```rust,ignore
/// let host = MarkupHost::new()
///     .with_component("Card")
///     .with_alias("Link", "a");
/// let generator = TreeGenerator::new(host);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MarkupHost {
    globals: HashMap<String, Target<MarkupComponent>>,
}

impl MarkupHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make a structured component globally available
    pub fn with_component(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.globals
            .insert(name.clone(), Target::Component(MarkupComponent::new(name)));
        self
    }

    /// Make `name` resolve to a plain tag
    pub fn with_alias(mut self, name: impl Into<String>, tag: impl Into<String>) -> Self {
        self.globals.insert(name.into(), Target::tag(tag));
        self
    }

    /// Check if a name is globally available
    pub fn has_global(&self, name: &str) -> bool {
        self.globals.contains_key(name)
    }
}

impl RenderHost for MarkupHost {
    type Node = MarkupNode;
    type Component = MarkupComponent;

    fn create_node(
        &self,
        target: Target<MarkupComponent>,
        attributes: Option<Attributes>,
        children: Option<Children<MarkupNode>>,
    ) -> MarkupNode {
        MarkupNode {
            target,
            attributes,
            children,
        }
    }

    fn resolve_component(&self, name: &str) -> Option<Target<MarkupComponent>> {
        self.globals.get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::TreeGenerator;
    use serde_json::json;

    fn render(generator: &TreeGenerator<MarkupHost>, content: Value) -> String {
        let nodes = generator
            .generate(&content, false)
            .and_then(Children::into_nodes)
            .unwrap();
        render_markup(&nodes)
    }

    #[test]
    fn test_plain_tree() {
        let generator = TreeGenerator::new(MarkupHost::new());

        let markup = render(
            &generator,
            json!([
                "Intro ",
                {
                    "element": "p",
                    "attributes": {"class": "lead"},
                    "children": ["Hello ", {"element": "b", "children": ["world"]}]
                },
                {}
            ]),
        );

        assert_eq!(
            markup,
            r#"Intro <p class="lead">Hello <b>world</b></p><div></div>"#
        );
    }

    #[test]
    fn test_component_slots() {
        let host = MarkupHost::new().with_component("Card");
        let generator = TreeGenerator::new(host);

        let markup = render(
            &generator,
            json!([{
                "component": "Card",
                "attributes": {"title": "Hi"},
                "children": [
                    {"element": "h1", "slot": "header", "children": ["Title"]},
                    "Body",
                    {"element": "small", "slot": "footer", "children": ["End"]}
                ]
            }]),
        );

        assert_eq!(
            markup,
            concat!(
                r#"<Card title="Hi">Body"#,
                "<template #header><h1>Title</h1></template>",
                "<template #footer><small>End</small></template>",
                "</Card>"
            )
        );
    }

    #[test]
    fn test_alias_renders_as_tag() {
        let host = MarkupHost::new().with_alias("Link", "a");
        let generator = TreeGenerator::new(host);

        let markup = render(
            &generator,
            json!([{
                "component": "Link",
                "attributes": {"href": "/"},
                "children": [{"slot": "x", "element": "i"}]
            }]),
        );

        assert_eq!(markup, r#"<a href="/"><i></i></a>"#);
    }

    #[test]
    fn test_attribute_values() {
        let generator = TreeGenerator::new(MarkupHost::new());

        let markup = render(
            &generator,
            json!([{
                "element": "input",
                "attributes": {
                    "disabled": true,
                    "hidden": false,
                    "value": 3,
                    "data": {"a": 1},
                    "name": null
                }
            }]),
        );

        assert_eq!(
            markup,
            r#"<input disabled value="3" data="{&quot;a&quot;:1}"></input>"#
        );
    }

    #[test]
    fn test_text_is_escaped() {
        let generator = TreeGenerator::new(MarkupHost::new());

        let markup = render(&generator, json!(["<b> & \"q\""]));
        assert_eq!(markup, "&lt;b&gt; &amp; &quot;q&quot;");
    }

    #[test]
    fn test_tag_name_is_escaped() {
        let generator = TreeGenerator::new(MarkupHost::new());

        let markup = render(&generator, json!([{"element": "x></x><script"}]));
        assert_eq!(
            markup,
            "<x&gt;&lt;/x&gt;&lt;script></x&gt;&lt;/x&gt;&lt;script>"
        );
    }

    #[test]
    fn test_component_name_is_escaped() {
        let host = MarkupHost::new().with_component("A\"B");
        let generator = TreeGenerator::new(host);

        let markup = render(&generator, json!([{"component": "A\"B"}]));
        assert_eq!(markup, "<A&quot;B></A&quot;B>");
    }

    #[test]
    fn test_slot_name_is_escaped() {
        let host = MarkupHost::new().with_component("Card");
        let generator = TreeGenerator::new(host);

        let markup = render(
            &generator,
            json!([{
                "component": "Card",
                "children": [{"slot": "s></template><b", "element": "i"}]
            }]),
        );
        assert_eq!(
            markup,
            "<Card><template #s&gt;&lt;/template&gt;&lt;b><i></i></template></Card>"
        );
    }

    #[test]
    fn test_invalid_attribute_names_are_dropped() {
        let generator = TreeGenerator::new(MarkupHost::new());

        let markup = render(
            &generator,
            json!([{
                "element": "p",
                "attributes": {
                    "a\"><script>x</script": "1",
                    "on click": true,
                    "x=y": "2",
                    "": "3",
                    "data-id": "ok"
                }
            }]),
        );
        assert_eq!(markup, r#"<p data-id="ok"></p>"#);
    }

    #[test]
    fn test_host_globals() {
        let host = MarkupHost::new().with_component("Card").with_alias("Link", "a");

        assert!(host.has_global("Card"));
        assert_eq!(
            host.resolve_component("Card"),
            Some(Target::Component(MarkupComponent::new("Card")))
        );
        assert_eq!(host.resolve_component("Link"), Some(Target::tag("a")));
        assert!(host.resolve_component("Missing").is_none());
    }
}
