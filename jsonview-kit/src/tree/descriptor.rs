//! Node Descriptors
//!
//! The JSON shape a UI tree is described with. Every entry of a tree is either
//! literal text or a structured element description.
//!
//! Descriptors are read leniently: nothing about the input is validated, and any
//! field with an unexpected type is simply treated as absent. `component` and
//! `slot` are name keys, so truthy numbers and `true` are read as their text.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Attribute/prop mapping handed to the host as-is.
pub type Attributes = Map<String, Value>;

/// Slot used for children that don't name one.
pub const DEFAULT_SLOT: &str = "default";

/// One entry of a UI tree.
///
/// # Examples
///
/// ```json
/// "Hello"
/// {"component": "Card", "attributes": {"title": "Hi"}, "children": ["body"]}
/// {"element": "span", "slot": "footer", "children": ["Bye"]}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Descriptor {
    /// Literal text, never resolved or recursed into
    Text(String),
    /// A structured node
    Element(ElementDescriptor),
}

/// The structured variant of a [`Descriptor`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ElementDescriptor {
    /// Name of a registered or host-global component
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,

    /// Tag used when no component resolves
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element: Option<String>,

    /// Attributes/props passed through to the host
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Attributes>,

    /// Child descriptors, in render order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Descriptor>>,

    /// Slot of the parent component this node is inserted into
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slot: Option<String>,
}

impl Descriptor {
    /// Create a text descriptor
    pub fn text(text: impl Into<String>) -> Self {
        Descriptor::Text(text.into())
    }

    /// Check if this is literal text
    pub fn is_text(&self) -> bool {
        matches!(self, Descriptor::Text(_))
    }

    /// Get the element description, if this isn't text
    pub fn as_element(&self) -> Option<&ElementDescriptor> {
        match self {
            Descriptor::Element(element) => Some(element),
            Descriptor::Text(_) => None,
        }
    }

    /// The named slot this descriptor is assigned to.
    ///
    /// Returns `None` for text, for elements without a slot, and for elements
    /// explicitly assigned to [`DEFAULT_SLOT`].
    pub fn named_slot(&self) -> Option<&str> {
        match self {
            Descriptor::Element(element) => {
                element.slot.as_deref().filter(|slot| *slot != DEFAULT_SLOT)
            }
            Descriptor::Text(_) => None,
        }
    }
}

impl ElementDescriptor {
    /// Describe a node rendered through the named component
    pub fn component(name: impl Into<String>) -> Self {
        ElementDescriptor {
            component: Some(name.into()),
            ..Default::default()
        }
    }

    /// Describe a node rendered as a plain tag
    pub fn element(tag: impl Into<String>) -> Self {
        ElementDescriptor {
            element: Some(tag.into()),
            ..Default::default()
        }
    }

    /// Set the fallback tag
    pub fn with_element(mut self, tag: impl Into<String>) -> Self {
        self.element = Some(tag.into());
        self
    }

    /// Add one attribute
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes
            .get_or_insert_with(Map::new)
            .insert(name.into(), value.into());
        self
    }

    /// Set the children
    pub fn with_children(mut self, children: impl IntoIterator<Item = Descriptor>) -> Self {
        self.children = Some(children.into_iter().collect());
        self
    }

    /// Assign to a slot of the parent component
    pub fn in_slot(mut self, slot: impl Into<String>) -> Self {
        self.slot = Some(slot.into());
        self
    }

    fn from_fields(fields: &Map<String, Value>) -> Self {
        ElementDescriptor {
            component: name_key(fields.get("component")),
            element: non_empty_string(fields.get("element")),
            attributes: fields.get("attributes").and_then(Value::as_object).cloned(),
            children: fields.get("children").and_then(parse_sequence),
            slot: name_key(fields.get("slot")),
        }
    }
}

/// Read a node sequence.
///
/// Returns `None` when `value` is not an array; individual entries never fail.
pub fn parse_sequence(value: &Value) -> Option<Vec<Descriptor>> {
    value
        .as_array()
        .map(|items| items.iter().map(Descriptor::from).collect())
}

/// Empty strings count as absent, same as a missing field.
fn non_empty_string(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}

/// Read a lookup key. Falsy scalars (`""`, `0`, `false`, `null`) are absent,
/// other scalars become their text; objects and arrays are absent.
fn name_key(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Bool(true) => Some("true".to_owned()),
        Value::Number(n) if n.as_f64().is_some_and(|f| f != 0.0) => Some(number_key(n)),
        _ => None,
    }
}

/// Integral floats print without a fraction, so `5.0` and `5` share a key.
fn number_key(n: &serde_json::Number) -> String {
    match n.as_f64() {
        Some(f) if !n.is_i64() && !n.is_u64() && f.fract() == 0.0 && f.abs() < 1e15 => {
            format!("{}", f as i64)
        }
        _ => n.to_string(),
    }
}

impl From<&Value> for Descriptor {
    fn from(value: &Value) -> Self {
        match value {
            Value::String(text) => Descriptor::Text(text.clone()),
            Value::Object(fields) => Descriptor::Element(ElementDescriptor::from_fields(fields)),
            // Anything else has no usable field and renders as a bare container.
            _ => Descriptor::Element(ElementDescriptor::default()),
        }
    }
}

impl From<Value> for Descriptor {
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) => Descriptor::Text(text),
            other => Descriptor::from(&other),
        }
    }
}

impl From<&str> for Descriptor {
    fn from(text: &str) -> Self {
        Descriptor::text(text)
    }
}

impl From<ElementDescriptor> for Descriptor {
    fn from(element: ElementDescriptor) -> Self {
        Descriptor::Element(element)
    }
}

impl<'de> Deserialize<'de> for Descriptor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Descriptor::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_string_is_text() {
        let descriptor = Descriptor::from(json!("hello"));
        assert_eq!(descriptor, Descriptor::text("hello"));
        assert!(descriptor.is_text());
    }

    #[test]
    fn test_element_fields() {
        let descriptor: Descriptor = serde_json::from_value(json!({
            "component": "Card",
            "element": "section",
            "attributes": {"title": "Hi", "elevated": true},
            "children": ["body", {"element": "hr"}],
            "slot": "header"
        }))
        .unwrap();

        let element = descriptor.as_element().unwrap();
        assert_eq!(element.component.as_deref(), Some("Card"));
        assert_eq!(element.element.as_deref(), Some("section"));
        assert_eq!(element.attributes.as_ref().unwrap()["title"], json!("Hi"));
        assert_eq!(element.children.as_ref().unwrap().len(), 2);
        assert_eq!(descriptor.named_slot(), Some("header"));
    }

    #[test]
    fn test_wrong_types_are_absent() {
        let descriptor = Descriptor::from(json!({
            "component": {"name": "Card"},
            "element": "",
            "attributes": "not-a-map",
            "children": {"not": "an array"},
            "slot": ["x"]
        }));
        assert_eq!(descriptor, Descriptor::Element(ElementDescriptor::default()));
    }

    #[test]
    fn test_scalar_names_become_keys() {
        let descriptor = Descriptor::from(json!({"component": 42, "slot": 5}));
        let element = descriptor.as_element().unwrap();
        assert_eq!(element.component.as_deref(), Some("42"));
        assert_eq!(descriptor.named_slot(), Some("5"));

        let flagged = Descriptor::from(json!({"component": 1.5, "slot": true}));
        assert_eq!(flagged.as_element().unwrap().component.as_deref(), Some("1.5"));
        assert_eq!(flagged.named_slot(), Some("true"));

        assert_eq!(Descriptor::from(json!({"slot": 3.0})).named_slot(), Some("3"));
    }

    #[test]
    fn test_falsy_names_are_absent() {
        for value in [json!(""), json!(0), json!(0.0), json!(false), json!(null)] {
            let descriptor = Descriptor::from(json!({"component": value, "slot": value}));
            assert_eq!(descriptor, Descriptor::Element(ElementDescriptor::default()));
        }
    }

    #[test]
    fn test_non_object_becomes_empty_element() {
        for value in [json!(7), json!(null), json!(true), json!([1, 2])] {
            assert_eq!(
                Descriptor::from(&value),
                Descriptor::Element(ElementDescriptor::default())
            );
        }
    }

    #[test]
    fn test_default_slot_is_not_named() {
        let explicit = Descriptor::from(ElementDescriptor::element("p").in_slot("default"));
        let missing = Descriptor::from(ElementDescriptor::element("p"));
        let empty = Descriptor::from(json!({"element": "p", "slot": ""}));

        assert_eq!(explicit.named_slot(), None);
        assert_eq!(missing.named_slot(), None);
        assert_eq!(empty.named_slot(), None);
        assert_eq!(Descriptor::text("x").named_slot(), None);
    }

    #[test]
    fn test_parse_sequence_requires_array() {
        assert!(parse_sequence(&json!({"element": "div"})).is_none());
        assert!(parse_sequence(&json!("text")).is_none());
        assert_eq!(parse_sequence(&json!([])), Some(vec![]));
    }

    #[test]
    fn test_serialize_skips_absent_fields() {
        let descriptor = Descriptor::from(
            ElementDescriptor::component("Card")
                .with_attribute("title", "Hi")
                .with_children([Descriptor::text("body")]),
        );
        assert_eq!(
            serde_json::to_value(&descriptor).unwrap(),
            json!({"component": "Card", "attributes": {"title": "Hi"}, "children": ["body"]})
        );
    }
}
