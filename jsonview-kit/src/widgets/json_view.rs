//! JsonView component
//!
//! The conventional caller of the generator: a component with one required
//! property holding the JSON tree, rendered again on every render pass.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::tree::{Children, RenderHost, TreeGenerator};

/// Properties accepted by [`JsonView`].
///
/// # Example JSON
///
/// ```text
/// {"content": [{"element": "p", "children": ["Hello"]}]}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonViewProps {
    /// The UI tree. Required; anything but an array renders nothing.
    pub content: Value,
}

/// Renders a JSON UI tree through a [`TreeGenerator`].
#[derive(Debug, Clone, PartialEq)]
pub struct JsonView {
    props: JsonViewProps,
}

impl JsonView {
    /// Component name under which hosts usually register this view
    pub const NAME: &'static str = "JsonView";

    pub fn new(content: Value) -> Self {
        Self::from_props(JsonViewProps { content })
    }

    pub fn from_props(props: JsonViewProps) -> Self {
        JsonView { props }
    }

    /// Parse the props object, failing if `content` is missing.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json).map(Self::from_props)
    }

    pub fn props(&self) -> &JsonViewProps {
        &self.props
    }

    pub fn content(&self) -> &Value {
        &self.props.content
    }

    /// Replace the tree; takes effect on the next render
    pub fn set_content(&mut self, content: Value) {
        self.props.content = content;
    }

    /// Render the current tree.
    pub fn render<H: RenderHost + 'static>(
        &self,
        generator: &TreeGenerator<H>,
    ) -> Option<Children<H::Node>> {
        generator.generate(&self.props.content, false)
    }
}
