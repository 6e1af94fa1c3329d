//! Document files read by the command line.
//!
//! A document is either a bare node sequence or an object carrying the
//! sequence together with its components and generator settings:
//!
//! ```text
//! {
//!   "config": {"defaultElement": "div", "maxDepth": 64},
//!   "components": {"Card": {}, "Box": {"tag": "section"}},
//!   "globals": {"Link": {"tag": "a"}},
//!   "content": [{"component": "Card", "children": ["Hello"]}]
//! }
//! ```
//!
//! `components` go to the generator's local registry, `globals` to the host's
//! namespace. An entry with a `tag` resolves to that plain tag; any other
//! entry is a structured component that receives slots.

use std::fs;
use std::path::Path;

use anyhow::Context;
use indexmap::IndexMap;
use jsonview_kit::tree::{ComponentRegistry, GeneratorConfig, MarkupComponent, MarkupHost, Target};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ComponentSpec {
    #[serde(default)]
    pub tag: Option<String>,
}

impl ComponentSpec {
    fn target(&self, name: &str) -> Target<MarkupComponent> {
        match &self.tag {
            Some(tag) => Target::tag(tag.as_str()),
            None => Target::Component(MarkupComponent::new(name)),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Document {
    pub config: GeneratorConfig,
    pub components: IndexMap<String, ComponentSpec>,
    pub globals: IndexMap<String, ComponentSpec>,
    pub content: Value,
}

impl Document {
    pub fn parse(json: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(json)?;
        if value.is_array() {
            return Ok(Document {
                content: value,
                ..Default::default()
            });
        }
        serde_json::from_value(value)
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::parse(&json).with_context(|| format!("failed to parse {}", path.display()))
    }

    /// Local registry holding `components`
    pub fn registry(&self) -> ComponentRegistry<MarkupComponent> {
        ComponentRegistry::with_components(
            self.components
                .iter()
                .map(|(name, spec)| (name.as_str(), spec.target(name))),
        )
    }

    /// Markup host exposing `globals`
    pub fn host(&self) -> MarkupHost {
        self.globals
            .iter()
            .fold(MarkupHost::new(), |host, (name, spec)| match &spec.tag {
                Some(tag) => host.with_alias(name.as_str(), tag.as_str()),
                None => host.with_component(name.as_str()),
            })
    }
}
