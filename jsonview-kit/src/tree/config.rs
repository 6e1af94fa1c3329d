//! Generator configuration

use serde::{Deserialize, Serialize};

/// Tag used when a descriptor resolves no component and names no element.
pub const DEFAULT_ELEMENT: &str = "div";

/// Tunables for [`TreeGenerator`](super::TreeGenerator).
///
/// # Example JSON
///
/// ```text
/// {"defaultElement": "section", "maxDepth": 64}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeneratorConfig {
    /// Generic container tag for the last step of the fallback chain
    pub default_element: String,

    /// Deepest child sequence that is still generated.
    ///
    /// The root sequence is depth 0. `None` means no limit, so very deep or
    /// self-similar input recurses as far as the input goes.
    pub max_depth: Option<usize>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            default_element: DEFAULT_ELEMENT.to_owned(),
            max_depth: None,
        }
    }
}

impl GeneratorConfig {
    /// Set the generic container tag
    pub fn with_default_element(mut self, tag: impl Into<String>) -> Self {
        self.default_element = tag.into();
        self
    }

    /// Limit the nesting depth
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Check if a sequence at `depth` is past the limit
    pub fn exceeds_depth(&self, depth: usize) -> bool {
        self.max_depth.is_some_and(|max| depth > max)
    }
}
