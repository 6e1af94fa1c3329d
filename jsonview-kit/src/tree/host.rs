//! Render Host
//!
//! The rendering engine the generator feeds. It owns node construction and
//! the global component namespace; the generator only decides *what* to build.

use super::descriptor::Attributes;
use super::registry::Target;
use super::slots::Children;

/// A retained-mode rendering engine.
///
/// Called synchronously from within a render pass. Implementations that need
/// to record state while rendering should use interior mutability.
pub trait RenderHost {
    /// The host's native node
    type Node;

    /// A structured component definition
    type Component: Clone;

    /// Build one native node.
    ///
    /// `children` is `None` when the descriptor had no (valid) children,
    /// [`Children::Slots`] for structured components and
    /// [`Children::Nodes`] otherwise.
    fn create_node(
        &self,
        target: Target<Self::Component>,
        attributes: Option<Attributes>,
        children: Option<Children<Self::Node>>,
    ) -> Self::Node;

    /// Look up a component in the host's global namespace.
    ///
    /// Only consulted for names the local registry doesn't know. Returning
    /// `None` makes the generator fall back to the descriptor's element tag.
    fn resolve_component(&self, name: &str) -> Option<Target<Self::Component>>;
}
