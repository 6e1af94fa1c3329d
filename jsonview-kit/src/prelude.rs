//! Common imports for rendering JSON trees.

pub use crate::tree::{
    Children, ComponentRegistry, Descriptor, ElementDescriptor, GeneratorConfig, RenderHost,
    Rendered, SlotBundle, Target, TreeGenerator,
};
pub use crate::widgets::{JsonView, JsonViewProps};

#[cfg(feature = "markup")]
pub use crate::tree::{MarkupHost, MarkupNode, render_markup};
