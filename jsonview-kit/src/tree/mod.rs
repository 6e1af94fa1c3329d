//! JSON UI Trees
//!
//! Turns a declarative, JSON-serializable description of a UI tree into the
//! nodes of a retained-mode renderer. Trees can be stored, sent over the wire
//! or generated by a program, and are materialized again on each render pass.
//!
//! # Architecture
//!
//! ```text
//!   JSON node sequence
//!          ↓
//!   Descriptor (Text | Element)
//!          ↓
//!     TreeGenerator ──── ComponentRegistry (local names)
//!          │
//!          ├──────────── RenderHost::resolve_component (global names)
//!          ↓
//!   RenderHost::create_node
//!          ↓
//!   Host render tree
//! ```
//!
//! A component name resolves through the registry first, then through the
//! host. When neither knows it the node falls back to its `element` tag, and
//! finally to a generic container. Children of structured components are
//! partitioned into a [`SlotBundle`]; children of plain tags stay an ordinary
//! sequence.
//!
//! # Example
//!
//! ```rust,ignore
//! use jsonview_kit::tree::*;
//!
//! let generator = TreeGenerator::new(MarkupHost::new().with_component("Card"));
//! let nodes = generator.generate_json(r#"[{"component": "Card", "children": ["Hi"]}]"#, false)?;
//! ```

mod config;
mod descriptor;
mod generator;
mod host;
mod registry;
mod slots;

#[cfg(feature = "markup")]
pub mod markup;

pub use config::*;
pub use descriptor::*;
pub use generator::*;
pub use host::*;
pub use registry::*;
pub use slots::*;

#[cfg(feature = "markup")]
pub use markup::{MarkupComponent, MarkupHost, MarkupNode, render_markup};
