//! # Description
//!
//! JsonView Kit is a Rust crate that renders declarative JSON descriptions of
//! user interfaces through any retained-mode renderer.
//!
//! # Features
//!
//! - 🧩 Describe UI as data: component, element, attributes, children and slots.
//! - 🔎 Local component registry, falling back to the host's global components.
//! - 🪟 Named slots, generated lazily on every render.
//! - 🔌 Bring your own renderer by implementing [`tree::RenderHost`].
//! - 📝 Built-in markup host (`markup` feature) for previews and tests.

pub mod tree;
pub mod widgets;

pub mod prelude;
