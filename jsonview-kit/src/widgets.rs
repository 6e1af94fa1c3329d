//! Components provided by this crate.

pub mod json_view;

pub use json_view::{JsonView, JsonViewProps};
