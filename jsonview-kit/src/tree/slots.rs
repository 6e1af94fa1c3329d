//! Generated output: rendered sequences and slot bundles.

use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;

use super::descriptor::DEFAULT_SLOT;

/// One item of a generated sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum Rendered<N> {
    /// Literal text, passed through unchanged
    Text(String),
    /// A node built by the host
    Node(N),
}

impl<N> Rendered<N> {
    /// Get the text if this is literal text
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Rendered::Text(text) => Some(text),
            Rendered::Node(_) => None,
        }
    }

    /// Get the host node if this is a node
    pub fn as_node(&self) -> Option<&N> {
        match self {
            Rendered::Node(node) => Some(node),
            Rendered::Text(_) => None,
        }
    }
}

/// Deferred generation of one slot's content.
///
/// Each call generates the content again; nothing is cached.
pub type SlotFn<N> = Rc<dyn Fn() -> Vec<Rendered<N>>>;

/// Slot name to deferred content, handed to structured components.
///
/// Always holds a [`DEFAULT_SLOT`] entry, listed first; named slots follow in
/// the order they first appeared among the children.
pub struct SlotBundle<N> {
    slots: IndexMap<String, SlotFn<N>>,
}

impl<N> SlotBundle<N> {
    pub(crate) fn new(default: SlotFn<N>) -> Self {
        let mut slots = IndexMap::new();
        slots.insert(DEFAULT_SLOT.to_owned(), default);
        SlotBundle { slots }
    }

    pub(crate) fn insert(&mut self, name: String, content: SlotFn<N>) {
        self.slots.insert(name, content);
    }

    /// Get the deferred content of a slot
    pub fn get(&self, name: &str) -> Option<&SlotFn<N>> {
        self.slots.get(name)
    }

    /// Generate the content of a slot, if it exists
    pub fn render(&self, name: &str) -> Option<Vec<Rendered<N>>> {
        self.slots.get(name).map(|content| content())
    }

    /// Generate the default slot's content
    pub fn render_default(&self) -> Vec<Rendered<N>> {
        self.render(DEFAULT_SLOT).unwrap_or_default()
    }

    /// Check if a slot exists
    pub fn contains(&self, name: &str) -> bool {
        self.slots.contains_key(name)
    }

    /// Get all slot names, default first
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.slots.keys().map(String::as_str)
    }

    /// Get the named slots only, in order of appearance
    pub fn named(&self) -> impl Iterator<Item = (&str, &SlotFn<N>)> {
        self.slots
            .iter()
            .filter(|(name, _)| name.as_str() != DEFAULT_SLOT)
            .map(|(name, content)| (name.as_str(), content))
    }

    /// Number of slots, including the default one
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Always false: the default slot is always present
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl<N> Clone for SlotBundle<N> {
    fn clone(&self) -> Self {
        SlotBundle {
            slots: self.slots.clone(),
        }
    }
}

impl<N> fmt::Debug for SlotBundle<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlotBundle")
            .field("slots", &self.slots.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Children handed to the host for one node.
#[derive(Debug, Clone)]
pub enum Children<N> {
    /// An ordinary sequence, for plain tags
    Nodes(Vec<Rendered<N>>),
    /// Slot bundle, for structured components
    Slots(SlotBundle<N>),
}

impl<N> Children<N> {
    /// Get the sequence if these are plain children
    pub fn as_nodes(&self) -> Option<&[Rendered<N>]> {
        match self {
            Children::Nodes(nodes) => Some(nodes),
            Children::Slots(_) => None,
        }
    }

    /// Get the bundle if these are slotted children
    pub fn as_slots(&self) -> Option<&SlotBundle<N>> {
        match self {
            Children::Slots(slots) => Some(slots),
            Children::Nodes(_) => None,
        }
    }

    /// Take the sequence if these are plain children
    pub fn into_nodes(self) -> Option<Vec<Rendered<N>>> {
        match self {
            Children::Nodes(nodes) => Some(nodes),
            Children::Slots(_) => None,
        }
    }

    /// Take the bundle if these are slotted children
    pub fn into_slots(self) -> Option<SlotBundle<N>> {
        match self {
            Children::Slots(slots) => Some(slots),
            Children::Nodes(_) => None,
        }
    }
}
