//! Tree Generator
//!
//! Walks a JSON UI description and asks the [`RenderHost`] to build one node
//! per structured descriptor, resolving component names along the way.

use std::cell::RefCell;
use std::rc::Rc;

use indexmap::IndexMap;
use serde_json::Value;

use super::{
    config::GeneratorConfig,
    descriptor::{Descriptor, ElementDescriptor, parse_sequence},
    host::RenderHost,
    registry::{ComponentRegistry, Target},
    slots::{Children, Rendered, SlotBundle, SlotFn},
};

/// Converts node sequences into host nodes.
///
/// The generator owns its component registry, so independent generators never
/// share registrations. Cloning is cheap and yields a handle to the same
/// generator; slot contents hold such a handle so they can be generated later.
///
/// Generation never fails: unknown components fall back to the descriptor's
/// element tag, then to [`GeneratorConfig::default_element`].
///
/// # Example
///
/// ```rust,ignore
/// let generator = TreeGenerator::new(host);
/// generator.register([("Card", Target::Component(card))]);
///
/// let content = serde_json::json!([
///     {"component": "Card", "children": [
///         {"element": "h1", "slot": "header", "children": ["Title"]},
///         "Body text"
///     ]}
/// ]);
/// let nodes = generator.generate(&content, false);
/// ```
pub struct TreeGenerator<H: RenderHost> {
    inner: Rc<GeneratorState<H>>,
}

struct GeneratorState<H: RenderHost> {
    host: H,
    registry: RefCell<ComponentRegistry<H::Component>>,
    config: GeneratorConfig,
}

impl<H: RenderHost> Clone for TreeGenerator<H> {
    fn clone(&self) -> Self {
        TreeGenerator {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<H: RenderHost + 'static> TreeGenerator<H> {
    /// Create a generator with an empty registry
    pub fn new(host: H) -> Self {
        Self::with_registry(host, ComponentRegistry::new())
    }

    /// Create a generator around an existing registry
    pub fn with_registry(host: H, registry: ComponentRegistry<H::Component>) -> Self {
        Self::with_config(host, registry, GeneratorConfig::default())
    }

    pub fn with_config(
        host: H,
        registry: ComponentRegistry<H::Component>,
        config: GeneratorConfig,
    ) -> Self {
        TreeGenerator {
            inner: Rc::new(GeneratorState {
                host,
                registry: RefCell::new(registry),
                config,
            }),
        }
    }

    /// Get the host
    pub fn host(&self) -> &H {
        &self.inner.host
    }

    /// Get the configuration
    pub fn config(&self) -> &GeneratorConfig {
        &self.inner.config
    }

    /// Register components in the local registry.
    ///
    /// Existing bindings are replaced. Slot contents generated afterwards,
    /// including those of bundles created earlier, see the new bindings.
    pub fn register<I, K>(&self, entries: I)
    where
        I: IntoIterator<Item = (K, Target<H::Component>)>,
        K: Into<String>,
    {
        self.inner.registry.borrow_mut().register(entries);
    }

    /// Get the locally registered definition for `name`
    pub fn lookup(&self, name: &str) -> Option<Target<H::Component>> {
        self.inner.registry.borrow().lookup(name).cloned()
    }

    /// Get all locally registered names, sorted
    pub fn registered_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .inner
            .registry
            .borrow()
            .names()
            .map(str::to_owned)
            .collect();
        names.sort();
        names
    }

    /// Resolve the component a descriptor names.
    ///
    /// Returns `None` without consulting anything when the descriptor names no
    /// component.
    pub fn resolve(&self, element: &ElementDescriptor) -> Option<Target<H::Component>> {
        element
            .component
            .as_deref()
            .and_then(|name| self.resolve_name(name))
    }

    /// Generate from raw JSON.
    ///
    /// Returns `None` when `content` is not an array. Otherwise returns
    /// [`Children::Slots`] when `slot_mode` is set and [`Children::Nodes`]
    /// when it isn't.
    pub fn generate(&self, content: &Value, slot_mode: bool) -> Option<Children<H::Node>> {
        let descriptors = parse_sequence(content)?;
        Some(self.sequence_at(&descriptors, slot_mode, 0))
    }

    /// Parse a JSON string and generate from it.
    pub fn generate_json(
        &self,
        json: &str,
        slot_mode: bool,
    ) -> Result<Option<Children<H::Node>>, serde_json::Error> {
        let content: Value = serde_json::from_str(json)?;
        Ok(self.generate(&content, slot_mode))
    }

    /// Generate one output per descriptor, in order
    pub fn generate_nodes(&self, descriptors: &[Descriptor]) -> Vec<Rendered<H::Node>> {
        self.nodes_at(descriptors, 0)
    }

    /// Partition descriptors into slots
    pub fn generate_slots(&self, descriptors: &[Descriptor]) -> SlotBundle<H::Node> {
        self.slots_at(descriptors, 0)
    }

    fn sequence_at(
        &self,
        descriptors: &[Descriptor],
        slot_mode: bool,
        depth: usize,
    ) -> Children<H::Node> {
        if slot_mode {
            Children::Slots(self.slots_at(descriptors, depth))
        } else {
            Children::Nodes(self.nodes_at(descriptors, depth))
        }
    }

    fn nodes_at(&self, descriptors: &[Descriptor], depth: usize) -> Vec<Rendered<H::Node>> {
        descriptors
            .iter()
            .map(|descriptor| match descriptor {
                Descriptor::Text(text) => Rendered::Text(text.clone()),
                Descriptor::Element(element) => Rendered::Node(self.element_at(element, depth)),
            })
            .collect()
    }

    fn slots_at(&self, descriptors: &[Descriptor], depth: usize) -> SlotBundle<H::Node> {
        let mut default_content = Vec::new();
        // A later descriptor for the same slot replaces the earlier one.
        let mut named: IndexMap<&str, &Descriptor> = IndexMap::new();

        for descriptor in descriptors {
            match descriptor.named_slot() {
                Some(name) => {
                    named.insert(name, descriptor);
                }
                None => default_content.push(descriptor.clone()),
            }
        }

        let mut bundle = SlotBundle::new(self.deferred(default_content, depth));
        for (name, descriptor) in named {
            bundle.insert(name.to_owned(), self.deferred(vec![descriptor.clone()], depth));
        }
        bundle
    }

    fn deferred(&self, descriptors: Vec<Descriptor>, depth: usize) -> SlotFn<H::Node> {
        let generator = self.clone();
        Rc::new(move || generator.nodes_at(&descriptors, depth))
    }

    fn element_at(&self, element: &ElementDescriptor, depth: usize) -> H::Node {
        let resolved = self.resolve(element);
        let slot_mode = resolved.as_ref().is_some_and(Target::is_component);
        let target = resolved.unwrap_or_else(|| {
            let tag = element
                .element
                .as_deref()
                .unwrap_or(&self.inner.config.default_element);
            Target::tag(tag)
        });

        let children = element
            .children
            .as_deref()
            .and_then(|children| self.children_at(children, slot_mode, depth + 1));

        self.inner
            .host
            .create_node(target, element.attributes.clone(), children)
    }

    fn children_at(
        &self,
        children: &[Descriptor],
        slot_mode: bool,
        depth: usize,
    ) -> Option<Children<H::Node>> {
        if self.inner.config.exceeds_depth(depth) {
            ::log::warn!(
                "[JsonView] Dropping {} children nested deeper than {:?}",
                children.len(),
                self.inner.config.max_depth
            );
            return None;
        }
        Some(self.sequence_at(children, slot_mode, depth))
    }

    fn resolve_name(&self, name: &str) -> Option<Target<H::Component>> {
        if let Some(local) = self.lookup(name) {
            return Some(local);
        }

        let global = self.inner.host.resolve_component(name);
        if global.is_none() {
            ::log::debug!(
                "[JsonView] Component `{}` not found, falling back to element tag",
                name
            );
        }
        global
    }
}
