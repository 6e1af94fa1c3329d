//! Component Registry
//!
//! Maps component names used in descriptors to host component definitions.

use std::collections::HashMap;

/// What a component name resolves to.
///
/// Hosts distinguish plain tags from structured components: only a
/// structured component receives its children partitioned into slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target<C> {
    /// A primitive tag name, rendered as-is
    Tag(String),
    /// A structured host component
    Component(C),
}

impl<C> Target<C> {
    /// Create a tag target
    pub fn tag(name: impl Into<String>) -> Self {
        Target::Tag(name.into())
    }

    /// Check if this is a plain tag
    pub fn is_tag(&self) -> bool {
        matches!(self, Target::Tag(_))
    }

    /// Check if this is a structured component
    pub fn is_component(&self) -> bool {
        matches!(self, Target::Component(_))
    }

    /// Get the tag name if this is a plain tag
    pub fn as_tag(&self) -> Option<&str> {
        match self {
            Target::Tag(tag) => Some(tag),
            Target::Component(_) => None,
        }
    }

    /// Get the component if this is a structured component
    pub fn as_component(&self) -> Option<&C> {
        match self {
            Target::Component(component) => Some(component),
            Target::Tag(_) => None,
        }
    }
}

/// Local table of component definitions, consulted before the host's
/// global resolver.
///
/// Entries are only ever added or replaced; the last registration for a
/// name wins.
///
/// # Example
///
/// ```rust,ignore
/// let mut registry = ComponentRegistry::new();
/// registry.register([("Card", Target::Component(card)), ("Box", Target::tag("div"))]);
///
/// assert!(registry.lookup("Card").is_some_and(Target::is_component));
/// ```
#[derive(Debug, Clone)]
pub struct ComponentRegistry<C> {
    definitions: HashMap<String, Target<C>>,
}

impl<C> Default for ComponentRegistry<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> ComponentRegistry<C> {
    /// Create a new empty registry
    pub fn new() -> Self {
        ComponentRegistry {
            definitions: HashMap::new(),
        }
    }

    /// Create a registry holding the given entries
    pub fn with_components<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, Target<C>)>,
        K: Into<String>,
    {
        let mut registry = Self::new();
        registry.register(entries);
        registry
    }

    /// Register every entry, replacing existing bindings of the same name
    pub fn register<I, K>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (K, Target<C>)>,
        K: Into<String>,
    {
        for (name, definition) in entries {
            self.register_one(name, definition);
        }
    }

    /// Register a single component
    pub fn register_one(&mut self, name: impl Into<String>, definition: Target<C>) {
        let name = name.into();
        if self.definitions.contains_key(&name) {
            ::log::debug!("[JsonView] Replacing registered component `{}`", name);
        }
        self.definitions.insert(name, definition);
    }

    /// Get the definition registered under `name`
    pub fn lookup(&self, name: &str) -> Option<&Target<C>> {
        self.definitions.get(name)
    }

    /// Check if a name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.definitions.contains_key(name)
    }

    /// Number of registered names
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Get all registered names, in no particular order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.definitions.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_lookup() {
        let mut registry = ComponentRegistry::new();
        registry.register([("Card", Target::Component(1)), ("Box", Target::tag("div"))]);

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.lookup("Card"), Some(&Target::Component(1)));
        assert_eq!(registry.lookup("Box").and_then(Target::as_tag), Some("div"));
        assert!(registry.lookup("Missing").is_none());
    }

    #[test]
    fn test_last_registration_wins() {
        let mut registry = ComponentRegistry::new();
        registry.register([("x", Target::Component("A"))]);
        registry.register([("x", Target::Component("B"))]);

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.lookup("x"), Some(&Target::Component("B")));
    }

    #[test]
    fn test_duplicate_names_in_one_call() {
        let registry = ComponentRegistry::with_components([
            ("x", Target::Component(1)),
            ("x", Target::Component(2)),
        ]);
        assert_eq!(registry.lookup("x"), Some(&Target::Component(2)));
    }

    #[test]
    fn test_names() {
        let registry: ComponentRegistry<()> =
            ComponentRegistry::with_components([("a", Target::tag("p")), ("b", Target::tag("p"))]);

        let mut names: Vec<_> = registry.names().collect();
        names.sort();
        assert_eq!(names, ["a", "b"]);
        assert!(registry.contains("a"));
        assert!(!ComponentRegistry::<()>::new().contains("a"));
        assert!(ComponentRegistry::<()>::default().is_empty());
    }

    #[test]
    fn test_target_capabilities() {
        let tag: Target<()> = Target::tag("span");
        assert!(tag.is_tag());
        assert!(!tag.is_component());
        assert_eq!(tag.as_tag(), Some("span"));

        let component = Target::Component("Card");
        assert!(component.is_component());
        assert_eq!(component.as_component(), Some(&"Card"));
        assert_eq!(component.as_tag(), None);
    }
}
