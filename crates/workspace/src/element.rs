//! Retained container elements and their attribute storage.

use std::collections::HashMap;

use fmsync_core::ElementId;

/// A retained container element: a tag name plus ordered attributes.
///
/// Attributes keep insertion order; overwriting a name updates the value in
/// place without moving it, matching how attribute writes land in a live
/// tree.
#[derive(Debug, Clone)]
pub struct Element {
    tag: String,
    attributes: Vec<(String, String)>,
}

impl Element {
    fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
        }
    }

    /// The element's tag name.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The value of attribute `name`, if set.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(attr, _)| attr == name)
            .map(|(_, value)| value.as_str())
    }

    /// Attribute names in insertion order.
    pub fn attribute_names(&self) -> impl Iterator<Item = &str> {
        self.attributes.iter().map(|(name, _)| name.as_str())
    }

    /// Names of the element's `data-*` attributes, in insertion order.
    pub fn data_attribute_names(&self) -> Vec<&str> {
        self.attribute_names()
            .filter(|name| name.starts_with("data-"))
            .collect()
    }

    /// Number of attributes.
    pub fn attribute_count(&self) -> usize {
        self.attributes.len()
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        match self.attributes.iter_mut().find(|(attr, _)| attr == name) {
            Some((_, slot)) => *slot = value.to_owned(),
            None => self.attributes.push((name.to_owned(), value.to_owned())),
        }
    }

    fn remove_attribute(&mut self, name: &str) -> bool {
        let before = self.attributes.len();
        self.attributes.retain(|(attr, _)| attr != name);
        self.attributes.len() != before
    }

    /// Renders the opening tag with attribute values escaped for a
    /// double-quoted context. Used by snapshots and diagnostics.
    pub fn opening_tag(&self) -> String {
        let mut out = format!("<{}", self.tag);
        for (name, value) in &self.attributes {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&html_escape::encode_double_quoted_attribute(value));
            out.push('"');
        }
        out.push('>');
        out
    }
}

/// Arena of live elements keyed by stable ids.
///
/// Ids count up and are never reused, so a stale id held by bookkeeping can
/// never alias a newer element. Attribute operations on unknown ids are
/// no-ops.
#[derive(Debug, Default)]
pub struct ElementStore {
    next_id: u64,
    elements: HashMap<ElementId, Element>,
}

impl ElementStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an element with the given tag and returns its id.
    pub fn create(&mut self, tag: &str) -> ElementId {
        self.next_id += 1;
        let id = ElementId(self.next_id);
        self.elements.insert(id, Element::new(tag));
        id
    }

    /// Discards the element behind `id`. Returns whether it existed.
    pub fn discard(&mut self, id: ElementId) -> bool {
        self.elements.remove(&id).is_some()
    }

    /// The element behind `id`, if alive.
    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(&id)
    }

    /// Returns whether `id` refers to a live element.
    pub fn contains(&self, id: ElementId) -> bool {
        self.elements.contains_key(&id)
    }

    /// Sets an attribute on a live element; unknown ids are ignored.
    pub fn set_attribute(&mut self, id: ElementId, name: &str, value: &str) {
        if let Some(element) = self.elements.get_mut(&id) {
            element.set_attribute(name, value);
        }
    }

    /// Removes an attribute from a live element; unknown ids are ignored.
    pub fn remove_attribute(&mut self, id: ElementId, name: &str) {
        if let Some(element) = self.elements.get_mut(&id) {
            element.remove_attribute(name);
        }
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns whether the store holds no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
