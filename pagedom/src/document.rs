use std::fmt;

use url::Url;

use crate::element::{element_at, element_at_mut, find_element, find_element_mut, find_path, Element};
use crate::selector::{self, Selector};

/// Document loading state, mirroring `document.readyState`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadyState {
    Loading,
    Interactive,
    #[default]
    Complete,
}

type ReadyCallback = Box<dyn FnOnce(&mut Document)>;

/// A headless page: the `<body>` tree, the page location and the
/// content-loaded lifecycle.
///
/// Elements are addressed by their [`Element::id`]. Mutations that target a
/// missing element report it through `Option`/`bool` rather than panicking.
pub struct Document {
    body: Element,
    location: Url,
    ready_state: ReadyState,
    pending: Vec<ReadyCallback>,
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("body", &self.body)
            .field("location", &self.location.as_str())
            .field("ready_state", &self.ready_state)
            .field("pending", &self.pending.len())
            .finish()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new(Element::new("body"))
    }
}

impl Document {
    /// Create a fully loaded document at `about:blank`.
    pub fn new(body: Element) -> Self {
        Self {
            body,
            location: blank_location(),
            ready_state: ReadyState::Complete,
            pending: Vec::new(),
        }
    }

    pub fn with_location(mut self, location: Url) -> Self {
        self.location = location;
        self
    }

    /// Start in the `Loading` state; callbacks passed to [`Document::ready`]
    /// wait for [`Document::content_loaded`].
    pub fn loading(mut self) -> Self {
        self.ready_state = ReadyState::Loading;
        self
    }

    pub fn body(&self) -> &Element {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut Element {
        &mut self.body
    }

    pub fn location(&self) -> &Url {
        &self.location
    }

    pub fn set_location(&mut self, location: Url) {
        self.location = location;
    }

    // Lifecycle

    pub fn ready_state(&self) -> ReadyState {
        self.ready_state
    }

    /// Run `callback` once the document is interactive: immediately when it
    /// already is, otherwise when content finishes loading.
    pub fn ready(&mut self, callback: impl FnOnce(&mut Document) + 'static) {
        if self.ready_state != ReadyState::Loading {
            callback(self);
        } else {
            self.pending.push(Box::new(callback));
        }
    }

    /// Fire the content-loaded signal. Returns how many callbacks ran.
    pub fn content_loaded(&mut self) -> usize {
        if self.ready_state == ReadyState::Loading {
            self.ready_state = ReadyState::Interactive;
        }

        let callbacks = std::mem::take(&mut self.pending);
        let count = callbacks.len();
        log::debug!("[content_loaded] running {count} ready callbacks");
        for callback in callbacks {
            callback(self);
        }
        count
    }

    /// Mark loading as finished (`load` event).
    pub fn complete(&mut self) {
        if self.ready_state == ReadyState::Loading {
            self.content_loaded();
        }
        self.ready_state = ReadyState::Complete;
    }

    // Lookup

    pub fn get(&self, id: &str) -> Option<&Element> {
        find_element(&self.body, id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Element> {
        find_element_mut(&mut self.body, id)
    }

    /// Like `document.getElementById`: only explicit HTML ids match.
    pub fn get_element_by_id(&self, id: &str) -> Option<&Element> {
        self.get(id).filter(|e| e.html_id().is_some())
    }

    pub fn query(&self, selector: &Selector) -> Option<&Element> {
        selector::query(&self.body, selector)
    }

    pub fn query_all(&self, selector: &Selector) -> Vec<&Element> {
        selector::query_all(&self.body, selector)
    }

    /// IDs of every matching element, for callers that go on to mutate them.
    pub fn query_ids(&self, selector: &Selector) -> Vec<String> {
        self.query_all(selector)
            .into_iter()
            .map(|e| e.id.clone())
            .collect()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// True when the element is a descendant of the body. The body itself
    /// does not count as "in the page".
    pub fn is_in_page(&self, id: &str) -> bool {
        id != self.body.id && self.contains(id)
    }

    // Tree navigation

    pub fn parent(&self, id: &str) -> Option<&Element> {
        let path = find_path(&self.body, id)?;
        let (_, parent_path) = path.split_last()?;
        element_at(&self.body, parent_path)
    }

    /// Ancestors from the nearest parent up to the body.
    pub fn ancestors(&self, id: &str) -> Vec<&Element> {
        let Some(path) = find_path(&self.body, id) else {
            return Vec::new();
        };

        let mut ancestors: Vec<&Element> = (0..path.len())
            .filter_map(|depth| element_at(&self.body, &path[..depth]))
            .collect();
        ancestors.reverse();
        ancestors
    }

    /// The element itself or its nearest ancestor matching the selector.
    pub fn closest(&self, id: &str, selector: &Selector) -> Option<&Element> {
        let element = self.get(id)?;
        if selector.matches(element) {
            return Some(element);
        }
        self.ancestors(id).into_iter().find(|e| selector.matches(e))
    }

    /// Position among the parent's element children (text nodes skipped).
    pub fn index_in_parent(&self, id: &str) -> Option<usize> {
        self.parent(id)?.element_children().position(|e| e.id == id)
    }

    // Mutation

    /// Put `replacement` where the element was. Returns the removed element.
    pub fn replace(&mut self, id: &str, replacement: Element) -> Option<Element> {
        let (parent, index) = self.slot_of(id)?;
        let siblings = parent.child_nodes_mut()?;
        Some(std::mem::replace(&mut siblings[index], replacement))
    }

    /// Insert `element` immediately after the element with the given ID.
    pub fn insert_after(&mut self, id: &str, element: Element) -> bool {
        let Some((parent, index)) = self.slot_of(id) else {
            return false;
        };
        match parent.child_nodes_mut() {
            Some(siblings) => {
                siblings.insert(index + 1, element);
                true
            }
            None => false,
        }
    }

    /// Detach an element from the tree and return it.
    pub fn remove(&mut self, id: &str) -> Option<Element> {
        let (parent, index) = self.slot_of(id)?;
        Some(parent.child_nodes_mut()?.remove(index))
    }

    pub fn append_child(&mut self, parent_id: &str, element: Element) -> bool {
        match self.get_mut(parent_id) {
            Some(parent) => {
                parent.push_child(element);
                true
            }
            None => false,
        }
    }

    /// Detach and return every child node of an element.
    pub fn take_children(&mut self, id: &str) -> Option<Vec<Element>> {
        self.get_mut(id).map(Element::take_children)
    }

    /// Parent element and index of the element within its child nodes.
    fn slot_of(&mut self, id: &str) -> Option<(&mut Element, usize)> {
        let path = find_path(&self.body, id)?;
        let (&index, parent_path) = path.split_last()?;
        let parent = element_at_mut(&mut self.body, parent_path)?;
        Some((parent, index))
    }
}

fn blank_location() -> Url {
    Url::parse("about:blank").expect("about:blank is a valid URL")
}
