use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

/// Generated ids contain a space, which an HTML `id` never does, so they
/// cannot collide with ids set through [`Element::id`].
fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix} #{id}")
}

/// Tag name used for bare text nodes.
pub const TEXT_TAG: &str = "#text";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    // Identity
    /// Unique identity within the tree. Doubles as the HTML `id` when it was
    /// set explicitly with [`Element::id`].
    pub id: String,
    named: bool,

    // Markup
    pub tag: String,
    pub classes: Vec<String>,
    /// Attributes other than `id` and `class`, in insertion order.
    /// `data-*` attributes live here too.
    pub attributes: Vec<(String, String)>,

    // Content
    pub content: Content,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            named: false,
            tag: "div".to_string(),
            classes: Vec::new(),
            attributes: Vec::new(),
            content: Content::None,
        }
    }
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        let tag = tag.into();
        Self {
            id: generate_id(&tag),
            tag,
            ..Default::default()
        }
    }

    /// Create a bare text node.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            id: generate_id("text"),
            tag: TEXT_TAG.to_string(),
            content: Content::Text(content.into()),
            ..Default::default()
        }
    }

    pub fn is_text(&self) -> bool {
        self.tag == TEXT_TAG
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        let id = id.into();
        if id.is_empty() || id.contains(char::is_whitespace) {
            log::warn!("[Element::id] {id:?} is not a valid HTML id");
        }
        self.id = id;
        self.named = true;
        self
    }

    /// The HTML `id`, if one was given explicitly.
    pub fn html_id(&self) -> Option<&str> {
        self.named.then_some(self.id.as_str())
    }

    // Classes
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.add_class(class);
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn add_class(&mut self, class: impl Into<String>) {
        let class = class.into();
        if !self.has_class(&class) {
            self.classes.push(class);
        }
    }

    /// Returns true if the class was present.
    pub fn remove_class(&mut self, class: &str) -> bool {
        let before = self.classes.len();
        self.classes.retain(|c| c != class);
        self.classes.len() != before
    }

    // Attributes
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.get_attr(name).is_some()
    }

    /// Set an attribute, keeping its original position when it already exists.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = value,
            None => self.attributes.push((name, value)),
        }
    }

    /// Returns true if the attribute was present.
    pub fn remove_attr(&mut self, name: &str) -> bool {
        let before = self.attributes.len();
        self.attributes.retain(|(n, _)| n != name);
        self.attributes.len() != before
    }

    // Custom data (`data-*` attributes)
    pub fn data(self, key: &str, value: impl Into<String>) -> Self {
        self.attr(format!("data-{key}"), value)
    }

    pub fn get_data(&self, key: &str) -> Option<&str> {
        self.get_attr(&format!("data-{key}"))
    }

    pub fn set_data(&mut self, key: &str, value: impl Into<String>) {
        self.set_attr(format!("data-{key}"), value);
    }

    pub fn remove_data(&mut self, key: &str) -> bool {
        self.remove_attr(&format!("data-{key}"))
    }

    // Text
    /// Replace the content with a single run of text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.set_text_content(text);
        self
    }

    pub fn set_text_content(&mut self, text: impl Into<String>) {
        self.content = Content::Text(text.into());
    }

    /// Concatenated text of this element and all of its descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match &self.content {
            Content::None => {}
            Content::Text(text) => out.push_str(text),
            Content::Children(children) => {
                for child in children {
                    child.collect_text(out);
                }
            }
        }
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        self.push_child(child);
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        for child in new_children {
            self.push_child(child);
        }
        self
    }

    /// Append a child. Existing text content is kept as a leading text node.
    pub fn push_child(&mut self, child: Element) {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            Content::None => self.content = Content::Children(vec![child]),
            Content::Text(text) => {
                let text = Element::text(std::mem::take(text));
                self.content = Content::Children(vec![text, child]);
            }
        }
    }

    /// All child nodes, text nodes included.
    pub fn child_nodes(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }

    pub fn child_nodes_mut(&mut self) -> Option<&mut Vec<Element>> {
        match &mut self.content {
            Content::Children(children) => Some(children),
            _ => None,
        }
    }

    /// Child elements only, skipping text nodes.
    pub fn element_children(&self) -> impl Iterator<Item = &Element> {
        self.child_nodes().iter().filter(|c| !c.is_text())
    }

    /// Remove and return every child node.
    pub fn take_children(&mut self) -> Vec<Element> {
        match std::mem::take(&mut self.content) {
            Content::Children(children) => children,
            Content::Text(text) => vec![Element::text(text)],
            Content::None => Vec::new(),
        }
    }

    /// Pre-order iterator over this element and all of its descendants.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }
}

pub struct Descendants<'a> {
    stack: Vec<&'a Element>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.stack.pop()?;
        // Reverse so the first child is visited first
        self.stack.extend(next.child_nodes().iter().rev());
        Some(next)
    }
}
