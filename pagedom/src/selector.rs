use crate::element::Element;

/// A small subset of CSS selectors, enough to address the markup the
/// widgets consume.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// `tbody`
    Tag(String),
    /// `.govuk-table`
    Class(String),
    /// `#sort-order-live`
    Id(String),
    /// `[data-column]`
    Attr(String),
    /// `[data-module="table-sorts"]`
    AttrEq(String, String),
    /// `a, b` - matches when any of the inner selectors match.
    Any(Vec<Selector>),
}

impl Selector {
    pub fn tag(tag: impl Into<String>) -> Self {
        Self::Tag(tag.into())
    }

    pub fn class(class: impl Into<String>) -> Self {
        Self::Class(class.into())
    }

    pub fn id(id: impl Into<String>) -> Self {
        Self::Id(id.into())
    }

    pub fn attr(name: impl Into<String>) -> Self {
        Self::Attr(name.into())
    }

    pub fn attr_eq(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::AttrEq(name.into(), value.into())
    }

    pub fn any(selectors: impl IntoIterator<Item = Selector>) -> Self {
        Self::Any(selectors.into_iter().collect())
    }

    /// Text nodes never match.
    pub fn matches(&self, element: &Element) -> bool {
        if element.is_text() {
            return false;
        }

        match self {
            Self::Tag(tag) => element.tag.eq_ignore_ascii_case(tag),
            Self::Class(class) => element.has_class(class),
            Self::Id(id) => element.html_id() == Some(id.as_str()),
            Self::Attr(name) => attr_value(element, name).is_some(),
            Self::AttrEq(name, value) => attr_value(element, name).as_deref() == Some(value.as_str()),
            Self::Any(selectors) => selectors.iter().any(|s| s.matches(element)),
        }
    }
}

fn attr_value(element: &Element, name: &str) -> Option<String> {
    match name {
        "id" => element.html_id().map(str::to_string),
        "class" if element.classes.is_empty() => None,
        "class" => Some(element.classes.join(" ")),
        _ => element.get_attr(name).map(str::to_string),
    }
}

/// All elements matching the selector, in document order. Includes `root`.
pub fn query_all<'a>(root: &'a Element, selector: &Selector) -> Vec<&'a Element> {
    root.descendants().filter(|e| selector.matches(e)).collect()
}

/// The first element matching the selector, in document order. Includes `root`.
pub fn query<'a>(root: &'a Element, selector: &Selector) -> Option<&'a Element> {
    root.descendants().find(|e| selector.matches(e))
}
