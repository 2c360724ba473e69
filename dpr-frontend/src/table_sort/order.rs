//! The sort order and its encoding in a query string.
//!
//! The order travels as `sortOrder=ASC` or `sortOrder=DSC` inside the query
//! string of the sort link. Only the first `?`-delimited segment of a URL is
//! treated as its query string, and toggling edits the token in place so every
//! other parameter survives untouched.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use url::{Url, form_urlencoded};

/// Query parameter carrying the order.
pub const ORDER_PARAM: &str = "sortOrder";

static ORDER_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"sortOrder=(ASC|DSC)").expect("Invalid order token pattern"));

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortOrder {
    /// A to Z (`ASC`).
    Ascending,
    /// Z to A (`DSC`).
    Descending,
}

impl SortOrder {
    /// Only the exact token `ASC` means ascending; anything else, including a
    /// missing parameter, is descending.
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            Some("ASC") => Self::Ascending,
            _ => Self::Descending,
        }
    }

    /// Token used in the query string and the `data-sorted` marker.
    pub fn token(self) -> &'static str {
        match self {
            Self::Ascending => "ASC",
            Self::Descending => "DSC",
        }
    }

    /// Value for the `aria-sort` attribute.
    pub fn aria(self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }

    /// Word used in announcements.
    pub fn direction_word(self) -> &'static str {
        match self {
            Self::Ascending => "up",
            Self::Descending => "down",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// A raw query string (without the leading `?`) carrying the sort order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderQuery(String);

impl OrderQuery {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The first `?`-delimited segment after the path, or empty when the URL
    /// has no query string.
    pub fn from_href(href: &str) -> Self {
        Self(href.split('?').nth(1).unwrap_or_default().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decoded value of the first `sortOrder` parameter.
    pub fn order_param(&self) -> Option<String> {
        form_urlencoded::parse(self.0.as_bytes())
            .find(|(key, _)| key == ORDER_PARAM)
            .map(|(_, value)| value.into_owned())
    }

    /// The order this query asks for.
    pub fn order(&self) -> SortOrder {
        SortOrder::from_param(self.order_param().as_deref())
    }

    /// Whether the query holds a `sortOrder=ASC|DSC` token that toggling can
    /// rewrite.
    pub fn has_order_token(&self) -> bool {
        ORDER_TOKEN.is_match(&self.0)
    }

    /// The next order and the query encoding it.
    ///
    /// A query containing `sortOrder=ASC` flips to descending, anything else
    /// to ascending. The first token is replaced in place; a query without a
    /// token is returned unchanged.
    pub fn toggled(&self) -> (SortOrder, OrderQuery) {
        let next = if self.0.contains("sortOrder=ASC") {
            SortOrder::Descending
        } else {
            SortOrder::Ascending
        };
        let replacement = format!("{ORDER_PARAM}={}", next.token());
        let query = ORDER_TOKEN.replace(&self.0, replacement.as_str()).into_owned();
        (next, Self(query))
    }

    /// `origin + pathname + "?" + query` for the given page location.
    pub fn to_href(&self, location: &Url) -> String {
        format!(
            "{}{}?{}",
            location.origin().ascii_serialization(),
            location.path(),
            self.0
        )
    }
}

impl fmt::Display for OrderQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
