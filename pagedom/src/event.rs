use crate::document::Document;

/// Events the widgets react to, targeted at an element ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Element activated (mouse click or keyboard activation of a button)
    Click { target: String },
    /// Form submission
    Submit { target: String },
}

impl Event {
    pub fn click(target: impl Into<String>) -> Self {
        Self::Click {
            target: target.into(),
        }
    }

    pub fn submit(target: impl Into<String>) -> Self {
        Self::Submit {
            target: target.into(),
        }
    }

    pub fn target(&self) -> &str {
        match self {
            Self::Click { target } | Self::Submit { target } => target,
        }
    }
}

/// IDs an event bubbles through: the target first, then each ancestor up to
/// the body. Empty when the target is not in the document.
pub fn propagation_path(doc: &Document, target: &str) -> Vec<String> {
    if !doc.contains(target) {
        return Vec::new();
    }

    std::iter::once(target.to_string())
        .chain(doc.ancestors(target).into_iter().map(|e| e.id.clone()))
        .collect()
}
