pub mod document;
pub mod element;
pub mod event;
pub mod render;
pub mod selector;

pub use document::{Document, ReadyState};
pub use element::{Content, Element};
pub use event::{propagation_path, Event};
pub use render::{inner_html, to_html};
pub use selector::{query, query_all, Selector};
