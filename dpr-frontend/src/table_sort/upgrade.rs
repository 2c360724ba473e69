//! Link → button upgrade.

use pagedom::{Document, Element};

use super::order::OrderQuery;
use super::sprite::direction_icon;
use crate::config::SortConfig;
use crate::error::SortError;

/// `data-*` key holding a button's order encoding.
pub const QUERY_KEY: &str = "query";
/// `data-*` key holding a button's column identifier.
pub const SORT_KEY: &str = "sort";

/// Replace a sort link with a toggle button and return the button's ID.
///
/// The button shows the link's label, carries the link's query string as
/// `data-query` and the column identifier as `data-sort`, and takes the
/// link's place in the document.
pub fn upgrade_link(
    doc: &mut Document,
    config: &SortConfig,
    link_id: &str,
    column: &str,
) -> Result<String, SortError> {
    let link = doc
        .get(link_id)
        .ok_or_else(|| SortError::MissingElement(link_id.to_string()))?;

    let label = link.text_content();
    let query = OrderQuery::from_href(link.get_attr("href").unwrap_or_default());

    let button = sort_button(config, &label, &query, column);
    let button_id = button.id.clone();

    doc.replace(link_id, button)
        .ok_or_else(|| SortError::Detached(link_id.to_string()))?;

    log::debug!("[upgrade_link] {link_id} -> {button_id} column={column} query={query}");
    Ok(button_id)
}

/// Build the toggle button for a column.
pub fn sort_button(config: &SortConfig, label: &str, query: &OrderQuery, column: &str) -> Element {
    let mut button = Element::new("button");
    for class in &config.button_classes {
        button.add_class(class.as_str());
    }

    button
        .data(QUERY_KEY, query.as_str())
        .data(SORT_KEY, column)
        .attr("type", "button")
        .child(Element::new("span").with_text(label))
        .child(direction_icon("asc"))
        .child(direction_icon("des"))
}

/// The order encoding stored on an upgraded button.
pub fn button_query(button: &Element) -> OrderQuery {
    OrderQuery::new(button.get_data(QUERY_KEY).unwrap_or_default())
}

/// The button's label, trimmed.
pub fn button_label(button: &Element) -> String {
    button
        .element_children()
        .find(|c| c.tag == "span")
        .map(|span| span.text_content().trim().to_string())
        .unwrap_or_default()
}
