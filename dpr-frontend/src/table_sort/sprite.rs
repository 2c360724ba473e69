//! The shared sort-icon sprite.

use pagedom::{Document, Element};

use crate::config::SortConfig;

const XLINK_NS: &str = "http://www.w3.org/1999/xlink";
const ICON_VIEW_BOX: &str = "0 0 425 233.7";

const UP_FILL: &str = "M20.4 233.7L212.5 41.6l192.1 192.1z";
const UP_LINE: &str = "M414.4 223.1L212.5 21.2 10.6 223.1";

/// Build the sprite holding the `icon-sort`, `icon-sort-asc` and
/// `icon-sort-des` symbols.
pub fn sprite(id: &str) -> Element {
    Element::new("svg")
        .id(id)
        .attr("version", "1.1")
        .attr("xmlns", "http://www.w3.org/2000/svg")
        .child(Element::new("style").with_text(
            ".l{fill:none;stroke-width:30;stroke-miterlimit:10;}.t{stroke:none;}",
        ))
        .child(
            Element::new("defs")
                .child(
                    icon_group("icon-sort", "sort", "Sort", "image")
                        .child(path("t", UP_FILL))
                        .child(path("l", UP_LINE))
                        .child(path("t", "M404.6 306L212.5 498.1 20.4 306z"))
                        .child(path("l", "M10.6 316.6l201.9 201.9 201.9-201.9")),
                )
                .child(
                    icon_group("icon-sort-asc", "sort-asc", "", "presentation")
                        .child(path("t", UP_FILL))
                        .child(path("l", UP_LINE)),
                )
                .child(
                    icon_group("icon-sort-des", "sort-des", "", "presentation")
                        .child(path("t", "M404.6 0L212.5 192.1 20.4 0z"))
                        .child(path("l", "M10.6 10.6l201.9 201.9L414.4 10.6")),
                ),
        )
}

fn icon_group(id: &str, suffix: &str, title: &str, role: &str) -> Element {
    // Only the labelled icon points at its title/desc
    let (labelled_by, described_by) = if title.is_empty() {
        (String::new(), String::new())
    } else {
        (format!("title-{suffix}"), format!("desc-{suffix}"))
    };

    Element::new("g")
        .id(id)
        .attr("aria-labeledby", labelled_by)
        .attr("aria-describedby", described_by)
        .attr("role", role)
        .child(Element::new("title").id(format!("title-{suffix}")).with_text(title))
        .child(Element::new("desc").id(format!("desc-{suffix}")))
}

fn path(class: &str, d: &str) -> Element {
    Element::new("path").class(class).attr("d", d)
}

/// A direction indicator referencing one of the sprite's icons.
/// `direction` is `asc` or `des`.
pub fn direction_icon(direction: &str) -> Element {
    Element::new("svg")
        .attr("viewBox", ICON_VIEW_BOX)
        .attr("focusable", "false")
        .class("sort")
        .class(direction)
        .attr("aria-hidden", "true")
        .child(
            Element::new("use")
                .attr("xmlns:xlink", XLINK_NS)
                .attr("xlink:href", format!("#icon-sort-{direction}")),
        )
}

/// Insert the sprite right after the `data-module` marker.
///
/// Does nothing when the marker is missing or not attached to the page, or
/// when a sprite is already present. Returns true if the sprite was added.
pub fn install_sprite(doc: &mut Document, config: &SortConfig) -> bool {
    let Some(marker_id) = doc.query(&config.module_selector()).map(|m| m.id.clone()) else {
        return false;
    };
    if !doc.is_in_page(&marker_id) {
        return false;
    }
    if doc.get_element_by_id(&config.sprite_id).is_some() {
        log::debug!("[install_sprite] #{} already present", config.sprite_id);
        return false;
    }

    doc.insert_after(&marker_id, sprite(&config.sprite_id))
}
