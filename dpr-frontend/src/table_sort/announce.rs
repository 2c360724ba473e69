//! Accessibility state after a sort.

use pagedom::Document;

use super::order::SortOrder;
use crate::config::SortConfig;

/// Reflect the new order in `aria-sort` and the `data-sorted` markers.
///
/// The header gets `aria-sort`; every marker in the document is cleared and
/// the cell at the header's position in each row (head row included) is
/// marked with the order token.
pub fn mark_sorted_column(doc: &mut Document, config: &SortConfig, header_id: &str, order: SortOrder) {
    if let Some(header) = doc.get_mut(header_id) {
        header.set_attr("aria-sort", order.aria());
    }

    for id in doc.query_ids(&config.marked_selector()) {
        if let Some(cell) = doc.get_mut(&id) {
            cell.remove_data(&config.sorted_key);
        }
    }

    let Some(position) = doc.index_in_parent(header_id) else {
        log::warn!("[mark_sorted_column] header {header_id} is not in the document");
        return;
    };

    for row_id in doc.query_ids(&config.row_selector()) {
        let cell_id = doc
            .get(&row_id)
            .and_then(|row| row.element_children().nth(position))
            .map(|cell| cell.id.clone());

        let Some(cell_id) = cell_id else {
            log::warn!("[mark_sorted_column] row {row_id} has no cell at {position}");
            continue;
        };
        if let Some(cell) = doc.get_mut(&cell_id) {
            cell.set_data(&config.sorted_key, order.token());
        }
    }
}

/// Announcement text for a sorted column.
pub fn announcement(label: &str, order: SortOrder) -> String {
    format!("{label} is sorted {}", order.direction_word())
}

/// Write `text` into the live region.
///
/// Only writes when the trimmed current text differs, so assistive technology
/// does not repeat itself. A missing live region is logged and skipped.
/// Returns true if the region was updated.
pub fn announce(doc: &mut Document, config: &SortConfig, text: &str) -> bool {
    let Some(region_id) = doc
        .get_element_by_id(&config.live_region_id)
        .map(|region| region.id.clone())
    else {
        log::error!("Could not find the {} element.", config.live_region_id);
        return false;
    };

    match doc.get_mut(&region_id) {
        Some(region) if region.text_content().trim() != text => {
            region.set_text_content(text);
            true
        }
        _ => false,
    }
}
