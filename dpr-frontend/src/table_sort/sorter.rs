//! In-place table body sorting.

use std::cmp::Ordering;

use pagedom::{Document, Element, Selector, query_all};

use super::column::column_index;
use super::compare::compare_rows;
use super::order::{OrderQuery, SortOrder};
use crate::config::SortConfig;
use crate::error::SortError;

/// Sort the page's table by a logical column.
///
/// The order comes from the `sortOrder` parameter of `href` (see
/// [`OrderQuery::from_href`]). Everything that can fail is checked before the
/// body is touched, so an error leaves the rows in their previous order. The
/// sort is stable and the rows are moved, never rebuilt.
pub fn sort_table_by_column(
    doc: &mut Document,
    config: &SortConfig,
    column: &str,
    href: &str,
) -> Result<(), SortError> {
    let order = OrderQuery::from_href(href).order();

    let table = doc
        .query(&config.table_selector())
        .ok_or_else(|| SortError::TableNotFound(config.table_class.clone()))?;

    let headers = query_all(table, &config.header_selector());
    let index = column_index(
        headers.iter().map(|h| h.get_data(&config.column_key)),
        column,
    )
    .ok_or_else(|| SortError::ColumnNotFound(column.to_string()))?;

    if index >= headers.len() {
        return Err(SortError::ColumnOutOfBounds {
            index,
            len: headers.len(),
        });
    }

    let body_id = query_all(table, &Selector::tag("tbody"))
        .first()
        .map(|body| body.id.clone())
        .ok_or_else(|| SortError::TableNotFound(config.table_class.clone()))?;

    log::debug!("[sort_table_by_column] column={column} index={index} order={order}");

    let row_selector = config.row_selector();
    let cell_selector = config.cell_selector();

    // Nodes that are not rows keep their place ahead of the sorted rows.
    let (mut rows, rest): (Vec<Element>, Vec<Element>) = doc
        .take_children(&body_id)
        .unwrap_or_default()
        .into_iter()
        .partition(|node| row_selector.matches(node));

    rows.sort_by(|a, b| compare_cells(a, b, index, order, &cell_selector));

    for row in rest.into_iter().chain(rows) {
        doc.append_child(&body_id, row);
    }

    Ok(())
}

/// Rows missing a cell at `index` compare equal; otherwise the positional
/// cells are compared by [`compare_rows`].
fn compare_cells(
    a: &Element,
    b: &Element,
    index: usize,
    order: SortOrder,
    cells: &Selector,
) -> Ordering {
    let cell_a = row_cell(a, index, cells);
    let cell_b = row_cell(b, index, cells);

    if cell_a.is_none() || cell_b.is_none() {
        log::error!(
            "One of the cells is undefined or has no text content. Cell A: {:?}, Cell B: {:?}",
            cell_a.map(|c| c.id.as_str()),
            cell_b.map(|c| c.id.as_str())
        );
        return Ordering::Equal;
    }

    compare_rows(a, b, index, order)
}

/// The `index`-th cell below the row, the way `querySelectorAll` would list them.
fn row_cell<'a>(row: &'a Element, index: usize, cells: &Selector) -> Option<&'a Element> {
    row.descendants()
        .skip(1)
        .filter(|e| cells.matches(e))
        .nth(index)
}
