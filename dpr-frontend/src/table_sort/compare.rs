//! Row ordering.

use std::cmp::Ordering;

use icu_collator::options::CollatorOptions;
use icu_collator::{Collator, CollatorBorrowed, CollatorPreferences};
use pagedom::Element;

use super::order::SortOrder;

/// Cells of a row, in column order.
pub fn row_cells(row: &Element) -> Vec<&Element> {
    row.element_children()
        .filter(|c| c.tag.eq_ignore_ascii_case("td") || c.tag.eq_ignore_ascii_case("th"))
        .collect()
}

/// Trimmed text of the cell at `column`, if the row has one.
pub fn cell_text(row: &Element, column: usize) -> Option<String> {
    row_cells(row)
        .get(column)
        .map(|cell| cell.text_content().trim().to_string())
}

/// Order two rows by the text of one column.
///
/// Descending swaps the operands rather than negating the result. Text is
/// never interpreted as numbers. A row without a cell at `column` compares
/// equal; callers are expected to check the index first.
pub fn compare_rows(a: &Element, b: &Element, column: usize, order: SortOrder) -> Ordering {
    match (cell_text(a, column), cell_text(b, column)) {
        (Some(a), Some(b)) => compare_text(&a, &b, order),
        _ => Ordering::Equal,
    }
}

/// Collate two cell texts in the given direction.
pub fn compare_text(a: &str, b: &str, order: SortOrder) -> Ordering {
    match order {
        SortOrder::Ascending => collate(a, b),
        SortOrder::Descending => collate(b, a),
    }
}

thread_local! {
    static ROOT_COLLATOR: CollatorBorrowed<'static> =
        Collator::try_new(CollatorPreferences::default(), CollatorOptions::default())
            .expect("Root collation data is compiled in");
}

/// Locale-aware string comparison using the root collation (tertiary
/// strength): accents and case only break ties between otherwise equal text.
pub fn collate(a: &str, b: &str) -> Ordering {
    ROOT_COLLATOR.with(|collator| collator.compare(a, b))
}
