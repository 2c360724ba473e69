//! Sortable tables.
//!
//! Server-rendered header links (`a[data-link="sort-link"]`) carry the next
//! sort order in their query string. On page load they are upgraded into
//! buttons; each click flips the order, reorders the table body in place and
//! announces the result through the live region.
//!
//! Pieces, leaves first:
//! - [`column`]: identifier → header position
//! - [`compare`]: row ordering by one column
//! - [`sorter`]: reorders the table body
//! - [`upgrade`]: link → button
//! - [`announce`]: ARIA state and live region
//! - [`controller`]: start-up and click handling

pub mod announce;
pub mod column;
pub mod compare;
pub mod controller;
pub mod order;
pub mod sorter;
pub mod sprite;
pub mod upgrade;

pub use column::{NOT_FOUND, column_index, column_index_value};
pub use compare::{collate, compare_rows};
pub use controller::{SortControl, SortOutcome, SortRequest, TableSorts, handle_sort_request};
pub use order::{OrderQuery, SortOrder};
pub use sorter::sort_table_by_column;
pub use upgrade::upgrade_link;
