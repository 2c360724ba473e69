//! Progressive enhancement for the submissions pages.
//!
//! - [`table_sort`] upgrades server-rendered sort links into toggle buttons
//!   that reorder the table in place and announce the new order.
//! - [`upload_spinner`] swaps the upload form for a spinner while the file
//!   is being posted.
//!
//! Both operate on an explicit [`pagedom::Document`].

pub mod config;
pub mod error;
pub mod fixtures;
pub mod table_sort;
pub mod upload_spinner;

pub use config::{SortConfig, UploadConfig};
pub use error::{SortError, UploadError};
pub use table_sort::{
    SortControl, SortOrder, SortOutcome, SortRequest, TableSorts, handle_sort_request,
    sort_table_by_column,
};
pub use upload_spinner::{SubmitDecision, UploadSpinner};
