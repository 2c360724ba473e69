//! Error types

use thiserror::Error;

/// Errors raised by the table-sort widget.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    /// An input had the wrong shape (a `TypeError` in the browser).
    #[error("{0}")]
    Type(&'static str),

    /// No header declares the requested column identifier.
    #[error("Column with data-column=\"{0}\" not found.")]
    ColumnNotFound(String),

    /// A resolved index falls outside the header row.
    #[error("Column index {index} is out of bounds.")]
    ColumnOutOfBounds {
        /// The offending index.
        index: usize,
        /// Number of headers.
        len: usize,
    },

    /// The document has no sortable table with a body.
    #[error("No table with class \"{0}\" and a body was found.")]
    TableNotFound(String),

    /// An element the operation needs is not in the document.
    #[error("Element \"{0}\" is not in the document.")]
    MissingElement(String),

    /// The element has no parent to be replaced within.
    #[error("Element \"{0}\" is not attached to a parent.")]
    Detached(String),
}

/// Errors raised by the upload spinner.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    /// An element the handler needs is not in the document.
    #[error("Element \"#{0}\" is not in the document.")]
    MissingElement(String),
}
