//! Error type for loading extraction dumps and running detection on them.
//!
//! Uses [`thiserror`] for derivation. Core failures are wrapped with the
//! page they occurred on.

use colbox_core::ColumnError;
use thiserror::Error;

/// Error type for [`Document`](crate::Document) operations.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// Error reading the dump file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The dump is not valid JSON or does not have the expected shape.
    #[error("invalid extraction dump: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed geometry or options on one page (1-indexed).
    #[error("page {page}: {source}")]
    Page {
        page: usize,
        #[source]
        source: ColumnError,
    },

    /// A 0-based page index past the end of the document.
    #[error("page index {index} out of range (document has {count} pages)")]
    PageOutOfRange { index: usize, count: usize },
}

impl DocumentError {
    /// Wrap a core error for the page at 0-based `index`.
    pub(crate) fn on_page(index: usize, source: ColumnError) -> Self {
        DocumentError::Page {
            page: index + 1,
            source,
        }
    }
}
