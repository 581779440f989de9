//! Error type for colbox-core.
//!
//! Malformed per-block content (no lines, single-glyph lines) is skipped
//! silently by the algorithm. [`ColumnError`] covers only precondition
//! violations caught when a page enters the algorithm.

use thiserror::Error;

use crate::geometry::Rect;

/// A page or option set that cannot be processed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColumnError {
    /// A rectangle with non-finite or inverted coordinates.
    #[error("invalid rectangle ({}, {}, {}, {}): {reason}", rect.x0, rect.y0, rect.x1, rect.y1)]
    InvalidRect {
        /// The offending rectangle, as supplied.
        rect: Rect,
        /// Which check failed.
        reason: &'static str,
    },

    /// Page dimensions that are not positive finite numbers.
    #[error("invalid page size {width}x{height}")]
    InvalidPageSize { width: f64, height: f64 },

    /// An option value outside its accepted range.
    #[error("invalid option {name}: {value}")]
    InvalidOption { name: &'static str, value: f64 },
}
