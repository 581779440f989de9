//! colbox-core: Backend-independent data types and the column clustering algorithm.
//!
//! This crate provides the geometry types ([`Rect`], [`IRect`]), the page
//! model a text-extraction backend fills in ([`PageLayout`], [`TextBlock`],
//! [`TextLine`]) and the four-phase column detection in [`columns`].
//! It performs no I/O.

pub mod columns;
pub mod error;
pub mod geometry;
pub mod page;
pub mod svg;

pub use columns::{
    ColumnAnalysis, ColumnOptions, ROW_TOLERANCE, analyze_columns, column_boxes,
};
pub use error::ColumnError;
pub use geometry::{IRect, Rect};
pub use page::{Direction, PageLayout, TextBlock, TextLine};
pub use svg::{DrawStyle, SvgOptions, SvgRenderer};
