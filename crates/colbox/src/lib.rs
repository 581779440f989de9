//! colbox: Infer the reading columns of document pages.
//!
//! This is the public API facade crate. It re-exports the types and
//! algorithm from colbox-core and adds loading of extraction dumps, the
//! JSON a text-extraction backend writes for each page's blocks, lines
//! and images.
//!
//! # Architecture
//!
//! - **colbox-core**: Geometry, page model, and the four-phase column detection
//! - **colbox** (this crate): Dump loading, validation, and per-document processing
//!
//! # Example
//!
//! ```
//! use colbox::{ColumnOptions, Document};
//!
//! let json = r#"{"pages": [{"width": 612, "height": 792, "blocks": [
//!     {"bbox": [72, 100, 540, 300], "lines": [
//!         {"bbox": [72, 100, 540, 300], "dir": [1, 0], "spans": [{"text": "Body"}]}]}]}]}"#;
//! let doc = Document::from_json_str(json)?;
//! let columns = doc.columns(0, &ColumnOptions::default())?;
//! assert_eq!(columns.len(), 1);
//! assert_eq!(columns[0].x1, 612);
//! # Ok::<(), colbox::DocumentError>(())
//! ```

pub mod document;
pub mod dump;
mod error;

pub use colbox_core;
pub use colbox_core::{
    ColumnAnalysis, ColumnError, ColumnOptions, Direction, DrawStyle, IRect, PageLayout, Rect,
    SvgOptions, SvgRenderer, TextBlock, TextLine, analyze_columns, column_boxes,
};
pub use document::Document;
pub use error::DocumentError;
