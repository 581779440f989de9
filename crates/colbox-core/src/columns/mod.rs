//! Column detection: group a page's text blocks into reading columns.
//!
//! The pipeline runs four phases over one page's rectangles:
//!
//! 1. [`filter`]: keep horizontal text blocks inside the usable page area,
//!    diverting non-horizontal text into an obstacle list.
//! 2. [`extend`]: widen each text rectangle to the right page edge where
//!    no obstacle or other text is in the way.
//! 3. [`merge`]: fold rectangles into column rectangles, never across
//!    horizontally disjoint spans.
//! 4. [`cleanup`]: drop duplicates and restore left-to-right order within
//!    rows of near-equal bottoms.
//!
//! Each phase works on its own copies of [`Rect`]; nothing written by a
//! later phase is visible through an earlier phase's data.

pub mod cleanup;
pub mod extend;
pub mod filter;
pub mod merge;

use tracing::debug;

use crate::error::ColumnError;
use crate::geometry::{IRect, Rect};
use crate::page::PageLayout;

/// Maximum difference between bottom edges for two columns to share a row.
pub const ROW_TOLERANCE: f64 = 10.0;

/// Options for column detection.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColumnOptions {
    /// Height trimmed from the bottom of the page (in points). Default: 50.
    pub footer_margin: f64,
    /// Height trimmed from the top of the page (in points). Default: 50.
    pub header_margin: f64,
    /// If true, ignore text blocks lying entirely inside an image. Default: true.
    pub no_image_text: bool,
}

impl Default for ColumnOptions {
    fn default() -> Self {
        Self {
            footer_margin: 50.0,
            header_margin: 50.0,
            no_image_text: true,
        }
    }
}

impl ColumnOptions {
    /// Reject non-finite margins.
    pub fn validate(&self) -> Result<(), ColumnError> {
        for (name, value) in [
            ("footer_margin", self.footer_margin),
            ("header_margin", self.header_margin),
        ] {
            if !value.is_finite() {
                return Err(ColumnError::InvalidOption { name, value });
            }
        }
        Ok(())
    }
}

/// Column rectangles together with the obstacles that shaped them.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColumnAnalysis {
    /// Columns in reading order.
    pub columns: Vec<IRect>,
    /// Page area between header and footer margins.
    pub usable_area: Rect,
    /// Rectangles of blocks whose first line is not horizontal.
    pub vertical: Vec<Rect>,
    /// Image rectangles on the page.
    pub images: Vec<Rect>,
}

/// Run all four phases on a page.
///
/// # Errors
///
/// Returns [`ColumnError`] if the page geometry or options are malformed.
/// A page without usable text is not an error: it yields no columns.
pub fn analyze_columns(
    page: &PageLayout,
    options: &ColumnOptions,
) -> Result<ColumnAnalysis, ColumnError> {
    page.validate()?;
    options.validate()?;

    let usable_area = filter::usable_area(page, options);
    let candidates = filter::collect_candidates(page, options);
    debug!(
        horizontal = candidates.horizontal.len(),
        vertical = candidates.vertical.len(),
        "collected text candidates"
    );

    let mut rects = candidates.horizontal;
    extend::extend_right(
        &mut rects,
        page.width.trunc(),
        &candidates.vertical,
        &page.images,
    );

    let obstacles: Vec<Rect> = candidates
        .vertical
        .iter()
        .chain(&page.images)
        .copied()
        .collect();
    let merged = merge::merge_columns(&rects, &obstacles);
    let cleaned = cleanup::clean_columns(merged);
    debug!(columns = cleaned.len(), "column detection finished");

    Ok(ColumnAnalysis {
        columns: cleaned.iter().map(Rect::round_out).collect(),
        usable_area,
        vertical: candidates.vertical,
        images: page.images.clone(),
    })
}

/// Column rectangles of a page, ordered for reading.
///
/// Shorthand for [`analyze_columns`] when the obstacles are not needed.
pub fn column_boxes(page: &PageLayout, options: &ColumnOptions) -> Result<Vec<IRect>, ColumnError> {
    analyze_columns(page, options).map(|analysis| analysis.columns)
}

/// Whether `trial` may stand in for `original` among `others`.
///
/// An empty `others` always allows the replacement. Otherwise the trial
/// must not touch any of `obstacles`, and every entry of `others` must
/// either equal `original` or not intersect `trial`.
pub(crate) fn can_replace<'a>(
    trial: &Rect,
    original: &Rect,
    others: impl IntoIterator<Item = &'a Rect>,
    obstacles: &[Rect],
) -> bool {
    let mut others = others.into_iter().peekable();
    if others.peek().is_none() {
        return true;
    }
    if intersects_any(trial, obstacles) {
        return false;
    }
    others.all(|other| other == original || !other.intersects(trial))
}

/// True if some rectangle in `set` contains `rect`.
pub(crate) fn contained_in_any(rect: &Rect, set: &[Rect]) -> bool {
    set.iter().any(|outer| outer.contains(rect))
}

/// True if `rect` intersects some rectangle in `set`.
pub(crate) fn intersects_any(rect: &Rect, set: &[Rect]) -> bool {
    set.iter().any(|other| other.intersects(rect))
}
