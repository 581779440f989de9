//! Candidate filtering: turn text blocks into rectangles worth clustering.

use tracing::trace;

use super::{ColumnOptions, contained_in_any};
use crate::geometry::Rect;
use crate::page::{PageLayout, TextBlock, TextLine};

/// Text rectangles split by writing direction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Candidates {
    /// Horizontal text, sorted by `(y0, x0)`.
    pub horizontal: Vec<Rect>,
    /// Blocks whose first line is not horizontal. Obstacles only.
    pub vertical: Vec<Rect>,
}

/// The page rectangle with header and footer margins removed.
pub fn usable_area(page: &PageLayout, options: &ColumnOptions) -> Rect {
    let page_rect = page.rect();
    Rect::new(
        page_rect.x0,
        page_rect.y0 + options.header_margin,
        page_rect.x1,
        page_rect.y1 - options.footer_margin,
    )
}

/// Classify the page's text blocks and compute their effective rectangles.
///
/// Lines outside the usable area are dropped before a block is looked at,
/// the way an extractor clipped to that area would drop them. Then, per
/// block:
/// - no lines left: skipped;
/// - inside an image while `no_image_text` is set: skipped;
/// - first line not horizontal: recorded as a vertical obstacle;
/// - otherwise: union of its lines with more than one character, dropped
///   if no line qualifies.
///
/// All geometry is rounded out to integer coordinates.
pub fn collect_candidates(page: &PageLayout, options: &ColumnOptions) -> Candidates {
    let clip = usable_area(page, options);
    let mut candidates = Candidates::default();

    for (index, block) in page.blocks.iter().enumerate() {
        let Some(block) = clip_block(block, &clip) else {
            trace!(block = index, "skipping block without lines in usable area");
            continue;
        };
        let bbox = Rect::from(block.bbox.round_out());

        if options.no_image_text && contained_in_any(&bbox, &page.images) {
            trace!(block = index, "skipping block inside image");
            continue;
        }

        if block.is_horizontal() != Some(true) {
            trace!(block = index, "block is not horizontal");
            candidates.vertical.push(bbox);
            continue;
        }

        match text_extent(&block.lines) {
            Some(rect) if !rect.is_empty() => candidates.horizontal.push(rect),
            _ => trace!(block = index, "block has no significant text"),
        }
    }

    candidates
        .horizontal
        .sort_by(|a, b| a.y0.total_cmp(&b.y0).then(a.x0.total_cmp(&b.x0)));
    candidates
}

/// Keep only lines intersecting `clip`.
///
/// A block that lost lines gets the union of the survivors as its bbox.
/// Returns `None` when no line survives.
fn clip_block(block: &TextBlock, clip: &Rect) -> Option<TextBlock> {
    let lines: Vec<TextLine> = block
        .lines
        .iter()
        .filter(|line| line.bbox.intersects(clip))
        .cloned()
        .collect();
    if lines.is_empty() {
        return None;
    }
    let bbox = if lines.len() == block.lines.len() {
        block.bbox
    } else {
        union_all(lines.iter().map(|line| line.bbox))?
    };
    Some(TextBlock::new(bbox, lines))
}

/// Union of the rounded rectangles of significant lines.
fn text_extent(lines: &[TextLine]) -> Option<Rect> {
    union_all(
        lines
            .iter()
            .filter(|line| line.is_significant())
            .map(|line| Rect::from(line.bbox.round_out())),
    )
}

fn union_all(rects: impl IntoIterator<Item = Rect>) -> Option<Rect> {
    rects
        .into_iter()
        .reduce(|acc, rect| acc.union(&rect))
}
