//! Right extension: widen text rectangles toward the page's right edge.

use tracing::trace;

use super::{can_replace, contained_in_any, intersects_any};
use crate::geometry::Rect;

/// Extend each rectangle's right edge to `width` where nothing blocks it.
///
/// A rectangle is left alone if it lies inside an image, if the widened
/// rectangle would cross an image or vertical text, or if it would
/// overlap another text rectangle. Rectangles are replaced in place and
/// in order, so later rectangles are checked against the already widened
/// ones. The slice keeps its length and order.
pub fn extend_right(rects: &mut [Rect], width: f64, vertical: &[Rect], images: &[Rect]) {
    for i in 0..rects.len() {
        let rect = rects[i];
        if contained_in_any(&rect, images) {
            continue;
        }

        let widened = rect.with_x1(width);
        if intersects_any(&widened, vertical) || intersects_any(&widened, images) {
            trace!(index = i, "extension crosses an obstacle");
            continue;
        }

        if can_replace(&widened, &rect, rects.iter(), vertical) {
            rects[i] = widened;
        } else {
            trace!(index = i, "extension overlaps other text");
        }
    }
}
