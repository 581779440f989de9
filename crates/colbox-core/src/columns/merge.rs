//! Column merging: fold text rectangles into column rectangles.

use tracing::trace;

use super::can_replace;
use crate::geometry::Rect;

/// Merge sorted, extended text rectangles into column rectangles.
///
/// The first rectangle seeds the output. Each following rectangle is
/// joined with the first output column whose horizontal span overlaps it
/// and whose union with it stays clear of every other column and of all
/// `obstacles` (vertical text and images). Without such a column it
/// starts a new one.
///
/// Input entries are consumed front to back; the unconsumed suffix
/// (current entry included) is what a union is finally checked against.
/// A union that would swallow a rectangle still waiting to be placed is
/// not kept: the rectangle is appended on its own instead.
pub fn merge_columns(rects: &[Rect], obstacles: &[Rect]) -> Vec<Rect> {
    let Some((first, rest)) = rects.split_first() else {
        return Vec::new();
    };
    let mut columns = vec![*first];

    for (i, rect) in rest.iter().enumerate() {
        let joined = columns
            .iter()
            .enumerate()
            .filter(|(_, column)| column.overlaps_horizontally(rect))
            .find_map(|(j, column)| {
                let trial = rect.union(column);
                can_replace(&trial, column, &columns, obstacles).then_some((j, trial))
            });

        let (slot, trial) = match joined {
            Some(found) => found,
            None => {
                columns.push(*rect);
                (columns.len() - 1, *rect)
            }
        };

        let pending = &rest[i..];
        if can_replace(&trial, rect, pending, obstacles) {
            columns[slot] = trial;
        } else {
            trace!(column = slot, "union would cover a pending rectangle");
            columns.push(*rect);
        }
    }

    columns
}
