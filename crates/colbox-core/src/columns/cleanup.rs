//! Post-merge cleanup: duplicates out, rows in left-to-right order.

use super::ROW_TOLERANCE;
use crate::geometry::Rect;

/// Remove adjacent duplicates and re-sort rows by left edge.
///
/// A row is a run of consecutive columns whose bottoms lie within
/// [`ROW_TOLERANCE`] of the bottom of the run's first column. Merging can
/// discover two columns of one row right-to-left; sorting each row by
/// `x0` (stable) restores reading order without moving rows.
pub fn clean_columns(mut columns: Vec<Rect>) -> Vec<Rect> {
    if columns.len() < 2 {
        return columns;
    }
    columns.dedup();
    sort_rows(&mut columns);
    columns
}

fn sort_rows(columns: &mut [Rect]) {
    let mut start = 0;
    while start < columns.len() {
        let bottom = columns[start].y1;
        let end = columns[start..]
            .iter()
            .position(|rect| (rect.y1 - bottom).abs() > ROW_TOLERANCE)
            .map_or(columns.len(), |offset| start + offset);
        columns[start..end].sort_by(|a, b| a.x0.total_cmp(&b.x0));
        start = end;
    }
}
