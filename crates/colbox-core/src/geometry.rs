use crate::error::ColumnError;

/// Axis-aligned rectangle in page space.
///
/// Coordinates use a top-left origin:
/// - `x0`: left edge
/// - `y0`: top edge (distance from top of page)
/// - `x1`: right edge
/// - `y1`: bottom edge (distance from top of page)
///
/// A rectangle with `x0 >= x1` or `y0 >= y1` has no area and is *empty*.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl Rect {
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Create a rectangle, rejecting non-finite or inverted coordinates.
    pub fn try_new(x0: f64, y0: f64, x1: f64, y1: f64) -> Result<Self, ColumnError> {
        let rect = Self::new(x0, y0, x1, y1);
        rect.validate()?;
        Ok(rect)
    }

    /// Check that all coordinates are finite and `x0 <= x1`, `y0 <= y1`.
    pub fn validate(&self) -> Result<(), ColumnError> {
        let reason = if ![self.x0, self.y0, self.x1, self.y1]
            .iter()
            .all(|v| v.is_finite())
        {
            "non-finite coordinate"
        } else if self.x0 > self.x1 {
            "x0 is greater than x1"
        } else if self.y0 > self.y1 {
            "y0 is greater than y1"
        } else {
            return Ok(());
        };
        Err(ColumnError::InvalidRect {
            rect: *self,
            reason,
        })
    }

    /// Width of the rectangle.
    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    /// Height of the rectangle.
    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }

    pub fn is_empty(&self) -> bool {
        self.x0 >= self.x1 || self.y0 >= self.y1
    }

    /// Smallest rectangle containing both.
    pub fn union(&self, other: &Rect) -> Rect {
        Rect {
            x0: self.x0.min(other.x0),
            y0: self.y0.min(other.y0),
            x1: self.x1.max(other.x1),
            y1: self.y1.max(other.y1),
        }
    }

    /// Overlapping region, or `None` when the overlap has no area.
    ///
    /// Rectangles that only share an edge do not intersect.
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let overlap = Rect {
            x0: self.x0.max(other.x0),
            y0: self.y0.max(other.y0),
            x1: self.x1.min(other.x1),
            y1: self.y1.min(other.y1),
        };
        (!overlap.is_empty()).then_some(overlap)
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        self.intersect(other).is_some()
    }

    /// True if every corner of `other` lies within `self` (edges inclusive).
    pub fn contains(&self, other: &Rect) -> bool {
        self.x0 <= other.x0 && self.y0 <= other.y0 && other.x1 <= self.x1 && other.y1 <= self.y1
    }

    /// Copy of this rectangle with a different right edge.
    pub fn with_x1(self, x1: f64) -> Rect {
        Rect { x1, ..self }
    }

    /// True unless one rectangle lies strictly to the left of the other.
    ///
    /// Touching spans count as overlapping.
    pub fn overlaps_horizontally(&self, other: &Rect) -> bool {
        !(self.x1 < other.x0 || other.x1 < self.x0)
    }

    /// Smallest integer rectangle enclosing this one.
    pub fn round_out(&self) -> IRect {
        IRect {
            x0: self.x0.floor() as i64,
            y0: self.y0.floor() as i64,
            x1: self.x1.ceil() as i64,
            y1: self.y1.ceil() as i64,
        }
    }
}

impl From<IRect> for Rect {
    fn from(r: IRect) -> Self {
        Rect::new(r.x0 as f64, r.y0 as f64, r.x1 as f64, r.y1 as f64)
    }
}

/// Rectangle with integer coordinates, used for column output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IRect {
    pub x0: i64,
    pub y0: i64,
    pub x1: i64,
    pub y1: i64,
}

impl IRect {
    pub fn new(x0: i64, y0: i64, x1: i64, y1: i64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    pub fn width(&self) -> i64 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> i64 {
        self.y1 - self.y0
    }

    pub fn is_empty(&self) -> bool {
        self.x0 >= self.x1 || self.y0 >= self.y1
    }

    pub fn to_rect(self) -> Rect {
        Rect::from(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_dimensions() {
        let r = Rect::new(10.0, 20.0, 50.0, 60.0);
        assert_eq!(r.width(), 40.0);
        assert_eq!(r.height(), 40.0);
    }

    #[test]
    fn test_rect_try_new_rejects_inverted() {
        let err = Rect::try_new(10.0, 0.0, 5.0, 10.0).unwrap_err();
        assert!(err.to_string().contains("x0 is greater than x1"));
        assert!(Rect::try_new(0.0, 10.0, 5.0, 0.0).is_err());
    }

    #[test]
    fn test_rect_try_new_rejects_nan() {
        assert!(Rect::try_new(f64::NAN, 0.0, 5.0, 10.0).is_err());
        assert!(Rect::try_new(0.0, 0.0, f64::INFINITY, 10.0).is_err());
    }

    #[test]
    fn test_rect_try_new_accepts_zero_area() {
        let r = Rect::try_new(5.0, 5.0, 5.0, 10.0).unwrap();
        assert!(r.is_empty());
    }

    #[test]
    fn test_rect_union() {
        let a = Rect::new(10.0, 20.0, 30.0, 40.0);
        let b = Rect::new(5.0, 25.0, 35.0, 45.0);
        assert_eq!(a.union(&b), Rect::new(5.0, 20.0, 35.0, 45.0));
    }

    #[test]
    fn test_rect_intersect_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 15.0, 15.0);
        assert_eq!(a.intersect(&b), Some(Rect::new(5.0, 5.0, 10.0, 10.0)));
        assert!(a.intersects(&b));
    }

    #[test]
    fn test_rect_shared_edge_is_not_intersection() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 20.0, 10.0);
        assert_eq!(a.intersect(&b), None);
        assert!(!b.intersects(&a));
    }

    #[test]
    fn test_rect_contains_inclusive() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(outer.contains(&Rect::new(0.0, 0.0, 100.0, 100.0)));
        assert!(outer.contains(&Rect::new(10.0, 10.0, 20.0, 20.0)));
        assert!(!outer.contains(&Rect::new(90.0, 10.0, 110.0, 20.0)));
    }

    #[test]
    fn test_rect_overlaps_horizontally() {
        let a = Rect::new(0.0, 0.0, 100.0, 10.0);
        assert!(a.overlaps_horizontally(&Rect::new(100.0, 50.0, 200.0, 60.0)));
        assert!(a.overlaps_horizontally(&Rect::new(50.0, 50.0, 60.0, 60.0)));
        assert!(!a.overlaps_horizontally(&Rect::new(101.0, 0.0, 200.0, 10.0)));
    }

    #[test]
    fn test_with_x1_leaves_original_untouched() {
        let a = Rect::new(0.0, 0.0, 100.0, 10.0);
        let b = a.with_x1(400.0);
        assert_eq!(a.x1, 100.0);
        assert_eq!(b, Rect::new(0.0, 0.0, 400.0, 10.0));
    }

    #[test]
    fn test_round_out_encloses() {
        let r = Rect::new(10.4, 20.6, 30.2, 40.0);
        assert_eq!(r.round_out(), IRect::new(10, 20, 31, 40));
    }

    #[test]
    fn test_irect_to_rect() {
        let r = IRect::new(1, 2, 3, 4);
        assert_eq!(r.to_rect(), Rect::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(r.width(), 2);
        assert!(!r.is_empty());
        assert!(IRect::new(3, 0, 3, 5).is_empty());
    }
}
