//! Axis-aligned rectangles, the input unit of the sweep.

use ordered_float::OrderedFloat;

use crate::geom::Point;
use crate::num::Coord;

/// An index into the caller's rectangle slice.
///
/// Throughout this library, rectangles are identified by their position in
/// the input slice rather than by reference: the sweep's status entries store
/// a `RectIdx` and look coordinates up when they need them, so removing an
/// entry mid-sweep can never leave anything dangling.
#[derive(Clone, Copy, PartialOrd, Ord, PartialEq, Eq, Hash, serde::Serialize)]
pub struct RectIdx(pub usize);

impl RectIdx {
    /// The reserved index of the sweep-line sentinel. Never a valid slice
    /// index, so the sentinel can never collide with a real rectangle's
    /// identity.
    pub(crate) const SENTINEL: RectIdx = RectIdx(usize::MAX);
}

impl std::fmt::Debug for RectIdx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "r_{}", self.0)
    }
}

/// An axis-aligned rectangle, described by two opposite corners.
///
/// The rectangle is the region between `sw` (the south-west, bottom-left
/// corner) and `ne` (the north-east, top-right corner). Zero-width or
/// zero-height rectangles are representable, but the sweep treats them as
/// the degenerate shapes they are and may emit zero-length boundary
/// segments for them.
#[derive(Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rect<T> {
    /// The bottom-left corner.
    pub sw: Point<T>,
    /// The top-right corner.
    pub ne: Point<T>,
}

impl<T: std::fmt::Debug> std::fmt::Debug for Rect<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?} - {:?}]", self.sw, self.ne)
    }
}

impl<T: Coord> Rect<T> {
    /// Create a new rectangle from its bottom-left and top-right corners.
    pub fn new(sw: Point<T>, ne: Point<T>) -> Self {
        debug_assert!(sw.x <= ne.x && sw.y <= ne.y);
        Rect { sw, ne }
    }

    /// The horizontal extent, `ne.x - sw.x`.
    pub fn width(&self) -> T {
        self.ne.x - self.sw.x
    }

    /// The vertical extent, `ne.y - sw.y`.
    pub fn height(&self) -> T {
        self.ne.y - self.sw.y
    }
}

impl From<kurbo::Rect> for Rect<OrderedFloat<f64>> {
    fn from(r: kurbo::Rect) -> Self {
        Rect::new(
            Point::new(OrderedFloat(r.min_x()), OrderedFloat(r.min_y())),
            Point::new(OrderedFloat(r.max_x()), OrderedFloat(r.max_y())),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extents() {
        let r = Rect::new(Point::new(-1, 1), Point::new(3, 4));
        assert_eq!(r.width(), 4);
        assert_eq!(r.height(), 3);
    }

    #[test]
    fn from_kurbo() {
        let r: Rect<OrderedFloat<f64>> = kurbo::Rect::new(0.0, 1.0, 2.0, 3.0).into();
        assert_eq!(r.sw, Point::new(OrderedFloat(0.0), OrderedFloat(1.0)));
        assert_eq!(r.ne, Point::new(OrderedFloat(2.0), OrderedFloat(3.0)));
    }

    #[test]
    fn debug_idx() {
        assert_eq!(format!("{:?}", RectIdx(3)), "r_3");
    }
}
