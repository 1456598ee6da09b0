#![deny(missing_docs)]
#![doc = include_str!("../README.md")]

mod geom;
mod num;
mod rect;
pub mod sweep;

pub use geom::{Point, Segment};
pub use num::Coord;
pub use rect::{Rect, RectIdx};
pub use sweep::contour_rectangles;

/// The input rectangles were unusable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// A rectangle had a coordinate at or beyond the representable extremes
    /// of the coordinate type. The extremes are reserved for the sweep's
    /// sentinel; for floats this also covers infinities and NaN.
    OutOfRange {
        /// The index of the offending rectangle.
        rect: usize,
    },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::OutOfRange { rect } => {
                write!(f, "rectangle {rect} has a coordinate outside the representable range")
            }
        }
    }
}

impl std::error::Error for Error {}

/// Computes the boundary contour of the union of a set of axis-aligned
/// rectangles.
///
/// This is the checked entry point: it verifies that every coordinate lies
/// strictly inside the coordinate type's representable range before handing
/// the rectangles to [`contour_rectangles`]. The extremes themselves are
/// reserved for the sweep-line sentinel, so a rectangle touching them would
/// break the status structure's ordering.
pub fn union_contour<T: Coord>(rects: &[Rect<T>]) -> Result<Vec<Segment<T>>, Error> {
    for (i, r) in rects.iter().enumerate() {
        let in_range = |c: T| c > T::min_value() && c < T::max_value();
        if ![r.sw.x, r.sw.y, r.ne.x, r.ne.y].into_iter().all(in_range) {
            return Err(Error::OutOfRange { rect: i });
        }
    }
    Ok(contour_rectangles(rects))
}
