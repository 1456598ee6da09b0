//! Geometric primitives, like points and axis-parallel segments.

use ordered_float::OrderedFloat;

use crate::num::Coord;

/// A two-dimensional point.
///
/// Points are sorted by `x` and then by `y`, for the convenience of our
/// sweep-line algorithm (which moves in increasing `x`).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point<T> {
    /// Horizontal coordinate. Larger values are to the right.
    pub x: T,
    /// Vertical coordinate. Larger values are up.
    pub y: T,
}

impl<T: std::fmt::Debug> std::fmt::Debug for Point<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:?}, {:?})", self.x, self.y)
    }
}

impl<T: Coord> Point<T> {
    /// Create a new point.
    pub fn new(x: T, y: T) -> Self {
        Point { x, y }
    }
}

impl Point<OrderedFloat<f64>> {
    /// Convert to a kurbo point.
    pub fn to_kurbo(self) -> kurbo::Point {
        kurbo::Point::new(self.x.into_inner(), self.y.into_inner())
    }
}

impl<T> From<(T, T)> for Point<T> {
    fn from((x, y): (T, T)) -> Self {
        Point { x, y }
    }
}

// Points serialize as `[x, y]`, so that a segment comes out as
// `[[x1, y1], [x2, y2]]` -- the shape a request/response adapter
// would put on the wire.
impl<T: serde::Serialize> serde::Serialize for Point<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeTuple;

        let mut tup = serializer.serialize_tuple(2)?;
        tup.serialize_element(&self.x)?;
        tup.serialize_element(&self.y)?;
        tup.end()
    }
}

impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Point<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (x, y) = <(T, T)>::deserialize(deserializer)?;
        Ok(Point { x, y })
    }
}

/// A directed axis-parallel segment of the union boundary.
///
/// The sweep emits segments with `start <= end` in point order: verticals run
/// bottom-to-top and horizontals left-to-right. Degenerate input rectangles
/// (or rectangles that merely touch) can produce zero-length segments; see
/// [`Segment::is_degenerate`].
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Segment<T> {
    /// Where the segment begins.
    pub start: Point<T>,
    /// Where the segment ends.
    pub end: Point<T>,
}

impl<T: std::fmt::Debug> std::fmt::Debug for Segment<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} -- {:?}", self.start, self.end)
    }
}

impl<T: Coord> Segment<T> {
    /// Create a new segment.
    pub fn new(start: Point<T>, end: Point<T>) -> Self {
        Segment { start, end }
    }

    /// Returns true if both endpoints share a `y` coordinate.
    pub fn is_horizontal(&self) -> bool {
        self.start.y == self.end.y
    }

    /// Returns true if both endpoints share an `x` coordinate.
    pub fn is_vertical(&self) -> bool {
        self.start.x == self.end.x
    }

    /// Returns true if this segment has zero length.
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }
}

impl Segment<OrderedFloat<f64>> {
    /// Convert to a kurbo line.
    pub fn to_kurbo(&self) -> kurbo::Line {
        kurbo::Line::new(self.start.to_kurbo(), self.end.to_kurbo())
    }
}

impl<T: serde::Serialize> serde::Serialize for Segment<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeTuple;

        let mut tup = serializer.serialize_tuple(2)?;
        tup.serialize_element(&self.start)?;
        tup.serialize_element(&self.end)?;
        tup.end()
    }
}

impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Segment<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (start, end) = <(Point<T>, Point<T>)>::deserialize(deserializer)?;
        Ok(Segment { start, end })
    }
}
