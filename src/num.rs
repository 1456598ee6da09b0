//! A thin abstraction over the different coordinate types we support.

use std::hash::Hash;

use ordered_float::{NotNan, OrderedFloat};

/// A trait for abstracting over the properties we need from coordinate types.
///
/// The sweep only ever compares coordinates and takes differences; it never
/// multiplies or divides, so plain integers work just as well as the
/// `ordered_float` wrappers. The representable extremes are used for the
/// sweep-line sentinel, which is why every real coordinate must stay strictly
/// inside them (see [`crate::union_contour`]).
pub trait Coord:
    Copy
    + Ord
    + Eq
    + Hash
    + std::fmt::Debug
    + std::ops::Sub<Self, Output = Self>
    + 'static
{
    /// The smallest representable value. For floats this is negative infinity.
    fn min_value() -> Self;

    /// The largest representable value. For floats this is positive infinity.
    fn max_value() -> Self;
}

impl Coord for i32 {
    fn min_value() -> Self {
        i32::MIN
    }

    fn max_value() -> Self {
        i32::MAX
    }
}

impl Coord for i64 {
    fn min_value() -> Self {
        i64::MIN
    }

    fn max_value() -> Self {
        i64::MAX
    }
}

impl Coord for NotNan<f32> {
    fn min_value() -> Self {
        // unwrap: infinities are not NaN.
        NotNan::new(f32::NEG_INFINITY).unwrap()
    }

    fn max_value() -> Self {
        NotNan::new(f32::INFINITY).unwrap()
    }
}

impl Coord for NotNan<f64> {
    fn min_value() -> Self {
        NotNan::new(f64::NEG_INFINITY).unwrap()
    }

    fn max_value() -> Self {
        NotNan::new(f64::INFINITY).unwrap()
    }
}

impl Coord for OrderedFloat<f32> {
    fn min_value() -> Self {
        OrderedFloat(f32::NEG_INFINITY)
    }

    fn max_value() -> Self {
        // NaN sorts above infinity in `OrderedFloat`, so a NaN coordinate is
        // caught by the same out-of-range check as an infinite one.
        OrderedFloat(f32::INFINITY)
    }
}

impl Coord for OrderedFloat<f64> {
    fn min_value() -> Self {
        OrderedFloat(f64::NEG_INFINITY)
    }

    fn max_value() -> Self {
        OrderedFloat(f64::INFINITY)
    }
}
