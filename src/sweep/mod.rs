//! The sweep-line implementation.
//!
//! The sweep moves left to right over the rectangles' vertical edges. The
//! main entry point is [`contour_rectangles`], which builds the event
//! schedule, runs the sweep, and returns the boundary segments of the union.

mod schedule;
mod status;
mod sweep_line;

pub use sweep_line::contour_rectangles;
