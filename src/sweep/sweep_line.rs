//! The contour sweep itself.
//!
//! Every rectangle fires two events, at its left and right edges. In
//! between, its top and bottom edges live in the status structure, each
//! carrying a count of how many rectangles cover the strip just below it. A
//! bottom edge is exposed on the union boundary while its count is exactly
//! 1 (only its own rectangle covers the strip above it), and a top edge
//! while its count is exactly 0 (nothing covers the strip above it).
//! Boundary pieces are emitted at the moments those exposures begin and
//! end:
//!
//! * a left event inserts the rectangle's two edges and walks the entries
//!   between them, covering previously exposed edges from the side and
//!   closing off their horizontal runs;
//! * a right event walks the same span in reverse roles, re-exposing edges
//!   and recording where their next horizontal run begins, then removes the
//!   rectangle's two entries.

use super::schedule::{build_schedule, Side};
use super::status::{Status, StatusEntry};
use crate::geom::{Point, Segment};
use crate::num::Coord;
use crate::rect::{Rect, RectIdx};

/// Computes the boundary contour of the union of `rects`.
///
/// The returned segments are each purely horizontal or purely vertical, and
/// together they form the closed boundary loops of the union. They are
/// emitted in sweep order, not contour order. Rectangles are identified by
/// their index in `rects`; duplicates are fine, though they add zero-length
/// segments to the raw output (see [`Segment::is_degenerate`]) without
/// changing the contour itself.
///
/// This is the raw core: it assumes every coordinate lies strictly between
/// [`Coord::min_value`] and [`Coord::max_value`], and it panics if a
/// structural invariant is violated rather than producing wrong output. Use
/// [`crate::union_contour`] for the checked version.
pub fn contour_rectangles<T: Coord>(rects: &[Rect<T>]) -> Vec<Segment<T>> {
    let schedule = build_schedule(rects);
    let mut sweeper = Sweeper::new(rects);
    for ev in &schedule {
        match ev.side {
            Side::Left => sweeper.handle_left_edge(ev.rect),
            Side::Right => sweeper.handle_right_edge(ev.rect),
            // `build_schedule` emits only vertical edges, so hitting this arm
            // is a bug in the sweep, not bad input.
            Side::Bottom | Side::Top => unreachable!("horizontal edge in schedule"),
        }
    }
    sweeper.finish()
}

/// State for one sweep: the input rectangles, the status structure, and the
/// boundary segments accumulated so far.
struct Sweeper<'a, T> {
    rects: &'a [Rect<T>],
    status: Status<T>,
    segments: Vec<Segment<T>>,
}

impl<'a, T: Coord> Sweeper<'a, T> {
    fn new(rects: &'a [Rect<T>]) -> Self {
        let mut status = Status::new();
        // The sentinel is the bottom edge of an imaginary rectangle covering
        // the whole representable range. It bounds the structure from below
        // forever, so every real entry has a predecessor.
        status.insert(StatusEntry::new(
            T::min_value(),
            Side::Bottom,
            RectIdx::SENTINEL,
        ));
        Sweeper {
            rects,
            status,
            segments: Vec::new(),
        }
    }

    fn finish(self) -> Vec<Segment<T>> {
        // Every rectangle's right event removed its two entries, so only the
        // sentinel is left.
        debug_assert_eq!(self.status.len(), 1);
        self.segments
    }

    /// The x at which the exposed horizontal run along entry `i` began.
    fn run_start(&self, i: usize) -> T {
        let e = &self.status[i];
        e.min_x.unwrap_or(self.rects[e.rect.0].sw.x)
    }

    /// Emits the vertical piece at `x` between entries `i` (below) and `j`.
    fn push_vertical(&mut self, x: T, i: usize, j: usize) {
        let y0 = self.status[i].y;
        let y1 = self.status[j].y;
        self.segments
            .push(Segment::new(Point::new(x, y0), Point::new(x, y1)));
    }

    /// Emits the horizontal run along entry `i`, ending at `curx`.
    fn push_horizontal(&mut self, i: usize, curx: T) {
        let x0 = self.run_start(i);
        let y = self.status[i].y;
        self.segments
            .push(Segment::new(Point::new(x0, y), Point::new(curx, y)));
    }

    /// The sweep has reached the left edge of `rect`.
    fn handle_left_edge(&mut self, rect: RectIdx) {
        let r = &self.rects[rect.0];
        let curx = r.sw.x;

        let mut u = self.status.insert(StatusEntry::new(r.ne.y, Side::Top, rect));
        let l = self
            .status
            .insert(StatusEntry::new(r.sw.y, Side::Bottom, rect));
        // The bottom entry always lands below the top one, shifting it up.
        debug_assert!(l <= u);
        u += 1;

        // The strip the new bottom edge bounds was covered by however many
        // rectangles covered it at the predecessor; entering this rectangle
        // adds one layer.
        self.status[l].count = self.status[l - 1].count + 1;

        for i in l + 1..u {
            let was = self.status[i].count;
            self.status[i].count += 1;
            match self.status[i].side {
                // A bottom edge that was exposed is now covered from below:
                // close off its horizontal run and the vertical step up to
                // it at the current sweep position.
                Side::Bottom if was == 1 => {
                    self.push_vertical(curx, i - 1, i);
                    self.push_horizontal(i, curx);
                }
                // A top edge that was exposed is now covered from above.
                Side::Top if was == 0 => self.push_horizontal(i, curx),
                _ => {}
            }
        }

        // The new top edge sits one cover level below its predecessor. If
        // that leaves it exposed, the boundary re-opens just above the new
        // rectangle.
        let count = self.status[u - 1].count - 1;
        self.status[u].count = count;
        if count == 0 {
            self.push_vertical(curx, u - 1, u);
        }
    }

    /// The sweep has reached the right edge of `rect`.
    fn handle_right_edge(&mut self, rect: RectIdx) {
        let r = &self.rects[rect.0];
        let curx = r.ne.x;

        // expect: both entries were inserted by this rectangle's left event,
        // which sorts before its right event.
        let u = self
            .status
            .find(r.ne.y, Side::Top, rect)
            .expect("top status entry missing at right edge");
        let l = self
            .status
            .find(r.sw.y, Side::Bottom, rect)
            .expect("bottom status entry missing at right edge");

        // Exposed runs along this rectangle's own edges terminate here.
        if self.status[l].count == 1 {
            self.push_horizontal(l, curx);
        }
        if self.status[u].count == 0 {
            self.push_horizontal(u, curx);
        }

        for i in l + 1..u {
            self.status[i].count -= 1;
            let now = self.status[i].count;
            match self.status[i].side {
                // Removing this rectangle re-exposes the strip below `i`:
                // the boundary opens with a vertical step, and future
                // horizontal runs along `i` start here.
                Side::Bottom if now == 1 => {
                    self.push_vertical(curx, i - 1, i);
                    self.status[i].min_x = Some(curx);
                }
                Side::Top if now == 0 => self.status[i].min_x = Some(curx),
                _ => {}
            }
        }

        if self.status[u].count == 0 {
            self.push_vertical(curx, u - 1, u);
        }

        // This rectangle's influence on the sweep ends here.
        self.status.remove(u);
        self.status.remove(l);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x0: i32, y0: i32, x1: i32, y1: i32) -> Rect<i32> {
        Rect::new(Point::new(x0, y0), Point::new(x1, y1))
    }

    fn seg(x0: i32, y0: i32, x1: i32, y1: i32) -> Segment<i32> {
        Segment::new(Point::new(x0, y0), Point::new(x1, y1))
    }

    #[test]
    fn empty_input() {
        assert!(contour_rectangles::<i32>(&[]).is_empty());
    }

    #[test]
    fn single_rectangle() {
        let out = contour_rectangles(&[rect(1, 2, 4, 6)]);
        assert_eq!(
            out,
            [
                seg(1, 2, 1, 6),
                seg(1, 2, 4, 2),
                seg(1, 6, 4, 6),
                seg(4, 2, 4, 6),
            ]
        );
    }

    // A rectangle beginning exactly where another ends merges with it for
    // that instant: there is no boundary between them, only the zero-length
    // artifacts the coincident edges produce.
    #[test]
    fn touching_rectangles_merge() {
        let out = contour_rectangles(&[rect(0, 0, 1, 1), rect(1, 0, 2, 1)]);
        assert_eq!(
            out,
            [
                seg(0, 0, 0, 1),
                seg(0, 1, 1, 1),
                seg(1, 1, 1, 1),
                seg(0, 0, 1, 0),
                seg(1, 0, 1, 0),
                seg(1, 0, 2, 0),
                seg(1, 1, 2, 1),
                seg(2, 0, 2, 1),
            ]
        );
        let real: Vec<_> = out.iter().filter(|s| !s.is_degenerate()).collect();
        assert_eq!(real.len(), 6);
        assert!(!real.contains(&&seg(1, 0, 1, 1)));
    }

    // Same policy along a shared horizontal edge.
    #[test]
    fn stacked_rectangles_merge() {
        let out = contour_rectangles(&[rect(0, 0, 2, 1), rect(0, 1, 2, 2)]);
        let real: Vec<_> = out.into_iter().filter(|s| !s.is_degenerate()).collect();
        assert_eq!(
            real,
            [
                seg(0, 0, 0, 1),
                seg(0, 1, 0, 2),
                seg(0, 0, 2, 0),
                seg(2, 0, 2, 1),
                seg(0, 2, 2, 2),
                seg(2, 1, 2, 2),
            ]
        );
    }

    // Zero-width rectangles are representable but geometrically meaningless;
    // the sweep emits their left edge twice and two zero-length runs.
    #[test]
    fn zero_width_rectangle() {
        let out = contour_rectangles(&[rect(2, 0, 2, 1)]);
        assert_eq!(
            out,
            [
                seg(2, 0, 2, 1),
                seg(2, 0, 2, 0),
                seg(2, 1, 2, 1),
                seg(2, 0, 2, 1),
            ]
        );
    }

    #[test]
    fn nested_rectangle_is_swallowed() {
        let out = contour_rectangles(&[rect(0, 0, 10, 10), rect(2, 2, 5, 5)]);
        let real: Vec<_> = out.into_iter().filter(|s| !s.is_degenerate()).collect();
        assert_eq!(
            real,
            [
                seg(0, 0, 0, 10),
                seg(0, 0, 10, 0),
                seg(0, 10, 10, 10),
                seg(10, 0, 10, 10),
            ]
        );
    }
}
