//! Building the schedule of sweep events.

use crate::num::Coord;
use crate::rect::{Rect, RectIdx};

/// Which side of its rectangle an edge is.
///
/// The declaration order matters: it is the second key of both the schedule
/// order and the status-structure order. `Left < Right` means that when one
/// rectangle ends exactly where another begins, the left event is handled
/// first and the two rectangles merge for that instant. `Bottom < Top`
/// fixes the order of coincident horizontal edges in the status structure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) enum Side {
    Left,
    Right,
    Bottom,
    Top,
}

/// A sweep event: one vertical edge of one rectangle.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Event<T> {
    /// The sweep position at which the event fires.
    pub x: T,
    /// Either `Left` or `Right`; horizontal edges never enter the schedule.
    pub side: Side,
    pub rect: RectIdx,
}

/// Turns N rectangles into their 2N vertical-edge events, sorted by sweep
/// position with `(side, rect)` as the tie-breaks. The rectangle index makes
/// the key a total order, so results are reproducible whatever sort is used.
pub(crate) fn build_schedule<T: Coord>(rects: &[Rect<T>]) -> Vec<Event<T>> {
    let mut schedule = Vec::with_capacity(2 * rects.len());
    for (i, r) in rects.iter().enumerate() {
        schedule.push(Event {
            x: r.sw.x,
            side: Side::Left,
            rect: RectIdx(i),
        });
        schedule.push(Event {
            x: r.ne.x,
            side: Side::Right,
            rect: RectIdx(i),
        });
    }
    schedule.sort_unstable_by_key(|ev| (ev.x, ev.side, ev.rect));
    schedule
}
