//! The sweep-line status structure.
//!
//! This is the classic ordered status structure of a plane sweep, kept as a
//! sorted array rather than a balanced tree: the data sets we sweep are
//! modest, and the contract is the same either way. Entries are ordered by
//! `(y, side, rect)` -- vertical position first, `Bottom` before `Top` among
//! coincident edges, and the rectangle index as a final tie-break so the
//! order is total.
//!
//! `insert` and `find` return the entry's position, and neighbor navigation
//! is plain index arithmetic on the caller's side. A permanent sentinel
//! entry below everything (installed by the sweep driver) guarantees that
//! every real entry has a predecessor, so `i - 1` never underflows during a
//! correctly-sequenced sweep.

use super::schedule::Side;
use crate::num::Coord;
use crate::rect::RectIdx;

/// One live edge under the sweep line.
///
/// Every rectangle between its left and right events contributes exactly two
/// of these: its `Bottom` and `Top` edges.
#[derive(Clone, Copy, Debug)]
pub(crate) struct StatusEntry<T> {
    /// The vertical position of the edge.
    pub y: T,
    /// `Bottom` or `Top`; vertical sides never live in the status structure.
    pub side: Side,
    pub rect: RectIdx,
    /// How many rectangles currently cover the strip just below this edge.
    pub count: i32,
    /// Once this edge's exposed run has been closed off, the x coordinate
    /// where a future exposed run will begin. `None` means the run starts at
    /// the rectangle's own left side.
    pub min_x: Option<T>,
}

impl<T: Coord> StatusEntry<T> {
    pub fn new(y: T, side: Side, rect: RectIdx) -> Self {
        StatusEntry {
            y,
            side,
            rect,
            count: 0,
            min_x: None,
        }
    }

    fn key(&self) -> (T, Side, RectIdx) {
        (self.y, self.side, self.rect)
    }
}

/// The ordered set of edges currently intersected by the sweep line.
#[derive(Clone, Debug)]
pub(crate) struct Status<T> {
    entries: Vec<StatusEntry<T>>,
}

impl<T: Coord> Status<T> {
    pub fn new() -> Self {
        Status {
            entries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Inserts an entry at its position in the order, returning that
    /// position. Entries at or after the returned index shift up by one.
    pub fn insert(&mut self, entry: StatusEntry<T>) -> usize {
        let key = entry.key();
        let idx = self.entries.partition_point(|e| e.key() < key);
        self.entries.insert(idx, entry);
        idx
    }

    /// Looks up the position of the entry with the given key.
    pub fn find(&self, y: T, side: Side, rect: RectIdx) -> Option<usize> {
        self.entries
            .binary_search_by(|e| e.key().cmp(&(y, side, rect)))
            .ok()
    }

    /// Removes the entry at `idx`. Entries after it shift down by one.
    pub fn remove(&mut self, idx: usize) -> StatusEntry<T> {
        self.entries.remove(idx)
    }
}

impl<T> std::ops::Index<usize> for Status<T> {
    type Output = StatusEntry<T>;

    fn index(&self, idx: usize) -> &StatusEntry<T> {
        &self.entries[idx]
    }
}

impl<T> std::ops::IndexMut<usize> for Status<T> {
    fn index_mut(&mut self, idx: usize) -> &mut StatusEntry<T> {
        &mut self.entries[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inserts_in_ascending_y_order() {
        let mut status = Status::new();
        assert_eq!(status.insert(StatusEntry::new(5, Side::Top, RectIdx(0))), 0);
        assert_eq!(
            status.insert(StatusEntry::new(0, Side::Bottom, RectIdx(0))),
            0
        );
        assert_eq!(
            status.insert(StatusEntry::new(3, Side::Bottom, RectIdx(1))),
            1
        );
        let ys: Vec<i32> = (0..status.len()).map(|i| status[i].y).collect();
        assert_eq!(ys, [0, 3, 5]);
    }

    #[test]
    fn bottom_sorts_before_top_at_equal_y() {
        let mut status = Status::new();
        status.insert(StatusEntry::new(2, Side::Top, RectIdx(0)));
        status.insert(StatusEntry::new(2, Side::Bottom, RectIdx(1)));
        assert_eq!(status[0].side, Side::Bottom);
        assert_eq!(status[1].side, Side::Top);
    }

    #[test]
    fn rect_index_orders_coincident_edges() {
        let mut status = Status::new();
        status.insert(StatusEntry::new(2, Side::Bottom, RectIdx(7)));
        status.insert(StatusEntry::new(2, Side::Bottom, RectIdx(3)));
        assert_eq!(status[0].rect, RectIdx(3));
        assert_eq!(status[1].rect, RectIdx(7));
    }

    #[test]
    fn find_and_remove() {
        let mut status = Status::new();
        status.insert(StatusEntry::new(0, Side::Bottom, RectIdx(0)));
        status.insert(StatusEntry::new(4, Side::Top, RectIdx(0)));
        status.insert(StatusEntry::new(1, Side::Bottom, RectIdx(1)));

        let idx = status.find(4, Side::Top, RectIdx(0)).unwrap();
        assert_eq!(idx, 2);
        assert!(status.find(4, Side::Top, RectIdx(1)).is_none());
        assert!(status.find(4, Side::Bottom, RectIdx(0)).is_none());

        let removed = status.remove(idx);
        assert_eq!(removed.y, 4);
        assert_eq!(status.len(), 2);
        assert!(status.find(4, Side::Top, RectIdx(0)).is_none());
    }
}
