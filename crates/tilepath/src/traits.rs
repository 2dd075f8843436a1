use tilepath_core::{Point, Range};

use crate::cell::CellRecord;

/// Read-only view of a map, as needed by the search.
///
/// `record` must be defined for every in-bounds position an [`Adjacency`]
/// can produce.
pub trait CellMap {
    /// The extent of the map. Start and goal must lie inside it.
    fn bounds(&self) -> Range;

    /// The record of the cell at `p`, or `None` if `p` is outside the map.
    fn record(&self, p: Point) -> Option<&CellRecord>;

    /// Whether `p` can never be entered. Positions outside the map count as
    /// barriers.
    fn is_barrier(&self, p: Point) -> bool {
        self.record(p).is_none_or(CellRecord::is_barrier)
    }
}

/// Neighbour enumeration under some tiling.
pub trait Adjacency {
    /// Append the in-bounds neighbours of `p` into `buf`. The caller clears
    /// `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

impl<F> Adjacency for F
where
    F: Fn(Point, &mut Vec<Point>),
{
    #[inline]
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        self(p, buf)
    }
}
