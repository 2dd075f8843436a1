//! Neighbour enumeration for the two supported tilings.
//!
//! Both providers return neighbours clipped to the map bounds, so the search
//! never bounds-checks on its own.

use tilepath_core::{Point, Range};

use crate::traits::Adjacency;

/// Left, right, up, down.
const ORTHOGONAL: [Point; 4] = [
    Point::new(-1, 0),
    Point::new(1, 0),
    Point::new(0, -1),
    Point::new(0, 1),
];

/// Diagonals touching an odd column's hex: down-right, down-left.
const HEX_ODD_COLUMN: [Point; 2] = [Point::new(1, 1), Point::new(-1, 1)];

/// Diagonals touching an even column's hex: up-left, up-right.
const HEX_EVEN_COLUMN: [Point; 2] = [Point::new(-1, -1), Point::new(1, -1)];

/// How cells tile the plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tiling {
    /// Square cells, 4-connected.
    #[default]
    Grid,
    /// Offset-column hexagons, 6-connected. Odd columns sit half a cell
    /// lower than even ones.
    Hex,
}

impl Tiling {
    /// Append the neighbours of `p` inside `bounds` into `buf`.
    pub fn neighbors(self, p: Point, bounds: Range, buf: &mut Vec<Point>) {
        push_offsets(p, bounds, &ORTHOGONAL, buf);
        if self == Tiling::Hex {
            let diagonals = if p.odd_column() {
                &HEX_ODD_COLUMN
            } else {
                &HEX_EVEN_COLUMN
            };
            push_offsets(p, bounds, diagonals, buf);
        }
    }

    /// Bind this tiling to a map extent.
    pub fn within(self, bounds: Range) -> Adjacent {
        Adjacent {
            tiling: self,
            bounds,
        }
    }
}

#[inline]
fn push_offsets(p: Point, bounds: Range, offsets: &[Point], buf: &mut Vec<Point>) {
    for &d in offsets {
        let n = p + d;
        if bounds.contains(n) {
            buf.push(n);
        }
    }
}

/// The in-bounds orthogonal neighbours of `p`: left, right, up, down.
pub fn grid_neighbors(p: Point, bounds: Range) -> Vec<Point> {
    let mut buf = Vec::with_capacity(4);
    Tiling::Grid.neighbors(p, bounds, &mut buf);
    buf
}

/// The in-bounds neighbours of `p` on an offset-column hex map: the four
/// orthogonal ones, then the two diagonals on the side the column leans to.
pub fn hex_neighbors(p: Point, bounds: Range) -> Vec<Point> {
    let mut buf = Vec::with_capacity(6);
    Tiling::Hex.neighbors(p, bounds, &mut buf);
    buf
}

/// A [`Tiling`] bound to the extent of one map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Adjacent {
    pub tiling: Tiling,
    pub bounds: Range,
}

impl Adjacency for Adjacent {
    #[inline]
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        self.tiling.neighbors(p, self.bounds, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> Range {
        Range::with_size(5, 5)
    }

    #[test]
    fn grid_interior_has_four() {
        let n = grid_neighbors(Point::new(2, 2), bounds());
        assert_eq!(
            n,
            vec![
                Point::new(1, 2),
                Point::new(3, 2),
                Point::new(2, 1),
                Point::new(2, 3),
            ]
        );
    }

    #[test]
    fn grid_corner_is_clipped() {
        let n = grid_neighbors(Point::new(0, 0), bounds());
        assert_eq!(n, vec![Point::new(1, 0), Point::new(0, 1)]);
        let n = grid_neighbors(Point::new(4, 4), bounds());
        assert_eq!(n, vec![Point::new(3, 4), Point::new(4, 3)]);
    }

    #[test]
    fn hex_even_column_takes_upper_diagonals() {
        let n = hex_neighbors(Point::new(2, 2), bounds());
        assert_eq!(n.len(), 6);
        assert_eq!(&n[4..], &[Point::new(1, 1), Point::new(3, 1)]);
        assert!(!n.contains(&Point::new(1, 3)));
        assert!(!n.contains(&Point::new(3, 3)));
    }

    #[test]
    fn hex_odd_column_takes_lower_diagonals() {
        let n = hex_neighbors(Point::new(1, 2), bounds());
        assert_eq!(n.len(), 6);
        assert_eq!(&n[4..], &[Point::new(2, 3), Point::new(0, 3)]);
        assert!(!n.contains(&Point::new(0, 1)));
        assert!(!n.contains(&Point::new(2, 1)));
    }

    #[test]
    fn hex_diagonals_differ_by_parity() {
        let even = hex_neighbors(Point::new(2, 2), bounds());
        let odd = hex_neighbors(Point::new(3, 2), bounds());
        // Same relative "right-hand diagonal" slot, opposite vertical side.
        assert_eq!(even[5] - Point::new(2, 2), Point::new(1, -1));
        assert_eq!(odd[4] - Point::new(3, 2), Point::new(1, 1));
    }

    #[test]
    fn hex_edges_are_clipped() {
        // Even column on the top row: both upper diagonals fall outside.
        let n = hex_neighbors(Point::new(0, 0), bounds());
        assert_eq!(n, vec![Point::new(1, 0), Point::new(0, 1)]);
        // Odd column on the bottom row: both lower diagonals fall outside.
        let n = hex_neighbors(Point::new(1, 4), bounds());
        assert_eq!(n, vec![Point::new(0, 4), Point::new(2, 4), Point::new(1, 3)]);
    }

    #[test]
    fn hex_adjacency_is_symmetric() {
        let b = bounds();
        for p in b {
            for n in hex_neighbors(p, b) {
                assert!(hex_neighbors(n, b).contains(&p), "{p} -> {n} not mutual");
            }
        }
    }

    #[test]
    fn adjacent_delegates_to_tiling() {
        let adj = Tiling::Hex.within(bounds());
        let mut buf = Vec::new();
        adj.neighbors(Point::new(3, 3), &mut buf);
        assert_eq!(buf, hex_neighbors(Point::new(3, 3), bounds()));
    }
}
