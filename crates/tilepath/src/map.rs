//! An owned tile map implementing [`CellMap`].
//!
//! [`TileMap`] stores one [`CellRecord`] per cell in row-major order along
//! with the map's [`Tiling`] and its start and end cells. It can be built
//! programmatically or parsed from ASCII art:
//!
//! | char | cell |
//! |---|---|
//! | `.` | empty, cost 1 |
//! | `1`–`9` | empty, that traversal cost |
//! | `#` | barrier |
//! | `S` | start |
//! | `E` | end |
//! | `*` | path mark |
//!
//! Only whole-number costs from 1 to 9 have a character of their own; other
//! costs print as `.`, so they read back as cost 1.

use std::fmt;
use std::str::FromStr;

use tilepath_core::{Point, Range};

use crate::astar::find_path_with;
use crate::cell::{CellKind, CellRecord, MIN_TRAVERSAL_COST};
use crate::config::SearchConfig;
use crate::error::PathError;
use crate::neighbors::{Adjacent, Tiling};
use crate::traits::CellMap;

/// A one-cell step on a square grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// The offset of one step in this direction (Y grows down).
    pub const fn delta(self) -> Point {
        match self {
            Self::Up => Point::new(0, -1),
            Self::Down => Point::new(0, 1),
            Self::Left => Point::new(-1, 0),
            Self::Right => Point::new(1, 0),
        }
    }
}

/// A rectangular map of cell records.
#[derive(Debug, Clone, PartialEq)]
pub struct TileMap {
    bounds: Range,
    tiling: Tiling,
    cells: Vec<CellRecord>,
    start: Option<Point>,
    end: Option<Point>,
}

impl TileMap {
    /// Create a `width × height` map of empty unit-cost cells with no start
    /// or end.
    pub fn new(width: i32, height: i32, tiling: Tiling) -> Self {
        let bounds = Range::with_size(width.max(0), height.max(0));
        Self {
            bounds,
            tiling,
            cells: vec![CellRecord::empty(); bounds.len()],
            start: None,
            end: None,
        }
    }

    /// Parse an ASCII map (see the module docs) with the given tiling.
    pub fn parse(s: &str, tiling: Tiling) -> Result<Self, PathError> {
        let s = s.trim();
        let mut width: Option<usize> = None;
        let mut height = 0;
        for (y, line) in s.lines().enumerate() {
            let n = line.chars().count();
            match width {
                None => width = Some(n),
                Some(w) if w != n => return Err(PathError::InconsistentWidth { line: y }),
                Some(_) => {}
            }
            height = y + 1;
        }
        let width = width.unwrap_or(0);

        let mut map = Self::new(width as i32, height as i32, tiling);
        for (y, line) in s.lines().enumerate() {
            for (x, ch) in line.chars().enumerate() {
                let p = Point::new(x as i32, y as i32);
                match ch {
                    '.' => {}
                    '#' => map.set_barrier(p)?,
                    'S' => map.set_start(p)?,
                    'E' => map.set_end(p)?,
                    '*' => map.set_kind(p, CellKind::Path)?,
                    '1'..='9' => {
                        let cost = f64::from(ch as u8 - b'0');
                        map.set_cost(p, cost)?;
                    }
                    _ => return Err(PathError::InvalidChar { ch, pos: p }),
                }
            }
        }
        Ok(map)
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    #[inline]
    pub fn tiling(&self) -> Tiling {
        self.tiling
    }

    #[inline]
    pub fn start(&self) -> Option<Point> {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Option<Point> {
        self.end
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// The record at `p`, or `None` if out of bounds.
    pub fn at(&self, p: Point) -> Option<&CellRecord> {
        self.bounds.index_of(p).map(|i| &self.cells[i])
    }

    /// The classification at `p`, or `None` if out of bounds.
    pub fn kind_at(&self, p: Point) -> Option<CellKind> {
        self.at(p).map(CellRecord::kind)
    }

    /// The neighbour provider for this map's tiling and extent.
    pub fn adjacency(&self) -> Adjacent {
        self.tiling.within(self.bounds)
    }

    // -----------------------------------------------------------------------
    // Editing
    // -----------------------------------------------------------------------

    fn index(&self, p: Point) -> Result<usize, PathError> {
        self.bounds.index_of(p).ok_or(PathError::OutOfBounds(p))
    }

    /// Reclassify the cell at `p`, keeping its traversal cost.
    ///
    /// `Start` and `End` go through [`set_start`](Self::set_start) and
    /// [`set_end`](Self::set_end). Overwriting the current start or end
    /// cell with another kind leaves the map without one.
    pub fn set_kind(&mut self, p: Point, kind: CellKind) -> Result<(), PathError> {
        match kind {
            CellKind::Start => self.set_start(p),
            CellKind::End => self.set_end(p),
            _ => {
                let i = self.index(p)?;
                self.forget_endpoint(p);
                self.cells[i].set_kind(kind);
                Ok(())
            }
        }
    }

    pub fn set_barrier(&mut self, p: Point) -> Result<(), PathError> {
        self.set_kind(p, CellKind::Barrier)
    }

    /// Change how expensive the cell at `p` is to enter.
    pub fn set_cost(&mut self, p: Point, cost: f64) -> Result<(), PathError> {
        let i = self.index(p)?;
        self.cells[i] = CellRecord::new(self.cells[i].kind(), cost)?;
        Ok(())
    }

    /// Move the start to `p`. The previous start cell becomes empty.
    pub fn set_start(&mut self, p: Point) -> Result<(), PathError> {
        let i = self.endpoint_index(p)?;
        if let Some(old) = self.start.take() {
            self.clear_kind(old, CellKind::Start);
        }
        if self.end == Some(p) {
            self.end = None;
        }
        self.cells[i].set_kind(CellKind::Start);
        self.start = Some(p);
        Ok(())
    }

    /// Move the end to `p`. The previous end cell becomes empty.
    pub fn set_end(&mut self, p: Point) -> Result<(), PathError> {
        let i = self.endpoint_index(p)?;
        if let Some(old) = self.end.take() {
            self.clear_kind(old, CellKind::End);
        }
        if self.start == Some(p) {
            self.start = None;
        }
        self.cells[i].set_kind(CellKind::End);
        self.end = Some(p);
        Ok(())
    }

    fn endpoint_index(&self, p: Point) -> Result<usize, PathError> {
        let i = self.index(p)?;
        if self.cells[i].is_barrier() {
            return Err(PathError::Barrier(p));
        }
        Ok(i)
    }

    fn forget_endpoint(&mut self, p: Point) {
        if self.start == Some(p) {
            self.start = None;
        }
        if self.end == Some(p) {
            self.end = None;
        }
    }

    fn clear_kind(&mut self, p: Point, kind: CellKind) {
        if let Some(i) = self.bounds.index_of(p) {
            if self.cells[i].kind() == kind {
                self.cells[i].set_kind(CellKind::Empty);
            }
        }
    }

    /// Whether the start may step onto `p`: inside the map and neither a
    /// barrier nor the end.
    pub fn is_valid_move(&self, p: Point) -> bool {
        matches!(
            self.kind_at(p),
            Some(CellKind::Empty | CellKind::Path | CellKind::Start)
        )
    }

    /// Step the start one cell in `dir`. Returns whether it moved.
    pub fn move_start(&mut self, dir: Direction) -> bool {
        let Some(start) = self.start else {
            return false;
        };
        let next = start + dir.delta();
        if !self.is_valid_move(next) {
            return false;
        }
        self.set_start(next).is_ok()
    }

    /// Mark the empty cells of `path` as [`CellKind::Path`]. Start, end and
    /// barrier cells keep their kind.
    pub fn mark_path(&mut self, path: &[Point]) {
        for &p in path {
            if let Some(i) = self.bounds.index_of(p) {
                if self.cells[i].kind() == CellKind::Empty {
                    self.cells[i].set_kind(CellKind::Path);
                }
            }
        }
    }

    /// Clear path marks and any search scores left on the cells.
    pub fn reset(&mut self) {
        for cell in &mut self.cells {
            cell.reset_scores();
            if cell.kind() == CellKind::Path {
                cell.set_kind(CellKind::Empty);
            }
        }
    }

    // -----------------------------------------------------------------------
    // Search
    // -----------------------------------------------------------------------

    /// Search from this map's start to its end under its own tiling.
    pub fn find_path(&self, config: &SearchConfig) -> Result<Vec<Point>, PathError> {
        let start = self.start.ok_or(PathError::MissingEndpoint("start"))?;
        let end = self.end.ok_or(PathError::MissingEndpoint("end"))?;
        find_path_with(self, start, end, &self.adjacency(), config)
    }
}

impl CellMap for TileMap {
    #[inline]
    fn bounds(&self) -> Range {
        self.bounds
    }

    #[inline]
    fn record(&self, p: Point) -> Option<&CellRecord> {
        self.at(p)
    }
}

impl FromStr for TileMap {
    type Err = PathError;

    /// Parse a square-grid map. Use [`TileMap::parse`] for hex maps.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, Tiling::Grid)
    }
}

fn glyph(cell: &CellRecord) -> char {
    match cell.kind() {
        CellKind::Barrier => '#',
        CellKind::Start => 'S',
        CellKind::End => 'E',
        CellKind::Path => '*',
        CellKind::Empty => {
            let cost = cell.traversal_cost();
            if cost > MIN_TRAVERSAL_COST && cost <= 9.0 && cost.fract() == 0.0 {
                char::from(b'0' + cost as u8)
            } else {
                '.'
            }
        }
    }
}

impl fmt::Display for TileMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let w = self.width().max(1) as usize;
        for (i, row) in self.cells.chunks(w).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", glyph(cell))?;
            }
        }
        Ok(())
    }
}
