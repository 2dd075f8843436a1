use tilepath_core::Point;

use crate::config::Heuristic;
use crate::distance::manhattan;
use crate::error::PathError;

/// Smallest traversal cost a cell may carry. A cell costing 1.0 is normal
/// ground; anything higher is harder to cross.
pub const MIN_TRAVERSAL_COST: f64 = 1.0;

/// What a map cell is, as far as the search is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellKind {
    #[default]
    Empty,
    /// Never traversable.
    Barrier,
    Start,
    End,
    /// Marks a cell on a found route. Only set by callers after a search.
    Path,
}

/// Per-cell search state: classification, cost to enter, the running
/// `g`/`h`/`f` scores and the predecessor on the best known route.
///
/// `f == g + h` holds after every mutation; the scores and the parent only
/// change together through [`set_parent_and_score`](Self::set_parent_and_score).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellRecord {
    kind: CellKind,
    traversal_cost: f64,
    g: f64,
    h: f64,
    f: f64,
    parent: Option<Point>,
}

impl Default for CellRecord {
    fn default() -> Self {
        Self::empty()
    }
}

impl CellRecord {
    /// Create a record with zeroed scores and no parent.
    ///
    /// Fails with [`PathError::InvalidCost`] if `traversal_cost` is below
    /// [`MIN_TRAVERSAL_COST`] or is not a finite number.
    pub fn new(kind: CellKind, traversal_cost: f64) -> Result<Self, PathError> {
        if !traversal_cost.is_finite() || traversal_cost < MIN_TRAVERSAL_COST {
            return Err(PathError::InvalidCost(traversal_cost));
        }
        Ok(Self::unscored(kind, traversal_cost))
    }

    /// An ordinary empty cell with the unit cost.
    pub const fn empty() -> Self {
        Self::unscored(CellKind::Empty, MIN_TRAVERSAL_COST)
    }

    /// A barrier. Its cost is nominal; barriers are excluded before any cost
    /// is read.
    pub const fn barrier() -> Self {
        Self::unscored(CellKind::Barrier, MIN_TRAVERSAL_COST)
    }

    const fn unscored(kind: CellKind, traversal_cost: f64) -> Self {
        Self {
            kind,
            traversal_cost,
            g: 0.0,
            h: 0.0,
            f: 0.0,
            parent: None,
        }
    }

    /// Relax this cell through `parent`.
    ///
    /// Sets `g = parent_g + traversal_cost`, the Manhattan estimate `h`
    /// towards `goal` (measured from this cell or from `parent`, per
    /// `heuristic`) and `f = g + h`.
    pub fn set_parent_and_score(
        &mut self,
        at: Point,
        parent: Point,
        parent_g: f64,
        goal: Point,
        heuristic: Heuristic,
    ) {
        let from = match heuristic {
            Heuristic::Cell => at,
            Heuristic::Parent => parent,
        };
        self.parent = Some(parent);
        self.g = parent_g + self.traversal_cost;
        self.h = f64::from(manhattan(from, goal));
        self.f = self.g + self.h;
    }

    /// Forget the parent and zero all scores.
    pub fn reset_scores(&mut self) {
        self.parent = None;
        self.g = 0.0;
        self.h = 0.0;
        self.f = 0.0;
    }

    #[inline]
    pub fn kind(&self) -> CellKind {
        self.kind
    }

    /// Reclassify the cell. Scores are left untouched.
    #[inline]
    pub fn set_kind(&mut self, kind: CellKind) {
        self.kind = kind;
    }

    #[inline]
    pub fn traversal_cost(&self) -> f64 {
        self.traversal_cost
    }

    /// Best known cost from the start.
    #[inline]
    pub fn g(&self) -> f64 {
        self.g
    }

    /// Heuristic estimate of the remaining cost.
    #[inline]
    pub fn h(&self) -> f64 {
        self.h
    }

    /// `g + h`; the frontier orders on this.
    #[inline]
    pub fn f(&self) -> f64 {
        self.f
    }

    #[inline]
    pub fn parent(&self) -> Option<Point> {
        self.parent
    }

    #[inline]
    pub fn is_barrier(&self) -> bool {
        self.kind == CellKind::Barrier
    }

    #[inline]
    pub fn is_start(&self) -> bool {
        self.kind == CellKind::Start
    }

    #[inline]
    pub fn is_end(&self) -> bool {
        self.kind == CellKind::End
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_cost_below_unit() {
        assert_eq!(
            CellRecord::new(CellKind::Empty, 0.5),
            Err(PathError::InvalidCost(0.5))
        );
        assert!(CellRecord::new(CellKind::Empty, f64::NAN).is_err());
        assert!(CellRecord::new(CellKind::Empty, f64::INFINITY).is_err());
        assert!(CellRecord::new(CellKind::Empty, 1.0).is_ok());
        assert!(CellRecord::new(CellKind::Barrier, 3.5).is_ok());
    }

    #[test]
    fn fresh_record_is_unscored() {
        let r = CellRecord::new(CellKind::Start, 2.0).unwrap();
        assert_eq!(r.kind(), CellKind::Start);
        assert!(r.is_start());
        assert_eq!(r.traversal_cost(), 2.0);
        assert_eq!((r.g(), r.h(), r.f()), (0.0, 0.0, 0.0));
        assert_eq!(r.parent(), None);
        assert!(!r.is_end());
        assert!(!r.is_barrier());

        let end = CellRecord::new(CellKind::End, 1.0).unwrap();
        assert!(end.is_end());
        assert!(!end.is_start());
        assert!(CellRecord::barrier().is_barrier());
        assert!(!CellRecord::empty().is_start());
    }

    #[test]
    fn score_from_own_position() {
        let mut r = CellRecord::new(CellKind::Empty, 2.0).unwrap();
        let at = Point::new(1, 0);
        let parent = Point::new(0, 0);
        r.set_parent_and_score(at, parent, 3.0, Point::new(4, 4), Heuristic::Cell);
        assert_eq!(r.parent(), Some(parent));
        assert_eq!(r.g(), 5.0);
        assert_eq!(r.h(), 7.0);
        assert_eq!(r.f(), r.g() + r.h());
    }

    #[test]
    fn score_from_parent_position() {
        let mut r = CellRecord::empty();
        let at = Point::new(1, 0);
        let parent = Point::new(0, 0);
        r.set_parent_and_score(at, parent, 0.0, Point::new(4, 4), Heuristic::Parent);
        assert_eq!(r.g(), 1.0);
        assert_eq!(r.h(), 8.0);
        assert_eq!(r.f(), 9.0);
    }

    #[test]
    fn rescoring_replaces_previous_values() {
        let mut r = CellRecord::empty();
        let at = Point::new(2, 2);
        r.set_parent_and_score(at, Point::new(2, 1), 10.0, at, Heuristic::Cell);
        r.set_parent_and_score(at, Point::new(1, 2), 4.0, at, Heuristic::Cell);
        assert_eq!(r.parent(), Some(Point::new(1, 2)));
        assert_eq!(r.g(), 5.0);
        assert_eq!(r.h(), 0.0);
        assert_eq!(r.f(), 5.0);

        r.reset_scores();
        assert_eq!(r.parent(), None);
        assert_eq!(r.f(), 0.0);
    }
}
