use std::cmp::Ordering;
use std::collections::HashMap;

use tilepath_core::Point;

use crate::cell::CellRecord;

struct Entry {
    pos: Point,
    record: CellRecord,
    /// Order of first insertion; breaks ties between equal `f` scores.
    seq: u64,
}

impl Entry {
    #[inline]
    fn cmp_priority(&self, other: &Self) -> Ordering {
        self.record
            .f()
            .total_cmp(&other.record.f())
            .then(self.seq.cmp(&other.seq))
    }
}

/// The open set of a search: an indexed binary min-heap keyed by cell.
///
/// Each cell appears at most once. Re-inserting a cell replaces its record
/// and restores heap order, so updates never leave stale duplicates behind.
/// Entries with equal `f` pop in the order they were first inserted.
#[derive(Default)]
pub struct Frontier {
    heap: Vec<Entry>,
    index: HashMap<Point, usize>,
    next_seq: u64,
}

impl Frontier {
    /// An empty frontier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `pos`, or replace its record if it is already present.
    pub fn insert_or_update(&mut self, pos: Point, record: CellRecord) {
        if let Some(&i) = self.index.get(&pos) {
            self.heap[i].record = record;
            let i = self.sift_up(i);
            self.sift_down(i);
            return;
        }
        let i = self.heap.len();
        self.heap.push(Entry {
            pos,
            record,
            seq: self.next_seq,
        });
        self.next_seq += 1;
        self.index.insert(pos, i);
        self.sift_up(i);
    }

    /// Whether `pos` is currently open.
    #[inline]
    pub fn contains(&self, pos: Point) -> bool {
        self.index.contains_key(&pos)
    }

    /// The record of an open cell.
    pub fn get(&self, pos: Point) -> Option<&CellRecord> {
        self.index.get(&pos).map(|&i| &self.heap[i].record)
    }

    /// Remove and return the entry with the smallest `f`.
    pub fn pop_min(&mut self) -> Option<(Point, CellRecord)> {
        if self.heap.is_empty() {
            return None;
        }
        let last = self.heap.len() - 1;
        self.swap(0, last);
        let entry = self.heap.pop()?;
        self.index.remove(&entry.pos);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some((entry.pos, entry.record))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn clear(&mut self) {
        self.heap.clear();
        self.index.clear();
        self.next_seq = 0;
    }

    // -----------------------------------------------------------------------
    // Heap maintenance
    // -----------------------------------------------------------------------

    #[inline]
    fn less(&self, a: usize, b: usize) -> bool {
        self.heap[a].cmp_priority(&self.heap[b]) == Ordering::Less
    }

    fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.heap.swap(a, b);
        self.index.insert(self.heap[a].pos, a);
        self.index.insert(self.heap[b].pos, b);
    }

    /// Returns the entry's final position.
    fn sift_up(&mut self, mut i: usize) -> usize {
        while i > 0 {
            let parent = (i - 1) / 2;
            if !self.less(i, parent) {
                break;
            }
            self.swap(i, parent);
            i = parent;
        }
        i
    }

    fn sift_down(&mut self, mut i: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * i + 1;
            let right = left + 1;
            let mut smallest = i;
            if left < len && self.less(left, smallest) {
                smallest = left;
            }
            if right < len && self.less(right, smallest) {
                smallest = right;
            }
            if smallest == i {
                break;
            }
            self.swap(i, smallest);
            i = smallest;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Heuristic;

    /// A record whose `f` equals `g` (goal placed on the cell itself).
    fn scored(g: f64) -> CellRecord {
        let at = Point::new(0, 0);
        let mut r = CellRecord::empty();
        r.set_parent_and_score(at, at, g - 1.0, at, Heuristic::Cell);
        r
    }

    fn drain(fr: &mut Frontier) -> Vec<(Point, f64)> {
        let mut out = Vec::new();
        while let Some((p, r)) = fr.pop_min() {
            out.push((p, r.f()));
        }
        out
    }

    #[test]
    fn pops_in_f_order() {
        let mut fr = Frontier::new();
        for (i, g) in [5.0, 1.0, 4.0, 2.0, 3.0, 9.0, 7.0].into_iter().enumerate() {
            fr.insert_or_update(Point::new(i as i32, 0), scored(g));
        }
        assert_eq!(fr.len(), 7);
        let fs: Vec<f64> = drain(&mut fr).into_iter().map(|(_, f)| f).collect();
        assert_eq!(fs, vec![1.0, 2.0, 3.0, 4.0, 5.0, 7.0, 9.0]);
        assert!(fr.is_empty());
    }

    #[test]
    fn empty_pop_is_none() {
        let mut fr = Frontier::new();
        assert!(fr.pop_min().is_none());
    }

    #[test]
    fn ties_pop_in_insertion_order() {
        let mut fr = Frontier::new();
        let pts = [Point::new(3, 3), Point::new(0, 0), Point::new(2, 1), Point::new(1, 2)];
        for p in pts {
            fr.insert_or_update(p, scored(4.0));
        }
        let popped: Vec<Point> = drain(&mut fr).into_iter().map(|(p, _)| p).collect();
        assert_eq!(popped, pts.to_vec());
    }

    #[test]
    fn update_replaces_without_duplicating() {
        let mut fr = Frontier::new();
        let a = Point::new(0, 0);
        let b = Point::new(1, 0);
        let c = Point::new(2, 0);
        fr.insert_or_update(a, scored(3.0));
        fr.insert_or_update(b, scored(5.0));
        fr.insert_or_update(c, scored(4.0));

        // Decrease b below everything else.
        fr.insert_or_update(b, scored(1.0));
        assert_eq!(fr.len(), 3);
        assert!(fr.contains(b));
        assert_eq!(fr.get(b).map(CellRecord::f), Some(1.0));

        // Increase a above everything else.
        fr.insert_or_update(a, scored(8.0));

        let order: Vec<Point> = drain(&mut fr).into_iter().map(|(p, _)| p).collect();
        assert_eq!(order, vec![b, c, a]);
    }

    #[test]
    fn membership_tracks_pops() {
        let mut fr = Frontier::new();
        let p = Point::new(4, 2);
        assert!(!fr.contains(p));
        fr.insert_or_update(p, scored(2.0));
        assert!(fr.contains(p));
        let (popped, _) = fr.pop_min().unwrap();
        assert_eq!(popped, p);
        assert!(!fr.contains(p));
        assert!(fr.get(p).is_none());
    }

    #[test]
    fn index_stays_consistent_under_churn() {
        let mut fr = Frontier::new();
        // Deterministic pseudo-random f values.
        let mut v: u32 = 7;
        for i in 0..64 {
            v = v.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            fr.insert_or_update(Point::new(i % 8, i / 8), scored(1.0 + f64::from(v % 50)));
        }
        for i in (0..64).step_by(3) {
            fr.insert_or_update(Point::new(i % 8, i / 8), scored(1.0 + f64::from(i as u32 % 5)));
        }
        assert_eq!(fr.len(), 64);
        let fs: Vec<f64> = drain(&mut fr).into_iter().map(|(_, f)| f).collect();
        assert_eq!(fs.len(), 64);
        assert!(fs.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn clear_empties() {
        let mut fr = Frontier::new();
        fr.insert_or_update(Point::new(1, 1), scored(2.0));
        fr.clear();
        assert!(fr.is_empty());
        assert!(!fr.contains(Point::new(1, 1)));
    }
}
