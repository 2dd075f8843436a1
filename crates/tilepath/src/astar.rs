use std::collections::HashMap;

use log::{debug, trace};
use tilepath_core::Point;

use crate::cell::CellRecord;
use crate::config::{PathTrim, SearchConfig};
use crate::error::PathError;
use crate::frontier::Frontier;
use crate::traits::{Adjacency, CellMap};

/// Compute a shortest path from `start` to `goal` with the default
/// [`SearchConfig`].
///
/// See [`find_path_with`].
pub fn find_path<M, A>(
    map: &M,
    start: Point,
    goal: Point,
    adjacency: &A,
) -> Result<Vec<Point>, PathError>
where
    M: CellMap + ?Sized,
    A: Adjacency + ?Sized,
{
    find_path_with(map, start, goal, adjacency, &SearchConfig::default())
}

/// Compute a shortest path from `start` to `goal` using A*.
///
/// Returns the path including both endpoints (or without `start`, per
/// [`SearchConfig::trim`]). When the goal cannot be reached, or the
/// expansion cap is hit, the path is empty. When `start == goal` the path is
/// the single cell `[start]`.
///
/// Fails before searching if either endpoint is outside the map or is a
/// barrier.
///
/// The map is only read: per-cell scores live in a working copy owned by
/// this call, so one map can back any number of searches.
pub fn find_path_with<M, A>(
    map: &M,
    start: Point,
    goal: Point,
    adjacency: &A,
    config: &SearchConfig,
) -> Result<Vec<Point>, PathError>
where
    M: CellMap + ?Sized,
    A: Adjacency + ?Sized,
{
    let mut origin = endpoint(map, start)?.clone();
    endpoint(map, goal)?;
    origin.reset_scores();

    debug!("searching path {start} -> {goal}");

    let mut open = Frontier::new();
    // Finalized cells. The records are kept for the backtrace.
    let mut closed: HashMap<Point, CellRecord> = HashMap::new();
    let mut nbuf: Vec<Point> = Vec::with_capacity(6);
    let mut expansions = 0usize;

    open.insert_or_update(start, origin);

    let found = loop {
        let Some((current, record)) = open.pop_min() else {
            break false;
        };
        if current == goal {
            closed.insert(current, record);
            break true;
        }
        if config.max_expansions.is_some_and(|max| expansions >= max) {
            debug!("giving up on {start} -> {goal} after {expansions} expansions");
            return Ok(Vec::new());
        }
        expansions += 1;

        let current_g = record.g();
        closed.insert(current, record);

        nbuf.clear();
        adjacency.neighbors(current, &mut nbuf);

        for &np in nbuf.iter() {
            if closed.contains_key(&np) {
                continue;
            }
            let Some(cell) = map.record(np) else {
                continue;
            };
            if cell.is_barrier() {
                continue;
            }
            let tentative_g = current_g + cell.traversal_cost();
            let mut next = match open.get(np) {
                Some(known) if tentative_g >= known.g() => continue,
                Some(known) => known.clone(),
                None => cell.clone(),
            };
            next.set_parent_and_score(np, current, current_g, goal, config.heuristic);
            trace!("relax {np} via {current}: g={} f={}", next.g(), next.f());
            open.insert_or_update(np, next);
        }
    };

    if !found {
        debug!("no path {start} -> {goal} after {expansions} expansions");
        return Ok(Vec::new());
    }

    let mut path = vec![goal];
    let mut cur = goal;
    while let Some(parent) = closed.get(&cur).and_then(CellRecord::parent) {
        path.push(parent);
        cur = parent;
    }
    path.reverse();

    if config.trim == PathTrim::ExcludeStart && path.len() > 1 {
        path.remove(0);
    }

    debug!(
        "found path {start} -> {goal}: {} cells after {expansions} expansions",
        path.len()
    );
    Ok(path)
}

fn endpoint<M: CellMap + ?Sized>(map: &M, p: Point) -> Result<&CellRecord, PathError> {
    if !map.bounds().contains(p) {
        return Err(PathError::OutOfBounds(p));
    }
    let record = map.record(p).ok_or(PathError::OutOfBounds(p))?;
    if record.is_barrier() {
        return Err(PathError::Barrier(p));
    }
    Ok(record)
}
