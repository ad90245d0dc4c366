//! Multi-stop route planning over the region graph.
//!
//! `plan` picks its strategy up front from the number of mandatory stops:
//! with none it is a plain shortest path, a handful gets every ordering
//! scored, and beyond that a greedy nearest-neighbor pass trades
//! optimality for tractability. `plan_ordered` visits the stops exactly
//! as given.

use rayon::prelude::*;
use tracing::debug;

use crate::atlas::Atlas;
use crate::drive_time::DriveTimeEstimator;
use crate::search::shortest_path;

/// Largest stop count planned by exhaustive permutation search.
///
/// 7! = 5040 orderings is the most we score before switching to the
/// nearest-neighbor heuristic.
pub const EXACT_SEARCH_LIMIT: usize = 7;

/// Total estimated seconds along an adjacency-respecting path.
pub fn path_seconds(atlas: &Atlas, times: &DriveTimeEstimator, path: &[String]) -> u32 {
    path.windows(2)
        .map(|pair| times.between_regions(atlas, &pair[0], &pair[1]))
        .sum()
}

/// Route from `start` to `end` through every region in `must_visit`,
/// reordering the stops to minimize total estimated drive time.
///
/// Above [`EXACT_SEARCH_LIMIT`] stops the result visits every stop but is
/// not guaranteed minimal. `None` when any required leg is unreachable.
pub fn plan(
    atlas: &Atlas,
    times: &DriveTimeEstimator,
    start: &str,
    end: &str,
    must_visit: &[String],
) -> Option<Vec<String>> {
    if must_visit.is_empty() {
        return shortest_path(atlas, start, end);
    }
    if must_visit.len() <= EXACT_SEARCH_LIMIT {
        plan_exhaustive(atlas, times, start, end, must_visit)
    } else {
        plan_greedy(atlas, times, start, end, must_visit)
    }
}

/// Route visiting the stops in exactly the order given.
pub fn plan_ordered(
    atlas: &Atlas,
    start: &str,
    end: &str,
    stops: &[String],
) -> Option<Vec<String>> {
    let mut full: Vec<String> = Vec::new();
    let mut prev = start;
    for target in stops.iter().map(String::as_str).chain(std::iter::once(end)) {
        let sub = shortest_path(atlas, prev, target)?;
        if full.is_empty() {
            full.extend(sub);
        } else {
            full.extend(sub.into_iter().skip(1));
        }
        prev = target;
    }
    Some(full)
}

/// Score every ordering of the stops and keep the cheapest full path.
fn plan_exhaustive(
    atlas: &Atlas,
    times: &DriveTimeEstimator,
    start: &str,
    end: &str,
    must_visit: &[String],
) -> Option<Vec<String>> {
    let stops: Vec<&str> = must_visit.iter().map(String::as_str).collect();
    let orderings = permutations(&stops);
    debug!(stops = stops.len(), orderings = orderings.len(), "exhaustive stop ordering");

    orderings
        .into_par_iter()
        .filter_map(|ordering| score_ordering(atlas, times, start, end, &ordering))
        .min_by_key(|(total, _)| *total)
        .map(|(_, path)| path)
}

/// Build and price the full path for one stop ordering.
///
/// `None` discards the ordering when any leg is unreachable.
fn score_ordering(
    atlas: &Atlas,
    times: &DriveTimeEstimator,
    start: &str,
    end: &str,
    ordering: &[&str],
) -> Option<(u32, Vec<String>)> {
    let mut full: Vec<String> = Vec::new();
    let mut total: u32 = 0;
    let mut prev = start;
    for &target in ordering.iter().chain(std::iter::once(&end)) {
        let sub = shortest_path(atlas, prev, target)?;
        total += path_seconds(atlas, times, &sub);
        if full.is_empty() {
            full.extend(sub);
        } else {
            full.extend(sub.into_iter().skip(1));
        }
        prev = target;
    }
    Some((total, full))
}

/// Greedy nearest-neighbor ordering: repeatedly commit to whichever
/// remaining stop is cheapest to reach from the current position.
fn plan_greedy(
    atlas: &Atlas,
    times: &DriveTimeEstimator,
    start: &str,
    end: &str,
    must_visit: &[String],
) -> Option<Vec<String>> {
    let mut remaining: Vec<&str> = must_visit.iter().map(String::as_str).collect();
    let mut current = start;
    let mut full = vec![start.to_string()];

    while !remaining.is_empty() {
        let mut best: Option<(usize, u32, Vec<String>)> = None;
        for (idx, &stop) in remaining.iter().enumerate() {
            if let Some(sub) = shortest_path(atlas, current, stop) {
                let secs = path_seconds(atlas, times, &sub);
                if best.as_ref().is_none_or(|(_, best_secs, _)| secs < *best_secs) {
                    best = Some((idx, secs, sub));
                }
            }
        }
        let (idx, secs, sub) = best?;
        debug!(stop = remaining[idx], secs, "greedy commit");
        full.extend(sub.into_iter().skip(1));
        current = remaining.remove(idx);
    }

    let tail = shortest_path(atlas, current, end)?;
    full.extend(tail.into_iter().skip(1));
    Some(full)
}

/// All orderings of `items`, in lexicographic position order.
fn permutations<'a>(items: &[&'a str]) -> Vec<Vec<&'a str>> {
    if items.is_empty() {
        return vec![Vec::new()];
    }
    let mut out = Vec::new();
    for (i, &item) in items.iter().enumerate() {
        let mut rest = items.to_vec();
        rest.remove(i);
        for mut tail in permutations(&rest) {
            tail.insert(0, item);
            out.push(tail);
        }
    }
    out
}
