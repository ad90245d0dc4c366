//! Cheapest insertion of a new stop into an existing route.

use crate::atlas::Atlas;
use crate::drive_time::DriveTimeEstimator;
use crate::optimizer::path_seconds;
use crate::search::shortest_path;

/// Result of splicing a stop into a route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detour {
    /// The route with the stop's region included.
    pub route: Vec<String>,
    /// Added drive time versus the original route. Can be negative when a
    /// spliced path beats the direct edge it replaces in the time table.
    pub extra_secs: i64,
    /// Position of the stop's region in the returned route.
    pub index: usize,
}

/// Splice `poi`'s region into `route` wherever it costs the least.
///
/// A region already on the route needs no detour: the route comes back
/// unchanged with zero extra time. Otherwise every insertion point is
/// tried (before the first region, between each adjacent pair, and after
/// the last), skipping candidates whose connecting paths do not exist.
/// `None` when the POI is unknown or no insertion point is reachable.
pub fn cheapest_detour(
    atlas: &Atlas,
    times: &DriveTimeEstimator,
    route: &[String],
    poi: &str,
) -> Option<Detour> {
    let target = atlas.region_of(poi)?;

    if let Some(index) = route.iter().position(|region| region == target) {
        return Some(Detour {
            route: route.to_vec(),
            extra_secs: 0,
            index,
        });
    }
    if route.is_empty() {
        return None;
    }

    let original_secs = i64::from(path_seconds(atlas, times, route));
    let mut candidates: Vec<(Vec<String>, usize)> = Vec::new();

    // Before the first region.
    if let Some(head) = shortest_path(atlas, target, &route[0]) {
        let mut candidate = head;
        candidate.extend(route[1..].iter().cloned());
        candidates.push((candidate, 0));
    }

    // Between each adjacent pair: out to the target and back to the route.
    for i in 0..route.len() - 1 {
        let (Some(out), Some(back)) = (
            shortest_path(atlas, &route[i], target),
            shortest_path(atlas, target, &route[i + 1]),
        ) else {
            continue;
        };
        let index = i + out.len() - 1;
        let mut candidate: Vec<String> = route[..=i].to_vec();
        candidate.extend(out.into_iter().skip(1));
        candidate.extend(back.into_iter().skip(1));
        candidate.extend(route[i + 2..].iter().cloned());
        candidates.push((candidate, index));
    }

    // After the last region.
    if let Some(tail) = shortest_path(atlas, &route[route.len() - 1], target) {
        let mut candidate: Vec<String> = route[..route.len() - 1].to_vec();
        candidate.extend(tail);
        let index = candidate.len() - 1;
        candidates.push((candidate, index));
    }

    let mut best: Option<Detour> = None;
    for (candidate, index) in candidates {
        let extra_secs = i64::from(path_seconds(atlas, times, &candidate)) - original_secs;
        if best
            .as_ref()
            .is_none_or(|current| extra_secs < current.extra_secs)
        {
            best = Some(Detour {
                route: candidate,
                extra_secs,
                index,
            });
        }
    }
    best
}
