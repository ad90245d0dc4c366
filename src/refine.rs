//! Through-point selection for a finalized route.
//!
//! Picks one POI per region to pass through: user-pinned choices win, a
//! region's only POI wins, and otherwise the POI closest (summed flat
//! lat/lng distance) to the neighboring legs' already-resolved points. This
//! is a one-step local smoothing pass, not a global optimization.

use std::collections::HashMap;

use crate::atlas::Atlas;

/// Resolve a through-POI for each region of `route`.
///
/// `pinned` holds the user's explicit region → POI choices and is always
/// honored. Regions without any POI get no entry. When a region repeats in
/// the route its choice is recomputed at each occurrence; the last wins.
pub fn refine_route_pois(
    atlas: &Atlas,
    route: &[String],
    pinned: &HashMap<String, String>,
) -> HashMap<String, String> {
    let mut chosen: HashMap<String, String> = HashMap::new();

    for (i, region) in route.iter().enumerate() {
        if let Some(poi) = pinned.get(region) {
            chosen.insert(region.clone(), poi.clone());
            continue;
        }

        let candidates = atlas.pois_in(region);
        if candidates.is_empty() {
            continue;
        }
        if candidates.len() == 1 {
            chosen.insert(region.clone(), candidates[0].clone());
            continue;
        }

        let prev_anchor = if i > 0 {
            anchor_point(atlas, &route[i - 1], &chosen, pinned)
        } else {
            None
        };
        let next_anchor = if i + 1 < route.len() {
            anchor_point(atlas, &route[i + 1], &chosen, pinned)
        } else {
            None
        };

        if let Some(poi) = closest_poi(atlas, candidates, prev_anchor, next_anchor) {
            chosen.insert(region.clone(), poi);
        }
    }

    chosen
}

/// The point a neighboring region contributes to the distance sum: its
/// resolved POI's coordinate when one exists, else the region centroid.
fn anchor_point(
    atlas: &Atlas,
    region: &str,
    chosen: &HashMap<String, String>,
    pinned: &HashMap<String, String>,
) -> Option<(f64, f64)> {
    if let Some(poi) = chosen.get(region).or_else(|| pinned.get(region)) {
        if let Some(coord) = atlas.poi_coord(poi) {
            return Some(coord);
        }
    }
    atlas.region_coord(region)
}

/// The candidate minimizing summed distance to the available anchors.
///
/// Candidates come in sorted so a strict comparison keeps the first of any
/// tied pair. Candidates without coordinates are skipped; if none has any,
/// the first listed is still chosen.
fn closest_poi(
    atlas: &Atlas,
    candidates: &[String],
    prev: Option<(f64, f64)>,
    next: Option<(f64, f64)>,
) -> Option<String> {
    let mut best: Option<(&str, f64)> = None;
    for poi in candidates {
        let Some(coord) = atlas.poi_coord(poi) else {
            continue;
        };
        let mut total = 0.0;
        if let Some(prev) = prev {
            total += flat_distance(coord, prev);
        }
        if let Some(next) = next {
            total += flat_distance(coord, next);
        }
        if best.is_none_or(|(_, best_total)| total < best_total) {
            best = Some((poi, total));
        }
    }
    best.map(|(poi, _)| poi.to_string())
        .or_else(|| candidates.first().cloned())
}

/// Plain Euclidean distance in raw degrees. Deliberately uncorrected: only
/// ever compared against other distances in the same neighborhood.
fn flat_distance(a: (f64, f64), b: (f64, f64)) -> f64 {
    ((a.0 - b.0).powi(2) + (a.1 - b.1).powi(2)).sqrt()
}
