//! The planning-request surface the presentation layer calls.
//!
//! Takes a start, an end, and mandatory stops (each either a region or a
//! specific POI), finds the route, resolves a through-POI per region, and
//! prices every segment. Types at this boundary serialize, so a frontend
//! can ship them straight to its display layer.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::atlas::Atlas;
use crate::drive_time::DriveTimeEstimator;
use crate::optimizer::{plan, plan_ordered};
use crate::refine::refine_route_pois;

/// A place the trip must touch: a whole region, or one specific POI
/// (which pins that POI as the region's through-point).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Waypoint {
    Region(String),
    Poi(String),
}

impl Waypoint {
    /// The region this waypoint lives in, if the name is known to the atlas.
    fn resolve<'a>(&'a self, atlas: &'a Atlas) -> Option<&'a str> {
        match self {
            Self::Region(name) => atlas.contains_region(name).then_some(name.as_str()),
            Self::Poi(name) => atlas.region_of(name),
        }
    }

    fn poi_name(&self) -> Option<&str> {
        match self {
            Self::Region(_) => None,
            Self::Poi(name) => Some(name),
        }
    }
}

/// One planning request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripRequest {
    pub start: Waypoint,
    pub end: Waypoint,
    /// Mandatory stops. Visited in the given order unless `optimize` is set.
    pub stops: Vec<Waypoint>,
    /// Reorder the stops to minimize total estimated drive time.
    pub optimize: bool,
}

/// One leg of the itinerary with its estimated duration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub from_region: String,
    pub to_region: String,
    pub from_poi: Option<String>,
    pub to_poi: Option<String>,
    pub secs: u32,
}

/// A priced route: the region sequence, the through-POI per region, and
/// the per-leg breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Itinerary {
    pub route: Vec<String>,
    pub pois: HashMap<String, String>,
    pub segments: Vec<Segment>,
    pub total_secs: u32,
}

impl Itinerary {
    /// Total duration as (hours, minutes, seconds) for display.
    pub fn total_hms(&self) -> (u32, u32, u32) {
        hms(self.total_secs)
    }
}

/// Split seconds into (hours, minutes, seconds).
pub fn hms(secs: u32) -> (u32, u32, u32) {
    (secs / 3600, (secs % 3600) / 60, secs % 60)
}

/// Plan a full trip: route, through-POIs, and per-segment timings.
///
/// `None` when any waypoint name is unknown or no route exists. A request
/// that cannot be satisfied never panics, it declines.
pub fn plan_trip(
    atlas: &Atlas,
    times: &DriveTimeEstimator,
    request: &TripRequest,
) -> Option<Itinerary> {
    let start = request.start.resolve(atlas)?;
    let end = request.end.resolve(atlas)?;

    let mut pinned: HashMap<String, String> = HashMap::new();
    if let Some(poi) = request.start.poi_name() {
        pinned.insert(start.to_string(), poi.to_string());
    }
    if let Some(poi) = request.end.poi_name() {
        pinned.insert(end.to_string(), poi.to_string());
    }

    let mut stop_regions: Vec<String> = Vec::with_capacity(request.stops.len());
    for stop in &request.stops {
        let region = stop.resolve(atlas)?;
        stop_regions.push(region.to_string());
        if let Some(poi) = stop.poi_name() {
            pinned.insert(region.to_string(), poi.to_string());
        }
    }

    let route = if request.optimize {
        plan(atlas, times, start, end, &stop_regions)
    } else {
        plan_ordered(atlas, start, end, &stop_regions)
    }?;

    let pois = refine_route_pois(atlas, &route, &pinned);
    Some(build_itinerary(atlas, times, route, pois))
}

/// Price each leg of a route.
///
/// A leg whose endpoints both resolved a POI is timed POI-to-POI when an
/// estimate exists; otherwise the region-to-region estimate applies.
pub fn build_itinerary(
    atlas: &Atlas,
    times: &DriveTimeEstimator,
    route: Vec<String>,
    pois: HashMap<String, String>,
) -> Itinerary {
    let mut segments = Vec::with_capacity(route.len().saturating_sub(1));
    let mut total_secs: u32 = 0;

    for pair in route.windows(2) {
        let from_poi = pois.get(&pair[0]).cloned();
        let to_poi = pois.get(&pair[1]).cloned();
        let region_secs = times.between_regions(atlas, &pair[0], &pair[1]);
        let secs = match (&from_poi, &to_poi) {
            (Some(from), Some(to)) => times
                .between_pois(atlas, from, to)
                .unwrap_or(region_secs),
            _ => region_secs,
        };
        total_secs += secs;
        segments.push(Segment {
            from_region: pair[0].clone(),
            to_region: pair[1].clone(),
            from_poi,
            to_poi,
            secs,
        });
    }

    Itinerary {
        route,
        pois,
        segments,
        total_secs,
    }
}
