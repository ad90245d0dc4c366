//! Layered drive-time estimation.
//!
//! Resolution order for any pair: the atlas's explicit minute tables, then
//! each configured routing service (memoized per coordinate pair), then a
//! great-circle estimate, then, for region pairs lacking a centroid, a
//! fixed conservative default. Identical endpoints are always zero. Every
//! region-to-region query resolves to *some* duration; a POI pair without
//! coordinates and without an explicit entry is the only unresolvable case.

use std::collections::HashMap;
use std::sync::Mutex;

use tracing::debug;

use crate::atlas::Atlas;
use crate::external::{GoogleMatrixClient, OrsMatrixClient};
use crate::haversine::{haversine_km, road_seconds};
use crate::traits::DurationProvider;

/// Road-network inflation applied to straight-line distance between regions.
const CROSS_REGION_ROAD_FACTOR: f64 = 1.35;
/// Assumed highway speed for cross-region travel.
const CROSS_REGION_SPEED_KMH: f64 = 80.0;
const CROSS_REGION_FLOOR_SECS: u32 = 60;

/// Inflation and speed for POI pairs within a single region.
const LOCAL_ROAD_FACTOR: f64 = 1.25;
const LOCAL_SPEED_KMH: f64 = 50.0;
const LOCAL_FLOOR_SECS: u32 = 30;

/// Conservative default when a region pair has no usable coordinates.
const MISSING_COORD_DEFAULT_SECS: u32 = 90 * 60;

/// Cache key for a coordinate pair, stable across float noise at ~10cm.
pub fn pair_key(from: (f64, f64), to: (f64, f64)) -> String {
    format!(
        "{:.6},{:.6}->{:.6},{:.6}",
        from.0, from.1, to.0, to.1
    )
}

/// Memo table for routing-service answers.
///
/// Entries live for the process lifetime. Concurrent planning requests share
/// one cache; the lock is never held across a network call, so a racing pair
/// of requests may both miss and one write wins. The cost is a redundant
/// service call, never a wrong entry.
#[derive(Debug, Default)]
pub struct DurationCache {
    entries: Mutex<HashMap<String, u32>>,
}

impl DurationCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<u32> {
        self.lock().get(key).copied()
    }

    pub fn insert(&self, key: String, secs: u32) {
        self.lock().insert(key, secs);
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, u32>> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Tiered travel-duration estimator.
///
/// Holds the ordered list of routing services and the memo cache; the atlas
/// is passed per call so one estimator can serve many planning areas.
#[derive(Default)]
pub struct DriveTimeEstimator {
    services: Vec<Box<dyn DurationProvider + Send + Sync>>,
    cache: DurationCache,
}

impl DriveTimeEstimator {
    /// An estimator with no routing services: explicit tables and geometry only.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure services from the environment (Google first, then ORS).
    ///
    /// Missing keys are not an error; the corresponding tier is skipped.
    pub fn from_env() -> Self {
        let mut estimator = Self::new();
        if let Some(client) = GoogleMatrixClient::from_env() {
            estimator.services.push(Box::new(client));
        }
        if let Some(client) = OrsMatrixClient::from_env() {
            estimator.services.push(Box::new(client));
        }
        estimator
    }

    /// Append a routing service to the end of the resolution order.
    pub fn with_service(
        mut self,
        service: impl DurationProvider + Send + Sync + 'static,
    ) -> Self {
        self.services.push(Box::new(service));
        self
    }

    /// Substitute the memo cache (e.g. a pre-seeded one in tests).
    pub fn with_cache(mut self, cache: DurationCache) -> Self {
        self.cache = cache;
        self
    }

    pub fn cache(&self) -> &DurationCache {
        &self.cache
    }

    /// Estimated seconds of driving between two regions.
    ///
    /// Always produces a value: explicit table, routing service, great-circle
    /// estimate, or the conservative default when a centroid is missing.
    pub fn between_regions(&self, atlas: &Atlas, a: &str, b: &str) -> u32 {
        if a == b {
            return 0;
        }
        if let Some(minutes) = atlas.region_minutes(a, b) {
            debug!(from = a, to = b, tier = "explicit", "region drive time");
            return minutes * 60;
        }
        let (from, to) = match (atlas.region_coord(a), atlas.region_coord(b)) {
            (Some(from), Some(to)) => (from, to),
            _ => {
                debug!(from = a, to = b, tier = "default", "region missing centroid");
                return MISSING_COORD_DEFAULT_SECS;
            }
        };
        if let Some(secs) = self.service_estimate(from, to) {
            return secs;
        }
        let secs = road_seconds(
            haversine_km(from, to),
            CROSS_REGION_ROAD_FACTOR,
            CROSS_REGION_SPEED_KMH,
            CROSS_REGION_FLOOR_SECS,
        );
        debug!(from = a, to = b, tier = "geometry", secs, "region drive time");
        secs
    }

    /// Estimated seconds of driving between two POIs.
    ///
    /// `None` only when neither an explicit entry nor both coordinates exist.
    /// POI pairs in different regions use the cross-region road factor and
    /// speed; pairs within one region (or with an unmapped POI) use the
    /// local ones.
    pub fn between_pois(&self, atlas: &Atlas, a: &str, b: &str) -> Option<u32> {
        if a == b {
            return Some(0);
        }
        if let Some(minutes) = atlas.poi_minutes(a, b) {
            debug!(from = a, to = b, tier = "explicit", "poi drive time");
            return Some(minutes * 60);
        }
        let from = atlas.poi_coord(a)?;
        let to = atlas.poi_coord(b)?;
        if let Some(secs) = self.service_estimate(from, to) {
            return Some(secs);
        }
        let cross_region = match (atlas.region_of(a), atlas.region_of(b)) {
            (Some(ra), Some(rb)) => ra != rb,
            _ => false,
        };
        let secs = if cross_region {
            road_seconds(
                haversine_km(from, to),
                CROSS_REGION_ROAD_FACTOR,
                CROSS_REGION_SPEED_KMH,
                CROSS_REGION_FLOOR_SECS,
            )
        } else {
            road_seconds(
                haversine_km(from, to),
                LOCAL_ROAD_FACTOR,
                LOCAL_SPEED_KMH,
                LOCAL_FLOOR_SECS,
            )
        };
        debug!(from = a, to = b, tier = "geometry", secs, "poi drive time");
        Some(secs)
    }

    /// First routing-service answer for a coordinate pair, memoized.
    fn service_estimate(&self, from: (f64, f64), to: (f64, f64)) -> Option<u32> {
        if self.services.is_empty() {
            return None;
        }
        let key = pair_key(from, to);
        if let Some(hit) = self.cache.get(&key) {
            return Some(hit);
        }
        for service in &self.services {
            if let Some(secs) = service.duration_secs(from, to) {
                debug!(tier = "service", secs, "routed drive time");
                self.cache.insert(key, secs);
                return Some(secs);
            }
        }
        None
    }
}

impl std::fmt::Debug for DriveTimeEstimator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DriveTimeEstimator")
            .field("services", &self.services.len())
            .field("cached", &self.cache.len())
            .finish()
    }
}
