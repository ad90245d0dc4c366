//! Static reference data for a planning area.
//!
//! An [`Atlas`] holds the region adjacency graph, region centroids, points
//! of interest with their owning region, and the explicit drive-time tables.
//! It is loaded once by the hosting application and shared read-only across
//! planning requests; how the data is stored on disk is the host's concern.

use std::collections::HashMap;

/// Unordered pair of names, canonicalized so `(a, b)` and `(b, a)` collide.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct PairKey(String, String);

impl PairKey {
    fn new(a: &str, b: &str) -> Self {
        if a <= b {
            Self(a.to_string(), b.to_string())
        } else {
            Self(b.to_string(), a.to_string())
        }
    }
}

/// Read-only reference data: regions, adjacency, POIs, and explicit times.
///
/// Adjacency is kept symmetric by construction ([`Atlas::connect`] inserts
/// both directions); the search and planning code assumes symmetry and does
/// not re-check it. Neighbor lists preserve insertion order, which fixes the
/// BFS discovery order for a given data load.
#[derive(Debug, Clone, Default)]
pub struct Atlas {
    graph: HashMap<String, Vec<String>>,
    region_coords: HashMap<String, (f64, f64)>,
    region_pois: HashMap<String, Vec<String>>,
    poi_coords: HashMap<String, (f64, f64)>,
    poi_regions: HashMap<String, String>,
    region_minutes: HashMap<PairKey, u32>,
    poi_minutes: HashMap<PairKey, u32>,
}

impl Atlas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a region node, with or without edges.
    pub fn add_region(&mut self, name: &str) {
        self.graph.entry(name.to_string()).or_default();
    }

    /// Record a region's centroid.
    pub fn set_region_coord(&mut self, name: &str, lat: f64, lng: f64) {
        self.region_coords.insert(name.to_string(), (lat, lng));
    }

    /// Add a symmetric adjacency edge, registering both regions.
    pub fn connect(&mut self, a: &str, b: &str) {
        self.add_region(a);
        self.add_region(b);
        let forward = self.graph.entry(a.to_string()).or_default();
        if !forward.iter().any(|n| n == b) {
            forward.push(b.to_string());
        }
        let backward = self.graph.entry(b.to_string()).or_default();
        if !backward.iter().any(|n| n == a) {
            backward.push(a.to_string());
        }
    }

    /// Register a point of interest inside a region.
    ///
    /// The per-region listing stays sorted; that ordering is the canonical
    /// one for tie-breaking in refinement.
    pub fn add_poi(&mut self, name: &str, region: &str) {
        self.poi_regions
            .insert(name.to_string(), region.to_string());
        let listing = self.region_pois.entry(region.to_string()).or_default();
        if let Err(pos) = listing.binary_search_by(|p| p.as_str().cmp(name)) {
            listing.insert(pos, name.to_string());
        }
    }

    /// Record a POI's coordinate.
    pub fn set_poi_coord(&mut self, name: &str, lat: f64, lng: f64) {
        self.poi_coords.insert(name.to_string(), (lat, lng));
    }

    /// Record an authoritative drive time between two regions, in minutes.
    pub fn set_region_minutes(&mut self, a: &str, b: &str, minutes: u32) {
        self.region_minutes.insert(PairKey::new(a, b), minutes);
    }

    /// Record an authoritative drive time between two POIs, in minutes.
    pub fn set_poi_minutes(&mut self, a: &str, b: &str, minutes: u32) {
        self.poi_minutes.insert(PairKey::new(a, b), minutes);
    }

    pub fn contains_region(&self, name: &str) -> bool {
        self.graph.contains_key(name)
    }

    /// Adjacent regions, in insertion order. Empty for unknown regions.
    pub fn neighbors(&self, region: &str) -> &[String] {
        self.graph.get(region).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn regions(&self) -> impl Iterator<Item = &str> {
        self.graph.keys().map(String::as_str)
    }

    pub fn region_coord(&self, name: &str) -> Option<(f64, f64)> {
        self.region_coords.get(name).copied()
    }

    /// POIs of a region, sorted by name. Empty for regions without any.
    pub fn pois_in(&self, region: &str) -> &[String] {
        self.region_pois
            .get(region)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// The region a POI belongs to.
    pub fn region_of(&self, poi: &str) -> Option<&str> {
        self.poi_regions.get(poi).map(String::as_str)
    }

    pub fn poi_coord(&self, name: &str) -> Option<(f64, f64)> {
        self.poi_coords.get(name).copied()
    }

    /// Explicit region-to-region minutes, order-insensitive.
    pub fn region_minutes(&self, a: &str, b: &str) -> Option<u32> {
        self.region_minutes.get(&PairKey::new(a, b)).copied()
    }

    /// Explicit POI-to-POI minutes, order-insensitive.
    pub fn poi_minutes(&self, a: &str, b: &str) -> Option<u32> {
        self.poi_minutes.get(&PairKey::new(a, b)).copied()
    }
}
