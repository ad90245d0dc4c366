//! Great-circle distance helpers (fallback when no routing service answers).
//!
//! Uses straight-line distance over the sphere to estimate travel time.
//! Less accurate than a routing service (ignores roads) but always available.

/// Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Calculate haversine distance between two (lat, lng) points in kilometers.
pub fn haversine_km(from: (f64, f64), to: (f64, f64)) -> f64 {
    let (lat1, lng1) = from;
    let (lat2, lng2) = to;

    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lng = (lng2 - lng1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS_KM * c
}

/// Convert great-circle distance to driving seconds.
///
/// Inflates the straight-line distance by a road-network factor, divides by
/// an assumed average speed, and floors the result so adjacent points never
/// round down to an implausible zero.
pub fn road_seconds(km: f64, road_factor: f64, speed_kmh: f64, floor_secs: u32) -> u32 {
    let hours = km * road_factor / speed_kmh;
    let secs = (hours * 3600.0).round() as u32;
    secs.max(floor_secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haversine_same_point() {
        let dist = haversine_km((47.6, -122.3), (47.6, -122.3));
        assert!(dist < 0.001, "Same point should have ~0 distance");
    }

    #[test]
    fn test_haversine_known_distance() {
        // Seattle (47.6062, -122.3321) to Spokane (47.6588, -117.4260)
        // Actual distance ~368 km
        let dist = haversine_km((47.6062, -122.3321), (47.6588, -117.4260));
        assert!(
            dist > 350.0 && dist < 390.0,
            "Seattle to Spokane should be ~368km, got {}",
            dist
        );
    }

    #[test]
    fn test_haversine_symmetric() {
        let a = (47.0379, -122.9007);
        let b = (46.6021, -120.5059);
        let forward = haversine_km(a, b);
        let back = haversine_km(b, a);
        assert!((forward - back).abs() < 1e-9, "Haversine is symmetric");
    }

    #[test]
    fn test_road_seconds_reasonable() {
        // 80 km at factor 1.0 and 80 km/h = exactly one hour
        assert_eq!(road_seconds(80.0, 1.0, 80.0, 60), 3600);
        // 100 km inflated by 1.35 at 80 km/h = 1.6875h = 6075s
        assert_eq!(road_seconds(100.0, 1.35, 80.0, 60), 6075);
    }

    #[test]
    fn test_road_seconds_floor() {
        // Two points a few meters apart still cost the floor
        assert_eq!(road_seconds(0.01, 1.25, 50.0, 30), 30);
    }
}
