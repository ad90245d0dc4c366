//! Western Washington counties for realistic test fixtures.
//!
//! Real county adjacency, approximate centroids, typical highway drive
//! times between neighboring counties, and city coordinates from public
//! map data.

use trip_planner::atlas::Atlas;

/// (county, centroid lat, centroid lng)
pub const REGIONS: &[(&str, f64, f64)] = &[
    ("Clallam", 48.1, -123.9),
    ("Cowlitz", 46.2, -122.7),
    ("Grays Harbor", 47.1, -123.8),
    ("Island", 48.2, -122.6),
    ("Jefferson", 47.8, -123.6),
    ("King", 47.5, -121.8),
    ("Kitsap", 47.6, -122.6),
    ("Kittitas", 47.1, -120.5),
    ("Lewis", 46.6, -122.4),
    ("Mason", 47.3, -123.2),
    ("Pacific", 46.5, -123.8),
    ("Pierce", 47.0, -122.2),
    ("San Juan", 48.5, -123.0),
    ("Skagit", 48.5, -122.0),
    ("Snohomish", 48.0, -121.7),
    ("Thurston", 47.0, -122.9),
    ("Wahkiakum", 46.3, -123.4),
    ("Whatcom", 48.9, -122.0),
    ("Yakima", 46.5, -120.7),
];

/// (county a, county b, typical highway minutes between them)
pub const EDGES: &[(&str, &str, u32)] = &[
    ("Clallam", "Jefferson", 60),
    ("Cowlitz", "Lewis", 40),
    ("Cowlitz", "Wahkiakum", 40),
    ("Grays Harbor", "Jefferson", 75),
    ("Grays Harbor", "Lewis", 50),
    ("Grays Harbor", "Mason", 45),
    ("Grays Harbor", "Pacific", 35),
    ("Grays Harbor", "Thurston", 60),
    ("Island", "Skagit", 25),
    ("Island", "Snohomish", 30),
    ("Jefferson", "Kitsap", 40),
    ("Jefferson", "Mason", 55),
    ("King", "Kittitas", 75),
    ("King", "Pierce", 35),
    ("King", "Snohomish", 30),
    ("Kitsap", "Mason", 30),
    ("Kitsap", "Pierce", 35),
    ("Kittitas", "Pierce", 90),
    ("Kittitas", "Yakima", 45),
    ("Lewis", "Pierce", 55),
    ("Lewis", "Thurston", 45),
    ("Lewis", "Wahkiakum", 70),
    ("Lewis", "Yakima", 90),
    ("Mason", "Pierce", 40),
    ("Mason", "Thurston", 30),
    ("Pacific", "Wahkiakum", 30),
    ("Pierce", "Thurston", 30),
    ("San Juan", "Skagit", 90), // includes the ferry crossing
    ("Skagit", "Snohomish", 35),
    ("Skagit", "Whatcom", 40),
    ("Snohomish", "Whatcom", 55),
];

/// (city, county, lat, lng)
pub const CITIES: &[(&str, &str, f64, f64)] = &[
    ("Port Angeles", "Clallam", 48.1181, -123.4307),
    ("Sequim", "Clallam", 48.0795, -123.1018),
    ("Forks", "Clallam", 47.9501, -124.3854),
    ("Longview", "Cowlitz", 46.1382, -122.9382),
    ("Kelso", "Cowlitz", 46.1468, -122.9085),
    ("Castle Rock", "Cowlitz", 46.2751, -122.9076),
    ("Aberdeen", "Grays Harbor", 46.9754, -123.8157),
    ("Hoquiam", "Grays Harbor", 46.9809, -123.8894),
    ("Montesano", "Grays Harbor", 46.9812, -123.6026),
    ("Oak Harbor", "Island", 48.2932, -122.6433),
    ("Coupeville", "Island", 48.2193, -122.6863),
    ("Port Townsend", "Jefferson", 48.1170, -122.7604),
    ("Port Ludlow", "Jefferson", 47.9257, -122.6826),
    ("Seattle", "King", 47.6062, -122.3321),
    ("Bellevue", "King", 47.6101, -122.2015),
    ("Renton", "King", 47.4829, -122.2171),
    ("Kent", "King", 47.3809, -122.2348),
    ("Auburn", "King", 47.3073, -122.2285),
    ("Federal Way", "King", 47.3223, -122.3126),
    ("Bremerton", "Kitsap", 47.5673, -122.6326),
    ("Silverdale", "Kitsap", 47.6445, -122.6946),
    ("Port Orchard", "Kitsap", 47.5404, -122.6363),
    ("Poulsbo", "Kitsap", 47.7357, -122.6465),
    ("Ellensburg", "Kittitas", 46.9965, -120.5478),
    ("Cle Elum", "Kittitas", 47.1954, -120.9395),
    ("Centralia", "Lewis", 46.7162, -122.9543),
    ("Chehalis", "Lewis", 46.6620, -122.9640),
    ("Shelton", "Mason", 47.2151, -123.0999),
    ("Raymond", "Pacific", 46.6865, -123.7326),
    ("South Bend", "Pacific", 46.6631, -123.7957),
    ("Tacoma", "Pierce", 47.2529, -122.4443),
    ("Lakewood", "Pierce", 47.1717, -122.5185),
    ("Puyallup", "Pierce", 47.1854, -122.2929),
    ("Gig Harbor", "Pierce", 47.3295, -122.5801),
    ("Friday Harbor", "San Juan", 48.5343, -123.0110),
    ("Mount Vernon", "Skagit", 48.4212, -122.3340),
    ("Burlington", "Skagit", 48.4757, -122.3255),
    ("Anacortes", "Skagit", 48.5126, -122.6127),
    ("Everett", "Snohomish", 47.9790, -122.2021),
    ("Marysville", "Snohomish", 48.0518, -122.1771),
    ("Lynnwood", "Snohomish", 47.8209, -122.3151),
    ("Edmonds", "Snohomish", 47.8107, -122.3774),
    ("Olympia", "Thurston", 47.0379, -122.9007),
    ("Lacey", "Thurston", 47.0343, -122.8232),
    ("Tumwater", "Thurston", 47.0073, -122.9093),
    ("Cathlamet", "Wahkiakum", 46.2043, -123.3832),
    ("Bellingham", "Whatcom", 48.7519, -122.4787),
    ("Blaine", "Whatcom", 48.9937, -122.7473),
    ("Ferndale", "Whatcom", 48.8465, -122.5910),
    ("Yakima", "Yakima", 46.6021, -120.5059),
    ("Sunnyside", "Yakima", 46.3232, -120.0087),
    ("Toppenish", "Yakima", 46.3779, -120.3087),
];

/// Curated same-county city drive times, in minutes.
pub const CITY_MINUTES: &[(&str, &str, u32)] = &[
    ("Seattle", "Bellevue", 20),
    ("Tacoma", "Puyallup", 25),
    ("Olympia", "Lacey", 10),
];

/// The full western-Washington atlas.
pub fn western_washington() -> Atlas {
    let mut atlas = Atlas::new();
    for &(name, lat, lng) in REGIONS {
        atlas.add_region(name);
        atlas.set_region_coord(name, lat, lng);
    }
    for &(a, b, minutes) in EDGES {
        atlas.connect(a, b);
        atlas.set_region_minutes(a, b, minutes);
    }
    for &(city, county, lat, lng) in CITIES {
        atlas.add_poi(city, county);
        atlas.set_poi_coord(city, lat, lng);
    }
    for &(a, b, minutes) in CITY_MINUTES {
        atlas.set_poi_minutes(a, b, minutes);
    }
    atlas
}

/// Minimal A-B-C chain with ten-minute legs.
pub fn three_region_chain() -> Atlas {
    let mut atlas = Atlas::new();
    atlas.connect("A", "B");
    atlas.connect("B", "C");
    atlas.set_region_minutes("A", "B", 10);
    atlas.set_region_minutes("B", "C", 10);
    atlas
}
