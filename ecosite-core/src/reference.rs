//! Static reference data for the attribute resolver.
//!
//! Everything here is build-time constant and read-only at runtime. The
//! literal values are load-bearing: eco-scores and clustering lookups are
//! expected to be bit-for-bit reproducible against these tables.

use crate::geo::{GeoCircle, GeoZone};

/// Grid emissions intensity by region code (kg CO2e/kWh), from EPA eGRID
/// 2021 data.
pub const GRID_EMISSIONS_INTENSITY: &[(&str, f64)] = &[
    ("WA", 0.0932), ("OR", 0.1521), ("CA", 0.2096), ("ID", 0.0905), ("NV", 0.3135),
    ("MT", 0.3929), ("WY", 0.7891), ("UT", 0.6321), ("CO", 0.5309), ("AZ", 0.3742),
    ("NM", 0.4916), ("ND", 0.5874), ("SD", 0.3326), ("NE", 0.4911), ("KS", 0.4547),
    ("OK", 0.4139), ("TX", 0.4089), ("MN", 0.3632), ("IA", 0.3817), ("MO", 0.6733),
    ("AR", 0.4422), ("LA", 0.3924), ("WI", 0.5142), ("IL", 0.3873), ("MS", 0.4341),
    ("MI", 0.4486), ("IN", 0.6899), ("KY", 0.7662), ("TN", 0.3711), ("AL", 0.3707),
    ("OH", 0.5354), ("WV", 0.8463), ("VA", 0.3124), ("NC", 0.3299), ("SC", 0.2994),
    ("GA", 0.3749), ("FL", 0.3830), ("PA", 0.3790), ("NY", 0.2139), ("ME", 0.1743),
    ("NH", 0.1240), ("VT", 0.0055), ("MA", 0.3075), ("RI", 0.3726), ("CT", 0.2369),
    ("NJ", 0.2644), ("DE", 0.4644), ("MD", 0.3187), ("DC", 0.2783), ("AK", 0.4566),
    ("HI", 0.6246), ("PR", 0.5893), ("VI", 0.6021), ("GU", 0.6432), ("MP", 0.6521),
];

/// Nationwide-average grid intensity, used when no region code resolves.
pub const GRID_INTENSITY_DEFAULT: f64 = 0.4500;

/// Renewable generation share by region code (%), from EIA 2023 data.
pub const RENEWABLE_PENETRATION: &[(&str, f64)] = &[
    ("WA", 75.3), ("OR", 69.8), ("CA", 54.2), ("ID", 78.1), ("NV", 34.6),
    ("MT", 58.2), ("WY", 16.3), ("UT", 24.7), ("CO", 32.4), ("AZ", 16.1),
    ("NM", 36.8), ("ND", 43.2), ("SD", 77.9), ("NE", 30.1), ("KS", 47.3),
    ("OK", 44.8), ("TX", 32.1), ("MN", 33.6), ("IA", 60.2), ("MO", 11.3),
    ("AR", 13.7), ("LA", 4.8), ("WI", 14.1), ("IL", 14.3), ("MS", 3.2),
    ("MI", 12.6), ("IN", 10.3), ("KY", 7.1), ("TN", 14.4), ("AL", 9.1),
    ("OH", 5.7), ("WV", 6.1), ("VA", 12.3), ("NC", 14.2), ("SC", 7.3),
    ("GA", 12.6), ("FL", 6.4), ("PA", 6.9), ("NY", 31.2), ("ME", 82.1),
    ("NH", 23.1), ("VT", 99.8), ("MA", 15.9), ("RI", 12.8), ("CT", 6.5),
    ("NJ", 7.9), ("DE", 6.1), ("MD", 12.4), ("DC", 5.3), ("AK", 30.1),
    ("HI", 18.2), ("PR", 7.1), ("VI", 3.2), ("GU", 5.1), ("MP", 2.1),
];

/// Nationwide-average renewable penetration (%).
pub const RENEWABLE_PENETRATION_DEFAULT: f64 = 20.1;

/// High water-stress regions, WRI Aqueduct style (index 0-5).
pub const WATER_STRESS_ZONES: &[GeoZone] = &[
    GeoZone { lat: 33.45, lng: -112.07, radius_km: 200.0, value: 4.2 }, // Phoenix
    GeoZone { lat: 36.17, lng: -115.14, radius_km: 150.0, value: 4.5 }, // Las Vegas
    GeoZone { lat: 32.72, lng: -97.12, radius_km: 150.0, value: 3.8 },  // Dallas-Fort Worth
    GeoZone { lat: 37.77, lng: -122.42, radius_km: 100.0, value: 3.5 }, // San Francisco
    GeoZone { lat: 34.05, lng: -118.24, radius_km: 120.0, value: 3.9 }, // Los Angeles
    GeoZone { lat: 39.74, lng: -104.99, radius_km: 100.0, value: 3.7 }, // Denver
    GeoZone { lat: 40.76, lng: -111.89, radius_km: 100.0, value: 4.0 }, // Salt Lake City
    GeoZone { lat: 35.08, lng: -106.65, radius_km: 100.0, value: 4.1 }, // Albuquerque
];

pub const WATER_STRESS_DEFAULT: f64 = 2.0;

/// Known datacenter clusters; value is the facility count within the zone.
pub const DATACENTER_CLUSTERS: &[GeoZone] = &[
    GeoZone { lat: 39.05, lng: -77.46, radius_km: 50.0, value: 60.0 },  // Ashburn, VA (Data Center Alley)
    GeoZone { lat: 32.78, lng: -96.80, radius_km: 50.0, value: 35.0 },  // Dallas-Fort Worth
    GeoZone { lat: 37.37, lng: -121.97, radius_km: 40.0, value: 40.0 }, // Silicon Valley
    GeoZone { lat: 41.88, lng: -87.63, radius_km: 40.0, value: 25.0 },  // Chicago
    GeoZone { lat: 33.45, lng: -112.07, radius_km: 50.0, value: 15.0 }, // Phoenix
    GeoZone { lat: 40.73, lng: -74.00, radius_km: 40.0, value: 30.0 },  // New York/New Jersey
    GeoZone { lat: 47.60, lng: -122.33, radius_km: 50.0, value: 20.0 }, // Seattle
    GeoZone { lat: 39.74, lng: -104.99, radius_km: 40.0, value: 15.0 }, // Denver
    GeoZone { lat: 25.78, lng: -80.19, radius_km: 40.0, value: 12.0 },  // Miami
    GeoZone { lat: 36.17, lng: -115.14, radius_km: 40.0, value: 10.0 }, // Las Vegas
    GeoZone { lat: 33.75, lng: -84.39, radius_km: 40.0, value: 18.0 },  // Atlanta
];

/// Typical facility count for an urban area outside any known cluster.
pub const URBAN_DENSITY_DEFAULT: f64 = 3.0;

/// Metro centers used for the boolean urban-area membership test.
pub const URBAN_CENTERS: &[GeoCircle] = &[
    GeoCircle { lat: 40.71, lng: -74.01, radius_km: 50.0 },  // NYC
    GeoCircle { lat: 34.05, lng: -118.24, radius_km: 60.0 }, // LA
    GeoCircle { lat: 41.88, lng: -87.63, radius_km: 40.0 },  // Chicago
    GeoCircle { lat: 29.76, lng: -95.37, radius_km: 40.0 },  // Houston
    GeoCircle { lat: 33.45, lng: -112.07, radius_km: 40.0 }, // Phoenix
    GeoCircle { lat: 39.95, lng: -75.17, radius_km: 30.0 },  // Philadelphia
    GeoCircle { lat: 29.42, lng: -98.49, radius_km: 30.0 },  // San Antonio
    GeoCircle { lat: 32.78, lng: -96.80, radius_km: 40.0 },  // Dallas
    GeoCircle { lat: 30.27, lng: -97.74, radius_km: 30.0 },  // Austin
    GeoCircle { lat: 37.77, lng: -122.42, radius_km: 30.0 }, // San Francisco
];

/// High natural-disaster-risk zones (risk 0-1). Resolved with the MaxValue
/// policy: overlapping hazards report the worst case.
pub const DISASTER_RISK_ZONES: &[GeoZone] = &[
    GeoZone { lat: 37.77, lng: -122.42, radius_km: 100.0, value: 0.85 }, // Bay Area (earthquake)
    GeoZone { lat: 34.05, lng: -118.24, radius_km: 100.0, value: 0.80 }, // Southern California (earthquake)
    GeoZone { lat: 25.76, lng: -80.19, radius_km: 200.0, value: 0.90 },  // South Florida (hurricane)
    GeoZone { lat: 29.95, lng: -90.07, radius_km: 150.0, value: 0.85 },  // New Orleans (hurricane)
    GeoZone { lat: 35.65, lng: -97.48, radius_km: 150.0, value: 0.75 },  // Oklahoma (tornado)
    GeoZone { lat: 39.74, lng: -104.99, radius_km: 100.0, value: 0.60 }, // Colorado Front Range (wildfire)
];

pub const DISASTER_RISK_DEFAULT: f64 = 0.3;

/// High biodiversity-sensitivity zones (0-1).
pub const BIODIVERSITY_ZONES: &[GeoZone] = &[
    GeoZone { lat: 27.5, lng: -81.0, radius_km: 150.0, value: 0.85 },   // Florida Everglades
    GeoZone { lat: 37.86, lng: -119.54, radius_km: 100.0, value: 0.8 }, // Yosemite/Sierra Nevada
    GeoZone { lat: 35.6, lng: -83.52, radius_km: 100.0, value: 0.75 },  // Great Smoky Mountains
    GeoZone { lat: 44.6, lng: -110.5, radius_km: 150.0, value: 0.8 },   // Yellowstone
    GeoZone { lat: 48.7, lng: -113.8, radius_km: 120.0, value: 0.75 },  // Glacier National Park
    GeoZone { lat: 29.3, lng: -103.25, radius_km: 100.0, value: 0.65 }, // Big Bend
    GeoZone { lat: 36.1, lng: -112.1, radius_km: 120.0, value: 0.7 },   // Grand Canyon
];

pub const BIODIVERSITY_URBAN: f64 = 0.3;
pub const BIODIVERSITY_DEFAULT: f64 = 0.5;

pub const LAND_USE_URBAN: f64 = 0.3;
pub const LAND_USE_DEFAULT: f64 = 0.5;

/// Environmental-justice focus areas (socioeconomic impact 0-1).
pub const SOCIOECONOMIC_ZONES: &[GeoZone] = &[
    GeoZone { lat: 37.5, lng: -122.0, radius_km: 30.0, value: 0.7 },  // East Palo Alto
    GeoZone { lat: 37.7, lng: -122.2, radius_km: 20.0, value: 0.8 },  // Oakland
    GeoZone { lat: 33.9, lng: -118.2, radius_km: 30.0, value: 0.85 }, // South LA
    GeoZone { lat: 29.7, lng: -95.3, radius_km: 25.0, value: 0.75 },  // East Houston
    GeoZone { lat: 38.9, lng: -77.0, radius_km: 15.0, value: 0.7 },   // DC SE
    GeoZone { lat: 40.8, lng: -74.0, radius_km: 20.0, value: 0.8 },   // Newark
    GeoZone { lat: 41.8, lng: -87.7, radius_km: 25.0, value: 0.75 },  // Chicago South/West
    GeoZone { lat: 32.7, lng: -96.8, radius_km: 20.0, value: 0.7 },   // South Dallas
];

pub const SOCIOECONOMIC_URBAN: f64 = 0.5;
pub const SOCIOECONOMIC_DEFAULT: f64 = 0.3;
