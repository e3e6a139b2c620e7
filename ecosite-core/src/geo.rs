use ecosite_schemas::geo::Coordinate;

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometers between two coordinates, using the
/// Haversine formula. Symmetric, zero for identical points.
pub fn distance_km(a: Coordinate, b: Coordinate) -> f64 {
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.latitude.to_radians().cos() * b.latitude.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// A circular region with no value attached, used for boolean membership
/// tests such as the urban-area check.
#[derive(Debug, Clone, Copy)]
pub struct GeoCircle {
    pub lat: f64,
    pub lng: f64,
    pub radius_km: f64,
}

impl GeoCircle {
    pub fn contains(&self, point: Coordinate) -> bool {
        distance_km(Coordinate::new(self.lat, self.lng), point) <= self.radius_km
    }
}

/// A named high-signal zone: a circle with an attribute value.
#[derive(Debug, Clone, Copy)]
pub struct GeoZone {
    pub lat: f64,
    pub lng: f64,
    pub radius_km: f64,
    pub value: f64,
}

impl GeoZone {
    pub fn contains(&self, point: Coordinate) -> bool {
        distance_km(Coordinate::new(self.lat, self.lng), point) <= self.radius_km
    }
}

/// How overlapping zone matches are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPolicy {
    /// First match in table order wins.
    FirstMatch,
    /// The maximum value across all matching zones wins. Used for disaster
    /// risk so that overlapping hazards are never under-reported.
    MaxValue,
}

/// The prioritized rule chain shared by every zone-based attribute lookup:
/// zone table first, then a coarse regional heuristic, then a default
/// constant. Every attribute resolves; there is no failure case.
pub fn resolve_attribute<F>(
    zones: &[GeoZone],
    policy: MatchPolicy,
    point: Coordinate,
    regional: F,
    default: f64,
) -> f64
where
    F: Fn(Coordinate) -> Option<f64>,
{
    let zone_value = match policy {
        MatchPolicy::FirstMatch => zones.iter().find(|z| z.contains(point)).map(|z| z.value),
        MatchPolicy::MaxValue => zones
            .iter()
            .filter(|z| z.contains(point))
            .map(|z| z.value)
            .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |a| a.max(v)))),
    };

    zone_value.or_else(|| regional(point)).unwrap_or(default)
}
