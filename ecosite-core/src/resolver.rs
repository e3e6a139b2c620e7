//! Geospatial attribute resolution.
//!
//! Every attribute resolves through the same prioritized rule chain (zone
//! table, then a coarse longitude/latitude heuristic, then a default), so
//! the worst case for any coordinate is the documented default constant.
//! There are no error conditions here.

use crate::geo::{resolve_attribute, MatchPolicy};
use crate::reference::{self, BIODIVERSITY_ZONES, DATACENTER_CLUSTERS, DISASTER_RISK_ZONES,
    SOCIOECONOMIC_ZONES, URBAN_CENTERS, WATER_STRESS_ZONES};
use ecosite_schemas::environment::EnvironmentalProfile;
use ecosite_schemas::facility::FacilityRecord;
use ecosite_schemas::geo::Coordinate;

/// Resolves the full environmental attribute bundle for one facility.
pub fn resolve(facility: &FacilityRecord) -> EnvironmentalProfile {
    let code = region_code(&facility.name);
    let point = facility.coordinate();

    EnvironmentalProfile {
        grid_emissions_intensity: grid_emissions_intensity(code),
        renewable_penetration: renewable_penetration(code),
        water_scarcity_index: water_scarcity_index(point),
        ambient_temperature: average_temperature(point),
        datacenter_density: nearby_facility_density(point),
        natural_disaster_risk: natural_disaster_risk(point),
        biodiversity_sensitivity: biodiversity_sensitivity(point),
        land_use_change_impact: land_use_change_impact(point),
        socioeconomic_impact: socioeconomic_impact(point),
    }
}

/// Extracts the two-letter region code from a display name such as
/// "Ashburn Gateway, VA". The trailing ", "-separated token counts only if
/// it is exactly two characters long.
pub fn region_code(name: &str) -> Option<&str> {
    let tail = name.split(", ").last()?;
    if tail.len() == 2 && name.contains(", ") {
        Some(tail)
    } else {
        None
    }
}

/// Grid emissions intensity in kg CO2e/kWh for a region code, falling back
/// to the nationwide average.
pub fn grid_emissions_intensity(code: Option<&str>) -> f64 {
    code.and_then(|c| {
        reference::GRID_EMISSIONS_INTENSITY
            .iter()
            .find(|(region, _)| *region == c)
            .map(|(_, v)| *v)
    })
    .unwrap_or(reference::GRID_INTENSITY_DEFAULT)
}

/// Renewable generation share (%) for a region code, falling back to the
/// nationwide average.
pub fn renewable_penetration(code: Option<&str>) -> f64 {
    code.and_then(|c| {
        reference::RENEWABLE_PENETRATION
            .iter()
            .find(|(region, _)| *region == c)
            .map(|(_, v)| *v)
    })
    .unwrap_or(reference::RENEWABLE_PENETRATION_DEFAULT)
}

/// Water stress index on the 0-5 WRI Aqueduct scale.
pub fn water_scarcity_index(point: Coordinate) -> f64 {
    resolve_attribute(
        WATER_STRESS_ZONES,
        MatchPolicy::FirstMatch,
        point,
        |p| {
            if p.longitude < -115.0 {
                Some(3.2) // Western states
            } else if p.longitude < -100.0 {
                Some(2.5) // Central states
            } else if p.longitude < -90.0 {
                Some(1.8) // Midwest
            } else if p.latitude < 35.0 && p.longitude > -90.0 {
                Some(2.2) // Southeast
            } else if p.latitude >= 40.0 && p.longitude > -90.0 {
                Some(1.5) // Northeast
            } else {
                None
            }
        },
        reference::WATER_STRESS_DEFAULT,
    )
}

/// Average annual temperature (°C) from a latitude gradient with coarse
/// elevation and coastal corrections.
pub fn average_temperature(point: Coordinate) -> f64 {
    let mut temp = 30.0 - 0.5 * (point.latitude - 20.0).abs();

    if point.longitude < -105.0 && point.latitude > 35.0 {
        temp -= 5.0; // Rocky Mountains
    } else if point.longitude < -115.0 {
        temp -= 2.0; // West Coast
    } else if point.longitude > -80.0 && point.latitude > 40.0 {
        temp -= 3.0; // Northeast
    } else if point.longitude > -90.0 && point.latitude < 30.0 {
        temp += 2.0; // Gulf Coast
    }

    temp
}

/// Count of nearby facilities, from the known-cluster table with an urban
/// fallback of 3 and a rural default of 0.
pub fn nearby_facility_density(point: Coordinate) -> u32 {
    resolve_attribute(
        DATACENTER_CLUSTERS,
        MatchPolicy::FirstMatch,
        point,
        |p| in_urban_area(p).then_some(reference::URBAN_DENSITY_DEFAULT),
        0.0,
    ) as u32
}

/// True when the point falls inside any metro center circle.
pub fn in_urban_area(point: Coordinate) -> bool {
    URBAN_CENTERS.iter().any(|c| c.contains(point))
}

/// Composite natural-disaster risk, 0-1. Unlike the other lookups this
/// takes the maximum across overlapping zones, so stacked hazards are
/// never under-reported.
pub fn natural_disaster_risk(point: Coordinate) -> f64 {
    resolve_attribute(
        DISASTER_RISK_ZONES,
        MatchPolicy::MaxValue,
        point,
        |p| {
            if p.longitude < -115.0 {
                Some(0.5) // West Coast: earthquake, fire
            } else if p.longitude > -90.0 && p.latitude < 35.0 {
                Some(0.6) // Southeast: hurricane
            } else if p.longitude > -98.0 && p.longitude < -88.0 && p.latitude > 35.0 && p.latitude < 42.0 {
                Some(0.5) // Midwest: tornado
            } else if p.longitude < -100.0 && p.latitude > 35.0 {
                Some(0.4) // Mountain West: wildfire
            } else {
                None
            }
        },
        reference::DISASTER_RISK_DEFAULT,
    )
}

/// Ecosystem vulnerability, 0-1.
pub fn biodiversity_sensitivity(point: Coordinate) -> f64 {
    resolve_attribute(
        BIODIVERSITY_ZONES,
        MatchPolicy::FirstMatch,
        point,
        |p| in_urban_area(p).then_some(reference::BIODIVERSITY_URBAN),
        reference::BIODIVERSITY_DEFAULT,
    )
}

/// Land conversion impact, 0-1. Urban land is already developed, so the
/// urban check comes before the regional ecosystem rules.
pub fn land_use_change_impact(point: Coordinate) -> f64 {
    if in_urban_area(point) {
        return reference::LAND_USE_URBAN;
    }

    if point.longitude < -115.0 && point.latitude < 36.0 {
        0.8 // Desert ecosystems (fragile)
    } else if point.longitude > -90.0 && point.latitude < 30.0 {
        0.7 // Gulf Coast wetlands
    } else if point.longitude > -98.0 && point.longitude < -88.0 && point.latitude > 40.0 && point.latitude < 50.0 {
        0.6 // Northern forests
    } else if point.longitude < -105.0 && point.latitude > 40.0 {
        0.7 // Mountain ecosystems
    } else {
        reference::LAND_USE_DEFAULT
    }
}

/// Impact on local communities, 0-1, from environmental-justice focus
/// areas with an urban fallback.
pub fn socioeconomic_impact(point: Coordinate) -> f64 {
    resolve_attribute(
        SOCIOECONOMIC_ZONES,
        MatchPolicy::FirstMatch,
        point,
        |p| in_urban_area(p).then_some(reference::SOCIOECONOMIC_URBAN),
        reference::SOCIOECONOMIC_DEFAULT,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn facility_at(lat: f64, lng: f64, name: &str) -> FacilityRecord {
        FacilityRecord {
            latitude: lat,
            longitude: lng,
            name: name.to_string(),
            land_price: String::new(),
            electricity: String::new(),
            notes: String::new(),
            impact: None,
        }
    }

    #[test]
    fn region_code_takes_trailing_two_letter_token() {
        assert_eq!(region_code("Ashburn Gateway, VA"), Some("VA"));
        assert_eq!(region_code("Plot 7, Austin Metro, TX"), Some("TX"));
        assert_eq!(region_code("Somewhere Rural"), None);
        assert_eq!(region_code("Plot 9, Texas"), None);
        assert_eq!(region_code(""), None);
    }

    #[test]
    fn grid_intensity_resolves_code_or_national_average() {
        assert_eq!(grid_emissions_intensity(Some("VA")), 0.3124);
        assert_eq!(grid_emissions_intensity(Some("VT")), 0.0055);
        assert_eq!(grid_emissions_intensity(Some("ZZ")), 0.45);
        assert_eq!(grid_emissions_intensity(None), 0.45);
    }

    #[test]
    fn renewable_penetration_resolves_code_or_national_average() {
        assert_eq!(renewable_penetration(Some("WA")), 75.3);
        assert_eq!(renewable_penetration(None), 20.1);
    }

    #[test]
    fn ashburn_resolves_to_cluster_density_not_urban_default() {
        // Data Center Alley is a first-match cluster hit, independent of
        // the urban-area fallback.
        let density = nearby_facility_density(Coordinate::new(39.05, -77.46));
        assert_eq!(density, 60);
    }

    #[test]
    fn rural_point_has_zero_density() {
        // Middle of Kansas: no cluster, no metro.
        assert_eq!(nearby_facility_density(Coordinate::new(39.0, -98.0)), 0);
    }

    #[test]
    fn urban_point_outside_clusters_gets_default_density() {
        // Central Houston is a metro center but not a datacenter cluster.
        let houston = Coordinate::new(29.76, -95.37);
        assert!(in_urban_area(houston));
        assert_eq!(nearby_facility_density(houston), 3);
    }

    #[test]
    fn water_scarcity_prefers_zone_over_regional_band() {
        // Phoenix zone value, not the central-states band.
        assert_eq!(water_scarcity_index(Coordinate::new(33.45, -112.07)), 4.2);
        // Iowa: no zone, midwest band.
        assert_eq!(water_scarcity_index(Coordinate::new(41.0, -95.0)), 1.8);
    }

    #[test]
    fn disaster_risk_reports_zone_maximum() {
        // Inside the Bay Area earthquake zone.
        assert_eq!(natural_disaster_risk(Coordinate::new(37.77, -122.42)), 0.85);
        // Plains point outside all zones and regional bands.
        assert_eq!(natural_disaster_risk(Coordinate::new(39.0, -84.0)), 0.3);
    }

    #[test]
    fn average_temperature_applies_one_regional_correction() {
        // Ashburn: latitude gradient only.
        let t = average_temperature(Coordinate::new(39.05, -77.46));
        assert!((t - 20.475).abs() < 1e-9);
        // High Rockies: elevation correction applies.
        let t = average_temperature(Coordinate::new(40.0, -106.5));
        assert!((t - (30.0 - 0.5 * 20.0 - 5.0)).abs() < 1e-9);
    }

    #[test]
    fn land_use_in_urban_area_is_low() {
        assert_eq!(land_use_change_impact(Coordinate::new(29.76, -95.37)), 0.3);
        // Mojave-ish desert point: fragile ecosystem.
        assert_eq!(land_use_change_impact(Coordinate::new(35.0, -116.5)), 0.8);
    }

    #[test]
    fn resolve_produces_full_profile() {
        let facility = facility_at(39.05, -77.46, "Ashburn Gateway, VA");
        let profile = resolve(&facility);
        assert_eq!(profile.grid_emissions_intensity, 0.3124);
        assert_eq!(profile.renewable_penetration, 12.3);
        assert_eq!(profile.datacenter_density, 60);
        assert!((profile.ambient_temperature - 20.475).abs() < 1e-9);
        assert!(profile.natural_disaster_risk >= 0.0 && profile.natural_disaster_risk <= 1.0);
        assert!(profile.socioeconomic_impact >= 0.0 && profile.socioeconomic_impact <= 1.0);
    }
}
