//! Portfolio-level carbon forcing.
//!
//! Each selected facility contributes a small fraction of a °C based on
//! coarse classifications of its free-text descriptors; the aggregate
//! feeds the climate trajectory simulator.

use ecosite_schemas::facility::FacilityRecord;

/// Workload class inferred from the facility's name and notes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacilityClass {
    Hpc,
    Colo,
    Standard,
}

/// Build size inferred from the land-price descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacilitySize {
    Large,
    Medium,
}

/// Grid character inferred from latitude alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridRegion {
    Coal,
    Renewable,
    Average,
}

/// Classifies the workload from name and notes text. "hpc" wins over
/// "colo" when both appear; electricity text is deliberately not
/// consulted here.
pub fn classify_type(name: &str, notes: &str) -> FacilityClass {
    let text = format!("{} {}", name, notes).to_lowercase();
    if text.contains("hpc") {
        FacilityClass::Hpc
    } else if text.contains("colo") {
        FacilityClass::Colo
    } else {
        FacilityClass::Standard
    }
}

/// A land price mentioning "2.5M" marks a large build; everything else is
/// treated as medium.
pub fn classify_size(land_price: &str) -> FacilitySize {
    if land_price.to_lowercase().contains("2.5m") {
        FacilitySize::Large
    } else {
        FacilitySize::Medium
    }
}

/// Coarse latitude banding: southern grids lean coal-heavy, northern
/// grids lean renewable.
pub fn classify_region(latitude: f64) -> GridRegion {
    if latitude < 30.0 {
        GridRegion::Coal
    } else if latitude > 45.0 {
        GridRegion::Renewable
    } else {
        GridRegion::Average
    }
}

/// Warming contribution of a single facility in °C.
pub fn facility_contribution(facility: &FacilityRecord) -> f64 {
    let mut base = match classify_type(&facility.name, &facility.notes) {
        FacilityClass::Hpc => 0.01,
        FacilityClass::Colo => 0.007,
        FacilityClass::Standard => 0.005,
    };

    if classify_size(&facility.land_price) == FacilitySize::Large {
        base += 0.003;
    }

    match classify_region(facility.latitude) {
        GridRegion::Coal => base += 0.002,
        GridRegion::Renewable => base -= 0.001,
        GridRegion::Average => {}
    }

    base
}

/// Aggregate warming contribution of a whole portfolio. An empty
/// portfolio contributes exactly 0.
pub fn aggregate_contribution(items: &[FacilityRecord]) -> f64 {
    items.iter().map(facility_contribution).sum()
}

/// Cart-style daily carbon footprint heuristic (metric tons per day),
/// driven by name/notes keywords and halved for renewable electricity.
pub fn carbon_footprint(items: &[FacilityRecord]) -> f64 {
    items.iter().map(footprint_for).sum()
}

fn footprint_for(facility: &FacilityRecord) -> f64 {
    let name = facility.name.to_lowercase();
    let notes = facility.notes.to_lowercase();

    let mut base = if name.contains("eco") || notes.contains("eco") {
        0.4
    } else if name.contains("next-gen") || notes.contains("next-gen") {
        0.1
    } else if name.contains("standard") || notes.contains("standard") {
        0.8
    } else {
        1.0
    };

    if facility.electricity.to_lowercase().contains("renewable") {
        base *= 0.5;
    }

    base
}

#[cfg(test)]
mod tests {
    use super::*;

    fn facility(name: &str, land_price: &str, electricity: &str, notes: &str, lat: f64) -> FacilityRecord {
        FacilityRecord {
            latitude: lat,
            longitude: -90.0,
            name: name.to_string(),
            land_price: land_price.to_string(),
            electricity: electricity.to_string(),
            notes: notes.to_string(),
            impact: None,
        }
    }

    #[test]
    fn empty_portfolio_contributes_nothing() {
        let portfolio = ecosite_schemas::portfolio::Portfolio::empty("nobody");
        assert_eq!(aggregate_contribution(&portfolio.items), 0.0);
        assert_eq!(carbon_footprint(&portfolio.items), 0.0);
    }

    #[test]
    fn hpc_large_coal_site_contributes_exactly_0_015() {
        let site = facility("Gulf HPC Campus", "$2.5M per acre", "Grid mix", "", 25.0);
        let got = facility_contribution(&site);
        assert!((got - 0.015).abs() < 1e-12, "got {}", got);
    }

    #[test]
    fn type_classification_ignores_electricity_text() {
        // "Renewable" in the electricity field must not influence the
        // workload class; only name and notes count.
        let site = facility("EcoHub Site", "", "100% Renewable PPA", "", 35.0);
        assert_eq!(classify_type(&site.name, &site.notes), FacilityClass::Standard);

        let hpc = facility("EcoHub Site", "", "coal-heavy grid", "hpc expansion planned", 35.0);
        assert_eq!(classify_type(&hpc.name, &hpc.notes), FacilityClass::Hpc);
    }

    #[test]
    fn hpc_takes_precedence_over_colo() {
        assert_eq!(classify_type("Metro Colo + HPC annex", ""), FacilityClass::Hpc);
        assert_eq!(classify_type("Metro Colo Hall", ""), FacilityClass::Colo);
    }

    #[test]
    fn size_matches_case_insensitively() {
        assert_eq!(classify_size("$2.5M per acre"), FacilitySize::Large);
        assert_eq!(classify_size("approx 2.5m total"), FacilitySize::Large);
        assert_eq!(classify_size("$900K"), FacilitySize::Medium);
    }

    #[test]
    fn region_bands_split_on_latitude() {
        assert_eq!(classify_region(25.0), GridRegion::Coal);
        assert_eq!(classify_region(30.0), GridRegion::Average);
        assert_eq!(classify_region(45.0), GridRegion::Average);
        assert_eq!(classify_region(47.0), GridRegion::Renewable);
    }

    #[test]
    fn renewable_region_discounts_contribution() {
        let site = facility("Northern Colo", "", "", "", 47.0);
        let got = facility_contribution(&site);
        assert!((got - 0.006).abs() < 1e-12);
    }

    #[test]
    fn aggregation_sums_across_sites() {
        let items = vec![
            facility("Gulf HPC Campus", "$2.5M per acre", "", "", 25.0), // 0.015
            facility("Northern Colo", "", "", "", 47.0),                 // 0.006
            facility("Plain Site", "", "", "", 35.0),                    // 0.005
        ];
        let got = aggregate_contribution(&items);
        assert!((got - 0.026).abs() < 1e-12);
    }

    #[test]
    fn footprint_halves_for_renewable_electricity() {
        let eco = facility("Eco Park", "", "100% Renewable", "", 35.0);
        assert!((carbon_footprint(&[eco]) - 0.2).abs() < 1e-12);

        let plain = facility("River Site", "", "Grid mix", "", 35.0);
        assert!((carbon_footprint(&[plain]) - 1.0).abs() < 1e-12);

        let next_gen = facility("Next-Gen Hall", "", "", "", 35.0);
        assert!((carbon_footprint(&[next_gen]) - 0.1).abs() < 1e-12);
    }
}
