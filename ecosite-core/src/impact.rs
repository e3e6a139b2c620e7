//! The per-facility impact model.
//!
//! Deterministic and pure: a resolved attribute bundle in, itemized impact
//! metrics and a composite eco-score out. Facility assumptions are fixed
//! at a standard hyperscale build (15 MW IT load, 12 ha footprint).

use crate::resolver;
use ecosite_schemas::environment::EnvironmentalProfile;
use ecosite_schemas::facility::{FacilityRecord, ImpactMetrics};

const IT_LOAD_MW: f64 = 15.0;
const HOURS_PER_YEAR: f64 = 8760.0;
const WATER_USE_L_PER_KWH: f64 = 1.8;
const LAND_USE_HECTARES: f64 = 12.0;
const LITERS_PER_GALLON: f64 = 3.785;

// Normalization references derived from planetary-boundaries research.
const CARBON_NORM: f64 = 5_000_000.0; // kg CO2e
const WATER_NORM: f64 = 50_000_000.0; // liter-scarcity units
const TEMP_NORM: f64 = 2.0; // °C
const LAND_NORM: f64 = 10.0; // hectare-impact units

const WEIGHT_CARBON: f64 = 0.40;
const WEIGHT_WATER: f64 = 0.25;
const WEIGHT_TEMP: f64 = 0.20;
const WEIGHT_LAND: f64 = 0.10;
const WEIGHT_SOCIAL: f64 = 0.05;

/// Resolves the attribute bundle for a facility and evaluates the impact
/// model in one step. This is what the presentation layer calls when a
/// user inspects a property.
pub fn assess(facility: &FacilityRecord) -> ImpactMetrics {
    evaluate(&resolver::resolve(facility))
}

/// Evaluates the impact model for an already-resolved attribute bundle.
pub fn evaluate(profile: &EnvironmentalProfile) -> ImpactMetrics {
    let pue = location_pue(profile.ambient_temperature, profile.datacenter_density);

    let total_energy_mwh = IT_LOAD_MW * pue * HOURS_PER_YEAR;

    // Carbon from regional grid intensity, water from the regional
    // scarcity index (Water Footprint Assessment style).
    let carbon_emissions_kg = total_energy_mwh * 1000.0 * profile.grid_emissions_intensity;
    let water_consumption_l = total_energy_mwh * 1000.0 * WATER_USE_L_PER_KWH;
    let water_impact = water_consumption_l * profile.water_scarcity_index;

    // Heat rejected to the surroundings, MMBtu/hr.
    let heat_rejection = IT_LOAD_MW * (1.0 - 1.0 / pue) * 3.412;
    let temp_impact = temperature_impact(
        heat_rejection,
        profile.datacenter_density,
        profile.ambient_temperature,
    );

    let land_impact =
        LAND_USE_HECTARES * profile.land_use_change_impact * profile.biodiversity_sensitivity;

    let score = eco_score(
        carbon_emissions_kg,
        water_impact,
        temp_impact,
        land_impact,
        profile.socioeconomic_impact,
    );

    let mut metrics = ImpactMetrics {
        eco_score: score.clamp(1.0, 100.0) as i32,
        carbon_impact: carbon_emissions_kg / 1000.0, // metric tons
        temp_increase: temp_impact,
        water_usage: water_consumption_l / LITERS_PER_GALLON,
        renewable_access: profile.renewable_penetration as i32,
        datacenter_density: profile.datacenter_density as i32,
        density_impact_score: density_impact_score(profile.datacenter_density),
        compounded_temp_increase: temp_impact,
        water_competition: 1.0,
    };

    // Clustering compounds both heat and water stress, logarithmically.
    if profile.datacenter_density > 0 {
        let density_factor = (profile.datacenter_density as f64).ln_1p() / 10.0f64.ln_1p();
        metrics.compounded_temp_increase = temp_impact * (1.0 + density_factor);
        metrics.water_competition = 1.0 + density_factor;
        metrics.water_usage *= metrics.water_competition;
    }

    metrics
}

/// PUE from the ambient climate, in four ASHRAE-style temperature bands,
/// with a small penalty when neighboring facilities degrade cooling.
pub fn location_pue(ambient_temp_c: f64, density: u32) -> f64 {
    let mut pue = if ambient_temp_c < 10.0 {
        // Cold climate, efficient free cooling.
        1.15 + (ambient_temp_c + 10.0) * 0.005
    } else if ambient_temp_c < 18.0 {
        1.2 + (ambient_temp_c - 10.0) * 0.01
    } else if ambient_temp_c < 24.0 {
        1.3 + (ambient_temp_c - 18.0) * 0.025
    } else {
        1.45 + (ambient_temp_c - 24.0) * 0.04
    };

    if density > 0 {
        pue += 0.01 * 0.5f64.min((density as f64).log10() / 2.0);
    }

    pue
}

/// Local temperature increase (°C) from rejected heat, scaled by a
/// non-linear clustering multiplier and a regional dissipation factor.
pub fn temperature_impact(heat_rejection_mmbtu_hr: f64, density: u32, ambient_temp_c: f64) -> f64 {
    let base_increase = 0.02 * heat_rejection_mmbtu_hr;

    let density_multiplier = if density > 0 {
        1.0 + (density as f64).powf(0.7) / 10.0
    } else {
        1.0
    };

    // Hot regions dissipate heat less efficiently.
    let climate_factor = if ambient_temp_c > 25.0 {
        1.0 + (ambient_temp_c - 25.0) * 0.02
    } else if ambient_temp_c < 10.0 {
        0.8
    } else {
        1.0
    };

    base_increase * density_multiplier * climate_factor
}

/// Weighted composite score on a 1-100 scale, higher is better. Carbon,
/// water, temperature, and land impacts are normalized against fixed
/// references; the socioeconomic factor is already 0-1 and used directly.
fn eco_score(
    carbon_emissions_kg: f64,
    water_impact: f64,
    temp_impact: f64,
    land_impact: f64,
    socioeconomic_impact: f64,
) -> f64 {
    let weighted_impact = (carbon_emissions_kg / CARBON_NORM) * WEIGHT_CARBON
        + (water_impact / WATER_NORM) * WEIGHT_WATER
        + (temp_impact / TEMP_NORM) * WEIGHT_TEMP
        + (land_impact / LAND_NORM) * WEIGHT_LAND
        + socioeconomic_impact * WEIGHT_SOCIAL;

    100.0 - weighted_impact * 100.0
}

/// 0-100 clustering impact score; zero for isolated sites, logarithmic in
/// the neighbor count, capped at 100.
pub fn density_impact_score(density: u32) -> i32 {
    if density == 0 {
        0
    } else {
        100.0f64.min(20.0 * (density as f64).ln_1p()) as i32
    }
}
