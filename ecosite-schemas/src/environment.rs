use serde::{Deserialize, Serialize};

/// The resolved environmental attribute bundle for one coordinate.
///
/// Ephemeral by design: it exists only for the duration of one impact-model
/// evaluation and is never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentalProfile {
    /// Regional grid emissions intensity, kg CO2e/kWh.
    pub grid_emissions_intensity: f64,
    /// Share of grid power from renewables, 0-100.
    pub renewable_penetration: f64,
    /// Water stress index, 0-5, higher is more scarce.
    pub water_scarcity_index: f64,
    /// Average annual temperature, °C.
    pub ambient_temperature: f64,
    /// Count of datacenters within the clustering radius.
    pub datacenter_density: u32,
    /// Composite natural-disaster risk, 0-1.
    pub natural_disaster_risk: f64,
    /// Ecosystem vulnerability, 0-1.
    pub biodiversity_sensitivity: f64,
    /// Land conversion impact, 0-1.
    pub land_use_change_impact: f64,
    /// Impact on local communities, 0-1.
    pub socioeconomic_impact: f64,
}
