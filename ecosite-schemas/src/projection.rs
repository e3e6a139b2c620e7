use serde::{Deserialize, Serialize};
use std::fmt;

/// Qualitative degradation label bucketed from total projected temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DegradationLevel {
    Low,
    Moderate,
    High,
    Severe,
}

impl DegradationLevel {
    pub fn from_temperature(total_temp_c: f64) -> Self {
        if total_temp_c < 2.0 {
            DegradationLevel::Low
        } else if total_temp_c < 2.5 {
            DegradationLevel::Moderate
        } else if total_temp_c < 3.0 {
            DegradationLevel::High
        } else {
            DegradationLevel::Severe
        }
    }
}

impl fmt::Display for DegradationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DegradationLevel::Low => "Low",
            DegradationLevel::Moderate => "Moderate",
            DegradationLevel::High => "High",
            DegradationLevel::Severe => "Severe",
        };
        write!(f, "{}", label)
    }
}

/// One simulated year in a climate trajectory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClimateProjection {
    pub year: i32,
    /// Baseline warming in °C, independent of the portfolio.
    pub baseline_temperature: f64,
    /// Extra °C attributed to the portfolio; constant within one run.
    pub site_contribution: f64,
    pub total_temperature: f64,
    /// Remaining fossil-fuel reserve fraction, 1.0 decaying to 0.2.
    pub fossil_fuel_reserves: f64,
    /// Habitability proxy, 0-100, rounded for reporting.
    pub survivability: i32,
    pub degradation_level: DegradationLevel,
}

/// The full result of one simulation run: both scenario tracks plus the
/// derived summary scalars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationOutcome {
    #[serde(rename = "with_data_centers")]
    pub with_sites: Vec<ClimateProjection>,
    #[serde(rename = "without_data_centers")]
    pub without_sites: Vec<ClimateProjection>,
    /// Years from the start of the run until the with-sites scenario
    /// crosses the survivability threshold (or the full horizon length).
    pub total_time_to_end: i32,
    /// Extra years bought by removing the portfolio's contribution.
    pub time_datacenters_removed: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degradation_buckets_match_thresholds() {
        assert_eq!(DegradationLevel::from_temperature(1.99), DegradationLevel::Low);
        assert_eq!(DegradationLevel::from_temperature(2.0), DegradationLevel::Moderate);
        assert_eq!(DegradationLevel::from_temperature(2.49), DegradationLevel::Moderate);
        assert_eq!(DegradationLevel::from_temperature(2.5), DegradationLevel::High);
        assert_eq!(DegradationLevel::from_temperature(3.0), DegradationLevel::Severe);
        assert_eq!(DegradationLevel::from_temperature(5.0), DegradationLevel::Severe);
    }

    #[test]
    fn degradation_labels_render_as_plain_words() {
        assert_eq!(DegradationLevel::Severe.to_string(), "Severe");
        assert_eq!(DegradationLevel::Low.to_string(), "Low");
    }
}
