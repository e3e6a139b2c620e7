use crate::geo::Coordinate;
use serde::{Deserialize, Serialize};

/// Derived environmental impact metrics for one facility.
///
/// These are pure derived state: never persisted, recomputed on every
/// evaluation from the facility's coordinates and the static reference
/// tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactMetrics {
    /// Composite environmental desirability score, 1-100, higher is better.
    pub eco_score: i32,
    /// Metric tons CO2e per year.
    pub carbon_impact: f64,
    /// Local temperature increase in °C.
    pub temp_increase: f64,
    /// Water usage in gallons, after any density competition adjustment.
    pub water_usage: f64,
    /// Renewable grid penetration, percent (truncated to integer).
    pub renewable_access: i32,
    /// Count of datacenters within the clustering radius.
    pub datacenter_density: i32,
    /// 0-100 scale, higher means more clustering impact.
    pub density_impact_score: i32,
    /// Temperature increase in °C including the clustering effect.
    pub compounded_temp_increase: f64,
    /// Water stress multiplier, >= 1.0.
    pub water_competition: f64,
}

/// One real or candidate data-center site.
///
/// The free-text fields come straight from the facility source: the display
/// name may carry a trailing two-letter region code ("..., VA"), the land
/// price and electricity descriptors are unparsed marketing text, and the
/// notes may hold a JSON-like payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacilityRecord {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub land_price: String,
    #[serde(default)]
    pub electricity: String,
    #[serde(default)]
    pub notes: String,
    /// Present only after the impact model has run for this record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impact: Option<ImpactMetrics>,
}

impl FacilityRecord {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }

    /// Attempts to parse the notes field as a JSON document. Notes are
    /// free text, so `None` is the common case.
    pub fn notes_json(&self) -> Option<serde_json::Value> {
        serde_json::from_str(&self.notes).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notes_json_parses_structured_notes_only() {
        let mut facility = FacilityRecord {
            latitude: 39.05,
            longitude: -77.46,
            name: "Ashburn Gateway, VA".to_string(),
            land_price: "$2.5M per acre".to_string(),
            electricity: "Mixed grid".to_string(),
            notes: r#"{"zoning": "industrial"}"#.to_string(),
            impact: None,
        };
        assert!(facility.notes_json().is_some());

        facility.notes = "plain prose notes".to_string();
        assert!(facility.notes_json().is_none());
    }
}
