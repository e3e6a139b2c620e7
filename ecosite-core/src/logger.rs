use csv::Writer;
use ecosite_schemas::projection::ClimateProjection;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;

/// One flattened row of the trajectory CSV, shared by the writer here and
/// by downstream consumers that read the log back (e.g. plotting).
#[derive(Debug, Serialize, Deserialize)]
pub struct TrajectoryRow {
    pub scenario: String,
    pub year: i32,
    pub baseline_temperature: f64,
    pub site_contribution: f64,
    pub total_temperature: f64,
    pub fossil_fuel_reserves: f64,
    pub survivability: i32,
    pub degradation_level: String,
}

/// Writes simulated climate projection points to a CSV file, one row per
/// scenario-year.
pub struct TrajectoryLogger {
    writer: Writer<fs::File>,
}

impl TrajectoryLogger {
    pub fn new(path: &str) -> Result<Self, io::Error> {
        let writer = Writer::from_path(path)?;
        Ok(Self { writer })
    }

    pub fn log_point(&mut self, scenario: &str, point: &ClimateProjection) -> Result<(), anyhow::Error> {
        let row = TrajectoryRow {
            scenario: scenario.to_string(),
            year: point.year,
            baseline_temperature: point.baseline_temperature,
            site_contribution: point.site_contribution,
            total_temperature: point.total_temperature,
            fossil_fuel_reserves: point.fossil_fuel_reserves,
            survivability: point.survivability,
            degradation_level: point.degradation_level.to_string(),
        };

        self.writer.serialize(row)?;
        self.writer.flush()?;
        Ok(())
    }
}
