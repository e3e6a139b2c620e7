use crate::{
    error::EcositeError,
    logger::TrajectoryLogger,
    simulation::engine::{ClimateSimulation, DEFAULT_END_YEAR, DEFAULT_START_YEAR},
};

/// A fluent builder for constructing a `ClimateSimulation`.
///
/// The year range defaults to 2025-2100; the portfolio contribution is the
/// only required input. Optionally wires up per-year CSV trajectory
/// logging.
#[derive(Default)]
pub struct SimulationBuilder {
    contribution: f64,
    start_year: Option<i32>,
    end_year: Option<i32>,
    log_path: Option<String>,
}

impl SimulationBuilder {
    /// Creates a new builder with a zero portfolio contribution.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the aggregate portfolio warming contribution in °C.
    pub fn with_contribution(mut self, degrees_c: f64) -> Self {
        self.contribution = degrees_c;
        self
    }

    /// Overrides the simulated year range (inclusive on both ends).
    pub fn with_years(mut self, start_year: i32, end_year: i32) -> Self {
        self.start_year = Some(start_year);
        self.end_year = Some(end_year);
        self
    }

    /// Configures the simulation to write per-year trajectory rows to the
    /// specified CSV file.
    pub fn with_trajectory_logging_to_file(mut self, path: &str) -> Self {
        self.log_path = Some(path.to_string());
        self
    }

    /// Consumes the builder and returns a fully configured
    /// `ClimateSimulation`.
    ///
    /// # Errors
    ///
    /// Returns an `EcositeError` if the year range is empty or reversed,
    /// if the contribution is negative or non-finite, or if the trajectory
    /// log file cannot be created.
    pub fn build(self) -> Result<ClimateSimulation, EcositeError> {
        let start_year = self.start_year.unwrap_or(DEFAULT_START_YEAR);
        let end_year = self.end_year.unwrap_or(DEFAULT_END_YEAR);

        if end_year <= start_year {
            return Err(EcositeError::ConfigError(format!(
                "simulation year range {}..={} is empty",
                start_year, end_year
            )));
        }
        if !self.contribution.is_finite() || self.contribution < 0.0 {
            return Err(EcositeError::ConfigError(format!(
                "portfolio contribution {} must be a non-negative number",
                self.contribution
            )));
        }

        let logger = match self.log_path {
            Some(path) => Some(
                TrajectoryLogger::new(&path).map_err(|e| EcositeError::FileIO(path.clone(), e))?,
            ),
            None => None,
        };

        Ok(ClimateSimulation::new(self.contribution, start_year, end_year, logger))
    }
}
