use crate::{error::EcositeError, logger::TrajectoryLogger};
use ecosite_schemas::projection::{ClimateProjection, DegradationLevel, SimulationOutcome};

pub const DEFAULT_START_YEAR: i32 = 2025;
pub const DEFAULT_END_YEAR: i32 = 2100;

/// Unrounded survivability at or below this value counts as a threshold
/// crossing.
pub const SURVIVABILITY_THRESHOLD: f64 = 10.0;

const BASELINE_TEMP_START_C: f64 = 1.2;
const BASELINE_TEMP_END_C: f64 = 3.7;
const RESERVES_START: f64 = 1.0;
const RESERVES_END: f64 = 0.2;

/// A deterministic fold over an inclusive year range, producing the
/// with-portfolio and without-portfolio climate trajectories and their
/// summary statistics.
pub struct ClimateSimulation {
    contribution: f64,
    start_year: i32,
    end_year: i32,
    logger: Option<TrajectoryLogger>,
}

impl ClimateSimulation {
    pub(super) fn new(
        contribution: f64,
        start_year: i32,
        end_year: i32,
        logger: Option<TrajectoryLogger>,
    ) -> Self {
        Self { contribution, start_year, end_year, logger }
    }

    pub fn start_year(&self) -> i32 {
        self.start_year
    }

    pub fn end_year(&self) -> i32 {
        self.end_year
    }

    pub fn contribution(&self) -> f64 {
        self.contribution
    }

    /// Runs the simulation across the full year range.
    ///
    /// Both scenarios are stepped together, year by year; the first year
    /// whose unrounded survivability drops to the threshold fixes that
    /// scenario's crossing offset. A scenario that never crosses is
    /// assigned the full horizon length.
    pub fn run(&mut self) -> Result<SimulationOutcome, EcositeError> {
        let horizon = self.end_year - self.start_year;

        let mut with_sites = Vec::with_capacity((horizon + 1) as usize);
        let mut without_sites = Vec::with_capacity((horizon + 1) as usize);
        let mut with_crossing: Option<i32> = None;
        let mut without_crossing: Option<i32> = None;

        for year in self.start_year..=self.end_year {
            let baseline = self.baseline_temperature(year);
            let reserves = self.fossil_fuel_fraction(year);

            let with_point = project_year(year, baseline, self.contribution, reserves);
            let without_point = project_year(year, baseline, 0.0, reserves);

            if with_crossing.is_none()
                && survivability(with_point.total_temperature, reserves) <= SURVIVABILITY_THRESHOLD
            {
                with_crossing = Some(year - self.start_year);
            }
            if without_crossing.is_none()
                && survivability(without_point.total_temperature, reserves) <= SURVIVABILITY_THRESHOLD
            {
                without_crossing = Some(year - self.start_year);
            }

            if let Some(logger) = &mut self.logger {
                logger.log_point("with_sites", &with_point)?;
                logger.log_point("without_sites", &without_point)?;
            }

            with_sites.push(with_point);
            without_sites.push(without_point);
        }

        let total_time_to_end = with_crossing.unwrap_or(horizon);
        let without_time = without_crossing.unwrap_or(horizon);

        Ok(SimulationOutcome {
            with_sites,
            without_sites,
            total_time_to_end,
            time_datacenters_removed: without_time - total_time_to_end,
        })
    }

    /// Baseline warming: linear from 1.2 °C at the start year to 3.7 °C at
    /// the end year.
    pub fn baseline_temperature(&self, year: i32) -> f64 {
        let frac = (year - self.start_year) as f64 / (self.end_year - self.start_year) as f64;
        BASELINE_TEMP_START_C + frac * (BASELINE_TEMP_END_C - BASELINE_TEMP_START_C)
    }

    /// Fossil-fuel reserve fraction: linear decay from 1.0 to 0.2 over the
    /// horizon.
    pub fn fossil_fuel_fraction(&self, year: i32) -> f64 {
        let frac = (year - self.start_year) as f64 / (self.end_year - self.start_year) as f64;
        RESERVES_START - frac * (RESERVES_START - RESERVES_END)
    }
}

fn project_year(year: i32, baseline: f64, contribution: f64, reserves: f64) -> ClimateProjection {
    let total = baseline + contribution;
    ClimateProjection {
        year,
        baseline_temperature: baseline,
        site_contribution: contribution,
        total_temperature: total,
        fossil_fuel_reserves: reserves,
        survivability: survivability(total, reserves).round() as i32,
        degradation_level: DegradationLevel::from_temperature(total),
    }
}

/// Habitability proxy on a 0-100 scale, floored at zero: temperature and
/// reserve depletion both drag it down.
pub fn survivability(total_temp_c: f64, reserves: f64) -> f64 {
    (100.0 - total_temp_c * 20.0 - (1.0 - reserves) * 40.0).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::builder::SimulationBuilder;

    fn run_with(contribution: f64) -> SimulationOutcome {
        SimulationBuilder::new()
            .with_contribution(contribution)
            .build()
            .unwrap()
            .run()
            .unwrap()
    }

    #[test]
    fn baseline_and_reserves_hit_documented_endpoints() {
        let sim = SimulationBuilder::new().build().unwrap();
        assert!((sim.baseline_temperature(2025) - 1.2).abs() < 1e-12);
        assert!((sim.baseline_temperature(2100) - 3.7).abs() < 1e-9);
        assert!((sim.fossil_fuel_fraction(2025) - 1.0).abs() < 1e-12);
        assert!((sim.fossil_fuel_fraction(2100) - 0.2).abs() < 1e-9);
    }

    #[test]
    fn zero_contribution_makes_scenarios_identical() {
        let outcome = run_with(0.0);
        assert_eq!(outcome.with_sites, outcome.without_sites);
        assert_eq!(outcome.time_datacenters_removed, 0);
    }

    #[test]
    fn tracks_cover_the_inclusive_year_range() {
        let outcome = run_with(0.01);
        assert_eq!(outcome.with_sites.len(), 76);
        assert_eq!(outcome.with_sites.first().unwrap().year, 2025);
        assert_eq!(outcome.with_sites.last().unwrap().year, 2100);
    }

    #[test]
    fn survivability_stays_in_range_and_reaches_zero() {
        let outcome = run_with(0.5);
        for point in outcome.with_sites.iter().chain(&outcome.without_sites) {
            assert!((0..=100).contains(&point.survivability));
        }
        // Late-century warming drives the proxy to its floor.
        assert_eq!(outcome.with_sites.last().unwrap().survivability, 0);
        assert_eq!(survivability(10.0, 0.0), 0.0);
    }

    #[test]
    fn contribution_is_constant_across_the_with_track() {
        let outcome = run_with(0.015);
        assert!(outcome.with_sites.iter().all(|p| p.site_contribution == 0.015));
        assert!(outcome.without_sites.iter().all(|p| p.site_contribution == 0.0));
    }

    #[test]
    fn first_crossing_offsets_match_the_closed_form() {
        // Unrounded survivability along the fold is 76 - 82f - 20c with
        // f = offset/75, so the first offsets at or under the threshold
        // are 61 (c = 0) and 52 (c = 0.5).
        let outcome = run_with(0.5);
        assert_eq!(outcome.total_time_to_end, 52);
        assert_eq!(outcome.time_datacenters_removed, 61 - 52);
    }

    #[test]
    fn extra_years_never_negative_for_nonnegative_contribution() {
        for c in [0.0, 0.005, 0.015, 0.1, 0.5, 2.0] {
            let outcome = run_with(c);
            assert!(
                outcome.time_datacenters_removed >= 0,
                "contribution {} produced {}",
                c,
                outcome.time_datacenters_removed
            );
        }
    }

    #[test]
    fn degradation_labels_follow_total_temperature() {
        let outcome = run_with(0.0);
        let first = outcome.with_sites.first().unwrap();
        let last = outcome.with_sites.last().unwrap();
        assert_eq!(first.degradation_level, DegradationLevel::Low);
        assert_eq!(last.degradation_level, DegradationLevel::Severe);
    }
}
