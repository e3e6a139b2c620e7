//! Run-directory reports: JSON artifacts plus printed summaries.

use anyhow::{Context, Result};
use ecosite_schemas::{
    facility::{FacilityRecord, ImpactMetrics},
    portfolio::Portfolio,
    projection::SimulationOutcome,
};
use serde::Serialize;
use std::{fs, path::Path};

/// Creates a timestamped run directory under `./data/runs`.
pub fn create_run_dir(tag: &str) -> Result<String> {
    let output_dir = format!(
        "./data/runs/{}_{}",
        tag,
        chrono::Utc::now().format("%Y%m%d_%H%M%S")
    );
    fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create output directory: {}", output_dir))?;
    Ok(output_dir)
}

/// Writes the single-site assessment JSON and prints a readable summary.
pub fn write_assessment(
    output_dir: &str,
    site: &FacilityRecord,
    metrics: &ImpactMetrics,
) -> Result<()> {
    let mut assessed = site.clone();
    assessed.impact = Some(metrics.clone());

    let path = Path::new(output_dir).join("assessment.json");
    let json = serde_json::to_string_pretty(&assessed)?;
    fs::write(&path, json)
        .with_context(|| format!("Failed to write assessment to {:?}", path))?;

    println!("\n[Report] Assessment for '{}':", site.name);
    println!("[Report]   Eco-score:            {} / 100", metrics.eco_score);
    println!("[Report]   Carbon impact:        {:.0} t CO2e/yr", metrics.carbon_impact);
    println!("[Report]   Local temp increase:  {:.3} °C", metrics.temp_increase);
    println!(
        "[Report]   With clustering:      {:.3} °C ({} nearby facilities)",
        metrics.compounded_temp_increase, metrics.datacenter_density
    );
    println!("[Report]   Water usage:          {:.0} gal", metrics.water_usage);
    println!("[Report]   Renewable access:     {}%", metrics.renewable_access);
    println!("[Report] Assessment saved to {:?}", path);
    Ok(())
}

#[derive(Serialize)]
struct ForecastReport<'a> {
    username: &'a str,
    site_count: usize,
    portfolio_contribution_c: f64,
    daily_carbon_footprint_tons: f64,
    outcome: &'a SimulationOutcome,
}

/// Writes the portfolio forecast JSON and prints the headline numbers.
pub fn write_forecast(
    output_dir: &str,
    portfolio: &Portfolio,
    contribution: f64,
    footprint: f64,
    outcome: &SimulationOutcome,
) -> Result<()> {
    let report = ForecastReport {
        username: &portfolio.username,
        site_count: portfolio.items.len(),
        portfolio_contribution_c: contribution,
        daily_carbon_footprint_tons: footprint,
        outcome,
    };

    let path = Path::new(output_dir).join("forecast.json");
    let json = serde_json::to_string_pretty(&report)?;
    fs::write(&path, json)
        .with_context(|| format!("Failed to write forecast to {:?}", path))?;

    println!(
        "\n[Report] Forecast for '{}' ({} sites):",
        portfolio.username,
        portfolio.items.len()
    );
    println!("[Report]   Portfolio contribution:  {:.4} °C", contribution);
    println!("[Report]   Daily carbon footprint:  {:.2} t CO2e", footprint);
    println!(
        "[Report]   Years to threshold:      {} (with sites)",
        outcome.total_time_to_end
    );
    println!(
        "[Report]   Extra years if removed:  {}",
        outcome.time_datacenters_removed
    );
    println!("[Report] Forecast saved to {:?}", path);
    Ok(())
}
