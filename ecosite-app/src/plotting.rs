//! This module is responsible for generating visualizations from the
//! trajectory log written during a forecast run.

use anyhow::Result;
use csv;
use ecosite_core::logger::TrajectoryRow;
use plotters::prelude::*;

/// The main function to generate and save all plots for a forecast run.
pub fn generate_all_plots(output_dir: &str, log_path: &str) -> Result<()> {
    println!("[Plotting] Generating graphs from trajectory data...");

    let rows = parse_log_file(log_path)?;
    if rows.is_empty() {
        println!("[Plotting] Warning: No data to plot.");
        return Ok(());
    }

    let with_sites: Vec<&TrajectoryRow> =
        rows.iter().filter(|r| r.scenario == "with_sites").collect();
    let without_sites: Vec<&TrajectoryRow> =
        rows.iter().filter(|r| r.scenario == "without_sites").collect();

    plot_temperature_trajectory(output_dir, &with_sites, &without_sites)?;
    plot_survivability(output_dir, &with_sites, &without_sites)?;

    println!("[Plotting] Graphs have been saved to '{}'.", output_dir);
    Ok(())
}

/// Parses the trajectory log CSV file back into rows.
fn parse_log_file(log_path: &str) -> Result<Vec<TrajectoryRow>> {
    let mut reader = csv::Reader::from_path(log_path)?;
    let mut rows = Vec::new();
    for result in reader.deserialize() {
        let row: TrajectoryRow = result?;
        rows.push(row);
    }
    Ok(rows)
}

/// Generates a line chart of total projected temperature for both
/// scenarios, with the shared baseline dashed underneath.
fn plot_temperature_trajectory(
    output_dir: &str,
    with_sites: &[&TrajectoryRow],
    without_sites: &[&TrajectoryRow],
) -> Result<()> {
    let path = format!("{}/1_temperature_trajectory.png", output_dir);
    let root = BitMapBackend::new(&path, (1024, 768)).into_drawing_area();
    root.fill(&WHITE)?;

    let min_year = with_sites.first().map_or(2025, |r| r.year);
    let max_year = with_sites.last().map_or(2100, |r| r.year);
    let max_temp = with_sites
        .iter()
        .map(|r| r.total_temperature)
        .fold(0.0, f64::max);

    let mut chart = ChartBuilder::on(&root)
        .caption("Projected Warming Over Time", ("sans-serif", 50).into_font())
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(50)
        .build_cartesian_2d(min_year..max_year, 0f64..max_temp * 1.1)?;

    chart
        .configure_mesh()
        .x_desc("Year")
        .y_desc("Temperature above pre-industrial (°C)")
        .draw()?;

    chart
        .draw_series(LineSeries::new(
            with_sites.iter().map(|r| (r.year, r.total_temperature)),
            RED.stroke_width(3),
        ))?
        .label("With portfolio")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED.filled()));

    chart
        .draw_series(LineSeries::new(
            without_sites.iter().map(|r| (r.year, r.total_temperature)),
            BLUE.stroke_width(3),
        ))?
        .label("Without portfolio")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE.filled()));

    let baseline_series = with_sites.iter().map(|r| (r.year, r.baseline_temperature));
    chart
        .draw_series(DashedLineSeries::new(baseline_series, 5, 5, (&BLACK).into()))?
        .label("Baseline")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLACK.filled()));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;
    root.present()?;
    Ok(())
}

/// Generates a line chart of the survivability proxy for both scenarios.
fn plot_survivability(
    output_dir: &str,
    with_sites: &[&TrajectoryRow],
    without_sites: &[&TrajectoryRow],
) -> Result<()> {
    let path = format!("{}/2_survivability.png", output_dir);
    let root = BitMapBackend::new(&path, (1024, 768)).into_drawing_area();
    root.fill(&WHITE)?;

    let min_year = with_sites.first().map_or(2025, |r| r.year);
    let max_year = with_sites.last().map_or(2100, |r| r.year);

    let mut chart = ChartBuilder::on(&root)
        .caption("Survivability Index Over Time", ("sans-serif", 50).into_font())
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(50)
        .build_cartesian_2d(min_year..max_year, 0i32..100i32)?;

    chart
        .configure_mesh()
        .x_desc("Year")
        .y_desc("Survivability (0-100)")
        .draw()?;

    chart
        .draw_series(LineSeries::new(
            with_sites.iter().map(|r| (r.year, r.survivability)),
            RED.stroke_width(3),
        ))?
        .label("With portfolio")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED.filled()));

    chart
        .draw_series(LineSeries::new(
            without_sites.iter().map(|r| (r.year, r.survivability)),
            BLUE.stroke_width(3),
        ))?
        .label("Without portfolio")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE.filled()));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;
    root.present()?;
    Ok(())
}
