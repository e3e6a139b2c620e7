use anyhow::Result;
use clap::{Parser, Subcommand};
use ecosite_core::{impact, portfolio, simulation::builder::SimulationBuilder};
use std::path::Path;

mod config;
mod plotting;
mod report;

#[derive(Parser)]
#[command(
    name = "ecosite",
    about = "Environmental impact and climate trajectory engine for data-center siting"
)]
struct Cli {
    /// Directory holding the site catalogs.
    #[arg(long, default_value = "./data")]
    data_dir: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List every candidate site with its eco-score.
    Sites,
    /// Assess the environmental impact of one catalog site.
    Assess {
        #[arg(long)]
        lat: f64,
        #[arg(long)]
        lng: f64,
    },
    /// Run the portfolio climate forecast.
    Forecast {
        /// Portfolio YAML file naming the selected sites.
        #[arg(long, default_value = "ecosite-app/portfolio.yaml")]
        portfolio: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    println!("--- Ecosite Engine ---");

    let catalog = config::SiteCatalog::load(&cli.data_dir)?;

    match cli.command {
        Command::Sites => list_sites(&catalog),
        Command::Assess { lat, lng } => assess_site(&catalog, lat, lng)?,
        Command::Forecast { portfolio } => run_forecast(&catalog, &portfolio)?,
    }

    Ok(())
}

fn list_sites(catalog: &config::SiteCatalog) {
    println!("\n{:<40} {:>10} {:>11} {:>10}", "Site", "Latitude", "Longitude", "Eco-score");
    for site in &catalog.candidates {
        let metrics = impact::assess(site);
        println!(
            "{:<40} {:>10.4} {:>11.4} {:>10}",
            site.name, site.latitude, site.longitude, metrics.eco_score
        );
    }
}

fn assess_site(catalog: &config::SiteCatalog, lat: f64, lng: f64) -> Result<()> {
    let site = catalog.find(lat, lng)?;
    let metrics = impact::assess(site);

    if let Some((nearest, km)) = catalog.nearest_existing(site.coordinate()) {
        println!("Nearest existing datacenter: '{}' ({:.1} km away)", nearest.name, km);
    }

    let output_dir = report::create_run_dir("assess")?;
    report::write_assessment(&output_dir, site, &metrics)?;
    Ok(())
}

fn run_forecast(catalog: &config::SiteCatalog, portfolio_path: &str) -> Result<()> {
    let selection = config::load_portfolio(portfolio_path, catalog)?;
    println!(
        "Portfolio '{}' resolved: {} sites.",
        selection.username,
        selection.items.len()
    );

    let contribution = portfolio::aggregate_contribution(&selection.items);
    let footprint = portfolio::carbon_footprint(&selection.items);

    let output_dir = report::create_run_dir("forecast")?;
    let log_path = Path::new(&output_dir).join("trajectory.csv");
    let log_path = log_path.to_string_lossy();

    let mut simulation = SimulationBuilder::new()
        .with_contribution(contribution)
        .with_trajectory_logging_to_file(&log_path)
        .build()?;
    let outcome = simulation.run()?;

    report::write_forecast(&output_dir, &selection, contribution, footprint, &outcome)?;
    plotting::generate_all_plots(&output_dir, &log_path)?;

    println!("\nForecast complete. Results are in '{}'", output_dir);
    Ok(())
}
