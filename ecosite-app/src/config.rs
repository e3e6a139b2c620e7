use anyhow::{Context, Result};
use ecosite_core::{catalog, error::EcositeError, geo};
use ecosite_schemas::{
    facility::FacilityRecord, file_formats::PortfolioFile, geo::Coordinate, portfolio::Portfolio,
};
use std::{fs, path::Path};

/// A container for the static site data loaded from the data directory:
/// the candidate-site catalog plus the existing-datacenter listing used
/// for density context.
pub struct SiteCatalog {
    pub candidates: Vec<FacilityRecord>,
    pub existing: Vec<FacilityRecord>,
}

impl SiteCatalog {
    /// Loads both catalogs from the specified base directory.
    pub fn load(base_path: &str) -> Result<Self> {
        println!("Loading site catalog from '{}'...", base_path);

        let candidates_path = Path::new(base_path).join("candidate_sites.csv");
        let candidates = catalog::read_candidate_sites(&candidates_path.to_string_lossy())
            .context("Failed to read candidate sites")?;

        let existing_path = Path::new(base_path).join("existing_datacenters.csv");
        let existing = catalog::read_existing_sites(&existing_path.to_string_lossy())
            .context("Failed to read existing datacenters")?;

        println!(
            "Catalog loaded: {} candidate sites, {} existing datacenters.",
            candidates.len(),
            existing.len()
        );
        Ok(Self { candidates, existing })
    }

    /// Finds the candidate site at the given coordinates, within the
    /// catalog's matching epsilon.
    pub fn find(&self, latitude: f64, longitude: f64) -> Result<&FacilityRecord> {
        catalog::find_by_coordinate(&self.candidates, latitude, longitude)
            .ok_or_else(|| EcositeError::FacilityNotFound(latitude, longitude).into())
    }

    /// The nearest existing datacenter to the given point, with its
    /// great-circle distance in kilometers.
    pub fn nearest_existing(&self, point: Coordinate) -> Option<(&FacilityRecord, f64)> {
        self.existing
            .iter()
            .map(|site| (site, geo::distance_km(point, site.coordinate())))
            .min_by(|a, b| a.1.total_cmp(&b.1))
    }
}

/// Loads a portfolio YAML file and resolves its site names against the
/// catalog. Unknown names are rejected here, before anything is computed.
pub fn load_portfolio(path: &str, catalog: &SiteCatalog) -> Result<Portfolio> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read portfolio file '{}'", path))?;
    let file: PortfolioFile = serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse portfolio file '{}'", path))?;

    let mut items = Vec::with_capacity(file.portfolio.sites.len());
    for name in &file.portfolio.sites {
        let site = catalog
            .candidates
            .iter()
            .find(|s| s.name == *name)
            .ok_or_else(|| EcositeError::SiteNotInCatalog(name.clone()))?;
        items.push(site.clone());
    }

    Ok(Portfolio {
        username: file.portfolio.username,
        items,
    })
}
