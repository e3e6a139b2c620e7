use crate::facility::FacilityRecord;
use serde::{Deserialize, Serialize};

/// One row of the candidate-site CSV catalog.
///
/// Column order matches the source file: latitude, longitude, name,
/// land price, electricity, notes. The name and notes fields may contain
/// quoted commas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateSiteRow {
    pub latitude: f64,
    pub longitude: f64,
    pub name: String,
    pub land_price: String,
    pub electricity: String,
    pub notes: String,
}

impl From<CandidateSiteRow> for FacilityRecord {
    fn from(row: CandidateSiteRow) -> Self {
        FacilityRecord {
            latitude: row.latitude,
            longitude: row.longitude,
            name: row.name,
            land_price: row.land_price,
            electricity: row.electricity,
            notes: row.notes,
            impact: None,
        }
    }
}

/// A user's portfolio selection as stored on disk: site display names,
/// resolved against the catalog by the loading layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSelection {
    pub username: String,
    pub sites: Vec<String>,
}

/// Top-level wrapper for a portfolio YAML file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioFile {
    pub portfolio: PortfolioSelection,
}
