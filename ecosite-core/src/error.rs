use thiserror::Error;

#[derive(Debug, Error)]
pub enum EcositeError {
    #[error("No facility found at coordinates ({0}, {1})")]
    FacilityNotFound(f64, f64),

    #[error("Site '{0}' is not in the catalog")]
    SiteNotInCatalog(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid coordinate value '{0}' in '{1}'")]
    InvalidCoordinate(String, String),

    #[error("I/O error for file '{0}': {1}")]
    FileIO(String, #[source] std::io::Error),

    #[error("Failed to process CSV file '{0}': {1}")]
    CsvError(String, #[source] csv::Error),

    #[error("An error occurred during logging: {0}")]
    LoggingError(#[from] anyhow::Error),
}
