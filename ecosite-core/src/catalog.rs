//! Facility catalog readers.
//!
//! Two on-disk formats feed the engine: a quoted CSV of candidate sites
//! (six columns, short rows skipped) and a looser existing-datacenter
//! listing where names may contain unquoted commas and the trailing two
//! fields are latitude and longitude.

use crate::error::EcositeError;
use csv::ReaderBuilder;
use ecosite_schemas::facility::FacilityRecord;
use ecosite_schemas::file_formats::CandidateSiteRow;
use std::fs::File;
use std::io::{BufRead, BufReader};

/// Two coordinates within this distance on both axes refer to the same
/// catalog entry.
pub const COORDINATE_EPSILON: f64 = 1e-4;

/// Reads the candidate-site CSV. Rows with fewer than six fields are
/// skipped with a warning; rows with unparseable coordinates are an
/// error.
pub fn read_candidate_sites(path: &str) -> Result<Vec<FacilityRecord>, EcositeError> {
    let file = File::open(path).map_err(|e| EcositeError::FileIO(path.to_string(), e))?;
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let mut sites = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| EcositeError::CsvError(path.to_string(), e))?;
        if record.len() < 6 {
            println!("[catalog] skipping short row: {:?}", record);
            continue;
        }

        let latitude = parse_coordinate(&record[0], path)?;
        let longitude = parse_coordinate(&record[1], path)?;

        let row = CandidateSiteRow {
            latitude,
            longitude,
            name: record[2].trim().to_string(),
            land_price: record[3].trim().to_string(),
            electricity: record[4].trim().to_string(),
            notes: record[5].trim().to_string(),
        };
        sites.push(row.into());
    }
    Ok(sites)
}

/// Reads the existing-datacenter listing. Each line after the header
/// carries a name that may itself contain commas, then latitude and
/// longitude as the last two fields. Malformed lines are skipped.
pub fn read_existing_sites(path: &str) -> Result<Vec<FacilityRecord>, EcositeError> {
    let file = File::open(path).map_err(|e| EcositeError::FileIO(path.to_string(), e))?;
    let reader = BufReader::new(file);

    let mut sites = Vec::new();
    for line in reader.lines().skip(1) {
        let line = line.map_err(|e| EcositeError::FileIO(path.to_string(), e))?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let parts: Vec<&str> = line.split(',').collect();
        if parts.len() < 3 {
            continue;
        }

        let longitude = parts[parts.len() - 1].trim().parse::<f64>();
        let latitude = parts[parts.len() - 2].trim().parse::<f64>();
        let (latitude, longitude) = match (latitude, longitude) {
            (Ok(lat), Ok(lng)) => (lat, lng),
            _ => continue,
        };

        sites.push(FacilityRecord {
            latitude,
            longitude,
            name: parts[..parts.len() - 2].join(","),
            land_price: String::new(),
            electricity: String::new(),
            notes: String::new(),
            impact: None,
        });
    }
    Ok(sites)
}

/// Finds the catalog entry whose coordinates match within the epsilon on
/// both axes.
pub fn find_by_coordinate(
    sites: &[FacilityRecord],
    latitude: f64,
    longitude: f64,
) -> Option<&FacilityRecord> {
    sites.iter().find(|site| {
        (site.latitude - latitude).abs() < COORDINATE_EPSILON
            && (site.longitude - longitude).abs() < COORDINATE_EPSILON
    })
}

fn parse_coordinate(raw: &str, path: &str) -> Result<f64, EcositeError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| EcositeError::InvalidCoordinate(raw.trim().to_string(), path.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn write_temp(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn candidate_reader_handles_quoted_commas_and_short_rows() {
        let path = write_temp(
            "ecosite_candidates.csv",
            "latitude,longitude,name,land_price,electricity,notes\n\
             39.05,-77.46,\"Ashburn, VA\",$2.5M per acre,Grid mix,\"{\"\"fiber\"\": true}\"\n\
             too,short\n\
             29.76,-95.37,Houston Site,$1.1M,Natural gas heavy,\n",
        );

        let sites = read_candidate_sites(path.to_str().unwrap()).unwrap();
        assert_eq!(sites.len(), 2);
        assert_eq!(sites[0].name, "Ashburn, VA");
        assert_eq!(sites[0].latitude, 39.05);
        assert_eq!(sites[1].electricity, "Natural gas heavy");
    }

    #[test]
    fn candidate_reader_rejects_bad_coordinates() {
        let path = write_temp(
            "ecosite_bad_coords.csv",
            "latitude,longitude,name,land_price,electricity,notes\n\
             not-a-number,-77.46,Site,a,b,c\n",
        );

        let err = read_candidate_sites(path.to_str().unwrap());
        assert!(matches!(err, Err(EcositeError::InvalidCoordinate(_, _))));
    }

    #[test]
    fn existing_reader_keeps_commas_in_names() {
        let path = write_temp(
            "ecosite_existing.csv",
            "name,latitude,longitude\n\
             Equinix DC2, Ashburn, Virginia,39.0438,-77.4874\n\
             \n\
             Malformed line without coordinates\n\
             Dallas Infomart,32.8029,-96.8204\n",
        );

        let sites = read_existing_sites(path.to_str().unwrap()).unwrap();
        assert_eq!(sites.len(), 2);
        assert_eq!(sites[0].name, "Equinix DC2, Ashburn, Virginia");
        assert_eq!(sites[0].longitude, -77.4874);
        assert_eq!(sites[1].name, "Dallas Infomart");
    }

    #[test]
    fn coordinate_lookup_uses_the_epsilon() {
        let sites = vec![FacilityRecord {
            latitude: 39.05,
            longitude: -77.46,
            name: "Ashburn".to_string(),
            land_price: String::new(),
            electricity: String::new(),
            notes: String::new(),
            impact: None,
        }];

        assert!(find_by_coordinate(&sites, 39.05005, -77.46005).is_some());
        assert!(find_by_coordinate(&sites, 39.051, -77.46).is_none());
    }

    #[test]
    fn missing_file_is_a_file_error() {
        let err = read_candidate_sites("/nonexistent/ecosite.csv");
        assert!(matches!(err, Err(EcositeError::FileIO(_, _))));
    }
}
