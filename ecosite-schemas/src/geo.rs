use serde::{Deserialize, Serialize};

/// A WGS84-style (latitude, longitude) pair in decimal degrees.
///
/// Callers are expected to supply values in the usual numeric ranges; the
/// engine performs no validation beyond that assumption.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}
