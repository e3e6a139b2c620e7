use crate::facility::FacilityRecord;
use serde::{Deserialize, Serialize};

/// An ordered sequence of facilities selected by one user.
///
/// Portfolios are owned by the portfolio source (the cart collaborator);
/// the engine only ever reads the items for the duration of one
/// aggregation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub username: String,
    pub items: Vec<FacilityRecord>,
}

impl Portfolio {
    pub fn empty(username: &str) -> Self {
        Self {
            username: username.to_string(),
            items: Vec::new(),
        }
    }
}
