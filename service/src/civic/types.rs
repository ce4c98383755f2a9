//! Data types for civic-info API responses.

use serde::{Deserialize, Serialize};

/// An elected official returned for an address.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Official {
    /// Full name
    pub name: String,
    /// Party affiliation (e.g., "Democratic Party"), absent for some offices
    #[serde(default)]
    pub party: Option<String>,
    /// Title of the office held, resolved from the response's `offices` list
    #[serde(default, skip_deserializing)]
    pub office: Option<String>,
}

impl Official {
    /// Party for display, `"Unknown"` when the API omits it.
    #[must_use]
    pub fn party_label(&self) -> &str {
        self.party
            .as_deref()
            .filter(|party| !party.is_empty())
            .unwrap_or("Unknown")
    }
}

/// An office and the officials holding it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Office {
    pub name: String,
    /// Positions in the response's `officials` array
    #[serde(default, rename = "officialIndices")]
    pub official_indices: Vec<usize>,
}

/// Response from the representatives endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepresentativesResponse {
    pub officials: Vec<Official>,
    #[serde(default)]
    pub offices: Vec<Office>,
}

impl RepresentativesResponse {
    /// Officials in response order, each tagged with the office it holds.
    ///
    /// Out-of-range office indices are ignored.
    #[must_use]
    pub fn into_officials(self) -> Vec<Official> {
        let Self {
            mut officials,
            offices,
        } = self;

        for office in offices {
            for index in office.official_indices {
                if let Some(official) = officials.get_mut(index) {
                    official.office = Some(office.name.clone());
                }
            }
        }

        officials
    }
}
