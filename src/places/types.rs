// Radius search response types.
// Raw API shapes plus the normalized PlaceResult shown to the user.

use std::fmt;

use serde::Deserialize;

/// Raw response body from the radius search.
#[derive(Debug, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(rename = "searchResults", default)]
    pub search_results: Vec<RawPlace>,
}

/// One raw search hit.
#[derive(Debug, Default, Deserialize)]
pub struct RawPlace {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub fields: RawFields,
}

/// The subset of hit fields we display.
#[derive(Debug, Default, Deserialize)]
pub struct RawFields {
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub group_sic_code_name_ext: String,
    #[serde(default)]
    pub city: String,
}

/// A nearby place ready for display. Empty upstream values are replaced
/// by placeholders, each field on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceResult {
    pub name: String,
    pub category: String,
    pub address: String,
    pub city: String,
}

fn or_placeholder(value: String, placeholder: &str) -> String {
    if value.is_empty() {
        placeholder.to_string()
    } else {
        value
    }
}

impl From<RawPlace> for PlaceResult {
    fn from(raw: RawPlace) -> Self {
        Self {
            name: or_placeholder(raw.name, "no name"),
            category: or_placeholder(raw.fields.group_sic_code_name_ext, "no category"),
            address: or_placeholder(raw.fields.address, "no address"),
            city: or_placeholder(raw.fields.city, "no city"),
        }
    }
}

impl fmt::Display for PlaceResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "- {} ({}): {}, {}",
            self.name, self.category, self.address, self.city
        )
    }
}

impl SearchResponse {
    /// Normalize every hit, keeping API order.
    pub fn into_places(self) -> Vec<PlaceResult> {
        self.search_results.into_iter().map(PlaceResult::from).collect()
    }
}
