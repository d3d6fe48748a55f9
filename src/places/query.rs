// Radius search query parameters.
// Everything except the origin and key is fixed for the whole session.

use serde::Serialize;

use crate::nps::SiteRecord;

/// Search radius around the origin, in miles.
pub const SEARCH_RADIUS: u32 = 10;
/// Maximum number of results per search.
pub const MAX_MATCHES: u32 = 10;

/// Query string for one nearby search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NearbyQuery<'a> {
    pub key: &'a str,
    pub radius: u32,
    /// Postal code of the site; sent even when empty.
    pub origin: &'a str,
    pub max_matches: u32,
    pub ambiguities: &'static str,
    pub out_format: &'static str,
}

impl<'a> NearbyQuery<'a> {
    pub fn for_site(site: &'a SiteRecord, api_key: &'a str) -> Self {
        Self {
            key: api_key,
            radius: SEARCH_RADIUS,
            origin: &site.zipcode,
            max_matches: MAX_MATCHES,
            ambiguities: "ignore",
            out_format: "json",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_string() {
        let site = SiteRecord {
            zipcode: "49931".to_string(),
            ..SiteRecord::default()
        };
        let query = NearbyQuery::for_site(&site, "secret");

        let encoded = serde_json::to_value(&query).unwrap();
        assert_eq!(
            encoded,
            serde_json::json!({
                "key": "secret",
                "radius": 10,
                "origin": "49931",
                "maxMatches": 10,
                "ambiguities": "ignore",
                "outFormat": "json",
            })
        );
    }
}
