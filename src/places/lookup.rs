// Nearby-place lookup.
// Runs the radius search for a site through the API cache and normalizes the hits.

use url::Url;

use crate::cache::ResponseCache;
use crate::error::Result;
use crate::net::{HttpClient, fetch_api};
use crate::nps::SiteRecord;

use super::query::NearbyQuery;
use super::types::{PlaceResult, SearchResponse};

/// Places near `site`, cached by the site's postal code.
///
/// An empty postal code is not special-cased; whatever the API answers for
/// an empty origin is decoded like any other response.
pub async fn lookup_nearby(
    client: &HttpClient,
    endpoint: &Url,
    api_key: &str,
    site: &SiteRecord,
    api_cache: &mut ResponseCache,
) -> Result<Vec<PlaceResult>> {
    let query = NearbyQuery::for_site(site, api_key);
    let body = fetch_api(client, &site.zipcode, api_cache, endpoint, &query).await?;

    let response: SearchResponse = serde_json::from_str(&body)?;
    let places = response.into_places();
    tracing::debug!(zipcode = %site.zipcode, places = places.len(), "nearby lookup done");
    Ok(places)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScoutError;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path, query_param},
    };

    const RESULTS: &str = r#"{"searchResults": [
        {"name": "Keweenaw Brewing", "fields": {"address": "408 Shelden Ave", "group_sic_code_name_ext": "Bars", "city": "Houghton"}},
        {"name": "", "fields": {"address": "1 College Ave", "group_sic_code_name_ext": "Colleges", "city": "Houghton"}}
    ]}"#;

    fn isle_royale() -> SiteRecord {
        SiteRecord {
            category: "National Park".to_string(),
            name: "Isle Royale".to_string(),
            address: "Houghton, MI".to_string(),
            zipcode: "49931".to_string(),
            phone: "(906) 482-0984".to_string(),
        }
    }

    #[tokio::test]
    async fn test_lookup_sends_fixed_query_once() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search/v2/radius"))
            .and(query_param("key", "secret"))
            .and(query_param("origin", "49931"))
            .and(query_param("radius", "10"))
            .and(query_param("maxMatches", "10"))
            .and(query_param("ambiguities", "ignore"))
            .and(query_param("outFormat", "json"))
            .respond_with(ResponseTemplate::new(200).set_body_string(RESULTS))
            .expect(1)
            .mount(&server)
            .await;

        let client = HttpClient::new().unwrap();
        let endpoint = Url::parse(&format!("{}/search/v2/radius", server.uri())).unwrap();
        let mut cache = ResponseCache::new();
        let site = isle_royale();

        let places = lookup_nearby(&client, &endpoint, "secret", &site, &mut cache)
            .await
            .unwrap();
        let again = lookup_nearby(&client, &endpoint, "secret", &site, &mut cache)
            .await
            .unwrap();

        assert_eq!(places, again);
        assert_eq!(places.len(), 2);
        assert_eq!(places[0].name, "Keweenaw Brewing");
        assert_eq!(places[1].name, "no name");
        assert_eq!(places[1].category, "Colleges");
        assert!(cache.contains("49931"));
    }

    #[tokio::test]
    async fn test_empty_zipcode_still_queries() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("origin", ""))
            .respond_with(
                ResponseTemplate::new(200).set_body_string(r#"{"info": {"statuscode": 400}}"#),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = HttpClient::new().unwrap();
        let endpoint = Url::parse(&format!("{}/search/v2/radius", server.uri())).unwrap();
        let mut cache = ResponseCache::new();
        let site = SiteRecord {
            zipcode: String::new(),
            ..isle_royale()
        };

        let places = lookup_nearby(&client, &endpoint, "secret", &site, &mut cache)
            .await
            .unwrap();
        assert!(places.is_empty());
        assert!(cache.contains(""));
    }

    #[tokio::test]
    async fn test_non_json_body_is_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401).set_body_string("The AppKey submitted with this request is invalid."))
            .mount(&server)
            .await;

        let client = HttpClient::new().unwrap();
        let endpoint = Url::parse(&format!("{}/search/v2/radius", server.uri())).unwrap();
        let mut cache = ResponseCache::new();

        let err = lookup_nearby(&client, &endpoint, "", &isle_royale(), &mut cache)
            .await
            .unwrap_err();
        assert!(matches!(err, ScoutError::Json(_)));
        // The raw body is still cached.
        assert!(cache.contains("49931"));
    }
}
