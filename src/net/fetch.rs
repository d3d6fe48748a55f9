// Cache-through fetching.
// Answers from the in-memory cache when possible and records every live response.

use serde::Serialize;
use url::Url;

use crate::cache::ResponseCache;
use crate::error::Result;

use super::client::HttpClient;

/// Fetch a page body, keyed in `cache` by its URL.
pub async fn fetch_page(client: &HttpClient, url: &Url, cache: &mut ResponseCache) -> Result<String> {
    if let Some(body) = cache.get(url.as_str()) {
        tracing::debug!(%url, "using cache");
        return Ok(body.to_string());
    }

    tracing::info!(%url, "fetching");
    let body = client.get_text(url).await?;
    Ok(cache.insert(url.as_str(), body).to_string())
}

/// Fetch an API response, keyed in `cache` by `key` rather than by the request.
pub async fn fetch_api<T: Serialize + ?Sized>(
    client: &HttpClient,
    key: &str,
    cache: &mut ResponseCache,
    endpoint: &Url,
    params: &T,
) -> Result<String> {
    if let Some(body) = cache.get(key) {
        tracing::debug!(key, "using cache");
        return Ok(body.to_string());
    }

    tracing::info!(key, %endpoint, "fetching");
    let body = client.get_text_with_params(endpoint, params).await?;
    Ok(cache.insert(key, body).to_string())
}
