// Browsing session.
// Owns the HTTP client and both caches, and runs directory -> listing -> nearby lookups.

use url::Url;

use crate::cache::{CachePaths, ResponseCache, store};
use crate::config::Config;
use crate::error::Result;
use crate::net::HttpClient;
use crate::nps::{self, SiteRecord, StateDirectory};
use crate::places::{self, PlaceResult};

/// Entry counts for the two caches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    pub pages: usize,
    pub places: usize,
}

pub struct Session {
    client: HttpClient,
    base_url: Url,
    search_url: Url,
    api_key: String,
    paths: Option<CachePaths>,
    persist: bool,
    page_cache: ResponseCache,
    api_cache: ResponseCache,
}

impl Session {
    /// Build a session, loading cache snapshots when persistence is on.
    pub fn open(config: &Config) -> Result<Self> {
        let paths = config.cache_paths();
        let (page_cache, api_cache) = match (&paths, config.persist_cache) {
            (Some(paths), true) => (
                store::load_or_empty(&paths.pages),
                store::load_or_empty(&paths.places),
            ),
            _ => (ResponseCache::new(), ResponseCache::new()),
        };

        Ok(Self {
            client: HttpClient::new()?,
            base_url: config.base_url()?,
            search_url: config.search_url()?,
            api_key: config.api_key().to_string(),
            paths,
            persist: config.persist_cache,
            page_cache,
            api_cache,
        })
    }

    /// Build the state directory from the live home page.
    pub async fn resolve_states(&self) -> Result<StateDirectory> {
        nps::resolve_states(&self.client, &self.base_url).await
    }

    /// Sites for one state, in listing order.
    pub async fn list_sites(&mut self, state_url: &Url) -> Result<Vec<SiteRecord>> {
        nps::list_sites(&self.client, &self.base_url, state_url, &mut self.page_cache).await
    }

    /// Places near one site.
    pub async fn lookup_nearby(&mut self, site: &SiteRecord) -> Result<Vec<PlaceResult>> {
        places::lookup_nearby(
            &self.client,
            &self.search_url,
            &self.api_key,
            site,
            &mut self.api_cache,
        )
        .await
    }

    pub fn cache_stats(&self) -> CacheStats {
        CacheStats {
            pages: self.page_cache.len(),
            places: self.api_cache.len(),
        }
    }

    /// Snapshot both caches. Failures are logged and otherwise ignored.
    pub fn save_caches(&self) {
        let Some(paths) = self.paths.as_ref().filter(|_| self.persist) else {
            return;
        };

        for (cache, path) in [(&self.page_cache, &paths.pages), (&self.api_cache, &paths.places)] {
            match store::save(cache, path) {
                Ok(()) => tracing::info!(path = %path.display(), entries = cache.len(), "saved cache"),
                Err(err) => tracing::warn!(path = %path.display(), %err, "failed to save cache"),
            }
        }
    }
}
