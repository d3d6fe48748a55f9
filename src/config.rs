//! Application configuration with layered loading.
//!
//! Loading precedence (highest wins):
//! 1. Environment variables (`PARKSCOUT_*`)
//! 2. TOML file from `PARKSCOUT_CONFIG_FILE`, else `config.toml` in the
//!    platform config directory when it exists
//! 3. Built-in defaults

use std::path::PathBuf;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::cache::{CachePaths, paths};
use crate::error::{Result, ScoutError};

const ENV_PREFIX: &str = "PARKSCOUT_";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Place-search API key. Not checked locally; a bad or missing key
    /// shows up as an API failure.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Origin of the parks directory site.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Radius search endpoint.
    #[serde(default = "default_search_url")]
    pub search_url: String,

    /// Overrides the platform cache directory.
    #[serde(default)]
    pub cache_dir: Option<PathBuf>,

    /// Load cache snapshots at start and save them on exit.
    #[serde(default = "default_true")]
    pub persist_cache: bool,

    /// `tracing_subscriber::EnvFilter` directive for the log file.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_base_url() -> String {
    "https://www.nps.gov".into()
}

fn default_search_url() -> String {
    "http://www.mapquestapi.com/search/v2/radius".into()
}

fn default_log_filter() -> String {
    "info".into()
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            search_url: default_search_url(),
            cache_dir: None,
            persist_cache: true,
            log_filter: default_log_filter(),
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    pub fn load() -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        let config_file = std::env::var_os("PARKSCOUT_CONFIG_FILE")
            .map(PathBuf::from)
            .or_else(|| paths::config_dir().map(|dir| dir.join("config.toml")));
        if let Some(path) = config_file {
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).ignore(&["config_file"]));

        let config: Self = figment
            .extract()
            .map_err(|e| ScoutError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check values after loading.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [("base_url", &self.base_url), ("search_url", &self.search_url)] {
            let url = Url::parse(value)
                .map_err(|e| ScoutError::Config(format!("{}: {}", field, e)))?;
            if !matches!(url.scheme(), "http" | "https") {
                return Err(ScoutError::Config(format!(
                    "{}: unsupported scheme {}",
                    field,
                    url.scheme()
                )));
            }
        }

        if self.log_filter.trim().is_empty() {
            return Err(ScoutError::Config("log_filter: must not be empty".into()));
        }

        Ok(())
    }

    pub fn base_url(&self) -> Result<Url> {
        Ok(Url::parse(&self.base_url)?)
    }

    pub fn search_url(&self) -> Result<Url> {
        Ok(Url::parse(&self.search_url)?)
    }

    /// The key to send, empty when none is configured.
    pub fn api_key(&self) -> &str {
        self.api_key.as_deref().unwrap_or_default()
    }

    pub fn cache_paths(&self) -> Option<CachePaths> {
        CachePaths::resolve(self.cache_dir.as_deref())
    }
}
