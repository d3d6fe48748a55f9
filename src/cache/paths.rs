// Cache path utilities.
// Locates the snapshot files and log file under the platform cache directory.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

const PAGES_FILE: &str = "pages.json";
const PLACES_FILE: &str = "places.json";
const LOG_FILE: &str = "parkscout.log";

/// Get the base cache directory (~/.cache/parkscout on Linux).
pub fn cache_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "parkscout").map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Get the config directory holding `config.toml`.
pub fn config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "parkscout").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Files used by one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachePaths {
    /// Page cache snapshot (URL -> markup).
    pub pages: PathBuf,
    /// API cache snapshot (postal code -> JSON body).
    pub places: PathBuf,
    /// Log file.
    pub log: PathBuf,
}

impl CachePaths {
    /// Paths rooted at an explicit directory.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            pages: dir.join(PAGES_FILE),
            places: dir.join(PLACES_FILE),
            log: dir.join(LOG_FILE),
        }
    }

    /// Paths rooted at the override if given, else the platform cache directory.
    pub fn resolve(override_dir: Option<&Path>) -> Option<Self> {
        match override_dir {
            Some(dir) => Some(Self::in_dir(dir)),
            None => cache_dir().map(|dir| Self::in_dir(&dir)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_in_dir() {
        let paths = CachePaths::in_dir(Path::new("/tmp/scout"));
        assert!(paths.pages.ends_with("scout/pages.json"));
        assert!(paths.places.ends_with("scout/places.json"));
        assert!(paths.log.ends_with("scout/parkscout.log"));
    }

    #[test]
    fn test_override_wins() {
        let paths = CachePaths::resolve(Some(Path::new("/srv/cache"))).unwrap();
        assert_eq!(paths.pages, PathBuf::from("/srv/cache/pages.json"));
    }
}
