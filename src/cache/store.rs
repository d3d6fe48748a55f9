// Cache store for response snapshots.
// Holds the in-memory key -> body mapping and reads/writes it as a flat JSON object.

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScoutError};

/// Append-only mapping from a cache key to a raw response body.
///
/// Used twice per session: the page cache is keyed by request URL, the API
/// cache by postal code. Entries are never replaced or removed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResponseCache {
    entries: BTreeMap<String, String>,
}

impl ResponseCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a stored body.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Store a body under `key` unless one is already present.
    /// Returns the body now stored for the key.
    pub fn insert(&mut self, key: impl Into<String>, body: String) -> &str {
        self.entries.entry(key.into()).or_insert(body).as_str()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, String)> for ResponseCache {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Read a cache snapshot.
///
/// Fails with `CacheUnavailable` if the file is missing or is not a JSON
/// object of strings.
pub fn load(path: &Path) -> Result<ResponseCache> {
    let unavailable = |reason: String| ScoutError::CacheUnavailable {
        path: path.to_path_buf(),
        reason,
    };

    let contents = fs::read_to_string(path).map_err(|e| unavailable(e.to_string()))?;
    serde_json::from_str(&contents).map_err(|e| unavailable(e.to_string()))
}

/// Read a cache snapshot, starting empty when none is usable.
pub fn load_or_empty(path: &Path) -> ResponseCache {
    match load(path) {
        Ok(cache) => {
            tracing::debug!(path = %path.display(), entries = cache.len(), "loaded cache snapshot");
            cache
        }
        Err(err) => {
            tracing::debug!(%err, "starting with an empty cache");
            ResponseCache::new()
        }
    }
}

/// Write the full mapping to `path`, replacing any previous snapshot.
pub fn save(cache: &ResponseCache, path: &Path) -> Result<()> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(cache)?;

    // Write via temp file, then rename over the old snapshot
    let temp_path = path.with_extension("tmp");
    let mut file = fs::File::create(&temp_path)?;
    file.write_all(json.as_bytes())?;
    file.sync_all()?;
    fs::rename(&temp_path, path)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample() -> ResponseCache {
        [
            (
                "https://www.nps.gov/isro/index.htm".to_string(),
                "<html>Isle Royale</html>".to_string(),
            ),
            ("49931".to_string(), r#"{"searchResults":[]}"#.to_string()),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("pages.json");

        let cache = sample();
        save(&cache, &path).unwrap();

        let loaded = load(&path).unwrap();
        assert_eq!(loaded, cache);
    }

    #[test]
    fn test_snapshot_is_flat_object() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("places.json");

        save(&sample(), &path).unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["49931"], r#"{"searchResults":[]}"#);
    }

    #[test]
    fn test_save_overwrites_previous_snapshot() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("pages.json");

        save(&sample(), &path).unwrap();
        save(&ResponseCache::new(), &path).unwrap();

        assert!(load(&path).unwrap().is_empty());
    }

    #[test]
    fn test_load_missing_is_unavailable() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nonexistent.json");

        let err = load(&path).unwrap_err();
        assert!(matches!(err, ScoutError::CacheUnavailable { .. }));
        assert!(load_or_empty(&path).is_empty());
    }

    #[test]
    fn test_load_corrupt_is_unavailable() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("pages.json");
        fs::write(&path, "{not json").unwrap();

        assert!(matches!(
            load(&path),
            Err(ScoutError::CacheUnavailable { .. })
        ));
        assert!(load_or_empty(&path).is_empty());
    }

    #[test]
    fn test_insert_keeps_first_value() {
        let mut cache = ResponseCache::new();
        assert_eq!(cache.insert("k", "first".to_string()), "first");
        assert_eq!(cache.insert("k", "second".to_string()), "first");
        assert_eq!(cache.len(), 1);
        assert!(cache.contains("k"));
        assert_eq!(cache.get("k"), Some("first"));
        assert_eq!(cache.get("missing"), None);
    }
}
