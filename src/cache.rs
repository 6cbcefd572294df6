use indexmap::IndexMap;
use serde::Deserialize;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// One player's entry in the pre-built cache.
///
/// All fields are optional in the source JSON; entries without a display
/// name are kept in the cache but never appear in the suggestion list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlayerRecord {
    #[serde(rename = "playerData")]
    pub display_name: Option<String>,
    #[serde(default)]
    pub character: Vec<String>,
    #[serde(default)]
    pub losses: Vec<String>,
}

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("failed to read cache file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cache file {path} is not a valid player cache")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// The immutable player cache, loaded once at startup.
///
/// Keys are opaque identifiers (`player_<rank>` in caches produced by the
/// scraper). Iteration order is the insertion order of the source JSON
/// object, which lookups rely on for tie-breaking.
#[derive(Debug, Clone, Default)]
pub struct Cache {
    records: IndexMap<String, PlayerRecord>,
}

impl Cache {
    pub fn load(path: &Path) -> Result<Self, CacheError> {
        let data = std::fs::read_to_string(path).map_err(|source| CacheError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let records: IndexMap<String, PlayerRecord> =
            serde_json::from_str(&data).map_err(|source| CacheError::Json {
                path: path.to_path_buf(),
                source,
            })?;
        info!(path = %path.display(), entries = records.len(), "loaded player cache");
        Ok(Self { records })
    }

    pub fn from_records(records: IndexMap<String, PlayerRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All display names, sorted case-insensitively. Duplicate names are
    /// kept: two identifiers sharing a display name both appear.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .records
            .values()
            .filter_map(|record| record.display_name.clone())
            .collect();
        names.sort_by(|a, b| a.to_lowercase().cmp(&b.to_lowercase()));
        names
    }

    /// Exact, case-insensitive display-name lookup. The first match in
    /// insertion order wins.
    pub fn find_by_name(&self, display_name: &str) -> Option<&PlayerRecord> {
        let needle = display_name.trim().to_lowercase();
        let found = self.records.values().find(|record| {
            record
                .display_name
                .as_deref()
                .is_some_and(|name| name.to_lowercase() == needle)
        });
        debug!(query = display_name, hit = found.is_some(), "player lookup");
        found
    }

    /// Resolve a 1-based ranking position to the record the scraper stored
    /// under the `player_<rank>` key.
    pub fn find_by_rank(&self, rank: u32) -> Option<&PlayerRecord> {
        self.records.get(format!("player_{rank}").as_str())
    }
}
