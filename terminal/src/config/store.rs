//! Key/value store implementations

use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use crate::core::error::Result;
use crate::core::service::ConfigStore;

/// In-memory store, used by tests and as a fallback when the file is unusable
#[derive(Debug, Default)]
pub struct MemoryConfigStore {
    values: RwLock<BTreeMap<String, String>>,
}

impl MemoryConfigStore {
    pub fn with_values<I, K, V>(values: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: RwLock::new(
                values
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }
}

impl ConfigStore for MemoryConfigStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values.write().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store persisted as a flat JSON object.
///
/// The whole file is rewritten (temp file + rename) on every `set`, so a crash
/// never leaves a half-written file behind.
#[derive(Debug)]
pub struct FileConfigStore {
    path: PathBuf,
    values: RwLock<BTreeMap<String, String>>,
}

impl FileConfigStore {
    /// Open the store, starting empty when the file does not exist yet
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let values = if path.exists() {
            let raw = fs::read_to_string(&path)?;
            if raw.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&raw)?
            }
        } else {
            BTreeMap::new()
        };
        tracing::info!(path = %path.display(), keys = values.len(), "Loaded session configuration");
        Ok(Self {
            path,
            values: RwLock::new(values),
        })
    }

    fn persist(&self, values: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_vec_pretty(values)?)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl ConfigStore for FileConfigStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.set_all(&[(key, value)])
    }

    /// Written to disk first; memory only changes once the file is replaced.
    fn set_all(&self, entries: &[(&str, &str)]) -> Result<()> {
        let mut values = self.values.write();
        let mut next = values.clone();
        for (key, value) in entries {
            next.insert(key.to_string(), value.to_string());
        }
        if let Err(e) = self.persist(&next) {
            tracing::error!(path = %self.path.display(), error = %e, "Failed to persist session configuration");
            return Err(e);
        }
        *values = next;
        Ok(())
    }
}
