//! Per-app registry
//!
//! Remembers which config directory, target file, and environment each
//! application was last switched with, so interactive mode and
//! `--app` invocations do not re-ask. Persisted as JSON at
//! `~/.envswitch-config.json`; the wire keys (`configDir`, `useJS`, ...)
//! are fixed, older files written by hand stay loadable.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use fs2::FileExt;
use serde::{Deserialize, Serialize};

use crate::error::{EnvSwitchError, EnvSwitchResult};

/// Saved settings for one application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppEntry {
    /// Directory holding the per-environment config files
    pub config_dir: PathBuf,

    /// Source file the engine rewrites
    pub target_path: PathBuf,

    /// Environment of the most recent switch
    #[serde(default)]
    pub last_env: String,

    /// Whether configs are tolerant JS rather than strict JSON
    #[serde(default, rename = "useJS")]
    pub use_js: bool,

    /// When this app was last switched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_used: Option<DateTime<Utc>>,
}

/// All registered applications, keyed by display name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Registry {
    #[serde(default)]
    pub apps: BTreeMap<String, AppEntry>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&AppEntry> {
        self.apps.get(name)
    }

    pub fn upsert(&mut self, name: impl Into<String>, entry: AppEntry) {
        self.apps.insert(name.into(), entry);
    }

    pub fn remove(&mut self, name: &str) -> bool {
        self.apps.remove(name).is_some()
    }

    /// App names in listing order (sorted by the map).
    pub fn names(&self) -> Vec<String> {
        self.apps.keys().cloned().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.apps.is_empty()
    }
}

/// JSON-backed registry store
pub struct RegistryStore {
    path: PathBuf,
}

impl RegistryStore {
    pub fn new() -> Self {
        Self {
            path: default_registry_path(),
        }
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock_path(&self) -> PathBuf {
        self.path.with_extension("lock")
    }

    /// Load the registry; a missing file is an empty registry, a
    /// file that no longer parses is a hard error rather than a
    /// silent reset.
    pub fn load(&self) -> EnvSwitchResult<Registry> {
        if !self.path.exists() {
            return Ok(Registry::new());
        }

        let content =
            fs::read_to_string(&self.path).map_err(|e| EnvSwitchError::RegistryAccess {
                message: e.to_string(),
            })?;

        serde_json::from_str(&content).map_err(|e| EnvSwitchError::RegistryCorrupted {
            path: self.path.clone(),
            message: e.to_string(),
        })
    }

    /// Save the registry under an exclusive advisory lock.
    pub fn save(&self, registry: &Registry) -> EnvSwitchResult<()> {
        let lock_file = self.acquire_lock()?;
        let result = self.save_to_disk(registry);
        let _ = lock_file.unlock();
        result
    }

    /// Lock, reload, upsert one app, save.
    pub fn update_app(&self, name: &str, entry: AppEntry) -> EnvSwitchResult<()> {
        let lock_file = self.acquire_lock()?;
        let result = self
            .load()
            .map(|mut registry| {
                registry.upsert(name, entry);
                registry
            })
            .and_then(|registry| self.save_to_disk(&registry));
        let _ = lock_file.unlock();
        result
    }

    fn acquire_lock(&self) -> EnvSwitchResult<fs::File> {
        let lock_path = self.lock_path();
        if let Some(parent) = lock_path.parent() {
            fs::create_dir_all(parent).map_err(|e| EnvSwitchError::RegistryAccess {
                message: e.to_string(),
            })?;
        }

        let lock_file =
            fs::File::create(&lock_path).map_err(|e| EnvSwitchError::RegistryAccess {
                message: e.to_string(),
            })?;
        lock_file
            .lock_exclusive()
            .map_err(|e| EnvSwitchError::RegistryAccess {
                message: e.to_string(),
            })?;

        Ok(lock_file)
    }

    fn save_to_disk(&self, registry: &Registry) -> EnvSwitchResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| EnvSwitchError::RegistryAccess {
                message: e.to_string(),
            })?;
        }

        let content =
            serde_json::to_string_pretty(registry).map_err(|e| EnvSwitchError::RegistryAccess {
                message: e.to_string(),
            })?;

        fs::write(&self.path, content).map_err(|e| EnvSwitchError::RegistryAccess {
            message: e.to_string(),
        })
    }
}

impl Default for RegistryStore {
    fn default() -> Self {
        Self::new()
    }
}

fn default_registry_path() -> PathBuf {
    // Allow override for testing (especially on Windows where
    // dirs::home_dir uses system API and cannot be overridden via
    // environment variables)
    if let Ok(path) = std::env::var("ENVSWITCH_REGISTRY_PATH") {
        return PathBuf::from(path);
    }
    dirs::home_dir()
        .map(|h| h.join(".envswitch-config.json"))
        .unwrap_or_else(|| PathBuf::from("~/.envswitch-config.json"))
}
