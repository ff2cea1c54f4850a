//! Environment config loading
//!
//! Two loaders produce the same `EnvConfig`:
//! - `json`: strict, for well-formed `config.<env>.json` documents
//! - `js`: tolerant, scans `config.<env>.js` source text field by field
//!
//! Path resolution is shared: `<configDir>/config.<env>.<ext>`.

pub mod js;
pub mod json;

pub use js::{extract_config, load_js_config};
pub use json::{load_config, load_config_with_warnings, ConfigWarning};

use std::path::{Path, PathBuf};

/// Flavor of config file to load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfigSource {
    /// Strict JSON document
    #[default]
    Json,
    /// Loosely-formatted JS source, scanned tolerantly
    Js,
}

impl ConfigSource {
    pub fn extension(&self) -> &'static str {
        match self {
            ConfigSource::Json => "json",
            ConfigSource::Js => "js",
        }
    }
}

/// Resolve the config file path for an environment.
pub fn config_path(config_dir: &Path, environment: &str, source: ConfigSource) -> PathBuf {
    config_dir.join(format!("config.{environment}.{}", source.extension()))
}
