//! One-shot switch pipeline
//!
//! Resolves the environment config, loads it with the right loader,
//! rewrites the target file text, and writes the result back unless
//! dry-running. At most one write happens per invocation, and only
//! when the rewrite actually changed something.
//!
//! The target file is not locked; concurrent invocations racing on the
//! same target are out of scope. The write is a plain `fs::write`, not
//! an atomic rename.

use std::fs;
use std::io;
use std::path::PathBuf;

use crate::engine::{self, OutputFormat};
use crate::error::{EnvSwitchError, EnvSwitchResult};
use crate::loader::{self, ConfigSource, ConfigWarning};

/// Everything a single switch needs
#[derive(Debug, Clone)]
pub struct SwitchOptions {
    /// Environment name, selects `config.<env>.json|.js`
    pub environment: String,
    /// Directory holding the per-environment config files
    pub config_dir: PathBuf,
    /// Source file to rewrite
    pub target: PathBuf,
    /// Target file layout
    pub format: OutputFormat,
    /// Strict JSON or tolerant JS config
    pub source: ConfigSource,
    /// Value substituted into `isDist` fields
    pub is_dist: bool,
    /// Compute the rewrite but do not touch the target
    pub dry_run: bool,
}

/// What a switch did
#[derive(Debug, Clone)]
pub struct SwitchOutcome {
    /// Config file that was loaded
    pub config_path: PathBuf,
    /// Unknown-key warnings from the strict loader (empty for JS)
    pub warnings: Vec<ConfigWarning>,
    /// Target content before the rewrite
    pub original: String,
    /// Target content after the rewrite
    pub updated: String,
    /// Whether the target file was written
    pub written: bool,
}

impl SwitchOutcome {
    /// True when the rewrite changed at least one byte.
    pub fn changed(&self) -> bool {
        self.original != self.updated
    }
}

/// Run one switch.
pub fn run_switch(options: &SwitchOptions) -> EnvSwitchResult<SwitchOutcome> {
    let config_path =
        loader::config_path(&options.config_dir, &options.environment, options.source);

    let (config, warnings) = match options.source {
        ConfigSource::Json => loader::load_config_with_warnings(&config_path)?,
        ConfigSource::Js => (loader::load_js_config(&config_path)?, Vec::new()),
    };

    let original = fs::read_to_string(&options.target).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            EnvSwitchError::TargetNotFound {
                path: options.target.clone(),
            }
        } else {
            EnvSwitchError::Io(e)
        }
    })?;

    let updated = engine::rewrite(&original, &config, options.is_dist, options.format);

    let mut written = false;
    if !options.dry_run && updated != original {
        fs::write(&options.target, &updated).map_err(|e| EnvSwitchError::WriteFailed {
            path: options.target.clone(),
            source: e,
        })?;
        written = true;
    }

    Ok(SwitchOutcome {
        config_path,
        warnings,
        original,
        updated,
        written,
    })
}
