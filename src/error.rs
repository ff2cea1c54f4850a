//! Error types for envswitch
//!
//! Uses `thiserror` for library errors; the binary wraps these in
//! `anyhow` at the boundary.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for envswitch operations
pub type EnvSwitchResult<T> = Result<T, EnvSwitchError>;

/// Main error type for envswitch operations
///
/// Pattern misses are deliberately absent: a config field the tolerant
/// loader cannot find, or a target fragment the engine cannot match,
/// is a no-op rather than an error.
#[derive(Error, Debug)]
pub enum EnvSwitchError {
    /// Environment config file does not exist at the resolved path
    #[error("config file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Config file exists but is not valid JSON for the expected schema
    #[error("malformed config in {path}: {source}")]
    MalformedConfig {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Target source file does not exist
    #[error("target file not found: {path}")]
    TargetNotFound { path: PathBuf },

    /// Rewritten target could not be written back
    #[error("failed to write {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// App registry exists but cannot be parsed
    #[error("registry file is corrupted: {path} ({message})")]
    RegistryCorrupted { path: PathBuf, message: String },

    /// App registry could not be read or saved
    #[error("registry access failed: {message}")]
    RegistryAccess { message: String },

    /// Named app is not present in the registry
    #[error("unknown app '{name}' - register it in interactive mode first")]
    UnknownApp { name: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
