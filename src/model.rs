//! Core data model for envswitch
//!
//! Defines the environment configuration extracted from config files:
//! - `EnvConfig`: the full per-environment configuration
//! - `ServerValue`: scalar URL or per-service URL map
//! - Supporting groups: `FirebaseConfig`, `GoogleConfig`
//!
//! Instances are built by a loader, consumed by the substitution engine,
//! and discarded. Absent fields are empty strings, never errors.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Service names recognized inside a map-valued `server` block
///
/// Order matters only for scan determinism; serialization order comes
/// from the `BTreeMap`.
pub const SERVICE_NAMES: [&str; 6] = ["quest", "agents", "bo", "tpv", "vault", "front"];

/// Backend address: a single base URL or a map of per-service URLs
///
/// JSON strings deserialize to `Url`, JSON objects to `Services`. The
/// two forms are never coerced into each other; consumers that only
/// handle the scalar form (the `baseUrl` substitution) skip map values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ServerValue {
    /// Single base URL shared by every service
    Url(String),
    /// Per-service URLs, keyed by service name
    Services(BTreeMap<String, String>),
}

impl Default for ServerValue {
    fn default() -> Self {
        ServerValue::Url(String::new())
    }
}

impl ServerValue {
    /// Scalar URL if this is the single-URL form
    pub fn as_url(&self) -> Option<&str> {
        match self {
            ServerValue::Url(url) => Some(url.as_str()),
            ServerValue::Services(_) => None,
        }
    }

    /// True when nothing was extracted for this value
    pub fn is_empty(&self) -> bool {
        match self {
            ServerValue::Url(url) => url.is_empty(),
            ServerValue::Services(map) => map.is_empty(),
        }
    }

    /// Compact JSON rendering used when splicing into JS source
    ///
    /// `Url` renders as a quoted string, `Services` as an object with
    /// keys in map order.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "\"\"".to_string())
    }
}

/// Firebase project settings
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FirebaseConfig {
    pub api_key: String,
    pub auth_domain: String,
    // legacy configs spell this databaseURL, not databaseUrl
    #[serde(rename = "databaseURL")]
    pub database_url: String,
    pub storage_bucket: String,
    pub messaging_sender_id: String,
}

/// Google API keys
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GoogleConfig {
    pub maps_key: String,
    pub analytics: String,
    pub recaptcha: String,
}

/// Per-environment configuration
///
/// Every field defaults to its zero value so partially-populated
/// configs load without errors.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EnvConfig {
    /// Backend address, scalar or per-service map
    pub server: ServerValue,

    /// Quest API endpoint
    pub quest_server: String,

    /// Quest frontend URL
    pub quest_front: String,

    /// WalkMe snippet URL
    pub walkme_url: String,

    /// Firebase project settings
    pub firebase: FirebaseConfig,

    /// Google API keys
    pub google: GoogleConfig,
}
