//! Tolerant JS config loader
//!
//! Extracts an `EnvConfig` from loosely-formatted JS source by scanning
//! for each field independently with a fixed `name: '...'` pattern.
//! Field order, surrounding code, and quote style do not matter; a
//! field the scan cannot find stays at its zero value. That tolerance
//! is the point: these files are hand-maintained app configs, and a
//! field-by-field scan survives their drift where a real grammar would
//! not. The cost is silent skips - values with escaped quotes,
//! template literals, or multi-line strings never match.
//!
//! Only a read failure is an error.

use std::fs;
use std::io;
use std::path::Path;

use regex::Regex;

use crate::engine::braces::balanced_span;
use crate::error::{EnvSwitchError, EnvSwitchResult};
use crate::model::{EnvConfig, ServerValue, SERVICE_NAMES};

type Setter = fn(&mut EnvConfig, String);

/// Scan table: leaf field name in the source text, slot it fills.
///
/// Nested fields match by leaf name alone (`apiKey:`), wherever they
/// appear; the config files never reuse a leaf name across blocks.
const FIELDS: &[(&str, Setter)] = &[
    ("questServer", |cfg, v| cfg.quest_server = v),
    ("questFront", |cfg, v| cfg.quest_front = v),
    ("walkmeUrl", |cfg, v| cfg.walkme_url = v),
    ("apiKey", |cfg, v| cfg.firebase.api_key = v),
    ("authDomain", |cfg, v| cfg.firebase.auth_domain = v),
    ("databaseURL", |cfg, v| cfg.firebase.database_url = v),
    ("storageBucket", |cfg, v| cfg.firebase.storage_bucket = v),
    ("messagingSenderId", |cfg, v| {
        cfg.firebase.messaging_sender_id = v
    }),
    ("mapsKey", |cfg, v| cfg.google.maps_key = v),
    ("analytics", |cfg, v| cfg.google.analytics = v),
    ("recaptcha", |cfg, v| cfg.google.recaptcha = v),
];

/// Load a tolerant JS config from disk.
pub fn load_js_config(path: &Path) -> EnvSwitchResult<EnvConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            EnvSwitchError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            EnvSwitchError::Io(e)
        }
    })?;
    Ok(extract_config(&content))
}

/// Extract a config from JS source text.
///
/// Pure text scan, infallible; unmatched fields stay at their zero
/// values.
pub fn extract_config(content: &str) -> EnvConfig {
    let mut config = EnvConfig::default();

    for (name, set) in FIELDS {
        if let Some(value) = extract_quoted(content, name) {
            set(&mut config, value);
        }
    }

    // real configs in the wild carry this typo; honor it, with the
    // correct spelling winning when both are present
    if config.firebase.messaging_sender_id.is_empty() {
        if let Some(value) = extract_quoted(content, "messaginSenderId") {
            config.firebase.messaging_sender_id = value;
        }
    }

    config.server = extract_server(content);
    config
}

/// First `name: '...'` or `name: "..."` fragment in `text`.
fn extract_quoted(text: &str, name: &str) -> Option<String> {
    // names come from fixed tables, the pattern always compiles
    let re = Regex::new(&format!(r#"{name}:\s*['"]([^'"]+)['"]"#)).unwrap();
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Recover the `server` field, scalar form first.
///
/// When no scalar is present, a `server: {{ ... }}` region is sliced
/// with the balanced-brace scan and each known service name is looked
/// up inside it independently. No region, or a region with no known
/// services, leaves the value at its zero form.
fn extract_server(content: &str) -> ServerValue {
    if let Some(url) = extract_quoted(content, "server") {
        return ServerValue::Url(url);
    }

    let open_re = Regex::new(r"server:\s*\{").unwrap();
    let Some(head) = open_re.find(content) else {
        return ServerValue::default();
    };
    let open = head.end() - 1;
    let Some(close) = balanced_span(content, open) else {
        return ServerValue::default();
    };
    let region = &content[open..=close];

    let mut map = std::collections::BTreeMap::new();
    for name in SERVICE_NAMES {
        if let Some(url) = extract_quoted(region, name) {
            map.insert(name.to_string(), url);
        }
    }
    if map.is_empty() {
        ServerValue::default()
    } else {
        ServerValue::Services(map)
    }
}
