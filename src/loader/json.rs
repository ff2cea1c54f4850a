//! Strict JSON config loader

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{EnvSwitchError, EnvSwitchResult};
use crate::model::EnvConfig;

/// Non-fatal loader warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load a strict JSON config.
///
/// Missing file is `ConfigNotFound`, a decode failure is
/// `MalformedConfig`; absent fields default to their zero values.
pub fn load_config(path: &Path) -> EnvSwitchResult<EnvConfig> {
    load_config_with_warnings(path).map(|(config, _)| config)
}

/// Load a strict JSON config and collect unknown-key warnings.
///
/// Unknown keys do not fail the load; each one is reported with its
/// line and a "did you mean" suggestion when a known key is close.
pub fn load_config_with_warnings(
    path: &Path,
) -> EnvSwitchResult<(EnvConfig, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            EnvSwitchError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            EnvSwitchError::Io(e)
        }
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let mut deserializer = serde_json::Deserializer::from_str(&content);

    let config: EnvConfig = serde_ignored::deserialize(&mut deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| EnvSwitchError::MalformedConfig {
        path: path.to_path_buf(),
        source: e,
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "server",
        "questServer",
        "questFront",
        "walkmeUrl",
        "firebase",
        "apiKey",
        "authDomain",
        "databaseURL",
        "storageBucket",
        "messagingSenderId",
        "google",
        "mapsKey",
        "analytics",
        "recaptcha",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
