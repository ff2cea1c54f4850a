//! Substitution engine
//!
//! Rewrites recognized configuration fields inside target source text
//! while passing everything else through byte-for-byte. Two target
//! layouts are supported, selected explicitly by the caller:
//!
//! - `CompactObject`: object-literal fields (`baseUrl: "...",`)
//! - `VarDeclarations`: standalone `var` statements (`var urls = {...};`)
//!
//! Each field is located by an independent fixed pattern; the first
//! occurrence is replaced and trailing comma/semicolon presence is
//! preserved exactly as found. A pattern with no match is a silent
//! no-op. The engine never errors and never reports which fields
//! changed; callers diff the before/after buffers if they care.

pub mod braces;

use std::str::FromStr;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

use crate::engine::braces::balanced_span;
use crate::model::{EnvConfig, ServerValue};

/// Target file layout the engine rewrites
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Object-literal fields with trailing commas
    #[default]
    CompactObject,
    /// Standalone `var` declarations with trailing semicolons
    VarDeclarations,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::CompactObject => "compact-object",
            OutputFormat::VarDeclarations => "var-declarations",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "compact-object" => Ok(OutputFormat::CompactObject),
            "var-declarations" => Ok(OutputFormat::VarDeclarations),
            other => Err(format!(
                "unknown format '{other}' (expected 'compact-object' or 'var-declarations')"
            )),
        }
    }
}

// Object-literal patterns. Group 1 is always the optional trailing
// delimiter so replacements can re-emit it verbatim.
static BASE_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"baseUrl:\s*['"][^'"]*['"](,?)"#).unwrap());
static QUEST_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"questUrl:\s*['"][^'"]*['"](,?)"#).unwrap());
static QUEST_FRONT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"questFront:\s*['"][^'"]*['"](,?)"#).unwrap());
static IS_DIST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"isDist:\s*(?:true|false)(,?)").unwrap());
static RECAPTCHA_API_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"recaptchaApiKey:\s*['"][^'"]*['"](,?)"#).unwrap());

// Var-declaration patterns. URLS_OPEN only locates the head of the
// statement; the object body is sliced with `balanced_span`.
static URLS_OPEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"var urls\s*=\s*\{").unwrap());
static RECAPTCHA_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"var recaptchaKey\s*=\s*['"][^'"]*['"](;?)"#).unwrap());
static IS_DIST_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"var isDist\s*=\s*(?:true|false)(;?)").unwrap());
static WALKME_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"var walkMeUrl\s*=\s*['"][^'"]*['"](;?)"#).unwrap());

/// Rewrite `content` with the fields from `config`.
///
/// Replacement order is fixed per format and each pattern replaces at
/// most its first occurrence. Running the engine on its own output with
/// the same inputs reproduces that output.
pub fn rewrite(content: &str, config: &EnvConfig, is_dist: bool, format: OutputFormat) -> String {
    match format {
        OutputFormat::CompactObject => rewrite_compact_object(content, config, is_dist),
        OutputFormat::VarDeclarations => rewrite_var_declarations(content, config, is_dist),
    }
}

fn rewrite_compact_object(content: &str, config: &EnvConfig, is_dist: bool) -> String {
    let mut out = content.to_string();
    // only the scalar form feeds baseUrl; a service map has no single URL
    if let Some(url) = config.server.as_url() {
        out = replace_keeping_delim(&out, &BASE_URL, &format!("baseUrl: \"{url}\""));
    }
    out = replace_keeping_delim(
        &out,
        &QUEST_URL,
        &format!("questUrl: \"{}\"", config.quest_server),
    );
    out = replace_keeping_delim(
        &out,
        &QUEST_FRONT,
        &format!("questFront: \"{}\"", config.quest_front),
    );
    out = replace_keeping_delim(&out, &IS_DIST, &format!("isDist: {is_dist}"));
    out = replace_keeping_delim(
        &out,
        &RECAPTCHA_API_KEY,
        &format!("recaptchaApiKey: \"{}\"", config.google.recaptcha),
    );
    out
}

fn rewrite_var_declarations(content: &str, config: &EnvConfig, is_dist: bool) -> String {
    let mut out = splice_urls(content, &config.server);
    out = replace_keeping_delim(
        &out,
        &RECAPTCHA_VAR,
        &format!("var recaptchaKey = \"{}\"", config.google.recaptcha),
    );
    out = replace_keeping_delim(&out, &IS_DIST_VAR, &format!("var isDist = {is_dist}"));
    out = replace_keeping_delim(
        &out,
        &WALKME_VAR,
        &format!("var walkMeUrl = \"{}\"", config.walkme_url),
    );
    out
}

/// Replace the first match of `re`, re-emitting the captured trailing
/// delimiter (group 1) after `replacement`.
///
/// The closure form keeps `$` sequences in config values literal.
fn replace_keeping_delim(content: &str, re: &Regex, replacement: &str) -> String {
    re.replace(content, |caps: &Captures| {
        let delim = caps.get(1).map_or("", |m| m.as_str());
        format!("{replacement}{delim}")
    })
    .into_owned()
}

/// Replace the whole `var urls = {...}` object with the serialized
/// `server` value.
///
/// The object body is found by brace counting, so nested maps survive.
/// A `;` after the close brace is untouched tail text and survives on
/// its own. No statement or no balanced body leaves the content
/// unchanged.
fn splice_urls(content: &str, server: &ServerValue) -> String {
    let Some(head) = URLS_OPEN.find(content) else {
        return content.to_string();
    };
    let open = head.end() - 1;
    let Some(close) = balanced_span(content, open) else {
        return content.to_string();
    };

    let mut out = String::with_capacity(content.len());
    out.push_str(&content[..head.start()]);
    out.push_str("var urls = ");
    out.push_str(&server.to_json());
    out.push_str(&content[close + 1..]);
    out
}
