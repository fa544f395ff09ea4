use std::env;

use serde::{Deserialize, Serialize};

use self::anki::AnkiConfig;
use self::vocabulary::VocabularyConfig;

pub mod anki;
pub mod vocabulary;

/// Values missing from a profile file fall back to the environment, then to defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub anki: AnkiConfig,
    pub vocabulary: VocabularyConfig,
}

impl Config {
    pub fn new() -> Self {
        Config {
            anki: AnkiConfig::new(),
            vocabulary: VocabularyConfig::new(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

/// Boolean env value, see [`parse_flag`] for the accepted spellings
fn env_flag(key: &str, default: bool) -> bool {
    flag_or(key, env::var(key).ok().as_deref(), default)
}

fn flag_or(key: &str, value: Option<&str>, default: bool) -> bool {
    let Some(value) = value else {
        return default;
    };

    parse_flag(value).unwrap_or_else(|| {
        tracing::warn!("Ignoring {key}={value:?}: expected true/false, 1/0, yes/no or on/off");
        default
    })
}

/// Case-insensitive `true`/`false`, `1`/`0`, `yes`/`no`, `on`/`off`
fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Comma separated list, blanks dropped
fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
