use std::env;

use serde::{Deserialize, Serialize};

use crate::{env_flag, split_list};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnkiConfig {
    /// AnkiConnect URL
    pub url: String,
    /// Deck the notes are added to
    pub deck: String,
    /// Note type; its field names must match the vocabulary record
    pub model: String,
    pub tags: Vec<String>,
    pub allow_duplicate: bool,
    pub duplicate_scope: String,
}

impl AnkiConfig {
    pub fn new() -> Self {
        let url = env::var("ANKI_CONNECT_URL").unwrap_or_else(|_| "http://localhost:8765".to_string());
        let deck = env::var("ANKI_DECK").unwrap_or_else(|_| "English".to_string());
        let model = env::var("ANKI_MODEL").unwrap_or_else(|_| "Vocabulary".to_string());
        let tags = env::var("ANKI_TAGS")
            .map(|v| split_list(&v))
            .unwrap_or_default();
        let duplicate_scope =
            env::var("ANKI_DUPLICATE_SCOPE").unwrap_or_else(|_| "deck".to_string());

        Self {
            url,
            deck,
            model,
            tags,
            allow_duplicate: env_flag("ANKI_ALLOW_DUPLICATE", true),
            duplicate_scope,
        }
    }
}

impl Default for AnkiConfig {
    fn default() -> Self {
        Self::new()
    }
}
