use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::env_flag;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VocabularyConfig {
    /// Vocabulary text file
    pub path: PathBuf,
    /// Root of the `<category>/<word>.mp3` audio tree, no audio is attached when unset
    pub audio_dir: Option<PathBuf>,
    /// Drop lines whose word field is empty instead of importing them
    pub skip_empty_words: bool,
}

impl VocabularyConfig {
    pub fn new() -> Self {
        let path = env::var("VOCABULARY_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data/vocabulary.txt"));
        let audio_dir = env::var("VOCABULARY_AUDIO_DIR").ok().map(PathBuf::from);

        Self {
            path,
            audio_dir,
            skip_empty_words: env_flag("VOCABULARY_SKIP_EMPTY", false),
        }
    }
}

impl Default for VocabularyConfig {
    fn default() -> Self {
        Self::new()
    }
}
