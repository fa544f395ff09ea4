use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One vocabulary entry. Serialized names match the note type fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub word: String,
    #[serde(rename = "pos")]
    pub part_of_speech: String,
    pub meaning: String,
    pub category: String,
    #[serde(rename = "audio")]
    pub audio_filename: String,
    pub example: String,
    pub extra: String,
}

impl Word {
    /// Build a word from the `|` separated fields of one line. Missing fields are empty.
    pub(crate) fn from_fields<'a>(category: &str, mut fields: impl Iterator<Item = &'a str>) -> Self {
        let mut next = || fields.next().unwrap_or_default().to_string();

        let word = next();
        let part_of_speech = next();
        let meaning = next();
        let example = next();
        let extra = next();

        Self {
            audio_filename: audio_filename(category, &word),
            word,
            part_of_speech,
            meaning,
            category: category.to_string(),
            example,
            extra,
        }
    }

    /// Note fields keyed by the note type field names
    pub fn note_fields(&self) -> BTreeMap<String, String> {
        BTreeMap::from([
            ("word".to_string(), self.word.clone()),
            ("pos".to_string(), self.part_of_speech.clone()),
            ("meaning".to_string(), self.meaning.clone()),
            ("category".to_string(), self.category.clone()),
            ("audio".to_string(), self.audio_filename.clone()),
            ("example".to_string(), self.example.clone()),
            ("extra".to_string(), self.extra.clone()),
        ])
    }
}

fn audio_filename(category: &str, word: &str) -> String {
    format!("{category}_{word}.mp3")
}
