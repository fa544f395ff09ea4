use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A note ready to be added. The deck is supplied by [`crate::Deck`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub model_name: String,
    pub fields: BTreeMap<String, String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub options: NoteOptions,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub audio: Vec<Media>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub video: Vec<Media>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub picture: Vec<Media>,
}

impl Note {
    pub fn new(model_name: impl Into<String>, fields: BTreeMap<String, String>) -> Self {
        Self {
            model_name: model_name.into(),
            fields,
            tags: Vec::new(),
            options: NoteOptions::default(),
            audio: Vec::new(),
            video: Vec::new(),
            picture: Vec::new(),
        }
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    pub fn with_options(mut self, options: NoteOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_audio(mut self, audio: Media) -> Self {
        self.audio.push(audio);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteOptions {
    pub allow_duplicate: bool,
    /// `"deck"` limits the duplicate check to the target deck
    pub duplicate_scope: String,
}

impl Default for NoteOptions {
    fn default() -> Self {
        Self {
            allow_duplicate: true,
            duplicate_scope: "deck".to_string(),
        }
    }
}

/// Audio, video or picture attached to a note
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    #[serde(flatten)]
    pub source: MediaSource,
    pub filename: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip_hash: Option<String>,
    /// Note fields the media is appended to
    pub fields: Vec<String>,
}

impl Media {
    pub fn new(source: MediaSource, filename: impl Into<String>, fields: Vec<String>) -> Self {
        Self {
            source,
            filename: filename.into(),
            skip_hash: None,
            fields,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaSource {
    Url(String),
    Path(String),
    /// Base64 encoded file contents
    Data(String),
}

/// Changes for an existing note. Unset parts are left as they are.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NoteUpdate {
    pub id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub audio: Vec<Media>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub video: Vec<Media>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub picture: Vec<Media>,
}

impl NoteUpdate {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }

    pub fn with_fields(mut self, fields: BTreeMap<String, String>) -> Self {
        self.fields = Some(fields);
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = Some(tags);
        self
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_note_defaults() {
        let fields = BTreeMap::from([("word".to_string(), "airport".to_string())]);
        let value = serde_json::to_value(Note::new("Vocabulary", fields)).unwrap();

        assert_eq!(
            value,
            json!({
                "modelName": "Vocabulary",
                "fields": {"word": "airport"},
                "tags": [],
                "options": {"allowDuplicate": true, "duplicateScope": "deck"}
            })
        );
    }

    #[test]
    fn test_media_source_is_flattened() {
        let media = Media::new(
            MediaSource::Path("/audio/Travel/airport.mp3".to_string()),
            "Travel_airport.mp3",
            vec!["audio".to_string()],
        );

        assert_eq!(
            serde_json::to_value(&media).unwrap(),
            json!({
                "path": "/audio/Travel/airport.mp3",
                "filename": "Travel_airport.mp3",
                "fields": ["audio"]
            })
        );
    }

    #[test]
    fn test_update_skips_unset_parts() {
        let update = NoteUpdate::new(42).with_tags(vec![]);
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({"id": 42, "tags": []})
        );
    }
}
