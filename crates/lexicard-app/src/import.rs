use std::path::{Component, Path, PathBuf};

use anyhow::Context;
use lexicard_anki::{Deck, Media, MediaSource, Note, NoteOptions};
use lexicard_config::Config;
use lexicard_vocab::Word;

use crate::status::ImportSummary;

/// Note field the pronunciation is attached to
const AUDIO_FIELD: &str = "audio";

/// Where notes go. Implemented by [`Deck`].
pub(crate) trait NoteSink {
    async fn add_note(&self, note: &Note) -> lexicard_anki::Result<u64>;
}

/// A named deck that can be created before notes are added to it
pub(crate) trait DeckTarget: NoteSink {
    fn name(&self) -> &str;

    async fn create(&self) -> lexicard_anki::Result<u64>;
}

impl NoteSink for Deck<'_> {
    async fn add_note(&self, note: &Note) -> lexicard_anki::Result<u64> {
        Deck::add_note(self, note).await
    }
}

impl DeckTarget for Deck<'_> {
    fn name(&self) -> &str {
        Deck::name(self)
    }

    async fn create(&self) -> lexicard_anki::Result<u64> {
        Deck::create(self).await
    }
}

/// Turns vocabulary words into notes
#[derive(Debug, Clone)]
pub struct NoteTemplate {
    pub model: String,
    pub tags: Vec<String>,
    pub options: NoteOptions,
    pub audio_dir: Option<PathBuf>,
}

impl NoteTemplate {
    pub fn from_config(config: &Config) -> Self {
        Self {
            model: config.anki.model.clone(),
            tags: config.anki.tags.clone(),
            options: NoteOptions {
                allow_duplicate: config.anki.allow_duplicate,
                duplicate_scope: config.anki.duplicate_scope.clone(),
            },
            audio_dir: config.vocabulary.audio_dir.clone(),
        }
    }

    pub fn build(&self, word: &Word) -> Note {
        let note = Note::new(self.model.clone(), word.note_fields())
            .with_tags(self.tags.clone())
            .with_options(self.options.clone());

        match self.audio_dir.as_deref().and_then(|dir| audio_media(dir, word)) {
            Some(media) => note.with_audio(media),
            None => note,
        }
    }
}

/// `<audio_dir>/<category>/<word>.mp3`, stored in Anki under the word's audio filename.
/// `None` for an empty word, or when the category or word would point outside the audio tree.
fn audio_media(audio_dir: &Path, word: &Word) -> Option<Media> {
    if word.word.is_empty() {
        return None;
    }

    let file_name = format!("{}.mp3", word.word);
    if !is_single_component(&word.category) || !is_single_component(&file_name) {
        tracing::warn!(
            "Not attaching audio for {}/{}: not a plain file name",
            word.category,
            word.word
        );
        return None;
    }

    let path = audio_dir.join(&word.category).join(file_name);

    Some(Media::new(
        MediaSource::Path(path.to_string_lossy().into_owned()),
        word.audio_filename.clone(),
        vec![AUDIO_FIELD.to_string()],
    ))
}

/// One normal path component: no separators, no root, no `.` or `..`
fn is_single_component(name: &str) -> bool {
    let mut components = Path::new(name).components();

    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    ) && !name.ends_with(['/', '\\'])
}

/// Add every word, one request at a time. A failed word is logged and the run continues.
pub(crate) async fn import_words(
    sink: &impl NoteSink,
    template: &NoteTemplate,
    words: &[Word],
) -> ImportSummary {
    let mut summary = ImportSummary::default();

    for word in words {
        let note = template.build(word);

        match sink.add_note(&note).await {
            Ok(note_id) => {
                tracing::info!("Added {}/{}: note_id={}", word.category, word.word, note_id);
                summary.added += 1;
            }
            Err(e) => {
                tracing::error!("Failed to add {}/{}: {}", word.category, word.word, e);
                summary.failed.push(format!("{}/{}", word.category, word.word));
            }
        }
    }

    summary
}

/// Create the deck, then add every word. With `dry_run` the notes are only built and logged.
pub(crate) async fn run_import(
    target: &impl DeckTarget,
    template: &NoteTemplate,
    words: &[Word],
    dry_run: bool,
) -> anyhow::Result<ImportSummary> {
    if dry_run {
        for word in words {
            let note = template.build(word);
            tracing::info!("Would add {}", serde_json::to_string(&note)?);
        }
        tracing::info!("Dry run: {} notes built for deck {}", words.len(), target.name());
        return Ok(ImportSummary::default());
    }

    let deck_id = target
        .create()
        .await
        .with_context(|| format!("Failed to open deck {}", target.name()))?;
    tracing::info!("Importing into deck {} ({})", target.name(), deck_id);

    let summary = import_words(target, template, words).await;

    tracing::info!(
        "Import finished: {} of {} added, {} failed",
        summary.added,
        summary.total(),
        summary.failed.len()
    );
    if !summary.is_success() {
        tracing::warn!("Failed words: {}", summary.failed.join(", "));
    }

    Ok(summary)
}
