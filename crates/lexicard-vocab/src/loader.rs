use std::path::Path;

use crate::error::VocabError;
use crate::parser::{ParseOptions, ParseOutcome, parse};

/// Read a UTF-8 vocabulary file in one go and parse it.
/// Windows line endings are normalized before parsing.
pub fn load_vocabulary(path: &Path, options: ParseOptions) -> Result<ParseOutcome, VocabError> {
    tracing::info!("Loading vocabulary from file: {}", path.display());

    let content = std::fs::read_to_string(path).map_err(|source| VocabError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let content = content.replace("\r\n", "\n");

    let outcome = parse(&content, options);
    if outcome.skipped_categories > 0 {
        tracing::warn!(
            "Skipped {} malformed categories in {}",
            outcome.skipped_categories,
            path.display()
        );
    }
    tracing::info!("Loaded {} words", outcome.words.len());

    Ok(outcome)
}
