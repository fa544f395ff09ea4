//! Parser for the vocabulary text format.
//!
//! ```text
//! Travel
//! +++
//! airport|n|a place for planes|We went to the airport.|
//! hotel
//! ---
//! ticket|n
//! ===
//! Food
//! +++
//! ...
//! ```
//!
//! Categories are separated by `===` lines, a category name is separated from
//! its body by a `+++` line, and word groups inside a body by `---` lines.
//! Every non-blank line of a group is one word with `|` separated fields:
//! word, part of speech, meaning, example, extra.

use crate::word::Word;

const CATEGORY_DELIMITER: &str = "===\n";
const BODY_DELIMITER: &str = "+++\n";
const GROUP_DELIMITER: &str = "---\n";
const FIELD_SEPARATOR: char = '|';

/// What to do with a line whose word field is empty, e.g. `|n|meaning`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EmptyWordPolicy {
    /// Keep the record with an empty word
    #[default]
    Keep,
    Skip,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ParseOptions {
    pub empty_words: EmptyWordPolicy,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOutcome {
    /// Words in document order
    pub words: Vec<Word>,
    /// Non-blank category chunks dropped for lacking exactly one `+++` line
    pub skipped_categories: usize,
    /// Lines dropped by [`EmptyWordPolicy::Skip`]
    pub skipped_empty_words: usize,
}

/// Parse with default options, returning only the words
pub fn parse_vocabulary(text: &str) -> Vec<Word> {
    parse(text, ParseOptions::default()).words
}

pub fn parse(text: &str, options: ParseOptions) -> ParseOutcome {
    let mut outcome = ParseOutcome::default();

    for chunk in text.split(CATEGORY_DELIMITER) {
        let Some((category, body)) = split_category(chunk) else {
            if !chunk.trim().is_empty() {
                tracing::debug!(
                    "Skipping category chunk without a single name/body delimiter: {:?}",
                    first_line(chunk)
                );
                outcome.skipped_categories += 1;
            }
            continue;
        };

        for group in body.split(GROUP_DELIMITER) {
            for line in group.trim().split('\n') {
                if line.trim().is_empty() {
                    continue;
                }

                let word = Word::from_fields(category, line.split(FIELD_SEPARATOR));

                if word.word.is_empty() && options.empty_words == EmptyWordPolicy::Skip {
                    tracing::debug!("Skipping line with empty word in {category}: {line:?}");
                    outcome.skipped_empty_words += 1;
                    continue;
                }

                outcome.words.push(word);
            }
        }
    }

    outcome
}

/// Split a trimmed chunk into its trimmed name and body.
/// `None` unless the chunk has exactly one body delimiter.
fn split_category(chunk: &str) -> Option<(&str, &str)> {
    let mut parts = chunk.trim().split(BODY_DELIMITER);

    match (parts.next(), parts.next(), parts.next()) {
        (Some(name), Some(body), None) => Some((name.trim(), body)),
        _ => None,
    }
}

fn first_line(chunk: &str) -> &str {
    chunk.trim().lines().next().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(category: &str, fields: [&str; 5]) -> Word {
        let [word, pos, meaning, example, extra] = fields;
        Word {
            word: word.to_string(),
            part_of_speech: pos.to_string(),
            meaning: meaning.to_string(),
            category: category.to_string(),
            audio_filename: format!("{category}_{word}.mp3"),
            example: example.to_string(),
            extra: extra.to_string(),
        }
    }

    #[test]
    fn test_full_line() {
        let words = parse_vocabulary(
            "Travel\n+++\nairport|n|a place for planes|We went to the airport.|\n",
        );

        assert_eq!(
            words,
            vec![Word {
                word: "airport".to_string(),
                part_of_speech: "n".to_string(),
                meaning: "a place for planes".to_string(),
                category: "Travel".to_string(),
                audio_filename: "Travel_airport.mp3".to_string(),
                example: "We went to the airport.".to_string(),
                extra: String::new(),
            }]
        );
    }

    #[test]
    fn test_word_only_line() {
        let words = parse_vocabulary("Travel\n+++\nhotel\n");
        assert_eq!(words, vec![word("Travel", ["hotel", "", "", "", ""])]);
    }

    #[test]
    fn test_chunk_without_body_delimiter_is_dropped() {
        let outcome = parse(
            "Broken\nhotel|n\n===\nTravel\n+++\nairport|n\n",
            ParseOptions::default(),
        );

        assert_eq!(outcome.words, vec![word("Travel", ["airport", "n", "", "", ""])]);
        assert_eq!(outcome.skipped_categories, 1);
    }

    #[test]
    fn test_chunk_with_two_body_delimiters_is_dropped() {
        let outcome = parse(
            "Travel\n+++\nairport\n+++\nhotel\n",
            ParseOptions::default(),
        );

        assert!(outcome.words.is_empty());
        assert_eq!(outcome.skipped_categories, 1);
    }

    #[test]
    fn test_trailing_delimiters_are_not_counted() {
        let outcome = parse("===\nTravel\n+++\nhotel\n===\n", ParseOptions::default());

        assert_eq!(outcome.words, vec![word("Travel", ["hotel", "", "", "", ""])]);
        assert_eq!(outcome.skipped_categories, 0);
    }

    #[test]
    fn test_empty_body_is_dropped() {
        // the trim eats the newline after `+++`, leaving no delimiter
        assert!(parse_vocabulary("Travel\n+++\n").is_empty());
    }

    #[test]
    fn test_groups_share_category() {
        let words = parse_vocabulary("  Travel  \n+++\nairport|n\n---\nhotel|n\n");

        assert_eq!(
            words,
            vec![
                word("Travel", ["airport", "n", "", "", ""]),
                word("Travel", ["hotel", "n", "", "", ""]),
            ]
        );
    }

    #[test]
    fn test_order_across_categories_and_groups() {
        let text = "\
Travel
+++
airport|n
hotel|n

---
ticket|n
===
Food
+++
apple|n
---
bread|n
butter|n
";
        let words: Vec<_> = parse_vocabulary(text)
            .into_iter()
            .map(|w| (w.category, w.word))
            .collect();

        assert_eq!(
            words,
            [
                ("Travel", "airport"),
                ("Travel", "hotel"),
                ("Travel", "ticket"),
                ("Food", "apple"),
                ("Food", "bread"),
                ("Food", "butter"),
            ]
            .map(|(c, w)| (c.to_string(), w.to_string()))
        );
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let words = parse_vocabulary("Travel\n+++\n\n   \nhotel\n\t\nairport\n");
        assert_eq!(words.len(), 2);
    }

    #[test]
    fn test_fields_are_not_trimmed() {
        let words = parse_vocabulary("Travel\n+++\nhotel\n  inn | n \nairport\n");
        assert_eq!(words[1].word, "  inn ");
        assert_eq!(words[1].part_of_speech, " n ");
    }

    #[test]
    fn test_empty_word_is_kept_by_default() {
        let words = parse_vocabulary("Travel\n+++\n|\n");
        assert_eq!(words, vec![word("Travel", ["", "", "", "", ""])]);
        assert_eq!(words[0].audio_filename, "Travel_.mp3");
    }

    #[test]
    fn test_empty_word_skip_policy() {
        let options = ParseOptions {
            empty_words: EmptyWordPolicy::Skip,
        };
        let outcome = parse("Travel\n+++\n|n|nothing\nhotel\n", options);

        assert_eq!(outcome.words, vec![word("Travel", ["hotel", "", "", "", ""])]);
        assert_eq!(outcome.skipped_empty_words, 1);
    }

    #[test]
    fn test_delimiters_must_be_whole_lines() {
        // `===` without a line break right after it is plain text
        let words = parse_vocabulary("Travel\n+++\nequals|sym|a === b\n");
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].meaning, "a === b");
    }

    #[test]
    fn test_empty_input() {
        let outcome = parse("", ParseOptions::default());
        assert_eq!(outcome, ParseOutcome::default());
    }
}
