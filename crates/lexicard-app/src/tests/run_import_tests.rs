use std::cell::{Cell, RefCell};

use lexicard_anki::{AnkiConnectClient, AnkiError, Note, NoteOptions};
use lexicard_vocab::parse_vocabulary;
use serde_json::json;

use super::responder::respond_sequence;
use crate::import::{DeckTarget, NoteSink, NoteTemplate, run_import};

const DOCUMENT: &str = "\
Travel
+++
airport|n
hotel|n
ticket|n
";

fn template() -> NoteTemplate {
    NoteTemplate {
        model: "Vocabulary".to_string(),
        tags: Vec::new(),
        options: NoteOptions::default(),
        audio_dir: None,
    }
}

/// In-memory deck: optional create failure, optional rejected words
#[derive(Default)]
struct FakeDeck {
    create_error: Option<&'static str>,
    reject: Vec<&'static str>,
    created: Cell<bool>,
    received: RefCell<Vec<String>>,
}

impl NoteSink for FakeDeck {
    async fn add_note(&self, note: &Note) -> lexicard_anki::Result<u64> {
        assert!(self.created.get(), "note added before the deck was created");
        let word = note.fields["word"].clone();
        self.received.borrow_mut().push(word.clone());

        if self.reject.iter().any(|r| *r == word) {
            return Err(AnkiError::Remote(
                "cannot create note because it is a duplicate".to_string(),
            ));
        }
        Ok(self.received.borrow().len() as u64)
    }
}

impl DeckTarget for FakeDeck {
    fn name(&self) -> &str {
        "English"
    }

    async fn create(&self) -> lexicard_anki::Result<u64> {
        match self.create_error {
            Some(msg) => Err(AnkiError::Remote(msg.to_string())),
            None => {
                self.created.set(true);
                Ok(1)
            }
        }
    }
}

/// Fails the test on any contact
struct UntouchableDeck;

impl NoteSink for UntouchableDeck {
    async fn add_note(&self, _note: &Note) -> lexicard_anki::Result<u64> {
        panic!("dry run must not add notes");
    }
}

impl DeckTarget for UntouchableDeck {
    fn name(&self) -> &str {
        "English"
    }

    async fn create(&self) -> lexicard_anki::Result<u64> {
        panic!("dry run must not create the deck");
    }
}

#[tokio::test]
async fn test_dry_run_sends_nothing() {
    let words = parse_vocabulary(DOCUMENT);

    let summary = run_import(&UntouchableDeck, &template(), &words, true)
        .await
        .unwrap();

    assert_eq!(summary.total(), 0);
    assert!(summary.is_success());
}

#[tokio::test]
async fn test_create_failure_stops_before_any_note() {
    let words = parse_vocabulary(DOCUMENT);
    let deck = FakeDeck {
        create_error: Some("collection is not available"),
        ..Default::default()
    };

    let err = run_import(&deck, &template(), &words, false)
        .await
        .unwrap_err();

    assert!(format!("{err:#}").contains("Failed to open deck English"));
    assert!(format!("{err:#}").contains("collection is not available"));
    assert!(deck.received.borrow().is_empty());
}

#[tokio::test]
async fn test_one_rejected_word_fails_the_run() {
    let words = parse_vocabulary(DOCUMENT);
    let deck = FakeDeck {
        reject: vec!["hotel"],
        ..Default::default()
    };

    let summary = run_import(&deck, &template(), &words, false)
        .await
        .unwrap();

    assert_eq!(summary.added, 2);
    assert_eq!(summary.failed, vec!["Travel/hotel"]);
    assert!(!summary.is_success());
    assert_eq!(*deck.received.borrow(), ["airport", "hotel", "ticket"]);
}

#[tokio::test]
async fn test_import_against_anki_connect() {
    let words = parse_vocabulary(DOCUMENT);
    let (url, server) = respond_sequence(&[
        r#"{"result": 1651445861967, "error": null}"#,
        r#"{"result": 101, "error": null}"#,
        r#"{"result": 102, "error": null}"#,
        r#"{"result": 103, "error": null}"#,
    ])
    .await;
    let client = AnkiConnectClient::new(url).unwrap();
    let deck = client.open_deck("English");

    let summary = run_import(&deck, &template(), &words, false)
        .await
        .unwrap();

    assert_eq!(summary.added, 3);
    assert!(summary.is_success());

    let requests = server.await.unwrap();
    let actions: Vec<_> = requests.iter().map(|r| r["action"].clone()).collect();
    assert_eq!(actions, [json!("createDeck"), json!("addNote"), json!("addNote"), json!("addNote")]);
    assert_eq!(requests[0]["params"], json!({"deck": "English"}));
    assert_eq!(requests[1]["params"]["note"]["deckName"], "English");
    assert_eq!(requests[3]["params"]["note"]["fields"]["word"], "ticket");
}
