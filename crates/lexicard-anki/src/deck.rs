use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::{AnkiConnectClient, NoParams};
use crate::error::Result;
use crate::note::{Note, NoteUpdate};

/// A client bound to one deck. Notes sent through it always land in that deck.
pub struct Deck<'a> {
    client: &'a AnkiConnectClient,
    name: String,
}

/// Review answer for `answerCards`; ease is 1 (again) to 4 (easy)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardAnswer {
    pub card_id: u64,
    pub ease: u8,
}

#[derive(Serialize)]
struct Cards<'a> {
    cards: &'a [u64],
}

#[derive(Serialize)]
struct Card {
    card: u64,
}

#[derive(Serialize)]
struct Notes<'a> {
    notes: &'a [u64],
}

#[derive(Serialize)]
struct Query<'a> {
    query: &'a str,
}

#[derive(Serialize)]
struct Intervals<'a> {
    cards: &'a [u64],
    complete: bool,
}

#[derive(Serialize)]
struct TaggedNotes<'a> {
    notes: &'a [u64],
    tags: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DeckNote<'a> {
    deck_name: &'a str,
    #[serde(flatten)]
    note: &'a Note,
}

#[derive(Serialize)]
struct SingleNote<'a, N> {
    note: &'a N,
}

#[derive(Serialize)]
struct ManyNotes<'a> {
    notes: Vec<DeckNote<'a>>,
}

impl<'a> Deck<'a> {
    pub(crate) fn new(client: &'a AnkiConnectClient, name: String) -> Self {
        Self { client, name }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Create the deck if it does not exist yet, returning its id
    pub async fn create(&self) -> Result<u64> {
        self.client.create_deck(&self.name).await
    }

    fn bind<'n>(&'n self, notes: &'n [Note]) -> ManyNotes<'n> {
        ManyNotes {
            notes: notes
                .iter()
                .map(|note| DeckNote {
                    deck_name: &self.name,
                    note,
                })
                .collect(),
        }
    }

    // Cards

    pub async fn ease_factors(&self, cards: &[u64]) -> Result<Vec<u32>> {
        self.client.invoke("getEaseFactors", &Cards { cards }).await
    }

    pub async fn set_ease_factors(&self, cards: &[u64], ease_factors: &[u32]) -> Result<Vec<bool>> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Params<'p> {
            cards: &'p [u64],
            ease_factors: &'p [u32],
        }

        self.client
            .invoke("setEaseFactors", &Params { cards, ease_factors })
            .await
    }

    pub async fn set_specific_value_of_card(
        &self,
        card: u64,
        keys: &[String],
        new_values: &[String],
    ) -> Result<Vec<bool>> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Params<'p> {
            card: u64,
            keys: &'p [String],
            new_values: &'p [String],
        }

        self.client
            .invoke(
                "setSpecificValueOfCard",
                &Params {
                    card,
                    keys,
                    new_values,
                },
            )
            .await
    }

    pub async fn suspend_cards(&self, cards: &[u64]) -> Result<bool> {
        self.client.invoke("suspend", &Cards { cards }).await
    }

    pub async fn unsuspend_cards(&self, cards: &[u64]) -> Result<bool> {
        self.client.invoke("unsuspend", &Cards { cards }).await
    }

    pub async fn is_suspended(&self, card: u64) -> Result<bool> {
        self.client.invoke("suspended", &Card { card }).await
    }

    /// `None` for card ids that do not exist
    pub async fn are_suspended(&self, cards: &[u64]) -> Result<Vec<Option<bool>>> {
        self.client.invoke("areSuspended", &Cards { cards }).await
    }

    pub async fn are_due(&self, cards: &[u64]) -> Result<Vec<bool>> {
        self.client.invoke("areDue", &Cards { cards }).await
    }

    /// Most recent interval of each card, negative values are seconds, positive are days
    pub async fn intervals(&self, cards: &[u64]) -> Result<Vec<i64>> {
        self.client
            .invoke("getIntervals", &Intervals { cards, complete: false })
            .await
    }

    /// Every interval each card has had
    pub async fn interval_history(&self, cards: &[u64]) -> Result<Vec<Vec<i64>>> {
        self.client
            .invoke("getIntervals", &Intervals { cards, complete: true })
            .await
    }

    pub async fn find_cards(&self, query: &str) -> Result<Vec<u64>> {
        self.client.invoke("findCards", &Query { query }).await
    }

    pub async fn cards_to_notes(&self, cards: &[u64]) -> Result<Vec<u64>> {
        self.client.invoke("cardsToNotes", &Cards { cards }).await
    }

    pub async fn cards_mod_time(&self, cards: &[u64]) -> Result<Vec<Value>> {
        self.client.invoke("cardsModTime", &Cards { cards }).await
    }

    pub async fn cards_info(&self, cards: &[u64]) -> Result<Vec<Value>> {
        self.client.invoke("cardsInfo", &Cards { cards }).await
    }

    /// Reset cards to new
    pub async fn forget_cards(&self, cards: &[u64]) -> Result<()> {
        self.client.invoke("forgetCards", &Cards { cards }).await
    }

    pub async fn relearn_cards(&self, cards: &[u64]) -> Result<()> {
        self.client.invoke("relearnCards", &Cards { cards }).await
    }

    pub async fn answer_cards(&self, answers: &[CardAnswer]) -> Result<Vec<bool>> {
        #[derive(Serialize)]
        struct Params<'p> {
            answers: &'p [CardAnswer],
        }

        self.client.invoke("answerCards", &Params { answers }).await
    }

    // Notes

    /// Add a note to this deck, returning the new note id
    pub async fn add_note(&self, note: &Note) -> Result<u64> {
        let note = DeckNote {
            deck_name: &self.name,
            note,
        };

        self.client
            .invoke("addNote", &SingleNote { note: &note })
            .await
    }

    /// `None` for every note that could not be added
    pub async fn add_notes(&self, notes: &[Note]) -> Result<Vec<Option<u64>>> {
        self.client.invoke("addNotes", &self.bind(notes)).await
    }

    pub async fn can_add_notes(&self, notes: &[Note]) -> Result<Vec<bool>> {
        self.client.invoke("canAddNotes", &self.bind(notes)).await
    }

    pub async fn can_add_notes_with_error_detail(&self, notes: &[Note]) -> Result<Vec<Value>> {
        self.client
            .invoke("canAddNotesWithErrorDetail", &self.bind(notes))
            .await
    }

    pub async fn update_note_fields(&self, update: &NoteUpdate) -> Result<()> {
        self.client
            .invoke("updateNoteFields", &SingleNote { note: update })
            .await
    }

    /// Update fields and/or tags in one call
    pub async fn update_note(&self, update: &NoteUpdate) -> Result<()> {
        self.client
            .invoke("updateNote", &SingleNote { note: update })
            .await
    }

    pub async fn find_notes(&self, query: &str) -> Result<Vec<u64>> {
        self.client.invoke("findNotes", &Query { query }).await
    }

    pub async fn notes_info(&self, notes: &[u64]) -> Result<Vec<Value>> {
        self.client.invoke("notesInfo", &Notes { notes }).await
    }

    pub async fn delete_notes(&self, notes: &[u64]) -> Result<()> {
        self.client.invoke("deleteNotes", &Notes { notes }).await
    }

    pub async fn remove_empty_notes(&self) -> Result<()> {
        self.client.invoke("removeEmptyNotes", &NoParams {}).await
    }

    // Tags

    pub async fn update_note_tags(&self, note: u64, tags: &[String]) -> Result<()> {
        #[derive(Serialize)]
        struct Params<'p> {
            note: u64,
            tags: &'p [String],
        }

        self.client
            .invoke("updateNoteTags", &Params { note, tags })
            .await
    }

    pub async fn note_tags(&self, note: u64) -> Result<Vec<String>> {
        #[derive(Serialize)]
        struct Params {
            note: u64,
        }

        self.client.invoke("getNoteTags", &Params { note }).await
    }

    /// `tags` is space separated
    pub async fn add_tags(&self, notes: &[u64], tags: &str) -> Result<()> {
        self.client
            .invoke("addTags", &TaggedNotes { notes, tags })
            .await
    }

    pub async fn remove_tags(&self, notes: &[u64], tags: &str) -> Result<()> {
        self.client
            .invoke("removeTags", &TaggedNotes { notes, tags })
            .await
    }

    pub async fn tags(&self) -> Result<Vec<String>> {
        self.client.invoke("getTags", &NoParams {}).await
    }

    pub async fn clear_unused_tags(&self) -> Result<()> {
        self.client.invoke("clearUnusedTags", &NoParams {}).await
    }

    pub async fn replace_tags(
        &self,
        notes: &[u64],
        tag_to_replace: &str,
        replace_with_tag: &str,
    ) -> Result<()> {
        #[derive(Serialize)]
        struct Params<'p> {
            notes: &'p [u64],
            tag_to_replace: &'p str,
            replace_with_tag: &'p str,
        }

        self.client
            .invoke(
                "replaceTags",
                &Params {
                    notes,
                    tag_to_replace,
                    replace_with_tag,
                },
            )
            .await
    }

    pub async fn replace_tags_in_all_notes(
        &self,
        tag_to_replace: &str,
        replace_with_tag: &str,
    ) -> Result<()> {
        #[derive(Serialize)]
        struct Params<'p> {
            tag_to_replace: &'p str,
            replace_with_tag: &'p str,
        }

        self.client
            .invoke(
                "replaceTagsInAllNotes",
                &Params {
                    tag_to_replace,
                    replace_with_tag,
                },
            )
            .await
    }
}
