mod client;
mod deck;
mod error;
mod note;


pub use client::{API_VERSION, AnkiConnectClient, DEFAULT_URL};
pub use deck::{CardAnswer, Deck};
pub use error::{AnkiError, Result};
pub use note::{Media, MediaSource, Note, NoteOptions, NoteUpdate};
