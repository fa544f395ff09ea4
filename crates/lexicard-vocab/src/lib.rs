mod error;
mod loader;
mod parser;
mod word;

pub use error::VocabError;
pub use loader::load_vocabulary;
pub use parser::{EmptyWordPolicy, ParseOptions, ParseOutcome, parse, parse_vocabulary};
pub use word::Word;
