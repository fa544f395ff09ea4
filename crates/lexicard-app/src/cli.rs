use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use lexicard_config::Config;

#[derive(Debug, Parser)]
#[command(name = "lexicard", version, about = "Import vocabulary lists into Anki")]
pub struct Cli {
    /// JSON profile with `anki` and `vocabulary` sections
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// AnkiConnect URL
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// Debug logging unless RUST_LOG is set
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Parse the vocabulary file and add every word as a note
    Import(ImportArgs),
    /// Parse the vocabulary file and print the words as JSON
    Parse(SourceArgs),
    /// List deck names
    Decks,
    /// Print the AnkiConnect version
    Check,
}

#[derive(Debug, Args)]
pub struct SourceArgs {
    /// Vocabulary file
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Drop lines with an empty word field
    #[arg(long)]
    pub skip_empty: bool,
}

#[derive(Debug, Args)]
pub struct ImportArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    #[arg(long)]
    pub deck: Option<String>,

    /// Note type
    #[arg(long)]
    pub model: Option<String>,

    /// Root of the `<category>/<word>.mp3` audio tree
    #[arg(long)]
    pub audio_dir: Option<PathBuf>,

    /// Tag added to every note, repeatable
    #[arg(long = "tag")]
    pub tags: Vec<String>,

    /// Build the notes without sending them
    #[arg(long)]
    pub dry_run: bool,
}

impl Cli {
    /// Command line flags win over the profile and the environment
    pub fn apply(&self, config: &mut Config) {
        if let Some(url) = &self.url {
            config.anki.url = url.clone();
        }

        match &self.command {
            Command::Import(args) => {
                args.source.apply(config);
                if let Some(deck) = &args.deck {
                    config.anki.deck = deck.clone();
                }
                if let Some(model) = &args.model {
                    config.anki.model = model.clone();
                }
                if let Some(audio_dir) = &args.audio_dir {
                    config.vocabulary.audio_dir = Some(audio_dir.clone());
                }
                if !args.tags.is_empty() {
                    config.anki.tags = args.tags.clone();
                }
            }
            Command::Parse(args) => args.apply(config),
            Command::Decks | Command::Check => {}
        }
    }
}

impl SourceArgs {
    fn apply(&self, config: &mut Config) {
        if let Some(file) = &self.file {
            config.vocabulary.path = file.clone();
        }
        if self.skip_empty {
            config.vocabulary.skip_empty_words = true;
        }
    }
}
