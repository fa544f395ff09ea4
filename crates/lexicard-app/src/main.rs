use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use lexicard_anki::AnkiConnectClient;
use lexicard_config::Config;
use lexicard_vocab::{EmptyWordPolicy, ParseOptions, ParseOutcome, load_vocabulary};
use tracing_subscriber::EnvFilter;

mod cli;
mod import;
mod profile;
mod status;

#[cfg(test)]
mod tests;

use self::cli::{Cli, Command, ImportArgs};
use self::import::{NoteTemplate, run_import};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.log_json);

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so `parse` output stays clean
fn init_tracing(verbose: bool, json: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let mut config = profile::load_config(cli.config.as_deref())?;
    cli.apply(&mut config);

    // One client for the whole run
    let client = AnkiConnectClient::new(config.anki.url.clone())
        .context("Failed to build the HTTP client")?;

    match &cli.command {
        Command::Import(args) => import(&client, &config, args).await,
        Command::Parse(_) => {
            let outcome = read_vocabulary(&config)?;
            println!("{}", serde_json::to_string_pretty(&outcome.words)?);
            Ok(ExitCode::SUCCESS)
        }
        Command::Decks => {
            let decks = client
                .deck_names()
                .await
                .context("Failed to list decks")?;
            for deck in decks {
                println!("{deck}");
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Check => {
            let version = client
                .check_connection()
                .await
                .with_context(|| format!("AnkiConnect is not reachable at {}", client.base_url()))?;
            println!("AnkiConnect version {version}");
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn read_vocabulary(config: &Config) -> anyhow::Result<ParseOutcome> {
    let empty_words = if config.vocabulary.skip_empty_words {
        EmptyWordPolicy::Skip
    } else {
        EmptyWordPolicy::Keep
    };

    let outcome = load_vocabulary(&config.vocabulary.path, ParseOptions { empty_words })?;
    Ok(outcome)
}

async fn import(
    client: &AnkiConnectClient,
    config: &Config,
    args: &ImportArgs,
) -> anyhow::Result<ExitCode> {
    let outcome = read_vocabulary(config)?;
    let template = NoteTemplate::from_config(config);
    let deck = client.open_deck(config.anki.deck.clone());

    let summary = run_import(&deck, &template, &outcome.words, args.dry_run).await?;
    Ok(summary.exit_code())
}
