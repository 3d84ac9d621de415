//! Trivia Hangman - terminal entry point.
//!
//! Picks a question source, loads it, and plays the tiers against stdin and
//! stdout.

mod cli;

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::EnvFilter;
use trivia_hangman::game_engine::{
    console::{self, ConsolePresenter, LineInput},
    sources::resolve_path,
};
use trivia_hangman::{play_all_tiers, QuestionStore};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            println!("Unable to start game: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let color = !cli.no_color;
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    let (source, file) = match (cli.file, cli.source) {
        (Some(file), _) => (None, file),
        (None, Some(source)) => (Some(source), source.file_name().into()),
        (None, None) => {
            let chosen = console::ask_source(&mut stdin.lock(), &mut stdout, color)
                .context("failed to show the subject menu")?;
            let Some(source) = chosen else {
                info!("input closed before a subject was chosen");
                return Ok(());
            };
            (Some(source), source.file_name().into())
        }
    };

    let path = resolve_path(&file, &cli.data_dir);
    let store = QuestionStore::load(&path)?;
    info!(path = %path.display(), questions = store.len(), "questions loaded");

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    writeln!(stdout, "{}", console::banner(source, color))?;
    let mut input = LineInput::new(stdin.lock(), io::stdout());
    let mut presenter = ConsolePresenter::new(stdout, color);
    let game = play_all_tiers(&store, &mut rng, &mut input, &mut presenter);
    info!(total_score = game.total_score, tiers = game.tiers.len(), "game finished");
    Ok(())
}
