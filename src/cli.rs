//! Command-line interface for trivia-hangman.

use std::path::PathBuf;

use clap::Parser;
use trivia_hangman::QuestionSource;

/// Trivia Hangman - guess the hidden letters of programming trivia answers
#[derive(Parser, Debug)]
#[command(name = "trivia-hangman")]
#[command(about = "Terminal hangman over trivia questions in three difficulty tiers", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subject to play; skips the start menu
    #[arg(long, value_enum)]
    pub source: Option<QuestionSource>,

    /// Question file to load instead of a built-in subject
    #[arg(long, conflicts_with = "source")]
    pub file: Option<PathBuf>,

    /// Directory the built-in subject files are read from
    #[arg(long, default_value = "data")]
    pub data_dir: PathBuf,

    /// Seed for question and letter selection (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::parse_from(["trivia-hangman"]);
        assert_eq!(cli.source, None);
        assert_eq!(cli.data_dir, PathBuf::from("data"));
        assert_eq!(cli.seed, None);
        assert!(!cli.no_color);
    }

    #[test]
    fn source_names_parse() {
        let cli = Cli::parse_from(["trivia-hangman", "--source", "csharp", "--seed", "42"]);
        assert_eq!(cli.source, Some(QuestionSource::CSharp));
        assert_eq!(cli.seed, Some(42));
    }

    #[test]
    fn file_conflicts_with_source() {
        let result = Cli::try_parse_from(["trivia-hangman", "--source", "ruby", "--file", "q.json"]);
        assert!(result.is_err());
    }
}
