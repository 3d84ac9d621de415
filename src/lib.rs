//! # trivia_hangman
//!
//! A terminal hangman game driven by trivia questions.
//!
//! Questions are loaded from a JSON file of `{question, answer, difficulty}`
//! records. Each round shows the prompt and the answer with a few letters
//! hidden; the player guesses letters until the word is complete or the
//! attempt budget runs out. A game plays up to three tiers (easy, medium,
//! hard) of ten questions each, and a tier must score at least 8 for the next
//! one to start.
//!
//! ## How it works
//!
//! 1. Build a [`QuestionStore`] from a file or from raw records. Invalid
//!    records are dropped; a store with nothing valid is a [`GameError`].
//! 2. Call [`play_all_tiers`] with a seeded or entropy RNG, a [`GuessInput`]
//!    and a [`Presenter`]. The engine never prints on its own; every message
//!    goes through the presenter as a [`GameEvent`].
//! 3. The returned [`GameResult`] holds the total score and every tier played.
//!
//! ## Key features
//!
//! - **Deterministic**: the RNG is passed in explicitly, so a seeded `StdRng`
//!   replays the same questions and the same hidden letters.
//! - **Pure round engine**: [`Round`] is a plain state machine that returns a
//!   [`GuessOutcome`] per guess and can be driven directly in tests.
//! - **Non-destructive selection**: [`select_random_questions`] never
//!   modifies the pool it samples.
//!
//! ## Quick start
//!
//! ```rust
//! use std::collections::BTreeSet;
//! use trivia_hangman::{GuessOutcome, Round, RoundStatus};
//!
//! let mut round = Round::new("python", BTreeSet::from([1, 2, 4]));
//! assert_eq!(round.render(), "p__h_n");
//!
//! assert!(matches!(round.guess("y"), GuessOutcome::Hit { .. }));
//! assert!(matches!(round.guess("q"), GuessOutcome::Miss { remaining: 4, .. }));
//! round.guess("t");
//! round.guess("o");
//! assert_eq!(round.status(), RoundStatus::Won);
//! ```

pub mod game_engine;

// Convenience re-exports so callers can use `trivia_hangman::play_all_tiers`
// directly without reaching into `game_engine::`.
pub use game_engine::{
    choose_hidden_positions, hidden_count, play_all_tiers, play_round, play_tier, render_word,
    select_random_questions, Difficulty, GameError, GameEvent, GameResult, GuessInput,
    GuessOutcome, Presenter, Question, QuestionSource, QuestionStore, Round, RoundOutcome,
    RoundStatus, Silent, TierResult, QUESTIONS_PER_TIER,
};
