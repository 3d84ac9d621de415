//! Core game engine — question validation, selection, rounds, and tiers.
//!
//! ## Module overview
//!
//! | Module      | Purpose |
//! |-------------|---------|
//! | `models`    | Shared types: questions, difficulty tiers, tier and game results |
//! | `error`     | Data errors that abort startup |
//! | `store`     | Validates raw JSON records into the question pool |
//! | `selection` | Non-destructive question sampling and hidden-letter choice |
//! | `gallows`   | Failure-stage drawings and the stage-index formula |
//! | `round`     | The per-question reveal/guess state machine |
//! | `tiers`     | Runs easy → medium → hard, gated on the pass mark |
//! | `events`    | Presenter and guess-input collaborator traits |
//! | `sources`   | The fixed menu of question files |
//! | `console`   | Terminal implementations of the collaborators |

pub mod console;
pub mod error;
pub mod events;
pub mod gallows;
pub mod models;
pub mod round;
pub mod selection;
pub mod sources;
pub mod store;
pub mod tiers;

// Re-export the public API surface so callers can use
// `game_engine::play_all_tiers` without reaching into sub-modules.
pub use error::GameError;
pub use events::{GameEvent, GuessInput, Presenter, Silent};
pub use models::{Difficulty, GameResult, Question, TierResult, QUESTIONS_PER_TIER};
pub use round::{play_round, render_word, GuessOutcome, Round, RoundOutcome, RoundStatus};
pub use selection::{choose_hidden_positions, hidden_count, select_random_questions};
pub use sources::QuestionSource;
pub use store::QuestionStore;
pub use tiers::{play_all_tiers, play_tier};
