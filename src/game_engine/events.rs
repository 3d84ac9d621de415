//! The engine's two outside collaborators: where guesses come from, and where
//! everything the player should see goes.

use crate::game_engine::models::{Difficulty, TierResult};

/// Everything the engine asks a presenter to show, in the order it happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent<'a> {
    TierStarted { difficulty: Difficulty, questions: usize },
    QuestionAsked { number: usize, prompt: &'a str },
    /// The answer with each position either revealed or still hidden.
    Word { cells: Vec<Option<char>> },
    InvalidGuess,
    DuplicateGuess { letter: char },
    CorrectGuess { letter: char },
    WrongGuess { letter: char, stage: usize, remaining: u32 },
    RoundWon,
    RoundLost { answer: &'a str },
    TierFinished { result: TierResult },
    TierFailed { difficulty: Difficulty },
    AllTiersCleared,
    GameOver { total_score: usize },
}

pub trait Presenter {
    fn show(&mut self, event: &GameEvent<'_>);
}

/// Source of raw guess text, one line per call. `None` means no more input
/// will ever arrive.
pub trait GuessInput {
    fn read_guess(&mut self) -> Option<String>;
}

/// A presenter that shows nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl Presenter for Silent {
    fn show(&mut self, _event: &GameEvent<'_>) {}
}
