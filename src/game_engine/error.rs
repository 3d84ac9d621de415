//! Data errors raised while loading a question source.
//!
//! These are the only failures that abort a game, and they all happen before
//! the first round starts. Bad guesses are ordinary round outcomes, not errors.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("could not read question file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("question file {} is not valid JSON: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("question data must be a JSON array of records")]
    NotAList,

    #[error("no valid questions found in the question data")]
    NoValidQuestions,
}
