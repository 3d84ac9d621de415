//! Round Engine — one question from partial reveal to a win or a loss.
//!
//! [`Round`] is the pure state machine: it never prints, and every guess
//! returns a [`GuessOutcome`] describing what changed. [`play_round`] drives a
//! round against a [`GuessInput`] and reports progress to a [`Presenter`].

use std::collections::BTreeSet;

use rand::Rng;
use tracing::{debug, warn};

use crate::game_engine::{
    events::{GameEvent, GuessInput, Presenter},
    gallows,
    models::Question,
    selection::choose_hidden_positions,
};

/// Shown in place of a letter that is still hidden.
pub const PLACEHOLDER: char = '_';

/// Attempts granted on top of one per hidden letter.
pub const EXTRA_ATTEMPTS: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    Active,
    Won,
    Lost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Not exactly one letter. Nothing changed.
    Invalid,
    /// Already tried this round. Nothing changed.
    Duplicate(char),
    /// The letter is in the answer; `revealed` positions were newly uncovered.
    Hit { letter: char, revealed: usize },
    /// The letter is not in the answer and cost one attempt.
    Miss { letter: char, remaining: u32, stage: usize },
    /// The round had already ended. Nothing changed.
    Finished,
}

#[derive(Debug, Clone)]
pub struct Round {
    answer: Vec<char>,
    hidden: BTreeSet<usize>,
    revealed: BTreeSet<usize>,
    starting_attempts: u32,
    remaining_attempts: u32,
    guessed: BTreeSet<char>,
}

impl Round {
    /// Start a round with the given positions hidden. Out-of-range positions
    /// are ignored.
    pub fn new(answer: &str, hidden: BTreeSet<usize>) -> Self {
        let answer: Vec<char> = answer.chars().collect();
        let hidden: BTreeSet<usize> = hidden.into_iter().filter(|&i| i < answer.len()).collect();
        let revealed = (0..answer.len()).filter(|i| !hidden.contains(i)).collect();
        let starting_attempts = hidden.len() as u32 + EXTRA_ATTEMPTS;
        Round {
            answer,
            hidden,
            revealed,
            starting_attempts,
            remaining_attempts: starting_attempts,
            guessed: BTreeSet::new(),
        }
    }

    /// Start a round with randomly chosen hidden positions.
    pub fn start<R: Rng>(answer: &str, rng: &mut R) -> Self {
        let hidden = choose_hidden_positions(answer, rng);
        Self::new(answer, hidden)
    }

    pub fn status(&self) -> RoundStatus {
        if self.revealed.len() == self.answer.len() {
            RoundStatus::Won
        } else if self.remaining_attempts == 0 {
            RoundStatus::Lost
        } else {
            RoundStatus::Active
        }
    }

    /// Apply one raw line of player input.
    pub fn guess(&mut self, raw: &str) -> GuessOutcome {
        if self.status() != RoundStatus::Active {
            return GuessOutcome::Finished;
        }
        let Some(letter) = parse_guess(raw) else {
            return GuessOutcome::Invalid;
        };
        if !self.guessed.insert(letter) {
            return GuessOutcome::Duplicate(letter);
        }

        let before = self.revealed.len();
        self.revealed.extend(
            self.answer
                .iter()
                .enumerate()
                .filter(|&(_, &c)| c == letter)
                .map(|(i, _)| i),
        );
        if self.answer.contains(&letter) {
            return GuessOutcome::Hit { letter, revealed: self.revealed.len() - before };
        }

        self.remaining_attempts -= 1;
        GuessOutcome::Miss {
            letter,
            remaining: self.remaining_attempts,
            stage: self.stage(),
        }
    }

    /// Give up the round; used when the input source closes.
    pub fn forfeit(&mut self) {
        if self.status() == RoundStatus::Active {
            self.remaining_attempts = 0;
        }
    }

    /// Gallows stage for the mistakes made so far.
    pub fn stage(&self) -> usize {
        gallows::stage_index(self.mistakes(), self.starting_attempts)
    }

    pub fn mistakes(&self) -> u32 {
        self.starting_attempts - self.remaining_attempts
    }

    pub fn answer(&self) -> String {
        self.answer.iter().collect()
    }

    pub fn hidden_positions(&self) -> &BTreeSet<usize> {
        &self.hidden
    }

    pub fn revealed_positions(&self) -> &BTreeSet<usize> {
        &self.revealed
    }

    pub fn starting_attempts(&self) -> u32 {
        self.starting_attempts
    }

    pub fn remaining_attempts(&self) -> u32 {
        self.remaining_attempts
    }

    pub fn guessed_letters(&self) -> &BTreeSet<char> {
        &self.guessed
    }

    /// Each position of the answer, `None` where it is still hidden.
    pub fn cells(&self) -> Vec<Option<char>> {
        self.answer
            .iter()
            .enumerate()
            .map(|(i, &c)| self.revealed.contains(&i).then_some(c))
            .collect()
    }

    pub fn render(&self) -> String {
        render_word(&self.answer(), &self.revealed)
    }
}

/// Normalise raw input to a single lower-case letter.
pub fn parse_guess(raw: &str) -> Option<char> {
    let normalized = raw.trim().to_lowercase();
    let mut chars = normalized.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_alphabetic() => Some(c),
        _ => None,
    }
}

/// The word with every position outside `revealed` replaced by [`PLACEHOLDER`].
pub fn render_word(word: &str, revealed: &BTreeSet<usize>) -> String {
    word.chars()
        .enumerate()
        .map(|(i, c)| if revealed.contains(&i) { c } else { PLACEHOLDER })
        .collect()
}

/// How a finished round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundOutcome {
    pub status: RoundStatus,
    pub remaining_attempts: u32,
    pub stage: usize,
}

impl RoundOutcome {
    pub fn won(&self) -> bool {
        self.status == RoundStatus::Won
    }
}

/// Play one question to completion.
pub fn play_round<R, I, P>(
    number: usize,
    question: &Question,
    rng: &mut R,
    input: &mut I,
    presenter: &mut P,
) -> RoundOutcome
where
    R: Rng,
    I: GuessInput + ?Sized,
    P: Presenter + ?Sized,
{
    presenter.show(&GameEvent::QuestionAsked { number, prompt: &question.prompt });
    let mut round = Round::start(&question.answer, rng);
    debug!(number, hidden = ?round.hidden_positions(), "round started");

    loop {
        if round.status() == RoundStatus::Lost {
            presenter.show(&GameEvent::RoundLost { answer: &question.answer });
            break;
        }
        presenter.show(&GameEvent::Word { cells: round.cells() });
        if round.status() == RoundStatus::Won {
            presenter.show(&GameEvent::RoundWon);
            break;
        }

        let Some(raw) = input.read_guess() else {
            warn!(number, "guess input closed; forfeiting round");
            round.forfeit();
            continue;
        };
        match round.guess(&raw) {
            GuessOutcome::Invalid => presenter.show(&GameEvent::InvalidGuess),
            GuessOutcome::Duplicate(letter) => presenter.show(&GameEvent::DuplicateGuess { letter }),
            GuessOutcome::Hit { letter, .. } => presenter.show(&GameEvent::CorrectGuess { letter }),
            GuessOutcome::Miss { letter, remaining, stage } => {
                presenter.show(&GameEvent::WrongGuess { letter, stage, remaining })
            }
            GuessOutcome::Finished => {}
        }
    }

    let outcome = RoundOutcome {
        status: round.status(),
        remaining_attempts: round.remaining_attempts(),
        stage: round.stage(),
    };
    debug!(number, ?outcome, "round finished");
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positions(items: &[usize]) -> BTreeSet<usize> {
        items.iter().copied().collect()
    }

    #[test]
    fn initial_state_reveals_complement_of_hidden() {
        let round = Round::new("python", positions(&[1, 2, 4]));
        assert_eq!(round.revealed_positions(), &positions(&[0, 3, 5]));
        assert_eq!(round.starting_attempts(), 5);
        assert_eq!(round.render(), "p__h_n");
        assert_eq!(round.status(), RoundStatus::Active);
    }

    #[test]
    fn hit_reveals_every_occurrence() {
        let mut round = Round::new("banana", positions(&[1, 3, 5]));
        assert_eq!(round.guess("a"), GuessOutcome::Hit { letter: 'a', revealed: 3 });
        assert_eq!(round.status(), RoundStatus::Won);
        assert_eq!(round.remaining_attempts(), 5);
    }

    #[test]
    fn guesses_are_case_insensitive_and_trimmed() {
        let mut round = Round::new("cat", positions(&[0]));
        assert_eq!(round.guess("  C \n"), GuessOutcome::Hit { letter: 'c', revealed: 1 });
        assert_eq!(round.status(), RoundStatus::Won);
    }

    #[test]
    fn invalid_input_changes_nothing() {
        let mut round = Round::new("cat", positions(&[1]));
        for raw in ["", "ab", "1", "?", "   "] {
            assert_eq!(round.guess(raw), GuessOutcome::Invalid, "raw={raw:?}");
        }
        assert_eq!(round.remaining_attempts(), 3);
        assert!(round.guessed_letters().is_empty());
    }

    #[test]
    fn duplicate_guess_is_free() {
        let mut round = Round::new("cat", positions(&[1]));
        assert!(matches!(round.guess("z"), GuessOutcome::Miss { remaining: 2, .. }));
        let revealed = round.revealed_positions().clone();

        assert_eq!(round.guess("Z"), GuessOutcome::Duplicate('z'));
        assert_eq!(round.remaining_attempts(), 2);
        assert_eq!(round.revealed_positions(), &revealed);
    }

    #[test]
    fn three_misses_lose_a_three_letter_round() {
        let mut round = Round::new("cat", positions(&[2]));
        assert_eq!(round.starting_attempts(), 3);
        round.guess("x");
        round.guess("y");
        let last = round.guess("z");

        assert_eq!(last, GuessOutcome::Miss { letter: 'z', remaining: 0, stage: gallows::MAX_STAGE });
        assert_eq!(round.status(), RoundStatus::Lost);
        assert_eq!(round.remaining_attempts(), 0);
        assert_eq!(round.guess("t"), GuessOutcome::Finished);
    }

    #[test]
    fn guessing_an_already_revealed_letter_is_a_hit_without_cost() {
        let mut round = Round::new("cat", positions(&[1]));
        assert_eq!(round.guess("c"), GuessOutcome::Hit { letter: 'c', revealed: 0 });
        assert_eq!(round.remaining_attempts(), 3);
    }

    #[test]
    fn forfeit_ends_an_active_round_as_lost() {
        let mut round = Round::new("cat", positions(&[1]));
        round.forfeit();
        assert_eq!(round.status(), RoundStatus::Lost);
        assert_eq!(round.stage(), gallows::MAX_STAGE);
    }

    #[test]
    fn render_word_uses_placeholder_for_hidden_positions() {
        assert_eq!(render_word("python", &positions(&[0, 3, 5])), "p__h_n");
        assert_eq!(render_word("python", &positions(&[0, 1, 2, 3, 4, 5])), "python");
        assert_eq!(render_word("go", &BTreeSet::new()), "__");
    }

    #[test]
    fn cells_match_render() {
        let round = Round::new("rust", positions(&[0, 2]));
        assert_eq!(round.cells(), vec![None, Some('u'), None, Some('t')]);
    }
}
