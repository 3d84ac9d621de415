//! Tier Orchestrator — easy, then medium, then hard, stopping at the first
//! tier that falls short of the pass mark.

use rand::Rng;
use tracing::info;

use crate::game_engine::{
    events::{GameEvent, GuessInput, Presenter},
    models::{Difficulty, GameResult, TierResult, QUESTIONS_PER_TIER},
    round::play_round,
    selection::select_random_questions,
    store::QuestionStore,
};

/// Play every round of one tier and tally the correct answers.
pub fn play_tier<R, I, P>(
    store: &QuestionStore,
    difficulty: Difficulty,
    rng: &mut R,
    input: &mut I,
    presenter: &mut P,
) -> TierResult
where
    R: Rng,
    I: GuessInput + ?Sized,
    P: Presenter + ?Sized,
{
    let pool = store.by_difficulty(difficulty);
    let selected = select_random_questions(&pool, QUESTIONS_PER_TIER, rng);
    presenter.show(&GameEvent::TierStarted { difficulty, questions: selected.len() });

    let mut correct_count = 0;
    for (i, question) in selected.iter().enumerate() {
        if play_round(i + 1, question, rng, input, presenter).won() {
            correct_count += 1;
        }
    }

    let result = TierResult {
        difficulty,
        correct_count,
        total_attempted: selected.len(),
    };
    info!(%difficulty, correct = correct_count, attempted = result.total_attempted, passed = result.passed(), "tier finished");
    presenter.show(&GameEvent::TierFinished { result });
    result
}

/// Run a whole game. Only tiers that pass add to the total score.
pub fn play_all_tiers<R, I, P>(
    store: &QuestionStore,
    rng: &mut R,
    input: &mut I,
    presenter: &mut P,
) -> GameResult
where
    R: Rng,
    I: GuessInput + ?Sized,
    P: Presenter + ?Sized,
{
    let mut game = GameResult::default();

    for difficulty in Difficulty::ALL {
        let result = play_tier(store, difficulty, rng, input, presenter);
        game.tiers.push(result);
        if !result.passed() {
            presenter.show(&GameEvent::TierFailed { difficulty });
            break;
        }
        game.total_score += result.correct_count;
    }

    if game.cleared_all() {
        presenter.show(&GameEvent::AllTiersCleared);
    }
    presenter.show(&GameEvent::GameOver { total_score: game.total_score });
    game
}
