use std::fmt;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Difficulty tiers
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Tiers in the order a game plays them.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Parse a raw label. Surrounding whitespace and case are ignored.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "easy"   => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard"   => Some(Difficulty::Hard),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy   => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard   => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy   => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard   => write!(f, "Hard"),
        }
    }
}

// ---------------------------------------------------------------------------
// Questions
// ---------------------------------------------------------------------------

/// One validated trivia record. Prompt and answer are trimmed and non-empty;
/// the answer is lower-cased.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub prompt: String,
    pub answer: String,
    pub difficulty: Difficulty,
}

impl Question {
    pub fn new(prompt: impl Into<String>, answer: impl Into<String>, difficulty: Difficulty) -> Self {
        Question {
            prompt: prompt.into(),
            answer: answer.into(),
            difficulty,
        }
    }
}

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

/// Number of questions drawn for each tier.
pub const QUESTIONS_PER_TIER: usize = 10;

/// Share of a full tier (in percent) that must be answered to pass.
pub const PASS_PERCENT: usize = 80;

/// Correct answers a tier needs to pass: `ceil(10 * 0.80) = 8`.
pub const fn required_to_pass() -> usize {
    (QUESTIONS_PER_TIER * PASS_PERCENT).div_ceil(100)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierResult {
    pub difficulty: Difficulty,
    pub correct_count: usize,
    pub total_attempted: usize,
}

impl TierResult {
    pub fn passed(&self) -> bool {
        self.correct_count >= required_to_pass()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    /// Sum of the scores of every tier that passed.
    pub total_score: usize,
    /// Every tier that was played, in order, including the one that failed.
    pub tiers: Vec<TierResult>,
}

impl GameResult {
    /// True when all three tiers were played and passed.
    pub fn cleared_all(&self) -> bool {
        self.tiers.len() == Difficulty::ALL.len() && self.tiers.iter().all(TierResult::passed)
    }
}
