//! Question Store — validates raw records into [`Question`]s and holds them.
//!
//! The store is built once at startup and never mutated afterwards. Tier
//! pools are derived views obtained by filtering on difficulty.

use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::{debug, info};

use crate::game_engine::{
    error::GameError,
    models::{Difficulty, Question},
};

#[derive(Debug, Clone)]
pub struct QuestionStore {
    questions: Vec<Question>,
}

impl QuestionStore {
    /// Validate untyped records, silently dropping any that lack a prompt, an
    /// answer, or a recognised difficulty.
    pub fn from_records(records: &[Value]) -> Result<Self, GameError> {
        let questions: Vec<Question> = records
            .iter()
            .enumerate()
            .filter_map(|(index, record)| {
                let question = validate(record);
                if question.is_none() {
                    debug!(index, "dropping invalid question record");
                }
                question
            })
            .collect();

        if questions.is_empty() {
            return Err(GameError::NoValidQuestions);
        }
        info!(valid = questions.len(), total = records.len(), "question store loaded");
        Ok(QuestionStore { questions })
    }

    /// Parse a JSON document whose top level is an array of records.
    pub fn from_value(document: Value) -> Result<Self, GameError> {
        match document {
            Value::Array(records) => Self::from_records(&records),
            _ => Err(GameError::NotAList),
        }
    }

    /// Read and validate a question file.
    pub fn load(path: &Path) -> Result<Self, GameError> {
        let text = fs::read_to_string(path).map_err(|source| GameError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let document: Value = serde_json::from_str(&text).map_err(|source| GameError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_value(document)
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// The pool for one tier, in store order.
    pub fn by_difficulty(&self, difficulty: Difficulty) -> Vec<&Question> {
        self.questions
            .iter()
            .filter(|q| q.difficulty == difficulty)
            .collect()
    }
}

fn validate(record: &Value) -> Option<Question> {
    let prompt = field_text(record, "question").trim().to_string();
    let answer = field_text(record, "answer").trim().to_lowercase();
    let difficulty = Difficulty::from_label(&field_text(record, "difficulty"))?;
    if prompt.is_empty() || answer.is_empty() {
        return None;
    }
    Some(Question { prompt, answer, difficulty })
}

/// Text of a scalar field; missing, null and nested values read as empty.
fn field_text(record: &Value, key: &str) -> String {
    match record.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b))   => b.to_string(),
        _ => String::new(),
    }
}
