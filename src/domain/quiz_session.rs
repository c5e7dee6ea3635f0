use chrono::{DateTime, Utc};

use super::DifficultyLevel;

/// A persisted quiz generation run.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizSession {
    pub id: i64,
    pub topic: String,
    pub difficulty: DifficultyLevel,
    pub learning_objective: Option<String>,
    pub total_questions: u32,
    pub created_at: DateTime<Utc>,
}
