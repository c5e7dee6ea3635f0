use super::{DifficultyLevel, QuestionType};

/// One requested batch of questions of a single type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionTypeCount {
    pub question_type: QuestionType,
    pub count: u32,
}

/// A validated quiz generation request.
///
/// Invariant: `total_questions` equals the sum of the per-type counts.
/// Constructed once per request and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizConfig {
    pub topic: String,
    pub question_types: Vec<QuestionTypeCount>,
    pub difficulty: DifficultyLevel,
    pub learning_objective: Option<String>,
    pub domains: Vec<String>,
    pub total_questions: u32,
}
