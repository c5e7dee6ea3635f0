use async_trait::async_trait;

use crate::domain::{DifficultyLevel, DomainTopic, QuestionType};

use super::RawQuestion;

/// One unit of generation work: a (question type, domain-or-none, count)
/// group as planned by the assembler.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub topic: String,
    pub count: u32,
    pub question_type: QuestionType,
    pub difficulty: DifficultyLevel,
    pub learning_objective: Option<String>,
    pub domain: Option<String>,
    pub custom_instructions: Option<String>,
}

#[async_trait]
pub trait QuestionGenerator: Send + Sync {
    /// Generate raw question items for one group. Items are validated and
    /// filtered by the normalizer afterwards, so providers may return
    /// structurally imperfect entries.
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<Vec<RawQuestion>, GeneratorError>;

    /// Extract 3-5 learning domains for a topic.
    async fn extract_domains(&self, topic: &str) -> Result<Vec<DomainTopic>, GeneratorError>;
}

#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
