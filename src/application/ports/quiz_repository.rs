use async_trait::async_trait;

use crate::domain::{QuizConfig, QuizQuestion, QuizSession};

/// A stored session together with its question rows.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredQuiz {
    pub session: QuizSession,
    pub questions: Vec<QuizQuestion>,
}

#[async_trait]
pub trait QuizRepository: Send + Sync {
    /// Persist a completed generation run: the parent session row plus one
    /// row per question, in a single transaction. Returns the session id.
    async fn store_session(
        &self,
        config: &QuizConfig,
        questions: &[QuizQuestion],
    ) -> Result<i64, RepositoryError>;

    /// List stored sessions, newest first.
    async fn list_sessions(
        &self,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<QuizSession>, RepositoryError>;

    async fn get_session(&self, id: i64) -> Result<Option<StoredQuiz>, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("connection failed: {0}")]
    ConnectionFailed(String),
    #[error("query failed: {0}")]
    QueryFailed(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),
}
