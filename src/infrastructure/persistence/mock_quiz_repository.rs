use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use crate::application::ports::{QuizRepository, RepositoryError, StoredQuiz};
use crate::domain::{QuizConfig, QuizQuestion, QuizSession};

/// In-memory repository for tests and offline development.
#[derive(Default)]
pub struct MockQuizRepository {
    sessions: Mutex<Vec<StoredQuiz>>,
}

impl MockQuizRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl QuizRepository for MockQuizRepository {
    async fn store_session(
        &self,
        config: &QuizConfig,
        questions: &[QuizQuestion],
    ) -> Result<i64, RepositoryError> {
        let mut sessions = self.sessions.lock().unwrap();
        let id = sessions.len() as i64 + 1;
        sessions.push(StoredQuiz {
            session: QuizSession {
                id,
                topic: config.topic.clone(),
                difficulty: config.difficulty,
                learning_objective: config.learning_objective.clone(),
                total_questions: config.total_questions,
                created_at: Utc::now(),
            },
            questions: questions.to_vec(),
        });
        Ok(id)
    }

    async fn list_sessions(
        &self,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<QuizSession>, RepositoryError> {
        let sessions = self.sessions.lock().unwrap();
        Ok(sessions
            .iter()
            .rev()
            .skip(skip as usize)
            .take(limit as usize)
            .map(|s| s.session.clone())
            .collect())
    }

    async fn get_session(&self, id: i64) -> Result<Option<StoredQuiz>, RepositoryError> {
        let sessions = self.sessions.lock().unwrap();
        Ok(sessions.iter().find(|s| s.session.id == id).cloned())
    }
}
