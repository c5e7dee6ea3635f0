use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use tracing::instrument;

use crate::application::ports::{QuizRepository, RepositoryError, StoredQuiz};
use crate::domain::{DifficultyLevel, QuestionType, QuizConfig, QuizQuestion, QuizSession};

pub struct PgQuizRepository {
    pool: PgPool,
}

impl PgQuizRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QuizRepository for PgQuizRepository {
    #[instrument(skip(self, config, questions), fields(topic = %config.topic, questions = questions.len()))]
    async fn store_session(
        &self,
        config: &QuizConfig,
        questions: &[QuizQuestion],
    ) -> Result<i64, RepositoryError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        // Parent row first; its id is needed for the child rows. Dropping
        // the transaction on any error rolls the whole write back.
        let session_id: i64 = sqlx::query(
            r#"
            INSERT INTO quiz_sessions (topic, difficulty, learning_objective, total_questions, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(&config.topic)
        .bind(config.difficulty.as_str())
        .bind(&config.learning_objective)
        .bind(config.total_questions as i32)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?
        .get("id");

        for question in questions {
            let options_json = question
                .options
                .as_ref()
                .map(serde_json::to_string)
                .transpose()
                .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

            sqlx::query(
                r#"
                INSERT INTO quiz_questions
                    (quiz_session_id, question_text, question_type, correct_answer, options, domain, explanation)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                "#,
            )
            .bind(session_id)
            .bind(&question.text)
            .bind(question.question_type.as_str())
            .bind(&question.correct_answer)
            .bind(options_json)
            .bind(&question.domain)
            .bind(&question.explanation)
            .execute(&mut *tx)
            .await
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;
        }

        tx.commit()
            .await
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        Ok(session_id)
    }

    #[instrument(skip(self))]
    async fn list_sessions(
        &self,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<QuizSession>, RepositoryError> {
        let rows = sqlx::query(
            r#"
            SELECT id, topic, difficulty, learning_objective, total_questions, created_at
            FROM quiz_sessions
            ORDER BY created_at DESC
            OFFSET $1 LIMIT $2
            "#,
        )
        .bind(skip)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        rows.iter().map(session_from_row).collect()
    }

    #[instrument(skip(self))]
    async fn get_session(&self, id: i64) -> Result<Option<StoredQuiz>, RepositoryError> {
        let row = sqlx::query(
            r#"
            SELECT id, topic, difficulty, learning_objective, total_questions, created_at
            FROM quiz_sessions
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        let Some(row) = row else {
            return Ok(None);
        };
        let session = session_from_row(&row)?;

        let question_rows = sqlx::query(
            r#"
            SELECT question_text, question_type, correct_answer, options, domain, explanation
            FROM quiz_questions
            WHERE quiz_session_id = $1
            ORDER BY id
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        let questions = question_rows
            .iter()
            .enumerate()
            .map(|(i, row)| question_from_row(i as u32 + 1, row))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Some(StoredQuiz { session, questions }))
    }
}

fn session_from_row(row: &PgRow) -> Result<QuizSession, RepositoryError> {
    let difficulty: String = row.get("difficulty");
    let difficulty = difficulty
        .parse::<DifficultyLevel>()
        .map_err(RepositoryError::QueryFailed)?;
    let total_questions: i32 = row.get("total_questions");
    let created_at: DateTime<Utc> = row.get("created_at");

    Ok(QuizSession {
        id: row.get("id"),
        topic: row.get("topic"),
        difficulty,
        learning_objective: row.get("learning_objective"),
        total_questions: total_questions as u32,
        created_at,
    })
}

fn question_from_row(id: u32, row: &PgRow) -> Result<QuizQuestion, RepositoryError> {
    let question_type: String = row.get("question_type");
    let question_type = question_type
        .parse::<QuestionType>()
        .map_err(RepositoryError::QueryFailed)?;

    let options: Option<String> = row.get("options");
    let options = options
        .map(|json| serde_json::from_str::<Vec<String>>(&json))
        .transpose()
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

    Ok(QuizQuestion {
        id,
        text: row.get("question_text"),
        options,
        correct_answer: row.get("correct_answer"),
        question_type,
        domain: row.get("domain"),
        explanation: row.get("explanation"),
    })
}
