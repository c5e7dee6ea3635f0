use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::ports::QuestionGenerator;
use crate::domain::{DifficultyLevel, QuizQuestion, QuizSession};
use crate::presentation::state::AppState;

const DEFAULT_PAGE_SIZE: i64 = 10;
const MAX_PAGE_SIZE: i64 = 100;

#[derive(Deserialize)]
pub struct HistoryParams {
    #[serde(default)]
    pub skip: Option<i64>,
    #[serde(default)]
    pub limit: Option<i64>,
}

#[derive(Serialize)]
pub struct SessionSummary {
    pub id: i64,
    pub topic: String,
    #[serde(rename = "difficultyLevel")]
    pub difficulty_level: DifficultyLevel,
    #[serde(rename = "learningObjective", skip_serializing_if = "Option::is_none")]
    pub learning_objective: Option<String>,
    #[serde(rename = "totalQuestions")]
    pub total_questions: u32,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize)]
pub struct HistoryResponse {
    pub sessions: Vec<SessionSummary>,
}

#[derive(Serialize)]
pub struct StoredQuizResponse {
    #[serde(flatten)]
    pub session: SessionSummary,
    pub questions: Vec<QuizQuestion>,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub detail: String,
}

impl From<QuizSession> for SessionSummary {
    fn from(session: QuizSession) -> Self {
        Self {
            id: session.id,
            topic: session.topic,
            difficulty_level: session.difficulty,
            learning_objective: session.learning_objective,
            total_questions: session.total_questions,
            created_at: session.created_at,
        }
    }
}

#[tracing::instrument(skip(state, params))]
pub async fn quiz_history_handler<G>(
    State(state): State<AppState<G>>,
    Query(params): Query<HistoryParams>,
) -> Response
where
    G: QuestionGenerator + 'static,
{
    let Some(repository) = &state.quiz_repository else {
        return persistence_disabled();
    };

    let skip = params.skip.unwrap_or(0).max(0);
    let limit = params
        .limit
        .unwrap_or(DEFAULT_PAGE_SIZE)
        .clamp(1, MAX_PAGE_SIZE);

    match repository.list_sessions(skip, limit).await {
        Ok(sessions) => {
            let sessions = sessions.into_iter().map(SessionSummary::from).collect();
            (StatusCode::OK, Json(HistoryResponse { sessions })).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to list quiz history");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorDetail {
                    detail: format!("Failed to list quiz history: {}", e),
                }),
            )
                .into_response()
        }
    }
}

#[tracing::instrument(skip(state))]
pub async fn get_quiz_handler<G>(
    State(state): State<AppState<G>>,
    Path(quiz_id): Path<i64>,
) -> Response
where
    G: QuestionGenerator + 'static,
{
    let Some(repository) = &state.quiz_repository else {
        return persistence_disabled();
    };

    match repository.get_session(quiz_id).await {
        Ok(Some(stored)) => (
            StatusCode::OK,
            Json(StoredQuizResponse {
                session: stored.session.into(),
                questions: stored.questions,
            }),
        )
            .into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ErrorDetail {
                detail: format!("Quiz session {} not found", quiz_id),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to load quiz session");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorDetail {
                    detail: format!("Failed to load quiz session: {}", e),
                }),
            )
                .into_response()
        }
    }
}

fn persistence_disabled() -> Response {
    (
        StatusCode::SERVICE_UNAVAILABLE,
        Json(ErrorDetail {
            detail: "Quiz persistence is disabled".to_string(),
        }),
    )
        .into_response()
}
