use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::application::ports::QuestionGenerator;
use crate::application::services::QuizError;
use crate::domain::{DifficultyLevel, QuestionType, QuestionTypeCount, QuizConfig, QuizQuestion};
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::config::GenerationSettings;
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct QuestionTypeEntry {
    pub r#type: QuestionType,
    pub count: u32,
}

/// Full quiz configuration, camelCase on the wire.
#[derive(Deserialize)]
pub struct QuizConfigRequest {
    pub topic: String,
    #[serde(rename = "questionTypes")]
    pub question_types: Vec<QuestionTypeEntry>,
    #[serde(rename = "difficultyLevel")]
    pub difficulty_level: DifficultyLevel,
    #[serde(rename = "learningObjective", default)]
    pub learning_objective: Option<String>,
    #[serde(default)]
    pub domains: Vec<String>,
    #[serde(rename = "totalQuestions")]
    pub total_questions: u32,
}

/// Single-type shorthand accepted on /api/quiz/simple.
#[derive(Deserialize)]
pub struct SimpleQuizRequest {
    pub topic: String,
    pub question_type: QuestionType,
    pub num_questions: u32,
    pub difficulty: DifficultyLevel,
    #[serde(default)]
    pub learning_objective: Option<String>,
    #[serde(default)]
    pub domains: Vec<String>,
}

#[derive(Serialize)]
pub struct QuizResponse {
    pub questions: Vec<QuizQuestion>,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub detail: String,
}

#[tracing::instrument(skip(state, request))]
pub async fn create_quiz_handler<G>(
    State(state): State<AppState<G>>,
    Json(request): Json<QuizConfigRequest>,
) -> Response
where
    G: QuestionGenerator + 'static,
{
    let config = match validate_config(request, &state.settings.generation) {
        Ok(config) => config,
        Err(detail) => {
            tracing::warn!(%detail, "Rejected quiz request");
            return (StatusCode::UNPROCESSABLE_ENTITY, Json(ErrorDetail { detail }))
                .into_response();
        }
    };

    generate_and_respond(&state, config).await
}

#[tracing::instrument(skip(state, request))]
pub async fn create_simple_quiz_handler<G>(
    State(state): State<AppState<G>>,
    Json(request): Json<SimpleQuizRequest>,
) -> Response
where
    G: QuestionGenerator + 'static,
{
    let full = QuizConfigRequest {
        topic: request.topic,
        question_types: vec![QuestionTypeEntry {
            r#type: request.question_type,
            count: request.num_questions,
        }],
        difficulty_level: request.difficulty,
        learning_objective: request.learning_objective,
        domains: request.domains,
        total_questions: request.num_questions,
    };

    let config = match validate_config(full, &state.settings.generation) {
        Ok(config) => config,
        Err(detail) => {
            tracing::warn!(%detail, "Rejected simple quiz request");
            return (StatusCode::UNPROCESSABLE_ENTITY, Json(ErrorDetail { detail }))
                .into_response();
        }
    };

    generate_and_respond(&state, config).await
}

async fn generate_and_respond<G>(state: &AppState<G>, config: QuizConfig) -> Response
where
    G: QuestionGenerator + 'static,
{
    tracing::info!(topic = %sanitize_prompt(&config.topic), "Generating quiz");

    let questions = match state.quiz_service.assemble(&config).await {
        Ok(questions) => questions,
        Err(e) => {
            tracing::error!(error = %e, "Quiz generation failed");
            return quiz_error_response(&e);
        }
    };

    if let Some(repository) = &state.quiz_repository {
        match repository.store_session(&config, &questions).await {
            Ok(session_id) => {
                tracing::info!(session_id, "Quiz session stored");
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to store quiz session");
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDetail {
                        detail: format!("Failed to store quiz: {}", e),
                    }),
                )
                    .into_response();
            }
        }
    }

    tracing::info!(count = questions.len(), "Quiz generated");

    (StatusCode::OK, Json(QuizResponse { questions })).into_response()
}

fn quiz_error_response(e: &QuizError) -> Response {
    let status = match e {
        QuizError::InvalidRequest(_) => StatusCode::UNPROCESSABLE_ENTITY,
        QuizError::Generation { .. } => StatusCode::BAD_GATEWAY,
        QuizError::DeadlineExceeded(_) => StatusCode::GATEWAY_TIMEOUT,
    };
    (
        status,
        Json(ErrorDetail {
            detail: e.to_string(),
        }),
    )
        .into_response()
}

fn validate_config(
    request: QuizConfigRequest,
    limits: &GenerationSettings,
) -> Result<QuizConfig, String> {
    if request.topic.trim().is_empty() {
        return Err("topic must not be empty".to_string());
    }
    if request.question_types.is_empty() {
        return Err("at least one question type is required".to_string());
    }

    let mut question_types = Vec::with_capacity(request.question_types.len());
    for entry in &request.question_types {
        if entry.count == 0 {
            return Err(format!("count for {} must be positive", entry.r#type));
        }
        if entry.count > limits.max_questions_per_type {
            return Err(format!(
                "count for {} exceeds the maximum of {}",
                entry.r#type, limits.max_questions_per_type
            ));
        }
        question_types.push(QuestionTypeCount {
            question_type: entry.r#type,
            count: entry.count,
        });
    }

    let sum: u32 = question_types.iter().map(|e| e.count).sum();
    if sum != request.total_questions {
        return Err(format!(
            "totalQuestions ({}) does not match the sum of per-type counts ({})",
            request.total_questions, sum
        ));
    }
    if request.total_questions > limits.max_total_questions {
        return Err(format!(
            "totalQuestions exceeds the maximum of {}",
            limits.max_total_questions
        ));
    }

    let domains: Vec<String> = request
        .domains
        .into_iter()
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty())
        .collect();

    Ok(QuizConfig {
        topic: request.topic.trim().to_string(),
        question_types,
        difficulty: request.difficulty_level,
        learning_objective: request.learning_objective.filter(|o| !o.trim().is_empty()),
        domains,
        total_questions: request.total_questions,
    })
}
