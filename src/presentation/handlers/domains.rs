use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::application::ports::QuestionGenerator;
use crate::domain::DomainTopic;
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct DomainRequest {
    pub prompt: String,
}

#[derive(Serialize)]
pub struct DomainResponse {
    pub domains: Vec<DomainTopic>,
    pub single_domain: bool,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub detail: String,
}

#[tracing::instrument(skip(state, request))]
pub async fn extract_domains_handler<G>(
    State(state): State<AppState<G>>,
    Json(request): Json<DomainRequest>,
) -> Response
where
    G: QuestionGenerator + 'static,
{
    if request.prompt.trim().is_empty() {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorDetail {
                detail: "prompt must not be empty".to_string(),
            }),
        )
            .into_response();
    }

    tracing::debug!(prompt = %sanitize_prompt(&request.prompt), "Extracting domains");

    let domains = state.domain_service.extract_domains(&request.prompt).await;
    let single_domain = domains.len() <= 1;

    (
        StatusCode::OK,
        Json(DomainResponse {
            domains,
            single_domain,
        }),
    )
        .into_response()
}
