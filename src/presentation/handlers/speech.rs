use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::ports::QuestionGenerator;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct TranscriptResponse {
    pub text: String,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub detail: String,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn transcribe_handler<G>(
    State(state): State<AppState<G>>,
    mut multipart: Multipart,
) -> Response
where
    G: QuestionGenerator + 'static,
{
    let Some(engine) = &state.transcription_engine else {
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ErrorDetail {
                detail: "Speech transcription is disabled".to_string(),
            }),
        )
            .into_response();
    };

    let field = match multipart.next_field().await {
        Ok(Some(f)) => f,
        Ok(None) => {
            tracing::warn!("Transcription request with no audio field");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorDetail {
                    detail: "No audio uploaded".to_string(),
                }),
            )
                .into_response();
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to read multipart");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorDetail {
                    detail: format!("Failed to read multipart: {}", e),
                }),
            )
                .into_response();
        }
    };

    let filename = field.file_name().unwrap_or("unknown").to_string();

    let data = match field.bytes().await {
        Ok(d) => d,
        Err(e) => {
            tracing::error!(error = %e, "Failed to read audio bytes");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorDetail {
                    detail: format!("Failed to read audio: {}", e),
                }),
            )
                .into_response();
        }
    };

    let max_bytes = state.settings.speech.max_upload_mb * 1024 * 1024;
    if data.len() > max_bytes {
        tracing::warn!(bytes = data.len(), max_bytes, "Audio upload too large");
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorDetail {
                detail: format!(
                    "Audio exceeds the maximum upload size of {} MB",
                    state.settings.speech.max_upload_mb
                ),
            }),
        )
            .into_response();
    }

    tracing::debug!(filename = %filename, bytes = data.len(), "Transcribing audio upload");

    match engine.transcribe(&data).await {
        Ok(text) => {
            tracing::info!(chars = text.len(), "Transcription succeeded");
            (StatusCode::OK, Json(TranscriptResponse { text })).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Transcription failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorDetail {
                    detail: format!("Transcription failed: {}", e),
                }),
            )
                .into_response()
        }
    }
}
