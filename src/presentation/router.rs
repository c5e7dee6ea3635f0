use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::QuestionGenerator;
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    create_quiz_handler, create_simple_quiz_handler, extract_domains_handler, get_quiz_handler,
    health_handler, quiz_history_handler, transcribe_handler,
};
use crate::presentation::state::AppState;

pub fn create_router<G>(state: AppState<G>) -> Router
where
    G: QuestionGenerator + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    // Audio uploads can exceed axum's 2 MB default; the speech handler
    // enforces the configured ceiling itself.
    let body_limit = (state.settings.speech.max_upload_mb + 1) * 1024 * 1024;

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/quiz", post(create_quiz_handler::<G>))
        .route("/api/quiz/simple", post(create_simple_quiz_handler::<G>))
        .route("/api/quiz/history", get(quiz_history_handler::<G>))
        .route("/api/quiz/history/{quiz_id}", get(get_quiz_handler::<G>))
        .route("/api/domains", post(extract_domains_handler::<G>))
        .route("/api/speech/transcribe", post(transcribe_handler::<G>))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
