use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;

use quizgen::application::ports::{QuizRepository, TranscriptionEngine};
use quizgen::application::services::{DomainService, QuizService};
use quizgen::infrastructure::audio::OpenAiWhisperEngine;
use quizgen::infrastructure::llm::create_generator;
use quizgen::infrastructure::observability::{TracingConfig, init_tracing};
use quizgen::infrastructure::persistence::{PgQuizRepository, create_pool};
use quizgen::presentation::{AppState, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env().map_err(anyhow::Error::msg)?;

    init_tracing(
        TracingConfig {
            environment: settings.environment.to_string(),
            ..TracingConfig::default()
        },
        settings.server.port,
    );

    let generator = Arc::new(create_generator(&settings.llm)?);

    let quiz_repository: Option<Arc<dyn QuizRepository>> = if settings.database.enabled {
        let pool = create_pool(&settings.database).await?;
        sqlx::migrate!("./migrations").run(&pool).await?;
        Some(Arc::new(PgQuizRepository::new(pool)))
    } else {
        tracing::info!("Quiz persistence disabled");
        None
    };

    let transcription_engine: Option<Arc<dyn TranscriptionEngine>> = if settings.speech.enabled {
        Some(Arc::new(OpenAiWhisperEngine::new(&settings.speech)))
    } else {
        tracing::info!("Speech transcription disabled");
        None
    };

    let quiz_service = Arc::new(QuizService::new(
        Arc::clone(&generator),
        Duration::from_secs(settings.generation.timeout_seconds),
    ));
    let domain_service = Arc::new(DomainService::new(Arc::clone(&generator)));

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;

    let state = AppState {
        quiz_service,
        domain_service,
        quiz_repository,
        transcription_engine,
        settings,
    };

    let router = create_router(state);

    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install shutdown signal handler");
    }
}
