use std::sync::Arc;

use crate::application::ports::{QuestionGenerator, QuizRepository, TranscriptionEngine};
use crate::application::services::{DomainService, QuizService};
use crate::presentation::config::Settings;

/// Shared per-process state. The repository and transcription engine are
/// optional subsystems, absent when disabled in settings.
pub struct AppState<G>
where
    G: QuestionGenerator,
{
    pub quiz_service: Arc<QuizService<G>>,
    pub domain_service: Arc<DomainService<G>>,
    pub quiz_repository: Option<Arc<dyn QuizRepository>>,
    pub transcription_engine: Option<Arc<dyn TranscriptionEngine>>,
    pub settings: Settings,
}

impl<G> Clone for AppState<G>
where
    G: QuestionGenerator,
{
    fn clone(&self) -> Self {
        Self {
            quiz_service: Arc::clone(&self.quiz_service),
            domain_service: Arc::clone(&self.domain_service),
            quiz_repository: self.quiz_repository.clone(),
            transcription_engine: self.transcription_engine.clone(),
            settings: self.settings.clone(),
        }
    }
}
