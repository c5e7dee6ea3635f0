mod question_generator;
mod quiz_repository;
mod raw_question;
mod transcription_engine;

pub use question_generator::{GenerationRequest, GeneratorError, QuestionGenerator};
pub use quiz_repository::{QuizRepository, RepositoryError, StoredQuiz};
pub use raw_question::{RawAnswer, RawQuestion};
pub use transcription_engine::{TranscriptionEngine, TranscriptionError};
