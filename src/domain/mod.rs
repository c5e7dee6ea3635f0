mod domain_topic;
mod question;
mod quiz_config;
mod quiz_session;

pub use domain_topic::DomainTopic;
pub use question::{DifficultyLevel, QuestionType, QuizQuestion};
pub use quiz_config::{QuestionTypeCount, QuizConfig};
pub use quiz_session::QuizSession;
