mod domains;
mod health;
mod history;
mod quiz;
mod speech;

pub use domains::extract_domains_handler;
pub use health::health_handler;
pub use history::{get_quiz_handler, quiz_history_handler};
pub use quiz::{create_quiz_handler, create_simple_quiz_handler};
pub use speech::transcribe_handler;
