mod mock_generator;
mod openai_generator;

pub use mock_generator::MockGenerator;
pub use openai_generator::{OpenAiGenerator, create_generator};
