mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    DatabaseSettings, GenerationSettings, LlmSettings, ServerSettings, Settings, SpeechSettings,
};
