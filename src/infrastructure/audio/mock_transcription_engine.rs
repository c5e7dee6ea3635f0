use async_trait::async_trait;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};

pub struct MockTranscriptionEngine;

#[async_trait]
impl TranscriptionEngine for MockTranscriptionEngine {
    async fn transcribe(&self, _audio_data: &[u8]) -> Result<String, TranscriptionError> {
        Ok("Mock transcript".to_string())
    }
}
