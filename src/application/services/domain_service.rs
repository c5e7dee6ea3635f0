use std::sync::Arc;

use crate::application::ports::QuestionGenerator;
use crate::domain::DomainTopic;

/// Extracts learning domains for a topic via the generator port, falling
/// back to a single catch-all domain when the provider fails or returns
/// nothing usable.
pub struct DomainService<G: QuestionGenerator> {
    generator: Arc<G>,
}

impl<G: QuestionGenerator> DomainService<G> {
    pub fn new(generator: Arc<G>) -> Self {
        Self { generator }
    }

    #[tracing::instrument(skip(self))]
    pub async fn extract_domains(&self, topic: &str) -> Vec<DomainTopic> {
        match self.generator.extract_domains(topic).await {
            Ok(domains) if !domains.is_empty() => domains,
            Ok(_) => {
                tracing::warn!("Provider returned no domains, using fallback");
                vec![fallback_domain(topic)]
            }
            Err(e) => {
                tracing::error!(error = %e, "Domain extraction failed, using fallback");
                vec![fallback_domain(topic)]
            }
        }
    }
}

fn fallback_domain(topic: &str) -> DomainTopic {
    DomainTopic {
        name: "General Knowledge".to_string(),
        description: format!("Core concepts and principles of {}", topic),
    }
}
