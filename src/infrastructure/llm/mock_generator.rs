use async_trait::async_trait;

use crate::application::ports::{
    GenerationRequest, GeneratorError, QuestionGenerator, RawAnswer, RawQuestion,
};
use crate::domain::{DomainTopic, QuestionType};

/// Deterministic generator for tests and offline development.
pub struct MockGenerator;

#[async_trait]
impl QuestionGenerator for MockGenerator {
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<Vec<RawQuestion>, GeneratorError> {
        let items = (1..=request.count)
            .map(|i| match request.question_type {
                QuestionType::TrueFalse => RawQuestion {
                    text: format!("{} statement {}", request.topic, i),
                    answer: RawAnswer::Bool(i % 2 == 0),
                    options: None,
                    explanation: None,
                },
                QuestionType::MultipleChoice => RawQuestion {
                    text: format!("{} question {}", request.topic, i),
                    answer: RawAnswer::Text("Option A".to_string()),
                    options: Some(vec![
                        "Option A".to_string(),
                        "Option B".to_string(),
                        "Option C".to_string(),
                        "Option D".to_string(),
                    ]),
                    explanation: None,
                },
                QuestionType::FillInBlank => RawQuestion {
                    text: format!("{} is ___ (item {})", request.topic, i),
                    answer: RawAnswer::Text("important".to_string()),
                    options: None,
                    explanation: None,
                },
                QuestionType::ShortAnswer => RawQuestion {
                    text: format!("Explain {} (item {})", request.topic, i),
                    answer: RawAnswer::Text("A short answer".to_string()),
                    options: None,
                    explanation: None,
                },
            })
            .collect();

        Ok(items)
    }

    async fn extract_domains(&self, topic: &str) -> Result<Vec<DomainTopic>, GeneratorError> {
        Ok(vec![
            DomainTopic {
                name: format!("{} fundamentals", topic),
                description: format!("Core concepts of {}", topic),
            },
            DomainTopic {
                name: format!("{} applications", topic),
                description: format!("Practical uses of {}", topic),
            },
        ])
    }
}
