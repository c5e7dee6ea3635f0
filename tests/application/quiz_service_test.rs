use std::sync::{Arc, Mutex};
use std::time::Duration;

use quizgen::application::ports::{
    GenerationRequest, GeneratorError, QuestionGenerator, RawAnswer, RawQuestion,
};
use quizgen::application::services::{QuizError, QuizService};
use quizgen::domain::{
    DifficultyLevel, DomainTopic, QuestionType, QuestionTypeCount, QuizConfig,
};

struct RecordingGenerator {
    requests: Mutex<Vec<GenerationRequest>>,
}

impl RecordingGenerator {
    fn new() -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl QuestionGenerator for RecordingGenerator {
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<Vec<RawQuestion>, GeneratorError> {
        self.requests.lock().unwrap().push(request.clone());

        let tag = request.domain.clone().unwrap_or_else(|| "none".to_string());
        Ok((1..=request.count)
            .map(|i| match request.question_type {
                QuestionType::TrueFalse => RawQuestion {
                    text: format!("[{}] statement {}", tag, i),
                    answer: RawAnswer::Bool(true),
                    options: None,
                    explanation: None,
                },
                QuestionType::MultipleChoice => RawQuestion {
                    text: format!("[{}] question {}", tag, i),
                    answer: RawAnswer::Text("A".to_string()),
                    options: Some(vec!["A".to_string(), "B".to_string()]),
                    explanation: None,
                },
                QuestionType::FillInBlank => RawQuestion {
                    text: format!("[{}] item {} is ___", tag, i),
                    answer: RawAnswer::Text("x".to_string()),
                    options: None,
                    explanation: None,
                },
                QuestionType::ShortAnswer => RawQuestion {
                    text: format!("[{}] explain {}", tag, i),
                    answer: RawAnswer::Text("because".to_string()),
                    options: None,
                    explanation: None,
                },
            })
            .collect())
    }

    async fn extract_domains(&self, _topic: &str) -> Result<Vec<DomainTopic>, GeneratorError> {
        Ok(vec![])
    }
}

struct FailingGenerator;

#[async_trait::async_trait]
impl QuestionGenerator for FailingGenerator {
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<Vec<RawQuestion>, GeneratorError> {
        if request.question_type == QuestionType::ShortAnswer {
            return Err(GeneratorError::ApiRequestFailed("boom".to_string()));
        }
        Ok(vec![RawQuestion {
            text: "A statement".to_string(),
            answer: RawAnswer::Bool(true),
            options: None,
            explanation: None,
        }])
    }

    async fn extract_domains(&self, _topic: &str) -> Result<Vec<DomainTopic>, GeneratorError> {
        Ok(vec![])
    }
}

struct InvalidItemGenerator;

#[async_trait::async_trait]
impl QuestionGenerator for InvalidItemGenerator {
    async fn generate(
        &self,
        _request: &GenerationRequest,
    ) -> Result<Vec<RawQuestion>, GeneratorError> {
        Ok(vec![
            RawQuestion {
                text: "Valid question?".to_string(),
                answer: RawAnswer::Text("A".to_string()),
                options: Some(vec!["A".to_string(), "B".to_string()]),
                explanation: None,
            },
            // Too few options: must be skipped, not fail the batch.
            RawQuestion {
                text: "Broken question?".to_string(),
                answer: RawAnswer::Text("A".to_string()),
                options: Some(vec!["A".to_string()]),
                explanation: None,
            },
        ])
    }

    async fn extract_domains(&self, _topic: &str) -> Result<Vec<DomainTopic>, GeneratorError> {
        Ok(vec![])
    }
}

struct SlowGenerator;

#[async_trait::async_trait]
impl QuestionGenerator for SlowGenerator {
    async fn generate(
        &self,
        _request: &GenerationRequest,
    ) -> Result<Vec<RawQuestion>, GeneratorError> {
        tokio::time::sleep(Duration::from_secs(60)).await;
        Ok(vec![])
    }

    async fn extract_domains(&self, _topic: &str) -> Result<Vec<DomainTopic>, GeneratorError> {
        Ok(vec![])
    }
}

const TEST_TIMEOUT: Duration = Duration::from_secs(30);

fn config(entries: Vec<(QuestionType, u32)>, domains: Vec<&str>) -> QuizConfig {
    let total = entries.iter().map(|(_, c)| c).sum();
    QuizConfig {
        topic: "Photosynthesis".to_string(),
        question_types: entries
            .into_iter()
            .map(|(question_type, count)| QuestionTypeCount {
                question_type,
                count,
            })
            .collect(),
        difficulty: DifficultyLevel::Medium,
        learning_objective: None,
        domains: domains.into_iter().map(String::from).collect(),
        total_questions: total,
    }
}

#[tokio::test]
async fn given_two_groups_when_assembling_then_ids_are_sequential_in_issuance_order() {
    let service = QuizService::new(Arc::new(RecordingGenerator::new()), TEST_TIMEOUT);
    let config = config(
        vec![(QuestionType::TrueFalse, 3), (QuestionType::ShortAnswer, 2)],
        vec![],
    );

    let questions = service.assemble(&config).await.unwrap();

    assert_eq!(questions.len(), 5);
    let ids: Vec<u32> = questions.iter().map(|q| q.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    assert!(questions[..3]
        .iter()
        .all(|q| q.question_type == QuestionType::TrueFalse));
    assert!(questions[3..]
        .iter()
        .all(|q| q.question_type == QuestionType::ShortAnswer));
}

#[tokio::test]
async fn given_domains_when_assembling_then_counts_are_distributed_per_domain() {
    let generator = Arc::new(RecordingGenerator::new());
    let service = QuizService::new(Arc::clone(&generator), TEST_TIMEOUT);
    let config = config(
        vec![(QuestionType::MultipleChoice, 10)],
        vec!["A", "B", "C"],
    );

    let questions = service.assemble(&config).await.unwrap();

    assert_eq!(questions.len(), 10);

    let requests = generator.requests.lock().unwrap();
    let shares: Vec<(Option<String>, u32)> = requests
        .iter()
        .map(|r| (r.domain.clone(), r.count))
        .collect();
    assert_eq!(
        shares,
        vec![
            (Some("A".to_string()), 4),
            (Some("B".to_string()), 3),
            (Some("C".to_string()), 3),
        ]
    );

    // Questions carry their group's domain tag, groups in issuance order.
    assert!(questions[..4].iter().all(|q| q.domain.as_deref() == Some("A")));
    assert!(questions[4..7].iter().all(|q| q.domain.as_deref() == Some("B")));
    assert!(questions[7..].iter().all(|q| q.domain.as_deref() == Some("C")));
}

#[tokio::test]
async fn given_no_domains_when_assembling_then_one_ungrouped_call_per_type() {
    let generator = Arc::new(RecordingGenerator::new());
    let service = QuizService::new(Arc::clone(&generator), TEST_TIMEOUT);
    let config = config(
        vec![(QuestionType::TrueFalse, 4), (QuestionType::FillInBlank, 2)],
        vec![],
    );

    service.assemble(&config).await.unwrap();

    let requests = generator.requests.lock().unwrap();
    assert_eq!(requests.len(), 2);
    assert!(requests.iter().all(|r| r.domain.is_none()));
}

#[tokio::test]
async fn given_one_failing_group_when_assembling_then_whole_assembly_fails() {
    let service = QuizService::new(Arc::new(FailingGenerator), TEST_TIMEOUT);
    let config = config(
        vec![(QuestionType::TrueFalse, 2), (QuestionType::ShortAnswer, 2)],
        vec![],
    );

    let result = service.assemble(&config).await;

    match result {
        Err(QuizError::Generation {
            topic,
            question_type,
            ..
        }) => {
            assert_eq!(topic, "Photosynthesis");
            assert_eq!(question_type, QuestionType::ShortAnswer);
        }
        other => panic!("expected generation failure, got {:?}", other.map(|q| q.len())),
    }
}

#[tokio::test]
async fn given_invalid_items_when_assembling_then_shortfall_is_accepted() {
    let service = QuizService::new(Arc::new(InvalidItemGenerator), TEST_TIMEOUT);
    let config = config(vec![(QuestionType::MultipleChoice, 2)], vec![]);

    let questions = service.assemble(&config).await.unwrap();

    // One of the two items is discarded; no backfill is attempted.
    assert_eq!(questions.len(), 1);
    assert_eq!(questions[0].id, 1);
    assert_eq!(questions[0].text, "Valid question?");
}

#[tokio::test]
async fn given_slow_generator_when_deadline_expires_then_assembly_times_out() {
    let service = QuizService::new(Arc::new(SlowGenerator), Duration::from_millis(20));
    let config = config(vec![(QuestionType::TrueFalse, 1)], vec![]);

    let result = service.assemble(&config).await;

    assert!(matches!(result, Err(QuizError::DeadlineExceeded(_))));
}
