use std::sync::Arc;
use std::time::Duration;

use futures::future::try_join_all;

use crate::application::ports::{GenerationRequest, GeneratorError, QuestionGenerator};
use crate::domain::{QuestionType, QuizConfig, QuizQuestion};

use super::distribution::{DistributionError, distribute};
use super::normalizer::{NormalizedQuestion, normalize};

/// Orchestrates one quiz generation run: plans (type, domain, count) groups,
/// fans the generation calls out concurrently, normalizes the results and
/// assigns sequential ids across the merged sequence.
pub struct QuizService<G: QuestionGenerator> {
    generator: Arc<G>,
    generation_timeout: Duration,
}

impl<G: QuestionGenerator> QuizService<G> {
    pub fn new(generator: Arc<G>, generation_timeout: Duration) -> Self {
        Self {
            generator,
            generation_timeout,
        }
    }

    #[tracing::instrument(skip(self, config), fields(topic = %config.topic, total = config.total_questions))]
    pub async fn assemble(&self, config: &QuizConfig) -> Result<Vec<QuizQuestion>, QuizError> {
        let requests = plan_groups(config)?;

        tracing::debug!(groups = requests.len(), "Dispatching generation groups");

        // All group futures are created before any is awaited; completion
        // order is irrelevant since try_join_all preserves input order.
        let futures: Vec<_> = requests
            .iter()
            .map(|request| self.generate_group(request))
            .collect();

        let groups = tokio::time::timeout(self.generation_timeout, try_join_all(futures))
            .await
            .map_err(|_| QuizError::DeadlineExceeded(self.generation_timeout))??;

        let mut questions: Vec<QuizQuestion> = Vec::with_capacity(config.total_questions as usize);
        for normalized in groups.into_iter().flatten() {
            let id = questions.len() as u32 + 1;
            questions.push(into_question(id, normalized));
        }

        tracing::info!(
            generated = questions.len(),
            requested = config.total_questions,
            "Quiz assembled"
        );

        Ok(questions)
    }

    async fn generate_group(
        &self,
        request: &GenerationRequest,
    ) -> Result<Vec<NormalizedQuestion>, QuizError> {
        let raw = self
            .generator
            .generate(request)
            .await
            .map_err(|source| QuizError::Generation {
                topic: request.topic.clone(),
                question_type: request.question_type,
                domain: request.domain.clone(),
                source,
            })?;

        let mut accepted = Vec::with_capacity(raw.len());
        for item in raw {
            match normalize(item, request.question_type, request.domain.as_deref()) {
                Ok(question) => accepted.push(question),
                Err(reason) => {
                    // Non-fatal: the batch continues with a shortfall.
                    tracing::warn!(
                        question_type = %request.question_type,
                        domain = ?request.domain,
                        %reason,
                        "Discarding generated question"
                    );
                }
            }
        }

        Ok(accepted)
    }
}

/// Expand the config into generation groups, one per (type, domain, count),
/// in input order. An empty domain list yields a single ungrouped call per
/// question type.
fn plan_groups(config: &QuizConfig) -> Result<Vec<GenerationRequest>, QuizError> {
    let mut requests = Vec::new();

    for entry in &config.question_types {
        if config.domains.is_empty() {
            requests.push(make_request(config, entry.question_type, entry.count, None));
            continue;
        }

        for share in distribute(i64::from(entry.count), &config.domains)? {
            if share.count == 0 {
                continue;
            }
            requests.push(make_request(
                config,
                entry.question_type,
                share.count,
                Some(share.domain),
            ));
        }
    }

    Ok(requests)
}

fn make_request(
    config: &QuizConfig,
    question_type: QuestionType,
    count: u32,
    domain: Option<String>,
) -> GenerationRequest {
    GenerationRequest {
        topic: config.topic.clone(),
        count,
        question_type,
        difficulty: config.difficulty,
        learning_objective: config.learning_objective.clone(),
        domain,
        custom_instructions: None,
    }
}

fn into_question(id: u32, normalized: NormalizedQuestion) -> QuizQuestion {
    QuizQuestion {
        id,
        text: normalized.text,
        options: normalized.options,
        correct_answer: normalized.correct_answer,
        question_type: normalized.question_type,
        domain: normalized.domain,
        explanation: normalized.explanation,
    }
}

#[derive(Debug, thiserror::Error)]
pub enum QuizError {
    #[error("invalid request: {0}")]
    InvalidRequest(#[from] DistributionError),
    #[error("question generation failed for topic \"{topic}\" (type {question_type}, domain {domain:?}): {source}")]
    Generation {
        topic: String,
        question_type: QuestionType,
        domain: Option<String>,
        source: GeneratorError,
    },
    #[error("quiz generation timed out after {0:?}")]
    DeadlineExceeded(Duration),
}
