use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{
    GenerationRequest, GeneratorError, QuestionGenerator, RawQuestion,
};
use crate::domain::{DomainTopic, QuestionType};
use crate::presentation::config::LlmSettings;

/// Question generator backed by an OpenAI-compatible chat completions API
/// (OpenAI itself or a local Ollama server).
pub struct OpenAiGenerator {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
    max_tokens: usize,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: usize,
    temperature: f32,
    response_format: ResponseFormat,
}

#[derive(Serialize)]
struct ResponseFormat {
    r#type: &'static str,
}

#[derive(Serialize, Deserialize, Clone)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct QuestionsPayload {
    questions: Vec<RawQuestion>,
}

#[derive(Deserialize)]
struct DomainsPayload {
    domains: Vec<DomainTopic>,
}

impl OpenAiGenerator {
    pub fn new(
        base_url: String,
        api_key: String,
        model: String,
        max_tokens: usize,
        temperature: f32,
    ) -> Self {
        Self {
            client: Client::new(),
            base_url,
            api_key,
            model,
            max_tokens,
            temperature,
        }
    }

    async fn complete_json(&self, system: String, user: String) -> Result<String, GeneratorError> {
        let request_body = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: system,
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: user,
                },
            ],
            max_tokens: self.max_tokens,
            temperature: self.temperature,
            response_format: ResponseFormat {
                r#type: "json_object",
            },
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request_body)
            .send()
            .await
            .map_err(|e| GeneratorError::ApiRequestFailed(e.to_string()))?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(GeneratorError::RateLimited);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(GeneratorError::ApiRequestFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| GeneratorError::InvalidResponse(e.to_string()))?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| GeneratorError::InvalidResponse("empty choices".to_string()))
    }
}

#[async_trait]
impl QuestionGenerator for OpenAiGenerator {
    #[tracing::instrument(
        skip(self, request),
        fields(question_type = %request.question_type, count = request.count, domain = ?request.domain)
    )]
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<Vec<RawQuestion>, GeneratorError> {
        let system = build_generation_prompt(request);
        let user = format!("Topic: {}", request.topic);

        let content = self.complete_json(system, user).await?;

        let payload: QuestionsPayload = serde_json::from_str(&content)
            .map_err(|e| GeneratorError::InvalidResponse(format!("questions payload: {}", e)))?;

        tracing::debug!(items = payload.questions.len(), "Provider returned items");

        Ok(payload.questions)
    }

    #[tracing::instrument(skip(self))]
    async fn extract_domains(&self, topic: &str) -> Result<Vec<DomainTopic>, GeneratorError> {
        let system = DOMAIN_EXTRACTION_PROMPT.to_string();
        let user = format!("Topic: {}", topic);

        let content = self.complete_json(system, user).await?;

        let payload: DomainsPayload = serde_json::from_str(&content)
            .map_err(|e| GeneratorError::InvalidResponse(format!("domains payload: {}", e)))?;

        Ok(payload.domains)
    }
}

const DOMAIN_EXTRACTION_PROMPT: &str = r#"You are a domain expert. Extract 3-5 core learning domains for the given topic.
Each domain should be specific enough to generate focused questions but broad
enough to cover important subtopics.

Return the response in JSON format with the following structure:
{
    "domains": [
        {
            "name": "Domain Name",
            "description": "Brief description of the domain"
        }
    ]
}"#;

fn build_generation_prompt(request: &GenerationRequest) -> String {
    let schema = match request.question_type {
        QuestionType::MultipleChoice => {
            r#"{"questions": [{"question": "...", "answer": "...", "options": ["...", "...", "...", "..."], "explanation": "..."}]}"#
        }
        QuestionType::TrueFalse => {
            r#"{"questions": [{"question": "...", "answer": true, "explanation": "..."}]}"#
        }
        _ => r#"{"questions": [{"question": "...", "answer": "...", "explanation": "..."}]}"#,
    };

    let type_instructions = match request.question_type {
        QuestionType::MultipleChoice => {
            "Generate multiple choice questions with 4 options. \
             Ensure options are distinct and plausible. \
             One option must be clearly correct and listed in \"answer\"."
        }
        QuestionType::TrueFalse => {
            "Generate true/false statements. The \"answer\" field must be a \
             JSON boolean. Questions should be clear and unambiguous."
        }
        QuestionType::FillInBlank => {
            "Generate fill in the blank questions using ___ as blank marker. \
             Ensure blanks test key concepts and have unambiguous answers."
        }
        QuestionType::ShortAnswer => {
            "Generate questions that test understanding and application, \
             answerable in one or two sentences."
        }
    };

    let mut prompt = format!(
        "Generate exactly {} {} questions at {} difficulty about the given topic.\n{}\n",
        request.count, request.question_type, request.difficulty, type_instructions
    );

    if let Some(domain) = &request.domain {
        prompt.push_str(&format!("Focus on the domain: {}.\n", domain));
    }
    if let Some(objective) = &request.learning_objective {
        prompt.push_str(&format!("Learning objective: {}.\n", objective));
    }
    if let Some(instructions) = &request.custom_instructions {
        prompt.push_str(instructions);
        prompt.push('\n');
    }

    prompt.push_str(&format!(
        "Return the response in JSON format with the following structure:\n{}",
        schema
    ));

    prompt
}

/// Build a generator from settings. Ollama exposes an OpenAI-compatible API,
/// so both providers share the same client.
pub fn create_generator(settings: &LlmSettings) -> Result<OpenAiGenerator, GeneratorError> {
    let base_url = match settings.provider.as_str() {
        "openai" => "https://api.openai.com/v1".to_string(),
        "ollama" => settings
            .base_url
            .clone()
            .unwrap_or_else(|| "http://localhost:11434/v1".to_string())
            .trim_end_matches('/')
            .to_string(),
        other => {
            return Err(GeneratorError::InvalidResponse(format!(
                "unknown provider: {}",
                other
            )));
        }
    };

    Ok(OpenAiGenerator::new(
        base_url,
        settings.api_key.clone(),
        settings.model.clone(),
        settings.max_tokens,
        settings.temperature,
    ))
}
