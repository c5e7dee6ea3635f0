use crate::application::ports::{RawAnswer, RawQuestion};
use crate::domain::QuestionType;

pub const BLANK_MARKER: &str = "___";
const LEGACY_BLANK_MARKER: &str = "[blank]";

/// A question that passed type-specific validation but has not yet been
/// assigned its sequential id.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedQuestion {
    pub text: String,
    pub options: Option<Vec<String>>,
    pub correct_answer: String,
    pub question_type: QuestionType,
    pub domain: Option<String>,
    pub explanation: Option<String>,
}

/// Why a raw item was discarded. Rejections are logged and skipped by the
/// caller; they never abort the surrounding batch.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RejectReason {
    #[error("empty question text")]
    EmptyText,
    #[error("empty answer")]
    EmptyAnswer,
    #[error("multiple choice item has no options")]
    MissingOptions,
    #[error("multiple choice item has only {0} option(s)")]
    TooFewOptions(usize),
    #[error("fill-in-blank text has no blank marker")]
    MissingBlankMarker,
    #[error("true/false answer is not a boolean: {0:?}")]
    NonBooleanAnswer(String),
}

/// Map one raw provider item onto a uniform question record, applying the
/// validation rules of `question_type`. Pure transform with no side effects.
pub fn normalize(
    raw: RawQuestion,
    question_type: QuestionType,
    domain: Option<&str>,
) -> Result<NormalizedQuestion, RejectReason> {
    let text = raw.text.trim().to_string();
    if text.is_empty() {
        return Err(RejectReason::EmptyText);
    }

    let (text, options, correct_answer) = match question_type {
        QuestionType::TrueFalse => {
            let answer = coerce_boolean(&raw.answer)?;
            let rendered = if answer { "True" } else { "False" };
            (
                text,
                Some(vec!["True".to_string(), "False".to_string()]),
                rendered.to_string(),
            )
        }
        QuestionType::MultipleChoice => {
            let options = raw.options.ok_or(RejectReason::MissingOptions)?;
            if options.len() < 2 {
                return Err(RejectReason::TooFewOptions(options.len()));
            }
            (text, Some(options), raw.answer.as_text())
        }
        QuestionType::FillInBlank => {
            let text = if text.contains(BLANK_MARKER) {
                text
            } else {
                text.replace(LEGACY_BLANK_MARKER, BLANK_MARKER)
            };
            if !text.contains(BLANK_MARKER) {
                return Err(RejectReason::MissingBlankMarker);
            }
            (text, None, raw.answer.as_text())
        }
        QuestionType::ShortAnswer => (text, None, raw.answer.as_text()),
    };

    if correct_answer.trim().is_empty() {
        return Err(RejectReason::EmptyAnswer);
    }

    Ok(NormalizedQuestion {
        text,
        options,
        correct_answer,
        question_type,
        domain: domain.map(String::from),
        explanation: raw.explanation.filter(|e| !e.trim().is_empty()),
    })
}

fn coerce_boolean(answer: &RawAnswer) -> Result<bool, RejectReason> {
    match answer {
        RawAnswer::Bool(b) => Ok(*b),
        RawAnswer::Text(t) => match t.trim().to_lowercase().as_str() {
            "true" => Ok(true),
            "false" => Ok(false),
            _ => Err(RejectReason::NonBooleanAnswer(t.clone())),
        },
    }
}
