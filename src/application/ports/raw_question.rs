use serde::Deserialize;

/// Answer field of a provider item before normalization.
///
/// True/false providers return either a JSON boolean or the words
/// "true"/"false"; everything else arrives as text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawAnswer {
    Bool(bool),
    Text(String),
}

impl RawAnswer {
    pub fn as_text(&self) -> String {
        match self {
            RawAnswer::Bool(b) => b.to_string(),
            RawAnswer::Text(t) => t.clone(),
        }
    }
}

/// One question item as returned by a generation provider, before any
/// type-specific validation has been applied.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawQuestion {
    #[serde(alias = "question")]
    pub text: String,
    pub answer: RawAnswer,
    #[serde(default)]
    pub options: Option<Vec<String>>,
    #[serde(default)]
    pub explanation: Option<String>,
}
