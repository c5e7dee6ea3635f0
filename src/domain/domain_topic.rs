use serde::{Deserialize, Serialize};

/// A named sub-topic used to focus a subset of generated questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainTopic {
    pub name: String,
    pub description: String,
}
