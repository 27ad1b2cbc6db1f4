//! Training phrase definitions.

use serde::{Deserialize, Serialize};

/// A user utterance an intent is trained on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingPhrase {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Text fragments; annotated entities occupy their own part.
    #[serde(default)]
    pub parts: Vec<PhrasePart>,

    #[serde(rename = "type", default)]
    pub phrase_type: PhraseType,

    #[serde(default)]
    pub times_added_count: u32,
}

impl TrainingPhrase {
    /// Create an example phrase with a single plain text part.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            name: None,
            parts: vec![PhrasePart::new(text)],
            phrase_type: PhraseType::Example,
            times_added_count: 0,
        }
    }

    /// Text of the first part, or empty if the phrase has no parts.
    pub fn first_text(&self) -> &str {
        self.parts.first().map(|p| p.text.as_str()).unwrap_or("")
    }
}

/// One fragment of a training phrase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhrasePart {
    pub text: String,
    #[serde(default)]
    pub entity_type: String,
    #[serde(default)]
    pub alias: String,
    #[serde(default)]
    pub user_defined: bool,
}

impl PhrasePart {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            entity_type: String::new(),
            alias: String::new(),
            user_defined: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PhraseType {
    #[default]
    #[serde(rename = "TYPE_UNSPECIFIED")]
    Unspecified,
    Example,
    /// Deprecated by the backend but still present in old exports.
    Template,
}
