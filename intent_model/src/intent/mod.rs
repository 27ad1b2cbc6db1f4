//! Intent definitions - the vertices of the intent graph.

mod message;
mod phrase;
mod set;

pub use message::*;
pub use phrase::*;
pub use set::*;

use serde::{Deserialize, Serialize};

/// Unique identifier for intents.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IntentId(pub String);

impl IntentId {
    /// Create an intent ID from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for IntentId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl std::fmt::Display for IntentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn default_state() -> String {
    "WEBHOOK_STATE_UNSPECIFIED".to_string()
}

/// A single intent as exported by the agent backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Intent {
    pub name: IntentId,

    pub display_name: String,

    /// Lifecycle label such as `WEBHOOK_STATE_ENABLED`.
    /// Absent in the export means the backend left it unspecified.
    #[serde(rename = "webhookState", default = "default_state")]
    pub state: String,

    #[serde(default)]
    pub is_fallback: bool,

    #[serde(default)]
    pub training_phrases: Vec<TrainingPhrase>,

    #[serde(default)]
    pub input_context_names: Vec<String>,

    #[serde(default)]
    pub output_contexts: Vec<OutputContext>,

    /// Outgoing edges, in display order.
    #[serde(default)]
    pub followups: Vec<Followup>,

    #[serde(default)]
    pub messages: Vec<Message>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_followup_intent_name: Option<IntentId>,
}

impl Intent {
    /// Create an intent with an unspecified state and no phrases or messages.
    pub fn new(name: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            name: IntentId::new(name),
            display_name: display_name.into(),
            state: default_state(),
            is_fallback: false,
            training_phrases: Vec::new(),
            input_context_names: Vec::new(),
            output_contexts: Vec::new(),
            followups: Vec::new(),
            messages: Vec::new(),
            parent_followup_intent_name: None,
        }
    }

    /// Set the raw state label.
    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = state.into();
        self
    }

    /// Mark the intent as a fallback handler.
    pub fn with_fallback(mut self, is_fallback: bool) -> Self {
        self.is_fallback = is_fallback;
        self
    }

    /// Append a training phrase made of a single text part.
    pub fn with_phrase(mut self, text: impl Into<String>) -> Self {
        self.training_phrases.push(TrainingPhrase::new(text));
        self
    }

    /// Append a response message.
    pub fn with_message(mut self, message: Message) -> Self {
        self.messages.push(message);
        self
    }

    /// Append a followup edge.
    pub fn with_followup(mut self, followup: Followup) -> Self {
        self.followups.push(followup);
        self
    }

    pub fn with_input_context(mut self, name: impl Into<String>) -> Self {
        self.input_context_names.push(name.into());
        self
    }

    pub fn with_output_context(mut self, context: OutputContext) -> Self {
        self.output_contexts.push(context);
        self
    }

    /// Number of payload-type response messages.
    pub fn payload_count(&self) -> usize {
        self.messages.iter().filter(|m| m.is_payload()).count()
    }
}

/// A directed followup relationship to another intent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Followup {
    pub intent: IntentId,
    #[serde(default)]
    pub lifespan_count: u32,
    /// Short name of the context carrying the relationship.
    #[serde(default)]
    pub context: String,
}

impl Followup {
    pub fn new(intent: impl Into<String>, lifespan_count: u32, context: impl Into<String>) -> Self {
        Self {
            intent: IntentId::new(intent),
            lifespan_count,
            context: context.into(),
        }
    }
}

/// A context an intent activates once matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputContext {
    pub name: String,
    #[serde(default)]
    pub lifespan_count: u32,
}

impl OutputContext {
    pub fn new(name: impl Into<String>, lifespan_count: u32) -> Self {
        Self {
            name: name.into(),
            lifespan_count,
        }
    }

    /// Last path segment of the context name.
    pub fn short_name(&self) -> &str {
        short_context_name(&self.name)
    }
}

/// Strip the `projects/.../contexts/` prefix from a context name.
pub fn short_context_name(name: &str) -> &str {
    name.rsplit('/').next().unwrap_or(name)
}
