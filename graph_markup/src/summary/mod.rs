//! Per-intent text summaries: training phrases and the representative response.

mod random;

pub use random::*;

use intent_model::{Message, TrainingPhrase};
use serde::{Deserialize, Serialize};

/// Number of training phrases a vertex shows.
pub const MAX_TRAINING_PHRASES: usize = 3;

/// Join the first text of the first three phrases with commas, in input order.
pub fn aggregate_training_phrases(phrases: &[TrainingPhrase]) -> String {
    phrases
        .iter()
        .take(MAX_TRAINING_PHRASES)
        .map(TrainingPhrase::first_text)
        .collect::<Vec<_>>()
        .join(",")
}

/// Payload count and chosen response text of one intent.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseSummary {
    pub payload_response: usize,
    /// Empty when the intent has no usable text response.
    pub response_txt: String,
}

/// Count payload messages and pick one response text.
///
/// Platform-neutral text messages are tried before platform-specific ones; the first
/// with at least one variant wins. A single variant is returned as is. With several,
/// one draw from `rng` picks among equal-width buckets of `[0, 1)` in variant order.
pub fn select_response(messages: &[Message], rng: &mut dyn UniformSource) -> ResponseSummary {
    let payload_response = messages.iter().filter(|m| m.is_payload()).count();

    let neutral = messages
        .iter()
        .filter(|m| m.platform().is_some_and(|p| p.is_neutral()));
    let specific = messages
        .iter()
        .filter(|m| m.platform().is_some_and(|p| !p.is_neutral()));
    let response_txt = neutral
        .chain(specific)
        .filter_map(Message::variants)
        .find(|variants| !variants.is_empty())
        .map(|variants| pick_variant(variants, rng).to_string())
        .unwrap_or_default();

    ResponseSummary {
        payload_response,
        response_txt,
    }
}

/// Pick one of a non-empty list of variants.
fn pick_variant<'a>(variants: &'a [String], rng: &mut dyn UniformSource) -> &'a str {
    let count = variants.len();
    if count <= 1 {
        return variants.first().map(String::as_str).unwrap_or("");
    }

    let draw = rng.draw().clamp(0.0, 1.0);
    let bucket = ((draw * count as f64) as usize).min(count - 1);
    &variants[bucket]
}
