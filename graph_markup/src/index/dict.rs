//! Intent dict - the per-intent data a vertex is rendered from.

use indexmap::IndexMap;
use intent_model::{Intent, IntentId, IntentSet};
use serde::Serialize;

use crate::error::GraphError;
use crate::markup::{classify_state, VertexColor};
use crate::summary::aggregate_training_phrases;

/// Everything a vertex shows about one intent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntentDictEntry {
    pub display_name: String,
    pub color: VertexColor,
    pub payload_count: usize,
    /// Up to three phrases, comma separated.
    pub training_phrases: String,
}

impl IntentDictEntry {
    /// Summarize one intent. Fails when its state label is not recognized.
    pub fn from_intent(intent: &Intent) -> Result<Self, GraphError> {
        let color = classify_state(&intent.state, intent.is_fallback).map_err(|source| {
            GraphError::Intent {
                intent: intent.name.clone(),
                source: Box::new(source),
            }
        })?;

        Ok(Self {
            display_name: intent.display_name.clone(),
            color,
            payload_count: intent.payload_count(),
            training_phrases: aggregate_training_phrases(&intent.training_phrases),
        })
    }
}

/// Dict entries in intent-set order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct IntentDict {
    entries: IndexMap<IntentId, IntentDictEntry>,
}

impl IntentDict {
    pub fn new() -> Self {
        Self::default()
    }

    /// Summarize every intent, stopping at the first one that cannot be classified.
    pub fn from_intents(intents: &IntentSet) -> Result<Self, GraphError> {
        let mut dict = Self::new();
        for intent in intents {
            if dict.entries.contains_key(&intent.name) {
                continue;
            }
            let entry = IntentDictEntry::from_intent(intent)?;
            dict.entries.insert(intent.name.clone(), entry);
        }
        Ok(dict)
    }

    pub fn insert(&mut self, id: IntentId, entry: IntentDictEntry) -> Option<IntentDictEntry> {
        self.entries.insert(id, entry)
    }

    pub fn get(&self, id: &IntentId) -> Option<&IntentDictEntry> {
        self.entries.get(id)
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&IntentId, &IntentDictEntry)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use intent_model::{Message, Platform};

    #[test]
    fn test_entry_from_intent() {
        let intent = Intent::new("intent1", "Promotion")
            .with_state("WEBHOOK_STATE_ENABLED")
            .with_phrase("deals")
            .with_phrase("promo")
            .with_message(Message::payload(Platform::Line));

        let entry = IntentDictEntry::from_intent(&intent).unwrap();

        assert_eq!(entry.display_name, "Promotion");
        assert_eq!(entry.color, VertexColor::Green);
        assert_eq!(entry.payload_count, 1);
        assert_eq!(entry.training_phrases, "deals,promo");
    }

    #[test]
    fn test_unclassified_intent_fails_with_its_id() {
        let intents: IntentSet = vec![
            Intent::new("ok", "Ok"),
            Intent::new("broken", "Broken").with_state("WEBHOOK_STATE_DISABLED"),
        ]
        .into_iter()
        .collect();

        let err = IntentDict::from_intents(&intents).unwrap_err();
        match err {
            GraphError::Intent { intent, source } => {
                assert_eq!(intent, IntentId::from("broken"));
                assert!(matches!(*source, GraphError::UnrecognizedState { .. }));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_entry_shows_three_phrases() {
        let intent = Intent::new("chatty", "Chatty")
            .with_phrase("one")
            .with_phrase("two")
            .with_phrase("three")
            .with_phrase("four");

        let entry = IntentDictEntry::from_intent(&intent).unwrap();

        assert_eq!(entry.training_phrases, "one,two,three");
    }

    #[test]
    fn test_dict_preserves_order() {
        let intents: IntentSet = vec![
            Intent::new("z", "Z"),
            Intent::new("a", "A").with_fallback(true),
        ]
        .into_iter()
        .collect();

        let dict = IntentDict::from_intents(&intents).unwrap();
        let ids: Vec<_> = dict.iter().map(|(id, _)| id.as_str()).collect();

        assert_eq!(ids, ["z", "a"]);
        assert_eq!(dict.get(&IntentId::from("a")).unwrap().color, VertexColor::Blue);
    }
}
