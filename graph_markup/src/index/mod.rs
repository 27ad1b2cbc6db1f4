//! Per-build lookup structures shared by the vertex and edge formatters.
//!
//! - **IntentIndex**: intent ID -> numeric vertex id
//! - **IntentDict**: intent ID -> everything a vertex shows

mod dict;

pub use dict::*;

use indexmap::IndexMap;
use intent_model::{IntentId, IntentSet};
use serde::Serialize;
use tracing::warn;

/// Numeric vertex ids, keyed by intent ID.
///
/// Built once per build and only read afterwards, so vertex and edge markup always
/// agree on an intent's id. Ids start at 1 and follow the order of the intent set.
#[derive(Debug, Clone, Default, Serialize)]
pub struct IntentIndex {
    indices: IndexMap<IntentId, usize>,
}

impl IntentIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign ids in collection order. A repeated ID keeps its first id.
    pub fn build(intents: &IntentSet) -> Self {
        let mut index = Self::new();
        for intent in intents {
            let next = index.indices.len() + 1;
            if index.indices.contains_key(&intent.name) {
                warn!(intent = %intent.name, "duplicate intent id, keeping first index");
                continue;
            }
            index.indices.insert(intent.name.clone(), next);
        }
        index
    }

    /// Set an explicit id, returning the previous one.
    pub fn insert(&mut self, id: IntentId, index: usize) -> Option<usize> {
        self.indices.insert(id, index)
    }

    /// Get the id of an intent.
    pub fn get(&self, id: &IntentId) -> Option<usize> {
        self.indices.get(id).copied()
    }

    pub fn contains(&self, id: &IntentId) -> bool {
        self.indices.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&IntentId, usize)> {
        self.indices.iter().map(|(id, index)| (id, *index))
    }
}

impl FromIterator<(IntentId, usize)> for IntentIndex {
    fn from_iter<T: IntoIterator<Item = (IntentId, usize)>>(iter: T) -> Self {
        Self {
            indices: iter.into_iter().collect(),
        }
    }
}
