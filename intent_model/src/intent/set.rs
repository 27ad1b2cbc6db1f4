//! Intent collection - the snapshot handed to a visualization build.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{short_context_name, Followup, Intent, IntentId};
use crate::error::ModelError;

/// An ordered collection of intents.
///
/// Order is significant: it decides the numeric index each intent receives and the
/// order of the generated markup.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct IntentSet {
    intents: Vec<Intent>,
}

impl IntentSet {
    pub fn new(intents: Vec<Intent>) -> Self {
        Self { intents }
    }

    /// Parse a JSON array of intents in the agent-export shape.
    pub fn from_json_str(json: &str) -> Result<Self, ModelError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn push(&mut self, intent: Intent) {
        self.intents.push(intent);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Intent> {
        self.intents.iter()
    }

    pub fn as_slice(&self) -> &[Intent] {
        &self.intents
    }

    pub fn len(&self) -> usize {
        self.intents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intents.is_empty()
    }

    /// Get the first intent with the given ID.
    pub fn get(&self, id: &IntentId) -> Option<&Intent> {
        self.intents.iter().find(|i| &i.name == id)
    }

    /// Derive followups from output/input context pairs.
    ///
    /// Intent `B` becomes a followup of intent `A` when one of `A`'s output contexts is
    /// among `B`'s input contexts. Derived followups are appended after any the intent
    /// already declares, skipping ones with the same target and context.
    ///
    /// Returns the number of followups added.
    pub fn link_contexts(&mut self) -> usize {
        let mut derived: Vec<(usize, Followup)> = Vec::new();

        for (i, source) in self.intents.iter().enumerate() {
            for context in &source.output_contexts {
                let short = context.short_name();
                for target in &self.intents {
                    if target.name == source.name {
                        continue;
                    }
                    let listens = target
                        .input_context_names
                        .iter()
                        .any(|name| short_context_name(name) == short);
                    if listens {
                        derived.push((
                            i,
                            Followup {
                                intent: target.name.clone(),
                                lifespan_count: context.lifespan_count,
                                context: short.to_string(),
                            },
                        ));
                    }
                }
            }
        }

        let mut added = 0;
        for (i, followup) in derived {
            let followups = &mut self.intents[i].followups;
            let exists = followups
                .iter()
                .any(|f| f.intent == followup.intent && f.context == followup.context);
            if !exists {
                followups.push(followup);
                added += 1;
            }
        }

        debug!(added, "linked followups from contexts");
        added
    }
}

impl FromIterator<Intent> for IntentSet {
    fn from_iter<T: IntoIterator<Item = Intent>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a IntentSet {
    type Item = &'a Intent;
    type IntoIter = std::slice::Iter<'a, Intent>;

    fn into_iter(self) -> Self::IntoIter {
        self.intents.iter()
    }
}
