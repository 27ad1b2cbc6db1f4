//! Graph Builder - runs one visualization build over an intent set.
//!
//! A build goes through these steps:
//! 1. **Index**: assign every intent a numeric vertex id in collection order
//! 2. **Summarize**: classify each intent and collect its dict entry
//! 3. **Vertices**: render dict entries, split by the abbreviation threshold
//! 4. **Edges**: render every intent's followups against the same index
//! 5. **Join**: concatenate fragments into the output documents

use intent_model::{BuildConfig, IntentId, IntentSet};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, info_span};
use uuid::Uuid;

use crate::error::GraphError;
use crate::index::{IntentDict, IntentIndex};
use crate::markup::{format_edges, format_vertices, join_fragments};
use crate::summary::{select_response, ResponseSummary, UniformSource};

/// Unique identifier for a single build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BuildId(pub Uuid);

impl BuildId {
    /// Create a new random build ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for BuildId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for BuildId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The documents produced by one build.
#[derive(Debug, Clone, Serialize)]
pub struct GraphMarkup {
    pub build_id: BuildId,

    /// Vertices of intents at or under the abbreviation threshold.
    pub vertices: String,

    /// Vertices of intents over the abbreviation threshold.
    pub individual_vertices: String,

    /// Edges of every intent, in intent order.
    pub edges: String,
}

/// Builds vertex and edge markup from intent sets.
pub struct GraphBuilder {
    config: BuildConfig,
}

impl GraphBuilder {
    /// Create a builder with the given configuration.
    pub fn new(config: BuildConfig) -> Self {
        Self { config }
    }

    /// Create a builder with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(BuildConfig::default())
    }

    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    /// Run a build, indexing the intents in collection order.
    ///
    /// An intent with an unrecognized state aborts the whole build; no partial markup
    /// is returned.
    pub fn build(&self, intents: &IntentSet) -> Result<GraphMarkup, GraphError> {
        let index = IntentIndex::build(intents);
        self.build_with_index(intents, &index)
    }

    /// Parse an intent export, link its contexts into followups and build it.
    pub fn build_json(&self, json: &str) -> Result<GraphMarkup, GraphError> {
        let mut intents = IntentSet::from_json_str(json)?;
        intents.link_contexts();
        self.build(&intents)
    }

    /// Run a build against a caller-supplied index.
    pub fn build_with_index(
        &self,
        intents: &IntentSet,
        index: &IntentIndex,
    ) -> Result<GraphMarkup, GraphError> {
        let build_id = BuildId::new();
        let span = info_span!("graph_build", %build_id);
        let _enter = span.enter();

        let dict = IntentDict::from_intents(intents)?;
        debug!(intents = dict.len(), indexed = index.len(), "collected intent dict");

        let vertices = format_vertices(index, &dict, self.config.abbreviation_threshold);

        let edges: Vec<String> = intents
            .iter()
            .flat_map(|intent| {
                format_edges(&intent.name, &intent.followups, index, &self.config.edge_palette)
            })
            .collect();

        info!(
            full = vertices.full.len(),
            individual = vertices.individual.len(),
            edges = edges.len(),
            "built graph markup"
        );

        Ok(GraphMarkup {
            build_id,
            vertices: vertices.full_markup(),
            individual_vertices: vertices.individual_markup(),
            edges: join_fragments(&edges),
        })
    }

    /// Response summary of every intent, in collection order.
    pub fn response_summaries(
        &self,
        intents: &IntentSet,
        rng: &mut dyn UniformSource,
    ) -> Vec<(IntentId, ResponseSummary)> {
        intents
            .iter()
            .map(|intent| (intent.name.clone(), select_response(&intent.messages, rng)))
            .collect()
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::with_defaults()
    }
}
