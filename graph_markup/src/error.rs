//! Errors raised while building markup.

use intent_model::{IntentId, ModelError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GraphError {
    /// The state label carries none of the known lifecycle tags.
    #[error("unrecognized intent state '{state}'")]
    UnrecognizedState { state: String },

    /// An intent could not be turned into a vertex.
    #[error("intent '{intent}' cannot be rendered: {source}")]
    Intent {
        intent: IntentId,
        source: Box<GraphError>,
    },

    #[error(transparent)]
    Model(#[from] ModelError),
}
