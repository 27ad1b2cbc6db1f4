//! Errors raised while loading intent data or build configuration.

use thiserror::Error;

/// Failure while turning external text into model values.
#[derive(Debug, Error)]
pub enum ModelError {
    /// The intent export is not valid JSON or does not match the intent shape.
    #[error("invalid intent json: {0}")]
    Json(#[from] serde_json::Error),

    /// The build configuration is not valid TOML or has unknown keys.
    #[error("invalid build config: {0}")]
    Config(#[from] toml::de::Error),
}
