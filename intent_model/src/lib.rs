//! # Intent Model
//!
//! The data model of a conversational agent's intent graph. This crate holds the
//! read-only snapshot a visualization build works from and does not contain any
//! formatting logic.
//!
//! - **intent**: intents, training phrases, response messages, followups and contexts
//! - **config**: per-build settings such as the abbreviation threshold
//! - **error**: failures while loading intents or configuration

pub mod config;
pub mod error;
pub mod intent;

pub use config::*;
pub use error::*;
pub use intent::*;
