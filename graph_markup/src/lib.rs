//! # Graph Markup
//!
//! Translates an intent graph into the vertex and edge markup strings consumed by a
//! node-link visualization. The crate performs no I/O: it takes an
//! [`intent_model::IntentSet`] snapshot and returns text.
//!
//! ## Core Components
//!
//! - **markup**: text sanitizing, state colors, vertex and edge fragments
//! - **summary**: training-phrase aggregation and response text selection
//! - **index**: the per-build intent index map and intent dict
//! - **builder**: runs a whole build and joins the fragments

pub mod builder;
pub mod error;
pub mod index;
pub mod markup;
pub mod summary;

pub use builder::*;
pub use error::*;
pub use index::*;
pub use markup::*;
pub use summary::*;
