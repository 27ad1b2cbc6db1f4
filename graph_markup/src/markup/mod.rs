//! Markup fragments for the visualization layer.
//!
//! Every formatter returns an ordered list of self-contained fragments, each ending in
//! a comma. [`join_fragments`] concatenates them into the final document.

mod color;
mod edge;
mod vertex;

pub use color::*;
pub use edge::*;
pub use vertex::*;

/// Escape text for embedding inside a double-quoted markup literal.
///
/// Double quotes become `\"` and newlines become `\n`; nothing else changes.
pub fn sanitize(text: &str) -> String {
    text.replace('"', "\\\"").replace('\n', "\\n")
}

/// Concatenate fragments in order. Fragments carry their own trailing comma.
pub fn join_fragments<S: AsRef<str>>(fragments: &[S]) -> String {
    fragments.iter().map(AsRef::as_ref).collect()
}
