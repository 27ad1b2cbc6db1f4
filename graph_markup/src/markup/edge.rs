//! Edge fragments - one per resolvable followup.

use intent_model::{Followup, IntentId};
use tracing::debug;

use super::sanitize;
use crate::index::IntentIndex;

/// Color used when no palette is configured.
pub const DEFAULT_EDGE_COLOR: &str = "#69b3a2";

/// Color for the followup at `position` in its source's list.
pub fn edge_color(palette: &[String], position: usize) -> &str {
    if palette.is_empty() {
        DEFAULT_EDGE_COLOR
    } else {
        &palette[position % palette.len()]
    }
}

/// Escape text for a single-quoted markup literal: [`sanitize`] plus `'` -> `\'`.
pub fn sanitize_single_quoted(text: &str) -> String {
    sanitize(text).replace('\'', "\\'")
}

/// Render the followups of `source` as edges, in followup order.
///
/// `from` is the source's index, or its escaped ID when the source has no index.
/// Colors follow each followup's position in the list, so the first followup of any
/// intent gets the same color. Followups whose target has no index are skipped.
pub fn format_edges(
    source: &IntentId,
    followups: &[Followup],
    index: &IntentIndex,
    palette: &[String],
) -> Vec<String> {
    let from = match index.get(source) {
        Some(from) => from.to_string(),
        None => sanitize_single_quoted(source.as_str()),
    };

    followups
        .iter()
        .enumerate()
        .filter_map(|(position, followup)| {
            let Some(to) = index.get(&followup.intent) else {
                debug!(from = %source, to = %followup.intent, "followup target not indexed");
                return None;
            };
            Some(format!(
                "{{from:'{}'\n          ,color:{{color:' {}'}},\n          to: {},\n          title: '{} </br> <p style =\"color:red\">lifespanCount: <b> {} </b></p>'}},",
                from,
                edge_color(palette, position),
                to,
                sanitize_single_quoted(&followup.context),
                followup.lifespan_count
            ))
        })
        .collect()
}
