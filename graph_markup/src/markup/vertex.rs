//! Vertex fragments - one per intent.

use tracing::debug;

use super::{join_fragments, sanitize};
use crate::index::{IntentDict, IntentDictEntry, IntentIndex};

/// Vertex fragments split by payload count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VertexFragments {
    /// Intents with at most `threshold` payloads.
    pub full: Vec<String>,
    /// Intents with more than `threshold` payloads.
    pub individual: Vec<String>,
}

impl VertexFragments {
    pub fn full_markup(&self) -> String {
        join_fragments(&self.full)
    }

    pub fn individual_markup(&self) -> String {
        join_fragments(&self.individual)
    }
}

/// Render every dict entry as a vertex, in dict order.
///
/// Entries whose intent has no id in `index` are left out.
pub fn format_vertices(index: &IntentIndex, dict: &IntentDict, threshold: usize) -> VertexFragments {
    let mut fragments = VertexFragments::default();

    for (id, entry) in dict.iter() {
        let Some(vertex_id) = index.get(id) else {
            debug!(intent = %id, "intent has no index, skipping vertex");
            continue;
        };

        if entry.payload_count <= threshold {
            fragments.full.push(full_vertex(vertex_id, entry));
        } else {
            fragments.individual.push(individual_vertex(vertex_id, entry));
        }
    }

    fragments
}

fn full_vertex(vertex_id: usize, entry: &IntentDictEntry) -> String {
    format!(
        "{{id: {} , label: \"{}\",\n        font: {{color: '{}'}},\n        title: \"{}\"}},",
        vertex_id,
        sanitize(&entry.display_name),
        entry.color.hex(),
        vertex_tooltip(entry)
    )
}

fn individual_vertex(vertex_id: usize, entry: &IntentDictEntry) -> String {
    format!(
        "{{id: {} , label:\" {}\",\n        font: {{color: '{}'}},\n        title: \"{}\"}},",
        vertex_id,
        sanitize(&entry.display_name),
        entry.color.hex(),
        vertex_tooltip(entry)
    )
}

fn vertex_tooltip(entry: &IntentDictEntry) -> String {
    if entry.training_phrases.is_empty() {
        format!("Number of Payload is {}", entry.payload_count)
    } else {
        format!(
            "Training phrases is {} </br>Number of Payload is {}",
            sanitize(&entry.training_phrases),
            entry.payload_count
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::VertexColor;
    use intent_model::IntentId;

    fn entry(name: &str, color: VertexColor, payloads: usize, phrases: &str) -> IntentDictEntry {
        IntentDictEntry {
            display_name: name.to_string(),
            color,
            payload_count: payloads,
            training_phrases: phrases.to_string(),
        }
    }

    fn sample() -> (IntentIndex, IntentDict) {
        let index: IntentIndex = [(IntentId::from("intent1"), 1), (IntentId::from("intent2"), 2)]
            .into_iter()
            .collect();

        let mut dict = IntentDict::new();
        dict.insert(
            IntentId::from("intent1"),
            entry("intent1", VertexColor::Red, 1, ""),
        );
        dict.insert(
            IntentId::from("intent2"),
            entry("intent2", VertexColor::Black, 3, "โอเค,สนใจจ้า,ถูกต้องแล้ว"),
        );
        (index, dict)
    }

    #[test]
    fn test_all_full_under_high_threshold() {
        let (index, dict) = sample();

        let vertices = format_vertices(&index, &dict, 3);

        assert_eq!(
            vertices.full_markup(),
            "{id: 1 , label: \"intent1\",\n        font: {color: '#FF0000'},\n        title: \"Number of Payload is 1\"},\
             {id: 2 , label: \"intent2\",\n        font: {color: '#000000'},\n        title: \"Training phrases is โอเค,สนใจจ้า,ถูกต้องแล้ว </br>Number of Payload is 3\"},"
        );
        assert_eq!(vertices.individual_markup(), "");
    }

    #[test]
    fn test_partitioned_by_threshold() {
        let (index, dict) = sample();

        let vertices = format_vertices(&index, &dict, 2);

        assert_eq!(
            vertices.full_markup(),
            "{id: 1 , label: \"intent1\",\n        font: {color: '#FF0000'},\n        title: \"Number of Payload is 1\"},"
        );
        assert_eq!(
            vertices.individual_markup(),
            "{id: 2 , label:\" intent2\",\n        font: {color: '#000000'},\n        title: \"Training phrases is โอเค,สนใจจ้า,ถูกต้องแล้ว </br>Number of Payload is 3\"},"
        );
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let (index, dict) = sample();

        let at = format_vertices(&index, &dict, 1);
        assert_eq!(at.full.len(), 1);
        assert_eq!(at.individual.len(), 1);

        let below = format_vertices(&index, &dict, 0);
        assert!(below.full.is_empty());
        assert_eq!(below.individual.len(), 2);
    }

    #[test]
    fn test_every_intent_exactly_once() {
        let (index, dict) = sample();

        for threshold in 0..5 {
            let vertices = format_vertices(&index, &dict, threshold);
            assert_eq!(vertices.full.len() + vertices.individual.len(), dict.len());

            for (id, _) in dict.iter() {
                let marker = format!("{{id: {} ,", index.get(id).unwrap());
                let in_full = vertices.full.iter().filter(|f| f.starts_with(&marker)).count();
                let in_individual = vertices
                    .individual
                    .iter()
                    .filter(|f| f.starts_with(&marker))
                    .count();
                assert_eq!(in_full + in_individual, 1);
            }
        }
    }

    #[test]
    fn test_follows_dict_order_not_index_order() {
        let index: IntentIndex = [(IntentId::from("a"), 10), (IntentId::from("b"), 1)]
            .into_iter()
            .collect();
        let mut dict = IntentDict::new();
        dict.insert(IntentId::from("a"), entry("A", VertexColor::Green, 0, ""));
        dict.insert(IntentId::from("b"), entry("B", VertexColor::Green, 0, ""));

        let vertices = format_vertices(&index, &dict, 0);

        assert!(vertices.full[0].starts_with("{id: 10 ,"));
        assert!(vertices.full[1].starts_with("{id: 1 ,"));
    }

    #[test]
    fn test_names_and_phrases_are_sanitized() {
        let index: IntentIndex = [(IntentId::from("q"), 1)].into_iter().collect();
        let mut dict = IntentDict::new();
        dict.insert(
            IntentId::from("q"),
            entry("say \"hi\"", VertexColor::Blue, 0, "line\nbreak"),
        );

        let markup = format_vertices(&index, &dict, 0).full_markup();

        assert!(markup.contains("label: \"say \\\"hi\\\"\""));
        assert!(markup.contains("Training phrases is line\\nbreak </br>"));
    }

    #[test]
    fn test_unindexed_entry_skipped() {
        let (_, dict) = sample();
        let index: IntentIndex = [(IntentId::from("intent1"), 1)].into_iter().collect();

        let vertices = format_vertices(&index, &dict, 10);

        assert_eq!(vertices.full.len(), 1);
        assert!(vertices.individual.is_empty());
    }
}
