//! Vertex colors derived from an intent's lifecycle state.

use serde::{Deserialize, Serialize};

use crate::error::GraphError;

/// Font color of a vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VertexColor {
    Red,
    Green,
    Blue,
    Black,
}

impl VertexColor {
    /// Hex code used in the markup.
    pub fn hex(&self) -> &'static str {
        match self {
            VertexColor::Red => "#FF0000",
            VertexColor::Green => "#00FF00",
            VertexColor::Blue => "#0000FF",
            VertexColor::Black => "#000000",
        }
    }
}

impl std::fmt::Display for VertexColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.hex())
    }
}

/// `(state tag, fallback, color)`, matched top to bottom.
/// New lifecycle tags get a row here.
const STATE_COLORS: [(&str, bool, VertexColor); 4] = [
    ("ENABLED", true, VertexColor::Red),
    ("ENABLED", false, VertexColor::Green),
    ("UNSPECIFIED", true, VertexColor::Blue),
    ("UNSPECIFIED", false, VertexColor::Black),
];

/// Map a raw state label and fallback flag to a vertex color.
///
/// The label matches a tag when it contains it, so prefixes such as
/// `WEBHOOK_STATE_` are ignored. Labels matching no tag are an error.
pub fn classify_state(state: &str, is_fallback: bool) -> Result<VertexColor, GraphError> {
    STATE_COLORS
        .iter()
        .find(|(tag, fallback, _)| state.contains(*tag) && *fallback == is_fallback)
        .map(|(_, _, color)| *color)
        .ok_or_else(|| GraphError::UnrecognizedState {
            state: state.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enabled_fallback_is_red() {
        assert_eq!(classify_state("TEST_ENABLED", true).unwrap(), VertexColor::Red);
    }

    #[test]
    fn test_enabled_is_green() {
        assert_eq!(classify_state("TEST_ENABLED", false).unwrap(), VertexColor::Green);
    }

    #[test]
    fn test_unspecified_fallback_is_blue() {
        assert_eq!(classify_state("TEST_UNSPECIFIED", true).unwrap(), VertexColor::Blue);
    }

    #[test]
    fn test_unspecified_is_black() {
        assert_eq!(classify_state("TEST_UNSPECIFIED", false).unwrap(), VertexColor::Black);
    }

    #[test]
    fn test_unknown_state_is_error() {
        assert!(classify_state("WEBHOOK_STATE_ENABLED_FOR_SLOT_FILLING", false).is_ok());

        let err = classify_state("TEST_DISABLED", true).unwrap_err();
        assert!(matches!(err, GraphError::UnrecognizedState { ref state } if state == "TEST_DISABLED"));

        assert!(classify_state("", false).is_err());
        assert!(classify_state("test_enabled", false).is_err());
    }

    #[test]
    fn test_hex_codes() {
        assert_eq!(VertexColor::Red.hex(), "#FF0000");
        assert_eq!(VertexColor::Black.to_string(), "#000000");
    }
}
