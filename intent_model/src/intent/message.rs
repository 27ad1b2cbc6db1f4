//! Response message definitions.

use serde::{Deserialize, Serialize};

/// Messaging platforms a response can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Platform {
    /// Platform-neutral default responses.
    #[default]
    #[serde(rename = "PLATFORM_UNSPECIFIED")]
    Unspecified,
    Facebook,
    Slack,
    Telegram,
    Kik,
    Skype,
    Line,
    Viber,
    ActionsOnGoogle,
    GoogleHangouts,
}

impl Platform {
    /// Whether responses on this platform are the neutral defaults.
    pub fn is_neutral(&self) -> bool {
        matches!(self, Platform::Unspecified)
    }
}

/// Candidate texts of a text response; one is shown per turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TextVariants {
    #[serde(default)]
    pub text: Vec<String>,
}

/// A response message, discriminated by the `message` field of the export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "message", rename_all = "lowercase")]
pub enum Message {
    /// Platform-specific structured payload (cards, quick replies, flex messages).
    Payload {
        #[serde(default)]
        platform: Platform,
        #[serde(default)]
        payload: serde_json::Value,
    },

    /// Plain text with one or more variants.
    Text {
        #[serde(default)]
        platform: Platform,
        #[serde(default)]
        text: TextVariants,
    },

    /// Any other kind (quick replies, cards, images). Neither counted nor shown.
    #[serde(other)]
    Other,
}

impl Message {
    /// Create a payload message with an empty body.
    pub fn payload(platform: Platform) -> Self {
        Message::Payload {
            platform,
            payload: serde_json::Value::Null,
        }
    }

    /// Create a text message from its variants.
    pub fn text<I, S>(platform: Platform, variants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Message::Text {
            platform,
            text: TextVariants {
                text: variants.into_iter().map(Into::into).collect(),
            },
        }
    }

    /// Target platform, or `None` for message kinds this model does not read.
    pub fn platform(&self) -> Option<Platform> {
        match self {
            Message::Payload { platform, .. } | Message::Text { platform, .. } => Some(*platform),
            Message::Other => None,
        }
    }

    pub fn is_payload(&self) -> bool {
        matches!(self, Message::Payload { .. })
    }

    /// Text variants, or `None` for non-text messages.
    pub fn variants(&self) -> Option<&[String]> {
        match self {
            Message::Text { text, .. } => Some(&text.text),
            Message::Payload { .. } | Message::Other => None,
        }
    }
}
