use serde::{Deserialize, Serialize};

use krishi_core::config::ChatConfig;
use krishi_core::types::{Message, MessageCategory};

// =============================================================================
// ReplyPayload
// =============================================================================

/// What the resolver hands back for one utterance.
///
/// `confidence` and `disease_label` are both set iff
/// `category == DiseaseResult`; the constructors keep that pairing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReplyPayload {
    pub text: String,
    pub category: MessageCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disease_label: Option<String>,
}

impl ReplyPayload {
    /// A reply without detection fields.
    pub fn new(text: impl Into<String>, category: MessageCategory) -> Self {
        Self {
            text: text.into(),
            category,
            confidence: None,
            disease_label: None,
        }
    }

    /// A disease-detection verdict.
    pub fn disease(text: impl Into<String>, confidence: u8, label: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            category: MessageCategory::DiseaseResult,
            confidence: Some(confidence),
            disease_label: Some(label.into()),
        }
    }

    /// Build the assistant log entry for this payload.
    pub fn into_message(self, id: u64) -> Message {
        match (self.confidence, self.disease_label) {
            (Some(confidence), Some(label)) => {
                Message::assistant_disease(id, self.text, confidence, label)
            }
            _ => Message::assistant(id, self.text, self.category),
        }
    }
}

// =============================================================================
// SessionConfig
// =============================================================================

/// Tunables for a chat session.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Lower bound (inclusive) of the simulated reply delay, in milliseconds.
    pub reply_delay_min_ms: u64,
    /// Upper bound (exclusive) of the simulated reply delay, in milliseconds.
    pub reply_delay_max_ms: u64,
    /// Capacity of the session event broadcast channel.
    pub event_capacity: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            reply_delay_min_ms: 1500,
            reply_delay_max_ms: 2500,
            event_capacity: 64,
        }
    }
}

impl SessionConfig {
    /// Zero-delay configuration; replies land on the next scheduler tick.
    pub fn immediate() -> Self {
        Self {
            reply_delay_min_ms: 0,
            reply_delay_max_ms: 0,
            ..Self::default()
        }
    }
}

impl From<&ChatConfig> for SessionConfig {
    fn from(config: &ChatConfig) -> Self {
        Self {
            reply_delay_min_ms: config.reply_delay_min_ms,
            reply_delay_max_ms: config.reply_delay_max_ms,
            ..Self::default()
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use krishi_core::types::MessageAuthor;

    #[test]
    fn test_plain_payload_has_no_detection_fields() {
        let p = ReplyPayload::new("hello", MessageCategory::Plain);
        assert!(p.confidence.is_none());
        assert!(p.disease_label.is_none());
    }

    #[test]
    fn test_disease_payload_pairs_fields() {
        let p = ReplyPayload::disease("verdict", 87, "Early Blight");
        assert_eq!(p.category, MessageCategory::DiseaseResult);
        assert_eq!(p.confidence, Some(87));
        assert_eq!(p.disease_label.as_deref(), Some("Early Blight"));
    }

    #[test]
    fn test_into_message_plain() {
        let m = ReplyPayload::new("forecast", MessageCategory::Weather).into_message(5);
        assert_eq!(m.id, 5);
        assert_eq!(m.author, MessageAuthor::Assistant);
        assert_eq!(m.category, MessageCategory::Weather);
        assert!(m.detection_fields_consistent());
    }

    #[test]
    fn test_into_message_disease() {
        let m = ReplyPayload::disease("verdict", 87, "Early Blight").into_message(9);
        assert_eq!(m.category, MessageCategory::DiseaseResult);
        assert_eq!(m.confidence, Some(87));
        assert!(m.detection_fields_consistent());
    }

    #[test]
    fn test_payload_round_trip() {
        let p = ReplyPayload::disease("verdict", 87, "Early Blight");
        let json = serde_json::to_string(&p).unwrap();
        let back: ReplyPayload = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }

    #[test]
    fn test_payload_omits_absent_optionals() {
        let p = ReplyPayload::new("hello", MessageCategory::Plain);
        let json = serde_json::to_string(&p).unwrap();
        assert!(!json.contains("confidence"));
        assert!(!json.contains("disease_label"));
    }

    #[test]
    fn test_default_session_config_delay_window() {
        let config = SessionConfig::default();
        assert_eq!(config.reply_delay_min_ms, 1500);
        assert_eq!(config.reply_delay_max_ms, 2500);
    }

    #[test]
    fn test_session_config_from_chat_config() {
        let chat = ChatConfig {
            reply_delay_min_ms: 5,
            reply_delay_max_ms: 10,
        };
        let config = SessionConfig::from(&chat);
        assert_eq!(config.reply_delay_min_ms, 5);
        assert_eq!(config.reply_delay_max_ms, 10);
    }

    #[test]
    fn test_immediate_config_is_zero_delay() {
        let config = SessionConfig::immediate();
        assert_eq!(config.reply_delay_min_ms, 0);
        assert_eq!(config.reply_delay_max_ms, 0);
    }
}
