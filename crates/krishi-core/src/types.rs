use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Enums
// =============================================================================

/// Who authored a message in the conversation log.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageAuthor {
    /// The farmer typing (or tapping a quick action).
    User,
    /// The assistant's canned reply.
    Assistant,
}

/// How a message renders and which auxiliary fields are meaningful.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageCategory {
    /// Ordinary text bubble.
    Plain,
    /// User-uploaded plant photo; `attachment` is set.
    Image,
    /// Disease detection verdict; `confidence` and `disease_label` are set.
    DiseaseResult,
    /// Market-price or crop-advisory content.
    Advisory,
    /// Forecast content.
    Weather,
}

// =============================================================================
// Attachments
// =============================================================================

/// Opaque handle to an uploaded image.
///
/// Produced by the presentation layer (a preview URL, a temp-file path; the
/// core never inspects the bytes). Only its presence drives behavior.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachmentRef {
    pub reference: String,
}

impl AttachmentRef {
    pub fn new(reference: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
        }
    }

    /// A handle with a blank reference carries nothing downstream code can
    /// display, and is treated the same as no attachment at all.
    pub fn is_readable(&self) -> bool {
        !self.reference.trim().is_empty()
    }
}

// =============================================================================
// Message
// =============================================================================

/// One entry in the conversation log.
///
/// Invariants, enforced by the constructors below:
/// - `confidence` and `disease_label` are both set iff
///   `category == DiseaseResult`.
/// - `attachment` is set iff `category == Image`.
/// - `text` may be empty only when an image was attached.
///
/// Ids are assigned in creation order by the session manager; `created_at`
/// is for display formatting only, insertion order is authoritative.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: u64,
    pub text: String,
    pub author: MessageAuthor,
    pub created_at: DateTime<Utc>,
    pub category: MessageCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disease_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment: Option<AttachmentRef>,
}

impl Message {
    /// A plain text message from the user.
    pub fn user_text(id: u64, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            author: MessageAuthor::User,
            created_at: Utc::now(),
            category: MessageCategory::Plain,
            confidence: None,
            disease_label: None,
            attachment: None,
        }
    }

    /// An image upload from the user; `text` may be empty.
    pub fn user_image(id: u64, text: impl Into<String>, attachment: AttachmentRef) -> Self {
        Self {
            id,
            text: text.into(),
            author: MessageAuthor::User,
            created_at: Utc::now(),
            category: MessageCategory::Image,
            confidence: None,
            disease_label: None,
            attachment: Some(attachment),
        }
    }

    /// An assistant reply without disease-detection fields.
    ///
    /// `category` must be one of `Plain`, `Advisory`, `Weather`; use
    /// [`Message::assistant_disease`] for detection verdicts.
    pub fn assistant(id: u64, text: impl Into<String>, category: MessageCategory) -> Self {
        debug_assert!(
            !matches!(
                category,
                MessageCategory::DiseaseResult | MessageCategory::Image
            ),
            "assistant() cannot carry detection or attachment categories"
        );
        Self {
            id,
            text: text.into(),
            author: MessageAuthor::Assistant,
            created_at: Utc::now(),
            category,
            confidence: None,
            disease_label: None,
            attachment: None,
        }
    }

    /// An assistant disease-detection verdict.
    pub fn assistant_disease(
        id: u64,
        text: impl Into<String>,
        confidence: u8,
        disease_label: impl Into<String>,
    ) -> Self {
        Self {
            id,
            text: text.into(),
            author: MessageAuthor::Assistant,
            created_at: Utc::now(),
            category: MessageCategory::DiseaseResult,
            confidence: Some(confidence),
            disease_label: Some(disease_label.into()),
            attachment: None,
        }
    }

    /// True when the disease fields satisfy the both-or-neither invariant.
    pub fn detection_fields_consistent(&self) -> bool {
        match self.category {
            MessageCategory::DiseaseResult => {
                self.confidence.is_some() && self.disease_label.is_some()
            }
            _ => self.confidence.is_none() && self.disease_label.is_none(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
