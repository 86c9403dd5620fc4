//! Reply resolver: maps a user utterance to a canned assistant reply.
//!
//! The entire "intelligence" of the assistant lives here: an attachment
//! override followed by an ordered keyword rule table. First match wins;
//! anything unmatched falls through to the default reply. The function is
//! total and never fails, for any input.

use std::sync::LazyLock;

use regex::Regex;

use krishi_core::types::MessageCategory;

use crate::types::ReplyPayload;

// =============================================================================
// Canned replies
// =============================================================================

pub const WEATHER_REPLY: &str = "Based on your location, here's the 7-day forecast: Expect mild temperatures around 25-30°C with occasional showers in the next 3 days. Perfect conditions for watering crops. Humidity will be 65-70%, ideal for most crops. No extreme weather alerts for your area.";

pub const MANDI_PRICES_REPLY: &str = "Current mandi prices in your area: Wheat ₹2,150/quintal (↑5%), Rice ₹1,950/quintal (→), Sugarcane ₹385/quintal (↓2%), Tomato ₹35/kg (↑12%), Onion ₹28/kg (→). Prices updated 2 hours ago from nearest APMCs.";

pub const CROP_ADVISORY_REPLY: &str = "For this season (Rabi), I recommend: 1) Wheat cultivation if you have well-drained soil, 2) Mustard for oil production - good market demand, 3) Gram (chickpea) for nitrogen fixation, 4) Consider crop rotation with legumes. Based on soil type and rainfall patterns in your region.";

pub const DISEASE_SCAN_PROMPT: &str = "I'm ready to help you identify plant diseases! Please upload a clear photo of the affected plant parts. Make sure the image shows the symptoms clearly - leaves, stems, or fruits with any discoloration, spots, or unusual growth.";

pub const DEFAULT_REPLY: &str = "I'm here to help with all your farming needs! You can ask me about crop diseases, weather forecasts, market prices, seasonal advice, or upload images of your plants for disease detection. How can I assist you today?";

pub const DISEASE_NARRATIVE: &str = "I've analyzed your plant image. Based on the symptoms visible, this appears to be Early Blight (Alternaria solani), a common fungal disease. I can see the characteristic dark, concentric spots on the leaves. Here's what you should do: 1) Remove affected leaves immediately, 2) Improve air circulation around plants, 3) Apply copper-based fungicide, 4) Water at soil level to avoid wetting leaves, 5) Consider resistant varieties for future planting.";

/// Confidence reported with every image verdict.
pub const DISEASE_CONFIDENCE: u8 = 87;

/// Label reported with every image verdict.
pub const DISEASE_LABEL: &str = "Early Blight";

// =============================================================================
// Rule table
// =============================================================================

/// Which canned reply a rule selects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ReplyKind {
    Weather,
    MandiPrices,
    CropAdvisory,
    DiseaseScanPrompt,
}

struct ReplyRule {
    keywords: Regex,
    kind: ReplyKind,
}

// Order matters: the first matching rule wins, so "weather" beats "price"
// when an utterance contains both. Keyword containment, any position.
static REPLY_RULES: LazyLock<Vec<ReplyRule>> = LazyLock::new(|| {
    let mk = |pattern: &str, kind: ReplyKind| ReplyRule {
        keywords: Regex::new(pattern).expect("Invalid reply rule regex"),
        kind,
    };

    vec![
        mk(r"(?i)(weather|forecast)", ReplyKind::Weather),
        mk(r"(?i)(price|mandi)", ReplyKind::MandiPrices),
        mk(r"(?i)(crop|plant|season)", ReplyKind::CropAdvisory),
        mk(r"(?i)(disease|scan)", ReplyKind::DiseaseScanPrompt),
    ]
});

// =============================================================================
// ReplyResolver
// =============================================================================

/// Deterministic resolver from user utterances to canned reply payloads.
///
/// Pure and total: no I/O, no state beyond the static rule table, and every
/// input (including the empty string) resolves to some payload.
#[derive(Clone, Copy, Debug, Default)]
pub struct ReplyResolver;

impl ReplyResolver {
    pub fn new() -> Self {
        Self
    }

    /// Resolve an utterance (and whether an image came with it) to a reply.
    ///
    /// Attachment presence always wins over text content: when
    /// `has_attachment` is true the utterance is ignored entirely and the
    /// fixed disease verdict is returned.
    pub fn resolve(&self, utterance: &str, has_attachment: bool) -> ReplyPayload {
        if has_attachment {
            return ReplyPayload::disease(DISEASE_NARRATIVE, DISEASE_CONFIDENCE, DISEASE_LABEL);
        }

        for rule in REPLY_RULES.iter() {
            if rule.keywords.is_match(utterance) {
                return match rule.kind {
                    ReplyKind::Weather => {
                        ReplyPayload::new(WEATHER_REPLY, MessageCategory::Weather)
                    }
                    ReplyKind::MandiPrices => {
                        ReplyPayload::new(MANDI_PRICES_REPLY, MessageCategory::Advisory)
                    }
                    ReplyKind::CropAdvisory => {
                        ReplyPayload::new(CROP_ADVISORY_REPLY, MessageCategory::Advisory)
                    }
                    ReplyKind::DiseaseScanPrompt => {
                        ReplyPayload::new(DISEASE_SCAN_PROMPT, MessageCategory::Plain)
                    }
                };
            }
        }

        ReplyPayload::new(DEFAULT_REPLY, MessageCategory::Plain)
    }
}

// =============================================================================
// Tests
// =============================================================================
