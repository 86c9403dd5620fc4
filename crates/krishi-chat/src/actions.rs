//! Quick-action shortcuts shown on the welcome screen.
//!
//! Each action carries the exact utterance it submits on behalf of the user,
//! so tapping one is indistinguishable from typing the same text.

use std::sync::LazyLock;

use serde::Serialize;

/// One tappable shortcut.
#[derive(Clone, Debug, Serialize)]
pub struct QuickAction {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// The utterance submitted when the action is tapped.
    pub message: &'static str,
}

/// Tone of a quick tip, used for presentation emphasis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TipTone {
    Success,
    Info,
    Warning,
    Destructive,
}

/// A one-line hint shown under the action grid.
#[derive(Clone, Debug, Serialize)]
pub struct QuickTip {
    pub text: &'static str,
    pub tone: TipTone,
}

static ACTIONS: LazyLock<Vec<QuickAction>> = LazyLock::new(|| {
    vec![
        QuickAction {
            id: "disease-scan",
            title: "Disease Scan",
            description: "Upload plant photo for instant disease detection",
            message: "I want to scan my plant for diseases",
        },
        QuickAction {
            id: "weather",
            title: "Weather Forecast",
            description: "Get detailed weather predictions",
            message: "Show me the weather forecast for farming",
        },
        QuickAction {
            id: "crop-advisory",
            title: "Crop Advisory",
            description: "Personalized crop recommendations",
            message: "Give me crop advisory for this season",
        },
        QuickAction {
            id: "mandi-prices",
            title: "Mandi Prices",
            description: "Latest market rates and trends",
            message: "Show me current mandi prices",
        },
    ]
});

static TIPS: LazyLock<Vec<QuickTip>> = LazyLock::new(|| {
    vec![
        QuickTip {
            text: "Early detection saves crops",
            tone: TipTone::Success,
        },
        QuickTip {
            text: "Location-based advice",
            tone: TipTone::Info,
        },
        QuickTip {
            text: "Seasonal recommendations",
            tone: TipTone::Warning,
        },
        QuickTip {
            text: "Disease alerts",
            tone: TipTone::Destructive,
        },
    ]
});

/// The four welcome-screen shortcuts, in display order.
pub fn quick_actions() -> &'static [QuickAction] {
    &ACTIONS
}

/// Look up an action by its stable id.
pub fn action_by_id(id: &str) -> Option<&'static QuickAction> {
    ACTIONS.iter().find(|a| a.id == id)
}

/// The one-line hints under the action grid.
pub fn quick_tips() -> &'static [QuickTip] {
    &TIPS
}

// =============================================================================
// Tests
// =============================================================================
