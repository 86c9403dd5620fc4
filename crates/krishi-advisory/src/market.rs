//! Mandi (wholesale market) price catalog.
//!
//! Commodity quotes from major APMCs with per-category market trend
//! summaries, and the filter operation the price board is browsed through.

use std::sync::LazyLock;

use serde::Serialize;

// =============================================================================
// Types
// =============================================================================

/// Commodity grouping used by the category filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CropCategory {
    Cereals,
    Pulses,
    Oilseeds,
    Vegetables,
    Fruits,
    Spices,
    Fiber,
}

/// Direction a price moved since the previous quote.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceTrend {
    Up,
    Down,
    Stable,
}

/// Unit a commodity is quoted in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceUnit {
    Quintal,
    Kg,
}

impl PriceUnit {
    pub fn label(self) -> &'static str {
        match self {
            PriceUnit::Quintal => "quintal",
            PriceUnit::Kg => "kg",
        }
    }
}

/// One commodity quote from a named APMC.
#[derive(Clone, Debug, Serialize)]
pub struct MandiQuote {
    pub crop: &'static str,
    pub category: CropCategory,
    /// Current price in rupees per `unit`.
    pub current_price: u32,
    /// Previous quote in rupees per `unit`.
    pub previous_price: u32,
    pub unit: PriceUnit,
    pub market: &'static str,
    pub last_updated: &'static str,
    pub trend: PriceTrend,
    /// Percent change against the previous quote.
    pub change_pct: f32,
    pub quality: &'static str,
    /// Volume traded, in `unit`s.
    pub volume: u32,
}

/// Aggregate movement for one commodity group.
#[derive(Clone, Debug, Serialize)]
pub struct MarketTrend {
    pub category: &'static str,
    pub trend: PriceTrend,
    pub change: &'static str,
    pub description: &'static str,
}

// =============================================================================
// Catalog
// =============================================================================

static QUOTES: LazyLock<Vec<MandiQuote>> = LazyLock::new(|| {
    vec![
        MandiQuote {
            crop: "Wheat",
            category: CropCategory::Cereals,
            current_price: 2150,
            previous_price: 2045,
            unit: PriceUnit::Quintal,
            market: "Pune APMC",
            last_updated: "2 hours ago",
            trend: PriceTrend::Up,
            change_pct: 5.1,
            quality: "FAQ",
            volume: 1500,
        },
        MandiQuote {
            crop: "Rice (Basmati)",
            category: CropCategory::Cereals,
            current_price: 4200,
            previous_price: 4150,
            unit: PriceUnit::Quintal,
            market: "Delhi APMC",
            last_updated: "3 hours ago",
            trend: PriceTrend::Up,
            change_pct: 1.2,
            quality: "Premium",
            volume: 800,
        },
        MandiQuote {
            crop: "Gram (Chickpea)",
            category: CropCategory::Pulses,
            current_price: 5800,
            previous_price: 5950,
            unit: PriceUnit::Quintal,
            market: "Indore APMC",
            last_updated: "1 hour ago",
            trend: PriceTrend::Down,
            change_pct: -2.5,
            quality: "Bold",
            volume: 600,
        },
        MandiQuote {
            crop: "Mustard Seed",
            category: CropCategory::Oilseeds,
            current_price: 5200,
            previous_price: 5200,
            unit: PriceUnit::Quintal,
            market: "Jaipur APMC",
            last_updated: "4 hours ago",
            trend: PriceTrend::Stable,
            change_pct: 0.0,
            quality: "FAQ",
            volume: 900,
        },
        MandiQuote {
            crop: "Tomato",
            category: CropCategory::Vegetables,
            current_price: 35,
            previous_price: 31,
            unit: PriceUnit::Kg,
            market: "Nashik APMC",
            last_updated: "30 min ago",
            trend: PriceTrend::Up,
            change_pct: 12.9,
            quality: "Grade A",
            volume: 2500,
        },
        MandiQuote {
            crop: "Onion",
            category: CropCategory::Vegetables,
            current_price: 28,
            previous_price: 28,
            unit: PriceUnit::Kg,
            market: "Nashik APMC",
            last_updated: "1 hour ago",
            trend: PriceTrend::Stable,
            change_pct: 0.0,
            quality: "Medium",
            volume: 3200,
        },
        MandiQuote {
            crop: "Turmeric",
            category: CropCategory::Spices,
            current_price: 8500,
            previous_price: 8200,
            unit: PriceUnit::Quintal,
            market: "Erode APMC",
            last_updated: "2 hours ago",
            trend: PriceTrend::Up,
            change_pct: 3.7,
            quality: "Finger",
            volume: 400,
        },
        MandiQuote {
            crop: "Cotton",
            category: CropCategory::Fiber,
            current_price: 6800,
            previous_price: 7000,
            unit: PriceUnit::Quintal,
            market: "Akola APMC",
            last_updated: "3 hours ago",
            trend: PriceTrend::Down,
            change_pct: -2.9,
            quality: "Medium",
            volume: 1100,
        },
    ]
});

static TRENDS: LazyLock<Vec<MarketTrend>> = LazyLock::new(|| {
    vec![
        MarketTrend {
            category: "Cereals",
            trend: PriceTrend::Up,
            change: "+3.2%",
            description: "Strong demand from government procurement",
        },
        MarketTrend {
            category: "Pulses",
            trend: PriceTrend::Down,
            change: "-1.8%",
            description: "Good harvest leading to price correction",
        },
        MarketTrend {
            category: "Vegetables",
            trend: PriceTrend::Up,
            change: "+8.5%",
            description: "Festival season driving up demand",
        },
        MarketTrend {
            category: "Oilseeds",
            trend: PriceTrend::Stable,
            change: "\u{00b1}0.5%",
            description: "Stable export demand maintaining prices",
        },
    ]
});

// =============================================================================
// Operations
// =============================================================================

/// All quotes, in catalog order.
pub fn quotes() -> &'static [MandiQuote] {
    &QUOTES
}

/// Per-category market trend summaries.
pub fn market_trends() -> &'static [MarketTrend] {
    &TRENDS
}

/// Filter quotes by optional category and a case-insensitive search term.
///
/// `None` for `category` means all categories. The search term matches
/// against the crop name or the market name; an empty term matches
/// everything.
pub fn filter_quotes(category: Option<CropCategory>, search: &str) -> Vec<&'static MandiQuote> {
    let term = search.to_lowercase();
    QUOTES
        .iter()
        .filter(|q| category.map_or(true, |c| q.category == c))
        .filter(|q| {
            q.crop.to_lowercase().contains(&term) || q.market.to_lowercase().contains(&term)
        })
        .collect()
}

// =============================================================================
// Tests
// =============================================================================
