//! Seasonal crop advisory catalog.
//!
//! Recommendations are keyed by growing season. Only the active season
//! (Rabi) carries entries; querying another season yields an empty list
//! rather than an error.

use std::sync::LazyLock;

use serde::Serialize;

// =============================================================================
// Types
// =============================================================================

/// Indian cropping season.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    Rabi,
    Kharif,
    Zaid,
}

impl Season {
    pub fn all() -> [Season; 3] {
        [Season::Rabi, Season::Kharif, Season::Zaid]
    }

    pub fn label(self) -> &'static str {
        match self {
            Season::Rabi => "Rabi (Winter)",
            Season::Kharif => "Kharif (Monsoon)",
            Season::Zaid => "Zaid (Summer)",
        }
    }

    /// The season currently in progress.
    pub fn is_active(self) -> bool {
        matches!(self, Season::Rabi)
    }
}

/// How strongly a crop is recommended this season.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationPriority {
    Low,
    Medium,
    High,
}

/// A crop suggestion with its cultivation window and economics.
#[derive(Clone, Debug, Serialize)]
pub struct CropRecommendation {
    pub crop: &'static str,
    pub priority: RecommendationPriority,
    pub sowing_time: &'static str,
    pub harvest_time: &'static str,
    pub expected_yield: &'static str,
    pub market_demand: &'static str,
    pub tips: &'static [&'static str],
    pub diseases: &'static [&'static str],
    /// Relative profitability score, 0-100.
    pub profitability: u8,
}

/// Progress state of a seasonal task.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Completed,
    InProgress,
    Upcoming,
}

/// A calendar task for the active season.
#[derive(Clone, Debug, Serialize)]
pub struct SeasonalTask {
    pub task: &'static str,
    pub status: TaskStatus,
    pub deadline: &'static str,
    pub description: &'static str,
}

/// One factor of the weather-impact summary.
#[derive(Clone, Debug, Serialize)]
pub struct ImpactNote {
    pub status: &'static str,
    pub message: &'static str,
}

/// How current weather affects the active season.
#[derive(Clone, Debug, Serialize)]
pub struct WeatherImpact {
    pub temperature: ImpactNote,
    pub rainfall: ImpactNote,
    pub humidity: ImpactNote,
}

// =============================================================================
// Catalog
// =============================================================================

static RABI_RECOMMENDATIONS: LazyLock<Vec<CropRecommendation>> = LazyLock::new(|| {
    vec![
        CropRecommendation {
            crop: "Wheat",
            priority: RecommendationPriority::High,
            sowing_time: "Nov - Dec",
            harvest_time: "Apr - May",
            expected_yield: "40-45 quintals/hectare",
            market_demand: "High",
            tips: &[
                "Use certified seeds",
                "Apply balanced fertilizers",
                "Ensure proper irrigation",
            ],
            diseases: &["Rust", "Smut"],
            profitability: 85,
        },
        CropRecommendation {
            crop: "Mustard",
            priority: RecommendationPriority::Medium,
            sowing_time: "Oct - Nov",
            harvest_time: "Feb - Mar",
            expected_yield: "15-20 quintals/hectare",
            market_demand: "Medium",
            tips: &[
                "Good for oil production",
                "Requires less water",
                "Good bee crop",
            ],
            diseases: &["Alternaria blight", "Downy mildew"],
            profitability: 70,
        },
        CropRecommendation {
            crop: "Gram (Chickpea)",
            priority: RecommendationPriority::High,
            sowing_time: "Oct - Nov",
            harvest_time: "Mar - Apr",
            expected_yield: "20-25 quintals/hectare",
            market_demand: "High",
            tips: &[
                "Fixes nitrogen in soil",
                "Good rotation crop",
                "Drought tolerant",
            ],
            diseases: &["Wilt", "Blight"],
            profitability: 78,
        },
    ]
});

static SEASONAL_TASKS: LazyLock<Vec<SeasonalTask>> = LazyLock::new(|| {
    vec![
        SeasonalTask {
            task: "Land Preparation",
            status: TaskStatus::Completed,
            deadline: "October 2024",
            description: "Deep plowing and field leveling",
        },
        SeasonalTask {
            task: "Seed Selection",
            status: TaskStatus::InProgress,
            deadline: "November 2024",
            description: "Choose high-yielding variety seeds",
        },
        SeasonalTask {
            task: "Sowing",
            status: TaskStatus::Upcoming,
            deadline: "December 2024",
            description: "Optimal sowing window for winter crops",
        },
        SeasonalTask {
            task: "First Irrigation",
            status: TaskStatus::Upcoming,
            deadline: "December 2024",
            description: "Crown root irrigation for wheat",
        },
    ]
});

static WEATHER_IMPACT: WeatherImpact = WeatherImpact {
    temperature: ImpactNote {
        status: "optimal",
        message: "Perfect temperature for rabi crops (15-25\u{00b0}C)",
    },
    rainfall: ImpactNote {
        status: "low",
        message: "Prepare for irrigation due to low rainfall",
    },
    humidity: ImpactNote {
        status: "good",
        message: "Moderate humidity reduces disease risk",
    },
};

// =============================================================================
// Operations
// =============================================================================

/// Crop recommendations for a season; empty when the catalog has none.
pub fn recommendations(season: Season) -> &'static [CropRecommendation] {
    match season {
        Season::Rabi => &RABI_RECOMMENDATIONS,
        Season::Kharif | Season::Zaid => &[],
    }
}

/// Calendar tasks for the active season.
pub fn seasonal_tasks() -> &'static [SeasonalTask] {
    &SEASONAL_TASKS
}

/// Weather impact summary for the active season.
pub fn weather_impact() -> &'static WeatherImpact {
    &WEATHER_IMPACT
}

// =============================================================================
// Tests
// =============================================================================
