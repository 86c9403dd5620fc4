//! Weather catalog: current conditions, the seven-day outlook, active
//! alerts, and farming insights derived from the forecast.

use std::sync::LazyLock;

use serde::Serialize;

// =============================================================================
// Types
// =============================================================================

/// Conditions at the reference location right now.
#[derive(Clone, Debug, Serialize)]
pub struct CurrentConditions {
    pub location: &'static str,
    pub temperature_c: i16,
    pub condition: &'static str,
    pub humidity_pct: u8,
    pub wind_kmh: u16,
    pub visibility_km: u16,
    pub uv_index: u8,
    pub feels_like_c: i16,
}

/// One day of the forecast.
#[derive(Clone, Debug, Serialize)]
pub struct DayForecast {
    pub day: &'static str,
    pub high_c: i16,
    pub low_c: i16,
    pub condition: &'static str,
    pub rain_chance_pct: u8,
}

/// Alert severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    Warning,
    Info,
}

/// An active weather advisory.
#[derive(Clone, Debug, Serialize)]
pub struct WeatherAlert {
    pub kind: AlertKind,
    pub title: &'static str,
    pub message: &'static str,
    pub issued: &'static str,
}

/// How urgently a farming insight should be acted on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightPriority {
    Low,
    Medium,
    High,
}

/// Actionable guidance derived from the forecast.
#[derive(Clone, Debug, Serialize)]
pub struct FarmingInsight {
    pub title: &'static str,
    pub description: &'static str,
    pub priority: InsightPriority,
}

// =============================================================================
// Catalog
// =============================================================================

static CURRENT: CurrentConditions = CurrentConditions {
    location: "Pune, Maharashtra",
    temperature_c: 28,
    condition: "Partly Cloudy",
    humidity_pct: 68,
    wind_kmh: 12,
    visibility_km: 8,
    uv_index: 6,
    feels_like_c: 31,
};

static FORECAST: LazyLock<Vec<DayForecast>> = LazyLock::new(|| {
    vec![
        DayForecast {
            day: "Today",
            high_c: 30,
            low_c: 22,
            condition: "Partly Cloudy",
            rain_chance_pct: 20,
        },
        DayForecast {
            day: "Tomorrow",
            high_c: 32,
            low_c: 24,
            condition: "Sunny",
            rain_chance_pct: 5,
        },
        DayForecast {
            day: "Thu",
            high_c: 29,
            low_c: 21,
            condition: "Light Rain",
            rain_chance_pct: 70,
        },
        DayForecast {
            day: "Fri",
            high_c: 27,
            low_c: 20,
            condition: "Heavy Rain",
            rain_chance_pct: 90,
        },
        DayForecast {
            day: "Sat",
            high_c: 25,
            low_c: 19,
            condition: "Cloudy",
            rain_chance_pct: 40,
        },
        DayForecast {
            day: "Sun",
            high_c: 28,
            low_c: 22,
            condition: "Sunny",
            rain_chance_pct: 10,
        },
        DayForecast {
            day: "Mon",
            high_c: 31,
            low_c: 23,
            condition: "Partly Cloudy",
            rain_chance_pct: 15,
        },
    ]
});

static ALERTS: LazyLock<Vec<WeatherAlert>> = LazyLock::new(|| {
    vec![
        WeatherAlert {
            kind: AlertKind::Warning,
            title: "Heavy Rainfall Expected",
            message: "Expect 50-80mm rainfall Thu-Fri. Avoid field work during this period.",
            issued: "2 hours ago",
        },
        WeatherAlert {
            kind: AlertKind::Info,
            title: "Optimal Irrigation Time",
            message: "Best time for watering: 6-8 AM and 5-7 PM today.",
            issued: "6 hours ago",
        },
    ]
});

static INSIGHTS: LazyLock<Vec<FarmingInsight>> = LazyLock::new(|| {
    vec![
        FarmingInsight {
            title: "Irrigation Advice",
            description: "Reduce watering by 60% due to expected rainfall Thu-Fri",
            priority: InsightPriority::High,
        },
        FarmingInsight {
            title: "Spray Conditions",
            description: "Good conditions for pesticide application today (low wind)",
            priority: InsightPriority::Medium,
        },
        FarmingInsight {
            title: "Crop Growth",
            description: "Favorable conditions for wheat and mustard this week",
            priority: InsightPriority::Low,
        },
    ]
});

// =============================================================================
// Operations
// =============================================================================

/// Current conditions at the reference location.
pub fn current() -> &'static CurrentConditions {
    &CURRENT
}

/// Seven-day forecast, today first.
pub fn seven_day_forecast() -> &'static [DayForecast] {
    &FORECAST
}

/// Active weather advisories, most severe first.
pub fn alerts() -> &'static [WeatherAlert] {
    &ALERTS
}

/// Farming insights derived from the forecast.
pub fn farming_insights() -> &'static [FarmingInsight] {
    &INSIGHTS
}

// =============================================================================
// Tests
// =============================================================================
