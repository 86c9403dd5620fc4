//! Domain catalogs for Krishi Sahayi.
//!
//! Immutable reference data (mandi quotes, weather, crop recommendations,
//! government schemes, disease profiles) plus the pure filter operations
//! the assistant surfaces them through. All figures are fixed at compile time;
//! a live deployment would replace these tables with upstream feeds.

pub mod crops;
pub mod disease;
pub mod market;
pub mod schemes;
pub mod weather;

pub use crops::{CropRecommendation, Season, SeasonalTask};
pub use disease::{analyze_image, DiseaseAnalysis, DiseaseProfile};
pub use market::{MandiQuote, MarketTrend, PriceTrend};
pub use schemes::{Scheme, SchemeCategory};
pub use weather::{CurrentConditions, DayForecast, WeatherAlert};
