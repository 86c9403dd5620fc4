//! Plain-text rendering of catalogs and chat messages for the terminal.

use chrono::Local;

use krishi_advisory::crops::{self, Season};
use krishi_advisory::disease;
use krishi_advisory::market::{self, PriceTrend};
use krishi_advisory::schemes;
use krishi_advisory::weather;
use krishi_chat::actions;
use krishi_core::types::{Message, MessageAuthor, MessageCategory};

fn trend_glyph(trend: PriceTrend) -> &'static str {
    match trend {
        PriceTrend::Up => "↑",
        PriceTrend::Down => "↓",
        PriceTrend::Stable => "→",
    }
}

/// One chat message as a terminal line.
pub fn format_message(message: &Message) -> String {
    let stamp = message.created_at.with_timezone(&Local).format("%H:%M");
    let who = match message.author {
        MessageAuthor::User => "you",
        MessageAuthor::Assistant => "krishi",
    };
    match message.category {
        MessageCategory::Image => {
            let reference = message
                .attachment
                .as_ref()
                .map(|a| a.reference.as_str())
                .unwrap_or("?");
            format!("[{}] {}: [image: {}] {}", stamp, who, reference, message.text)
        }
        MessageCategory::DiseaseResult => {
            let label = message.disease_label.as_deref().unwrap_or("unknown");
            let confidence = message.confidence.unwrap_or(0);
            format!(
                "[{}] {}: {} ({}, {}% confidence)",
                stamp, who, message.text, label, confidence
            )
        }
        _ => format!("[{}] {}: {}", stamp, who, message.text),
    }
}

/// Current conditions plus the seven-day outlook.
pub fn weather_report() -> String {
    let mut out = String::new();
    let now = weather::current();
    out.push_str(&format!(
        "Weather: {}\n{}°C {} (feels like {}°C)\nHumidity {}%  Wind {} km/h  Visibility {} km  UV {}/10\n",
        now.location,
        now.temperature_c,
        now.condition,
        now.feels_like_c,
        now.humidity_pct,
        now.wind_kmh,
        now.visibility_km,
        now.uv_index,
    ));

    out.push_str("\n7-day forecast:\n");
    for day in weather::seven_day_forecast() {
        out.push_str(&format!(
            "  {:<9} {:>3}°/{:<3}° {:<13} rain {}%\n",
            day.day, day.high_c, day.low_c, day.condition, day.rain_chance_pct
        ));
    }

    out.push_str("\nAlerts:\n");
    for alert in weather::alerts() {
        out.push_str(&format!("  [{:?}] {}: {}\n", alert.kind, alert.title, alert.message));
    }

    out.push_str("\nFarming insights:\n");
    for insight in weather::farming_insights() {
        out.push_str(&format!(
            "  ({:?}) {}: {}\n",
            insight.priority, insight.title, insight.description
        ));
    }
    out
}

/// The mandi price board, optionally narrowed by a search term.
pub fn price_board(search: &str) -> String {
    let quotes = market::filter_quotes(None, search);
    if quotes.is_empty() {
        return "No items found matching your criteria.\n".to_string();
    }

    let mut out = format!("Mandi prices ({} items):\n", quotes.len());
    for q in &quotes {
        out.push_str(&format!(
            "  {:<16} ₹{:>6}/{:<7} {} {:>5.1}%  {:<12} {} ({})\n",
            q.crop,
            q.current_price,
            q.unit.label(),
            trend_glyph(q.trend),
            q.change_pct,
            q.market,
            q.quality,
            q.last_updated,
        ));
    }

    out.push_str("\nMarket trends:\n");
    for t in market::market_trends() {
        out.push_str(&format!(
            "  {:<11} {} {}: {}\n",
            t.category,
            trend_glyph(t.trend),
            t.change,
            t.description
        ));
    }
    out
}

/// Crop recommendations and tasks for the active season.
pub fn advisory_report() -> String {
    let season = Season::Rabi;
    let mut out = format!("Crop advisory: {}\n", season.label());

    for rec in crops::recommendations(season) {
        out.push_str(&format!(
            "\n  {} ({:?} priority, {}% profitability)\n    Sow {}, harvest {}, yield {}\n    Demand: {}\n",
            rec.crop,
            rec.priority,
            rec.profitability,
            rec.sowing_time,
            rec.harvest_time,
            rec.expected_yield,
            rec.market_demand,
        ));
        for tip in rec.tips {
            out.push_str(&format!("    - {}\n", tip));
        }
        out.push_str(&format!("    Watch for: {}\n", rec.diseases.join(", ")));
    }

    out.push_str("\nSeasonal tasks:\n");
    for task in crops::seasonal_tasks() {
        out.push_str(&format!(
            "  [{:?}] {} by {}: {}\n",
            task.status, task.task, task.deadline, task.description
        ));
    }

    let impact = crops::weather_impact();
    out.push_str("\nWeather impact:\n");
    out.push_str(&format!("  Temperature ({}): {}\n", impact.temperature.status, impact.temperature.message));
    out.push_str(&format!("  Rainfall ({}): {}\n", impact.rainfall.status, impact.rainfall.message));
    out.push_str(&format!("  Humidity ({}): {}\n", impact.humidity.status, impact.humidity.message));
    out
}

/// Government schemes, optionally narrowed by a search term.
pub fn scheme_list(search: &str) -> String {
    let hits = schemes::filter_schemes(None, search);
    if hits.is_empty() {
        return "No schemes found matching your criteria.\n".to_string();
    }

    let mut out = String::new();
    for stat in schemes::stats() {
        out.push_str(&format!("{}: {}  ", stat.label, stat.value));
    }
    out.push('\n');

    for s in &hits {
        let star = if s.featured { "*" } else { " " };
        out.push_str(&format!(
            "\n{} {} [{:?}]\n    {}\n    Amount: {}  Deadline: {}  Beneficiaries: {}\n    Eligibility: {}\n    Apply: {}\n    Documents: {}\n",
            star,
            s.title,
            s.category,
            s.description,
            s.amount,
            s.deadline,
            s.beneficiaries,
            s.eligibility,
            s.application_process,
            s.documents.join(", "),
        ));
    }
    out
}

/// Common disease reference and photo tips.
pub fn disease_reference() -> String {
    let mut out = String::from("Common diseases:\n");
    for d in disease::common_diseases() {
        out.push_str(&format!(
            "\n  {} ({}, {:?} severity)\n    Symptoms: {}\n    Treatment: {}\n    Prevention: {}\n",
            d.name, d.crop, d.severity, d.symptoms, d.treatment, d.prevention
        ));
    }

    out.push_str("\nScanning tips:\n");
    for tip in disease::scanning_tips() {
        out.push_str(&format!("  {}: {}\n", tip.title, tip.description));
    }
    out
}

/// The welcome-screen quick actions.
pub fn quick_action_menu() -> String {
    let mut out = String::from("Quick actions (/quick <id>):\n");
    for action in actions::quick_actions() {
        out.push_str(&format!(
            "  {:<14} {}: {}\n",
            action.id, action.title, action.description
        ));
    }
    out.push_str("\nTips: ");
    let tips: Vec<_> = actions::quick_tips().iter().map(|t| t.text).collect();
    out.push_str(&tips.join(" · "));
    out.push('\n');
    out
}

/// Interactive command summary.
pub fn help_text() -> String {
    "Commands:\n  \
     /weather            current conditions and 7-day forecast\n  \
     /prices [search]    mandi price board\n  \
     /advisory           seasonal crop recommendations\n  \
     /schemes [search]   government scheme browser\n  \
     /diseases           disease reference and scanning tips\n  \
     /actions            quick-action menu\n  \
     /quick <id>         submit a quick action's message\n  \
     /scan <ref>         upload a plant image for analysis\n  \
     /history            full conversation log\n  \
     /help               this summary\n  \
     /quit               exit\n\
     Anything else is sent to the assistant.\n"
        .to_string()
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weather_report_mentions_location_and_days() {
        let report = weather_report();
        assert!(report.contains("Pune, Maharashtra"));
        assert!(report.contains("Today"));
        assert!(report.contains("Heavy Rainfall Expected"));
    }

    #[test]
    fn test_price_board_lists_all_by_default() {
        let board = price_board("");
        assert!(board.contains("8 items"));
        assert!(board.contains("Wheat"));
        assert!(board.contains("Market trends"));
    }

    #[test]
    fn test_price_board_search_narrows() {
        let board = price_board("tomato");
        assert!(board.contains("1 items"));
        assert!(board.contains("Tomato"));
        assert!(!board.contains("Wheat"));
    }

    #[test]
    fn test_price_board_no_match_message() {
        assert!(price_board("saffron").contains("No items found"));
    }

    #[test]
    fn test_advisory_report_lists_rabi_crops() {
        let report = advisory_report();
        assert!(report.contains("Rabi (Winter)"));
        assert!(report.contains("Wheat"));
        assert!(report.contains("Mustard"));
        assert!(report.contains("Gram (Chickpea)"));
        assert!(report.contains("Seasonal tasks"));
    }

    #[test]
    fn test_scheme_list_shows_stats_and_featured_marker() {
        let list = scheme_list("");
        assert!(list.contains("Active Schemes: 150+"));
        assert!(list.contains("* PM-KISAN Samman Nidhi"));
    }

    #[test]
    fn test_scheme_list_search() {
        let list = scheme_list("credit");
        assert!(list.contains("Kisan Credit Card"));
        assert!(!list.contains("PM-KISAN Samman Nidhi"));
    }

    #[test]
    fn test_disease_reference_contents() {
        let text = disease_reference();
        assert!(text.contains("Early Blight"));
        assert!(text.contains("Scanning tips"));
        assert!(text.contains("Good Lighting"));
    }

    #[test]
    fn test_quick_action_menu_lists_ids() {
        let menu = quick_action_menu();
        for id in ["disease-scan", "weather", "crop-advisory", "mandi-prices"] {
            assert!(menu.contains(id), "menu missing {}", id);
        }
    }

    #[test]
    fn test_format_plain_message() {
        let m = Message::user_text(1, "hello");
        let line = format_message(&m);
        assert!(line.contains("you: hello"));
    }

    #[test]
    fn test_format_disease_message() {
        let m = Message::assistant_disease(2, "verdict text", 87, "Early Blight");
        let line = format_message(&m);
        assert!(line.contains("krishi:"));
        assert!(line.contains("Early Blight"));
        assert!(line.contains("87% confidence"));
    }

    #[test]
    fn test_format_image_message() {
        use krishi_core::types::AttachmentRef;
        let m = Message::user_image(3, "", AttachmentRef::new("leaf.jpg"));
        let line = format_message(&m);
        assert!(line.contains("[image: leaf.jpg]"));
    }

    #[test]
    fn test_help_lists_every_command() {
        let help = help_text();
        for cmd in [
            "/weather", "/prices", "/advisory", "/schemes", "/diseases", "/actions", "/quick",
            "/scan", "/history", "/quit",
        ] {
            assert!(help.contains(cmd), "help missing {}", cmd);
        }
    }
}
