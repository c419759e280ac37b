//! Display models for recommendations and history
//!
//! Everything a front-end shows is computed here as plain strings so it can
//! be tested without a UI. `to_html` renders the markup used by the browser.

use rust_decimal::prelude::*;

use crate::constants::LEAF_PREFIX;
use crate::models::{HistoryEntry, HistoryLog, RecommendationResult};

/// One ranked crop with its confidence as a percentage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictionLine {
    pub crop: String,
    /// Two decimals, no percent sign
    pub percent: String,
}

/// Weather averages formatted to two decimals
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherLines {
    pub temperature: String,
    pub humidity: String,
    pub rainfall: String,
}

/// Everything shown after a successful recommendation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationView {
    /// Top crop with the leaf prefix
    pub headline: String,
    pub predictions: Vec<PredictionLine>,
    pub weather: WeatherLines,
}

/// One rendered history item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryItemView {
    pub date: String,
    pub crops: [String; 3],
}

/// Build the display model for a successful response
pub fn compute_display_model(result: &RecommendationResult) -> RecommendationView {
    let predictions = result
        .top_3_crops
        .iter()
        .map(|p| PredictionLine {
            crop: p.crop.clone(),
            percent: format_percent(p.confidence),
        })
        .collect();

    RecommendationView {
        headline: format!("{}{}", LEAF_PREFIX, result.top_3_crops[0].crop),
        predictions,
        weather: WeatherLines {
            temperature: format_two_decimals(result.weather.temperature),
            humidity: format_two_decimals(result.weather.humidity),
            rainfall: format_two_decimals(result.weather.rainfall),
        },
    }
}

/// Confidence fraction as a percentage with two decimals (0.9123 -> "91.23")
pub fn format_percent(confidence: f64) -> String {
    format_decimal(to_decimal(confidence) * Decimal::ONE_HUNDRED)
}

/// Round half away from zero to two decimals, always printing both digits
pub fn format_two_decimals(value: f64) -> String {
    format_decimal(to_decimal(value))
}

fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64_retain(value).unwrap_or_default()
}

fn format_decimal(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}", rounded)
}

/// Build the display model for the stored history, oldest first
pub fn history_view(log: &HistoryLog) -> Vec<HistoryItemView> {
    log.iter().map(history_item_view).collect()
}

pub fn history_item_view(entry: &HistoryEntry) -> HistoryItemView {
    let [first, second, third] = entry.crop_names();
    HistoryItemView {
        date: entry.date.clone(),
        crops: [first.to_string(), second.to_string(), third.to_string()],
    }
}

impl RecommendationView {
    /// Markup for the reasoning block
    pub fn to_html(&self) -> String {
        let mut html = String::from(
            "<p><b>Top 3 recommendations:</b></p>\n<ul class=\"list-disc ml-6\">\n",
        );
        for line in &self.predictions {
            html.push_str(&format!(
                "    <li>{} (confidence: {}%)</li>\n",
                escape_html(&line.crop),
                line.percent
            ));
        }
        html.push_str("</ul>\n\n<p class=\"mt-3\"><b>Weather (3-month avg):</b></p>\n<ul class=\"ml-6\">\n");
        html.push_str(&format!("    <li>🌡 Temperature: {} °C</li>\n", self.weather.temperature));
        html.push_str(&format!("    <li>💧 Humidity: {} %</li>\n", self.weather.humidity));
        html.push_str(&format!("    <li>🌧 Rainfall: {} mm</li>\n", self.weather.rainfall));
        html.push_str("</ul>\n");
        html
    }

    /// Plain-text rendering for terminals
    pub fn to_text(&self) -> String {
        let mut text = format!("{}\n\nTop 3 recommendations:\n", self.headline);
        for (rank, line) in self.predictions.iter().enumerate() {
            text.push_str(&format!(
                "  {}. {} (confidence: {}%)\n",
                rank + 1,
                line.crop,
                line.percent
            ));
        }
        text.push_str("\nWeather (3-month avg):\n");
        text.push_str(&format!("  Temperature: {} °C\n", self.weather.temperature));
        text.push_str(&format!("  Humidity: {} %\n", self.weather.humidity));
        text.push_str(&format!("  Rainfall: {} mm\n", self.weather.rainfall));
        text
    }
}

impl HistoryItemView {
    /// Inner markup of one history list item
    pub fn to_html(&self) -> String {
        format!(
            "<p><b>{}</b></p>\n<ul class=\"ml-5 list-disc\">\n    <li>{}</li>\n    <li>{}</li>\n    <li>{}</li>\n</ul>\n",
            escape_html(&self.date),
            escape_html(&self.crops[0]),
            escape_html(&self.crops[1]),
            escape_html(&self.crops[2]),
        )
    }

    pub fn to_text(&self) -> String {
        format!("{}: {}, {}, {}", self.date, self.crops[0], self.crops[1], self.crops[2])
    }
}

/// Escape text for insertion into markup
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CropPrediction, WeatherSummary};

    fn result(confidences: [f64; 3]) -> RecommendationResult {
        RecommendationResult {
            top_3_crops: [
                CropPrediction::new("rice", confidences[0]),
                CropPrediction::new("maize", confidences[1]),
                CropPrediction::new("jute", confidences[2]),
            ],
            weather: WeatherSummary {
                temperature: 27.456,
                humidity: 81.2,
                rainfall: 212.0,
            },
        }
    }

    #[test]
    fn test_percentages_use_one_rule_for_every_entry() {
        let view = compute_display_model(&result([0.9123, 0.5001, 0.12]));
        let percents: Vec<&str> = view.predictions.iter().map(|p| p.percent.as_str()).collect();
        assert_eq!(percents, ["91.23", "50.01", "12.00"]);
    }

    #[test]
    fn test_percent_edges() {
        assert_eq!(format_percent(0.0), "0.00");
        assert_eq!(format_percent(1.0), "100.00");
        assert_eq!(format_percent(0.07), "7.00");
        assert_eq!(format_percent(0.123456), "12.35");
    }

    #[test]
    fn test_headline_and_weather() {
        let view = compute_display_model(&result([0.8, 0.1, 0.1]));
        assert_eq!(view.headline, "🌱 rice");
        assert_eq!(
            view.weather,
            WeatherLines {
                temperature: "27.46".to_string(),
                humidity: "81.20".to_string(),
                rainfall: "212.00".to_string(),
            }
        );
    }

    #[test]
    fn test_negative_temperature_rounding() {
        assert_eq!(format_two_decimals(-3.456), "-3.46");
        assert_eq!(format_two_decimals(-12.5), "-12.50");
    }

    #[test]
    fn test_reasoning_html_lists_all_three() {
        let html = compute_display_model(&result([0.9123, 0.5001, 0.12])).to_html();
        assert!(html.contains("<li>rice (confidence: 91.23%)</li>"));
        assert!(html.contains("<li>maize (confidence: 50.01%)</li>"));
        assert!(html.contains("<li>jute (confidence: 12.00%)</li>"));
        assert!(html.contains("🌡 Temperature: 27.46 °C"));
        assert!(html.contains("💧 Humidity: 81.20 %"));
        assert!(html.contains("🌧 Rainfall: 212.00 mm"));
    }

    #[test]
    fn test_history_item_escapes_markup() {
        let item = HistoryItemView {
            date: "1/1/2025".to_string(),
            crops: ["<b>rice</b>".to_string(), "maize".to_string(), "a&b".to_string()],
        };
        let html = item.to_html();
        assert!(html.contains("<li>&lt;b&gt;rice&lt;/b&gt;</li>"));
        assert!(html.contains("<li>a&amp;b</li>"));
    }
}
