//! Recommendation service wire models

use serde::{de, Deserialize, Deserializer, Serialize};

/// A single crop scored by the recommendation service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropPrediction {
    pub crop: String,
    /// Suitability in [0, 1]
    pub confidence: f64,
}

impl CropPrediction {
    pub fn new(crop: impl Into<String>, confidence: f64) -> Self {
        Self {
            crop: crop.into(),
            confidence,
        }
    }
}

/// The three best crops, highest ranked first
pub type TopCrops = [CropPrediction; 3];

/// Three-month weather averages returned with a recommendation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSummary {
    /// Degrees Celsius
    pub temperature: f64,
    /// Percent
    pub humidity: f64,
    /// Millimetres
    pub rainfall: f64,
}

/// Successful response body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResult {
    #[serde(deserialize_with = "deserialize_top_crops")]
    pub top_3_crops: TopCrops,
    pub weather: WeatherSummary,
}

/// Body returned by the recommendation endpoint
///
/// The service reports failures as `{ "error": ... }`. Only a truthy `error`
/// marks a failure; `null`, `false`, `0` and `""` fall through to the result
/// payload, which must then be complete.
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceResponse {
    Failure { error: serde_json::Value },
    Success(RecommendationResult),
}

impl<'de> Deserialize<'de> for ServiceResponse {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let body = serde_json::Value::deserialize(deserializer)?;

        match body.get("error") {
            Some(error) if is_truthy(error) => Ok(ServiceResponse::Failure {
                error: error.clone(),
            }),
            _ => RecommendationResult::deserialize(body)
                .map(ServiceResponse::Success)
                .map_err(de::Error::custom),
        }
    }
}

/// JavaScript truthiness of a JSON value
fn is_truthy(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null => false,
        serde_json::Value::Bool(flag) => *flag,
        serde_json::Value::Number(number) => number.as_f64().map_or(true, |n| n != 0.0),
        serde_json::Value::String(text) => !text.is_empty(),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => true,
    }
}

impl ServiceResponse {
    /// Parse a raw response body
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }
}

/// Text of a service `error` value; non-string values keep their JSON form
pub fn service_error_message(error: &serde_json::Value) -> String {
    match error {
        serde_json::Value::String(message) => message.clone(),
        other => other.to_string(),
    }
}

/// Accepts a list of at least three predictions and keeps the first three
pub(crate) fn deserialize_top_crops<'de, D>(deserializer: D) -> Result<TopCrops, D::Error>
where
    D: Deserializer<'de>,
{
    let crops = Vec::<CropPrediction>::deserialize(deserializer)?;
    let len = crops.len();
    let mut iter = crops.into_iter();

    match (iter.next(), iter.next(), iter.next()) {
        (Some(first), Some(second), Some(third)) => Ok([first, second, third]),
        _ => Err(de::Error::invalid_length(len, &"at least 3 crop predictions")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SUCCESS: &str = r#"{
        "top_3_crops": [
            {"crop": "rice", "confidence": 0.9123},
            {"crop": "maize", "confidence": 0.5001},
            {"crop": "jute", "confidence": 0.12}
        ],
        "weather": {"temperature": 27.456, "humidity": 81.2, "rainfall": 212.0}
    }"#;

    #[test]
    fn test_parse_success_body() {
        let response = ServiceResponse::from_json(SUCCESS).unwrap();
        let ServiceResponse::Success(result) = response else {
            panic!("expected success");
        };
        assert_eq!(result.top_3_crops[0].crop, "rice");
        assert_eq!(result.top_3_crops[2].confidence, 0.12);
        assert_eq!(result.weather.humidity, 81.2);
    }

    #[test]
    fn test_parse_error_body() {
        let response = ServiceResponse::from_json(r#"{"error": "City not found"}"#).unwrap();
        match response {
            ServiceResponse::Failure { error } => {
                assert_eq!(service_error_message(&error), "City not found");
            }
            other => panic!("expected failure, got {:?}", other),
        }
    }

    #[test]
    fn test_error_field_wins_over_results() {
        let body = r#"{
            "error": "partial",
            "top_3_crops": [],
            "weather": {"temperature": 1, "humidity": 2, "rainfall": 3}
        }"#;
        assert!(matches!(
            ServiceResponse::from_json(body).unwrap(),
            ServiceResponse::Failure { .. }
        ));
    }

    #[test]
    fn test_falsy_error_falls_through_to_results() {
        for error in ["null", "false", "0", "\"\""] {
            let body = SUCCESS.replacen('{', &format!("{{\"error\": {},", error), 1);
            let response = ServiceResponse::from_json(&body).unwrap();
            assert!(
                matches!(response, ServiceResponse::Success(_)),
                "error {} should not fail the response",
                error
            );
        }
    }

    #[test]
    fn test_falsy_error_without_results_is_malformed() {
        assert!(ServiceResponse::from_json(r#"{"error": ""}"#).is_err());
        assert!(ServiceResponse::from_json(r#"{"error": null}"#).is_err());
    }

    #[test]
    fn test_non_string_error_keeps_json_text() {
        let response = ServiceResponse::from_json(r#"{"error": {"code": 5}}"#).unwrap();
        let ServiceResponse::Failure { error } = response else {
            panic!("expected failure");
        };
        assert_eq!(service_error_message(&error), r#"{"code":5}"#);
    }

    #[test]
    fn test_extra_predictions_are_dropped() {
        let body = r#"{
            "top_3_crops": [
                {"crop": "a", "confidence": 0.4},
                {"crop": "b", "confidence": 0.3},
                {"crop": "c", "confidence": 0.2},
                {"crop": "d", "confidence": 0.1}
            ],
            "weather": {"temperature": 1, "humidity": 2, "rainfall": 3}
        }"#;
        let ServiceResponse::Success(result) = ServiceResponse::from_json(body).unwrap() else {
            panic!("expected success");
        };
        assert_eq!(result.top_3_crops[2].crop, "c");
    }

    #[test]
    fn test_too_few_predictions_is_malformed() {
        let body = r#"{
            "top_3_crops": [{"crop": "a", "confidence": 0.4}],
            "weather": {"temperature": 1, "humidity": 2, "rainfall": 3}
        }"#;
        assert!(ServiceResponse::from_json(body).is_err());
    }

    #[test]
    fn test_non_json_body_is_malformed() {
        assert!(ServiceResponse::from_json("<html>502 Bad Gateway</html>").is_err());
    }
}
