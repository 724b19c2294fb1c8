//! `OpenMeteo` API response structures and conversion utilities
//!
//! Fields that feed numbers are kept as raw JSON values so that strings,
//! nulls and other odd shapes can be coerced leniently instead of failing
//! the whole decode.

use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;

use crate::models::number::{finite, first_finite};
use crate::models::{ForecastDay, GeocodeCandidate};
use crate::{RainCheckError, Result};

/// Geocoding response from `OpenMeteo`
#[derive(Debug, Deserialize)]
pub struct GeocodingResponse {
    /// Ranked candidates; the field is omitted entirely when nothing matched
    #[serde(default)]
    pub results: Option<Vec<GeocodingResult>>,
}

#[derive(Debug, Deserialize)]
pub struct GeocodingResult {
    #[serde(default)]
    pub name: Value,
    #[serde(default)]
    pub admin1: Value,
    #[serde(default)]
    pub country: Value,
    #[serde(default)]
    pub latitude: Value,
    #[serde(default)]
    pub longitude: Value,
}

impl GeocodingResponse {
    /// The top-ranked candidate, or `None` when the list is missing or empty
    #[must_use]
    pub fn into_first(self) -> Option<GeocodeCandidate> {
        self.results
            .and_then(|results| results.into_iter().next())
            .map(GeocodeCandidate::from)
    }
}

impl From<GeocodingResult> for GeocodeCandidate {
    fn from(result: GeocodingResult) -> Self {
        Self {
            name: text(result.name),
            admin1: text(result.admin1),
            country: text(result.country),
            latitude: finite(&result.latitude),
            longitude: finite(&result.longitude),
        }
    }
}

fn text(value: Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s),
        _ => None,
    }
}

/// Forecast response from `OpenMeteo`
#[derive(Debug, Deserialize)]
pub struct ForecastResponse {
    /// Kept raw: a `daily` that is missing, null or not an object all mean
    /// there is no daily data
    #[serde(default)]
    pub daily: Value,
}

/// Daily weather data from `OpenMeteo`: parallel arrays indexed by day
#[derive(Debug, Deserialize)]
pub struct DailyData {
    #[serde(default)]
    pub time: Value,
    #[serde(default)]
    pub precipitation_probability_max: Value,
    #[serde(default)]
    pub rain_sum: Value,
    #[serde(default)]
    pub precipitation_hours: Value,
    #[serde(default, rename = "weathercode")]
    pub weather_code: Value,
    #[serde(default, rename = "temperature_2m_max")]
    pub temperature_max: Value,
    #[serde(default, rename = "temperature_2m_min")]
    pub temperature_min: Value,
}

impl ForecastResponse {
    /// Extract the first requested day.
    ///
    /// A missing or non-object `daily` block, or an empty/missing
    /// `daily.time` series, means the service had nothing for this place.
    /// Individual readings that are missing or non-numeric become `None`.
    pub fn into_day(self, date: NaiveDate) -> Result<ForecastDay> {
        if !self.daily.is_object() {
            return Err(RainCheckError::forecast_unavailable("response had no daily object"));
        }
        let daily: DailyData = serde_json::from_value(self.daily).map_err(|e| {
            RainCheckError::forecast_unavailable(format!("unreadable daily object: {e}"))
        })?;

        let has_days = daily.time.as_array().is_some_and(|days| !days.is_empty());
        if !has_days {
            return Err(RainCheckError::forecast_unavailable(
                "response had no daily.time entries",
            ));
        }

        Ok(ForecastDay {
            date,
            precipitation_probability_max: first_finite(&daily.precipitation_probability_max),
            rain_sum: first_finite(&daily.rain_sum),
            precipitation_hours: first_finite(&daily.precipitation_hours),
            weather_code: first_finite(&daily.weather_code)
                .filter(|code| code.fract() == 0.0 && (0.0..=255.0).contains(code))
                .map(|code| code as u8),
            temperature_max: first_finite(&daily.temperature_max),
            temperature_min: first_finite(&daily.temperature_min),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 2).unwrap()
    }

    fn forecast(body: Value) -> Result<ForecastDay> {
        serde_json::from_value::<ForecastResponse>(body)
            .unwrap()
            .into_day(date())
    }

    #[test]
    fn test_missing_results_is_empty() {
        let response: GeocodingResponse =
            serde_json::from_value(json!({"generationtime_ms": 0.5})).unwrap();
        assert!(response.into_first().is_none());

        let response: GeocodingResponse = serde_json::from_value(json!({"results": []})).unwrap();
        assert!(response.into_first().is_none());
    }

    #[test]
    fn test_first_candidate_is_chosen() {
        let response: GeocodingResponse = serde_json::from_value(json!({
            "results": [
                {"name": "Springfield", "admin1": "Illinois", "country": "United States", "latitude": 39.80, "longitude": -89.64},
                {"name": "Springfield", "admin1": "Missouri", "country": "United States", "latitude": 37.21, "longitude": -93.29},
                {"name": "Springfield", "admin1": "Massachusetts", "country": "United States", "latitude": 42.10, "longitude": -72.59}
            ]
        }))
        .unwrap();

        let candidate = response.into_first().unwrap();
        assert_eq!(candidate.admin1.as_deref(), Some("Illinois"));
        assert_eq!(candidate.latitude, Some(39.80));
    }

    #[test]
    fn test_candidate_fields_are_coerced() {
        let response: GeocodingResponse = serde_json::from_value(json!({
            "results": [{"name": "Adelaide", "admin1": null, "country": 7, "latitude": "-34.93", "longitude": "east"}]
        }))
        .unwrap();

        let candidate = response.into_first().unwrap();
        assert_eq!(candidate.name.as_deref(), Some("Adelaide"));
        assert_eq!(candidate.admin1, None);
        assert_eq!(candidate.country, None);
        assert_eq!(candidate.latitude, Some(-34.93));
        assert_eq!(candidate.longitude, None);
    }

    #[test]
    fn test_day_extraction() {
        let day = forecast(json!({
            "daily": {
                "time": ["2024-06-02"],
                "precipitation_probability_max": [70],
                "rain_sum": [0.0],
                "precipitation_hours": [0.0],
                "weathercode": [61],
                "temperature_2m_max": [16.2],
                "temperature_2m_min": [8.9]
            }
        }))
        .unwrap();

        assert_eq!(day.date, date());
        assert_eq!(day.precipitation_probability_max, Some(70.0));
        assert_eq!(day.rain_sum, Some(0.0));
        assert_eq!(day.precipitation_hours, Some(0.0));
        assert_eq!(day.weather_code, Some(61));
        assert_eq!(day.temperature_max, Some(16.2));
        assert_eq!(day.temperature_min, Some(8.9));
        assert!(day.will_rain());
    }

    #[test]
    fn test_missing_readings_become_none() {
        let day = forecast(json!({
            "daily": {
                "time": ["2024-06-02"],
                "precipitation_probability_max": [null],
                "rain_sum": "n/a",
                "weathercode": [1000]
            }
        }))
        .unwrap();

        assert_eq!(day.precipitation_probability_max, None);
        assert_eq!(day.rain_sum, None);
        assert_eq!(day.precipitation_hours, None);
        assert_eq!(day.weather_code, None);
        assert_eq!(day.temperature_max, None);
        assert!(!day.will_rain());
    }

    #[test]
    fn test_missing_daily_is_unavailable() {
        let result = forecast(json!({"latitude": -34.93}));
        assert!(matches!(result, Err(RainCheckError::ForecastUnavailable { .. })));
    }

    #[test]
    fn test_missing_or_empty_time_is_unavailable() {
        let result = forecast(json!({"daily": {"rain_sum": [1.0]}}));
        assert!(matches!(result, Err(RainCheckError::ForecastUnavailable { .. })));

        let result = forecast(json!({"daily": {"time": [], "rain_sum": [1.0]}}));
        assert!(matches!(result, Err(RainCheckError::ForecastUnavailable { .. })));
    }

    #[test]
    fn test_non_object_daily_is_unavailable() {
        for daily in [json!("x"), json!(5), json!(null), json!([["2024-06-02"]])] {
            let result = forecast(json!({ "daily": daily }));
            assert!(
                matches!(result, Err(RainCheckError::ForecastUnavailable { .. })),
                "daily = {daily}"
            );
        }
    }
}
