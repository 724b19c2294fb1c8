//! Forecast model for tomorrow's daily aggregates

use chrono::NaiveDate;

use crate::verdict;
use crate::{RainCheckError, Result};

/// Daily fields requested from the forecast service, in request order
pub const DAILY_FIELDS: [&str; 6] = [
    "precipitation_probability_max",
    "rain_sum",
    "precipitation_hours",
    "weathercode",
    "temperature_2m_max",
    "temperature_2m_min",
];

/// One day of daily aggregates. Every reading is optional: upstream gaps
/// become `None` instead of failing the request.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastDay {
    pub date: NaiveDate,
    /// Maximum precipitation probability in percent (0-100)
    pub precipitation_probability_max: Option<f64>,
    /// Rain sum in mm
    pub rain_sum: Option<f64>,
    /// Hours with precipitation
    pub precipitation_hours: Option<f64>,
    /// WMO weather interpretation code
    pub weather_code: Option<u8>,
    /// Maximum temperature at 2 m in Celsius
    pub temperature_max: Option<f64>,
    /// Minimum temperature at 2 m in Celsius
    pub temperature_min: Option<f64>,
}

impl ForecastDay {
    /// Apply the rain decision rule to this day's precipitation readings
    #[must_use]
    pub fn will_rain(&self) -> bool {
        verdict::will_rain(
            self.precipitation_probability_max,
            self.rain_sum,
            self.precipitation_hours,
        )
    }

    /// Human-readable condition for the weather code, if one was reported
    #[must_use]
    pub fn conditions(&self) -> Option<&'static str> {
        self.weather_code.map(weather_code_to_description)
    }
}

/// The calendar day after `today`
pub fn tomorrow(today: NaiveDate) -> Result<NaiveDate> {
    today
        .succ_opt()
        .ok_or_else(|| RainCheckError::service(format!("no calendar day after {today}")))
}

/// `YYYY-MM-DD`, as the forecast API expects for `start_date`/`end_date`
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Convert a WMO weather code to a human-readable description
#[must_use]
pub fn weather_code_to_description(code: u8) -> &'static str {
    match code {
        0 => "Clear sky",
        1 => "Mainly clear",
        2 => "Partly cloudy",
        3 => "Overcast",
        45 => "Fog",
        48 => "Depositing rime fog",
        51 => "Light drizzle",
        53 => "Moderate drizzle",
        55 => "Dense drizzle",
        56 => "Light freezing drizzle",
        57 => "Dense freezing drizzle",
        61 => "Slight rain",
        63 => "Moderate rain",
        65 => "Heavy rain",
        66 => "Light freezing rain",
        67 => "Heavy freezing rain",
        71 => "Slight snow fall",
        73 => "Moderate snow fall",
        75 => "Heavy snow fall",
        77 => "Snow grains",
        80 => "Slight rain showers",
        81 => "Moderate rain showers",
        82 => "Violent rain showers",
        85 => "Slight snow showers",
        86 => "Heavy snow showers",
        95 => "Thunderstorm",
        96 => "Thunderstorm with slight hail",
        99 => "Thunderstorm with heavy hail",
        _ => "Unknown",
    }
}
