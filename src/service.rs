//! Rain check pipeline
//!
//! Validate, geocode, forecast, decide. Each step returns a `Result` and the
//! first failure ends the request; nothing is retried.

use chrono::NaiveDate;
use tracing::info;

use crate::models::forecast::tomorrow;
use crate::models::{ForecastDay, LocationQuery, ResolvedPlace};
use crate::weather::OpenMeteoClient;
use crate::Result;

/// Everything the result page shows
#[derive(Debug, Clone, PartialEq)]
pub struct RainReport {
    /// The trimmed query as typed by the user
    pub query: String,
    pub place: ResolvedPlace,
    pub forecast: ForecastDay,
    pub will_rain: bool,
}

/// Answers "will it rain tomorrow?" for a place name
#[derive(Debug, Clone)]
pub struct RainCheckService {
    client: OpenMeteoClient,
}

impl RainCheckService {
    #[must_use]
    pub fn new(client: OpenMeteoClient) -> Self {
        Self { client }
    }

    /// Run the full check for `raw_location`, forecasting the day after `today`
    pub async fn check(&self, raw_location: &str, today: NaiveDate) -> Result<RainReport> {
        let query = LocationQuery::parse(raw_location)?;
        let place = self.client.geocode(&query).await?;

        let date = tomorrow(today)?;
        let forecast = self.client.daily_forecast(&place, date).await?;
        let will_rain = forecast.will_rain();

        info!(
            "Rain check for '{}' ({}) on {}: {}",
            query,
            place.display_name,
            date,
            if will_rain { "rain" } else { "dry" }
        );

        Ok(RainReport {
            query: query.as_str().to_string(),
            place,
            forecast,
            will_rain,
        })
    }
}
