//! Open-Meteo HTTP client
//!
//! Two endpoints are used, both without an API key: the geocoding search to
//! turn a place name into coordinates, and the forecast endpoint for
//! tomorrow's daily aggregates. Each call is a single GET bounded by the
//! configured timeout; there are no retries.

use chrono::NaiveDate;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument, warn};

use crate::config::WeatherConfig;
use crate::models::forecast::{DAILY_FIELDS, format_date};
use crate::models::{ForecastDay, LocationQuery, ResolvedPlace};
use crate::{RainCheckError, Result};

pub mod openmeteo;

const USER_AGENT: &str = concat!("RainCheck/", env!("CARGO_PKG_VERSION"));

/// Number of geocoding candidates requested; only the first is used
const GEOCODING_RESULT_COUNT: u8 = 5;

/// Client for the Open-Meteo geocoding and forecast APIs
#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    client: Client,
    geocoding_url: String,
    forecast_url: String,
}

impl OpenMeteoClient {
    /// Create a new client with the configured endpoints and timeout
    pub fn new(config: &WeatherConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| RainCheckError::config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            geocoding_url: config.geocoding_url.clone(),
            forecast_url: config.forecast_url.clone(),
        })
    }

    /// Geocode a place name and resolve its top-ranked candidate
    #[instrument(skip(self), fields(location = %query))]
    pub async fn geocode(&self, query: &LocationQuery) -> Result<ResolvedPlace> {
        info!("Geocoding location: '{}'", query);

        let count = GEOCODING_RESULT_COUNT.to_string();
        let response: openmeteo::GeocodingResponse = self
            .get_json(
                &self.geocoding_url,
                &[
                    ("name", query.as_str()),
                    ("count", count.as_str()),
                    ("language", "en"),
                    ("format", "json"),
                ],
            )
            .await?;

        let Some(candidate) = response.into_first() else {
            warn!("No results found for location '{}'", query);
            return Err(RainCheckError::not_found(query.as_str()));
        };

        let place = candidate.resolve()?;
        debug!(
            "Found location: {} ({})",
            place.display_name,
            place.format_coordinates()
        );
        Ok(place)
    }

    /// Fetch the daily aggregates for a single date at the given place
    #[instrument(skip(self, place), fields(lat = place.latitude, lon = place.longitude))]
    pub async fn daily_forecast(
        &self,
        place: &ResolvedPlace,
        date: NaiveDate,
    ) -> Result<ForecastDay> {
        info!(
            "Getting daily forecast for coordinates: {}",
            place.format_coordinates()
        );

        let latitude = place.latitude.to_string();
        let longitude = place.longitude.to_string();
        let daily = DAILY_FIELDS.join(",");
        let day = format_date(date);

        let response: openmeteo::ForecastResponse = self
            .get_json(
                &self.forecast_url,
                &[
                    ("latitude", latitude.as_str()),
                    ("longitude", longitude.as_str()),
                    ("timezone", "auto"),
                    ("daily", daily.as_str()),
                    ("start_date", day.as_str()),
                    ("end_date", day.as_str()),
                ],
            )
            .await?;

        response.into_day(date)
    }

    /// Single GET, failing on transport errors, non-success status or an
    /// undecodable body
    async fn get_json<T: DeserializeOwned>(&self, url: &str, query: &[(&str, &str)]) -> Result<T> {
        let start_time = Instant::now();

        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await?
            .error_for_status()?;
        let body = response.json::<T>().await?;

        let elapsed = start_time.elapsed();
        debug!("GET {} completed in {:.3}s", url, elapsed.as_secs_f64());
        if elapsed.as_secs() > 5 {
            warn!("Slow API response detected: {:.3}s", elapsed.as_secs_f64());
        }

        Ok(body)
    }
}
