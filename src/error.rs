//! Error types and handling for `RainCheck`
//!
//! Every failure a request can run into is one variant of [`RainCheckError`].
//! Each variant knows its HTTP status, the page title and the fixed
//! user-facing message; the technical detail stays in the variant and only
//! ever goes to the log.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;

use crate::web::views;

/// Main error type for the `RainCheck` application
#[derive(Error, Debug)]
pub enum RainCheckError {
    /// The submitted location was empty after trimming
    #[error("Invalid input: location is empty")]
    BadInput,

    /// The geocoder returned no candidates
    #[error("Location not found: {query}")]
    LocationNotFound { query: String },

    /// The top candidate had unreadable coordinates
    #[error("Geocoding error: {message}")]
    GeocodingData { message: String },

    /// The forecast response carried no daily data
    #[error("Forecast unavailable: {message}")]
    ForecastUnavailable { message: String },

    /// Transport, status or payload failures of the outbound calls
    #[error("Service failure: {message}")]
    ServiceFailure { message: String },

    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl RainCheckError {
    /// Create a new location-not-found error
    pub fn not_found<S: Into<String>>(query: S) -> Self {
        Self::LocationNotFound {
            query: query.into(),
        }
    }

    /// Create a new geocoding data error
    pub fn geocoding<S: Into<String>>(message: S) -> Self {
        Self::GeocodingData {
            message: message.into(),
        }
    }

    /// Create a new forecast-unavailable error
    pub fn forecast_unavailable<S: Into<String>>(message: S) -> Self {
        Self::ForecastUnavailable {
            message: message.into(),
        }
    }

    /// Create a new service failure
    pub fn service<S: Into<String>>(message: S) -> Self {
        Self::ServiceFailure {
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// HTTP status the error page is served with
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            RainCheckError::BadInput => StatusCode::BAD_REQUEST,
            RainCheckError::LocationNotFound { .. } => StatusCode::NOT_FOUND,
            RainCheckError::ForecastUnavailable { .. } => StatusCode::BAD_GATEWAY,
            RainCheckError::GeocodingData { .. }
            | RainCheckError::ServiceFailure { .. }
            | RainCheckError::Config { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Title of the error page
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            RainCheckError::BadInput => "Missing location",
            RainCheckError::LocationNotFound { .. } => "Location not found",
            RainCheckError::GeocodingData { .. } => "Geocoding error",
            RainCheckError::ForecastUnavailable { .. } => "Forecast unavailable",
            RainCheckError::ServiceFailure { .. } | RainCheckError::Config { .. } => {
                "Something went wrong"
            }
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            RainCheckError::BadInput => {
                "Please enter a city or town (e.g., Adelaide, London, New York).".to_string()
            }
            RainCheckError::LocationNotFound { query } => format!(
                "I couldn't find \u{201c}{query}\u{201d}. Try adding a country or state (e.g., \u{201c}Springfield Illinois\u{201d})."
            ),
            RainCheckError::GeocodingData { .. } => {
                "Found the location, but couldn\u{2019}t read its coordinates. Try another search."
                    .to_string()
            }
            RainCheckError::ForecastUnavailable { .. } => {
                "The weather service didn\u{2019}t return daily data for that location.".to_string()
            }
            RainCheckError::ServiceFailure { .. } | RainCheckError::Config { .. } => {
                "There was a problem contacting the weather service. Please try again in a moment."
                    .to_string()
            }
        }
    }
}

impl From<reqwest::Error> for RainCheckError {
    fn from(err: reqwest::Error) -> Self {
        RainCheckError::service(error_chain(&err))
    }
}

/// Joins an error with all of its sources, outermost first
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

impl IntoResponse for RainCheckError {
    fn into_response(self) -> Response {
        let page = views::error_page(self.title(), &self.user_message());
        (self.status_code(), Html(page)).into_response()
    }
}
