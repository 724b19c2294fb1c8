//! Data models for `RainCheck`
//!
//! This module contains the per-request domain models:
//! - Location: the user's query and the geocoded place
//! - Forecast: tomorrow's daily aggregates
//! - Number: lenient coercion of JSON values to finite numbers

pub mod forecast;
pub mod location;
pub mod number;

// Re-export all public types for convenient access
pub use forecast::ForecastDay;
pub use location::{GeocodeCandidate, LocationQuery, ResolvedPlace};
pub use number::finite;
