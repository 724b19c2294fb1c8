//! `RainCheck` - will it rain tomorrow?
//!
//! This library resolves a free-text place name through the Open-Meteo
//! geocoding API, fetches tomorrow's daily aggregates from the Open-Meteo
//! forecast API and turns them into a yes/no rain verdict rendered as HTML.

pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod telemetry;
pub mod verdict;
pub mod weather;
pub mod web;

// Re-export core types for public API
pub use config::RainCheckConfig;
pub use error::RainCheckError;
pub use models::{ForecastDay, GeocodeCandidate, LocationQuery, ResolvedPlace};
pub use service::{RainCheckService, RainReport};
pub use weather::OpenMeteoClient;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, RainCheckError>;
