use anyhow::Result;
use raincheck::{RainCheckConfig, telemetry, web};

#[tokio::main]
async fn main() -> Result<()> {
    let config = RainCheckConfig::load()?;
    telemetry::init(&config.logging)?;

    tracing::info!(
        "RainCheck {} using geocoder {} and forecast {}",
        raincheck::VERSION,
        config.weather.geocoding_url,
        config.weather.forecast_url
    );

    web::run(config).await
}
