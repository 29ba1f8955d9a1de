mod app;

use anyhow::{Context, Result};

use stratus_core::Config;
use stratus_telegram::{SessionSettings, StatusClient};
use stratus_weather::WeatherProvider;

use crate::app::{CityWeather, TelegramStatus, UpdateLoop};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    stratus_core::init()?;

    // Missing or invalid configuration is fatal before the loop begins.
    let config = Config::load_validated().context("Invalid configuration")?;

    let client = match StatusClient::connect(SessionSettings {
        api_id: config.telegram_api_id,
        api_hash: config.telegram_api_hash.clone(),
        session_file: config.session_file.clone(),
    })
    .await
    {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("Unrecoverable Telegram session error: {e:#}");
            return Err(e);
        }
    };

    let (name, id) = client.identity().await?;
    tracing::info!("Logged in as {name} (id: {id})");

    let provider = WeatherProvider::new(config.weather_api_key.clone())?;
    let source = CityWeather::new(provider, config.city.clone(), config.country.clone());
    let sink = TelegramStatus::new(client);
    let update_loop = UpdateLoop::new(source, sink, config.update_interval, config.recovery_delay);

    tokio::select! {
        () = update_loop.run() => {}
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Interrupt received, shutting down");
        }
    }

    Ok(())
}
