//! The update loop: fetch, map, push, wait.

use std::time::Duration;

use anyhow::Result;
use chrono::Utc;

use stratus_emoji::{select_status, EmojiStatus};
use stratus_telegram::StatusClient;
use stratus_weather::{CurrentWeather, WeatherError, WeatherProvider};

/// Source of weather observations for the configured location.
pub(crate) trait WeatherSource {
    async fn fetch_current(&self) -> Result<CurrentWeather, WeatherError>;
}

/// Destination for emoji status updates.
pub(crate) trait StatusSink {
    async fn push_status(&self, status: &EmojiStatus) -> Result<()>;
}

/// OpenWeatherMap-backed source pinned to one city.
pub(crate) struct CityWeather {
    provider: WeatherProvider,
    city: String,
    country: String,
}

impl CityWeather {
    pub(crate) fn new(
        provider: WeatherProvider,
        city: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            provider,
            city: city.into(),
            country: country.into(),
        }
    }
}

impl WeatherSource for CityWeather {
    async fn fetch_current(&self) -> Result<CurrentWeather, WeatherError> {
        self.provider.fetch_current(&self.city, &self.country).await
    }
}

/// Telegram-backed sink.
pub(crate) struct TelegramStatus {
    client: StatusClient,
}

impl TelegramStatus {
    pub(crate) fn new(client: StatusClient) -> Self {
        Self { client }
    }
}

impl StatusSink for TelegramStatus {
    async fn push_status(&self, status: &EmojiStatus) -> Result<()> {
        self.client.update_status(status).await
    }
}

/// Which delay the next wait uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// The cycle reached the push stage; wait the full update interval.
    Normal,
    /// The fetch failed; wait the short recovery delay, then try again.
    Recovering,
}

/// Periodic fetch-map-push driver.
pub(crate) struct UpdateLoop<S, K> {
    source: S,
    sink: K,
    update_interval: Duration,
    recovery_delay: Duration,
}

impl<S: WeatherSource, K: StatusSink> UpdateLoop<S, K> {
    pub(crate) fn new(
        source: S,
        sink: K,
        update_interval: Duration,
        recovery_delay: Duration,
    ) -> Self {
        Self {
            source,
            sink,
            update_interval,
            recovery_delay,
        }
    }

    /// Run until cancelled from outside.
    ///
    /// Recoverable failures are logged and absorbed here; nothing
    /// propagates out of the loop.
    pub(crate) async fn run(self) {
        loop {
            let delay = match self.cycle().await {
                Phase::Normal => self.update_interval,
                Phase::Recovering => self.recovery_delay,
            };
            tokio::time::sleep(delay).await;
        }
    }

    async fn cycle(&self) -> Phase {
        let observation = match self.source.fetch_current().await {
            Ok(observation) => observation,
            Err(e) => {
                tracing::error!("Weather fetch failed: {e}");
                return Phase::Recovering;
            }
        };

        let status = select_status(Some(&observation), Utc::now());

        match self.sink.push_status(&status).await {
            Ok(()) => tracing::info!(?status, "Emoji status updated"),
            // The fetch succeeded; a failed push keeps the normal cadence.
            Err(e) => tracing::error!("Failed to update emoji status: {e}"),
        }

        Phase::Normal
    }
}
