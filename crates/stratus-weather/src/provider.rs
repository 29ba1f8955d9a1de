use crate::types::{CurrentWeather, WeatherError};
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

const OPENWEATHERMAP_BASE_URL: &str = "https://api.openweathermap.org";
const CURRENT_WEATHER_PATH: &str = "/data/2.5/weather";
const REQUEST_TIMEOUT_SECS: u64 = 10;
const UNITS: &str = "metric";
const LANG: &str = "ru";

/// Client for the OpenWeatherMap current-weather endpoint.
#[derive(Debug, Clone)]
pub struct WeatherProvider {
    client: Arc<Client>,
    base_url: Url,
    api_key: String,
}

impl WeatherProvider {
    /// Create a provider against the production OpenWeatherMap endpoint.
    pub fn new(api_key: impl Into<String>) -> Result<Self, WeatherError> {
        let base_url = Url::parse(OPENWEATHERMAP_BASE_URL)
            .map_err(|e| WeatherError::Parse(format!("invalid base url: {e}")))?;
        Self::with_base_url(api_key, base_url)
    }

    /// Create a provider against an arbitrary base URL. Used by tests to
    /// point at a local mock server.
    pub fn with_base_url(api_key: impl Into<String>, base_url: Url) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client: Arc::new(client),
            base_url,
            api_key: api_key.into(),
        })
    }

    /// Fetch the current weather for a city.
    ///
    /// Non-2xx responses and network failures surface as errors; the caller
    /// decides whether the cycle degrades or retries.
    pub async fn fetch_current(
        &self,
        city: &str,
        country: &str,
    ) -> Result<CurrentWeather, WeatherError> {
        let url = self
            .base_url
            .join(CURRENT_WEATHER_PATH)
            .map_err(|e| WeatherError::Parse(format!("invalid request url: {e}")))?;
        let place = format!("{city},{country}");

        let response = self
            .client
            .get(url)
            .query(&[
                ("q", place.as_str()),
                ("appid", self.api_key.as_str()),
                ("units", UNITS),
                ("lang", LANG),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(WeatherError::Api {
                status: status.as_u16(),
            });
        }

        let observation: CurrentWeather = response
            .json()
            .await
            .map_err(|e| WeatherError::Parse(e.to_string()))?;

        match &observation.coord {
            Some(coord) => tracing::info!(
                "Weather data received for {} (lat: {}, lon: {})",
                observation.name,
                coord.lat,
                coord.lon
            ),
            None => tracing::info!("Weather data received for {}", observation.name),
        }

        Ok(observation)
    }
}
