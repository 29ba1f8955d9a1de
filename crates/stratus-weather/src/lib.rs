//! OpenWeatherMap client for Stratus
//!
//! Provides current-weather observations for a fixed city via the
//! OpenWeatherMap current-weather API.

pub mod provider;
pub mod types;

pub use provider::WeatherProvider;
pub use types::{CurrentWeather, WeatherError};
