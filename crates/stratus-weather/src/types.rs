use serde::Deserialize;

/// One entry of the `weather` array in a current-weather response.
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherCondition {
    /// Condition code identifying the phenomenon and its severity
    /// (e.g. 502 = heavy rain). See the OpenWeatherMap condition tables.
    pub id: i32,
    pub main: String,
    pub description: String,
}

/// Sunrise/sunset block (`sys`). Absent or empty on malformed responses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SunTimes {
    /// Sunrise at the observed location, Unix epoch seconds (UTC).
    pub sunrise: Option<i64>,
    /// Sunset at the observed location, Unix epoch seconds (UTC).
    pub sunset: Option<i64>,
}

/// Geographic coordinates of the observed location.
#[derive(Debug, Clone, Deserialize)]
pub struct Coord {
    pub lat: f64,
    pub lon: f64,
}

/// A current-weather observation for a single location.
///
/// Constructed fresh on every successful fetch and discarded after one
/// mapping decision; never persisted.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentWeather {
    #[serde(default)]
    pub weather: Vec<WeatherCondition>,
    #[serde(default)]
    pub sys: SunTimes,
    #[serde(default)]
    pub name: String,
    pub coord: Option<Coord>,
}

impl CurrentWeather {
    /// Condition code of the primary weather entry, if the response
    /// carried one.
    pub fn condition_code(&self) -> Option<i32> {
        self.weather.first().map(|w| w.id)
    }

    pub fn sunrise(&self) -> Option<i64> {
        self.sys.sunrise
    }

    pub fn sunset(&self) -> Option<i64> {
        self.sys.sunset
    }
}

/// Weather provider errors
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Weather API returned status {status}")]
    Api { status: u16 },

    #[error("Parse error: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_condition_code_from_full_payload() {
        let payload = r#"{
            "weather": [{"id": 800, "main": "Clear", "description": "clear sky"}],
            "sys": {"sunrise": 1000, "sunset": 2000},
            "name": "Saint Petersburg",
            "coord": {"lat": 59.89, "lon": 30.26}
        }"#;
        let observation: CurrentWeather = serde_json::from_str(payload).unwrap();

        assert_eq!(observation.condition_code(), Some(800));
        assert_eq!(observation.sunrise(), Some(1000));
        assert_eq!(observation.sunset(), Some(2000));
        assert_eq!(observation.name, "Saint Petersburg");
    }

    #[test]
    fn test_empty_weather_array_yields_no_condition() {
        let payload = r#"{"weather": [], "name": "Nowhere"}"#;
        let observation: CurrentWeather = serde_json::from_str(payload).unwrap();

        assert_eq!(observation.condition_code(), None);
        assert_eq!(observation.sunrise(), None);
        assert_eq!(observation.sunset(), None);
    }

    #[test]
    fn test_missing_fields_deserialize_to_defaults() {
        let observation: CurrentWeather = serde_json::from_str("{}").unwrap();

        assert_eq!(observation.condition_code(), None);
        assert!(observation.name.is_empty());
        assert!(observation.coord.is_none());
    }

    #[test]
    fn test_partial_sun_times() {
        let payload = r#"{"weather": [{"id": 500, "main": "Rain", "description": "light rain"}], "sys": {"sunrise": 1000}}"#;
        let observation: CurrentWeather = serde_json::from_str(payload).unwrap();

        assert_eq!(observation.sunrise(), Some(1000));
        assert_eq!(observation.sunset(), None);
    }
}
