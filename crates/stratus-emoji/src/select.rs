use chrono::{DateTime, Local, Timelike, Utc};

use stratus_weather::CurrentWeather;

use crate::types::{EmojiStatus, StatusKey};

/// Local-clock daytime window used when an observation carries no
/// sunrise/sunset data: hours 6 through 20 inclusive.
pub fn daytime_hours_contain(hour: u32) -> bool {
    (6..21).contains(&hour)
}

/// Classify the observation instant as day or night.
///
/// Prefers the observation's own sunrise/sunset epochs; bounds are strict,
/// so the exact sunrise or sunset second counts as night. Falls back to the
/// local wall-clock hour when either epoch is missing.
pub fn is_daytime(observation: &CurrentWeather, now: DateTime<Utc>) -> bool {
    match (observation.sunrise(), observation.sunset()) {
        (Some(sunrise), Some(sunset)) => {
            let ts = now.timestamp();
            sunrise < ts && ts < sunset
        }
        _ => daytime_hours_contain(now.with_timezone(&Local).hour()),
    }
}

/// Select the emoji status for an observation.
///
/// Absent or malformed observations degrade to the overcast fallback
/// rather than failing; the degradation is logged at warn level.
pub fn select_status(observation: Option<&CurrentWeather>, now: DateTime<Utc>) -> EmojiStatus {
    let fallback = EmojiStatus::Set(StatusKey::CloudOvercast.document_id());

    let Some(observation) = observation else {
        tracing::warn!("No weather observation available, using overcast fallback");
        return fallback;
    };

    let Some(code) = observation.condition_code() else {
        tracing::warn!("Observation carries no condition data, using overcast fallback");
        return fallback;
    };

    let mut key = StatusKey::from_condition_code(code);
    if !is_daytime(observation, now) && key.is_day_specific() {
        key = key.night_counterpart();
    }

    tracing::debug!(condition_code = code, ?key, "Resolved weather condition");
    EmojiStatus::Set(key.document_id())
}
