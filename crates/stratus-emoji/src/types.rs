/// Opaque Telegram custom-emoji document id.
pub type DocumentId = i64;

/// A status update accepted by the sink: either a concrete custom emoji or
/// a request to clear the active status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmojiStatus {
    Set(DocumentId),
    Clear,
}

/// Symbolic weather key grouping condition codes into a renderable status
/// category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKey {
    SunClear,
    SunFewClouds,
    SunScatteredClouds,
    MoonClear,
    CloudBroken,
    CloudOvercast,
    ShowersRainDay,
    Rain,
    Thunderstorm,
    ThunderstormLight,
    Snow,
}

impl StatusKey {
    /// Map an OpenWeatherMap condition code to its status key.
    ///
    /// Codes not in the table fall back to the overcast key.
    pub fn from_condition_code(code: i32) -> Self {
        match code {
            200 | 201 | 202 | 212 => Self::Thunderstorm,
            210 | 211 => Self::ThunderstormLight,
            300 | 301 | 310 | 500 | 520 | 521 => Self::ShowersRainDay,
            302 | 311 | 312 | 501 | 502 | 503 => Self::Rain,
            511 => Self::Snow, // freezing rain renders as snow
            600 | 601 | 602 | 611 => Self::Snow,
            800 => Self::SunClear,
            801 => Self::SunFewClouds,
            802 => Self::SunScatteredClouds,
            803 => Self::CloudBroken,
            804 => Self::CloudOvercast,
            _ => Self::CloudOvercast,
        }
    }

    /// True for keys whose rendering differs between day and night.
    pub fn is_day_specific(self) -> bool {
        matches!(
            self,
            Self::SunClear | Self::SunFewClouds | Self::SunScatteredClouds | Self::ShowersRainDay
        )
    }

    /// Night-time counterpart for day-specific keys; identity for the rest.
    pub fn night_counterpart(self) -> Self {
        match self {
            Self::SunClear => Self::MoonClear,
            Self::SunFewClouds | Self::SunScatteredClouds => Self::CloudBroken,
            Self::ShowersRainDay => Self::Rain,
            other => other,
        }
    }

    /// Telegram custom-emoji document id rendering this key.
    pub fn document_id(self) -> DocumentId {
        match self {
            Self::SunClear => 5469947168523558652,
            Self::SunFewClouds => 5283075860188898177,
            Self::SunScatteredClouds => 5283197442123114023,
            Self::MoonClear => 5188452705546281155,
            Self::CloudBroken => 5283155153875116393,
            Self::CloudOvercast => 5287571024500498635,
            Self::ShowersRainDay => 5283097055852503586,
            Self::Rain => 5283243028905994049,
            Self::Thunderstorm => 5282939632416206153,
            Self::ThunderstormLight => 5282731554135615450,
            Self::Snow => 5431895003821513760,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thunderstorm_codes() {
        assert_eq!(StatusKey::from_condition_code(200), StatusKey::Thunderstorm);
        assert_eq!(StatusKey::from_condition_code(201), StatusKey::Thunderstorm);
        assert_eq!(StatusKey::from_condition_code(202), StatusKey::Thunderstorm);
        assert_eq!(StatusKey::from_condition_code(212), StatusKey::Thunderstorm);
    }

    #[test]
    fn test_light_thunderstorm_codes() {
        assert_eq!(
            StatusKey::from_condition_code(210),
            StatusKey::ThunderstormLight
        );
        assert_eq!(
            StatusKey::from_condition_code(211),
            StatusKey::ThunderstormLight
        );
    }

    #[test]
    fn test_shower_codes() {
        for code in [300, 301, 310, 500, 520, 521] {
            assert_eq!(
                StatusKey::from_condition_code(code),
                StatusKey::ShowersRainDay,
                "code {code}"
            );
        }
    }

    #[test]
    fn test_rain_codes() {
        for code in [302, 311, 312, 501, 502, 503] {
            assert_eq!(
                StatusKey::from_condition_code(code),
                StatusKey::Rain,
                "code {code}"
            );
        }
    }

    #[test]
    fn test_snow_codes() {
        for code in [511, 600, 601, 602, 611] {
            assert_eq!(
                StatusKey::from_condition_code(code),
                StatusKey::Snow,
                "code {code}"
            );
        }
    }

    #[test]
    fn test_clear_and_cloud_codes() {
        assert_eq!(StatusKey::from_condition_code(800), StatusKey::SunClear);
        assert_eq!(StatusKey::from_condition_code(801), StatusKey::SunFewClouds);
        assert_eq!(
            StatusKey::from_condition_code(802),
            StatusKey::SunScatteredClouds
        );
        assert_eq!(StatusKey::from_condition_code(803), StatusKey::CloudBroken);
        assert_eq!(StatusKey::from_condition_code(804), StatusKey::CloudOvercast);
    }

    #[test]
    fn test_unknown_codes_default_to_overcast() {
        assert_eq!(StatusKey::from_condition_code(999), StatusKey::CloudOvercast);
        assert_eq!(StatusKey::from_condition_code(-1), StatusKey::CloudOvercast);
        assert_eq!(StatusKey::from_condition_code(0), StatusKey::CloudOvercast);
    }

    #[test]
    fn test_day_specific_set() {
        assert!(StatusKey::SunClear.is_day_specific());
        assert!(StatusKey::SunFewClouds.is_day_specific());
        assert!(StatusKey::SunScatteredClouds.is_day_specific());
        assert!(StatusKey::ShowersRainDay.is_day_specific());

        assert!(!StatusKey::Rain.is_day_specific());
        assert!(!StatusKey::Snow.is_day_specific());
        assert!(!StatusKey::Thunderstorm.is_day_specific());
        assert!(!StatusKey::CloudOvercast.is_day_specific());
        assert!(!StatusKey::MoonClear.is_day_specific());
    }

    #[test]
    fn test_night_counterparts() {
        assert_eq!(StatusKey::SunClear.night_counterpart(), StatusKey::MoonClear);
        assert_eq!(
            StatusKey::SunFewClouds.night_counterpart(),
            StatusKey::CloudBroken
        );
        assert_eq!(
            StatusKey::SunScatteredClouds.night_counterpart(),
            StatusKey::CloudBroken
        );
        assert_eq!(StatusKey::ShowersRainDay.night_counterpart(), StatusKey::Rain);
    }

    #[test]
    fn test_night_counterpart_is_identity_for_neutral_keys() {
        for key in [
            StatusKey::MoonClear,
            StatusKey::CloudBroken,
            StatusKey::CloudOvercast,
            StatusKey::Rain,
            StatusKey::Thunderstorm,
            StatusKey::ThunderstormLight,
            StatusKey::Snow,
        ] {
            assert_eq!(key.night_counterpart(), key);
        }
    }

    #[test]
    fn test_document_ids_are_distinct_where_expected() {
        assert_eq!(StatusKey::SunClear.document_id(), 5469947168523558652);
        assert_eq!(StatusKey::MoonClear.document_id(), 5188452705546281155);
        assert_eq!(StatusKey::CloudOvercast.document_id(), 5287571024500498635);
        assert_ne!(
            StatusKey::SunClear.document_id(),
            StatusKey::MoonClear.document_id()
        );
    }
}
