//! WMO weather interpretation codes

use serde::{Deserialize, Serialize};

/// Sky condition decoded from a WMO weather code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Condition {
    /// Code 0
    Clear,
    /// Codes 1, 2
    PartlyCloudy,
    /// Code 3
    Overcast,
    /// Codes 45, 48
    Fog,
    /// Codes 51, 53, 55
    Drizzle,
    /// Codes 56, 57
    FreezingDrizzle,
    /// Codes 61, 63, 65
    Rain,
    /// Codes 66, 67
    FreezingRain,
    /// Codes 71, 73, 75
    Snow,
    /// Code 77
    SnowGrains,
    /// Codes 80, 81, 82
    RainShowers,
    /// Codes 85, 86
    SnowShowers,
    /// Code 95
    Thunderstorm,
    /// Codes 96, 99
    ThunderstormWithHail,
    /// Any other code
    Unknown,
}

impl Condition {
    /// Decodes a WMO code
    #[must_use]
    pub const fn from_code(code: i64) -> Self {
        match code {
            0 => Self::Clear,
            1 | 2 => Self::PartlyCloudy,
            3 => Self::Overcast,
            45 | 48 => Self::Fog,
            51 | 53 | 55 => Self::Drizzle,
            56 | 57 => Self::FreezingDrizzle,
            61 | 63 | 65 => Self::Rain,
            66 | 67 => Self::FreezingRain,
            71 | 73 | 75 => Self::Snow,
            77 => Self::SnowGrains,
            80..=82 => Self::RainShowers,
            85 | 86 => Self::SnowShowers,
            95 => Self::Thunderstorm,
            96 | 99 => Self::ThunderstormWithHail,
            _ => Self::Unknown,
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Clear => "Clear",
            Self::PartlyCloudy => "Partly cloudy",
            Self::Overcast => "Overcast",
            Self::Fog => "Fog",
            Self::Drizzle => "Drizzle",
            Self::FreezingDrizzle => "Freezing drizzle",
            Self::Rain => "Rain",
            Self::FreezingRain => "Freezing rain",
            Self::Snow => "Snow",
            Self::SnowGrains => "Snow grains",
            Self::RainShowers => "Rain showers",
            Self::SnowShowers => "Snow showers",
            Self::Thunderstorm => "Thunderstorm",
            Self::ThunderstormWithHail => "Thunderstorm w/ hail",
            Self::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes() {
        assert_eq!(Condition::from_code(0), Condition::Clear);
        assert_eq!(Condition::from_code(2), Condition::PartlyCloudy);
        assert_eq!(Condition::from_code(48), Condition::Fog);
        assert_eq!(Condition::from_code(57), Condition::FreezingDrizzle);
        assert_eq!(Condition::from_code(81), Condition::RainShowers);
        assert_eq!(Condition::from_code(99), Condition::ThunderstormWithHail);
    }

    #[test]
    fn test_gaps_are_unknown() {
        for code in [4, 50, 52, 60, 79, 83, 94, 97, 100, -1] {
            assert_eq!(Condition::from_code(code), Condition::Unknown, "code {code}");
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(Condition::Clear.to_string(), "Clear");
        assert_eq!(
            Condition::ThunderstormWithHail.label(),
            "Thunderstorm w/ hail"
        );
        assert_eq!(Condition::from_code(12).label(), "Unknown");
    }
}
