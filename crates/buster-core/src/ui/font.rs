//! Font scaling for the result view.

use serde::{Deserialize, Serialize};

/// Text size in percent of the base size, always within `[MIN, MAX]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "i64", into = "u8")]
pub struct FontScale(u8);

impl FontScale {
    pub const MIN: u8 = 80;
    pub const MAX: u8 = 140;
    pub const STEP: u8 = 10;
    pub const DEFAULT: u8 = 100;

    /// Create a scale, clamping out-of-range values to the nearest bound.
    pub fn new(percent: i64) -> Self {
        Self(percent.clamp(Self::MIN as i64, Self::MAX as i64) as u8)
    }

    pub fn percent(self) -> u8 {
        self.0
    }

    /// One step larger; a no-op at the upper bound.
    pub fn increase(self) -> Self {
        Self::new(self.0 as i64 + Self::STEP as i64)
    }

    /// One step smaller; a no-op at the lower bound.
    pub fn decrease(self) -> Self {
        Self::new(self.0 as i64 - Self::STEP as i64)
    }
}

impl Default for FontScale {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl From<i64> for FontScale {
    fn from(percent: i64) -> Self {
        Self::new(percent)
    }
}

impl From<FontScale> for u8 {
    fn from(scale: FontScale) -> u8 {
        scale.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_100() {
        assert_eq!(FontScale::default().percent(), 100);
    }

    #[test]
    fn test_increase_stops_at_max() {
        let mut scale = FontScale::default();
        for _ in 0..20 {
            scale = scale.increase();
            assert!(scale.percent() <= FontScale::MAX);
        }
        assert_eq!(scale.percent(), 140);
        assert_eq!(scale.increase(), scale);
    }

    #[test]
    fn test_decrease_stops_at_min() {
        let mut scale = FontScale::default();
        for _ in 0..20 {
            scale = scale.decrease();
            assert!(scale.percent() >= FontScale::MIN);
        }
        assert_eq!(scale.percent(), 80);
        assert_eq!(scale.decrease(), scale);
    }

    #[test]
    fn test_deserialization_clamps() {
        let huge: FontScale = serde_json::from_str("500").unwrap();
        let tiny: FontScale = serde_json::from_str("-3").unwrap();
        assert_eq!(huge.percent(), 140);
        assert_eq!(tiny.percent(), 80);
        assert_eq!(serde_json::to_string(&FontScale::new(110)).unwrap(), "110");
    }
}
