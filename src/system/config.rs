//! Watchface configuration

use chrono::{Duration, NaiveDateTime};
use core::fmt;

/// Default offset from UTC, one hour east
pub const DEFAULT_UTC_OFFSET: i32 = 1 * 3_600;
/// Default duration of one slide animation
pub const DEFAULT_SLIDE_DURATION_MS: u32 = 700;
/// Default period of the time tick
pub const DEFAULT_TICK_PERIOD_MS: u32 = 1_000;

const MAX_UTC_OFFSET: i32 = 24 * 3_600;

#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ConfigError {
    /// Offset from UTC is a day or more
    OffsetOutOfRange(i32),
    /// Slide duration or tick period is zero
    ZeroDuration,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OffsetOutOfRange(secs) => write!(f, "UTC offset of {}s is out of range", secs),
            Self::ZeroDuration => f.write_str("durations must not be zero"),
        }
    }
}

#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct WatchConfig {
    /// Local time offset from UTC in seconds
    utc_offset_secs: i32,
    /// Duration of one slide in or slide out
    slide_duration_ms: u32,
    /// Interval between time ticks
    tick_period_ms: u32,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            utc_offset_secs: DEFAULT_UTC_OFFSET,
            slide_duration_ms: DEFAULT_SLIDE_DURATION_MS,
            tick_period_ms: DEFAULT_TICK_PERIOD_MS,
        }
    }
}

impl WatchConfig {
    /// Create a validated configuration
    pub fn new(
        utc_offset_secs: i32,
        slide_duration_ms: u32,
        tick_period_ms: u32,
    ) -> Result<Self, ConfigError> {
        if utc_offset_secs.unsigned_abs() >= MAX_UTC_OFFSET as u32 {
            return Err(ConfigError::OffsetOutOfRange(utc_offset_secs));
        }
        if slide_duration_ms == 0 || tick_period_ms == 0 {
            return Err(ConfigError::ZeroDuration);
        }

        Ok(Self {
            utc_offset_secs,
            slide_duration_ms,
            tick_period_ms,
        })
    }

    /// Same configuration in another timezone
    pub fn with_utc_offset(self, utc_offset_secs: i32) -> Result<Self, ConfigError> {
        Self::new(utc_offset_secs, self.slide_duration_ms, self.tick_period_ms)
    }

    pub fn utc_offset_secs(&self) -> i32 {
        self.utc_offset_secs
    }

    pub fn slide_duration_ms(&self) -> u32 {
        self.slide_duration_ms
    }

    pub fn tick_period_ms(&self) -> u32 {
        self.tick_period_ms
    }

    /// Convert a UTC time to local time
    pub fn localize(&self, utc: &NaiveDateTime) -> NaiveDateTime {
        utc.checked_add_signed(Duration::seconds(self.utc_offset_secs as i64))
            .unwrap_or(*utc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_default() {
        let config = WatchConfig::default();
        assert_eq!(config.utc_offset_secs(), 3_600);
        assert_eq!(config.slide_duration_ms(), 700);
        assert_eq!(config.tick_period_ms(), 1_000);
    }

    #[test]
    fn test_offset_out_of_range() {
        assert_eq!(
            WatchConfig::new(24 * 3_600, 700, 1_000),
            Err(ConfigError::OffsetOutOfRange(86_400))
        );
        assert_eq!(
            WatchConfig::new(-24 * 3_600, 700, 1_000),
            Err(ConfigError::OffsetOutOfRange(-86_400))
        );
        assert!(WatchConfig::new(-12 * 3_600, 700, 1_000).is_ok());
    }

    #[test]
    fn test_zero_duration() {
        assert_eq!(WatchConfig::new(0, 0, 1_000), Err(ConfigError::ZeroDuration));
        assert_eq!(WatchConfig::new(0, 700, 0), Err(ConfigError::ZeroDuration));
    }

    #[test]
    fn test_localize_crosses_midnight() {
        let config = WatchConfig::default().with_utc_offset(2 * 3_600).unwrap();
        let utc = NaiveDate::from_ymd_opt(2023, 12, 31)
            .unwrap()
            .and_hms_opt(23, 30, 0)
            .unwrap();
        let local = config.localize(&utc);
        assert_eq!(
            local,
            NaiveDate::from_ymd_opt(2024, 1, 1)
                .unwrap()
                .and_hms_opt(1, 30, 0)
                .unwrap()
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            ConfigError::OffsetOutOfRange(90_000).to_string(),
            "UTC offset of 90000s is out of range"
        );
    }
}
