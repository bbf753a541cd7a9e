//! Time keeping module for PineTime
//!
//! The watch has no battery backed calendar clock, only a monotonic uptime
//! counter. Wall clock time is derived from a reference: a known calendar
//! time paired with the uptime at which it was valid.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use core::fmt;

use super::config::WatchConfig;

/// Size of a Current Time Service characteristic value without the adjust reason
pub const CTS_LEN: usize = 9;

#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TimeError {
    /// Payload shorter than a Current Time Service value
    TooShort(usize),
    /// Year, month and day do not form a valid date
    InvalidDate,
    /// Hour, minute and second do not form a valid time of day
    InvalidTime,
    /// Timestamp outside the representable range
    OutOfRange,
}

impl fmt::Display for TimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort(len) => write!(f, "expected {} bytes of time data, got {}", CTS_LEN, len),
            Self::InvalidDate => f.write_str("invalid date"),
            Self::InvalidTime => f.write_str("invalid time of day"),
            Self::OutOfRange => f.write_str("timestamp out of range"),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TimeReference {
    /// Clock time (UTC)
    time: NaiveDateTime,
    /// Uptime at which `time` was valid
    uptime_ms: u64,
}

impl Default for TimeReference {
    fn default() -> Self {
        Self {
            time: NaiveDateTime::UNIX_EPOCH,
            uptime_ms: 0,
        }
    }
}

impl TimeReference {
    /// Create new time reference from NaiveDateTime
    pub fn from_datetime(time: NaiveDateTime, uptime_ms: u64) -> Self {
        Self { time, uptime_ms }
    }

    /// Create new time reference from seconds since the Unix epoch
    pub fn from_unix(secs: i64, uptime_ms: u64) -> Result<Self, TimeError> {
        let time = chrono::DateTime::from_timestamp(secs, 0)
            .ok_or(TimeError::OutOfRange)?
            .naive_utc();
        Ok(Self { time, uptime_ms })
    }

    /// Create new time reference from Current Time Service data
    pub fn from_cts_bytes(bytes: &[u8], uptime_ms: u64) -> Result<Self, TimeError> {
        if bytes.len() < CTS_LEN {
            return Err(TimeError::TooShort(bytes.len()));
        }

        let year = u16::from_le_bytes([bytes[0], bytes[1]]) as i32;
        let month = bytes[2] as u32;
        let day = bytes[3] as u32;
        let hour = bytes[4] as u32;
        let min = bytes[5] as u32;
        let sec = bytes[6] as u32;
        // bytes[7] is the day of week, implied by the date
        let milli = bytes[8] as u32 * 1000 / 256; // Convert fractions_256 to milliseconds

        let time = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(TimeError::InvalidDate)?
            .and_hms_milli_opt(hour, min, sec, milli)
            .ok_or(TimeError::InvalidTime)?;

        Ok(Self { time, uptime_ms })
    }

    pub fn time(&self) -> NaiveDateTime {
        self.time
    }
}

#[derive(Default)]
pub struct TimeManager {
    reference: TimeReference,
}

impl TimeManager {
    /// Initialize time measurement on boot
    pub fn init() -> Self {
        Self {
            reference: TimeReference::default(),
        }
    }

    /// Current UTC time at the given uptime
    pub fn utc(&self, uptime_ms: u64) -> NaiveDateTime {
        let elapsed = uptime_ms.saturating_sub(self.reference.uptime_ms);
        self.reference
            .time
            .checked_add_signed(Duration::milliseconds(elapsed as i64))
            .unwrap_or(self.reference.time)
    }

    /// Current local time at the given uptime
    pub fn local(&self, uptime_ms: u64, config: &WatchConfig) -> NaiveDateTime {
        config.localize(&self.utc(uptime_ms))
    }

    /// Update time reference
    pub fn set_time(&mut self, reference: TimeReference) {
        self.reference = reference;
    }
}
