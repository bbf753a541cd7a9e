//! Calendar units changed between two ticks

use chrono::{Datelike, NaiveDateTime, Timelike};

/// Set of calendar units whose value changed since the previous tick
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct TimeUnits(u8);

impl TimeUnits {
    pub const NONE: Self = Self(0);
    pub const SECOND: Self = Self(1 << 0);
    pub const MINUTE: Self = Self(1 << 1);
    pub const HOUR: Self = Self(1 << 2);
    pub const DAY: Self = Self(1 << 3);
    pub const MONTH: Self = Self(1 << 4);
    pub const YEAR: Self = Self(1 << 5);
    pub const ALL: Self = Self(0b11_1111);

    /// Units changed going from `prev` to `next`.
    ///
    /// A change of a coarser unit implies all finer ones, so jumping from
    /// 10:15 on one day to 10:15 on the next still reports a minute change.
    /// Without a previous tick every unit counts as changed.
    pub fn between(prev: Option<&NaiveDateTime>, next: &NaiveDateTime) -> Self {
        let Some(prev) = prev else {
            return Self::ALL;
        };

        let mut units = Self::NONE;
        if prev.year() != next.year() {
            units = units | Self::YEAR;
        }
        if units.contains(Self::YEAR) || prev.month() != next.month() {
            units = units | Self::MONTH;
        }
        if units.contains(Self::MONTH) || prev.day() != next.day() {
            units = units | Self::DAY;
        }
        if units.contains(Self::DAY) || prev.hour() != next.hour() {
            units = units | Self::HOUR;
        }
        if units.contains(Self::HOUR) || prev.minute() != next.minute() {
            units = units | Self::MINUTE;
        }
        if units.contains(Self::MINUTE) || prev.second() != next.second() {
            units = units | Self::SECOND;
        }
        units
    }

    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn bits(self) -> u8 {
        self.0
    }
}

impl core::ops::BitOr for TimeUnits {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for TimeUnits {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "TimeUnits({=u8:b})", self.0)
    }
}
