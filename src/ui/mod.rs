//! UI definitions module
//!
//! The watchface shows four text slots. Drawing and easing are left to the
//! display side; this module only decides what each slot says and where it
//! is in its slide out / slide in sequence.

use chrono::{NaiveDateTime, Timelike};

use crate::words::{self, Phrase};

mod dispatcher;

pub use dispatcher::Dispatcher;

/// Number of text slots on the watchface
pub const NUM_SLOTS: usize = 4;

/// Text slots from top to bottom
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SlotKind {
    /// Hour of the day
    Hours,
    /// Minutes rounded to five, with their hour
    Tens,
    /// Exact minutes
    Minutes,
    /// Month and day
    Date,
}

impl SlotKind {
    pub const ALL: [SlotKind; NUM_SLOTS] = [Self::Hours, Self::Tens, Self::Minutes, Self::Date];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Write the text this slot shows at `time`.
    ///
    /// The exact minutes are left blank on multiples of five, the rounded
    /// phrase above them already says the same.
    pub fn render(self, time: &NaiveDateTime, text: &mut Phrase) {
        match self {
            Self::Hours => words::format_hours(time, text),
            Self::Tens => words::format_sloppy_minutes(time, text),
            Self::Minutes if time.minute() % 5 == 0 => text.clear(),
            Self::Minutes => words::format_minutes(time, text),
            Self::Date => words::format_date(time, text),
        }
    }
}

/// Position of a slot in its refresh sequence
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum SlotState {
    /// Showing current text
    #[default]
    Idle,
    /// Old text is leaving the screen
    SlidingOut,
    /// Old text is gone, new text is being written
    Refreshing,
    /// New text is entering the screen
    SlidingIn,
}

/// One text region of the watchface
#[derive(Clone, Debug)]
pub struct Slot {
    kind: SlotKind,
    state: SlotState,
    text: Phrase,
    /// Latest time the slot has to catch up with
    pending: Option<NaiveDateTime>,
}

impl Slot {
    fn new(kind: SlotKind) -> Self {
        Self {
            kind,
            state: SlotState::Idle,
            text: Phrase::new(),
            pending: None,
        }
    }

    pub fn kind(&self) -> SlotKind {
        self.kind
    }

    pub fn state(&self) -> SlotState {
        self.state
    }

    pub fn text(&self) -> &Phrase {
        &self.text
    }

    pub fn is_animating(&self) -> bool {
        self.state != SlotState::Idle
    }
}

/// Set of slots that started sliding out on a tick
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct StaleSlots(u8);

impl StaleSlots {
    pub const NONE: Self = Self(0);

    pub fn insert(&mut self, kind: SlotKind) {
        self.0 |= 1 << kind.index();
    }

    pub fn contains(self, kind: SlotKind) -> bool {
        self.0 & (1 << kind.index()) != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn iter(self) -> impl Iterator<Item = SlotKind> {
        SlotKind::ALL
            .into_iter()
            .filter(move |kind| self.contains(*kind))
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for StaleSlots {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "StaleSlots({=u8:b})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 3)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn render(kind: SlotKind, time: NaiveDateTime) -> Phrase {
        let mut text = Phrase::new();
        kind.render(&time, &mut text);
        text
    }

    #[test]
    fn test_slot_formatters() {
        let time = at(21, 47);
        assert_eq!(render(SlotKind::Hours, time), "nine");
        assert_eq!(render(SlotKind::Tens, time), "quarter to ten");
        assert_eq!(render(SlotKind::Minutes, time), "forty seven");
        assert_eq!(render(SlotKind::Date, time), "Jan 3");
    }

    #[test]
    fn test_minutes_blank_when_rounded_phrase_is_exact() {
        for minute in (0..60).step_by(5) {
            assert!(render(SlotKind::Minutes, at(9, minute)).is_empty());
        }
        assert_eq!(render(SlotKind::Minutes, at(9, 16)), "sixteen");
    }

    #[test]
    fn test_stale_slots() {
        let mut stale = StaleSlots::NONE;
        assert!(stale.is_empty());
        stale.insert(SlotKind::Minutes);
        stale.insert(SlotKind::Date);
        assert_eq!(stale.len(), 2);
        assert!(stale.contains(SlotKind::Date));
        assert!(!stale.contains(SlotKind::Hours));

        let mut kinds = stale.iter();
        assert_eq!(kinds.next(), Some(SlotKind::Minutes));
        assert_eq!(kinds.next(), Some(SlotKind::Date));
        assert_eq!(kinds.next(), None);
    }
}
