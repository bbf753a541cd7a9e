//! Fuzzy time watchface for the PineTime
//!
//! Shows the time as words ("quarter past nine") in four sliding text slots.
//! Everything in this library is platform independent and runs on the host;
//! the firmware binary only adds the embassy tasks driving it.

#![cfg_attr(not(test), no_std)]

pub mod system;
pub mod ui;
pub mod words;

pub use system::{
    config::{ConfigError, WatchConfig},
    time::{TimeError, TimeManager, TimeReference},
    units::TimeUnits,
};
pub use ui::{Dispatcher, Slot, SlotKind, SlotState, StaleSlots};
pub use words::{
    format_date, format_hours, format_minutes, format_sloppy_minutes, Phrase, BUFFER_SIZE,
    DATE_FORMAT,
};
