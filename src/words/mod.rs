//! Fuzzy time to words conversion
//!
//! Four pure functions turning a calendar snapshot into the phrase shown by
//! one watchface slot. They never allocate and only write into the caller's
//! [`Phrase`].

use chrono::{Datelike, NaiveDateTime, Timelike};

mod phrase;
pub mod tables;

pub use phrase::{Phrase, BUFFER_SIZE};

use tables::{five_minutes_word, hour_word, month_abbrev, ONES, TENS};

/// strftime pattern of the date phrase, `%e` without its space padding
pub const DATE_FORMAT: &str = "%b %e";

/// Exact minute in words, e.g. "twenty three", "oh five" or "o'clock"
pub fn format_minutes(time: &NaiveDateTime, words: &mut Phrase) {
    let minute = time.minute();
    match minute {
        0 => words.write(format_args!("o'clock")),
        1..=9 => words.write(format_args!("oh {}", ONES[minute as usize])),
        10..=19 => words.write(format_args!("{}", ONES[minute as usize])),
        20..=59 => {
            let tens = TENS[(minute / 10) as usize];
            match minute % 10 {
                0 => words.write(format_args!("{}", tens)),
                ones => words.write(format_args!("{} {}", tens, ONES[ones as usize])),
            }
        }
        _ => words.clear(),
    }
}

/// Minute rounded to the nearest five, with the hour it refers to.
///
/// "quarter past nine", "half past nine", "twenty to ten", "ten o'clock".
/// From :58 on the phrase already names the next hour.
pub fn format_sloppy_minutes(time: &NaiveDateTime, words: &mut Phrase) {
    let minute = time.minute();
    if minute > 59 {
        words.clear();
        return;
    }

    let hour = time.hour();
    let next_hour = (hour + 1) % 24;
    let rounded = (minute + 2) / 5 * 5;
    match rounded {
        0 => words.write(format_args!("{} o'clock", hour_word(hour))),
        5..=30 => words.write(format_args!(
            "{} past {}",
            five_minutes_word(rounded),
            hour_word(hour)
        )),
        35..=55 => words.write(format_args!(
            "{} to {}",
            five_minutes_word(60 - rounded),
            hour_word(next_hour)
        )),
        _ => words.write(format_args!("{} o'clock", hour_word(next_hour))),
    }
}

/// Hour on a 12-hour dial, midnight and noon both read "twelve".
///
/// This slot is read together with the exact minutes, which always count
/// past the hour, so it names the current hour at any minute.
pub fn format_hours(time: &NaiveDateTime, words: &mut Phrase) {
    words.write(format_args!("{}", hour_word(time.hour())));
}

/// Abbreviated month and unpadded day of month, e.g. "Jan 3"
pub fn format_date(time: &NaiveDateTime, words: &mut Phrase) {
    words.write(format_args!("{} {}", month_abbrev(time.month0()), time.day()));
}
