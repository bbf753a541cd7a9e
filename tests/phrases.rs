// Exhaustive checks of the phrase formatters over every valid input

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use fuzzy_time::{
    format_date, format_hours, format_minutes, format_sloppy_minutes, Phrase, BUFFER_SIZE,
};

type Formatter = fn(&NaiveDateTime, &mut Phrase);

const FORMATTERS: [(&str, Formatter); 4] = [
    ("minutes", format_minutes),
    ("sloppy minutes", format_sloppy_minutes),
    ("hours", format_hours),
    ("date", format_date),
];

fn at(hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 3)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

fn render(format: Formatter, time: &NaiveDateTime) -> Phrase {
    let mut words = Phrase::new();
    format(time, &mut words);
    words
}

/// Every minute of a leap year
fn every_minute() -> impl Iterator<Item = NaiveDateTime> {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    (0..366 * 24 * 60).map(move |m| start + chrono::Duration::minutes(m))
}

#[test]
fn test_every_phrase_fits_the_buffer() {
    for time in every_minute() {
        for (name, format) in FORMATTERS {
            let words = render(format, &time);
            assert!(!words.is_empty(), "{} empty at {}", name, time);
            assert!(
                words.len() < BUFFER_SIZE,
                "{} too long at {}: {:?}",
                name,
                time,
                words
            );
            let bytes = words.as_bytes_with_nul();
            assert_eq!(bytes.last(), Some(&0));
            assert!(!bytes[..bytes.len() - 1].contains(&0));
        }
    }
}

#[test]
fn test_formatters_are_idempotent() {
    let mut reused = Phrase::new();
    for time in every_minute().step_by(7) {
        for (name, format) in FORMATTERS {
            let first = render(format, &time);
            format(&time, &mut reused);
            assert_eq!(
                first.as_bytes_with_nul(),
                reused.as_bytes_with_nul(),
                "{} differs at {}",
                name,
                time
            );
        }
    }
}

#[test]
fn test_hours_on_twelve_hour_dial() {
    let expected = [
        "twelve", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
        "eleven",
    ];
    for hour in 0..24 {
        for minute in [0, 30, 59] {
            assert_eq!(
                render(format_hours, &at(hour, minute)),
                expected[(hour % 12) as usize]
            );
        }
    }
}

#[test]
fn test_date_has_no_padding() {
    let months = [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];
    for time in every_minute().step_by(24 * 60) {
        let expected = format!("{} {}", months[time.month0() as usize], time.day());
        assert_eq!(render(format_date, &time).as_str(), expected);
    }
    let time = NaiveDate::from_ymd_opt(2024, 1, 3)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap();
    assert_eq!(render(format_date, &time), "Jan 3");
}

#[test]
fn test_rounding_boundaries() {
    assert!(render(format_sloppy_minutes, &at(9, 0)).as_str().ends_with("o'clock"));
    assert!(render(format_sloppy_minutes, &at(9, 15))
        .as_str()
        .starts_with("quarter past"));
    assert!(render(format_sloppy_minutes, &at(9, 30))
        .as_str()
        .starts_with("half past"));
    assert_eq!(render(format_sloppy_minutes, &at(9, 45)), "quarter to ten");
    assert_eq!(render(format_sloppy_minutes, &at(9, 59)), "ten o'clock");
}

#[test]
fn test_sloppy_minutes_leave_input_alone() {
    let time = at(23, 59);
    let copy = time;
    assert_eq!(render(format_sloppy_minutes, &time), "twelve o'clock");
    assert_eq!(time, copy);
    assert_eq!(time.hour(), 23);
}

#[test]
fn test_sloppy_minutes_change_only_on_rounding_steps() {
    for hour in 0..24 {
        for minute in 1..60 {
            let before = render(format_sloppy_minutes, &at(hour, minute - 1));
            let after = render(format_sloppy_minutes, &at(hour, minute));
            assert_eq!(before != after, minute % 5 == 3, "at {}:{}", hour, minute);
        }
    }
}

#[test]
fn test_exact_minutes_are_distinct() {
    let mut seen: Vec<String> = Vec::new();
    for minute in 0..60 {
        let words = render(format_minutes, &at(9, minute)).to_string();
        assert!(!seen.contains(&words), "{} repeats at {}", words, minute);
        seen.push(words);
    }
}
