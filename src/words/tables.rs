//! Word and numeral tables

/// Numbers below twenty
pub static ONES: [&str; 20] = [
    "zero",
    "one",
    "two",
    "three",
    "four",
    "five",
    "six",
    "seven",
    "eight",
    "nine",
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

/// Multiples of ten up to fifty, indexed by the tens digit
pub static TENS: [&str; 6] = ["", "ten", "twenty", "thirty", "forty", "fifty"];

/// Hours on a 12-hour dial, index 0 is both midnight and noon
pub static HOURS: [&str; 12] = [
    "twelve", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven",
];

/// Abbreviated month names, indexed by `month0`
pub static MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Idioms for a distance of 5, 10, ... 30 minutes from the full hour
pub static FIVE_MINUTES: [&str; 6] = [
    "five",
    "ten",
    "quarter",
    "twenty",
    "twenty five",
    "half",
];

/// Word for an hour of the day (0-23) on a 12-hour dial
pub fn hour_word(hour: u32) -> &'static str {
    HOURS.get((hour % 12) as usize).copied().unwrap_or("")
}

/// Word for a distance from the full hour, given in minutes (5, 10, ... 30)
pub fn five_minutes_word(minutes: u32) -> &'static str {
    match minutes {
        5..=30 if minutes % 5 == 0 => FIVE_MINUTES[(minutes / 5 - 1) as usize],
        _ => "",
    }
}

/// Abbreviated name of a zero based month
pub fn month_abbrev(month0: u32) -> &'static str {
    MONTHS.get(month0 as usize).copied().unwrap_or("")
}
