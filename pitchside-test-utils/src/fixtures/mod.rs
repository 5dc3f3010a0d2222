pub mod account;
pub mod catalog;

use chrono::{NaiveDate, NaiveDateTime};

/// Shorthand for a calendar date in fixtures and assertions.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

/// Shorthand for a UTC timestamp in fixtures and assertions.
pub fn datetime(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    date(year, month, day)
        .and_hms_opt(hour, minute, 0)
        .expect("valid fixture time")
}
