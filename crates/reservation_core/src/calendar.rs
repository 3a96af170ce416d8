//! Day labels offered by the date picker.

use chrono::{Local, NaiveDate};

pub const DEFAULT_BOOKING_HORIZON_DAYS: u32 = 30;

/// Formats a day the way the picker shows it, e.g. `Thu, Oct 16`.
pub fn day_label(date: NaiveDate) -> String {
    date.format("%a, %b %-d").to_string()
}

/// `count` consecutive day labels starting with `today`.
pub fn upcoming_days(today: NaiveDate, count: u32) -> Vec<String> {
    today
        .iter_days()
        .take(count as usize)
        .map(day_label)
        .collect()
}

pub fn upcoming_days_from_today(count: u32) -> Vec<String> {
    upcoming_days(Local::now().date_naive(), count)
}
