//! Wall-clock helpers. Times are hour-of-day only and wrap at midnight.

use chrono::{Duration, NaiveTime};
use shared::domain::TimeSlot;

use crate::ScheduleError;

pub const RANGE_SEPARATOR: char = '–';

/// Parses a 24-hour `HH:MM` string such as `"10:00"`.
pub fn parse_clock(raw: &str) -> Result<NaiveTime, ScheduleError> {
    NaiveTime::parse_from_str(raw.trim(), "%H:%M").map_err(|source| {
        ScheduleError::InvalidStartTime {
            raw: raw.to_string(),
            source,
        }
    })
}

/// 12-hour display: `"2:05 PM"`, `"12:00 AM"`.
pub fn format_clock(time: NaiveTime) -> String {
    time.format("%-I:%M %p").to_string()
}

pub fn format_hm(hour: u32, minute: u32) -> Option<String> {
    NaiveTime::from_hms_opt(hour, minute, 0).map(format_clock)
}

pub fn format_range(slot: TimeSlot) -> String {
    format!(
        "{}{RANGE_SEPARATOR}{}",
        format_clock(slot.start),
        format_clock(slot.end)
    )
}

pub(crate) fn advance(time: NaiveTime, minutes: u32) -> NaiveTime {
    time.overflowing_add_signed(Duration::minutes(i64::from(minutes)))
        .0
}
