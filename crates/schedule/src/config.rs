use chrono::NaiveTime;

use crate::{clock, ScheduleError};

pub const DEFAULT_START_TIME: &str = "10:00";
const DEFAULT_START: NaiveTime = match NaiveTime::from_hms_opt(10, 0, 0) {
    Some(time) => time,
    None => panic!("default start time out of range"),
};
pub const DEFAULT_TRANSITION_MINUTES: u32 = 10;
pub const DEFAULT_LUNCH_MINUTES: u32 = 60;
/// Zero-based: lunch follows the second talk.
pub const DEFAULT_LUNCH_AFTER_INDEX: usize = 1;
pub const LUNCH_TITLE: &str = "Lunch Break";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleConfig {
    pub start: NaiveTime,
    /// Silent gap between consecutive talks. Never rendered.
    pub transition_minutes: u32,
    pub lunch_minutes: u32,
    /// `None` disables the lunch break. An index past the last talk does too.
    pub lunch_after_index: Option<usize>,
    pub lunch_title: String,
}

impl ScheduleConfig {
    pub fn starting_at(raw: &str) -> Result<Self, ScheduleError> {
        Ok(Self {
            start: clock::parse_clock(raw)?,
            ..Self::default()
        })
    }

    pub fn without_lunch(mut self) -> Self {
        self.lunch_after_index = None;
        self
    }
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            start: DEFAULT_START,
            transition_minutes: DEFAULT_TRANSITION_MINUTES,
            lunch_minutes: DEFAULT_LUNCH_MINUTES,
            lunch_after_index: Some(DEFAULT_LUNCH_AFTER_INDEX),
            lunch_title: LUNCH_TITLE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_start_matches_constant() {
        let parsed = ScheduleConfig::starting_at(DEFAULT_START_TIME).expect("config");
        assert_eq!(parsed, ScheduleConfig::default());
    }

    #[test]
    fn bad_start_time_is_rejected() {
        assert!(ScheduleConfig::starting_at("25:00").is_err());
    }
}
