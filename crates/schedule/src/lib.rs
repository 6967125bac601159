//! Schedule engine: turns an ordered talk list into timed schedule items and
//! filters those items by a search term. Everything here is pure.

pub mod clock;
mod config;
mod engine;
mod filter;

pub use clock::{format_clock, format_hm, format_range, parse_clock};
pub use config::{
    ScheduleConfig, DEFAULT_LUNCH_AFTER_INDEX, DEFAULT_LUNCH_MINUTES, DEFAULT_START_TIME,
    DEFAULT_TRANSITION_MINUTES, LUNCH_TITLE,
};
pub use engine::{generate, plan, Step};
pub use filter::{filter, talk_matches};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("invalid start time '{raw}', expected HH:MM")]
    InvalidStartTime {
        raw: String,
        #[source]
        source: chrono::ParseError,
    },
}
