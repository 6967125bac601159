use chrono::NaiveTime;
use shared::domain::{BreakItem, ScheduleItem, Talk, TalkItem, TimeSlot};

use crate::{clock, config::ScheduleConfig};

/// One unit of clock movement. Only `Talk` and `Break` produce items;
/// `Transition` moves the clock and nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Talk(usize),
    Break,
    Transition,
}

/// Lays out the steps for `talk_count` talks without touching the clock.
pub fn plan(talk_count: usize, config: &ScheduleConfig) -> Vec<Step> {
    let mut steps = Vec::with_capacity(talk_count * 2);
    for index in 0..talk_count {
        steps.push(Step::Talk(index));
        if config.lunch_after_index == Some(index) {
            steps.push(Step::Break);
        } else if index + 1 < talk_count {
            steps.push(Step::Transition);
        }
    }
    steps
}

struct Clock {
    now: NaiveTime,
}

impl Clock {
    fn span(&mut self, minutes: u32) -> TimeSlot {
        let start = self.now;
        self.now = clock::advance(start, minutes);
        TimeSlot {
            start,
            end: self.now,
        }
    }

    fn skip(&mut self, minutes: u32) {
        self.now = clock::advance(self.now, minutes);
    }
}

/// Builds the displayable schedule for `talks` in input order.
///
/// Precondition: every talk has a positive duration. The data provider
/// rejects records that break it.
pub fn generate(talks: &[Talk], config: &ScheduleConfig) -> Vec<ScheduleItem> {
    let mut clock = Clock { now: config.start };
    let mut items = Vec::with_capacity(talks.len() + 1);

    for step in plan(talks.len(), config) {
        match step {
            Step::Talk(index) => {
                let talk = &talks[index];
                debug_assert!(talk.duration > 0, "talk '{}' has no duration", talk.title);
                let slot = clock.span(talk.duration);
                items.push(ScheduleItem::Talk(TalkItem {
                    slot,
                    time_range: clock::format_range(slot),
                    talk: talk.clone(),
                }));
            }
            Step::Break => {
                let slot = clock.span(config.lunch_minutes);
                items.push(ScheduleItem::Break(BreakItem {
                    slot,
                    time_range: clock::format_range(slot),
                    title: config.lunch_title.clone(),
                }));
            }
            Step::Transition => clock.skip(config.transition_minutes),
        }
    }

    items
}

#[cfg(test)]
#[path = "tests/engine_tests.rs"]
mod tests;
