use shared::domain::{ScheduleItem, Talk};

/// Keeps breaks and every talk whose title, speakers or tags contain `term`,
/// ignoring case. An empty term returns the items unchanged.
pub fn filter(items: &[ScheduleItem], term: &str) -> Vec<ScheduleItem> {
    let needle = term.to_lowercase();
    if needle.is_empty() {
        return items.to_vec();
    }

    items
        .iter()
        .filter(|item| match item {
            ScheduleItem::Break(_) => true,
            ScheduleItem::Talk(talk_item) => talk_matches(&talk_item.talk, &needle),
        })
        .cloned()
        .collect()
}

/// `needle` must already be lowercase.
pub fn talk_matches(talk: &Talk, needle: &str) -> bool {
    let contains = |field: &str| field.to_lowercase().contains(needle);
    contains(&talk.title)
        || talk.speakers.iter().any(|speaker| contains(speaker))
        || talk.category.iter().any(|tag| contains(tag))
}

#[cfg(test)]
#[path = "tests/filter_tests.rs"]
mod tests;
