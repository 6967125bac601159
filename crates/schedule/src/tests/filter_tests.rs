use super::*;
use crate::{generate, ScheduleConfig};
use proptest::prelude::*;

fn sample_talks() -> Vec<Talk> {
    vec![
        Talk {
            title: "Fearless Concurrency".into(),
            speakers: vec!["Alice Smith".into()],
            description: "Threads, channels and Send.".into(),
            category: vec!["Concurrency".into(), "Rust".into()],
            duration: 30,
        },
        Talk {
            title: "Parsing with Combinators".into(),
            speakers: vec!["Bob Jones".into(), "Carol White".into()],
            description: "Mentions alice only in the description.".into(),
            category: vec!["Parsers".into()],
            duration: 45,
        },
        Talk {
            title: "Async Internals".into(),
            speakers: vec!["Dave Brown".into()],
            description: "Futures all the way down.".into(),
            category: vec!["Async".into(), "Runtime".into()],
            duration: 20,
        },
    ]
}

fn sample_items() -> Vec<ScheduleItem> {
    generate(&sample_talks(), &ScheduleConfig::default())
}

fn titles(items: &[ScheduleItem]) -> Vec<String> {
    items
        .iter()
        .map(|item| match item {
            ScheduleItem::Talk(talk) => talk.talk.title.clone(),
            ScheduleItem::Break(brk) => brk.title.clone(),
        })
        .collect()
}

#[test]
fn empty_term_is_identity() {
    let items = sample_items();
    assert_eq!(filter(&items, ""), items);
}

#[test]
fn speaker_match_ignores_case_and_keeps_break() {
    let filtered = filter(&sample_items(), "alice");
    assert_eq!(titles(&filtered), vec!["Fearless Concurrency", "Lunch Break"]);
}

#[test]
fn mixed_case_term_still_matches() {
    let filtered = filter(&sample_items(), "ALICE");
    assert_eq!(titles(&filtered), vec!["Fearless Concurrency", "Lunch Break"]);
}

#[test]
fn matches_title_and_category_substrings() {
    assert_eq!(
        titles(&filter(&sample_items(), "combinator")),
        vec!["Parsing with Combinators", "Lunch Break"]
    );
    assert_eq!(
        titles(&filter(&sample_items(), "runt")),
        vec!["Lunch Break", "Async Internals"]
    );
}

#[test]
fn description_is_not_searched() {
    let filtered = filter(&sample_items(), "futures");
    assert_eq!(titles(&filtered), vec!["Lunch Break"]);
}

#[test]
fn no_match_without_break_is_empty() {
    let items = generate(&sample_talks(), &ScheduleConfig::default().without_lunch());
    assert!(filter(&items, "kubernetes").is_empty());
}

#[test]
fn filtered_items_keep_their_time_ranges() {
    let items = sample_items();
    let filtered = filter(&items, "async");
    assert_eq!(filtered.last(), items.last());
    assert_eq!(filtered[1].time_range(), "12:25 PM–12:45 PM");
}

#[test]
fn talk_matches_expects_lowercase_needle() {
    let talk = &sample_talks()[0];
    assert!(talk_matches(talk, "smith"));
    assert!(talk_matches(talk, "rust"));
    assert!(!talk_matches(talk, "bob"));
}

proptest! {
    #[test]
    fn filter_is_idempotent(term in "[a-zA-Z ]{0,6}") {
        let items = sample_items();
        let once = filter(&items, &term);
        prop_assert_eq!(filter(&once, &term), once);
    }

    #[test]
    fn filter_preserves_order_and_breaks(term in "[a-z]{1,4}") {
        let items = sample_items();
        let filtered = filter(&items, &term);
        prop_assert!(filtered.iter().any(ScheduleItem::is_break));

        let mut cursor = items.iter();
        for kept in &filtered {
            prop_assert!(cursor.any(|original| original == kept));
        }
    }
}
