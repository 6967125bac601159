use std::path::PathBuf;

use storage::{JsonTalkStore, TalkStore};

#[tokio::test]
async fn bundled_talk_list_loads_and_validates() {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data/talks.json");
    let talks = JsonTalkStore::new(path).load_talks().await.expect("bundled talks");
    assert_eq!(talks.len(), 6);
    assert!(talks.iter().all(|talk| talk.duration > 0));
}
