// Skip-intro persistence.

#![allow(dead_code)]
include!("support/core_tree.rs");

use crate::core::prefs::*;

#[test]
fn empty_store_shows_intro() {
    let store = MemoryStore::new();
    assert_eq!(load_intro_behavior(&store), IntroBehavior::Show);
}

#[test]
fn skipping_is_remembered() {
    let mut store = MemoryStore::new();
    mark_skipped(&mut store);
    assert_eq!(store.get(SKIP_INTRO_KEY).as_deref(), Some("1"));
    assert_eq!(load_intro_behavior(&store), IntroBehavior::Skip);
}

#[test]
fn only_exact_value_means_skip() {
    for junk in ["0", "true", "", " 1", "11"] {
        let mut store = MemoryStore::new();
        store.set(SKIP_INTRO_KEY, junk).unwrap();
        assert_eq!(load_intro_behavior(&store), IntroBehavior::Show, "{:?}", junk);
    }
}

#[test]
fn rejected_write_is_absorbed() {
    let mut store = MemoryStore::read_only();
    mark_skipped(&mut store);
    assert_eq!(load_intro_behavior(&store), IntroBehavior::Show);
    assert_eq!(
        store.set("k", "v"),
        Err(StoreError::WriteRejected("k".to_string()))
    );
}

#[test]
fn store_errors_render_readably() {
    assert_eq!(StoreError::Unavailable.to_string(), "storage unavailable");
    assert_eq!(
        StoreError::WriteRejected("quota".into()).to_string(),
        "storage write rejected: quota"
    );
}
