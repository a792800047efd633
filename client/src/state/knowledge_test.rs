use super::*;

fn category(id: i64, name: &str) -> Category {
    Category { id, name: name.to_owned(), description: None, created_at: None, updated_at: None }
}

fn entry(id: i64, title: &str) -> KnowledgeEntry {
    KnowledgeEntry {
        id,
        title: title.to_owned(),
        category: Some(1),
        category_name: "Net".to_owned(),
        symptoms: "s".to_owned(),
        solution: "x".to_owned(),
        created_at: None,
        updated_at: None,
    }
}

#[test]
fn knowledge_state_defaults_empty() {
    let state = KnowledgeState::default();
    assert!(state.categories.is_empty());
    assert!(state.entries.is_empty());
    assert!(state.load_errors().is_empty());
    assert_eq!(state.category_filter, None);
    assert_eq!(state.categories_seq, 0);
    assert_eq!(state.entries_seq, 0);
}

#[test]
fn apply_categories_replaces_list_in_response_order() {
    let mut state = KnowledgeState { categories: vec![category(1, "old")], categories_loading: true, ..KnowledgeState::default() };
    let alert = state.apply_categories(0, Ok(vec![category(3, "c"), category(1, "a"), category(2, "b")]));
    assert_eq!(alert, None);
    assert!(!state.categories_loading);
    let ids: Vec<i64> = state.categories.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![3, 1, 2]);
}

#[test]
fn apply_categories_failure_keeps_previous_list() {
    let mut state = KnowledgeState { categories: vec![category(1, "old")], ..KnowledgeState::default() };
    let alert = state.apply_categories(0, Err("down".to_owned()));
    assert_eq!(alert.as_deref(), Some("Load failed: down"));
    assert_eq!(state.categories_error.as_deref(), Some("Load failed: down"));
    assert_eq!(state.categories.len(), 1);
}

#[test]
fn apply_entries_empty_list_clears_entries() {
    let mut state = KnowledgeState { entries: vec![entry(1, "a")], ..KnowledgeState::default() };
    assert_eq!(state.apply_entries(0, Ok(Vec::new())), None);
    assert!(state.entries.is_empty());
}

#[test]
fn successful_load_clears_its_own_error() {
    let mut state = KnowledgeState { entries_error: Some("Load failed: x".to_owned()), ..KnowledgeState::default() };
    state.apply_entries(0, Ok(vec![entry(1, "a")]));
    assert!(state.entries_error.is_none());
}

#[test]
fn knowledge_success_keeps_category_error_visible() {
    let mut state = KnowledgeState::default();
    state.apply_categories(0, Err("down".to_owned()));
    state.apply_entries(0, Ok(vec![entry(1, "a")]));
    assert_eq!(state.load_errors(), vec!["Load failed: down".to_owned()]);
}

#[test]
fn load_errors_lists_categories_first() {
    let mut state = KnowledgeState::default();
    state.apply_entries(0, Err("kb".to_owned()));
    state.apply_categories(0, Err("cat".to_owned()));
    assert_eq!(state.load_errors(), vec!["Load failed: cat".to_owned(), "Load failed: kb".to_owned()]);
}

#[test]
fn late_response_for_previous_filter_is_dropped() {
    let mut state = KnowledgeState::default();
    state.set_category_filter(Some(1));
    let first = state.entries_seq;
    state.set_category_filter(Some(2));
    let second = state.entries_seq;
    state.entries_loading = true;

    assert_eq!(state.apply_entries(second, Ok(vec![entry(20, "cat2")])), None);
    assert_eq!(state.apply_entries(first, Ok(vec![entry(10, "cat1")])), None);

    assert_eq!(state.category_filter, Some(2));
    let ids: Vec<i64> = state.entries.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![20]);
    assert!(!state.entries_loading);
}

#[test]
fn stale_failure_neither_alerts_nor_marks_error() {
    let mut state = KnowledgeState { entries_seq: 3, entries_loading: true, ..KnowledgeState::default() };
    assert_eq!(state.apply_entries(2, Err("timeout".to_owned())), None);
    assert!(state.entries_error.is_none());
    assert!(state.entries_loading);
}

#[test]
fn stale_category_response_is_dropped() {
    let mut state = KnowledgeState { categories: vec![category(1, "current")], ..KnowledgeState::default() };
    state.request_categories();
    assert_eq!(state.apply_categories(0, Ok(vec![category(9, "old")])), None);
    assert_eq!(state.categories[0].id, 1);
}

#[test]
fn set_category_filter_requests_reload_only_on_change() {
    let mut state = KnowledgeState::default();
    assert!(state.set_category_filter(Some(2)));
    assert_eq!(state.entries_seq, 1);
    assert!(!state.set_category_filter(Some(2)));
    assert_eq!(state.entries_seq, 1);
    assert!(state.set_category_filter(None));
    assert_eq!(state.entries_seq, 2);
}

#[test]
fn request_counters_wrap() {
    let mut state = KnowledgeState { categories_seq: u64::MAX, ..KnowledgeState::default() };
    state.request_categories();
    assert_eq!(state.categories_seq, 0);
}
