use tempfile::tempdir;

use super::*;
use crate::store::{JsonFileStore, KeyValueStore, MemoryStore};

fn quotes(items: &[&str]) -> Vec<String> {
	items.iter().map(|item| item.to_string()).collect()
}

fn text_source(text: &str) -> DefaultSource {
	DefaultSource::Text(text.to_string())
}

#[test]
fn first_start_uses_the_default_source() {
	let store = MemoryStore::new();
	let state = on_init(&store, &text_source("1. \"Hi\" - A\n\n2. \"Bye\" - B\n"));

	assert_eq!(state.quotes(), quotes(&["\"Hi\" - A", "\"Bye\" - B"]));
	assert_eq!(state.cursor(), Some(0));
}

#[test]
fn exit_then_init_restores_collection_and_cursor() {
	let mut store = MemoryStore::new();
	let state = BrowserState::new(quotes(&["A", "B", "C"]), 1);

	on_exit(&mut store, &state).unwrap();
	let restored = on_init(&store, &text_source("1. Other\n"));

	assert_eq!(restored.quotes(), quotes(&["A", "B", "C"]));
	assert_eq!(restored.cursor(), Some(1));
	assert_eq!(store.commits(), 1);
}

#[test]
fn pause_keeps_position_but_not_deletions() {
	let source = text_source("A\nB\nC\n");
	let mut store = MemoryStore::new();

	let mut state = on_init(&store, &source);
	state.next();
	state.next();
	state.delete_current();
	assert_eq!(state.cursor(), Some(1));

	on_pause(&mut store, &state).unwrap();
	assert!(store.get(QUOTES_KEY).is_none());

	let restored = on_init(&store, &source);
	assert_eq!(restored.quotes(), quotes(&["A", "B", "C"]));
	assert_eq!(restored.cursor(), Some(1));
}

#[test]
fn pause_leaves_an_earlier_saved_collection_alone() {
	let mut store = MemoryStore::new();
	on_exit(&mut store, &BrowserState::new(quotes(&["X", "Y"]), 0)).unwrap();

	let mut state = on_init(&store, &DefaultSource::Bundled);
	state.next();
	state.delete_current();
	on_pause(&mut store, &state).unwrap();

	let restored = on_init(&store, &DefaultSource::Bundled);
	assert_eq!(restored.quotes(), quotes(&["X", "Y"]));
	assert_eq!(restored.cursor(), Some(0));
}

#[test]
fn malformed_saved_quotes_fall_back_to_default_source() {
	let mut store = MemoryStore::new();
	store.put_string(QUOTES_KEY, "{\"not\": \"a list\"}".to_string());
	store.put_int(INDEX_KEY, 1);

	let state = on_init(&store, &text_source("A\nB\n"));
	assert_eq!(state.quotes(), quotes(&["A", "B"]));
	assert_eq!(state.cursor(), Some(1));
}

#[test]
fn saved_quotes_of_the_wrong_type_fall_back() {
	let mut store = MemoryStore::new();
	store.put_int(QUOTES_KEY, 7);

	let state = on_init(&store, &text_source("A\n"));
	assert_eq!(state.quotes(), quotes(&["A"]));
}

#[test]
fn empty_saved_list_counts_as_absent() {
	let mut store = MemoryStore::new();
	on_exit(&mut store, &BrowserState::default()).unwrap();
	assert_eq!(store.get_string(QUOTES_KEY).unwrap().as_deref(), Some("[]"));
	assert_eq!(store.get_int(INDEX_KEY).unwrap(), Some(0));

	let state = on_init(&store, &text_source("A\nB\n"));
	assert_eq!(state.quotes(), quotes(&["A", "B"]));
}

#[test]
fn out_of_range_saved_cursor_starts_at_the_first_quote() {
	let mut store = MemoryStore::new();
	store.put_int(INDEX_KEY, 10);
	assert_eq!(on_init(&store, &text_source("A\nB\n")).cursor(), Some(0));

	store.put_int(INDEX_KEY, -3);
	assert_eq!(on_init(&store, &text_source("A\nB\n")).cursor(), Some(0));
}

#[test]
fn saved_cursor_of_the_wrong_type_is_ignored() {
	let mut store = MemoryStore::new();
	store.put_string(INDEX_KEY, "two".to_string());

	assert_eq!(on_init(&store, &text_source("A\nB\nC\n")).cursor(), Some(0));
}

#[test]
fn unreadable_default_source_gives_the_empty_state() {
	let dir = tempdir().unwrap();
	let source = DefaultSource::File(dir.path().join("missing.txt"));

	let state = on_init(&MemoryStore::new(), &source);
	assert!(state.is_empty());
	assert!(display_state(&state).is_empty());
}

#[test]
fn reset_forgets_everything() {
	let mut store = MemoryStore::new();
	on_exit(&mut store, &BrowserState::new(quotes(&["A", "B"]), 1)).unwrap();

	lifecycle::reset(&mut store).unwrap();
	assert!(store.is_empty());

	let state = on_init(&store, &text_source("Z\n"));
	assert_eq!(state.quotes(), quotes(&["Z"]));
	assert_eq!(state.cursor(), Some(0));
}

#[test]
fn quote_browser_round_trips_through_a_state_file() {
	let dir = tempdir().unwrap();
	let path = dir.path().join("state.json");
	let source = text_source("A\nB\nC\nD\n");

	let mut browser = QuoteBrowser::open(Box::new(JsonFileStore::open(&path).unwrap()), &source);
	browser.next();
	browser.next();
	assert_eq!(browser.delete_current().as_deref(), Some("C"));
	browser.exit().unwrap();

	let reopened = QuoteBrowser::open(Box::new(JsonFileStore::open(&path).unwrap()), &source);
	assert_eq!(reopened.state().quotes(), quotes(&["A", "B", "D"]));
	assert_eq!(reopened.state().cursor(), Some(2));
	assert_eq!(reopened.display().counter().map(|c| c.to_string()).as_deref(), Some("3 / 3"));
}

#[test]
fn quote_browser_pause_then_restart() {
	let source = text_source("A\nB\nC\n");
	let mut browser = QuoteBrowser::open(Box::new(MemoryStore::new()), &source);
	browser.next();
	browser.delete_current();
	browser.pause().unwrap();

	let restarted = QuoteBrowser::open(browser.into_store(), &source);
	assert_eq!(restarted.state().quotes(), quotes(&["A", "B", "C"]));
	assert_eq!(restarted.state().cursor(), Some(1));
}

#[test]
fn deleting_everything_disables_all_actions() {
	let mut browser = QuoteBrowser::open(Box::new(MemoryStore::new()), &text_source("A\nB\n"));
	browser.delete_current();
	browser.delete_current();

	assert!(browser.is_empty());
	assert!(!browser.next());
	assert!(!browser.previous());
	assert_eq!(browser.delete_current(), None);
	assert_eq!(browser.display().actions, ActionAvailability::default());
}
