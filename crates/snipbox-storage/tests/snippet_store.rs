//! Snippet store operations against in-memory and file backends.

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use snipbox_core::models::category::{Category, CategoryFilter};
use snipbox_core::models::snippet::{NewSnippet, Snippet};
use snipbox_storage::backend::KeyValueStore;
use snipbox_storage::file::FileStorage;
use snipbox_storage::memory::MemoryStorage;
use snipbox_storage::snippets::SnippetStore;

fn php(title: &str) -> NewSnippet {
    NewSnippet::new(title, "", Category::Php, "<?php echo 1;")
}

fn titles(snippets: &[Snippet]) -> Vec<&str> {
    snippets.iter().map(|s| s.title.as_str()).collect()
}

#[test]
fn load_all_of_empty_storage_is_empty() {
    let store = SnippetStore::new(MemoryStorage::new());
    assert!(store.load_all().is_empty());
    assert!(store.try_load_all().unwrap().is_empty());
}

#[test]
fn create_returns_input_fields_with_fresh_identity() {
    let store = SnippetStore::new(MemoryStorage::new());
    let input = NewSnippet::new("Reset", "zero margins", Category::Css, "* { margin: 0 }");

    let before = jiff::Timestamp::now();
    let created = store.create(input.clone());

    assert_eq!(created.title, input.title);
    assert_eq!(created.description, input.description);
    assert_eq!(created.category, input.category);
    assert_eq!(created.code, input.code);
    assert!(created.created_at >= before);
    assert!(!created.id.is_nil());
}

#[test]
fn ids_are_unique() {
    let store = SnippetStore::new(MemoryStorage::new());
    let ids: HashSet<_> = (0..50).map(|i| store.create(php(&i.to_string())).id).collect();
    assert_eq!(ids.len(), 50);
}

#[test]
fn created_snippet_is_first_on_reload() {
    let store = SnippetStore::new(MemoryStorage::new());
    store.create(php("older"));
    let newest = store.create(php("newer"));

    let loaded = store.load_all();
    assert_eq!(loaded.first(), Some(&newest));
}

#[test]
fn two_create_scenario() {
    let store = SnippetStore::new(MemoryStorage::new());

    store.create(NewSnippet::new("A", "", Category::Php, "<?php echo 1;"));
    let loaded = store.load_all();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].title, "A");

    let b = store.create(NewSnippet::new("B", "", Category::Css, ".x{}"));
    assert_eq!(titles(&store.load_all()), ["B", "A"]);

    assert_eq!(store.filter_by_category(CategoryFilter::Css), vec![b]);
    assert!(store.filter_by_category(CategoryFilter::Html).is_empty());
}

#[test]
fn filter_all_matches_load_all() {
    let store = SnippetStore::new(MemoryStorage::new());
    store.create(php("one"));
    store.create(NewSnippet::new("two", "", Category::Html, "<p>"));
    store.create(NewSnippet::new("three", "", Category::Css, "a{}"));

    assert_eq!(store.filter_by_category(CategoryFilter::All), store.load_all());
}

#[test]
fn filter_keeps_only_matching_category_in_stored_order() {
    let store = SnippetStore::new(MemoryStorage::new());
    for (title, category) in [
        ("p1", Category::Php),
        ("h1", Category::Html),
        ("p2", Category::Php),
        ("c1", Category::Css),
        ("p3", Category::Php),
    ] {
        store.create(NewSnippet::new(title, "", category, "code"));
    }

    for category in Category::ALL {
        let filtered = store.filter_by_category(category.into());
        assert!(filtered.iter().all(|s| s.category == category));

        let expected = store
            .load_all()
            .into_iter()
            .filter(|s| s.category == category)
            .count();
        assert_eq!(filtered.len(), expected);
    }

    assert_eq!(
        titles(&store.filter_by_category(CategoryFilter::Php)),
        ["p3", "p2", "p1"]
    );
}

#[test]
fn persist_then_load_round_trips() {
    let source = SnippetStore::new(MemoryStorage::new());
    source.create(php("first"));
    source.create(NewSnippet::new("second", "with text", Category::Html, "<b>hi</b>"));
    let snippets = source.load_all();

    let target = SnippetStore::new(MemoryStorage::new());
    target.persist(&snippets);
    assert_eq!(target.load_all(), snippets);
}

#[test]
fn persist_replaces_prior_collection() {
    let store = SnippetStore::new(MemoryStorage::new());
    store.create(php("gone"));
    store.persist(&[]);
    assert!(store.load_all().is_empty());
}

#[test]
fn corrupt_payload_loads_as_empty() {
    let storage = MemoryStorage::new();
    storage.insert("snippets_data", r#"{"not":"a list"}"#);
    let store = SnippetStore::new(storage);

    assert!(store.load_all().is_empty());
    assert!(store.try_load_all().is_err());
}

#[test]
fn record_with_unknown_category_invalidates_collection() {
    let storage = MemoryStorage::new();
    storage.insert(
        "snippets_data",
        r#"[{"id":"6f1c2a36-3a0e-4d8b-9a55-0f1e8d7c2b11","title":"x","description":"",
            "category":"JS","code":"1","createdAt":"2024-01-01T00:00:00Z"}]"#,
    );
    let store = SnippetStore::new(storage);
    assert!(store.load_all().is_empty());
}

#[test]
fn create_over_corrupt_payload_starts_fresh() {
    let storage = MemoryStorage::new();
    storage.insert("snippets_data", "garbage");
    let store = SnippetStore::new(storage);

    let created = store.create(php("fresh"));
    assert_eq!(store.load_all(), vec![created]);
}

#[test]
fn write_failure_still_returns_snippet() {
    let store = SnippetStore::new(MemoryStorage::with_quota(16));

    let created = store.create(php("too big to fit"));
    assert_eq!(created.title, "too big to fit");
    assert!(store.load_all().is_empty());
    assert!(store.try_persist(&[created]).is_err());
}

#[test]
fn unavailable_storage_degrades_to_empty() {
    let store = SnippetStore::new(MemoryStorage::unavailable());

    let created = store.create(php("lost"));
    assert_eq!(created.title, "lost");
    assert!(store.load_all().is_empty());
    assert!(store.filter_by_category(CategoryFilter::Php).is_empty());
}

#[test]
fn custom_key_is_isolated_from_default() {
    let storage = Arc::new(MemoryStorage::new());
    let default = SnippetStore::new(storage.clone());
    let other = SnippetStore::with_key(storage.clone(), "other_snippets");

    other.create(php("elsewhere"));
    assert!(default.load_all().is_empty());
    assert_eq!(other.load_all().len(), 1);
    assert!(storage.get("other_snippets").unwrap().is_some());
}

#[test]
fn concurrent_creates_on_one_store_are_all_kept() {
    let store = Arc::new(SnippetStore::new(MemoryStorage::new()));

    let handles: Vec<_> = (0..8)
        .map(|t| {
            let store = store.clone();
            thread::spawn(move || {
                for i in 0..10 {
                    store.create(php(&format!("{t}-{i}")));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let loaded = store.load_all();
    assert_eq!(loaded.len(), 80);
    let ids: HashSet<_> = loaded.iter().map(|s| s.id).collect();
    assert_eq!(ids.len(), 80);
    assert!(
        loaded.windows(2).all(|pair| pair[0].created_at >= pair[1].created_at),
        "stored order must be newest first by createdAt"
    );
}

#[test]
fn file_backed_store_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();

    let created = {
        let store = SnippetStore::new(FileStorage::new(dir.path()));
        store.create(NewSnippet::new("kept", "on disk", Category::Html, "<hr>"))
    };

    let reopened = SnippetStore::new(FileStorage::new(dir.path()));
    assert_eq!(reopened.load_all(), vec![created]);
}

#[test]
fn reads_records_written_by_browser_front_end() {
    let storage = MemoryStorage::new();
    storage.insert(
        "snippets_data",
        r#"[{"id":"6f1c2a36-3a0e-4d8b-9a55-0f1e8d7c2b11","title":"Echo","description":"",
            "category":"PHP","code":"<?php echo 1;","createdAt":"2024-03-05T14:07:00.123Z"}]"#,
    );
    let store = SnippetStore::new(storage);

    let loaded = store.load_all();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].title, "Echo");
    assert_eq!(loaded[0].category, Category::Php);
}
