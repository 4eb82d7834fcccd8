use super::*;

// =============================================================
// MemoryStore
// =============================================================

#[test]
fn get_returns_last_set_value() {
    let store = MemoryStore::default();
    store.set("tok-1");
    store.set("tok-2");
    assert_eq!(store.get(), Some("tok-2".to_owned()));
}

#[test]
fn get_after_clear_returns_none() {
    let store = MemoryStore::default();
    store.set("tok-1");
    store.clear();
    assert_eq!(store.get(), None);
}

#[test]
fn empty_store_returns_none() {
    let store = MemoryStore::default();
    assert_eq!(store.get(), None);
}

#[test]
fn set_after_clear_is_visible() {
    let store = MemoryStore::default();
    store.set("tok-1");
    store.clear();
    store.set("tok-3");
    assert_eq!(store.get(), Some("tok-3".to_owned()));
}

// =============================================================
// BrowserStore (non-hydrate builds fall back to a logged-out view)
// =============================================================

#[test]
fn browser_store_without_a_browser_reads_none() {
    let store = BrowserStore;
    store.set("ignored");
    assert_eq!(store.get(), None);
}
