use super::*;

#[test]
fn memory_storage_starts_empty() {
    let storage = MemoryStorage::new();
    assert!(storage.get("k").is_none());
}

#[test]
fn memory_storage_overwrites_values() {
    let storage = MemoryStorage::new().with_item("k", "one");
    storage.set("k", "two");
    assert_eq!(storage.get("k").as_deref(), Some("two"));
}

#[test]
fn boxed_storage_delegates() {
    let storage: Box<dyn PreferenceStorage> = Box::new(MemoryStorage::new());
    storage.set("theme", "dark");
    assert_eq!(storage.get("theme").as_deref(), Some("dark"));
}

#[cfg(not(feature = "csr"))]
#[test]
fn browser_storage_is_inert_outside_browser() {
    assert!(!BrowserStorage::is_available());
    BrowserStorage.set("k", "v");
    assert!(BrowserStorage.get("k").is_none());
}
