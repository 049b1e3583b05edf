use super::*;
use crate::util::storage::MemoryStorage;

const KEY: &str = "scd-theme";

// =============================================================
// Theme
// =============================================================

#[test]
fn theme_default_is_light() {
    assert_eq!(Theme::default(), Theme::Light);
}

#[test]
fn theme_parse_accepts_known_values() {
    assert_eq!(Theme::parse("light"), Theme::Light);
    assert_eq!(Theme::parse("dark"), Theme::Dark);
}

#[test]
fn theme_parse_treats_unknown_as_default() {
    assert_eq!(Theme::parse("solarized"), Theme::Light);
    assert_eq!(Theme::parse(""), Theme::Light);
    assert_eq!(Theme::parse("DARK"), Theme::Light);
}

#[test]
fn theme_opposite_flips() {
    assert_eq!(Theme::Light.opposite(), Theme::Dark);
    assert_eq!(Theme::Dark.opposite(), Theme::Light);
}

// =============================================================
// ThemeStore
// =============================================================

#[test]
fn store_defaults_to_light_when_nothing_persisted() {
    let store = ThemeStore::init(MemoryStorage::new(), KEY);
    assert_eq!(store.active(), Theme::Light);
}

#[test]
fn store_reads_persisted_value_on_init() {
    let store = ThemeStore::init(MemoryStorage::new().with_item(KEY, "dark"), KEY);
    assert_eq!(store.active(), Theme::Dark);
}

#[test]
fn store_toggle_flips_and_persists() {
    let store = ThemeStore::init(MemoryStorage::new(), KEY);
    assert_eq!(store.toggle(), Theme::Dark);
    assert_eq!(store.storage.get(KEY).as_deref(), Some("dark"));
    assert_eq!(store.toggle(), Theme::Light);
    assert_eq!(store.storage.get(KEY).as_deref(), Some("light"));
}

#[test]
fn store_toggle_from_unrecognised_value_goes_dark() {
    let store = ThemeStore::init(MemoryStorage::new().with_item(KEY, "sepia"), KEY);
    assert_eq!(store.active(), Theme::Light);
    assert_eq!(store.toggle(), Theme::Dark);
}

#[test]
fn store_does_not_write_on_init() {
    let store = ThemeStore::init(MemoryStorage::new(), KEY);
    assert!(store.storage.get(KEY).is_none());
}
