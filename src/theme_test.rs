use std::collections::HashMap;

use super::*;

#[derive(Default)]
struct MemoryStore {
    items: HashMap<String, String>,
    writes: usize,
}

impl MemoryStore {
    fn with(key: &str, value: &str) -> Self {
        let mut store = Self::default();
        store.items.insert(key.to_owned(), value.to_owned());
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), PageError> {
        self.writes += 1;
        self.items.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

struct BrokenStore;

impl PreferenceStore for BrokenStore {
    fn load(&self, _key: &str) -> Option<String> {
        None
    }

    fn save(&mut self, _key: &str, _value: &str) -> Result<(), PageError> {
        Err(PageError::Js { context: "set_item", message: "QuotaExceededError".to_owned() })
    }
}

const KEY: &str = "preferred-theme";

// =============================================================
// preferred_theme
// =============================================================

#[test]
fn valid_stored_value_wins_over_os_preference() {
    for prefers_dark in [false, true] {
        assert_eq!(preferred_theme(Some("light"), prefers_dark), Theme::Light);
        assert_eq!(preferred_theme(Some("dark"), prefers_dark), Theme::Dark);
    }
}

#[test]
fn absent_or_invalid_value_follows_os_preference() {
    for stored in [None, Some(""), Some("Dark"), Some("sepia"), Some(" light")] {
        assert_eq!(preferred_theme(stored, true), Theme::Dark, "stored={stored:?}");
        assert_eq!(preferred_theme(stored, false), Theme::Light, "stored={stored:?}");
    }
}

// =============================================================
// Theme / toggle copy
// =============================================================

#[test]
fn theme_literals() {
    assert_eq!(Theme::Light.as_str(), "light");
    assert_eq!(Theme::Dark.as_str(), "dark");
    assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
    assert_eq!(Theme::parse("DARK"), None);
}

#[test]
fn toggled_flips() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
}

#[test]
fn toggle_copy_names_the_other_mode() {
    let dark = toggle_copy(Theme::Dark);
    assert_eq!(dark.label, "Light mode");
    assert_eq!(dark.icon, SUN_ICON);

    let light = toggle_copy(Theme::Light);
    assert_eq!(light.label, "Dark mode");
    assert_eq!(light.icon, MOON_ICON);
}

// =============================================================
// ThemeManager
// =============================================================

#[test]
fn manager_reads_stored_theme() {
    let manager = ThemeManager::new(MemoryStore::with(KEY, "dark"), KEY, false);
    assert_eq!(manager.current(), Theme::Dark);
}

#[test]
fn manager_falls_back_to_os_preference() {
    let manager = ThemeManager::new(MemoryStore::default(), KEY, true);
    assert_eq!(manager.current(), Theme::Dark);
}

#[test]
fn apply_persists_and_returns_copy() {
    let mut manager = ThemeManager::new(MemoryStore::default(), KEY, false);
    let copy = manager.apply(Theme::Dark);
    assert_eq!(copy.label, "Light mode");
    assert_eq!(manager.current(), Theme::Dark);
    assert_eq!(manager.store().load(KEY).as_deref(), Some("dark"));
}

#[test]
fn apply_is_idempotent() {
    let mut manager = ThemeManager::new(MemoryStore::default(), KEY, false);
    let first = manager.apply(Theme::Light);
    let second = manager.apply(Theme::Light);
    assert_eq!(first, second);
    assert_eq!(manager.store().load(KEY).as_deref(), Some("light"));
    assert_eq!(manager.store().writes, 2);
}

#[test]
fn toggle_alternates_and_label_is_always_opposite() {
    let mut manager = ThemeManager::new(MemoryStore::with(KEY, "light"), KEY, false);
    for _ in 0..4 {
        let (theme, copy) = manager.toggle();
        assert_eq!(manager.current(), theme);
        assert_eq!(copy, toggle_copy(theme));
        let expected = match theme {
            Theme::Dark => "Light mode",
            Theme::Light => "Dark mode",
        };
        assert_eq!(copy.label, expected);
        assert_eq!(manager.store().load(KEY).as_deref(), Some(theme.as_str()));
    }
}

#[test]
fn storage_failure_is_swallowed() {
    let mut manager = ThemeManager::new(BrokenStore, KEY, true);
    assert_eq!(manager.current(), Theme::Dark);
    let (theme, copy) = manager.toggle();
    assert_eq!(theme, Theme::Light);
    assert_eq!(copy.label, "Dark mode");
    assert_eq!(manager.current(), Theme::Light);
}
