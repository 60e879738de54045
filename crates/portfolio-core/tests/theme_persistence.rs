//! Theme preference persisted through redb.

use std::sync::Arc;

use portfolio_core::{PreferenceStore, Storage, Theme, ThemeStore};
use tempfile::TempDir;

#[test]
fn toggle_twice_round_trips_on_disk() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("preferences.redb");
    let storage = Arc::new(Storage::new(&path).unwrap());
    storage.set("theme", "dark").unwrap();

    let mut themes = ThemeStore::load(storage.clone(), false);
    let original = themes.saved().unwrap();
    assert_eq!(original, Some(Theme::Dark));

    themes.toggle().unwrap();
    assert_eq!(themes.saved().unwrap(), Some(Theme::Light));
    themes.toggle().unwrap();
    assert_eq!(themes.saved().unwrap(), original);
}

#[test]
fn preference_survives_restart() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("preferences.redb");

    {
        let storage = Arc::new(Storage::new(&path).unwrap());
        let mut themes = ThemeStore::load(storage, false);
        assert_eq!(themes.current(), Theme::Light);
        themes.toggle().unwrap();
    }

    let storage = Arc::new(Storage::new(&path).unwrap());
    let themes = ThemeStore::load(storage, false);
    assert_eq!(themes.current(), Theme::Dark);
}

#[test]
fn system_preference_is_not_persisted() {
    let temp = TempDir::new().unwrap();
    let storage = Arc::new(Storage::new(temp.path().join("p.redb")).unwrap());
    let themes = ThemeStore::load(storage.clone(), true);
    assert_eq!(themes.current(), Theme::Dark);
    assert_eq!(storage.get("theme").unwrap(), None);
}
