//! Light/dark theme preference.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::error::{PortfolioError, PortfolioResult};
use crate::storage::PreferenceStore;

/// Storage key of the theme preference.
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Icon on the toggle button: the sun offers a way out of dark mode.
    pub fn toggle_icon(&self) -> &'static str {
        match self {
            Theme::Light => "🌙",
            Theme::Dark => "☀️",
        }
    }

    /// Class applied to the page root
    pub fn body_class(&self) -> &'static str {
        match self {
            Theme::Light => "",
            Theme::Dark => "dark-mode",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = PortfolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(PortfolioError::InvalidTheme(other.to_string())),
        }
    }
}

/// Current theme plus its persisted preference.
pub struct ThemeStore {
    store: Arc<dyn PreferenceStore>,
    current: Theme,
}

impl ThemeStore {
    /// Resolve the startup theme.
    ///
    /// A saved preference wins. Without one, the system preference decides
    /// and nothing is written, so later system changes are still followed.
    pub fn load(store: Arc<dyn PreferenceStore>, prefers_dark: bool) -> Self {
        let current = match Self::read_saved(store.as_ref()) {
            Ok(Some(theme)) => theme,
            Ok(None) => system_theme(prefers_dark),
            Err(e) => {
                tracing::warn!("Ignoring unreadable theme preference: {}", e);
                system_theme(prefers_dark)
            }
        };
        tracing::debug!(theme = %current, "Theme resolved");
        Self { store, current }
    }

    fn read_saved(store: &dyn PreferenceStore) -> PortfolioResult<Option<Theme>> {
        store
            .get(THEME_KEY)?
            .map(|value| value.parse::<Theme>())
            .transpose()
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// The persisted preference, if one has been written.
    pub fn saved(&self) -> PortfolioResult<Option<Theme>> {
        Self::read_saved(self.store.as_ref())
    }

    /// Set and persist `theme`. The in-memory value changes even if the
    /// write fails.
    pub fn set(&mut self, theme: Theme) -> PortfolioResult<()> {
        self.current = theme;
        self.store.set(THEME_KEY, theme.as_str())
    }

    /// Flip the theme and persist it.
    pub fn toggle(&mut self) -> PortfolioResult<Theme> {
        let next = self.current.toggled();
        self.set(next)?;
        tracing::info!(theme = %next, "Theme toggled");
        Ok(next)
    }

    /// Follow a system color-scheme change unless the user chose a theme.
    /// An unreadable preference counts as no choice, as in [`Self::load`].
    /// Returns whether the theme changed.
    pub fn system_changed(&mut self, prefers_dark: bool) -> bool {
        match self.saved() {
            Ok(Some(_)) => return false,
            Ok(None) => {}
            Err(e) => tracing::warn!("Ignoring unreadable theme preference: {}", e),
        }
        let theme = system_theme(prefers_dark);
        let changed = theme != self.current;
        self.current = theme;
        changed
    }
}

fn system_theme(prefers_dark: bool) -> Theme {
    if prefers_dark {
        Theme::Dark
    } else {
        Theme::Light
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn parse_and_display() {
        assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert_eq!(Theme::Light.to_string(), "light");
        assert!(matches!(
            "sepia".parse::<Theme>(),
            Err(PortfolioError::InvalidTheme(_))
        ));
    }

    #[test]
    fn system_preference_used_without_saved_value() {
        let store = Arc::new(MemoryStore::new());
        let themes = ThemeStore::load(store.clone(), true);
        assert_eq!(themes.current(), Theme::Dark);
        assert_eq!(store.get(THEME_KEY).unwrap(), None);
    }

    #[test]
    fn saved_value_wins() {
        let store = Arc::new(MemoryStore::new());
        store.set(THEME_KEY, "light").unwrap();
        let themes = ThemeStore::load(store, true);
        assert_eq!(themes.current(), Theme::Light);
    }

    #[test]
    fn corrupt_value_falls_back_to_system() {
        let store = Arc::new(MemoryStore::new());
        store.set(THEME_KEY, "purple").unwrap();
        let themes = ThemeStore::load(store, false);
        assert_eq!(themes.current(), Theme::Light);
    }

    #[test]
    fn toggle_twice_restores_preference() {
        let store = Arc::new(MemoryStore::new());
        store.set(THEME_KEY, "dark").unwrap();
        let mut themes = ThemeStore::load(store.clone(), false);

        assert_eq!(themes.toggle().unwrap(), Theme::Light);
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("light"));
        assert_eq!(themes.toggle().unwrap(), Theme::Dark);
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn system_change_ignored_after_explicit_choice() {
        let store = Arc::new(MemoryStore::new());
        let mut themes = ThemeStore::load(store, false);
        assert!(themes.system_changed(true));
        assert_eq!(themes.current(), Theme::Dark);

        themes.set(Theme::Light).unwrap();
        assert!(!themes.system_changed(true));
        assert_eq!(themes.current(), Theme::Light);
    }

    #[test]
    fn corrupt_preference_still_follows_system() {
        let store = Arc::new(MemoryStore::new());
        store.set(THEME_KEY, "purple").unwrap();
        let mut themes = ThemeStore::load(store, false);
        assert_eq!(themes.current(), Theme::Light);

        assert!(themes.system_changed(true));
        assert_eq!(themes.current(), Theme::Dark);
    }

    #[test]
    fn icons() {
        assert_eq!(Theme::Dark.toggle_icon(), "☀️");
        assert_eq!(Theme::Light.toggle_icon(), "🌙");
        assert_eq!(Theme::Dark.body_class(), "dark-mode");
    }
}
