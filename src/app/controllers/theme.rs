use crate::app::domain::ThemeMode;
use crate::app::infrastructure::storage::SharedPreferences;

/// Colours the shell paints with, as RGB.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: (u8, u8, u8),
    pub surface: (u8, u8, u8),
    pub text: (u8, u8, u8),
    pub muted: (u8, u8, u8),
    pub primary: (u8, u8, u8),
    /// Story progress bar and "Next" button.
    pub accent: (u8, u8, u8),
    pub old_testament: (u8, u8, u8),
    pub new_testament: (u8, u8, u8),
}

impl Palette {
    pub fn for_theme(theme: ThemeMode) -> Palette {
        match theme {
            ThemeMode::Light => Palette {
                background: (248, 250, 252),
                surface: (255, 255, 255),
                text: (2, 6, 23),
                muted: (100, 116, 139),
                primary: (59, 130, 246),
                accent: (250, 204, 21),
                old_testament: (217, 119, 6),
                new_testament: (37, 99, 235),
            },
            ThemeMode::Dark => Palette {
                background: (2, 6, 23),
                surface: (15, 23, 42),
                text: (248, 250, 252),
                muted: (148, 163, 184),
                primary: (96, 165, 250),
                accent: (250, 204, 21),
                old_testament: (245, 158, 11),
                new_testament: (59, 130, 246),
            },
        }
    }
}

/// Active theme. Persisted through the shared preferences.
pub struct ThemeStore {
    prefs: SharedPreferences,
    theme: ThemeMode,
}

impl ThemeStore {
    /// `system_dark` decides the theme when the user never picked one.
    pub fn new(prefs: SharedPreferences, system_dark: bool) -> Self {
        let theme = prefs.borrow().get().resolved_theme(system_dark);
        Self { prefs, theme }
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    pub fn is_dark(&self) -> bool {
        self.theme == ThemeMode::Dark
    }

    pub fn set_theme(&mut self, theme: ThemeMode) {
        self.theme = theme;
        self.prefs.borrow_mut().update(|p| p.theme = Some(theme));
        tracing::info!(?theme, "Theme changed");
    }

    pub fn toggle(&mut self) -> ThemeMode {
        let next = self.theme.toggled();
        self.set_theme(next);
        next
    }

    pub fn palette(&self) -> Palette {
        Palette::for_theme(self.theme)
    }

    /// Status bar colour and whether it uses the light style.
    pub fn status_bar(&self) -> (&'static str, bool) {
        match self.theme {
            ThemeMode::Light => ("#ffffff", true),
            ThemeMode::Dark => ("#0f172a", false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::domain::AppPreferences;
    use crate::app::infrastructure::storage::{MemoryStore, Preferences};

    #[test]
    fn test_unset_theme_follows_system() {
        let prefs = Preferences::shared(Box::new(MemoryStore::default()));
        assert_eq!(ThemeStore::new(prefs.clone(), true).theme(), ThemeMode::Dark);
        assert_eq!(ThemeStore::new(prefs, false).theme(), ThemeMode::Light);
    }

    #[test]
    fn test_stored_theme_wins() {
        let memory = MemoryStore::with(AppPreferences {
            theme: Some(ThemeMode::Light),
            ..Default::default()
        });
        let store = ThemeStore::new(Preferences::shared(Box::new(memory)), true);
        assert!(!store.is_dark());
    }

    #[test]
    fn test_toggle_persists() {
        let memory = MemoryStore::default();
        let mut store = ThemeStore::new(Preferences::shared(Box::new(memory.clone())), false);
        assert_eq!(store.toggle(), ThemeMode::Dark);
        assert_eq!(memory.saved().unwrap().theme, Some(ThemeMode::Dark));
        assert_eq!(store.status_bar(), ("#0f172a", false));

        assert_eq!(store.toggle(), ThemeMode::Light);
        assert_eq!(memory.saved().unwrap().theme, Some(ThemeMode::Light));
        assert_eq!(store.status_bar(), ("#ffffff", true));
    }

    #[test]
    fn test_palettes_differ() {
        assert_ne!(
            Palette::for_theme(ThemeMode::Light),
            Palette::for_theme(ThemeMode::Dark)
        );
    }
}
