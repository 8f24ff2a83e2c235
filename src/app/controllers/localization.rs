use crate::app::controllers::theme::ThemeStore;
use crate::app::domain::Language;
use crate::app::infrastructure::error::UsageError;
use crate::app::infrastructure::storage::SharedPreferences;
use crate::app::services::i18n::Translation;

/// Active language and its translation table.
pub struct LocalizationStore {
    prefs: SharedPreferences,
    revision: u64,
}

impl LocalizationStore {
    pub fn new(prefs: SharedPreferences) -> Self {
        Self { prefs, revision: 0 }
    }

    pub fn language(&self) -> Language {
        self.prefs.borrow().get().language
    }

    pub fn t(&self) -> &'static Translation {
        Translation::for_language(self.language())
    }

    /// Switch language and persist the tag. Setting the current language
    /// again is harmless.
    pub fn set_language(&mut self, language: Language) {
        self.prefs.borrow_mut().update(|p| p.language = language);
        self.revision += 1;
        tracing::info!(language = language.tag(), "Language changed");
    }

    pub fn toggle_language(&mut self) -> Language {
        let next = self.language().other();
        self.set_language(next);
        next
    }

    /// Bumped on every change; views re-render when it moves.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

/// Capabilities handed down to views. A view asks its scope for the stores
/// it needs instead of reaching for a global.
#[derive(Clone, Copy, Default)]
pub struct Scope<'a> {
    localization: Option<&'a LocalizationStore>,
    theme: Option<&'a ThemeStore>,
}

impl<'a> Scope<'a> {
    pub fn new(localization: &'a LocalizationStore, theme: &'a ThemeStore) -> Self {
        Self::empty().with_localization(localization).with_theme(theme)
    }

    /// A scope providing nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_localization(mut self, store: &'a LocalizationStore) -> Self {
        self.localization = Some(store);
        self
    }

    pub fn with_theme(mut self, store: &'a ThemeStore) -> Self {
        self.theme = Some(store);
        self
    }

    pub fn try_localization(&self) -> Result<&'a LocalizationStore, UsageError> {
        self.localization.ok_or(UsageError::OutsideLanguageScope)
    }

    pub fn try_theme(&self) -> Result<&'a ThemeStore, UsageError> {
        self.theme.ok_or(UsageError::OutsideThemeScope)
    }

    /// # Panics
    ///
    /// Panics when the scope has no language store. That is a wiring bug,
    /// never a runtime condition.
    pub fn localization(&self) -> &'a LocalizationStore {
        match self.try_localization() {
            Ok(store) => store,
            Err(e) => panic!("{e}"),
        }
    }

    /// # Panics
    ///
    /// Panics when the scope has no theme store.
    pub fn theme(&self) -> &'a ThemeStore {
        match self.try_theme() {
            Ok(store) => store,
            Err(e) => panic!("{e}"),
        }
    }

    pub fn t(&self) -> &'static Translation {
        self.localization().t()
    }
}
