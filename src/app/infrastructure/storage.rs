use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;

use crate::app::domain::AppPreferences;
use crate::app::infrastructure::error::Result;

/// Persistent key-value storage for the preferences. Synchronous from the core's view.
pub trait PreferenceStore {
    /// Read stored preferences. Missing or unreadable storage yields defaults.
    fn load(&mut self) -> AppPreferences;

    fn save(&mut self, prefs: &AppPreferences) -> Result<()>;
}

/// Preferences stored as pretty JSON in the user's config directory.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store at the platform config path.
    pub fn at_default_path() -> Self {
        Self::new(Self::get_config_path())
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Get config file path (cross-platform)
    pub fn get_config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("kids-bible");
        path.push("preferences.json");
        path
    }
}

impl PreferenceStore for JsonFileStore {
    fn load(&mut self) -> AppPreferences {
        match fs::read_to_string(&self.path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(prefs) => prefs,
                Err(e) => {
                    tracing::warn!(path = %self.path.display(), "Failed to parse preferences: {e}. Using defaults.");
                    AppPreferences::default()
                }
            },
            Err(_) => {
                // File doesn't exist yet
                let default = AppPreferences::default();
                if let Err(e) = self.save(&default) {
                    tracing::debug!("Could not write default preferences: {e}");
                }
                default
            }
        }
    }

    fn save(&mut self, prefs: &AppPreferences) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(prefs)?;
        fs::write(&self.path, json)?;

        Ok(())
    }
}

/// In-memory store. Clones share the same slot, so a test can keep a handle
/// and observe what the application persisted.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    saved: Rc<RefCell<Option<AppPreferences>>>,
}

impl MemoryStore {
    pub fn with(prefs: AppPreferences) -> Self {
        Self {
            saved: Rc::new(RefCell::new(Some(prefs))),
        }
    }

    /// Last persisted value, `None` if nothing was ever written.
    pub fn saved(&self) -> Option<AppPreferences> {
        self.saved.borrow().clone()
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&mut self) -> AppPreferences {
        self.saved().unwrap_or_default()
    }

    fn save(&mut self, prefs: &AppPreferences) -> Result<()> {
        *self.saved.borrow_mut() = Some(prefs.clone());
        Ok(())
    }
}

/// Current preferences plus the store they are written back to.
pub struct Preferences {
    current: AppPreferences,
    store: Box<dyn PreferenceStore>,
}

/// Shared between the language and theme stores; only the UI thread touches it.
pub type SharedPreferences = Rc<RefCell<Preferences>>;

impl Preferences {
    /// Read the store once.
    pub fn load(mut store: Box<dyn PreferenceStore>) -> Self {
        let current = store.load();
        tracing::debug!(language = current.language.tag(), theme = ?current.theme, "Loaded preferences");
        Self { current, store }
    }

    pub fn shared(store: Box<dyn PreferenceStore>) -> SharedPreferences {
        Rc::new(RefCell::new(Self::load(store)))
    }

    pub fn get(&self) -> &AppPreferences {
        &self.current
    }

    /// Apply a change and write it back synchronously. A write failure is
    /// logged; the in-memory value still changes.
    pub fn update(&mut self, change: impl FnOnce(&mut AppPreferences)) {
        change(&mut self.current);
        if let Err(e) = self.store.save(&self.current) {
            tracing::warn!("Failed to persist preferences: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::domain::{Language, ThemeMode};

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("preferences.json");
        let mut store = JsonFileStore::new(path.clone());

        let prefs = AppPreferences {
            language: Language::En,
            theme: Some(ThemeMode::Dark),
        };
        store.save(&prefs).unwrap();
        assert!(path.exists());

        let mut reopened = JsonFileStore::new(path);
        assert_eq!(reopened.load(), prefs);
    }

    #[test]
    fn test_missing_file_yields_defaults_and_writes_them() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        let mut store = JsonFileStore::new(path.clone());

        assert_eq!(store.load(), AppPreferences::default());
        assert!(path.exists());
    }

    #[test]
    fn test_corrupt_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        fs::write(&path, "{ not json").unwrap();

        let mut store = JsonFileStore::new(path);
        assert_eq!(store.load(), AppPreferences::default());
    }

    #[test]
    fn test_default_path_ends_with_app_dir() {
        let path = JsonFileStore::get_config_path();
        assert!(path.ends_with("kids-bible/preferences.json"));
    }

    #[test]
    fn test_update_writes_through() {
        let memory = MemoryStore::default();
        let mut prefs = Preferences::load(Box::new(memory.clone()));
        assert_eq!(memory.saved(), None);

        prefs.update(|p| p.language = Language::En);
        assert_eq!(prefs.get().language, Language::En);
        assert_eq!(memory.saved().unwrap().language, Language::En);
    }

    struct FailingStore;

    impl PreferenceStore for FailingStore {
        fn load(&mut self) -> AppPreferences {
            AppPreferences::default()
        }

        fn save(&mut self, _prefs: &AppPreferences) -> Result<()> {
            Err(std::io::Error::other("disk full").into())
        }
    }

    #[test]
    fn test_update_survives_write_failure() {
        let mut prefs = Preferences::load(Box::new(FailingStore));
        prefs.update(|p| p.theme = Some(ThemeMode::Dark));
        assert_eq!(prefs.get().theme, Some(ThemeMode::Dark));
    }
}
