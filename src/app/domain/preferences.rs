use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Language {
    #[default]
    #[serde(rename = "am")]
    Am,
    #[serde(rename = "en")]
    En,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Am, Language::En];

    /// Short tag used in storage ("am" / "en").
    pub fn tag(self) -> &'static str {
        match self {
            Language::Am => "am",
            Language::En => "en",
        }
    }

    /// Name shown in the settings screen for the active language.
    pub fn display_name(self) -> &'static str {
        match self {
            Language::Am => "Amharic (አማርኛ)",
            Language::En => "English",
        }
    }

    pub fn other(self) -> Language {
        match self {
            Language::Am => Language::En,
            Language::En => Language::Am,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> ThemeMode {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            ThemeMode::Light => "Light theme",
            ThemeMode::Dark => "Dark theme",
        }
    }
}

/// Process-wide preferences, read once at startup and written back on change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AppPreferences {
    #[serde(default)]
    pub language: Language,

    /// `None` until the user picks a theme; the system preference decides then.
    #[serde(default)]
    pub theme: Option<ThemeMode>,
}

impl AppPreferences {
    /// Theme to use, falling back to the system dark-mode preference when unset.
    pub fn resolved_theme(&self, system_dark: bool) -> ThemeMode {
        self.theme.unwrap_or(if system_dark {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_preferences() {
        let prefs = AppPreferences::default();
        assert_eq!(prefs.language, Language::Am);
        assert_eq!(prefs.theme, None);
    }

    #[test]
    fn test_language_serializes_as_tag() {
        let prefs = AppPreferences {
            language: Language::En,
            ..Default::default()
        };
        let json = serde_json::to_string(&prefs).unwrap();
        assert!(json.contains("\"en\""));
    }

    #[test]
    fn test_partial_config() {
        let json = r#"{"theme": "Dark"}"#;
        let prefs: AppPreferences = serde_json::from_str(json).unwrap();
        assert_eq!(prefs.language, Language::Am);
        assert_eq!(prefs.theme, Some(ThemeMode::Dark));
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let prefs: AppPreferences = serde_json::from_str("{}").unwrap();
        assert_eq!(prefs, AppPreferences::default());
    }

    #[test]
    fn test_resolved_theme_follows_system_when_unset() {
        let prefs = AppPreferences::default();
        assert_eq!(prefs.resolved_theme(true), ThemeMode::Dark);
        assert_eq!(prefs.resolved_theme(false), ThemeMode::Light);

        let prefs = AppPreferences {
            theme: Some(ThemeMode::Light),
            ..Default::default()
        };
        assert_eq!(prefs.resolved_theme(true), ThemeMode::Light);
    }

    #[test]
    fn test_language_tags() {
        for lang in Language::ALL {
            let json = serde_json::to_string(&lang).unwrap();
            assert_eq!(json, format!("\"{}\"", lang.tag()));
        }
        assert_eq!(Language::Am.other(), Language::En);
        assert_eq!(Language::En.other(), Language::Am);
    }
}
