//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (Story, ScriptureBook, Preferences, Messages)
//! - `controllers/` - Stateful orchestration (navigation, readers, language, theme)
//! - `services/` - Pure operations (catalog, search filter, translations)
//! - `infrastructure/` - External integrations (preference storage, native shell, platform, error)
//! - `state.rs` - Main application coordinator

pub mod controllers;
pub mod domain;
pub mod infrastructure;
pub mod services;
pub mod state;

// Re-exports for convenient external access
pub use controllers::localization::{LocalizationStore, Scope};
pub use controllers::navigation::{NavItem, NavigationController, Screen};
pub use controllers::reader::{ChapterReader, FontSize, PageTurn, ReaderState, StoryReader};
pub use controllers::theme::{Palette, ThemeStore};
pub use domain::{
    AppPreferences, HomeTab, Language, Message, Notice, ScriptureBook, Story, Testament,
    ThemeMode, Verse,
};
pub use infrastructure::error::{AppError, Result, UsageError};
pub use infrastructure::native::{HeadlessShell, NativeShell, ShareOutcome, share_content};
pub use infrastructure::platform::detect_system_dark_mode;
pub use infrastructure::storage::{JsonFileStore, MemoryStore, PreferenceStore};
pub use services::i18n::Translation;
pub use state::AppState;
