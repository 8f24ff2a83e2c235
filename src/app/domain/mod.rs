//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - Stories, scripture books and verses
//! - Persisted preferences (language, theme)
//! - Message and notice types for the event system

pub mod content;
pub mod messages;
pub mod preferences;

pub use content::{ScriptureBook, Story, Testament, Verse};
pub use messages::{HomeTab, Message, Notice};
pub use preferences::{AppPreferences, Language, ThemeMode};
