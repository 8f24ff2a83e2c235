use super::content::{ScriptureBook, Story};
use super::preferences::Language;

/// Which list the home screen shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HomeTab {
    #[default]
    Stories,
    Bible,
}

/// All messages that can be sent to the application state.
/// Each widget callback sends one of these; the dispatch loop hands them to `AppState::handle`.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Startup,

    // Navigation
    SelectStory(&'static Story),
    SelectBook(&'static ScriptureBook),
    GoHome,
    /// Header back arrow: chapter grid from a chapter, home from anywhere else.
    Back,
    NavStories,
    OpenSettings,

    // Home
    SetHomeTab(HomeTab),
    SetSearch(String),

    // Story reader
    NextPage,
    PreviousPage,
    PlayAudio,

    // Scripture reader
    SelectChapter(u32),
    NextChapter,
    PreviousChapter,
    BackToChapters,
    CycleFontSize,

    // Preferences
    ToggleTheme,
    ToggleLanguage,
    SetLanguage(Language),

    // Share
    ShareApp,
    ShareCurrent,
}

/// One-shot notification shown to the user (a toast).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    StoryFinished,
    LinkCopied,
    AudioSoon,
}
