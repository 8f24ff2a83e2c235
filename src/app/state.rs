use std::collections::VecDeque;

use crate::app::controllers::localization::{LocalizationStore, Scope};
use crate::app::controllers::navigation::NavigationController;
use crate::app::controllers::reader::PageTurn;
use crate::app::controllers::theme::ThemeStore;
use crate::app::domain::{HomeTab, Message, Notice, ScriptureBook, Story, Testament};
use crate::app::infrastructure::native::{
    self, APP_SHARE_TEXT, APP_SHARE_TITLE, NativeShell, ShareOutcome,
};
use crate::app::infrastructure::storage::{PreferenceStore, Preferences};
use crate::app::services::catalog;
use crate::app::services::filter::{books_by_testament, filter_books, filter_stories};
use crate::app::services::i18n::Translation;

/// Characters of the first page quoted when a story is shared.
const SHARE_EXCERPT_CHARS: usize = 100;

/// Owns every piece of mutable state. Lives on the UI thread and is the only
/// writer; the shell feeds it one `Message` at a time.
pub struct AppState {
    pub navigation: NavigationController,
    pub localization: LocalizationStore,
    pub theme: ThemeStore,
    pub home_tab: HomeTab,
    pub search_query: String,
    shell: Box<dyn NativeShell>,
    notices: VecDeque<Notice>,
}

impl AppState {
    pub fn new(
        store: Box<dyn PreferenceStore>,
        shell: Box<dyn NativeShell>,
        system_dark: bool,
    ) -> Self {
        let prefs = Preferences::shared(store);
        Self {
            navigation: NavigationController::new(),
            localization: LocalizationStore::new(prefs.clone()),
            theme: ThemeStore::new(prefs, system_dark),
            home_tab: HomeTab::default(),
            search_query: String::new(),
            shell,
            notices: VecDeque::new(),
        }
    }

    /// Capabilities for views.
    pub fn scope(&self) -> Scope<'_> {
        Scope::new(&self.localization, &self.theme)
    }

    pub fn t(&self) -> &'static Translation {
        self.localization.t()
    }

    pub fn handle(&mut self, msg: Message) {
        tracing::trace!(?msg, "Handling message");
        match msg {
            Message::Startup => self.startup(),

            Message::SelectStory(story) => {
                self.reset_home();
                self.navigation.select_story(story);
            }
            Message::SelectBook(book) => {
                self.reset_home();
                self.navigation.select_book(book);
            }
            Message::GoHome => self.navigation.go_home(),
            Message::Back => self.back(),
            Message::NavStories => self.navigation.nav_stories(),
            Message::OpenSettings => {
                self.reset_home();
                self.navigation.go_settings();
            }

            Message::SetHomeTab(tab) => self.home_tab = tab,
            Message::SetSearch(query) => self.search_query = query,

            Message::NextPage => self.next_page(),
            Message::PreviousPage => {
                if let Some(reader) = self.navigation.story_reader_mut() {
                    reader.previous();
                }
            }
            Message::PlayAudio => self.notices.push_back(Notice::AudioSoon),

            Message::SelectChapter(chapter) => {
                let moved = self
                    .navigation
                    .chapter_reader_mut()
                    .is_some_and(|r| r.select(chapter));
                if moved {
                    self.navigation.request_scroll_reset();
                }
            }
            Message::NextChapter => {
                let moved = self.navigation.chapter_reader_mut().is_some_and(|r| r.next());
                if moved {
                    self.navigation.request_scroll_reset();
                }
            }
            Message::PreviousChapter => {
                let moved = self
                    .navigation
                    .chapter_reader_mut()
                    .is_some_and(|r| r.previous());
                if moved {
                    self.navigation.request_scroll_reset();
                }
            }
            Message::BackToChapters => {
                if let Some(reader) = self.navigation.chapter_reader_mut() {
                    reader.back();
                }
            }
            Message::CycleFontSize => {
                if let Some(reader) = self.navigation.chapter_reader_mut() {
                    reader.cycle_font_size();
                }
            }

            Message::ToggleTheme => {
                self.theme.toggle();
                self.apply_status_bar();
            }
            Message::ToggleLanguage => {
                self.localization.toggle_language();
            }
            Message::SetLanguage(language) => self.localization.set_language(language),

            Message::ShareApp => self.share_app(),
            Message::ShareCurrent => self.share_current(),
        }
    }

    /// Notices queued since the last call, oldest first.
    pub fn drain_notices(&mut self) -> Vec<Notice> {
        self.notices.drain(..).collect()
    }

    pub fn notice_text(&self, notice: Notice) -> &'static str {
        let t = self.t();
        match notice {
            Notice::StoryFinished => t.story_finished,
            Notice::LinkCopied => t.link_copied,
            Notice::AudioSoon => t.audio_soon,
        }
    }

    /// Stories matching the search box.
    pub fn visible_stories(&self) -> Vec<&'static Story> {
        filter_stories(catalog::stories(), &self.search_query)
    }

    /// One testament's section of the books matching the search box.
    pub fn visible_books(&self, testament: Testament) -> Vec<&'static ScriptureBook> {
        let matching = filter_books(catalog::bible_books(), &self.search_query);
        books_by_testament(&matching, testament)
    }

    /// Placeholder of the search box for the active tab.
    pub fn search_placeholder(&self) -> &'static str {
        match self.home_tab {
            HomeTab::Stories => self.t().search_stories,
            HomeTab::Bible => self.t().search_bible,
        }
    }

    /// The home screen forgets its tab and search once left.
    fn reset_home(&mut self) {
        self.home_tab = HomeTab::default();
        self.search_query.clear();
    }

    fn back(&mut self) {
        if let Some(reader) = self.navigation.chapter_reader_mut()
            && reader.chapter().is_some()
        {
            reader.back();
            return;
        }
        self.navigation.go_home();
    }

    fn startup(&mut self) {
        tracing::info!("Starting up");
        native::hide_splash_screen(self.shell.as_mut());
        self.apply_status_bar();
    }

    fn apply_status_bar(&mut self) {
        let (color, is_light) = self.theme.status_bar();
        native::set_status_bar_color(self.shell.as_mut(), color, is_light);
    }

    fn next_page(&mut self) {
        let Some(reader) = self.navigation.story_reader_mut() else {
            return;
        };
        if reader.next() == PageTurn::Finished {
            tracing::info!(story = reader.story().id, "Story finished");
            self.navigation.go_home();
            self.notices.push_back(Notice::StoryFinished);
        }
    }

    fn share_app(&mut self) {
        let outcome = native::share_content(
            self.shell.as_mut(),
            APP_SHARE_TITLE,
            APP_SHARE_TEXT,
            None,
        );
        self.after_share(outcome);
    }

    /// Share whatever is on screen: the story, the book or chapter, or the app.
    fn share_current(&mut self) {
        match self.current_share_text() {
            Some((title, text)) => {
                let outcome = native::share_content(self.shell.as_mut(), &title, &text, None);
                self.after_share(outcome);
            }
            None => self.share_app(),
        }
    }

    fn current_share_text(&self) -> Option<(String, String)> {
        let t = self.t();
        if let Some(story) = self.navigation.selected_story() {
            return Some((
                story.title.to_string(),
                format!("{}\n\n{}...", story.title, story.excerpt(SHARE_EXCERPT_CHARS)),
            ));
        }
        let book = self.navigation.selected_book()?;
        let chapter = self.navigation.chapter_reader().and_then(|r| r.chapter());
        let subject = match chapter {
            Some(chapter) => format!("{} {} {}", book.name, t.chapters, chapter),
            None => book.name.to_string(),
        };
        Some((t.bible.to_string(), format!("{} {}", t.welcome, subject)))
    }

    /// Only the clipboard fallback needs a toast; share sheets speak for
    /// themselves and failures stay silent.
    fn after_share(&mut self, outcome: ShareOutcome) {
        tracing::debug!(?outcome, "Share finished");
        if outcome == ShareOutcome::Clipboard {
            self.notices.push_back(Notice::LinkCopied);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::app::domain::Language;
    use crate::app::infrastructure::error::BridgeError;
    use crate::app::infrastructure::native::{HeadlessShell, SharePayload};
    use crate::app::infrastructure::storage::MemoryStore;
    use crate::app::services::catalog::{book_by_id, story_by_id};

    fn app() -> (AppState, MemoryStore, HeadlessShell) {
        let memory = MemoryStore::default();
        let shell = HeadlessShell::default();
        let state = AppState::new(Box::new(memory.clone()), Box::new(shell.clone()), false);
        (state, memory, shell)
    }

    #[test]
    fn test_story_finish_returns_home_once() {
        let (mut app, _, _) = app();
        let story = story_by_id("2").unwrap();
        assert_eq!(story.page_count(), 3);
        app.handle(Message::SelectStory(story));

        app.handle(Message::NextPage);
        app.handle(Message::NextPage);
        assert!(app.drain_notices().is_empty());
        assert_eq!(app.navigation.story_reader().unwrap().page(), Some(2));

        app.handle(Message::NextPage);
        assert!(app.navigation.is_home());
        assert_eq!(app.drain_notices(), vec![Notice::StoryFinished]);

        // Further presses hit the home screen, not a reader.
        app.handle(Message::NextPage);
        assert!(app.drain_notices().is_empty());
    }

    #[test]
    fn test_previous_page_clamps() {
        let (mut app, _, _) = app();
        app.handle(Message::SelectStory(story_by_id("1").unwrap()));
        app.handle(Message::PreviousPage);
        assert_eq!(app.navigation.story_reader().unwrap().page(), Some(0));
    }

    #[test]
    fn test_chapter_navigation() {
        let (mut app, _, _) = app();
        app.handle(Message::SelectBook(book_by_id("gen").unwrap()));
        app.navigation.take_scroll_reset();

        app.handle(Message::SelectChapter(51));
        assert_eq!(app.navigation.chapter_reader().unwrap().chapter(), None);
        assert!(!app.navigation.take_scroll_reset());

        app.handle(Message::SelectChapter(50));
        assert!(app.navigation.take_scroll_reset());
        app.handle(Message::NextChapter);
        assert_eq!(app.navigation.chapter_reader().unwrap().chapter(), Some(50));
        assert!(!app.navigation.take_scroll_reset());

        app.handle(Message::PreviousChapter);
        assert_eq!(app.navigation.chapter_reader().unwrap().chapter(), Some(49));

        app.handle(Message::BackToChapters);
        assert_eq!(app.navigation.chapter_reader().unwrap().chapter(), None);
        assert!(app.navigation.selected_book().is_some());
    }

    #[test]
    fn test_back_steps_out_of_chapter_first() {
        let (mut app, _, _) = app();
        app.handle(Message::SelectBook(book_by_id("mar").unwrap()));
        app.handle(Message::SelectChapter(4));
        app.handle(Message::Back);
        assert_eq!(app.navigation.chapter_reader().unwrap().chapter(), None);
        app.handle(Message::Back);
        assert!(app.navigation.is_home());

        app.handle(Message::SelectStory(story_by_id("3").unwrap()));
        app.handle(Message::Back);
        assert!(app.navigation.is_home());
    }

    #[test]
    fn test_leaving_home_resets_search_and_tab() {
        let (mut app, _, _) = app();
        app.handle(Message::SetHomeTab(HomeTab::Bible));
        app.handle(Message::SetSearch("ዘ".to_string()));
        app.handle(Message::SelectBook(book_by_id("exo").unwrap()));
        app.handle(Message::GoHome);
        assert_eq!(app.home_tab, HomeTab::Stories);
        assert!(app.search_query.is_empty());
    }

    #[test]
    fn test_search_filters_home_lists() {
        let (mut app, _, _) = app();
        assert_eq!(app.visible_stories().len(), 3);
        app.handle(Message::SetSearch("ወንጌል".to_string()));
        assert!(app.visible_stories().is_empty());
        assert!(app.visible_books(Testament::Old).is_empty());
        assert_eq!(app.visible_books(Testament::New).len(), 4);
    }

    #[test]
    fn test_search_placeholder_follows_tab() {
        let (mut app, _, _) = app();
        app.handle(Message::SetLanguage(Language::En));
        assert_eq!(app.search_placeholder(), "Search stories...");
        app.handle(Message::SetHomeTab(HomeTab::Bible));
        assert_eq!(app.search_placeholder(), "Search Bible books...");
    }

    #[test]
    fn test_share_app_falls_back_to_clipboard() {
        let (mut app, _, shell) = app();
        app.handle(Message::ShareApp);
        assert_eq!(app.drain_notices(), vec![Notice::LinkCopied]);
        assert_eq!(
            shell.clipboard().unwrap(),
            format!("{APP_SHARE_TITLE}\n{APP_SHARE_TEXT}\nhttps://ethiopian-kids-bible.app")
        );
    }

    /// Shell with a working share sheet. Clones share the recorded calls.
    #[derive(Clone)]
    struct ShareSheetShell {
        result: Rc<RefCell<Result<(), BridgeError>>>,
        titles: Rc<RefCell<Vec<String>>>,
        clipboard_writes: Rc<RefCell<usize>>,
    }

    impl ShareSheetShell {
        fn new() -> Self {
            Self {
                result: Rc::new(RefCell::new(Ok(()))),
                titles: Rc::default(),
                clipboard_writes: Rc::default(),
            }
        }
    }

    impl NativeShell for ShareSheetShell {
        fn is_native(&self) -> bool {
            true
        }

        fn hide_splash_screen(&mut self) -> Result<(), BridgeError> {
            Ok(())
        }

        fn set_status_bar_color(&mut self, _: &str, _: bool) -> Result<(), BridgeError> {
            Ok(())
        }

        fn native_share(&mut self, payload: &SharePayload) -> Option<Result<(), BridgeError>> {
            self.titles.borrow_mut().push(payload.title.clone());
            Some(self.result.borrow().clone())
        }

        fn platform_share(&mut self, _: &SharePayload) -> Option<Result<(), BridgeError>> {
            None
        }

        fn write_clipboard(&mut self, _: &str) -> Result<(), BridgeError> {
            *self.clipboard_writes.borrow_mut() += 1;
            Ok(())
        }
    }

    #[test]
    fn test_share_sheet_outcomes_stay_silent() {
        let shell = ShareSheetShell::new();
        let mut app = AppState::new(Box::new(MemoryStore::default()), Box::new(shell.clone()), false);

        app.handle(Message::ShareApp);
        assert!(app.drain_notices().is_empty());

        *shell.result.borrow_mut() = Err(BridgeError::Failed {
            operation: "share",
            reason: "dismissed".to_string(),
        });
        app.handle(Message::SelectStory(story_by_id("1").unwrap()));
        app.handle(Message::ShareCurrent);
        assert!(app.drain_notices().is_empty());

        let titles = shell.titles.borrow();
        assert_eq!(titles.len(), 2);
        assert_eq!(titles[0], APP_SHARE_TITLE);
        assert_eq!(titles[1], story_by_id("1").unwrap().title);
        assert_eq!(*shell.clipboard_writes.borrow(), 0);
    }

    #[test]
    fn test_share_chapter_text() {
        let (mut app, _, shell) = app();
        app.handle(Message::SetLanguage(Language::En));
        app.handle(Message::SelectBook(book_by_id("joh").unwrap()));
        app.handle(Message::SelectChapter(3));
        app.handle(Message::ShareCurrent);
        assert_eq!(
            shell.clipboard().unwrap(),
            "Bible\nPeace be with you! 👋 የዮሐንስ ወንጌል chapters 3\nhttps://ethiopian-kids-bible.app"
        );
    }

    #[test]
    fn test_share_story_quotes_first_page() {
        let (mut app, _, shell) = app();
        let story = story_by_id("1").unwrap();
        app.handle(Message::SelectStory(story));
        app.handle(Message::ShareCurrent);
        let copied = shell.clipboard().unwrap();
        assert!(copied.starts_with(&format!("{}\n{}\n\n{}...", story.title, story.title, story.content[0])));
    }

    #[test]
    fn test_toggles_persist() {
        let (mut app, memory, _) = app();
        app.handle(Message::ToggleLanguage);
        app.handle(Message::ToggleTheme);
        let saved = memory.saved().unwrap();
        assert_eq!(saved.language, Language::En);
        assert_eq!(saved.theme, Some(crate::app::domain::ThemeMode::Dark));
        assert_eq!(app.notice_text(Notice::LinkCopied), "Link copied!");
    }

    #[test]
    fn test_audio_notice() {
        let (mut app, _, _) = app();
        app.handle(Message::PlayAudio);
        assert_eq!(app.notice_text(Notice::AudioSoon), "ኦዲዮ በቅርቡ ይለቀቃል");
        assert_eq!(app.drain_notices(), vec![Notice::AudioSoon]);
    }

    #[test]
    fn test_startup_is_quiet_outside_native_shell() {
        let (mut app, _, _) = app();
        app.handle(Message::Startup);
        assert!(app.drain_notices().is_empty());
        assert!(app.navigation.is_home());
    }

    #[test]
    fn test_scope_exposes_both_stores() {
        let (app, _, _) = app();
        let scope = app.scope();
        assert!(scope.try_localization().is_ok());
        assert!(!scope.theme().is_dark());
    }
}
