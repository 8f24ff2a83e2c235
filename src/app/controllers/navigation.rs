use crate::app::controllers::reader::{ChapterReader, StoryReader};
use crate::app::domain::{ScriptureBook, Story};

/// The active screen. A reading screen owns the reader for its selection,
/// so the selection and the screen can never disagree.
#[derive(Debug)]
pub enum Screen {
    Home,
    StoryReading(StoryReader),
    ScriptureReading(ChapterReader),
    Settings,
}

/// Entries of the bottom navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    Home,
    Stories,
    Share,
    Settings,
}

#[derive(Debug)]
pub struct NavigationController {
    screen: Screen,
    scroll_reset: bool,
}

impl Default for NavigationController {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationController {
    pub fn new() -> Self {
        Self {
            screen: Screen::Home,
            scroll_reset: false,
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn is_home(&self) -> bool {
        matches!(self.screen, Screen::Home)
    }

    pub fn select_story(&mut self, story: &'static Story) {
        tracing::debug!(story = story.id, "Opening story");
        self.transition(Screen::StoryReading(StoryReader::new(story)));
    }

    pub fn select_book(&mut self, book: &'static ScriptureBook) {
        tracing::debug!(book = book.id, "Opening book");
        self.transition(Screen::ScriptureReading(ChapterReader::new(book)));
    }

    /// Back to the catalog, dropping the selection and its reader.
    pub fn go_home(&mut self) {
        self.transition(Screen::Home);
    }

    /// Settings is entered from a Home-equivalent context: any reading
    /// selection is dropped on the way.
    pub fn go_settings(&mut self) {
        self.transition(Screen::Settings);
    }

    /// "Stories" in the bottom bar returns home unless already there.
    pub fn nav_stories(&mut self) {
        if !self.is_home() {
            self.go_home();
        }
    }

    pub fn is_active(&self, item: NavItem) -> bool {
        match item {
            NavItem::Home => matches!(self.screen, Screen::Home),
            NavItem::Stories => matches!(self.screen, Screen::StoryReading(_)),
            NavItem::Share => false,
            NavItem::Settings => matches!(self.screen, Screen::Settings),
        }
    }

    pub fn selected_story(&self) -> Option<&'static Story> {
        match &self.screen {
            Screen::StoryReading(reader) => Some(reader.story()),
            _ => None,
        }
    }

    pub fn selected_book(&self) -> Option<&'static ScriptureBook> {
        match &self.screen {
            Screen::ScriptureReading(reader) => Some(reader.book()),
            _ => None,
        }
    }

    pub fn story_reader(&self) -> Option<&StoryReader> {
        match &self.screen {
            Screen::StoryReading(reader) => Some(reader),
            _ => None,
        }
    }

    pub fn story_reader_mut(&mut self) -> Option<&mut StoryReader> {
        match &mut self.screen {
            Screen::StoryReading(reader) => Some(reader),
            _ => None,
        }
    }

    pub fn chapter_reader(&self) -> Option<&ChapterReader> {
        match &self.screen {
            Screen::ScriptureReading(reader) => Some(reader),
            _ => None,
        }
    }

    pub fn chapter_reader_mut(&mut self) -> Option<&mut ChapterReader> {
        match &mut self.screen {
            Screen::ScriptureReading(reader) => Some(reader),
            _ => None,
        }
    }

    /// Ask the view to scroll back to the top on its next render.
    pub fn request_scroll_reset(&mut self) {
        self.scroll_reset = true;
    }

    /// Consume the pending scroll-to-top request.
    pub fn take_scroll_reset(&mut self) -> bool {
        std::mem::take(&mut self.scroll_reset)
    }

    fn transition(&mut self, screen: Screen) {
        self.screen = screen;
        self.scroll_reset = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::controllers::reader::ReaderState;
    use crate::app::services::catalog::{book_by_id, story_by_id};

    #[test]
    fn test_starts_home() {
        let nav = NavigationController::new();
        assert!(nav.is_home());
        assert!(nav.selected_story().is_none());
        assert!(nav.selected_book().is_none());
    }

    #[test]
    fn test_select_story_then_home() {
        let mut nav = NavigationController::new();
        let story = story_by_id("1").unwrap();
        nav.select_story(story);
        assert_eq!(nav.selected_story(), Some(story));
        assert!(nav.selected_book().is_none());
        assert_eq!(nav.story_reader().unwrap().page(), Some(0));

        nav.go_home();
        assert!(nav.is_home());
        assert!(nav.selected_story().is_none());
    }

    #[test]
    fn test_select_book_starts_in_chapter_list() {
        let mut nav = NavigationController::new();
        nav.select_book(book_by_id("joh").unwrap());
        let reader = nav.chapter_reader().unwrap();
        assert_eq!(reader.state(), ReaderState::ListView);
        assert_eq!(nav.selected_book().unwrap().id, "joh");
    }

    #[test]
    fn test_new_selection_gets_fresh_reader() {
        let mut nav = NavigationController::new();
        let book = book_by_id("gen").unwrap();
        nav.select_book(book);
        nav.chapter_reader_mut().unwrap().select(10);
        nav.go_home();
        nav.select_book(book);
        assert_eq!(nav.chapter_reader().unwrap().chapter(), None);
    }

    #[test]
    fn test_settings_drops_selection() {
        let mut nav = NavigationController::new();
        nav.select_story(story_by_id("2").unwrap());
        nav.go_settings();
        assert!(matches!(nav.screen(), Screen::Settings));
        assert!(nav.selected_story().is_none());
        assert!(nav.story_reader_mut().is_none());
    }

    #[test]
    fn test_every_transition_resets_scroll() {
        let mut nav = NavigationController::new();
        assert!(!nav.take_scroll_reset());

        nav.select_story(story_by_id("1").unwrap());
        assert!(nav.take_scroll_reset());
        assert!(!nav.take_scroll_reset());

        nav.go_settings();
        assert!(nav.take_scroll_reset());
        nav.go_home();
        assert!(nav.take_scroll_reset());
    }

    #[test]
    fn test_nav_stories_only_leaves_other_screens() {
        let mut nav = NavigationController::new();
        nav.nav_stories();
        assert!(!nav.take_scroll_reset());

        nav.select_book(book_by_id("rev").unwrap());
        nav.take_scroll_reset();
        nav.nav_stories();
        assert!(nav.is_home());
        assert!(nav.take_scroll_reset());
    }

    #[test]
    fn test_bottom_bar_highlight() {
        let mut nav = NavigationController::new();
        assert!(nav.is_active(NavItem::Home));
        assert!(!nav.is_active(NavItem::Share));

        nav.select_story(story_by_id("3").unwrap());
        assert!(nav.is_active(NavItem::Stories));
        assert!(!nav.is_active(NavItem::Home));

        nav.select_book(book_by_id("gen").unwrap());
        assert!(!nav.is_active(NavItem::Stories));

        nav.go_settings();
        assert!(nav.is_active(NavItem::Settings));
    }
}
