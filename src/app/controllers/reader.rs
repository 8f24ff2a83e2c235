//! Position tracking inside a selected story or scripture book.
//!
//! Story pages are 0-based and chapters are 1-based. The boundary policies
//! differ on purpose: turning past the last story page finishes the story,
//! while the last chapter of a book is a hard stop.

use std::ops::RangeInclusive;

use crate::app::domain::{ScriptureBook, Story, Verse};
use crate::app::services::catalog::sample_verses;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReaderState {
    /// Nothing selected; the chapter grid is shown.
    ListView,
    Reading(usize),
}

/// Result of turning a story page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageTurn {
    Turned(usize),
    Unchanged,
    /// Turned past the last page.
    Finished,
}

#[derive(Debug)]
pub struct StoryReader {
    story: &'static Story,
    state: ReaderState,
}

impl StoryReader {
    /// A story has no list view; reading starts on the first page.
    pub fn new(story: &'static Story) -> Self {
        Self {
            story,
            state: ReaderState::Reading(0),
        }
    }

    pub fn story(&self) -> &'static Story {
        self.story
    }

    pub fn state(&self) -> ReaderState {
        self.state
    }

    pub fn page(&self) -> Option<usize> {
        match self.state {
            ReaderState::Reading(page) => Some(page),
            ReaderState::ListView => None,
        }
    }

    pub fn page_count(&self) -> usize {
        self.story.page_count()
    }

    /// Jump to a page. Returns false and leaves the state alone when out of range.
    pub fn select(&mut self, page: usize) -> bool {
        if page >= self.page_count() {
            return false;
        }
        self.state = ReaderState::Reading(page);
        true
    }

    pub fn next(&mut self) -> PageTurn {
        match self.state {
            ReaderState::ListView => {
                self.state = ReaderState::Reading(0);
                PageTurn::Turned(0)
            }
            ReaderState::Reading(page) if page + 1 < self.page_count() => {
                self.state = ReaderState::Reading(page + 1);
                PageTurn::Turned(page + 1)
            }
            ReaderState::Reading(_) => PageTurn::Finished,
        }
    }

    pub fn previous(&mut self) -> PageTurn {
        match self.state {
            ReaderState::Reading(page) if page > 0 => {
                self.state = ReaderState::Reading(page - 1);
                PageTurn::Turned(page - 1)
            }
            _ => PageTurn::Unchanged,
        }
    }

    pub fn back(&mut self) {
        self.state = ReaderState::ListView;
    }

    pub fn current_text(&self) -> Option<&'static str> {
        self.page().and_then(|p| self.story.content.get(p).copied())
    }

    pub fn is_first_page(&self) -> bool {
        self.page() == Some(0)
    }

    /// On the last page "Next" reads "Finish".
    pub fn is_last_page(&self) -> bool {
        self.page().is_some_and(|p| p + 1 == self.page_count())
    }

    /// Fraction of the story read, counting the current page.
    pub fn progress(&self) -> f64 {
        match self.page_count() {
            0 => 0.0,
            count => self.pages_read() as f64 / count as f64,
        }
    }

    /// "2 / 4" style counter.
    pub fn position_label(&self) -> String {
        format!("{} / {}", self.pages_read(), self.page_count())
    }

    fn pages_read(&self) -> usize {
        self.page().map_or(0, |p| (p + 1).min(self.page_count()))
    }
}

/// Verse text size, cycled from the reader toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontSize {
    Small,
    #[default]
    Base,
    Large,
    XLarge,
}

impl FontSize {
    pub fn cycled(self) -> FontSize {
        match self {
            FontSize::Small => FontSize::Base,
            FontSize::Base => FontSize::Large,
            FontSize::Large => FontSize::XLarge,
            FontSize::XLarge => FontSize::Small,
        }
    }

    pub fn points(self) -> i32 {
        match self {
            FontSize::Small => 14,
            FontSize::Base => 18,
            FontSize::Large => 20,
            FontSize::XLarge => 24,
        }
    }
}

#[derive(Debug)]
pub struct ChapterReader {
    book: &'static ScriptureBook,
    state: ReaderState,
    font_size: FontSize,
}

impl ChapterReader {
    pub fn new(book: &'static ScriptureBook) -> Self {
        Self {
            book,
            state: ReaderState::ListView,
            font_size: FontSize::default(),
        }
    }

    pub fn book(&self) -> &'static ScriptureBook {
        self.book
    }

    pub fn state(&self) -> ReaderState {
        self.state
    }

    pub fn chapter(&self) -> Option<u32> {
        match self.state {
            ReaderState::Reading(chapter) => u32::try_from(chapter).ok(),
            ReaderState::ListView => None,
        }
    }

    pub fn chapter_numbers(&self) -> RangeInclusive<u32> {
        1..=self.book.chapters_count
    }

    /// Open a chapter. Returns false and leaves the state alone when out of range.
    pub fn select(&mut self, chapter: u32) -> bool {
        if !self.chapter_numbers().contains(&chapter) {
            tracing::debug!(book = self.book.id, chapter, "Ignoring out-of-range chapter");
            return false;
        }
        self.state = ReaderState::Reading(chapter as usize);
        true
    }

    pub fn has_next(&self) -> bool {
        self.chapter().is_some_and(|c| c < self.book.chapters_count)
    }

    pub fn has_previous(&self) -> bool {
        self.chapter().is_some_and(|c| c > 1)
    }

    /// Next chapter; a no-op on the last one. Returns whether the position moved.
    pub fn next(&mut self) -> bool {
        match self.chapter() {
            Some(c) if self.has_next() => self.select(c + 1),
            _ => false,
        }
    }

    pub fn previous(&mut self) -> bool {
        match self.chapter() {
            Some(c) if self.has_previous() => self.select(c - 1),
            _ => false,
        }
    }

    /// Return to the chapter grid.
    pub fn back(&mut self) {
        self.state = ReaderState::ListView;
    }

    pub fn verses(&self) -> Vec<Verse> {
        self.chapter()
            .map(|c| sample_verses(self.book.name, c))
            .unwrap_or_default()
    }

    pub fn font_size(&self) -> FontSize {
        self.font_size
    }

    pub fn cycle_font_size(&mut self) -> FontSize {
        self.font_size = self.font_size.cycled();
        self.font_size
    }
}
