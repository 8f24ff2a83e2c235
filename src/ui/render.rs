use fltk::{app::Sender, enums::Color, prelude::*};

use crate::app::controllers::navigation::{NavItem, Screen};
use crate::app::controllers::reader::{ChapterReader, StoryReader};
use crate::app::controllers::theme::Palette;
use crate::app::domain::{HomeTab, Message, Testament};
use crate::app::infrastructure::native::{APP_NAME, APP_VERSION};
use crate::app::services::i18n::Translation;
use crate::app::state::AppState;
use crate::ui::main_window::MainWidgets;

/// Text size of story pages; chapters use the reader's own font size.
const STORY_TEXT_SIZE: i32 = 20;

type Row = (String, Option<Message>);

fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::from_rgb(r, g, b)
}

fn header_row(label: &str, color: (u8, u8, u8)) -> Row {
    (format!("@C{}@b{}", rgb(color).bits(), label), None)
}

fn show_if<W: WidgetExt>(widget: &mut W, visible: bool) {
    if visible {
        widget.show();
    } else {
        widget.hide();
    }
}

/// Redraw the window from the state. Called after every handled message.
pub fn render(w: &mut MainWidgets, state: &mut AppState, sender: &Sender<Message>) {
    let scroll_reset = state.navigation.take_scroll_reset();
    let state = &*state;
    let scope = state.scope();
    let t = scope.t();
    let palette = scope.theme().palette();

    let screen = state.navigation.screen();
    let is_home = state.navigation.is_home();
    let reading_chapter = state
        .navigation
        .chapter_reader()
        .is_some_and(|r| r.chapter().is_some());
    let reading_story = state.navigation.story_reader().is_some();

    show_if(&mut w.back_btn, !is_home);
    show_if(&mut w.font_btn, reading_chapter);
    show_if(&mut w.audio_btn, reading_story);
    show_if(&mut w.share_btn, !matches!(screen, Screen::Settings));
    show_if(&mut w.search, is_home);
    show_if(&mut w.tabs, is_home);
    show_if(&mut w.progress, reading_story);
    show_if(&mut w.pager, reading_story || reading_chapter);

    let reading = reading_story || reading_chapter;
    show_if(&mut w.reader, reading);
    show_if(&mut w.list, !reading);

    let rows = match screen {
        Screen::Home => render_home(w, state, t, &palette),
        Screen::StoryReading(reader) => {
            render_story(w, reader, t, sender);
            Vec::new()
        }
        Screen::ScriptureReading(reader) => render_scripture(w, reader, t, sender),
        Screen::Settings => render_settings(w, state, t),
    };
    if !reading {
        fill_list(w, rows);
    }
    if scroll_reset {
        w.reader.scroll(0, 0);
    }

    let revision = state.localization.revision();
    if w.label_revision != Some(revision) {
        relabel(w, t);
        w.label_revision = Some(revision);
    }
    render_nav(w, state, &palette);
    sync_menu(w, scope.theme().is_dark());

    w.flex.layout();
    w.wind.redraw();
}

fn render_home(w: &mut MainWidgets, state: &AppState, t: &Translation, palette: &Palette) -> Vec<Row> {
    w.title.set_label(t.welcome);
    w.subtitle.set_label(&format!("{}\n{}", t.subtitle, t.banner_verse));
    w.search.set_tooltip(state.search_placeholder());
    if w.search.value() != state.search_query {
        w.search.set_value(&state.search_query);
    }

    let (active, idle) = match state.home_tab {
        HomeTab::Stories => (&mut w.stories_tab, &mut w.bible_tab),
        HomeTab::Bible => (&mut w.bible_tab, &mut w.stories_tab),
    };
    active.set_color(rgb(palette.primary));
    active.set_label_color(Color::White);
    idle.set_color(rgb(palette.surface));
    idle.set_label_color(rgb(palette.muted));

    let mut rows = Vec::new();
    match state.home_tab {
        HomeTab::Stories => {
            for story in state.visible_stories() {
                rows.push((
                    format!("{}  ·  {}", story.title, story.category),
                    Some(Message::SelectStory(story)),
                ));
            }
        }
        HomeTab::Bible => {
            for testament in Testament::ALL {
                let books = state.visible_books(testament);
                if books.is_empty() {
                    continue;
                }
                let (label, color) = match testament {
                    Testament::Old => (t.old_testament, palette.old_testament),
                    Testament::New => (t.new_testament, palette.new_testament),
                };
                rows.push(header_row(label, color));
                for book in books {
                    rows.push((
                        format!("    {}  ({} {})", book.name, book.chapters_count, t.chapters),
                        Some(Message::SelectBook(book)),
                    ));
                }
            }
        }
    }
    if rows.is_empty() {
        rows.push((format!("@i{}", t.no_results), None));
    }
    rows
}

fn render_story(w: &mut MainWidgets, reader: &StoryReader, t: &Translation, sender: &Sender<Message>) {
    let story = reader.story();
    w.title.set_label(story.title);
    w.subtitle.set_label(&format!("{}  ·  {}", story.category, story.verses.join(", ")));

    set_reader_text(w, reader.current_text().unwrap_or_default(), STORY_TEXT_SIZE);
    w.progress.set_value(reader.progress());
    w.position.set_label(&reader.position_label());

    bind_pager(w, sender, Message::PreviousPage, Message::NextPage);
    w.prev_btn.set_label(&format!("@< {}", t.previous));
    w.prev_btn.activate();
    show_if(&mut w.prev_btn, !reader.is_first_page());
    let next = if reader.is_last_page() { t.finish } else { t.next };
    w.next_btn.set_label(&format!("{next} @>"));
    w.next_btn.activate();
}

fn render_scripture(
    w: &mut MainWidgets,
    reader: &ChapterReader,
    t: &Translation,
    sender: &Sender<Message>,
) -> Vec<Row> {
    let book = reader.book();
    let Some(chapter) = reader.chapter() else {
        w.title.set_label(book.name);
        w.subtitle.set_label(&format!("{} · {} {}", t.select_chapter, book.chapters_count, t.chapters));
        return reader
            .chapter_numbers()
            .map(|n| (format!("{} {n}", t.chapters), Some(Message::SelectChapter(n))))
            .collect();
    };

    w.title.set_label(&format!("{} {chapter}", book.name));
    w.subtitle.set_label(book.category.label());

    let text = reader
        .verses()
        .iter()
        .map(|v| format!("{}. {}", v.number, v.text))
        .collect::<Vec<_>>()
        .join("\n\n");
    set_reader_text(w, &text, reader.font_size().points());
    w.position.set_label(&format!("{chapter} / {}", book.chapters_count));

    bind_pager(w, sender, Message::PreviousChapter, Message::NextChapter);
    w.prev_btn.set_label(&format!("@< {}", t.previous));
    w.prev_btn.show();
    if reader.has_previous() {
        w.prev_btn.activate();
    } else {
        w.prev_btn.deactivate();
    }
    w.next_btn.set_label(&format!("{} @>", t.next));
    if reader.has_next() {
        w.next_btn.activate();
    } else {
        w.next_btn.deactivate();
    }
    Vec::new()
}

fn render_settings(w: &mut MainWidgets, state: &AppState, t: &Translation) -> Vec<Row> {
    w.title.set_label(t.settings);
    w.subtitle.set_label(t.subtitle);

    let theme = if state.theme.is_dark() { "☾" } else { "☀" };
    vec![
        (format!("{}  {theme}", t.night_mode), Some(Message::ToggleTheme)),
        (
            format!("{}  {}", t.language, state.localization.language().display_name()),
            Some(Message::ToggleLanguage),
        ),
        (format!("{}  ⇪", t.share), Some(Message::ShareApp)),
        (String::new(), None),
        (format!("@c@i{APP_NAME} v{APP_VERSION}"), None),
    ]
}

/// Labels that only change with the language.
fn relabel(w: &mut MainWidgets, t: &Translation) {
    w.back_btn.set_tooltip(t.back);
    w.share_btn.set_tooltip(t.share);
    w.audio_btn.set_tooltip(t.audio_soon);
    w.stories_tab.set_label(&format!("📖 {}", t.stories));
    w.bible_tab.set_label(&format!("✝ {}", t.bible));
    w.nav_home.set_label(&format!("🏠\n{}", t.home));
    w.nav_stories.set_label(&format!("📚\n{}", t.stories));
    w.nav_share.set_label(&format!("⇪\n{}", t.share));
    w.nav_settings.set_label(&format!("⚙\n{}", t.settings));
}

fn render_nav(w: &mut MainWidgets, state: &AppState, palette: &Palette) {
    let items = [
        (&mut w.nav_home, NavItem::Home),
        (&mut w.nav_stories, NavItem::Stories),
        (&mut w.nav_share, NavItem::Share),
        (&mut w.nav_settings, NavItem::Settings),
    ];
    for (btn, item) in items {
        let color = if state.navigation.is_active(item) { palette.primary } else { palette.muted };
        btn.set_label_color(rgb(color));
    }
}

fn fill_list(w: &mut MainWidgets, rows: Vec<Row>) {
    let labels: Vec<&str> = rows.iter().map(|(label, _)| label.as_str()).collect();
    let unchanged = w.list.size() as usize == labels.len()
        && labels
            .iter()
            .enumerate()
            .all(|(i, label)| w.list.text(i as i32 + 1).as_deref() == Some(*label));
    if !unchanged {
        w.list.clear();
        for label in &labels {
            w.list.add(label);
        }
        w.list.set_top_line(1);
    }
    *w.row_actions.borrow_mut() = rows.into_iter().map(|(_, action)| action).collect();
}

fn set_reader_text(w: &mut MainWidgets, text: &str, size: i32) {
    if w.reader_buf.text() != text {
        w.reader_buf.set_text(text);
        w.reader.scroll(0, 0);
    }
    if w.reader.text_size() != size {
        w.reader.set_text_size(size);
    }
}

fn bind_pager(w: &mut MainWidgets, sender: &Sender<Message>, previous: Message, next: Message) {
    let s = *sender;
    w.prev_btn.set_callback(move |_| s.send(previous.clone()));
    w.next_btn.set_callback(move |_| s.send(next.clone()));
}

fn sync_menu(w: &mut MainWidgets, is_dark: bool) {
    if let Some(mut item) = w.menu.find_item("View/Night Mode") {
        if is_dark {
            item.set();
        } else {
            item.clear();
        }
    }
}
