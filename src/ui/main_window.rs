use std::cell::RefCell;
use std::rc::Rc;

use fltk::{
    app::Sender,
    browser::HoldBrowser,
    button::Button,
    enums::{Align, CallbackTrigger, Color, Font, FrameType},
    frame::Frame,
    group::{Flex, FlexType},
    input::Input,
    menu::MenuBar,
    misc::Progress,
    prelude::*,
    text::{TextBuffer, TextDisplay, WrapMode},
    window::Window,
};

use crate::app::domain::{HomeTab, Message};
use crate::app::infrastructure::native::{APP_NAME, SPLASH_BACKGROUND, SPLASH_SPINNER_COLOR};

pub const WINDOW_WIDTH: i32 = 420;
pub const WINDOW_HEIGHT: i32 = 760;

/// Message sent when a list row is picked, by row (0-based). Header and
/// "no results" rows carry `None`.
pub type RowActions = Rc<RefCell<Vec<Option<Message>>>>;

pub struct MainWidgets {
    pub wind: Window,
    pub flex: Flex,
    pub menu: MenuBar,
    pub status_strip: Frame,
    pub header: Flex,
    pub back_btn: Button,
    pub title: Frame,
    pub font_btn: Button,
    pub audio_btn: Button,
    pub share_btn: Button,
    pub subtitle: Frame,
    pub search: Input,
    pub tabs: Flex,
    pub stories_tab: Button,
    pub bible_tab: Button,
    pub progress: Progress,
    pub list: HoldBrowser,
    pub row_actions: RowActions,
    pub reader: TextDisplay,
    pub reader_buf: TextBuffer,
    pub pager: Flex,
    pub prev_btn: Button,
    pub position: Frame,
    pub next_btn: Button,
    pub toast: Frame,
    pub nav_home: Button,
    pub nav_stories: Button,
    pub nav_share: Button,
    pub nav_settings: Button,
    /// Language revision the language-only labels were last painted for.
    pub label_revision: Option<u64>,
}

/// Borderless launch window shown until the app asks to hide it.
pub fn build_splash_window() -> Window {
    let mut splash = Window::default()
        .with_size(WINDOW_WIDTH, 240)
        .with_label(APP_NAME)
        .center_screen();
    splash.set_border(false);
    if let Ok(color) = Color::from_hex_str(SPLASH_BACKGROUND) {
        splash.set_color(color);
    }

    let mut name = Frame::new(0, 60, WINDOW_WIDTH, 60, None);
    name.set_label(&format!("📖 {APP_NAME}"));
    name.set_label_size(22);
    name.set_label_font(Font::HelveticaBold);

    let mut spinner = Frame::new(0, 140, WINDOW_WIDTH, 30, None);
    spinner.set_label("• • •");
    spinner.set_label_size(20);
    if let Ok(color) = Color::from_hex_str(SPLASH_SPINNER_COLOR) {
        spinner.set_label_color(color);
    }

    splash.end();
    splash
}

fn button(label: &str, sender: &Sender<Message>, msg: Message) -> Button {
    let mut btn = Button::default().with_label(label);
    btn.set_frame(FrameType::FlatBox);
    let s = *sender;
    btn.set_callback(move |_| s.send(msg.clone()));
    btn
}

pub fn build_main_window(sender: &Sender<Message>) -> MainWidgets {
    let mut wind = Window::new(100, 100, WINDOW_WIDTH, WINDOW_HEIGHT, APP_NAME);
    wind.set_xclass("KidsBible");

    let mut flex = Flex::new(0, 0, WINDOW_WIDTH, WINDOW_HEIGHT, None);
    flex.set_type(FlexType::Column);

    let menu = MenuBar::new(0, 0, 0, 30, "");
    flex.fixed(&menu, 30);

    let mut status_strip = Frame::default();
    status_strip.set_frame(FrameType::FlatBox);
    flex.fixed(&status_strip, 6);

    // Header: back arrow, title and per-screen tools
    let mut header = Flex::default();
    header.set_type(FlexType::Row);
    header.set_margin(4);
    let back_btn = button("@<-", sender, Message::Back);
    header.fixed(&back_btn, 40);
    let mut title = Frame::default();
    title.set_label_size(20);
    title.set_label_font(Font::HelveticaBold);
    title.set_align(Align::Left | Align::Inside | Align::Clip);
    let font_btn = button("Aa", sender, Message::CycleFontSize);
    header.fixed(&font_btn, 40);
    let audio_btn = button("🔊", sender, Message::PlayAudio);
    header.fixed(&audio_btn, 40);
    let share_btn = button("⇪", sender, Message::ShareCurrent);
    header.fixed(&share_btn, 40);
    header.end();
    flex.fixed(&header, 48);

    let mut subtitle = Frame::default();
    subtitle.set_label_size(13);
    subtitle.set_align(Align::Left | Align::Inside | Align::Wrap);
    flex.fixed(&subtitle, 40);

    let mut search = Input::default();
    search.set_text_size(15);
    search.set_trigger(CallbackTrigger::Changed);
    {
        let s = *sender;
        search.set_callback(move |i| s.send(Message::SetSearch(i.value())));
    }
    flex.fixed(&search, 34);

    let mut tabs = Flex::default();
    tabs.set_type(FlexType::Row);
    tabs.set_spacing(4);
    let stories_tab = button("", sender, Message::SetHomeTab(HomeTab::Stories));
    let bible_tab = button("", sender, Message::SetHomeTab(HomeTab::Bible));
    tabs.end();
    flex.fixed(&tabs, 36);

    let mut progress = Progress::default();
    progress.set_minimum(0.0);
    progress.set_maximum(1.0);
    progress.set_frame(FrameType::FlatBox);
    flex.fixed(&progress, 8);

    // Content: a list for catalogs and menus, a text view for reading
    let mut list = HoldBrowser::default();
    list.set_text_size(16);
    list.set_frame(FrameType::FlatBox);
    let row_actions: RowActions = Rc::new(RefCell::new(Vec::new()));
    {
        let s = *sender;
        let actions = row_actions.clone();
        list.set_callback(move |b| {
            let line = b.value();
            if line < 1 {
                return;
            }
            let picked = actions.borrow().get(line as usize - 1).cloned().flatten();
            match picked {
                Some(msg) => s.send(msg),
                // Headers are not selectable
                None => b.deselect(),
            }
        });
    }

    let reader_buf = TextBuffer::default();
    let mut reader = TextDisplay::default();
    reader.set_buffer(reader_buf.clone());
    reader.wrap_mode(WrapMode::AtBounds, 0);
    reader.set_frame(FrameType::FlatBox);
    reader.set_scrollbar_size(8);

    let mut pager = Flex::default();
    pager.set_type(FlexType::Row);
    pager.set_margin(6);
    let prev_btn = button("", sender, Message::PreviousPage);
    let mut position = Frame::default();
    position.set_label_font(Font::CourierBold);
    let next_btn = button("", sender, Message::NextPage);
    pager.end();
    flex.fixed(&pager, 52);

    let mut toast = Frame::default();
    toast.set_frame(FrameType::FlatBox);
    toast.set_label_size(14);
    toast.hide();
    flex.fixed(&toast, 30);

    let mut bottom_nav = Flex::default();
    bottom_nav.set_type(FlexType::Row);
    let nav_home = button("", sender, Message::GoHome);
    let nav_stories = button("", sender, Message::NavStories);
    let nav_share = button("", sender, Message::ShareApp);
    let nav_settings = button("", sender, Message::OpenSettings);
    bottom_nav.end();
    flex.fixed(&bottom_nav, 50);

    flex.end();
    wind.resizable(&flex);
    wind.end();

    MainWidgets {
        wind,
        flex,
        menu,
        status_strip,
        header,
        back_btn,
        title,
        font_btn,
        audio_btn,
        share_btn,
        subtitle,
        search,
        tabs,
        stories_tab,
        bible_tab,
        progress,
        list,
        row_actions,
        reader,
        reader_buf,
        pager,
        prev_btn,
        position,
        next_btn,
        toast,
        nav_home,
        nav_stories,
        nav_share,
        nav_settings,
        label_revision: None,
    }
}
