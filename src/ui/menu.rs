use fltk::{
    app::Sender,
    enums::{Key, Shortcut},
    menu::{MenuBar, MenuFlag},
    prelude::*,
};

use crate::app::domain::{Language, Message};

/// Extra message the menu needs that the core never sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellAction {
    About,
    Quit,
}

pub fn build_menu(
    menu: &mut MenuBar,
    sender: &Sender<Message>,
    shell: &Sender<ShellAction>,
    initial_dark_mode: bool,
) {
    let s = sender;

    // App
    menu.add("App/Home", Shortcut::Ctrl | 'h', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::GoHome) });
    menu.add("App/Stories", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::NavStories) });
    menu.add("App/Settings...", Shortcut::Ctrl | ',', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::OpenSettings) });
    menu.add("App/Quit", Shortcut::Ctrl | 'q', MenuFlag::Normal, { let a = *shell; move |_| a.send(ShellAction::Quit) });

    // Reading
    menu.add("Reading/Back", Shortcut::Alt | Key::Left, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::Back) });
    menu.add("Reading/Font Size", Shortcut::Ctrl | '=', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::CycleFontSize) });

    // View
    let dm_flag = if initial_dark_mode { MenuFlag::Toggle | MenuFlag::Value } else { MenuFlag::Toggle };
    menu.add("View/Night Mode", Shortcut::Ctrl | 'd', dm_flag, { let s = *s; move |_| s.send(Message::ToggleTheme) });
    for lang in Language::ALL {
        let path = format!("View/Language/{}", lang.display_name());
        menu.add(&path, Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::SetLanguage(lang)) });
    }

    // Share
    menu.add("Share/Share App", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ShareApp) });
    menu.add("Share/Share This Page", Shortcut::Ctrl | Shortcut::Shift | 's', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ShareCurrent) });

    // Help
    menu.add("Help/About", Shortcut::None, MenuFlag::Normal, { let a = *shell; move |_| a.send(ShellAction::About) });
}
