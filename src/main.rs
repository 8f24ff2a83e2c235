use std::cell::Cell;
use std::rc::Rc;

use fltk::{app, frame::Frame, group::Flex, prelude::*};

use kids_bible::app::domain::Message;
use kids_bible::app::infrastructure::native::{SPLASH_DURATION, SPLASH_HIDE_DELAY};
use kids_bible::app::{AppState, JsonFileStore, detect_system_dark_mode};
use kids_bible::ui::dialogs::about::show_about_dialog;
use kids_bible::ui::main_window::{build_main_window, build_splash_window};
use kids_bible::ui::menu::{ShellAction, build_menu};
use kids_bible::ui::render::render;
use kids_bible::ui::shell::DesktopShell;
use kids_bible::ui::theme::apply_theme;

/// Seconds a toast stays up.
const TOAST_SECONDS: f64 = 2.5;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("kids_bible=info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let app = app::App::default();
    let (sender, receiver) = app::channel::<Message>();
    let (shell_sender, shell_receiver) = app::channel::<ShellAction>();

    let mut widgets = build_main_window(&sender);
    let mut splash = build_splash_window();

    let shell = DesktopShell::new(Some(splash.clone()), widgets.status_strip.clone());
    let store = JsonFileStore::at_default_path();
    tracing::info!(path = %store.path().display(), "Loading preferences");
    let mut state = AppState::new(
        Box::new(store),
        Box::new(shell),
        detect_system_dark_mode(),
    );

    build_menu(&mut widgets.menu, &sender, &shell_sender, state.theme.is_dark());
    apply_theme(&mut widgets, &state.theme.palette());
    render(&mut widgets, &mut state, &sender);

    widgets.wind.show();
    splash.show();

    // The app hides the splash itself shortly after launch; the longer
    // timeout only matters if the loop stalls before that.
    app::add_timeout3(SPLASH_HIDE_DELAY.as_secs_f64(), move |_| sender.send(Message::Startup));
    {
        let mut splash = splash.clone();
        app::add_timeout3(SPLASH_DURATION.as_secs_f64(), move |_| {
            if splash.shown() {
                splash.hide();
            }
        });
    }

    let toast_generation = Rc::new(Cell::new(0u64));

    while app.wait() {
        if let Some(action) = shell_receiver.recv() {
            match action {
                ShellAction::About => show_about_dialog(state.t(), state.theme.is_dark()),
                ShellAction::Quit => {
                    splash.hide();
                    widgets.wind.hide();
                }
            }
        }

        if let Some(msg) = receiver.recv() {
            state.handle(msg);
            apply_theme(&mut widgets, &state.theme.palette());
            render(&mut widgets, &mut state, &sender);
            for notice in state.drain_notices() {
                show_toast(&widgets.toast, &widgets.flex, state.notice_text(notice), &toast_generation);
            }
        }
    }
}

/// Show `text` in the toast strip. A newer toast keeps the strip up past an
/// older toast's timeout.
fn show_toast(toast: &Frame, flex: &Flex, text: &str, generation: &Rc<Cell<u64>>) {
    let current = generation.get() + 1;
    generation.set(current);

    let mut toast = toast.clone();
    let mut flex = flex.clone();
    toast.set_label(text);
    toast.show();
    flex.layout();

    let generation = generation.clone();
    app::add_timeout3(TOAST_SECONDS, move |_| {
        if generation.get() == current {
            toast.hide();
            flex.layout();
            flex.redraw();
        }
    });
}
