use fltk::{
    button::Button,
    enums::{Align, Color, Font},
    frame::Frame,
    group::Flex,
    prelude::*,
    window::Window,
};

use super::run_dialog;
use crate::app::infrastructure::native::{APP_ID, APP_NAME, APP_VERSION};
use crate::app::services::i18n::Translation;

/// Show About dialog
pub fn show_about_dialog(t: &Translation, is_dark: bool) {
    let mut dialog = Window::default()
        .with_size(380, 300)
        .with_label(APP_NAME)
        .center_screen();
    dialog.make_modal(true);

    let mut flex = Flex::new(10, 10, 360, 280, None);
    flex.set_type(fltk::group::FlexType::Column);
    flex.set_spacing(8);

    let mut title = Frame::default();
    title.set_label(&format!("📖 {}", t.bible));
    title.set_label_size(22);
    title.set_label_font(Font::HelveticaBold);
    flex.fixed(&title, 40);

    let mut version_frame = Frame::default();
    version_frame.set_label(&format!("Version {APP_VERSION}"));
    version_frame.set_label_size(14);
    flex.fixed(&version_frame, 25);

    let mut subtitle = Frame::default();
    subtitle.set_label(t.subtitle);
    subtitle.set_label_size(12);
    subtitle.set_align(Align::Center | Align::Inside | Align::Wrap);
    flex.fixed(&subtitle, 50);

    let mut info_frame = Frame::default();
    info_frame.set_label(&format!("{APP_ID}\n\u{00a9} 2025 Kids Bible Ethiopia"));
    info_frame.set_label_size(11);
    info_frame.set_align(Align::Center | Align::Inside);

    let mut close_btn = Button::default().with_label(t.back);
    flex.fixed(&close_btn, 35);

    flex.end();
    dialog.end();

    let (bg, fg, muted) = if is_dark {
        (Color::from_rgb(15, 23, 42), Color::from_rgb(248, 250, 252), Color::from_rgb(148, 163, 184))
    } else {
        (Color::White, Color::Black, Color::from_rgb(100, 116, 139))
    };
    dialog.set_color(bg);
    for frame in [&mut title, &mut version_frame, &mut subtitle] {
        frame.set_label_color(fg);
    }
    info_frame.set_label_color(muted);

    let mut dialog_close = dialog.clone();
    close_btn.set_callback(move |_| {
        dialog_close.hide();
    });

    dialog.show();
    run_dialog(&dialog);
}
