use fltk::{enums::Color, prelude::*};

use crate::app::controllers::theme::Palette;
use crate::ui::main_window::MainWidgets;

fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::from_rgb(r, g, b)
}

/// Paint every persistent widget with the palette. Per-screen accents
/// (active tab, testament headers) are applied by `render`.
pub fn apply_theme(w: &mut MainWidgets, palette: &Palette) {
    let background = rgb(palette.background);
    let surface = rgb(palette.surface);
    let text = rgb(palette.text);
    let muted = rgb(palette.muted);

    w.wind.set_color(background);
    w.wind.set_label_color(text);
    w.menu.set_color(surface);
    w.menu.set_text_color(text);
    w.menu.set_selection_color(muted); // Hover color

    for frame in [&mut w.title, &mut w.position] {
        frame.set_label_color(text);
    }
    w.subtitle.set_label_color(muted);

    w.search.set_color(surface);
    w.search.set_text_color(text);
    w.search.set_cursor_color(text);

    w.list.set_color(surface);
    w.list.set_text_color(text);
    w.list.set_selection_color(rgb(palette.primary));

    w.reader.set_color(surface);
    w.reader.set_text_color(text);

    w.progress.set_color(surface);
    w.progress.set_selection_color(rgb(palette.accent));

    w.toast.set_color(text);
    w.toast.set_label_color(background);

    for btn in [
        &mut w.back_btn,
        &mut w.font_btn,
        &mut w.audio_btn,
        &mut w.share_btn,
        &mut w.prev_btn,
        &mut w.nav_home,
        &mut w.nav_stories,
        &mut w.nav_share,
        &mut w.nav_settings,
    ] {
        btn.set_color(background);
        btn.set_label_color(text);
    }
    w.next_btn.set_color(rgb(palette.accent));
    w.next_btn.set_label_color(rgb((2, 6, 23)));

    w.wind.redraw();
}
