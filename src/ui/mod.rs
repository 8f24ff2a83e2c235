//! FLTK desktop shell. Renders `AppState` and turns widget callbacks into
//! `Message`s.

pub mod dialogs;
pub mod main_window;
pub mod menu;
pub mod render;
pub mod shell;
pub mod theme;
