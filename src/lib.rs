//! Kids Bible: illustrated children's Bible stories and a scripture browser.
//!
//! The logical core lives in [`app`] and runs headless. The desktop shell in
//! `ui` renders it with FLTK and is only compiled with the `gui` feature.

pub mod app;

#[cfg(feature = "gui")]
pub mod ui;
