//! Controllers layer - stateful orchestration.
//!
//! This module contains the state holders the UI drives:
//! - Screen navigation
//! - Story page and scripture chapter readers
//! - Language and theme stores

pub mod localization;
pub mod navigation;
pub mod reader;
pub mod theme;
