//! Infrastructure layer - external integrations and utilities.
//!
//! This module contains code that interfaces with external systems:
//! - Preference persistence
//! - Native shell bridge (splash screen, status bar, share)
//! - Platform-specific detection
//! - Error types

pub mod error;
pub mod native;
pub mod platform;
pub mod storage;
