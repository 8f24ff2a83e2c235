//! Services layer - pure operations over compiled-in content.
//!
//! This module contains:
//! - The story and scripture catalogs
//! - Search filtering
//! - Translation tables

pub mod catalog;
pub mod filter;
pub mod i18n;
