//! Centralized theme system for the AccessibleTransit site.
//!
//! This module provides:
//! - `palette` - Raw Tailwind class constants shared by several views
//! - `styles` - Semantic style mappings (theme, trend, facility state, severity)

pub mod palette;
pub mod styles;

pub use styles::*;
