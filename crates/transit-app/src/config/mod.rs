//! Site configuration for AccessibleTransit
//!
//! Settings are read from `site.toml`, which the website embeds at build
//! time. Missing sections fall back to defaults.

pub mod settings;
pub mod types;

pub use settings::{load_settings, parse_settings, validate_settings};
pub use types::*;
