//! Configuration types for AccessibleTransit
//!
//! Defines:
//! - `SiteSettings` - Root of `site.toml`
//! - One struct per TOML section

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default refresh interval of the live-data clock
pub const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 30;

/// Site settings (`site.toml`)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct SiteSettings {
    #[serde(default)]
    pub site: SiteSection,

    #[serde(default)]
    pub live_data: LiveDataSettings,

    #[serde(default)]
    pub report: ReportSettings,

    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Branding and landing-page assets
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SiteSection {
    /// Brand name shown in the navigation bar
    #[serde(default = "default_brand")]
    pub brand: String,

    /// External hero image on the landing page
    #[serde(default = "default_hero_image_url")]
    pub hero_image_url: String,

    #[serde(default = "default_hero_image_alt")]
    pub hero_image_alt: String,

    /// Label of the (inert) sign-in button
    #[serde(default = "default_sign_in_label")]
    pub sign_in_label: String,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            brand: default_brand(),
            hero_image_url: default_hero_image_url(),
            hero_image_alt: default_hero_image_alt(),
            sign_in_label: default_sign_in_label(),
        }
    }
}

fn default_brand() -> String {
    "AccessibleTransit".to_string()
}

fn default_hero_image_url() -> String {
    "https://images.unsplash.com/photo-1544620347-c4fd4a3d5957?auto=format&fit=crop&q=80"
        .to_string()
}

fn default_hero_image_alt() -> String {
    "Person in wheelchair accessing public transport".to_string()
}

fn default_sign_in_label() -> String {
    "Sign In".to_string()
}

/// Live-data dashboard settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LiveDataSettings {
    /// Seconds between clock refreshes while the dashboard is open
    #[serde(default = "default_refresh_interval_secs")]
    pub refresh_interval_secs: u64,
}

impl Default for LiveDataSettings {
    fn default() -> Self {
        Self {
            refresh_interval_secs: default_refresh_interval_secs(),
        }
    }
}

impl LiveDataSettings {
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs)
    }
}

fn default_refresh_interval_secs() -> u64 {
    DEFAULT_REFRESH_INTERVAL_SECS
}

/// Report form settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ReportSettings {
    /// Text of the dialog shown after a report is submitted
    #[serde(default = "default_confirmation_message")]
    pub confirmation_message: String,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            confirmation_message: default_confirmation_message(),
        }
    }
}

fn default_confirmation_message() -> String {
    "Report submitted successfully!".to_string()
}

/// Browser console logging
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct LoggingSettings {
    #[serde(default)]
    pub level: LogLevel,
}

/// Minimum level forwarded to the browser console
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Error => write!(f, "error"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Trace => write!(f, "trace"),
        }
    }
}
