//! Core domain type definitions

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

// ─────────────────────────────────────────────────────────────────
// Routing
// ─────────────────────────────────────────────────────────────────

/// A client-side view selected by URL path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    /// Landing page
    #[default]
    Home,
    /// Report an accessibility issue
    Report,
    /// Feature list
    Features,
    /// "How it works" explainer
    HowItWorks,
    /// Live accessibility dashboard
    LiveData,
}

impl Route {
    pub const ALL: [Route; 5] = [
        Route::Home,
        Route::Report,
        Route::Features,
        Route::HowItWorks,
        Route::LiveData,
    ];

    /// URL path for this route
    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Report => "/report",
            Route::Features => "/features",
            Route::HowItWorks => "/how-it-works",
            Route::LiveData => "/live-data",
        }
    }

    /// Resolve a URL path to a route
    ///
    /// A trailing slash is ignored and the empty path resolves to [`Route::Home`].
    pub fn from_path(path: &str) -> Result<Self> {
        let trimmed = path.trim_end_matches('/');
        if trimmed.is_empty() {
            return Ok(Route::Home);
        }
        Route::ALL
            .into_iter()
            .find(|route| route.path() == trimmed)
            .ok_or_else(|| Error::unknown_route(path))
    }

    /// Document title shown for this route
    pub fn title(self) -> &'static str {
        match self {
            Route::Home => "AccessibleTransit",
            Route::Report => "Report an Issue | AccessibleTransit",
            Route::Features => "Features | AccessibleTransit",
            Route::HowItWorks => "How It Works | AccessibleTransit",
            Route::LiveData => "Live Data | AccessibleTransit",
        }
    }

    pub fn is_home(self) -> bool {
        self == Route::Home
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for Route {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Route::from_path(s)
    }
}

// ─────────────────────────────────────────────────────────────────
// Theme
// ─────────────────────────────────────────────────────────────────

/// Dark-mode preference, owned by the root shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn toggle(&mut self) {
        *self = self.toggled();
    }
}

// ─────────────────────────────────────────────────────────────────
// Icons
// ─────────────────────────────────────────────────────────────────

/// Icons used across the site, referenced by their lucide asset name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Bus,
    MapPin,
    Bell,
    Users,
    ArrowRight,
    ArrowLeft,
    Moon,
    Sun,
    Camera,
    AlertCircle,
    TrendingUp,
    TrendingDown,
    Minus,
    RefreshCw,
    Settings,
    Smartphone,
    Database,
}

impl Icon {
    /// Asset name in the lucide icon set
    pub fn name(self) -> &'static str {
        match self {
            Icon::Bus => "bus",
            Icon::MapPin => "map-pin",
            Icon::Bell => "bell",
            Icon::Users => "users",
            Icon::ArrowRight => "arrow-right",
            Icon::ArrowLeft => "arrow-left",
            Icon::Moon => "moon",
            Icon::Sun => "sun",
            Icon::Camera => "camera",
            Icon::AlertCircle => "circle-alert",
            Icon::TrendingUp => "trending-up",
            Icon::TrendingDown => "trending-down",
            Icon::Minus => "minus",
            Icon::RefreshCw => "refresh-cw",
            Icon::Settings => "settings",
            Icon::Smartphone => "smartphone",
            Icon::Database => "database",
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Report form enums
// ─────────────────────────────────────────────────────────────────

/// Category of a reported accessibility issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueType {
    Elevator,
    Ramp,
    Entrance,
    Other,
}

impl IssueType {
    pub const ALL: [IssueType; 4] = [
        IssueType::Elevator,
        IssueType::Ramp,
        IssueType::Entrance,
        IssueType::Other,
    ];

    /// Form value submitted for this option
    pub fn value(self) -> &'static str {
        match self {
            IssueType::Elevator => "elevator",
            IssueType::Ramp => "ramp",
            IssueType::Entrance => "entrance",
            IssueType::Other => "other",
        }
    }

    /// Human-readable option label
    pub fn label(self) -> &'static str {
        match self {
            IssueType::Elevator => "Elevator Issue",
            IssueType::Ramp => "Ramp Issue",
            IssueType::Entrance => "Entrance Accessibility",
            IssueType::Other => "Other",
        }
    }

    /// Parse a form value; the empty placeholder option yields `None`
    pub fn from_value(value: &str) -> Option<Self> {
        IssueType::ALL.into_iter().find(|t| t.value() == value)
    }
}

/// How urgently a reported issue should be looked at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    #[default]
    Medium,
    High,
}

impl Urgency {
    pub const ALL: [Urgency; 3] = [Urgency::Low, Urgency::Medium, Urgency::High];

    pub fn value(self) -> &'static str {
        match self {
            Urgency::Low => "low",
            Urgency::Medium => "medium",
            Urgency::High => "high",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Urgency::Low => "Low",
            Urgency::Medium => "Medium",
            Urgency::High => "High",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Urgency::ALL.into_iter().find(|u| u.value() == value)
    }
}

// ─────────────────────────────────────────────────────────────────
// Dashboard enums
// ─────────────────────────────────────────────────────────────────

/// Direction indicator shown on status cards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Stable,
}

impl Trend {
    pub const ALL: [Trend; 3] = [Trend::Up, Trend::Down, Trend::Stable];

    /// Parse a trend label; anything unrecognised is treated as stable
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "up" => Trend::Up,
            "down" => Trend::Down,
            _ => Trend::Stable,
        }
    }
}

/// Operational state of a station facility
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacilityState {
    Operational,
    Partial,
    /// Any state that is neither fully nor partially operational
    Other,
}

impl FacilityState {
    pub const ALL: [FacilityState; 3] = [
        FacilityState::Operational,
        FacilityState::Partial,
        FacilityState::Other,
    ];

    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "operational" => FacilityState::Operational,
            "partial" => FacilityState::Partial,
            _ => FacilityState::Other,
        }
    }
}

/// Severity category of a recent-update entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateSeverity {
    Success,
    Warning,
    Info,
}

impl UpdateSeverity {
    pub const ALL: [UpdateSeverity; 3] = [
        UpdateSeverity::Success,
        UpdateSeverity::Warning,
        UpdateSeverity::Info,
    ];

    /// Parse a severity label; anything unrecognised is informational
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "success" => UpdateSeverity::Success,
            "warning" => UpdateSeverity::Warning,
            _ => UpdateSeverity::Info,
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Value types
// ─────────────────────────────────────────────────────────────────

/// Available-out-of-total count, displayed as `"3/4"`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountFraction {
    pub available: u32,
    pub total: u32,
}

impl CountFraction {
    pub const fn new(available: u32, total: u32) -> Self {
        Self { available, total }
    }
}

impl fmt::Display for CountFraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.available, self.total)
    }
}

/// Entrance animation delay token
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct AnimationDelay(u32);

impl AnimationDelay {
    pub const fn millis(ms: u32) -> Self {
        Self(ms)
    }

    /// CSS time value, e.g. `"0.2s"`
    pub fn css_value(self) -> String {
        format!("{}s", f64::from(self.0) / 1000.0)
    }

    /// Inline style declaration for the `animation-delay` property
    pub fn style(self) -> String {
        format!("animation-delay: {}", self.css_value())
    }
}
