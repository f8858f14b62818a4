//! Semantic style mappings.
//!
//! Each mapping is total over its enum; unknown labels were already folded
//! into a fallback variant when they were parsed.

use transit_core::{FacilityState, Icon, Theme, Trend, UpdateSeverity};

use super::palette;

// --- Theme ---

/// Classes for the root element of every view
pub fn page_shell(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => palette::SHELL_LIGHT,
        Theme::Dark => palette::SHELL_DARK,
    }
}

/// Icon on the dark-mode toggle: the sun offers a way out of dark mode
pub fn theme_toggle_icon(theme: Theme) -> Icon {
    match theme {
        Theme::Dark => Icon::Sun,
        Theme::Light => Icon::Moon,
    }
}

// --- Trend ---

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrendStyle {
    pub icon: Icon,
    pub class: &'static str,
}

pub fn trend_style(trend: Trend) -> TrendStyle {
    match trend {
        Trend::Up => TrendStyle {
            icon: Icon::TrendingUp,
            class: palette::TEXT_GREEN,
        },
        Trend::Down => TrendStyle {
            icon: Icon::TrendingDown,
            class: palette::TEXT_RED,
        },
        Trend::Stable => TrendStyle {
            icon: Icon::Minus,
            class: palette::TEXT_YELLOW,
        },
    }
}

// --- Facility state ---

pub fn facility_state_class(state: FacilityState) -> &'static str {
    match state {
        FacilityState::Operational => palette::TEXT_GREEN,
        FacilityState::Partial => palette::TEXT_YELLOW,
        FacilityState::Other => palette::TEXT_RED,
    }
}

// --- Update severity ---

pub fn update_severity_class(severity: UpdateSeverity) -> &'static str {
    match severity {
        UpdateSeverity::Success => palette::PANEL_GREEN,
        UpdateSeverity::Warning => palette::PANEL_YELLOW,
        UpdateSeverity::Info => palette::PANEL_BLUE,
    }
}
