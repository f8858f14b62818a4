//! Message types for the application (TEA pattern)

use chrono::{DateTime, Local};
use transit_core::Route;

use crate::report::ReportField;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Flip between light and dark presentation
    ToggleDarkMode,

    /// User asked to go somewhere (nav link, call-to-action, "Back to Home")
    Navigate(Route),

    /// The router now shows `route` (history navigation, typed URL, or the
    /// result of an earlier [`Message::Navigate`])
    RouteEntered(Route),

    // ─────────────────────────────────────────────────────────
    // Report Form Messages
    // ─────────────────────────────────────────────────────────
    /// A report form field was edited
    EditReport(ReportField),

    /// The report form was submitted
    SubmitReport,

    // ─────────────────────────────────────────────────────────
    // Live Data Messages
    // ─────────────────────────────────────────────────────────
    /// The live-data refresh timer fired
    RefreshTick { at: DateTime<Local> },
}
