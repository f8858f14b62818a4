//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::AppState;

use super::{live_data, navigation, report, UpdateResult};

/// Process a message and update state
/// Returns an optional action for the host to perform
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::ToggleDarkMode => navigation::handle_toggle_dark_mode(state),
        Message::Navigate(route) => navigation::handle_navigate(state, route),
        Message::RouteEntered(route) => navigation::handle_route_entered(state, route),

        // ─────────────────────────────────────────────────────────
        // Report Form Messages
        // ─────────────────────────────────────────────────────────
        Message::EditReport(field) => report::handle_edit(state, field),
        Message::SubmitReport => report::handle_submit(state),

        // ─────────────────────────────────────────────────────────
        // Live Data Messages
        // ─────────────────────────────────────────────────────────
        Message::RefreshTick { at } => live_data::handle_refresh_tick(state, at),
    }
}
