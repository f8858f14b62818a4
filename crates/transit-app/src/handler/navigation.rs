//! Route changes and the theme toggle

use chrono::Local;
use transit_core::prelude::*;
use transit_core::Route;

use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

pub(crate) fn handle_toggle_dark_mode(state: &mut AppState) -> UpdateResult {
    state.theme.toggle();
    debug!("Theme switched to {:?}", state.theme);
    UpdateResult::none()
}

/// User-initiated navigation: swap the view and push the URL
pub(crate) fn handle_navigate(state: &mut AppState, route: Route) -> UpdateResult {
    let from = state.route();
    if !state.enter_route(route, Local::now()) {
        return UpdateResult::none();
    }
    info!("Navigate {} -> {}", from, route);
    UpdateResult::action(UpdateAction::PushRoute(route))
}

/// Router-initiated navigation: the URL already changed, only sync the view
pub(crate) fn handle_route_entered(state: &mut AppState, route: Route) -> UpdateResult {
    let from = state.route();
    if state.enter_route(route, Local::now()) {
        debug!("Route entered {} -> {}", from, route);
    }
    UpdateResult::none()
}
