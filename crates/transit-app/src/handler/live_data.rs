//! Refresh ticks of the dashboard clock

use chrono::{DateTime, Local};
use transit_core::prelude::*;

use crate::state::AppState;

use super::UpdateResult;

/// Replace the dashboard timestamp. Ticks arriving after the dashboard was
/// left are dropped.
pub(crate) fn handle_refresh_tick(state: &mut AppState, at: DateTime<Local>) -> UpdateResult {
    match state.live_data_mut() {
        Some(live) => {
            live.record_refresh(at);
            trace!("Live data refreshed at {}", live.formatted_time());
        }
        None => debug!("Dropping refresh tick outside the live-data view"),
    }
    UpdateResult::none()
}
