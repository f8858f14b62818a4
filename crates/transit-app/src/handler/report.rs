//! Report form edits and submission

use transit_core::prelude::*;
use transit_core::Route;

use crate::message::Message;
use crate::report::ReportField;
use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

pub(crate) fn handle_edit(state: &mut AppState, field: ReportField) -> UpdateResult {
    match state.report_mut() {
        Some(form) => form.apply(field),
        None => debug!("Ignoring report edit outside the report view: {:?}", field),
    }
    UpdateResult::none()
}

/// Log the captured report, confirm it, then return to the landing page.
///
/// A form with empty required fields is held back, the way the browser's
/// constraint validation holds back a native submit.
pub(crate) fn handle_submit(state: &mut AppState) -> UpdateResult {
    let Some(form) = state.report() else {
        debug!("Ignoring report submit outside the report view");
        return UpdateResult::none();
    };

    let missing = form.missing_required();
    if !missing.is_empty() {
        let labels: Vec<_> = missing.iter().map(|f| f.label()).collect();
        warn!("Report submit blocked, missing: {}", labels.join(", "));
        return UpdateResult::none();
    }

    match form.to_json() {
        Ok(json) => info!("Form submitted: {}", json),
        Err(e) => warn!("Form submitted (state not serializable: {}): {:?}", e, form),
    }

    UpdateResult::action_then(
        UpdateAction::ShowConfirmation {
            message: state.settings.report.confirmation_message.clone(),
        },
        Message::Navigate(Route::Home),
    )
}
