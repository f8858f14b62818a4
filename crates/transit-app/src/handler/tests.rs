//! Tests for handler module

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use chrono::{Local, TimeZone};
use transit_core::{IssueType, Route, Theme, Urgency};

use super::*;
use crate::live_data::ScopedRefresh;
use crate::message::Message;
use crate::process::process_message;
use crate::report::ReportField;
use crate::state::AppState;
use crate::test_utils::SimulatedScheduler;

fn state_on(route: Route) -> AppState {
    let mut state = AppState::new();
    update(&mut state, Message::Navigate(route));
    state
}

fn fill_required(state: &mut AppState) {
    for field in [
        ReportField::Location("Central Station".into()),
        ReportField::IssueType(Some(IssueType::Elevator)),
        ReportField::Description("Elevator out of service".into()),
    ] {
        update(state, Message::EditReport(field));
    }
}

// ─────────────────────────────────────────────────────────
// Theme
// ─────────────────────────────────────────────────────────

#[test]
fn test_toggle_dark_mode_flips_theme() {
    let mut state = AppState::new();
    let result = update(&mut state, Message::ToggleDarkMode);
    assert_eq!(state.theme, Theme::Dark);
    assert!(result.action.is_none());
    assert!(result.message.is_none());
}

#[test]
fn test_toggle_dark_mode_twice_restores_theme() {
    let mut state = AppState::new();
    update(&mut state, Message::ToggleDarkMode);
    update(&mut state, Message::ToggleDarkMode);
    assert_eq!(state.theme, Theme::Light);
}

#[test]
fn test_theme_survives_navigation() {
    let mut state = AppState::new();
    update(&mut state, Message::ToggleDarkMode);
    update(&mut state, Message::Navigate(Route::LiveData));
    update(&mut state, Message::Navigate(Route::Home));
    assert!(state.is_dark());
}

// ─────────────────────────────────────────────────────────
// Navigation
// ─────────────────────────────────────────────────────────

#[test]
fn test_navigate_pushes_route() {
    let mut state = AppState::new();
    let result = update(&mut state, Message::Navigate(Route::Features));
    assert_eq!(state.route(), Route::Features);
    assert_eq!(
        result.action,
        Some(UpdateAction::PushRoute(Route::Features))
    );
}

#[test]
fn test_navigate_to_current_route_is_noop() {
    let mut state = AppState::new();
    let result = update(&mut state, Message::Navigate(Route::Home));
    assert!(result.action.is_none());
}

#[test]
fn test_every_sub_view_returns_home() {
    for route in Route::ALL.into_iter().filter(|r| !r.is_home()) {
        let mut state = AppState::new();
        update(&mut state, Message::Navigate(route));
        assert_eq!(state.route(), route);

        let actions = process_message(&mut state, Message::Navigate(Route::Home));
        assert_eq!(state.route(), Route::Home);
        assert_eq!(actions, vec![UpdateAction::PushRoute(Route::Home)]);
        assert_eq!(state.route().path(), "/");
    }
}

#[test]
fn test_route_entered_syncs_view_without_push() {
    let mut state = AppState::new();
    let result = update(&mut state, Message::RouteEntered(Route::HowItWorks));
    assert_eq!(state.route(), Route::HowItWorks);
    assert!(result.action.is_none());
}

#[test]
fn test_route_entered_for_current_route_keeps_form() {
    let mut state = state_on(Route::Report);
    update(
        &mut state,
        Message::EditReport(ReportField::Location("South Station".into())),
    );
    update(&mut state, Message::RouteEntered(Route::Report));
    assert_eq!(state.report().unwrap().location, "South Station");
}

// ─────────────────────────────────────────────────────────
// Report form
// ─────────────────────────────────────────────────────────

#[test]
fn test_edit_report_updates_form() {
    let mut state = state_on(Route::Report);
    update(
        &mut state,
        Message::EditReport(ReportField::Urgency(Urgency::High)),
    );
    assert_eq!(state.report().unwrap().urgency, Urgency::High);
}

#[test]
fn test_edit_report_outside_report_view_is_ignored() {
    let mut state = AppState::new();
    let result = update(
        &mut state,
        Message::EditReport(ReportField::Location("Central Station".into())),
    );
    assert!(result.action.is_none());
    assert_eq!(state.route(), Route::Home);
}

#[test]
fn test_complete_submit_confirms_once_and_returns_home() {
    let mut state = state_on(Route::Report);
    fill_required(&mut state);

    let actions = process_message(&mut state, Message::SubmitReport);

    assert_eq!(
        actions,
        vec![
            UpdateAction::ShowConfirmation {
                message: "Report submitted successfully!".into()
            },
            UpdateAction::PushRoute(Route::Home),
        ]
    );
    assert_eq!(state.route(), Route::Home);
    assert!(state.report().is_none());
}

#[test]
fn test_submit_uses_configured_confirmation_message() {
    let mut state = state_on(Route::Report);
    state.settings.report.confirmation_message = "Thanks!".into();
    fill_required(&mut state);

    let result = update(&mut state, Message::SubmitReport);
    assert_eq!(
        result.action,
        Some(UpdateAction::ShowConfirmation {
            message: "Thanks!".into()
        })
    );
    assert_eq!(result.message, Some(Message::Navigate(Route::Home)));
}

#[test]
fn test_incomplete_submit_is_blocked() {
    let mut state = state_on(Route::Report);
    update(
        &mut state,
        Message::EditReport(ReportField::Location("Central Station".into())),
    );

    let actions = process_message(&mut state, Message::SubmitReport);

    assert!(actions.is_empty());
    assert_eq!(state.route(), Route::Report);
    assert_eq!(state.report().unwrap().location, "Central Station");
}

#[test]
fn test_submit_outside_report_view_is_ignored() {
    let mut state = AppState::new();
    assert!(process_message(&mut state, Message::SubmitReport).is_empty());
}

// ─────────────────────────────────────────────────────────
// Live data
// ─────────────────────────────────────────────────────────

#[test]
fn test_refresh_tick_replaces_timestamp() {
    let mut state = state_on(Route::LiveData);
    let at = Local.with_ymd_and_hms(2024, 3, 1, 14, 5, 9).unwrap();

    update(&mut state, Message::RefreshTick { at });

    let live = state.live_data().unwrap();
    assert_eq!(live.last_refresh, at);
    assert_eq!(live.refresh_count, 1);
    assert_eq!(live.formatted_time(), "2:05:09 PM");
}

#[test]
fn test_refresh_tick_after_leaving_is_ignored() {
    let mut state = state_on(Route::LiveData);
    update(&mut state, Message::Navigate(Route::Home));

    let result = update(&mut state, Message::RefreshTick { at: Local::now() });

    assert!(result.action.is_none());
    assert_eq!(state.route(), Route::Home);
    assert!(state.live_data().is_none());
}

#[test]
fn test_scheduled_refresh_updates_then_stops_after_teardown() {
    let state = Rc::new(RefCell::new(state_on(Route::LiveData)));
    let scheduler = SimulatedScheduler::new();

    let tick_state = Rc::clone(&state);
    let guard = ScopedRefresh::start(scheduler.clone(), Duration::from_secs(30), move || {
        update(
            &mut tick_state.borrow_mut(),
            Message::RefreshTick { at: Local::now() },
        );
    })
    .unwrap();

    scheduler.advance(Duration::from_secs(30));
    assert_eq!(state.borrow().live_data().unwrap().refresh_count, 1);

    drop(guard);
    scheduler.advance(Duration::from_secs(90));
    assert_eq!(state.borrow().live_data().unwrap().refresh_count, 1);
    assert_eq!(scheduler.active_count(), 0);
}
