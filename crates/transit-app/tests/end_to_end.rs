//! End-to-end flows driven through the public message loop

use transit_app::{process_message, AppState, Message, ReportField, UpdateAction};
use transit_core::{IssueType, Route, Urgency};

fn dispatch_all(state: &mut AppState, messages: Vec<Message>) -> Vec<UpdateAction> {
    messages
        .into_iter()
        .flat_map(|msg| process_message(state, msg))
        .collect()
}

#[test]
fn report_central_station_elevator_outage() {
    let mut state = AppState::new();

    // "Report Accessibility" call-to-action on the landing page
    let actions = process_message(&mut state, Message::Navigate(Route::Report));
    assert_eq!(actions, vec![UpdateAction::PushRoute(Route::Report)]);

    let edits = dispatch_all(
        &mut state,
        vec![
            Message::EditReport(ReportField::Location("Central Station".into())),
            Message::EditReport(ReportField::IssueType(IssueType::from_value("elevator"))),
            Message::EditReport(ReportField::Description(
                "Elevator out of service".into(),
            )),
            Message::EditReport(ReportField::Urgency(Urgency::High)),
        ],
    );
    assert!(edits.is_empty());

    let form = state.report().expect("report view is open");
    assert_eq!(form.issue_type, Some(IssueType::Elevator));
    assert_eq!(form.urgency, Urgency::High);

    let actions = process_message(&mut state, Message::SubmitReport);

    let dialogs = actions
        .iter()
        .filter(|a| matches!(a, UpdateAction::ShowConfirmation { .. }))
        .count();
    let homes = actions
        .iter()
        .filter(|a| **a == UpdateAction::PushRoute(Route::Home))
        .count();
    assert_eq!(dialogs, 1);
    assert_eq!(homes, 1);
    assert_eq!(state.route().path(), "/");
}

#[test]
fn browser_back_navigation_resyncs_view() {
    let mut state = AppState::new();
    dispatch_all(
        &mut state,
        vec![
            Message::Navigate(Route::LiveData),
            Message::RouteEntered(Route::Home),
        ],
    );
    assert_eq!(state.route(), Route::Home);
    assert!(state.live_data().is_none());

    // Tick from a timer that outlived the view
    let actions = process_message(
        &mut state,
        Message::RefreshTick {
            at: chrono::Local::now(),
        },
    );
    assert!(actions.is_empty());
    assert_eq!(state.route(), Route::Home);
}
