//! Application state (Model in TEA pattern)

use chrono::{DateTime, Local};
use transit_core::{Route, Theme};

use crate::config::SiteSettings;
use crate::live_data::LiveDataState;
use crate::report::ReportFormState;

/// The routed view currently shown, with its view-scoped state
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState {
    #[default]
    Landing,
    Report(ReportFormState),
    Features,
    HowItWorks,
    LiveData(LiveDataState),
}

impl ViewState {
    /// Fresh view state for a route, as created when the view mounts
    pub fn enter(route: Route, now: DateTime<Local>) -> Self {
        match route {
            Route::Home => ViewState::Landing,
            Route::Report => ViewState::Report(ReportFormState::new()),
            Route::Features => ViewState::Features,
            Route::HowItWorks => ViewState::HowItWorks,
            Route::LiveData => ViewState::LiveData(LiveDataState::new(now)),
        }
    }

    pub fn route(&self) -> Route {
        match self {
            ViewState::Landing => Route::Home,
            ViewState::Report(_) => Route::Report,
            ViewState::Features => Route::Features,
            ViewState::HowItWorks => Route::HowItWorks,
            ViewState::LiveData(_) => Route::LiveData,
        }
    }
}

/// Complete application state (the Model in TEA)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    /// Presentation flag shared by every view; single writer is `ToggleDarkMode`
    pub theme: Theme,

    pub view: ViewState,

    pub settings: SiteSettings,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: SiteSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    pub fn route(&self) -> Route {
        self.view.route()
    }

    pub fn is_dark(&self) -> bool {
        self.theme.is_dark()
    }

    /// Replace the current view, dropping its local state.
    ///
    /// Returns `false` when `route` is already shown.
    pub fn enter_route(&mut self, route: Route, now: DateTime<Local>) -> bool {
        if self.route() == route {
            return false;
        }
        self.view = ViewState::enter(route, now);
        true
    }

    pub fn report(&self) -> Option<&ReportFormState> {
        match &self.view {
            ViewState::Report(form) => Some(form),
            _ => None,
        }
    }

    pub fn report_mut(&mut self) -> Option<&mut ReportFormState> {
        match &mut self.view {
            ViewState::Report(form) => Some(form),
            _ => None,
        }
    }

    pub fn live_data(&self) -> Option<&LiveDataState> {
        match &self.view {
            ViewState::LiveData(live) => Some(live),
            _ => None,
        }
    }

    pub fn live_data_mut(&mut self) -> Option<&mut LiveDataState> {
        match &mut self.view {
            ViewState::LiveData(live) => Some(live),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = AppState::new();
        assert_eq!(state.route(), Route::Home);
        assert!(!state.is_dark());
        assert!(state.report().is_none());
        assert!(state.live_data().is_none());
    }

    #[test]
    fn test_view_state_route_matches_entered_route() {
        let now = Local::now();
        for route in Route::ALL {
            assert_eq!(ViewState::enter(route, now).route(), route);
        }
    }

    #[test]
    fn test_enter_same_route_keeps_local_state() {
        let mut state = AppState::new();
        state.enter_route(Route::Report, Local::now());
        state.report_mut().unwrap().location = "North Terminal".into();

        assert!(!state.enter_route(Route::Report, Local::now()));
        assert_eq!(state.report().unwrap().location, "North Terminal");
    }

    #[test]
    fn test_leaving_route_discards_local_state() {
        let mut state = AppState::new();
        state.enter_route(Route::Report, Local::now());
        state.report_mut().unwrap().location = "North Terminal".into();

        assert!(state.enter_route(Route::Features, Local::now()));
        assert!(state.report().is_none());

        state.enter_route(Route::Report, Local::now());
        assert!(state.report().unwrap().location.is_empty());
    }

    #[test]
    fn test_live_data_created_with_entry_time() {
        let mut state = AppState::new();
        let now = Local::now();
        state.enter_route(Route::LiveData, now);
        let live = state.live_data().unwrap();
        assert_eq!(live.last_refresh, now);
        assert_eq!(live.refresh_count, 0);
    }
}
