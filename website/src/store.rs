//! Root store: the single owner of [`AppState`] in the browser.
//!
//! Views read state through the store and send [`Message`]s to it; the
//! actions returned by the update loop are performed here.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use transit_app::{process_message, AppState, Message, UpdateAction};
use transit_core::prelude::{debug, warn};
use transit_core::{Error, Result, ResultExt, Theme};

#[derive(Debug, Clone, Copy)]
pub struct Store {
    state: RwSignal<AppState>,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self {
            state: RwSignal::new(state),
        }
    }

    pub fn provide(self) {
        provide_context(self);
    }

    /// Tracked read of the whole state
    pub fn with<U>(&self, f: impl FnOnce(&AppState) -> U) -> U {
        self.state.with(f)
    }

    pub fn with_untracked<U>(&self, f: impl FnOnce(&AppState) -> U) -> U {
        self.state.with_untracked(f)
    }

    pub fn theme(&self) -> Theme {
        self.state.with(|s| s.theme)
    }

    /// Run `message` through the update loop and return the host actions
    pub fn send(&self, message: Message) -> Vec<UpdateAction> {
        self.state
            .try_update(|state| process_message(state, message))
            .unwrap_or_default()
    }

    /// Send a message that is not expected to produce host actions
    /// (theme toggle, form edits, refresh ticks, router sync)
    pub fn notify(&self, message: Message) {
        let actions = self.send(message);
        if !actions.is_empty() {
            warn!("Dropping unexpected actions: {:?}", actions);
        }
    }
}

pub fn use_store() -> Store {
    expect_context::<Store>()
}

/// Dispatcher that also performs navigation and dialogs.
///
/// Must be called inside the router.
pub fn use_dispatch() -> impl Fn(Message) + Clone + 'static {
    let store = use_store();
    let navigate = use_navigate();
    move |message| {
        for action in store.send(message) {
            match action {
                UpdateAction::PushRoute(route) => {
                    navigate(route.path(), NavigateOptions::default())
                }
                UpdateAction::ShowConfirmation { message } => {
                    if show_confirmation(&message)
                        .context("Confirmation dialog")
                        .is_err()
                    {
                        debug!("Confirmation dialog skipped");
                    }
                }
            }
        }
    }
}

fn show_confirmation(message: &str) -> Result<()> {
    let window = web_sys::window().ok_or_else(|| Error::browser("no window"))?;
    window
        .alert_with_message(message)
        .map_err(|e| Error::browser(format!("alert failed: {:?}", e)))
}
