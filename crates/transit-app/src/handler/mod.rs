//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `navigation`: Route changes and the theme toggle
//! - `report`: Report form edits and submission
//! - `live_data`: Refresh ticks of the dashboard clock

pub(crate) mod live_data;
pub(crate) mod navigation;
pub(crate) mod report;
pub(crate) mod update;

#[cfg(test)]
mod tests;

use transit_core::Route;

use crate::message::Message;

// Re-export main entry point
pub use update::update;

/// Actions that the host (the browser shell) should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Push `route` onto the browser history
    PushRoute(Route),

    /// Show a blocking confirmation dialog
    ShowConfirmation { message: String },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the host to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }

    /// Perform `action`, then continue with `msg`
    pub fn action_then(action: UpdateAction, msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: Some(action),
        }
    }
}
