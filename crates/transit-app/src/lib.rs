//! transit-app - Application state and update logic for AccessibleTransit
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the site:
//! the state model, messages, the update function and the loop that follows
//! chained messages. It also owns the report form model, the live-data refresh
//! timer, site configuration and the semantic style mappings. Nothing here
//! touches the browser; the website crate executes the returned actions.

pub mod config;
pub mod handler;
pub mod live_data;
pub mod message;
pub mod process;
pub mod report;
pub mod state;
pub mod theme;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

// Re-export primary types
pub use config::{load_settings, parse_settings, SiteSettings};
pub use handler::{update, UpdateAction, UpdateResult};
pub use live_data::{LiveDataState, Scheduler, ScopedRefresh};
pub use message::Message;
pub use process::process_message;
pub use report::{PhotoAttachment, ReportField, ReportFormState, RequiredField};
pub use state::{AppState, ViewState};
