//! Browser-backed [`Scheduler`] using `setInterval`

use std::time::Duration;

use leptos::prelude::{set_interval_with_handle, IntervalHandle};
use transit_app::Scheduler;
use transit_core::prelude::*;

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Handle = IntervalHandle;

    fn start_interval<F>(&self, every: Duration, tick: F) -> Result<IntervalHandle>
    where
        F: Fn() + 'static,
    {
        set_interval_with_handle(tick, every)
            .map_err(|e| Error::browser(format!("setInterval failed: {:?}", e)))
    }

    fn cancel(&self, handle: IntervalHandle) {
        handle.clear();
    }
}
