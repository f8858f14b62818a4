//! Live-data dashboard state and its view-scoped refresh timer.
//!
//! The dashboard content is static; the only thing that changes is the
//! "Last updated" clock, which is replaced on every refresh tick while the
//! view is open.

use std::time::Duration;

use chrono::{DateTime, Local};
use transit_core::prelude::*;

/// View-local state of the live-data dashboard
#[derive(Debug, Clone, PartialEq)]
pub struct LiveDataState {
    pub last_refresh: DateTime<Local>,
    /// Number of refresh ticks received since the view was entered
    pub refresh_count: u32,
}

impl LiveDataState {
    pub fn new(opened_at: DateTime<Local>) -> Self {
        Self {
            last_refresh: opened_at,
            refresh_count: 0,
        }
    }

    pub fn record_refresh(&mut self, at: DateTime<Local>) {
        self.last_refresh = at;
        self.refresh_count = self.refresh_count.saturating_add(1);
    }

    /// Clock text, e.g. `3:07:45 PM`
    pub fn formatted_time(&self) -> String {
        self.last_refresh.format("%-I:%M:%S %p").to_string()
    }
}

/// Source of recurring timers (browser intervals, or simulated time in tests)
pub trait Scheduler {
    type Handle: Copy + std::fmt::Debug;

    /// Call `tick` every `every` until the returned handle is cancelled
    fn start_interval<F>(&self, every: Duration, tick: F) -> Result<Self::Handle>
    where
        F: Fn() + 'static;

    fn cancel(&self, handle: Self::Handle);
}

/// A recurring timer bound to the lifetime of a view.
///
/// Started when the view is entered; cancelled explicitly on cleanup or
/// implicitly on drop. Cancelling twice is a no-op.
#[derive(Debug)]
pub struct ScopedRefresh<S: Scheduler> {
    scheduler: S,
    handle: Option<S::Handle>,
}

impl<S: Scheduler> ScopedRefresh<S> {
    pub fn start<F>(scheduler: S, every: Duration, tick: F) -> Result<Self>
    where
        F: Fn() + 'static,
    {
        let handle = scheduler.start_interval(every, tick)?;
        debug!("Started refresh timer every {:?}", every);
        Ok(Self {
            scheduler,
            handle: Some(handle),
        })
    }

    pub fn is_active(&self) -> bool {
        self.handle.is_some()
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.scheduler.cancel(handle);
            debug!("Cancelled refresh timer");
        }
    }
}

impl<S: Scheduler> Drop for ScopedRefresh<S> {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::SimulatedScheduler;
    use chrono::TimeZone;
    use std::cell::Cell;
    use std::rc::Rc;

    const THIRTY_SECONDS: Duration = Duration::from_secs(30);

    #[test]
    fn test_record_refresh_replaces_timestamp() {
        let opened = Local.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();
        let later = Local.with_ymd_and_hms(2024, 5, 1, 9, 0, 30).unwrap();

        let mut state = LiveDataState::new(opened);
        state.record_refresh(later);

        assert_eq!(state.last_refresh, later);
        assert_eq!(state.refresh_count, 1);
    }

    #[test]
    fn test_formatted_time_is_twelve_hour_clock() {
        let at = Local.with_ymd_and_hms(2024, 5, 1, 15, 7, 45).unwrap();
        assert_eq!(LiveDataState::new(at).formatted_time(), "3:07:45 PM");
    }

    #[test]
    fn test_scoped_refresh_ticks_after_interval() {
        let scheduler = SimulatedScheduler::new();
        let ticks = Rc::new(Cell::new(0));
        let counter = ticks.clone();

        let _refresh = ScopedRefresh::start(scheduler.clone(), THIRTY_SECONDS, move || {
            counter.set(counter.get() + 1)
        })
        .unwrap();

        scheduler.advance(Duration::from_secs(29));
        assert_eq!(ticks.get(), 0);

        scheduler.advance(Duration::from_secs(1));
        assert_eq!(ticks.get(), 1);

        scheduler.advance(Duration::from_secs(60));
        assert_eq!(ticks.get(), 3);
    }

    #[test]
    fn test_scoped_refresh_stops_after_drop() {
        let scheduler = SimulatedScheduler::new();
        let ticks = Rc::new(Cell::new(0));
        let counter = ticks.clone();

        let refresh = ScopedRefresh::start(scheduler.clone(), THIRTY_SECONDS, move || {
            counter.set(counter.get() + 1)
        })
        .unwrap();
        scheduler.advance(THIRTY_SECONDS);
        assert_eq!(ticks.get(), 1);

        drop(refresh);
        assert_eq!(scheduler.active_count(), 0);

        scheduler.advance(Duration::from_secs(300));
        assert_eq!(ticks.get(), 1);
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let scheduler = SimulatedScheduler::new();
        let mut refresh = ScopedRefresh::start(scheduler.clone(), THIRTY_SECONDS, || {}).unwrap();

        refresh.cancel();
        refresh.cancel();
        drop(refresh);

        assert_eq!(scheduler.active_count(), 0);
        assert_eq!(scheduler.cancel_count(), 1);
    }

    #[test]
    fn test_failed_start_reports_error() {
        let scheduler = SimulatedScheduler::failing();
        let result = ScopedRefresh::start(scheduler, THIRTY_SECONDS, || {});
        assert!(matches!(result, Err(Error::Browser { .. })));
    }
}
