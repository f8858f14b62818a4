//! Test utilities for time-driven state
//!
//! Provides a [`Scheduler`] whose clock only moves when a test advances it.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use transit_core::prelude::*;

use crate::live_data::Scheduler;

struct Interval {
    id: usize,
    every: Duration,
    next_due: Duration,
    tick: Rc<dyn Fn()>,
}

#[derive(Default)]
struct Inner {
    now: Duration,
    next_id: usize,
    intervals: Vec<Interval>,
    cancelled: usize,
    fail_start: bool,
}

/// Scheduler driven by simulated time.
///
/// Clones share the same clock and timer table.
#[derive(Clone, Default)]
pub struct SimulatedScheduler {
    inner: Rc<RefCell<Inner>>,
}

impl SimulatedScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// A scheduler that refuses to start timers
    pub fn failing() -> Self {
        let scheduler = Self::default();
        scheduler.inner.borrow_mut().fail_start = true;
        scheduler
    }

    /// Move the clock forward, firing every interval that comes due
    pub fn advance(&self, by: Duration) {
        let target = self.inner.borrow().now + by;
        loop {
            // Find the earliest due interval without holding the borrow while ticking
            let due = {
                let inner = self.inner.borrow();
                inner
                    .intervals
                    .iter()
                    .filter(|i| i.next_due <= target)
                    .min_by_key(|i| (i.next_due, i.id))
                    .map(|i| (i.id, i.next_due, i.tick.clone()))
            };
            let Some((id, due_at, tick)) = due else {
                break;
            };
            {
                let mut inner = self.inner.borrow_mut();
                inner.now = due_at;
                if let Some(interval) = inner.intervals.iter_mut().find(|i| i.id == id) {
                    interval.next_due += interval.every;
                }
            }
            tick();
        }
        self.inner.borrow_mut().now = target;
    }

    pub fn now(&self) -> Duration {
        self.inner.borrow().now
    }

    pub fn active_count(&self) -> usize {
        self.inner.borrow().intervals.len()
    }

    pub fn cancel_count(&self) -> usize {
        self.inner.borrow().cancelled
    }
}

impl std::fmt::Debug for SimulatedScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("SimulatedScheduler")
            .field("now", &inner.now)
            .field("active", &inner.intervals.len())
            .finish()
    }
}

impl Scheduler for SimulatedScheduler {
    type Handle = usize;

    fn start_interval<F>(&self, every: Duration, tick: F) -> Result<usize>
    where
        F: Fn() + 'static,
    {
        let mut inner = self.inner.borrow_mut();
        if inner.fail_start {
            return Err(Error::browser("interval could not be scheduled"));
        }
        let id = inner.next_id;
        inner.next_id += 1;
        let next_due = inner.now + every;
        inner.intervals.push(Interval {
            id,
            every,
            next_due,
            tick: Rc::new(tick),
        });
        Ok(id)
    }

    fn cancel(&self, handle: usize) {
        let mut inner = self.inner.borrow_mut();
        let before = inner.intervals.len();
        inner.intervals.retain(|i| i.id != handle);
        if inner.intervals.len() < before {
            inner.cancelled += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_advance_moves_clock() {
        let scheduler = SimulatedScheduler::new();
        scheduler.advance(Duration::from_secs(5));
        assert_eq!(scheduler.now(), Duration::from_secs(5));
    }

    #[test]
    fn test_intervals_fire_in_due_order() {
        let scheduler = SimulatedScheduler::new();
        let order = Rc::new(RefCell::new(Vec::new()));

        let fast = order.clone();
        scheduler
            .start_interval(Duration::from_secs(10), move || {
                fast.borrow_mut().push("fast")
            })
            .unwrap();
        let slow = order.clone();
        scheduler
            .start_interval(Duration::from_secs(25), move || {
                slow.borrow_mut().push("slow")
            })
            .unwrap();

        scheduler.advance(Duration::from_secs(30));
        assert_eq!(*order.borrow(), vec!["fast", "fast", "slow", "fast"]);
    }

    #[test]
    fn test_cancel_unknown_handle_is_ignored() {
        let scheduler = SimulatedScheduler::new();
        scheduler.cancel(42);
        assert_eq!(scheduler.cancel_count(), 0);
    }

    #[test]
    fn test_tick_may_cancel_itself() {
        let scheduler = SimulatedScheduler::new();
        let fired = Rc::new(Cell::new(0));
        let handle_slot = Rc::new(Cell::new(None));

        let (sched, count, slot) = (scheduler.clone(), fired.clone(), handle_slot.clone());
        let handle = scheduler
            .start_interval(Duration::from_secs(1), move || {
                count.set(count.get() + 1);
                if let Some(h) = slot.get() {
                    sched.cancel(h);
                }
            })
            .unwrap();
        handle_slot.set(Some(handle));

        scheduler.advance(Duration::from_secs(5));
        assert_eq!(fired.get(), 1);
    }
}
