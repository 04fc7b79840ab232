//! Deferred actions with cancel-on-drop handles.
//!
//! The engine arms at most one deferred clear at a time and holds the returned
//! handle. Dropping the handle cancels the timer before this call returns, so a
//! cancelled clear can never fire later. Everything runs on one thread; the
//! timer callback and the frame callback never interleave.

#[cfg(test)]
#[path = "timer_test.rs"]
mod timer_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use gloo_timers::callback::Timeout;

/// Schedules the engine's deferred clear.
pub trait Scheduler {
    /// Dropping the handle cancels the scheduled call.
    type Handle;

    /// Arrange for the host to call [`crate::engine::EngineCore::fire_clear`]
    /// after `delay`.
    fn schedule(&mut self, delay: Duration) -> Self::Handle;
}

// =============================================================
// Browser
// =============================================================

/// Schedules through `setTimeout`. The callback is invoked on the browser
/// event loop once the delay elapses.
pub struct BrowserScheduler {
    on_fire: Rc<dyn Fn()>,
}

impl BrowserScheduler {
    pub fn new(on_fire: impl Fn() + 'static) -> Self {
        Self { on_fire: Rc::new(on_fire) }
    }
}

impl Scheduler for BrowserScheduler {
    /// `gloo` clears the underlying timeout when dropped.
    type Handle = Timeout;

    fn schedule(&mut self, delay: Duration) -> Timeout {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        let on_fire = Rc::clone(&self.on_fire);
        Timeout::new(millis, move || on_fire())
    }
}

// =============================================================
// Manual
// =============================================================

#[derive(Debug)]
struct Entry {
    deadline: Duration,
    cancelled: Rc<Cell<bool>>,
}

/// Scheduler driven by an explicit clock, for headless hosts and tests.
///
/// Clones share the same clock and queue, so a host can keep one clone and
/// hand another to the engine.
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    now: Rc<Cell<Duration>>,
    queue: Rc<RefCell<Vec<Entry>>>,
}

/// Handle for a [`ManualScheduler`] entry.
#[derive(Debug)]
pub struct ManualHandle {
    cancelled: Rc<Cell<bool>>,
}

impl Drop for ManualHandle {
    fn drop(&mut self) {
        self.cancelled.set(true);
    }
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current clock value.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now.get()
    }

    /// Number of armed, uncancelled, not-yet-due entries.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.borrow().iter().filter(|e| !e.cancelled.get()).count()
    }

    /// Move the clock forward and return how many uncancelled entries came
    /// due. Due and cancelled entries are removed from the queue.
    ///
    /// The caller fires the engine once per returned entry.
    pub fn advance(&self, by: Duration) -> usize {
        let now = self.now.get() + by;
        self.now.set(now);
        let mut queue = self.queue.borrow_mut();
        let before = queue.len();
        queue.retain(|e| !e.cancelled.get());
        let live = queue.len();
        queue.retain(|e| e.deadline > now);
        let due = live - queue.len();
        log::trace!("manual clock at {now:?}: {due} due, {} dropped", before - live);
        due
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ManualHandle;

    fn schedule(&mut self, delay: Duration) -> ManualHandle {
        let cancelled = Rc::new(Cell::new(false));
        self.queue.borrow_mut().push(Entry { deadline: self.now.get() + delay, cancelled: Rc::clone(&cancelled) });
        ManualHandle { cancelled }
    }
}
