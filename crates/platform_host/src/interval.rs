//! Periodic timer contracts and in-memory adapters.
//!
//! A started interval is represented by an owned [`IntervalHandle`]. Dropping the handle cancels
//! the host timer, so holders can tie the timer's lifetime to their own state instead of
//! remembering to clear it on every exit path.

use std::{
    cell::{Cell, RefCell},
    fmt,
    rc::Rc,
    time::Duration,
};

/// Callback invoked on every interval period.
pub type IntervalCallback = Rc<dyn Fn()>;

/// Host service that runs a callback on a fixed period.
pub trait IntervalScheduler {
    /// Starts a periodic timer.
    ///
    /// # Errors
    ///
    /// Returns an error string when the host cannot register a timer.
    fn start(&self, period: Duration, callback: IntervalCallback)
        -> Result<IntervalHandle, String>;
}

/// Owned registration of a live host interval. Cancels the interval when dropped.
pub struct IntervalHandle {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl IntervalHandle {
    /// Wraps a host-specific cancellation routine.
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

}

impl Drop for IntervalHandle {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl fmt::Debug for IntervalHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntervalHandle")
            .field("armed", &self.cancel.is_some())
            .finish()
    }
}

struct ManualTimer {
    id: u64,
    period: Duration,
    callback: IntervalCallback,
}

#[derive(Default)]
struct ManualSchedulerInner {
    next_id: Cell<u64>,
    started: Cell<usize>,
    timers: RefCell<Vec<ManualTimer>>,
}

#[derive(Clone, Default)]
/// In-memory scheduler whose timers only fire when [`ManualIntervalScheduler::fire`] is called.
pub struct ManualIntervalScheduler {
    inner: Rc<ManualSchedulerInner>,
}

impl ManualIntervalScheduler {
    /// Number of timers currently registered and not yet cancelled.
    pub fn live_count(&self) -> usize {
        self.inner.timers.borrow().len()
    }

    /// Total number of timers ever started.
    pub fn started_count(&self) -> usize {
        self.inner.started.get()
    }

    /// Periods of the live timers, in registration order.
    pub fn live_periods(&self) -> Vec<Duration> {
        self.inner
            .timers
            .borrow()
            .iter()
            .map(|timer| timer.period)
            .collect()
    }

    /// Runs one period of every live timer. Returns the number of callbacks invoked.
    pub fn fire(&self) -> usize {
        // Callbacks may start or cancel timers, so run them outside the borrow.
        let callbacks = self
            .inner
            .timers
            .borrow()
            .iter()
            .map(|timer| timer.callback.clone())
            .collect::<Vec<_>>();
        for callback in &callbacks {
            callback();
        }
        callbacks.len()
    }
}

impl fmt::Debug for ManualIntervalScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManualIntervalScheduler")
            .field("live", &self.live_count())
            .field("started", &self.started_count())
            .finish()
    }
}

impl IntervalScheduler for ManualIntervalScheduler {
    fn start(
        &self,
        period: Duration,
        callback: IntervalCallback,
    ) -> Result<IntervalHandle, String> {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner.started.set(self.inner.started.get() + 1);
        self.inner.timers.borrow_mut().push(ManualTimer {
            id,
            period,
            callback,
        });

        let inner = Rc::downgrade(&self.inner);
        Ok(IntervalHandle::new(move || {
            if let Some(inner) = inner.upgrade() {
                inner.timers.borrow_mut().retain(|timer| timer.id != id);
            }
        }))
    }
}
