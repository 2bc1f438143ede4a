//! # Debounced Requests
//!
//! The search box fires an input event for every keystroke. Filtering on each
//! one is wasted work, so requests are held until typing goes quiet.
//!
//! [`Debouncer`] keeps **at most one** pending request. Scheduling a new value
//! replaces the previous one and restarts the quiet window: earlier requests are
//! superseded, never queued. The owner polls with the current time and gets the
//! value back once its deadline has passed.
//!
//! ```
//! use stockzapp::debounce::Debouncer;
//! use std::time::{Duration, Instant};
//!
//! let mut search = Debouncer::new(Duration::from_millis(300));
//! let t0 = Instant::now();
//!
//! search.schedule("a", t0);
//! search.schedule("ar", t0 + Duration::from_millis(100));
//!
//! assert_eq!(search.take_due(t0 + Duration::from_millis(350)), None);
//! assert_eq!(search.take_due(t0 + Duration::from_millis(400)), Some("ar"));
//! assert_eq!(search.take_due(t0 + Duration::from_millis(900)), None);
//! ```

use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<Pending<T>>,
}

#[derive(Debug)]
struct Pending<T> {
    value: T,
    deadline: Instant,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Schedules `value` to fire after the quiet window, replacing any pending request.
    ///
    /// Returns true if an earlier request was superseded.
    pub fn schedule(&mut self, value: T, now: Instant) -> bool {
        let superseded = self.pending.is_some();
        self.pending = Some(Pending {
            value,
            deadline: now + self.delay,
        });
        if superseded {
            tracing::trace!("pending request superseded");
        }
        superseded
    }

    /// Takes the pending value if its deadline has passed.
    pub fn take_due(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some(pending) if pending.deadline <= now => self.pending.take().map(|p| p.value),
            _ => None,
        }
    }

    /// When the pending request will fire, if there is one.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drops the pending request without firing it.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|p| p.value)
    }
}
