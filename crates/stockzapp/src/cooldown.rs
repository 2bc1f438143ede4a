//! Click cooldown for row action controls.
//!
//! A double click on "delete" must not run the delete flow twice against a row
//! that is already gone. Activating a control disables it for a short window;
//! clicks that land while it is disabled are dropped. The control comes back on
//! its own when the window elapses, whatever the outcome of the action was.

use std::collections::HashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct ActionCooldown<K> {
    window: Duration,
    disabled_until: HashMap<K, Instant>,
}

impl<K: Eq + Hash + Clone> ActionCooldown<K> {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            disabled_until: HashMap::new(),
        }
    }

    /// Activates `control` if it is enabled, disabling it for the window.
    ///
    /// Returns false when the click must be ignored.
    pub fn try_activate(&mut self, control: &K, now: Instant) -> bool {
        if self.is_disabled(control, now) {
            return false;
        }
        self.disabled_until.insert(control.clone(), now + self.window);
        true
    }

    pub fn is_disabled(&self, control: &K, now: Instant) -> bool {
        self.disabled_until
            .get(control)
            .is_some_and(|until| *until > now)
    }

    /// Re-enables every control whose window has elapsed. Returns how many were released.
    pub fn sweep(&mut self, now: Instant) -> usize {
        let before = self.disabled_until.len();
        self.disabled_until.retain(|_, until| *until > now);
        before - self.disabled_until.len()
    }

    /// Earliest moment a disabled control comes back.
    pub fn next_release(&self) -> Option<Instant> {
        self.disabled_until.values().min().copied()
    }

    pub fn disabled_count(&self) -> usize {
        self.disabled_until.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_second_click_inside_window_is_ignored() {
        let mut c = ActionCooldown::new(ms(500));
        let t0 = Instant::now();
        assert!(c.try_activate(&"delete:1", t0));
        assert!(!c.try_activate(&"delete:1", t0 + ms(100)));
        assert!(!c.try_activate(&"delete:1", t0 + ms(499)));
    }

    #[test]
    fn test_control_reenables_after_window() {
        let mut c = ActionCooldown::new(ms(500));
        let t0 = Instant::now();
        assert!(c.try_activate(&"edit:1", t0));
        assert!(c.try_activate(&"edit:1", t0 + ms(500)));
    }

    #[test]
    fn test_controls_are_independent() {
        let mut c = ActionCooldown::new(ms(500));
        let t0 = Instant::now();
        assert!(c.try_activate(&"edit:1", t0));
        assert!(c.try_activate(&"delete:1", t0));
        assert!(c.try_activate(&"edit:2", t0));
    }

    #[test]
    fn test_sweep_releases_expired() {
        let mut c = ActionCooldown::new(ms(100));
        let t0 = Instant::now();
        c.try_activate(&1, t0);
        c.try_activate(&2, t0 + ms(50));
        assert_eq!(c.next_release(), Some(t0 + ms(100)));

        assert_eq!(c.sweep(t0 + ms(120)), 1);
        assert_eq!(c.disabled_count(), 1);
        assert!(!c.is_disabled(&1, t0 + ms(120)));
        assert!(c.is_disabled(&2, t0 + ms(120)));
    }
}
