//! Scoped single-shot timers and the cover's auto-advance.
//!
//! A `ScopedTimer` is acquired when a view mounts and cancelled when the
//! handle drops, whichever way the view goes away. Cancellation and firing
//! can still race, so every timer carries a `TimerId` and `AutoAdvance`
//! only honours a tick from the timer it currently holds.

use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use tracing::{debug, trace};

use crate::types::Page;

/// Identity of one scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(pub u64);

/// A deferred callback that runs once after `delay` unless dropped first.
#[derive(Debug)]
pub struct ScopedTimer {
    id: TimerId,
    // Dropping the sender disconnects the waiting thread.
    _cancel: mpsc::Sender<()>,
}

impl ScopedTimer {
    /// Schedule `fire` to run on a background thread after `delay`.
    pub fn start<F>(id: TimerId, delay: Duration, fire: F) -> Self
    where
        F: FnOnce(TimerId) + Send + 'static,
    {
        let (cancel_tx, cancel_rx) = mpsc::channel::<()>();

        thread::spawn(move || match cancel_rx.recv_timeout(delay) {
            Err(RecvTimeoutError::Timeout) => {
                trace!(timer = id.0, "timer fired");
                fire(id);
            }
            // Explicit cancel or handle dropped.
            Ok(()) | Err(RecvTimeoutError::Disconnected) => {
                trace!(timer = id.0, "timer cancelled");
            }
        });

        ScopedTimer {
            id,
            _cancel: cancel_tx,
        }
    }

    pub fn id(&self) -> TimerId {
        self.id
    }
}

// ============================================================================
// COVER AUTO-ADVANCE
// ============================================================================

/// Page shown before the automatic turn.
pub const AUTO_ADVANCE_FROM: Page = Page::Cover;
/// Page the automatic turn lands on.
pub const AUTO_ADVANCE_TO: Page = Page::Index;

/// Owns the cover's timer: running while the cover is current, gone otherwise.
#[derive(Debug)]
pub struct AutoAdvance {
    delay: Duration,
    timer: Option<ScopedTimer>,
    next_id: u64,
}

impl AutoAdvance {
    pub fn new(delay: Duration) -> Self {
        AutoAdvance {
            delay,
            timer: None,
            next_id: 0,
        }
    }

    /// Bring the timer in line with the current page.
    ///
    /// Starts a timer when the cover is current and none is running;
    /// cancels any running timer when the cover is not current.
    pub fn sync<F>(&mut self, current: Page, fire: F)
    where
        F: FnOnce(TimerId) + Send + 'static,
    {
        if current == AUTO_ADVANCE_FROM {
            if self.timer.is_none() {
                let id = TimerId(self.next_id);
                self.next_id += 1;
                debug!(timer = id.0, delay_ms = self.delay.as_millis() as u64, "cover timer armed");
                self.timer = Some(ScopedTimer::start(id, self.delay, fire));
            }
        } else {
            self.cancel();
        }
    }

    /// Drop the running timer, if any.
    pub fn cancel(&mut self) {
        if let Some(timer) = self.timer.take() {
            debug!(timer = timer.id().0, "cover timer cancelled");
        }
    }

    /// Accept a fired tick. True only for the live timer, which is consumed.
    pub fn accept(&mut self, id: TimerId) -> bool {
        let live = self.timer.as_ref().is_some_and(|t| t.id() == id);
        if live {
            self.timer = None;
        } else {
            debug!(timer = id.0, "ignoring stale timer");
        }
        live
    }

    pub fn is_armed(&self) -> bool {
        self.timer.is_some()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const SHORT: Duration = Duration::from_millis(20);
    const PATIENCE: Duration = Duration::from_millis(500);

    #[test]
    fn timer_fires_once_after_its_delay() {
        let (tx, rx) = mpsc::channel();
        let _timer = ScopedTimer::start(TimerId(7), SHORT, move |id| {
            let _ = tx.send(id);
        });
        assert_eq!(rx.recv_timeout(PATIENCE), Ok(TimerId(7)));
        assert!(rx.recv_timeout(SHORT * 3).is_err());
    }

    #[test]
    fn dropping_the_timer_prevents_the_fire() {
        let (tx, rx) = mpsc::channel();
        let timer = ScopedTimer::start(TimerId(1), Duration::from_millis(100), move |id| {
            let _ = tx.send(id);
        });
        drop(timer);
        assert_eq!(rx.recv_timeout(PATIENCE), Err(RecvTimeoutError::Disconnected));
    }

    #[test]
    fn cover_arms_the_timer_and_leaving_cancels_it() {
        let (tx, rx) = mpsc::channel();
        let mut auto = AutoAdvance::new(Duration::from_millis(100));

        let tx1 = tx.clone();
        auto.sync(Page::Cover, move |id| {
            let _ = tx1.send(id);
        });
        assert!(auto.is_armed());

        auto.sync(Page::Index, move |id| {
            let _ = tx.send(id);
        });
        assert!(!auto.is_armed());
        assert!(rx.recv_timeout(PATIENCE).is_err());
    }

    #[test]
    fn staying_on_the_cover_keeps_the_same_timer() {
        let mut auto = AutoAdvance::new(Duration::from_secs(60));
        auto.sync(Page::Cover, |_| {});
        auto.sync(Page::Cover, |_| {});
        assert!(auto.accept(TimerId(0)));
        assert!(!auto.is_armed());
    }

    #[test]
    fn cover_tick_is_accepted_once() {
        let (tx, rx) = mpsc::channel();
        let mut auto = AutoAdvance::new(SHORT);
        auto.sync(Page::Cover, move |id| {
            let _ = tx.send(id);
        });

        let id = rx.recv_timeout(PATIENCE).unwrap();
        assert!(auto.accept(id));
        assert!(!auto.accept(id));
    }

    #[test]
    fn tick_from_a_replaced_timer_is_stale() {
        let mut auto = AutoAdvance::new(Duration::from_secs(60));
        auto.sync(Page::Cover, |_| {});
        auto.sync(Page::Foreword, |_| {});
        auto.sync(Page::Cover, |_| {});

        assert!(!auto.accept(TimerId(0)));
        assert!(auto.accept(TimerId(1)));
    }

    #[test]
    fn non_cover_pages_never_arm() {
        let mut auto = AutoAdvance::new(SHORT);
        for page in Page::ALL.into_iter().filter(|&p| p != Page::Cover) {
            auto.sync(page, |_| {});
            assert!(!auto.is_armed(), "{page} armed the timer");
        }
    }
}
