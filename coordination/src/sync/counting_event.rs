//! Counting event — a queued signal/wait rendezvous.
//!
//! The difference from a raw condvar notify: every signal increments a
//! pending count under the lock, so a signal issued before any thread is
//! waiting is consumed by a later `wait` instead of being discarded.

use std::sync::{Condvar, Mutex};

/// A reusable wake-up primitive that never loses a pending signal.
///
/// Each successful [`wait`] consumes exactly one pending unit; [`signal`]
/// produces one unit, [`broadcast`] produces `n` at once for releasing a
/// known number of waiters.
///
/// [`wait`]: CountingEvent::wait
/// [`signal`]: CountingEvent::signal
/// [`broadcast`]: CountingEvent::broadcast
#[derive(Debug, Default)]
pub struct CountingEvent {
    pending: Mutex<usize>,
    wakeup: Condvar,
}

impl CountingEvent {
    /// Creates an event with no pending signals.
    pub fn new() -> Self {
        Self {
            pending: Mutex::new(0),
            wakeup: Condvar::new(),
        }
    }

    /// Blocks the calling thread until a pending signal is available, then
    /// consumes it.
    ///
    /// Returns immediately when signals were queued before the call. The
    /// wait is re-checked on every wakeup, so spurious wakeups and
    /// competing waiters cannot drive the count negative.
    pub fn wait(&self) {
        let mut pending = self.pending.lock().unwrap();
        while *pending == 0 {
            pending = self.wakeup.wait(pending).unwrap();
        }
        *pending -= 1;
    }

    /// Queues one signal and wakes one blocked waiter, if any.
    pub fn signal(&self) {
        let mut pending = self.pending.lock().unwrap();
        *pending += 1;
        self.wakeup.notify_one();
    }

    /// Queues `n` signals and wakes all blocked waiters.
    ///
    /// Used when exactly `n` threads are expected to each consume one unit,
    /// e.g. releasing every commentator into the decision phase at once.
    pub fn broadcast(&self, n: usize) {
        let mut pending = self.pending.lock().unwrap();
        *pending += n;
        self.wakeup.notify_all();
    }

    /// Current pending count. Advisory only — may be stale the instant it
    /// is read.
    pub fn pending(&self) -> usize {
        *self.pending.lock().unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_signal_before_wait_is_not_lost() {
        let event = CountingEvent::new();
        event.signal();
        event.signal();
        event.signal();
        assert_eq!(event.pending(), 3);

        // All three waits return immediately on the same thread.
        event.wait();
        event.wait();
        event.wait();
        assert_eq!(event.pending(), 0);
    }

    #[test]
    fn test_wait_blocks_until_signal() {
        let event = Arc::new(CountingEvent::new());
        let woke = Arc::new(AtomicBool::new(false));

        let handle = {
            let event = Arc::clone(&event);
            let woke = Arc::clone(&woke);
            thread::spawn(move || {
                event.wait();
                woke.store(true, Ordering::SeqCst);
            })
        };

        thread::sleep(Duration::from_millis(50));
        assert!(!woke.load(Ordering::SeqCst));

        event.signal();
        handle.join().unwrap();
        assert!(woke.load(Ordering::SeqCst));
    }

    #[test]
    fn test_broadcast_releases_exactly_n() {
        let event = Arc::new(CountingEvent::new());

        let waiters: Vec<_> = (0..4)
            .map(|_| {
                let event = Arc::clone(&event);
                thread::spawn(move || event.wait())
            })
            .collect();

        // Give the waiters a moment to block, then release all four.
        thread::sleep(Duration::from_millis(50));
        event.broadcast(4);
        for handle in waiters {
            handle.join().unwrap();
        }
        assert_eq!(event.pending(), 0);
    }

    #[test]
    fn test_broadcast_units_are_consumable_later() {
        let event = CountingEvent::new();
        event.broadcast(2);
        event.wait();
        event.wait();
        assert_eq!(event.pending(), 0);
    }

    #[test]
    fn test_interleaved_producers_and_consumers() {
        let event = Arc::new(CountingEvent::new());

        let producers: Vec<_> = (0..8)
            .map(|_| {
                let event = Arc::clone(&event);
                thread::spawn(move || {
                    for _ in 0..100 {
                        event.signal();
                    }
                })
            })
            .collect();

        let consumers: Vec<_> = (0..8)
            .map(|_| {
                let event = Arc::clone(&event);
                thread::spawn(move || {
                    for _ in 0..100 {
                        event.wait();
                    }
                })
            })
            .collect();

        for handle in producers.into_iter().chain(consumers) {
            handle.join().unwrap();
        }
        assert_eq!(event.pending(), 0);
    }
}
