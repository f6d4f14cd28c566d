//! Guarded integer cell — serialized access plus conditional transitions.

use std::sync::{Condvar, Mutex};

use super::counting_event::CountingEvent;

/// A mutually-exclusive integer cell.
///
/// Every access runs under one lock, so no thread ever observes a
/// half-written value. Beyond plain read/write/increment, the cell offers
/// two conditional operations that keep the check and the consequence in a
/// single critical section — the pattern that prevents lost-wakeup races
/// between a state change and its notification:
///
/// - [`compare_and_set`]: test-and-replace.
/// - [`compare_and_signal`]: test-and-notify a [`CountingEvent`].
///
/// Mutating operations wake threads blocked in [`wait_for`], which replaces
/// the busy-poll loops a naive rendition of this protocol would use.
///
/// [`compare_and_set`]: GuardedInt::compare_and_set
/// [`compare_and_signal`]: GuardedInt::compare_and_signal
/// [`wait_for`]: GuardedInt::wait_for
#[derive(Debug, Default)]
pub struct GuardedInt {
    value: Mutex<i64>,
    changed: Condvar,
}

impl GuardedInt {
    /// Creates a cell holding `initial`.
    pub fn new(initial: i64) -> Self {
        Self {
            value: Mutex::new(initial),
            changed: Condvar::new(),
        }
    }

    /// Serialized read of the current value.
    pub fn get(&self) -> i64 {
        *self.value.lock().unwrap()
    }

    /// Serialized write, waking any `wait_for` callers.
    pub fn set(&self, value: i64) {
        let mut guard = self.value.lock().unwrap();
        *guard = value;
        self.changed.notify_all();
    }

    /// Serialized `value += 1`, returning the post-increment value.
    ///
    /// The return value is unique to this caller: when N threads each
    /// increment once, exactly one of them observes the count land on N.
    /// That caller is "the Nth" — determined inside the critical section,
    /// with no second racy read.
    pub fn increment(&self) -> i64 {
        let mut guard = self.value.lock().unwrap();
        *guard += 1;
        self.changed.notify_all();
        *guard
    }

    /// If the current value equals `expected`, replaces it with `new` and
    /// returns `true`; otherwise leaves it unchanged and returns `false`.
    pub fn compare_and_set(&self, expected: i64, new: i64) -> bool {
        let mut guard = self.value.lock().unwrap();
        if *guard != expected {
            return false;
        }
        *guard = new;
        self.changed.notify_all();
        true
    }

    /// If the current value equals `expected`, signals `event`.
    ///
    /// The check and the signal share the cell's critical section, so no
    /// concurrent increment can slip between them. Returns whether the
    /// signal fired. Lock order is fixed (cell, then event), so the nesting
    /// cannot deadlock.
    pub fn compare_and_signal(&self, expected: i64, event: &CountingEvent) -> bool {
        let guard = self.value.lock().unwrap();
        if *guard != expected {
            return false;
        }
        event.signal();
        drop(guard);
        true
    }

    /// Blocks the calling thread until the value equals `target`.
    ///
    /// Condvar-based: consumes no CPU while waiting, and re-checks the
    /// value on every wakeup. The wake conditions are identical to polling
    /// `get()` in a loop.
    pub fn wait_for(&self, target: i64) {
        let mut guard = self.value.lock().unwrap();
        while *guard != target {
            guard = self.changed.wait(guard).unwrap();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_get_set() {
        let cell = GuardedInt::new(-1);
        assert_eq!(cell.get(), -1);
        cell.set(7);
        assert_eq!(cell.get(), 7);
    }

    #[test]
    fn test_concurrent_increments_all_counted() {
        let cell = Arc::new(GuardedInt::new(0));
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let cell = Arc::clone(&cell);
                thread::spawn(move || {
                    for _ in 0..100 {
                        cell.increment();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(cell.get(), 800);
    }

    #[test]
    fn test_increment_returns_unique_values() {
        let cell = Arc::new(GuardedInt::new(0));
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let cell = Arc::clone(&cell);
                thread::spawn(move || (0..50).map(|_| cell.increment()).collect::<Vec<_>>())
            })
            .collect();

        let mut seen: Vec<i64> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        seen.sort_unstable();

        // Every post-increment value from 1..=400 observed exactly once.
        assert_eq!(seen, (1..=400).collect::<Vec<_>>());
    }

    #[test]
    fn test_compare_and_set() {
        let cell = GuardedInt::new(3);
        assert!(!cell.compare_and_set(5, 10));
        assert_eq!(cell.get(), 3);
        assert!(cell.compare_and_set(3, 10));
        assert_eq!(cell.get(), 10);
    }

    #[test]
    fn test_compare_and_signal_fires_only_on_match() {
        let cell = GuardedInt::new(2);
        let event = CountingEvent::new();

        assert!(!cell.compare_and_signal(3, &event));
        assert_eq!(event.pending(), 0);

        cell.increment();
        assert!(cell.compare_and_signal(3, &event));
        assert_eq!(event.pending(), 1);
    }

    #[test]
    fn test_wait_for_blocks_then_wakes_on_set() {
        let cell = Arc::new(GuardedInt::new(0));
        let waiter = {
            let cell = Arc::clone(&cell);
            thread::spawn(move || cell.wait_for(5))
        };

        thread::sleep(Duration::from_millis(50));
        cell.set(4);
        thread::sleep(Duration::from_millis(20));
        cell.set(5);
        waiter.join().unwrap();
    }

    #[test]
    fn test_wait_for_already_satisfied_returns_immediately() {
        let cell = GuardedInt::new(9);
        cell.wait_for(9);
    }

    #[test]
    fn test_wait_for_wakes_on_increment() {
        let cell = Arc::new(GuardedInt::new(0));
        let waiter = {
            let cell = Arc::clone(&cell);
            thread::spawn(move || cell.wait_for(3))
        };

        for _ in 0..3 {
            thread::sleep(Duration::from_millis(10));
            cell.increment();
        }
        waiter.join().unwrap();
    }
}
