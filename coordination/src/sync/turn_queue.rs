//! Bounded FIFO of commentator ids — "who wants to speak, in order."

use std::sync::Mutex;

use thiserror::Error;

/// Push rejected because the queue is at capacity.
///
/// Structurally unreachable under the round protocol (at most N pushes per
/// round into a capacity-N queue), but the primitive reports it rather than
/// corrupting state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("turn queue full: capacity {capacity} reached")]
pub struct TurnQueueFull {
    /// The fixed capacity that was exceeded.
    pub capacity: usize,
}

struct Ring {
    elems: Vec<usize>,
    head: usize,
    count: usize,
}

/// A bounded, thread-safe FIFO queue of commentator ids.
///
/// All operations are mutually exclusive via one lock and never block:
/// `push` fails fast when full, `pop` returns `None` when empty — the
/// moderator's natural "all turns granted" terminal condition, not an
/// error.
pub struct TurnQueue {
    ring: Mutex<Ring>,
}

impl TurnQueue {
    /// Creates an empty queue holding at most `capacity` ids.
    pub fn new(capacity: usize) -> Self {
        Self {
            ring: Mutex::new(Ring {
                elems: vec![0; capacity],
                head: 0,
                count: 0,
            }),
        }
    }

    /// Appends `id` at the tail.
    ///
    /// Returns the id's 0-based position at the time of the push
    /// (informational only — the queue may drain concurrently).
    pub fn push(&self, id: usize) -> Result<usize, TurnQueueFull> {
        let mut ring = self.ring.lock().unwrap();
        let capacity = ring.elems.len();
        if ring.count >= capacity {
            return Err(TurnQueueFull { capacity });
        }
        let slot = (ring.head + ring.count) % capacity;
        ring.elems[slot] = id;
        ring.count += 1;
        Ok(ring.count - 1)
    }

    /// Removes and returns the head id, or `None` when the queue is empty.
    pub fn pop(&self) -> Option<usize> {
        let mut ring = self.ring.lock().unwrap();
        if ring.count == 0 {
            return None;
        }
        let id = ring.elems[ring.head];
        ring.head = (ring.head + 1) % ring.elems.len();
        ring.count -= 1;
        Some(id)
    }

    /// Current element count. Advisory only — may be stale the instant it
    /// is read.
    pub fn size(&self) -> usize {
        self.ring.lock().unwrap().count
    }

    /// The fixed capacity this queue was created with.
    pub fn capacity(&self) -> usize {
        self.ring.lock().unwrap().elems.len()
    }
}
