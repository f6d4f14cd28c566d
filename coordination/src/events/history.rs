//! In-memory, timestamped event history.
//!
//! The observation surface for protocol-level assertions: run the panel
//! with an [`EventHistory`] sink, then query what happened and in what
//! order.

use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::sink::EventSink;
use super::types::{CommentatorId, PanelEvent};

/// One event plus the instant it was recorded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordedEvent {
    /// When the sink received the event.
    pub at: DateTime<Utc>,
    /// The event itself.
    pub event: PanelEvent,
}

/// Records every emitted event, in arrival order, with a timestamp.
///
/// Arrival order is the order threads passed through the history's lock,
/// i.e. a real interleaving of the run.
#[derive(Debug, Default)]
pub struct EventHistory {
    entries: Mutex<Vec<RecordedEvent>>,
}

impl EventHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all recorded events, in arrival order.
    pub fn events(&self) -> Vec<PanelEvent> {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .map(|entry| entry.event.clone())
            .collect()
    }

    /// Snapshot of all entries with their timestamps.
    pub fn entries(&self) -> Vec<RecordedEvent> {
        self.entries.lock().unwrap().clone()
    }

    /// Events whose [`event_type`] matches `event_type`, in arrival order.
    ///
    /// [`event_type`]: PanelEvent::event_type
    pub fn of_type(&self, event_type: &str) -> Vec<PanelEvent> {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .filter(|entry| entry.event.event_type() == event_type)
            .map(|entry| entry.event.clone())
            .collect()
    }

    /// Number of recorded events of the given type.
    pub fn count_of(&self, event_type: &str) -> usize {
        self.of_type(event_type).len()
    }

    /// Events concerning one commentator, in arrival order.
    pub fn of_commentator(&self, id: CommentatorId) -> Vec<PanelEvent> {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .filter(|entry| entry.event.commentator() == Some(id))
            .map(|entry| entry.event.clone())
            .collect()
    }

    /// Total recorded events.
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    /// Whether nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.entries.lock().unwrap().is_empty()
    }
}

impl EventSink for EventHistory {
    fn emit(&self, event: PanelEvent) {
        let mut entries = self.entries.lock().unwrap();
        entries.push(RecordedEvent {
            at: Utc::now(),
            event,
        });
    }
}
