//! The seam through which the core reports events.

use std::sync::Arc;

use tracing::info;

use super::types::PanelEvent;

/// Receives semantic events from the moderator and the commentators.
///
/// The core calls `emit` at each protocol step and never formats output or
/// timestamps itself. Implementations decide what to do with the event:
/// [`TracingSink`] logs it, [`EventHistory`] records it for inspection.
///
/// [`EventHistory`]: super::history::EventHistory
pub trait EventSink: Send + Sync {
    /// Deliver one event. Called concurrently from N+1 threads.
    fn emit(&self, event: PanelEvent);
}

/// Shared reference to an event sink.
pub type SharedSink = Arc<dyn EventSink>;

/// Logs every event through `tracing` at info level.
///
/// Timestamps and coloring come from the subscriber's fmt layer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn emit(&self, event: PanelEvent) {
        match event {
            PanelEvent::CommentatorReady { id } => {
                info!(commentator = id, "ready for the round");
            }
            PanelEvent::QuestionOpened { round } => {
                info!(round, "moderator asked the question");
            }
            PanelEvent::AnswerQueued { id, position } => {
                info!(commentator = id, position, "generates an answer");
            }
            PanelEvent::Speaking { id, secs } => {
                info!(commentator = id, secs, "turn to speak");
            }
            PanelEvent::FinishedSpeaking { id } => {
                info!(commentator = id, "finished speaking");
            }
            PanelEvent::RoundEnded { round } => {
                info!(round, "end of the round");
            }
            PanelEvent::GameEnded { rounds } => {
                info!(rounds, "end of the game");
            }
        }
    }
}
