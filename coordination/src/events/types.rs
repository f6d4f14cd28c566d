//! Semantic events emitted by the round protocol.
//!
//! The core reports what happened; formatting and timestamping belong to
//! whichever sink receives the event.

use serde::{Deserialize, Serialize};

/// Stable identifier of a commentator, in `[0, N)`.
pub type CommentatorId = usize;

/// Everything the panel protocol reports while running.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PanelEvent {
    /// A commentator checked in for the round.
    CommentatorReady { id: CommentatorId },

    /// The moderator opened the question for a round (1-indexed).
    QuestionOpened { round: u32 },

    /// A commentator decided to answer and took a queue slot.
    AnswerQueued { id: CommentatorId, position: usize },

    /// A commentator was granted the floor for `secs` seconds.
    Speaking { id: CommentatorId, secs: u64 },

    /// A commentator yielded the floor.
    FinishedSpeaking { id: CommentatorId },

    /// The moderator closed a round after draining the queue.
    RoundEnded { round: u32 },

    /// All rounds completed; the game is over.
    GameEnded { rounds: u32 },
}

impl PanelEvent {
    /// Snake-case tag of this event, matching the serde representation.
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::CommentatorReady { .. } => "commentator_ready",
            Self::QuestionOpened { .. } => "question_opened",
            Self::AnswerQueued { .. } => "answer_queued",
            Self::Speaking { .. } => "speaking",
            Self::FinishedSpeaking { .. } => "finished_speaking",
            Self::RoundEnded { .. } => "round_ended",
            Self::GameEnded { .. } => "game_ended",
        }
    }

    /// The commentator this event concerns, if any.
    pub fn commentator(&self) -> Option<CommentatorId> {
        match self {
            Self::CommentatorReady { id }
            | Self::AnswerQueued { id, .. }
            | Self::Speaking { id, .. }
            | Self::FinishedSpeaking { id } => Some(*id),
            Self::QuestionOpened { .. } | Self::RoundEnded { .. } | Self::GameEnded { .. } => None,
        }
    }

    /// The round this event marks a boundary of, if any.
    pub fn round(&self) -> Option<u32> {
        match self {
            Self::QuestionOpened { round } | Self::RoundEnded { round } => Some(*round),
            _ => None,
        }
    }
}

impl std::fmt::Display for PanelEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CommentatorReady { id } => write!(f, "commentator #{id} ready"),
            Self::QuestionOpened { round } => write!(f, "moderator asked question {round}"),
            Self::AnswerQueued { id, position } => {
                write!(
                    f,
                    "commentator #{id} generates an answer, queue position {position}"
                )
            }
            Self::Speaking { id, secs } => {
                write!(f, "commentator #{id}'s turn to speak for {secs} seconds")
            }
            Self::FinishedSpeaking { id } => write!(f, "commentator #{id} finished speaking"),
            Self::RoundEnded { round } => write!(f, "end of round {round}"),
            Self::GameEnded { rounds } => write!(f, "end of the game after {rounds} rounds"),
        }
    }
}
