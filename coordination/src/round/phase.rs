//! The moderator's per-round state machine.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Phase of the moderator within the round cycle.
///
/// The cycle is strictly linear: ready barrier, question broadcast,
/// decision barrier, queue drain, reset — then back around, or into
/// `Terminal` after the last round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundPhase {
    /// Blocking until every commentator has checked in.
    AwaitingReady,
    /// Broadcasting the question to all commentators.
    QuestionOpen,
    /// Blocking until every commentator has decided to answer or pass.
    AwaitingDecisions,
    /// Draining the turn queue, one exclusive speaker at a time.
    GrantingTurns,
    /// Clearing counters and the floor before releasing the next round.
    RoundReset,
    /// All rounds played; the moderator is done.
    Terminal,
}

impl RoundPhase {
    /// Whether this phase ends the moderator's run.
    pub fn is_terminal(self) -> bool {
        self == Self::Terminal
    }

    /// Phases reachable from this one.
    pub fn valid_transitions(self) -> &'static [RoundPhase] {
        match self {
            Self::AwaitingReady => &[Self::QuestionOpen],
            Self::QuestionOpen => &[Self::AwaitingDecisions],
            Self::AwaitingDecisions => &[Self::GrantingTurns],
            Self::GrantingTurns => &[Self::RoundReset],
            Self::RoundReset => &[Self::AwaitingReady, Self::Terminal],
            Self::Terminal => &[],
        }
    }

    /// Validates a transition, returning the new phase.
    pub fn advance_to(self, to: RoundPhase) -> Result<RoundPhase, TransitionError> {
        if self.valid_transitions().contains(&to) {
            Ok(to)
        } else {
            Err(TransitionError { from: self, to })
        }
    }
}

impl std::fmt::Display for RoundPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AwaitingReady => write!(f, "awaiting_ready"),
            Self::QuestionOpen => write!(f, "question_open"),
            Self::AwaitingDecisions => write!(f, "awaiting_decisions"),
            Self::GrantingTurns => write!(f, "granting_turns"),
            Self::RoundReset => write!(f, "round_reset"),
            Self::Terminal => write!(f, "terminal"),
        }
    }
}

/// Rejected phase jump.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid phase transition {from} → {to}")]
pub struct TransitionError {
    /// Phase the moderator was in.
    pub from: RoundPhase,
    /// Phase that was requested.
    pub to: RoundPhase,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_round_cycle() {
        let mut phase = RoundPhase::AwaitingReady;
        for next in [
            RoundPhase::QuestionOpen,
            RoundPhase::AwaitingDecisions,
            RoundPhase::GrantingTurns,
            RoundPhase::RoundReset,
            RoundPhase::AwaitingReady,
        ] {
            phase = phase.advance_to(next).unwrap();
        }
        assert_eq!(phase, RoundPhase::AwaitingReady);
    }

    #[test]
    fn test_reset_can_terminate() {
        let phase = RoundPhase::RoundReset;
        assert_eq!(
            phase.advance_to(RoundPhase::Terminal).unwrap(),
            RoundPhase::Terminal
        );
    }

    #[test]
    fn test_invalid_jump_rejected() {
        let err = RoundPhase::AwaitingReady
            .advance_to(RoundPhase::GrantingTurns)
            .unwrap_err();
        assert_eq!(err.from, RoundPhase::AwaitingReady);
        assert_eq!(err.to, RoundPhase::GrantingTurns);
        assert!(err.to_string().contains("awaiting_ready"));
    }

    #[test]
    fn test_terminal_is_dead_end() {
        assert!(RoundPhase::Terminal.is_terminal());
        assert!(RoundPhase::Terminal.valid_transitions().is_empty());
        assert!(RoundPhase::Terminal
            .advance_to(RoundPhase::AwaitingReady)
            .is_err());
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(RoundPhase::AwaitingReady.to_string(), "awaiting_ready");
        assert_eq!(RoundPhase::QuestionOpen.to_string(), "question_open");
        assert_eq!(
            RoundPhase::AwaitingDecisions.to_string(),
            "awaiting_decisions"
        );
        assert_eq!(RoundPhase::GrantingTurns.to_string(), "granting_turns");
        assert_eq!(RoundPhase::RoundReset.to_string(), "round_reset");
        assert_eq!(RoundPhase::Terminal.to_string(), "terminal");
    }
}
