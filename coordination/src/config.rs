//! Panel configuration and validation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Invalid panel parameters, detected before any thread starts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("commentator count must be positive")]
    NoCommentators,

    #[error("answer probability must be within [0, 1], got {0}")]
    ProbabilityOutOfRange(f64),

    #[error("round count must be positive")]
    NoRounds,

    #[error("max speaking duration must be at least 1 second")]
    NoSpeakingTime,
}

/// Parameters of a panel run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelConfig {
    /// Number of commentators (N). Also the turn queue capacity.
    pub commentators: usize,
    /// Probability that a commentator decides to answer (P), in `[0, 1]`.
    pub answer_probability: f64,
    /// Number of rounds to play (Q).
    pub rounds: u32,
    /// Maximum speaking duration in seconds (T); actual durations are
    /// sampled uniformly from `1..=T`.
    pub max_speak_secs: u64,
    /// Reserved tuning parameter (B). Accepted but currently unused.
    pub bias: f64,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            commentators: 4,
            answer_probability: 0.5,
            rounds: 3,
            max_speak_secs: 3,
            bias: 0.0,
        }
    }
}

impl PanelConfig {
    /// Rejects parameter combinations the core must never see.
    ///
    /// The bias parameter is deliberately not checked: it is accepted and
    /// carried, but has no effect on coordination.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.commentators == 0 {
            return Err(ConfigError::NoCommentators);
        }
        if !(0.0..=1.0).contains(&self.answer_probability) {
            return Err(ConfigError::ProbabilityOutOfRange(self.answer_probability));
        }
        if self.rounds == 0 {
            return Err(ConfigError::NoRounds);
        }
        if self.max_speak_secs == 0 {
            return Err(ConfigError::NoSpeakingTime);
        }
        Ok(())
    }
}
