//! Moderator logic — drives the round cycle from the ready barrier to the
//! final reset.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::context::{PanelContext, NO_SPEAKER};
use super::phase::{RoundPhase, TransitionError};
use crate::events::{PanelEvent, SharedSink};

/// Outcome of a completed panel run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelSummary {
    /// Rounds actually played.
    pub rounds_completed: u32,
    /// Number of commentators granted a turn, per round in order.
    pub speakers_per_round: Vec<u32>,
}

impl PanelSummary {
    /// Total spoken turns across all rounds.
    pub fn total_turns(&self) -> u32 {
        self.speakers_per_round.iter().sum()
    }

    /// Compact summary line.
    pub fn summary_line(&self) -> String {
        format!(
            "[game_over] {} rounds | {} spoken turns",
            self.rounds_completed,
            self.total_turns()
        )
    }
}

/// The moderator — sole owner of the drain-and-reset sequence.
///
/// Runs on its own thread. Each round: wait for all commentators to check
/// in, open the question, wait for all decisions, grant queued turns one
/// at a time, reset the round state, release everyone.
pub struct Moderator {
    ctx: Arc<PanelContext>,
    sink: SharedSink,
    phase: RoundPhase,
}

impl Moderator {
    /// Creates a moderator over the shared context.
    pub fn new(ctx: Arc<PanelContext>, sink: SharedSink) -> Self {
        Self {
            ctx,
            sink,
            phase: RoundPhase::AwaitingReady,
        }
    }

    /// The moderator's current phase.
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Plays all configured rounds, then ends the game.
    pub fn run(mut self) -> Result<PanelSummary, TransitionError> {
        let rounds = self.ctx.config.rounds;
        let mut speakers_per_round = Vec::with_capacity(rounds as usize);

        for round in 1..=rounds {
            if round > 1 {
                self.advance(RoundPhase::AwaitingReady)?;
            }
            let granted = self.run_round(round, round == rounds)?;
            speakers_per_round.push(granted);
        }

        self.advance(RoundPhase::Terminal)?;
        self.sink.emit(PanelEvent::GameEnded { rounds });

        Ok(PanelSummary {
            rounds_completed: rounds,
            speakers_per_round,
        })
    }

    /// One full round. Returns how many commentators were granted a turn.
    fn run_round(&mut self, round: u32, last: bool) -> Result<u32, TransitionError> {
        let n = self.ctx.commentators();

        // Ready barrier: every commentator has checked in for this round.
        self.ctx.num_ready.wait_for(n as i64);

        self.advance(RoundPhase::QuestionOpen)?;
        self.sink.emit(PanelEvent::QuestionOpened { round });
        self.ctx.question_asked.broadcast(n);

        // Decision barrier: the Nth decider signals exactly once.
        self.advance(RoundPhase::AwaitingDecisions)?;
        self.ctx.all_decided.wait();

        self.advance(RoundPhase::GrantingTurns)?;
        let mut granted = 0u32;
        while let Some(id) = self.ctx.queue.pop() {
            debug!(round, commentator = id, "granting the floor");
            self.ctx.turn.set(id as i64);
            self.ctx.commentator_done.wait();
            granted += 1;
        }

        self.advance(RoundPhase::RoundReset)?;
        self.ctx.num_decided.set(0);
        self.ctx.num_ready.set(0);
        self.ctx.turn.set(NO_SPEAKER);
        if last {
            // Must precede the broadcast: a released commentator checks the
            // flag immediately and must not re-enter the loop.
            self.ctx.mark_last_round();
        }
        self.sink.emit(PanelEvent::RoundEnded { round });
        self.ctx.next_round.broadcast(n);

        Ok(granted)
    }

    fn advance(&mut self, to: RoundPhase) -> Result<(), TransitionError> {
        self.phase = self.phase.advance_to(to)?;
        Ok(())
    }
}
