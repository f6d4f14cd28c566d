//! Shared coordination context — every primitive the protocol runs on.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::config::PanelConfig;
use crate::sync::{CountingEvent, GuardedInt, TurnQueue};

/// Sentinel value of the `turn` cell while nobody holds the floor.
pub const NO_SPEAKER: i64 = -1;

/// The coordination context shared by the moderator and all commentators.
///
/// Constructed once before any thread starts and passed around by [`Arc`];
/// there is no ambient or static state. The primitives here are the sole
/// shared-mutation surface of the protocol — threads never touch each
/// other's locals.
///
/// Ownership discipline: the moderator is the only thread that writes
/// `turn`, resets the counters, or pops the queue; commentators only
/// increment the counters, push their own id, and wait for their own
/// grant. That asymmetry is what keeps the between-round reset race-free.
pub struct PanelContext {
    /// The validated run parameters.
    pub config: PanelConfig,
    /// Broadcast by the moderator to release all commentators into the
    /// decision phase. One unit per commentator per round.
    pub question_asked: CountingEvent,
    /// Signaled exactly once per round, by the commentator whose decision
    /// completed the set.
    pub all_decided: CountingEvent,
    /// Signaled by each speaker when it yields the floor.
    pub commentator_done: CountingEvent,
    /// Broadcast by the moderator after the reset to release everyone into
    /// the next round (or out of the loop on the last one).
    pub next_round: CountingEvent,
    /// Id of the commentator currently permitted to speak, or
    /// [`NO_SPEAKER`].
    pub turn: GuardedInt,
    /// Commentators that have checked in for the current round.
    pub num_ready: GuardedInt,
    /// Commentators that have finished deciding for the current round.
    pub num_decided: GuardedInt,
    /// Who wants to speak, in decision order. Capacity N.
    pub queue: TurnQueue,
    last_round: AtomicBool,
}

impl PanelContext {
    /// Builds the context for a run. `config` must already be validated.
    pub fn new(config: PanelConfig) -> Self {
        let capacity = config.commentators;
        Self {
            config,
            question_asked: CountingEvent::new(),
            all_decided: CountingEvent::new(),
            commentator_done: CountingEvent::new(),
            next_round: CountingEvent::new(),
            turn: GuardedInt::new(NO_SPEAKER),
            num_ready: GuardedInt::new(0),
            num_decided: GuardedInt::new(0),
            queue: TurnQueue::new(capacity),
            last_round: AtomicBool::new(false),
        }
    }

    /// Builds a shared context ready to hand to spawned threads.
    pub fn shared(config: PanelConfig) -> Arc<Self> {
        Arc::new(Self::new(config))
    }

    /// Number of commentators (N).
    pub fn commentators(&self) -> usize {
        self.config.commentators
    }

    /// Marks the current round as the last one. Moderator only; must
    /// happen before the final `next_round` broadcast so no commentator
    /// can re-enter a round that will never be played.
    pub fn mark_last_round(&self) {
        self.last_round.store(true, Ordering::SeqCst);
    }

    /// Whether the round just released was the last one.
    pub fn is_last_round(&self) -> bool {
        self.last_round.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_context_state() {
        let ctx = PanelContext::new(PanelConfig {
            commentators: 3,
            ..Default::default()
        });
        assert_eq!(ctx.commentators(), 3);
        assert_eq!(ctx.turn.get(), NO_SPEAKER);
        assert_eq!(ctx.num_ready.get(), 0);
        assert_eq!(ctx.num_decided.get(), 0);
        assert_eq!(ctx.queue.capacity(), 3);
        assert_eq!(ctx.queue.size(), 0);
        assert!(!ctx.is_last_round());
    }

    #[test]
    fn test_last_round_flag() {
        let ctx = PanelContext::new(PanelConfig::default());
        assert!(!ctx.is_last_round());
        ctx.mark_last_round();
        assert!(ctx.is_last_round());
    }
}
