//! Commentator logic — check in, decide, maybe speak, wait for the next
//! round.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use rand::Rng;
use tracing::warn;

use super::context::PanelContext;
use crate::events::{CommentatorId, PanelEvent, SharedSink};

/// One of the N symmetric panel participants.
///
/// Runs on its own thread, looping one round at a time until the moderator
/// marks the last round. All coordination goes through the shared
/// [`PanelContext`]; the answer decision itself is thread-local and never
/// shared.
pub struct Commentator {
    id: CommentatorId,
    ctx: Arc<PanelContext>,
    sink: SharedSink,
}

impl Commentator {
    /// Creates the commentator with stable id `id` in `[0, N)`.
    pub fn new(id: CommentatorId, ctx: Arc<PanelContext>, sink: SharedSink) -> Self {
        Self { id, ctx, sink }
    }

    /// This commentator's stable id.
    pub fn id(&self) -> CommentatorId {
        self.id
    }

    /// Plays rounds until the last-round flag is observed.
    pub fn run(self) {
        let mut rng = rand::thread_rng();
        loop {
            self.run_round(&mut rng);
            if self.ctx.is_last_round() {
                break;
            }
        }
    }

    /// One round of the per-commentator sequence.
    fn run_round(&self, rng: &mut impl Rng) {
        let n = self.ctx.commentators() as i64;

        self.sink.emit(PanelEvent::CommentatorReady { id: self.id });
        self.ctx.num_ready.increment();

        self.ctx.question_asked.wait();

        let wants_answer = rng.gen::<f64>() < self.ctx.config.answer_probability;
        let queued = wants_answer && self.enqueue();

        // The increment whose result lands exactly on N belongs to the last
        // decider; only that commentator wakes the moderator.
        if self.ctx.num_decided.increment() == n {
            self.ctx.all_decided.signal();
        }

        if queued {
            self.speak(rng);
        }

        self.ctx.next_round.wait();
    }

    /// Takes a queue slot. Returns whether the slot was granted.
    fn enqueue(&self) -> bool {
        match self.ctx.queue.push(self.id) {
            Ok(position) => {
                self.sink.emit(PanelEvent::AnswerQueued {
                    id: self.id,
                    position,
                });
                true
            }
            Err(err) => {
                // Unreachable under the round protocol; a full queue means
                // the protocol itself is broken, so skip speaking rather
                // than wait for a grant that cannot come.
                warn!(commentator = self.id, %err, "queue rejected answer");
                false
            }
        }
    }

    /// Blocks until granted the floor, speaks, yields.
    fn speak(&self, rng: &mut impl Rng) {
        self.ctx.turn.wait_for(self.id as i64);

        let secs = rng.gen_range(1..=self.ctx.config.max_speak_secs);
        self.sink.emit(PanelEvent::Speaking { id: self.id, secs });
        thread::sleep(Duration::from_secs(secs));
        self.sink.emit(PanelEvent::FinishedSpeaking { id: self.id });

        self.ctx.commentator_done.signal();
    }
}
