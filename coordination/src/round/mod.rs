//! The round protocol — one moderator, N commentators, Q rounds.
//!
//! # Protocol
//!
//! Each round walks the moderator through a fixed phase cycle while the
//! commentators walk their own per-round sequence, meeting only at the
//! shared primitives:
//!
//! ```text
//!  commentators                      moderator
//!  ────────────                      ─────────
//!  ready += 1          ────────▶     wait ready == N     (AwaitingReady)
//!  wait question       ◀────────     broadcast question  (QuestionOpen)
//!  decide, maybe push
//!  decided += 1; Nth
//!  signals all-decided ────────▶     wait all-decided    (AwaitingDecisions)
//!  wait turn == id     ◀────────     pop, set turn
//!  speak, signal done  ────────▶     wait done, repeat   (GrantingTurns)
//!  wait next-round     ◀────────     reset, broadcast    (RoundReset)
//! ```
//!
//! The moderator alone drains and resets; commentators alone push and
//! check in. See [`PanelContext`] for the ownership discipline.

pub mod commentator;
pub mod context;
pub mod moderator;
pub mod phase;
pub mod runner;

pub use commentator::Commentator;
pub use context::{PanelContext, NO_SPEAKER};
pub use moderator::{Moderator, PanelSummary};
pub use phase::{RoundPhase, TransitionError};
pub use runner::{run, run_with_context, PanelError};
