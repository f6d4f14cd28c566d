//! Synchronization core for the panel protocol.
//!
//! Three primitives, each wrapping exactly one mutex around exactly its own
//! state:
//!
//! 1. **[`CountingEvent`]** (`counting_event.rs`): a queued wake-up. Signals
//!    issued before anyone waits are remembered in a pending count and
//!    satisfied by later waits — never lost.
//!
//! 2. **[`GuardedInt`]** (`guarded_int.rs`): a mutually-exclusive integer
//!    cell with serialized read/write/increment, conditional
//!    compare-and-act operations, and a blocking `wait_for`.
//!
//! 3. **[`TurnQueue`]** (`turn_queue.rs`): a bounded FIFO of commentator
//!    ids. Push and pop fail fast instead of blocking.
//!
//! The round protocol in [`crate::round`] is built entirely on these three;
//! moderator and commentators share no other mutable state.

pub mod counting_event;
pub mod guarded_int;
pub mod turn_queue;

pub use counting_event::CountingEvent;
pub use guarded_int::GuardedInt;
pub use turn_queue::{TurnQueue, TurnQueueFull};
