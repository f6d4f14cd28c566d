//! Event reporting for the panel protocol.
//!
//! Three pieces:
//!
//! 1. **Event types** (`types.rs`): the semantic vocabulary of a run, from
//!    "commentator ready" to "game ended".
//!
//! 2. **Sink** (`sink.rs`): the [`EventSink`] seam the core emits through,
//!    plus the tracing-backed sink the CLI installs.
//!
//! 3. **History** (`history.rs`): an in-memory, timestamped recording sink
//!    for inspecting what a run actually did.
//!
//! The core only ever calls [`EventSink::emit`]; which sink is wired in is
//! the runner's caller's choice.

pub mod history;
pub mod sink;
pub mod types;

pub use history::{EventHistory, RecordedEvent};
pub use sink::{EventSink, SharedSink, TracingSink};
pub use types::{CommentatorId, PanelEvent};
