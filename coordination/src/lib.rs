//! Quiz Panel Coordination Library
//!
//! This library provides:
//! - Reusable synchronization primitives: counting event, guarded integer
//!   cell, bounded turn queue
//! - The round protocol coordinating one moderator thread with N
//!   commentator threads across Q rounds
//! - Semantic event reporting through a pluggable sink
//!
//! # Usage
//!
//! ```no_run
//! use std::sync::Arc;
//! use panel_coordination::{run, PanelConfig, TracingSink};
//!
//! let config = PanelConfig {
//!     commentators: 4,
//!     answer_probability: 0.5,
//!     rounds: 3,
//!     max_speak_secs: 3,
//!     bias: 0.0,
//! };
//! let summary = run(config, Arc::new(TracingSink)).unwrap();
//! println!("{}", summary.summary_line());
//! ```

pub mod config;
pub mod events;
pub mod round;
pub mod sync;

// Re-export key config types
pub use config::{ConfigError, PanelConfig};

// Re-export key event types
pub use events::{
    CommentatorId, EventHistory, EventSink, PanelEvent, RecordedEvent, SharedSink, TracingSink,
};

// Re-export key round types
pub use round::{
    run, run_with_context, Commentator, Moderator, PanelContext, PanelError, PanelSummary,
    RoundPhase, TransitionError, NO_SPEAKER,
};

// Re-export the synchronization primitives
pub use sync::{CountingEvent, GuardedInt, TurnQueue, TurnQueueFull};
