//! Spawns the panel's threads and joins them to a summary.

use std::sync::Arc;
use std::thread;

use thiserror::Error;
use tracing::info;

use super::commentator::Commentator;
use super::context::PanelContext;
use super::moderator::{Moderator, PanelSummary};
use super::phase::TransitionError;
use crate::config::{ConfigError, PanelConfig};
use crate::events::SharedSink;

/// Failure of a panel run.
#[derive(Debug, Error)]
pub enum PanelError {
    /// Rejected parameters; no thread was started.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The moderator attempted an illegal phase jump.
    #[error(transparent)]
    Phase(#[from] TransitionError),

    /// A thread could not be spawned.
    #[error("failed to spawn {thread} thread")]
    Spawn {
        thread: String,
        #[source]
        source: std::io::Error,
    },

    /// A thread panicked instead of completing its rounds.
    #[error("{thread} thread panicked")]
    ThreadPanicked { thread: String },
}

/// Validates the config, runs a full panel, and returns the summary.
///
/// Blocks the calling thread until all N+1 threads have been joined.
pub fn run(config: PanelConfig, sink: SharedSink) -> Result<PanelSummary, PanelError> {
    run_with_context(PanelContext::shared(config), sink)
}

/// Like [`run`], but over a caller-owned context.
///
/// The context survives the run, so callers can inspect the post-run state
/// of the counters, the floor, and the queue.
pub fn run_with_context(
    ctx: Arc<PanelContext>,
    sink: SharedSink,
) -> Result<PanelSummary, PanelError> {
    ctx.config.validate()?;
    let n = ctx.commentators();
    info!(
        commentators = n,
        rounds = ctx.config.rounds,
        probability = ctx.config.answer_probability,
        "panel starting"
    );

    let mut commentators = Vec::with_capacity(n);
    for id in 0..n {
        let commentator = Commentator::new(id, Arc::clone(&ctx), Arc::clone(&sink));
        let handle = thread::Builder::new()
            .name(format!("commentator-{id}"))
            .spawn(move || commentator.run())
            .map_err(|source| PanelError::Spawn {
                thread: format!("commentator-{id}"),
                source,
            })?;
        commentators.push(handle);
    }

    let moderator = Moderator::new(Arc::clone(&ctx), sink);
    let moderator_handle = thread::Builder::new()
        .name("moderator".to_string())
        .spawn(move || moderator.run())
        .map_err(|source| PanelError::Spawn {
            thread: "moderator".to_string(),
            source,
        })?;

    let summary = moderator_handle
        .join()
        .map_err(|_| PanelError::ThreadPanicked {
            thread: "moderator".to_string(),
        })??;

    for (id, handle) in commentators.into_iter().enumerate() {
        handle.join().map_err(|_| PanelError::ThreadPanicked {
            thread: format!("commentator-{id}"),
        })?;
    }

    info!(turns = summary.total_turns(), "panel finished");
    Ok(summary)
}
