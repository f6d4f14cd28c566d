use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use panel_coordination::{run, PanelConfig, TracingSink};
use tracing::info;

/// Turn-based quiz panel simulation: one moderator asks Q questions, N
/// commentators independently decide whether to answer and then speak in
/// exclusive, first-decided-first-served turns.
#[derive(Parser, Debug)]
#[command(name = "panel-sim", version)]
struct Cli {
    /// Number of commentators on the panel (also the answer queue capacity).
    #[arg(short = 'n', long)]
    commentators: usize,

    /// Probability that a commentator decides to answer, in [0, 1].
    #[arg(short = 'p', long)]
    probability: f64,

    /// Number of rounds to play.
    #[arg(short = 'q', long)]
    rounds: u32,

    /// Maximum speaking duration in seconds.
    #[arg(short = 't', long)]
    max_speak_secs: u64,

    /// Reserved tuning parameter, accepted but currently unused.
    #[arg(short = 'b', long, default_value_t = 0.0)]
    bias: f64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();
    let config = PanelConfig {
        commentators: cli.commentators,
        answer_probability: cli.probability,
        rounds: cli.rounds,
        max_speak_secs: cli.max_speak_secs,
        bias: cli.bias,
    };
    // Reject bad parameters before any thread starts.
    config.validate()?;

    let summary = run(config, Arc::new(TracingSink))?;
    info!(
        rounds = summary.rounds_completed,
        turns = summary.total_turns(),
        "{}",
        summary.summary_line()
    );
    Ok(())
}
