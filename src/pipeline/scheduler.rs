//! Periodic execution of self-contained pipeline runs.
//!
//! Replaces self-reinvoking refresh loops with discrete scheduler ticks:
//! each tick triggers one independent run, and a watch channel stops the
//! loop for graceful shutdown. No state carries over between runs beyond
//! the pipeline configuration.

use std::time::Duration;

use tokio::sync::watch;
use tokio::time::{self, MissedTickBehavior};
use tracing::info;

use crate::feed::FeedProvider;
use crate::pipeline::FeedPipeline;
use crate::types::RunResult;

/// Default refresh cadence.
pub const DEFAULT_REFRESH_PERIOD: Duration = Duration::from_secs(30);

/// Run the pipeline once per `period` until `shutdown` becomes `true` (or
/// its sender is dropped).
///
/// The first run starts immediately. Runs never overlap, so `sink`
/// receives results in trigger order.
pub async fn run_on_interval<P, F>(
    pipeline: &FeedPipeline<P>,
    sources: &[String],
    period: Duration,
    mut shutdown: watch::Receiver<bool>,
    mut sink: F,
) where
    P: FeedProvider + Sync,
    F: FnMut(RunResult),
{
    let mut ticks = time::interval(period);
    ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = ticks.tick() => {
                sink(pipeline.run(sources).await);
            }
            changed = shutdown.changed() => {
                if changed.is_err() || *shutdown.borrow() {
                    info!("scheduler stopping");
                    return;
                }
            }
        }
    }
}
