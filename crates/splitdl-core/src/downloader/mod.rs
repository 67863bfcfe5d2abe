//! Concurrent part fetching.
//!
//! Runs one HTTP Range GET per planned part, each on its own thread, waits
//! for all of them, and hands back a `DownloadState` only when every part is
//! present. A failing part never cancels its siblings.

mod part;
mod state;

use std::any::Any;
use std::thread;

use crate::error::{DownloadError, PartFailure};
use crate::segmenter::PartPlan;
use crate::transport::Transport;

pub use part::fetch_part;
pub use state::{DownloadState, PartResult};

/// Outcome of one part task.
type PartOutcome = Result<(), DownloadError>;

/// Fetches every part of `plan` concurrently and returns the filled state.
///
/// Blocks until the last task has finished (success or failure). If any
/// planned index has no result afterwards, fails with `PartialDownload`
/// listing the missing indices and each task's error.
pub fn fetch_all(
    transport: &dyn Transport,
    url: &str,
    user_agent: &str,
    plan: PartPlan,
) -> Result<DownloadState, DownloadError> {
    let state = DownloadState::new(plan);
    tracing::info!(parts = state.plan().len(), total_size = state.total_size(), "fetching parts");

    let outcomes = run_parts(transport, url, user_agent, &state);

    let mut failures = Vec::new();
    for (index, outcome) in outcomes {
        if let Err(error) = outcome {
            let range = state.plan().parts()[index];
            tracing::warn!(index, from = range.from, to = range.to, error = %error, "part failed");
            failures.push(PartFailure { index, error });
        }
    }

    let missing = state.missing();
    if !missing.is_empty() {
        return Err(DownloadError::PartialDownload { missing, failures });
    }
    Ok(state)
}

/// Spawns one named thread per part inside a scope and joins them all.
/// Results come back in plan order.
fn run_parts(
    transport: &dyn Transport,
    url: &str,
    user_agent: &str,
    state: &DownloadState,
) -> Vec<(usize, PartOutcome)> {
    thread::scope(|scope| {
        let handles: Vec<_> = state
            .plan()
            .iter()
            .map(|range| {
                let range = *range;
                let spawned = thread::Builder::new()
                    .name(format!("part-{}", range.index))
                    .spawn_scoped(scope, move || -> PartOutcome {
                        let part = fetch_part(transport, url, user_agent, &range)?;
                        if let Err(rejected) = state.record(part) {
                            tracing::warn!(index = rejected.index(), "duplicate part result ignored");
                        }
                        Ok(())
                    });
                (range.index, spawned)
            })
            .collect();

        handles
            .into_iter()
            .map(|(index, spawned)| {
                let outcome = match spawned {
                    Ok(handle) => handle.join().unwrap_or_else(|panic| {
                        Err(DownloadError::PartTaskFailed {
                            index,
                            reason: panic_message(panic.as_ref()),
                        })
                    }),
                    Err(e) => Err(DownloadError::PartTaskFailed {
                        index,
                        reason: format!("spawn failed: {}", e),
                    }),
                };
                (index, outcome)
            })
            .collect()
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        format!("panicked: {}", s)
    } else if let Some(s) = payload.downcast_ref::<String>() {
        format!("panicked: {}", s)
    } else {
        "panicked".to_string()
    }
}
