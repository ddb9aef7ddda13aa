//! Fans probes out over a bounded pool of workers.
//!
//! Results always come back in input order. Each probe carries the position
//! its entry had in the input and writes into that slot, so completion order
//! never leaks into the report and duplicate `(name, address)` pairs keep
//! their own rows.

use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, warn};

use pingsheet_common::config::Config;
use pingsheet_common::models::{Entry, ProbeResult};

use crate::error::ProbeError;
use crate::prober::Prober;

/// Called with the number of finished probes after each one completes.
pub type ProgressCallback = Box<dyn Fn(usize) + Send + Sync>;

/// Probes every entry and returns one result per entry, position for position.
///
/// With `workers <= 1` entries are probed one after another. Otherwise at most
/// `workers` probes run at once. A probe that errors or panics is reported as
/// down; only a fatal [`ProbeError`] (no `ping` on this host) aborts the batch.
pub async fn dispatch(
    entries: &[Entry],
    prober: Arc<dyn Prober>,
    cfg: &Config,
    on_result: Option<ProgressCallback>,
) -> Result<Vec<ProbeResult>, ProbeError> {
    if cfg.is_sequential() {
        dispatch_sequential(entries, prober, cfg, on_result.as_ref()).await
    } else {
        dispatch_concurrent(entries, prober, cfg, on_result.as_ref()).await
    }
}

async fn dispatch_sequential(
    entries: &[Entry],
    prober: Arc<dyn Prober>,
    cfg: &Config,
    on_result: Option<&ProgressCallback>,
) -> Result<Vec<ProbeResult>, ProbeError> {
    let mut results: Vec<ProbeResult> = Vec::with_capacity(entries.len());

    for entry in entries {
        // Own task per probe so a panic stays contained like in the pool.
        let prober = Arc::clone(&prober);
        let address = entry.address.clone();
        let probe_timeout = cfg.timeout;
        let joined = tokio::spawn(async move { prober.probe(&address, probe_timeout).await }).await;

        let reachable = match joined {
            Ok(outcome) => settle(&entry.address, outcome)?,
            Err(join_err) => {
                warn!("Probe worker failed: {join_err}");
                false
            }
        };
        results.push(ProbeResult::new(entry, reachable));

        if let Some(cb) = on_result {
            cb(results.len());
        }
    }

    Ok(results)
}

async fn dispatch_concurrent(
    entries: &[Entry],
    prober: Arc<dyn Prober>,
    cfg: &Config,
    on_result: Option<&ProgressCallback>,
) -> Result<Vec<ProbeResult>, ProbeError> {
    // More permits than entries buys nothing, and tokio caps the permit count.
    let pool_size: usize = cfg
        .workers
        .min(entries.len().max(1))
        .min(Semaphore::MAX_PERMITS);
    let permits = Arc::new(Semaphore::new(pool_size));
    let mut tasks: JoinSet<(usize, Result<bool, ProbeError>)> = JoinSet::new();
    let probe_timeout = cfg.timeout;

    for (idx, entry) in entries.iter().enumerate() {
        let prober = Arc::clone(&prober);
        let permits = Arc::clone(&permits);
        let address = entry.address.clone();

        tasks.spawn(async move {
            let Ok(_permit) = permits.acquire_owned().await else {
                return (idx, Ok(false));
            };
            (idx, prober.probe(&address, probe_timeout).await)
        });
    }
    debug!(
        probes = entries.len(),
        workers = pool_size,
        "submitted probes to worker pool"
    );

    let mut slots: Vec<Option<bool>> = vec![None; entries.len()];
    let mut completed: usize = 0;

    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((idx, outcome)) => match settle(&entries[idx].address, outcome) {
                Ok(reachable) => slots[idx] = Some(reachable),
                Err(fatal) => {
                    tasks.shutdown().await;
                    return Err(fatal);
                }
            },
            Err(join_err) => {
                // Slot stays empty and is reported as down below.
                warn!("Probe worker failed: {join_err}");
            }
        }

        completed += 1;
        if let Some(cb) = on_result {
            cb(completed);
        }
    }

    Ok(entries
        .iter()
        .zip(slots)
        .map(|(entry, slot)| ProbeResult::new(entry, slot.unwrap_or(false)))
        .collect())
}

/// Folds a probe outcome into a reachability flag, keeping only fatal errors.
fn settle(address: &str, outcome: Result<bool, ProbeError>) -> Result<bool, ProbeError> {
    match outcome {
        Ok(reachable) => Ok(reachable),
        Err(e) if e.is_fatal() => Err(e),
        Err(e) => {
            debug!("{address} counted as down: {e}");
            Ok(false)
        }
    }
}
