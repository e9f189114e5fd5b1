// src/core/scanner/mod.rs

// Public interface of the `scanner` module: the invoker seam and the
// order-preserving fan-out over a target list.
pub mod nmap_scanner;

use std::future::Future;
use std::sync::Arc;

use tokio::sync::Semaphore;
use tracing::{error, info};

use crate::core::models::{ScanOutcome, Target};

/// Produces raw scanner output for one target.
///
/// Implementations never fail: a scan that yields nothing usable comes back
/// as `ScanOutput::Failed`, so one bad target cannot abort the run.
pub trait ScanInvoker: Send + Sync + 'static {
    fn scan(&self, target: &Target) -> impl Future<Output = ScanOutcome> + Send;
}

/// Scans every target, at most `concurrency` at a time, and returns the
/// outcomes in input order regardless of completion order.
///
/// # Arguments
///
/// * `invoker` - The scanner to run for each target.
/// * `targets` - Targets in report order. Duplicates are scanned independently.
/// * `concurrency` - Upper bound on scans in flight, clamped to
///   `1..=Semaphore::MAX_PERMITS`.
pub async fn scan_all<I: ScanInvoker>(
    invoker: Arc<I>,
    targets: &[Target],
    concurrency: usize,
) -> Vec<ScanOutcome> {
    let permits = Arc::new(Semaphore::new(concurrency.clamp(1, Semaphore::MAX_PERMITS)));

    let handles: Vec<_> = targets
        .iter()
        .cloned()
        .map(|target| {
            let invoker = Arc::clone(&invoker);
            let permits = Arc::clone(&permits);
            tokio::spawn(async move {
                // Never closed, so this always holds a permit.
                let _permit = permits.acquire_owned().await.ok();
                info!(%target, "Scanning target.");
                invoker.scan(&target).await
            })
        })
        .collect();

    // Awaiting the handles in spawn order is the order-preserving join.
    let mut outcomes = Vec::with_capacity(handles.len());
    for (handle, target) in handles.into_iter().zip(targets) {
        let outcome = handle.await.unwrap_or_else(|e| {
            error!(%target, panic = %e, "Scan task panicked!");
            ScanOutcome::failed(target.clone(), format!("Scan task failed: {e}"))
        });
        outcomes.push(outcome);
    }
    outcomes
}
