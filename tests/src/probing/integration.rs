use std::sync::Arc;
use std::time::Duration;

use pingsheet_common::config::Config;
use pingsheet_common::models::{Entry, ProbeResult};
use pingsheet_core::dispatcher;
use pingsheet_core::prober::Prober;
use pingsheet_core::summary::Summary;

use crate::utils::{Fault, FaultyProber, FixedProber};

fn hosts(n: usize) -> Vec<Entry> {
    (1..=n)
        .map(|i| Entry::new(format!("vm-{i:02}"), format!("10.0.0.{i}")))
        .collect()
}

/// Later octets answer sooner, so completion order is the reverse of input order.
fn reverse_delay(address: &str) -> Duration {
    let octet: u64 = address
        .rsplit('.')
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(0);
    Duration::from_millis(50u64.saturating_sub(octet * 2))
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn order_is_stable_across_worker_counts() {
    let entries = hosts(20);
    let reachable: Vec<String> = entries
        .iter()
        .filter(|e| e.address.ends_with('3') || e.address.ends_with('7'))
        .map(|e| e.address.clone())
        .collect();
    let reachable: Vec<&str> = reachable.iter().map(String::as_str).collect();

    let mut runs: Vec<Vec<ProbeResult>> = Vec::new();
    for workers in [1, 2, 16] {
        let prober: Arc<dyn Prober> =
            Arc::new(FixedProber::new(&reachable).with_delay(reverse_delay));
        let results = dispatcher::dispatch(&entries, prober, &Config::new(1_000, workers), None)
            .await
            .unwrap();

        assert_eq!(results.len(), entries.len());
        for (entry, result) in entries.iter().zip(&results) {
            assert_eq!(entry.name, result.name);
            assert_eq!(entry.address, result.address);
        }
        runs.push(results);
    }

    assert_eq!(runs[0], runs[1]);
    assert_eq!(runs[0], runs[2]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn duplicate_entries_keep_their_own_rows() {
    let entries = vec![
        Entry::new("dup", "10.0.0.9"),
        Entry::new("other", "10.0.0.1"),
        Entry::new("dup", "10.0.0.9"),
    ];
    let prober: Arc<dyn Prober> = Arc::new(FixedProber::new(&["10.0.0.9"]));

    let results = dispatcher::dispatch(&entries, prober, &Config::new(1_000, 3), None)
        .await
        .unwrap();

    let flags: Vec<bool> = results.iter().map(|r| r.reachable).collect();
    assert_eq!(flags, vec![true, false, true]);
    assert_eq!(results[0], results[2]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn panicking_probe_only_downs_its_own_entry() {
    let entries = hosts(5);
    let prober: Arc<dyn Prober> = Arc::new(FaultyProber {
        bad_address: "10.0.0.3",
        fault: Fault::Panic,
    });

    let results = dispatcher::dispatch(&entries, prober, &Config::new(1_000, 4), None)
        .await
        .unwrap();

    let flags: Vec<bool> = results.iter().map(|r| r.reachable).collect();
    assert_eq!(flags, vec![true, true, false, true, true]);
    assert_eq!(results[2].address, "10.0.0.3");
}

#[tokio::test]
async fn probe_io_error_counts_as_down_sequentially() {
    let entries = hosts(3);
    let prober: Arc<dyn Prober> = Arc::new(FaultyProber {
        bad_address: "10.0.0.2",
        fault: Fault::IoError,
    });

    let results = dispatcher::dispatch(&entries, prober, &Config::new(1_000, 1), None)
        .await
        .unwrap();

    let flags: Vec<bool> = results.iter().map(|r| r.reachable).collect();
    assert_eq!(flags, vec![true, false, true]);
    assert_eq!(Summary::from_results(&results).exit_code(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn missing_ping_aborts_the_batch() {
    for workers in [1, 8] {
        let prober: Arc<dyn Prober> = Arc::new(FaultyProber {
            bad_address: "10.0.0.4",
            fault: Fault::PingMissing,
        });

        let err = dispatcher::dispatch(&hosts(6), prober, &Config::new(1_000, workers), None)
            .await
            .unwrap_err();

        assert!(err.is_fatal());
    }
}

#[tokio::test]
async fn all_up_run_exits_zero() {
    let entries = hosts(4);
    let addresses: Vec<&str> = entries.iter().map(|e| e.address.as_str()).collect();
    let prober: Arc<dyn Prober> = Arc::new(FixedProber::new(&addresses));

    let results = dispatcher::dispatch(&entries, prober, &Config::default(), None)
        .await
        .unwrap();

    let summary = Summary::from_results(&results);
    assert_eq!(summary.up, 4);
    assert_eq!(summary.exit_code(), 0);
}

#[tokio::test]
async fn panicking_probe_is_contained_when_sequential() {
    let entries = hosts(3);
    let prober: Arc<dyn Prober> = Arc::new(FaultyProber {
        bad_address: "10.0.0.1",
        fault: Fault::Panic,
    });

    let results = dispatcher::dispatch(&entries, prober, &Config::new(0, 0), None)
        .await
        .unwrap();

    let flags: Vec<bool> = results.iter().map(|r| r.reachable).collect();
    assert_eq!(flags, vec![false, true, true]);
}
