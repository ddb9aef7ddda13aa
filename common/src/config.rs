use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::debug;

pub const DEFAULT_WORKBOOK: &str = "ip.xlsx";
pub const DEFAULT_TIMEOUT_MS: i64 = 1_000;
pub const DEFAULT_WORKERS: i64 = 16;

const RESULTS_SUFFIX: &str = "_results";
const RESULTS_EXTENSION: &str = "xlsx";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Time a single echo request may wait for its reply.
    ///
    /// Never shorter than one millisecond.
    pub timeout: Duration,
    /// Number of probes allowed in flight at once. `1` means sequential.
    pub workers: usize,
}

impl Config {
    /// Builds a configuration from raw command line values.
    ///
    /// Both values are clamped to a minimum of 1, so a zero timeout still
    /// waits a millisecond and a negative worker count probes sequentially.
    pub fn new(timeout_ms: i64, workers: i64) -> Self {
        let timeout_ms: u64 = timeout_ms.max(1).unsigned_abs();
        let workers: usize = usize::try_from(workers.max(1)).unwrap_or(usize::MAX);
        debug!(timeout_ms, workers, "resolved probe configuration");

        Self {
            timeout: Duration::from_millis(timeout_ms),
            workers,
        }
    }

    pub fn is_sequential(&self) -> bool {
        self.workers <= 1
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT_MS, DEFAULT_WORKERS)
    }
}

/// Derives the export path from the input workbook: `hosts.xlsx` -> `hosts_results.xlsx`.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| String::from("ip"));

    input.with_file_name(format!("{stem}{RESULTS_SUFFIX}.{RESULTS_EXTENSION}"))
}
