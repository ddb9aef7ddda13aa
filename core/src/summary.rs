use pingsheet_common::models::ProbeResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    pub total: usize,
    pub up: usize,
    pub down: usize,
}

impl Summary {
    pub fn from_results(results: &[ProbeResult]) -> Self {
        let up = results.iter().filter(|r| r.reachable).count();
        Self {
            total: results.len(),
            up,
            down: results.len() - up,
        }
    }

    /// True only when there was something to probe and all of it answered.
    pub fn all_up(&self) -> bool {
        self.total > 0 && self.down == 0
    }

    /// Process exit code for a finished run: `0` when every host is up, `1` otherwise.
    ///
    /// A run without entries counts as a failure.
    pub fn exit_code(&self) -> u8 {
        if self.all_up() { 0 } else { 1 }
    }
}
