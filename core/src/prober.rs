//! Reachability probes.
//!
//! [`Prober`] is the seam the dispatcher depends on. [`SystemPing`] is the
//! production implementation: it runs the platform `ping` for a single echo
//! request and reports whether it exited successfully.
//!
//! The child process gets its own wall-clock deadline a little beyond the echo
//! timeout. A `ping` that hangs past that deadline is killed and counted as
//! down.

use std::io::ErrorKind;
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::{debug, trace};

use crate::error::ProbeError;

const PING_PROGRAM: &str = "ping";

#[async_trait]
pub trait Prober: Send + Sync {
    /// Sends one echo request to `address` and waits at most `timeout` for the reply.
    ///
    /// `Ok(false)` covers every ordinary failure (no reply, unknown host, non-zero exit).
    /// `Err` is reserved for faults in running the probe itself.
    async fn probe(&self, address: &str, timeout: Duration) -> Result<bool, ProbeError>;
}

/// Arguments and outer deadline for one `ping` run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PingInvocation {
    pub args: Vec<String>,
    /// Hard limit on the child process, always beyond the echo timeout.
    pub deadline: Duration,
}

impl PingInvocation {
    #[cfg(windows)]
    pub fn for_target(address: &str, timeout: Duration) -> Self {
        // -w takes milliseconds per echo
        let timeout_ms: u128 = timeout.as_millis().max(1);
        let deadline = (timeout + Duration::from_secs(1)).max(Duration::from_secs(1));

        Self {
            args: vec![
                "-n".into(),
                "1".into(),
                "-w".into(),
                timeout_ms.to_string(),
                address.into(),
            ],
            deadline,
        }
    }

    #[cfg(not(windows))]
    pub fn for_target(address: &str, timeout: Duration) -> Self {
        // -W takes whole seconds on most unix pings
        let timeout_s: u64 = whole_seconds(timeout);

        Self {
            args: vec![
                "-c".into(),
                "1".into(),
                "-W".into(),
                timeout_s.to_string(),
                address.into(),
            ],
            deadline: Duration::from_secs(timeout_s + 2),
        }
    }
}

/// Rounds to the nearest second, half up, never below one.
#[cfg_attr(windows, allow(dead_code))]
fn whole_seconds(timeout: Duration) -> u64 {
    let millis: u128 = timeout.as_millis();
    let rounded: u128 = (millis + 500) / 1_000;
    u64::try_from(rounded).unwrap_or(u64::MAX).max(1)
}

/// Probes through the operating system's `ping` utility.
#[derive(Debug, Clone)]
pub struct SystemPing {
    program: String,
}

impl SystemPing {
    pub fn new() -> Self {
        Self::with_program(PING_PROGRAM)
    }

    /// Uses `program` in place of `ping`. The invocation arguments stay the same.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for SystemPing {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Prober for SystemPing {
    async fn probe(&self, address: &str, echo_timeout: Duration) -> Result<bool, ProbeError> {
        let invocation = PingInvocation::for_target(address, echo_timeout);
        trace!(program = %self.program, args = ?invocation.args, "spawning probe");

        let spawned = Command::new(&self.program)
            .args(&invocation.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn();

        let mut child = match spawned {
            Ok(child) => child,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(ProbeError::PingUnavailable {
                    program: self.program.clone(),
                });
            }
            Err(source) => {
                return Err(ProbeError::Io {
                    address: address.to_string(),
                    source,
                });
            }
        };

        match timeout(invocation.deadline, child.wait()).await {
            Ok(Ok(status)) => Ok(status.success()),
            Ok(Err(source)) => Err(ProbeError::Io {
                address: address.to_string(),
                source,
            }),
            Err(_elapsed) => {
                debug!("{address} exceeded {:?}, killing ping", invocation.deadline);
                if let Err(e) = child.kill().await {
                    debug!("could not kill ping for {address}: {e}");
                }
                Ok(false)
            }
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
