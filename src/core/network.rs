//! Network readiness probe.
//!
//! Sends a single ICMP echo through the system `ping` binary before a
//! connection attempt, so a dead uplink does not burn a client invocation.

use std::path::PathBuf;
use std::time::Duration;

use log::{debug, warn};

use super::invoker::{CommandRunner, Invocation};
use crate::constants;
use crate::error::Error;

/// `ping` invocation for the current platform.
#[must_use]
pub fn probe_invocation() -> Invocation {
    let wait = constants::NETWORK_PROBE_TIMEOUT_SECS;
    let args = if cfg!(windows) {
        vec![
            "-n".to_string(),
            "1".to_string(),
            "-w".to_string(),
            (wait * 1000).to_string(),
            constants::NETWORK_PROBE_TARGET.to_string(),
        ]
    } else {
        vec![
            "-c".to_string(),
            "1".to_string(),
            "-W".to_string(),
            wait.to_string(),
            constants::NETWORK_PROBE_TARGET.to_string(),
        ]
    };

    Invocation {
        program: PathBuf::from("ping"),
        args,
        stdin: None,
        timeout: Duration::from_secs(wait + 1),
    }
}

/// Whether the probe target answered.
///
/// A missing `ping` binary cannot tell us anything, so it counts as ready.
pub fn is_network_ready<R: CommandRunner + ?Sized>(runner: &R) -> bool {
    match runner.run(&probe_invocation()) {
        Ok(output) => {
            debug!("Network probe exited with {:?}", output.code);
            output.success()
        }
        Err(Error::Launch { source, .. }) => {
            warn!("Cannot run ping ({source}); skipping network check");
            true
        }
        Err(e) => {
            debug!("Network probe failed: {e}");
            false
        }
    }
}
