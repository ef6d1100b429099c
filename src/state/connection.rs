//! VPN connection state types.

use std::time::Duration;

/// Connection state as reported by a VPN client.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum VpnState {
    /// Tunnel is up.
    Connected,
    /// No active tunnel.
    #[default]
    Disconnected,
    /// Client is negotiating or reconnecting.
    Connecting,
    /// Client printed a state we do not recognise.
    Unknown(String),
}

impl VpnState {
    #[must_use]
    pub const fn is_connected(&self) -> bool {
        matches!(self, Self::Connected)
    }
}

impl std::fmt::Display for VpnState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VpnState::Connected => write!(f, "Connected"),
            VpnState::Disconnected => write!(f, "Disconnected"),
            VpnState::Connecting => write!(f, "Connecting"),
            VpnState::Unknown(raw) if raw.is_empty() => write!(f, "Unknown"),
            VpnState::Unknown(raw) => write!(f, "Unknown ({raw})"),
        }
    }
}

/// Result of a successful `connect`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConnectOutcome {
    /// The client already reported a live tunnel; nothing was run.
    AlreadyConnected,
    /// Connected on the given attempt (1-based).
    Connected { attempts: u32 },
}

/// Progress notifications emitted while connecting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AttemptEvent {
    /// Attempt `attempt` of `total` is starting.
    Started { attempt: u32, total: u32 },
    /// The network probe failed; the attempt was skipped.
    NetworkNotReady { attempt: u32, total: u32 },
    /// The attempt ran and failed.
    Failed {
        attempt: u32,
        total: u32,
        reason: String,
    },
    /// Sleeping before the next attempt.
    Retrying { delay: Duration },
}
