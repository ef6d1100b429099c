//! VPN client backends.
//!
//! A backend knows how to talk to one vendor CLI: which arguments connect,
//! disconnect and query state, what goes on stdin, and how to read the
//! client's output back into a [`VpnState`].

mod cisco;
mod forti;

pub use cisco::Cisco;
pub use forti::Forti;

use crate::state::{Credentials, VpnState, VpnType};

/// Command-line contract of a vendor VPN client.
pub trait Backend {
    /// Client family handled by this backend.
    fn vpn_type(&self) -> VpnType;

    /// Arguments that start a connection to `host`.
    fn connect_args(&self, host: &str) -> Vec<String>;

    /// Payload written to the client's stdin while connecting.
    fn credentials_input(&self, credentials: &Credentials) -> String;

    /// Arguments that tear the tunnel down.
    fn disconnect_args(&self) -> Vec<String>;

    /// Arguments that print the current state.
    fn status_args(&self) -> Vec<String>;

    /// Read the client's output into a state.
    fn parse_state(&self, output: &str) -> VpnState;

    /// First line of `output` that signals a failed connection, if any.
    fn failure_reason(&self, output: &str) -> Option<String>;
}

/// Backend for a VPN type.
#[must_use]
pub fn backend_for(vpn_type: VpnType) -> &'static dyn Backend {
    match vpn_type {
        VpnType::Cisco => &Cisco,
        VpnType::Forti => &Forti,
    }
}

/// Classify `output` using the last line that carries one of `markers`.
///
/// Falls back to a whole-word scan when no marker line exists. Either way
/// `Disconnected` is checked before `Connected`, since the latter is a
/// substring of the former.
pub(crate) fn parse_state_lines(output: &str, markers: &[&str]) -> VpnState {
    let mut marked = None;
    for line in output.lines() {
        let lower = line.to_ascii_lowercase();
        for marker in markers {
            if let Some(pos) = lower.rfind(marker) {
                let value = line[pos + marker.len()..].trim();
                marked = Some(value.to_string());
            }
        }
    }

    if let Some(value) = marked {
        return classify_word(&value).unwrap_or(VpnState::Unknown(value));
    }

    let mut fallback = VpnState::Unknown(String::new());
    for word in output.split(|c: char| !c.is_ascii_alphabetic()) {
        match classify_word(word) {
            Some(VpnState::Disconnected) => return VpnState::Disconnected,
            Some(state) => fallback = state,
            None => {}
        }
    }
    fallback
}

fn classify_word(value: &str) -> Option<VpnState> {
    let value = value.trim().trim_end_matches('.').to_lowercase();
    match value.as_str() {
        "connected" => Some(VpnState::Connected),
        "disconnected" | "not running" | "disconnecting" => Some(VpnState::Disconnected),
        "connecting" | "reconnecting" => Some(VpnState::Connecting),
        _ => None,
    }
}

/// First line of `output` containing any of `markers` (case-insensitive).
pub(crate) fn find_marker_line(output: &str, markers: &[&str]) -> Option<String> {
    output
        .lines()
        .map(str::trim)
        .find(|line| {
            let lower = line.to_lowercase();
            markers.iter().any(|m| lower.contains(m))
        })
        .map(str::to_string)
}
