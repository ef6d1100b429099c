//! Cisco `AnyConnect` command-line client (`vpncli`).

use super::{find_marker_line, parse_state_lines, Backend};
use crate::constants;
use crate::state::{Credentials, VpnState, VpnType};

/// `vpncli` prints `>> state: <State>` lines.
const STATE_MARKERS: [&str; 1] = ["state:"];

const FAILURE_MARKERS: [&str; 5] = [
    ">> error:",
    "login failed",
    "connection attempt has failed",
    "unable to contact",
    "authentication failed",
];

/// Cisco `AnyConnect` backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cisco;

impl Backend for Cisco {
    fn vpn_type(&self) -> VpnType {
        VpnType::Cisco
    }

    fn connect_args(&self, host: &str) -> Vec<String> {
        vec![
            constants::FLAG_STDIN.to_string(),
            constants::CMD_CONNECT.to_string(),
            host.to_string(),
        ]
    }

    /// User, password, then `y` to accept the login banner.
    fn credentials_input(&self, credentials: &Credentials) -> String {
        format!("{}\n{}\ny", credentials.user, credentials.password)
    }

    fn disconnect_args(&self) -> Vec<String> {
        vec![constants::CMD_DISCONNECT.to_string()]
    }

    fn status_args(&self) -> Vec<String> {
        vec![constants::CMD_STATE.to_string()]
    }

    fn parse_state(&self, output: &str) -> VpnState {
        parse_state_lines(output, &STATE_MARKERS)
    }

    fn failure_reason(&self, output: &str) -> Option<String> {
        find_marker_line(output, &FAILURE_MARKERS)
    }
}
