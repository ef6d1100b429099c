//! `FortiClient` command-line client.

use super::{find_marker_line, parse_state_lines, Backend};
use crate::constants;
use crate::state::{Credentials, VpnState, VpnType};

const STATE_MARKERS: [&str; 2] = ["status:", "state:"];

const FAILURE_MARKERS: [&str; 4] = ["error", "failed", "timed out", "invalid"];

/// `FortiClient` backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct Forti;

impl Backend for Forti {
    fn vpn_type(&self) -> VpnType {
        VpnType::Forti
    }

    fn connect_args(&self, host: &str) -> Vec<String> {
        vec![
            constants::FLAG_STDIN.to_string(),
            constants::CMD_CONNECT.to_string(),
            host.to_string(),
        ]
    }

    fn credentials_input(&self, credentials: &Credentials) -> String {
        format!("{}\n{}\n", credentials.user, credentials.password)
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
