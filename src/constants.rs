//! Application-wide constants and configuration values.
//!
//! This module defines the static values used throughout autovpn,
//! including retry defaults, file names, client markers, and UI messages.

use std::time::Duration;

// === Application Metadata ===

/// Banner shown when no subcommand is given.
pub const BANNER_ART: &str = r"
    ____________  _______________     ___    ______________   __
    ___    |_  / / /__  __/_  __ \    __ |  / /__  __ \__  | / /
    __  /| |  / / /__  /  _  / / /    __ | / /__  /_/ /_   |/ /
    _  ___ / /_/ / _  /   / /_/ /     __ |/ / _  ____/_  /|  /
    /_/  |_\____/  /_/    \____/      _____/  /_/     /_/ |_/
";

/// Application name (from Cargo.toml).
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
/// Current application version (from Cargo.toml).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
/// Short technical summary of the application (from Cargo.toml).
pub const APP_SUMMARY: &str = env!("CARGO_PKG_DESCRIPTION");
/// Author line (from Cargo.toml).
pub const APP_AUTHORS: &str = env!("CARGO_PKG_AUTHORS");
/// License identifier (from Cargo.toml).
pub const APP_LICENSE: &str = env!("CARGO_PKG_LICENSE");

// === Path Configuration ===

/// Environment variable overriding the configuration directory.
pub const CONFIG_DIR_ENV: &str = "AUTOVPN_CONFIG_DIR";
/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "AUTOVPN_LOG";
/// Name of the client configuration file.
pub const CONFIG_FILE_NAME: &str = "config.toml";
/// Name of the profile store file.
pub const PROFILES_FILE_NAME: &str = "profiles.json";

// === Retry Defaults ===

/// Number of connection attempts.
pub const DEFAULT_RETRIES: u32 = 3;
/// Seconds to wait between attempts.
pub const DEFAULT_DELAY_SECS: u64 = 5;
/// Seconds a single client invocation may run before it is killed.
pub const DEFAULT_TIMEOUT_SECS: u64 = 20;
/// Seconds added to the timeout after an attempt times out.
pub const DEFAULT_TIMEOUT_INCREMENT_SECS: u64 = 10;
/// How often a running child is polled for exit.
pub const PROCESS_POLL_INTERVAL: Duration = Duration::from_millis(50);
/// How long output is still collected after the client has exited.
pub const OUTPUT_DRAIN_GRACE: Duration = Duration::from_millis(500);

// === Network Probe ===

/// Host pinged to decide whether the network is up (Google DNS).
pub const NETWORK_PROBE_TARGET: &str = "8.8.8.8";
/// Seconds the probe waits for a reply.
pub const NETWORK_PROBE_TIMEOUT_SECS: u64 = 2;

// === Client Commands ===

pub const CMD_CONNECT: &str = "connect";
pub const CMD_DISCONNECT: &str = "disconnect";
pub const CMD_STATE: &str = "state";
pub const FLAG_STDIN: &str = "-s";

// === Messages: CLI Output ===

pub const MSG_ALREADY_CONNECTED: &str = "VPN is already connected.";
pub const MSG_CONNECTED: &str = "VPN connected successfully.";
pub const MSG_DISCONNECTED: &str = "Disconnected from VPN.";
pub const MSG_CANCELLED: &str = "VPN operation terminated by user";
pub const MSG_NO_PROFILES: &str = "No configurations found.";
pub const MSG_ENTER_DETAILS: &str = "Enter the following details for the new config:";
pub const MSG_FIELDS_REQUIRED: &str = "All fields are required. Please provide valid inputs.";

// === Prompts ===

pub const PROMPT_VPN_TYPE: &str = "VPN type";
pub const PROMPT_HOST: &str = "Host";
pub const PROMPT_USER: &str = "User";
pub const PROMPT_PASSWORD: &str = "Password";
pub const ERR_PROMPT_VPN_TYPE: &str = "Please enter a valid VPN type (e.g., cisco, forti).";
pub const ERR_PROMPT_HOST: &str = "Please enter a valid host.";
pub const ERR_PROMPT_USER: &str = "User cannot be empty.";
