//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::constants;
use crate::state::VpnType;

/// autovpn - connect, disconnect and query vendor VPN clients
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory holding config.toml and profiles.json
    #[arg(long, global = true, env = constants::CONFIG_DIR_ENV, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Flags of `connect`.
#[derive(clap::Args, Debug, Clone, PartialEq, Eq)]
pub struct ConnectArgs {
    /// VPN type
    #[arg(value_enum)]
    pub vpn_type: VpnType,

    /// Number of connection attempts [default: from config.toml, 3]
    #[arg(short = 'r', long = "retry", value_name = "N")]
    pub retries: Option<u32>,

    /// Seconds to wait between attempts [default: from config.toml, 5]
    #[arg(short, long, value_name = "SECS")]
    pub delay: Option<u64>,

    /// Seconds a client call may run [default: from config.toml, 20]
    #[arg(short, long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Stored config to use instead of the default one
    #[arg(short = 'C', long = "config", value_name = "NAME")]
    pub config: Option<String>,

    /// VPN host
    #[arg(short = 'H', long)]
    pub host: Option<String>,

    /// VPN user
    #[arg(short = 'U', long)]
    pub user: Option<String>,

    /// VPN password
    #[arg(short = 'P', long)]
    pub password: Option<String>,

    /// Save the given host, user and password under this name
    #[arg(short = 'S', long = "save", value_name = "NAME")]
    pub save_as: Option<String>,

    /// Overwrite an existing config when saving
    #[arg(short, long)]
    pub force: bool,

    /// Skip the network probe before each attempt
    #[arg(long)]
    pub no_network_check: bool,
}

/// Flags of `create`.
#[derive(clap::Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateArgs {
    /// VPN type (prompted when omitted)
    #[arg(value_enum)]
    pub vpn_type: Option<VpnType>,

    /// Name of the new config
    #[arg(short = 'C', long = "config", value_name = "NAME")]
    pub name: String,

    /// VPN host (prompted when omitted)
    #[arg(short = 'H', long)]
    pub host: Option<String>,

    /// VPN user (prompted when omitted)
    #[arg(short = 'U', long)]
    pub user: Option<String>,

    /// VPN password (prompted without echo when omitted)
    #[arg(short = 'P', long)]
    pub password: Option<String>,

    /// Make this the default config for its VPN type
    #[arg(long)]
    pub default: bool,

    /// Overwrite an existing config with the same name
    #[arg(short, long)]
    pub force: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Connect to a VPN, retrying on failure
    Connect(ConnectArgs),
    /// Disconnect from a VPN
    Disconnect {
        #[arg(value_enum)]
        vpn_type: VpnType,
    },
    /// Show the current VPN state
    Status {
        #[arg(value_enum)]
        vpn_type: VpnType,
    },
    /// Create a named VPN config
    Create(CreateArgs),
    /// Set the path of a VPN client executable
    SetClient {
        #[arg(value_enum)]
        vpn_type: VpnType,
        /// Path to the client executable, e.g. /opt/cisco/anyconnect/bin/vpn
        path: String,
        /// Accept a path that does not exist yet
        #[arg(short, long)]
        force: bool,
    },
    /// List stored VPN configs
    List {
        #[arg(value_enum)]
        vpn_type: Option<VpnType>,
    },
    /// Delete a stored VPN config
    Delete {
        /// Config name
        name: String,
    },
    /// Mark a config as the default for its VPN type
    #[command(name = "default")]
    SetDefault {
        /// Config name
        name: String,
    },
    /// List supported VPN types and their client paths
    Supported,
}
