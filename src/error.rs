//! Error type shared by the store, config, and invoker layers.

use std::fmt::{self, Display};
use std::path::PathBuf;
use std::time::Duration;

use crate::state::VpnType;

/// Everything that can go wrong between parsing arguments and the client exiting.
#[derive(Debug)]
pub enum Error {
    /// No profile with this name exists.
    ProfileNotFound(String),
    /// No `--config` was given and no default profile exists for the type.
    NoDefaultProfile(VpnType),
    /// A profile with this name already exists.
    DuplicateProfile(String),
    /// User supplied data failed validation.
    Validation(String),
    /// No client executable path stored for the type.
    ClientNotConfigured(VpnType),
    /// The stored client path does not exist on disk.
    ClientNotFound(PathBuf),
    /// The client process could not be started.
    Launch {
        program: PathBuf,
        source: std::io::Error,
    },
    /// The client process outlived its timeout and was killed.
    Timeout { program: PathBuf, after: Duration },
    /// The client exited unsuccessfully.
    Command {
        program: PathBuf,
        code: Option<i32>,
        stderr: String,
    },
    /// Every connection attempt failed.
    ConnectionFailed { attempts: u32, reason: String },
    /// The user aborted an interactive prompt.
    Cancelled,
    Io(std::io::Error),
    Parse(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::Interrupted {
            return Error::Cancelled;
        }
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Parse(format!("profile store: {err}"))
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Parse(format!("client config: {err}"))
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Parse(format!("client config: {err}"))
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ProfileNotFound(name) => write!(f, "Config '{name}' not found"),
            Error::NoDefaultProfile(vpn_type) => write!(
                f,
                "No config given and no default config for {vpn_type}. Use -C <name> or -H/-U/-P"
            ),
            Error::DuplicateProfile(name) => {
                write!(f, "Config '{name}' already exists. Use -f to overwrite")
            }
            Error::Validation(msg) => write!(f, "{msg}"),
            Error::ClientNotConfigured(vpn_type) => write!(
                f,
                "VPN path not found in config for {vpn_type}. Run 'autovpn set-client {vpn_type} <path>'"
            ),
            Error::ClientNotFound(path) => {
                write!(f, "VPN client executable not found: {}", path.display())
            }
            Error::Launch { program, source } => {
                write!(f, "Failed to start {}: {source}", program.display())
            }
            Error::Timeout { program, after } => write!(
                f,
                "{} did not finish within {}s",
                program.display(),
                after.as_secs()
            ),
            Error::Command {
                program,
                code,
                stderr,
            } => {
                let code = code.map_or_else(|| "signal".to_string(), |c| c.to_string());
                write!(f, "{} exited with {code}", program.display())?;
                if !stderr.trim().is_empty() {
                    write!(f, ": {}", stderr.trim())?;
                }
                Ok(())
            }
            Error::ConnectionFailed { attempts, reason } => write!(
                f,
                "VPN connection attempts failed after {attempts} attempt(s): {reason}"
            ),
            Error::Cancelled => write!(f, "Operation cancelled"),
            Error::Io(e) => write!(f, "IO error: {e}"),
            Error::Parse(msg) => write!(f, "Parse error: {msg}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Launch { source, .. } => Some(source),
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
