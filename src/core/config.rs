//! Client configuration (`config.toml`).
//!
//! Holds the path of each vendor client executable plus the defaults used by
//! the retry loop:
//!
//! ```toml
//! [path]
//! cisco = "/opt/cisco/anyconnect/bin/vpn"
//!
//! [connect]
//! retries = 3
//! delay_secs = 5
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::constants;
use crate::core::invoker::RetryPolicy;
use crate::error::{Error, Result};
use crate::state::VpnType;
use crate::utils;

/// Retry defaults from the `[connect]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectDefaults {
    pub retries: u32,
    pub delay_secs: u64,
    pub timeout_secs: u64,
    pub timeout_increment_secs: u64,
    pub check_network: bool,
}

impl Default for ConnectDefaults {
    fn default() -> Self {
        Self {
            retries: constants::DEFAULT_RETRIES,
            delay_secs: constants::DEFAULT_DELAY_SECS,
            timeout_secs: constants::DEFAULT_TIMEOUT_SECS,
            timeout_increment_secs: constants::DEFAULT_TIMEOUT_INCREMENT_SECS,
            check_network: true,
        }
    }
}

impl ConnectDefaults {
    #[must_use]
    pub fn policy(&self) -> RetryPolicy {
        RetryPolicy {
            retries: self.retries,
            delay: Duration::from_secs(self.delay_secs),
            timeout: Duration::from_secs(self.timeout_secs),
            timeout_increment: Duration::from_secs(self.timeout_increment_secs),
            check_network: self.check_network,
        }
    }
}

/// Contents of `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// VPN type → client executable.
    #[serde(default, rename = "path")]
    clients: BTreeMap<String, PathBuf>,
    #[serde(default)]
    pub connect: ConnectDefaults,
}

impl ClientConfig {
    /// Path of the config file inside `config_dir`.
    #[must_use]
    pub fn file_in(config_dir: &Path) -> PathBuf {
        config_dir.join(constants::CONFIG_FILE_NAME)
    }

    /// Load from `path`; a missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            debug!("No client config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        utils::write_private(path, &content)?;
        Ok(())
    }

    /// Record the client executable for a type.
    pub fn set_client_path(&mut self, vpn_type: VpnType, path: PathBuf) {
        self.clients.insert(vpn_type.as_str().to_string(), path);
    }

    /// Stored path for a type, without checking the filesystem.
    #[must_use]
    pub fn configured_path(&self, vpn_type: VpnType) -> Option<&Path> {
        self.clients.get(vpn_type.as_str()).map(PathBuf::as_path)
    }

    /// Client executable for a type; it must be configured and exist on disk.
    pub fn client_path(&self, vpn_type: VpnType) -> Result<PathBuf> {
        let path = self
            .configured_path(vpn_type)
            .ok_or(Error::ClientNotConfigured(vpn_type))?;
        if !path.exists() {
            return Err(Error::ClientNotFound(path.to_path_buf()));
        }
        Ok(path.to_path_buf())
    }
}
