//! VPN profile and client type definitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Supported VPN client families.
#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum VpnType {
    /// Cisco `AnyConnect` (`vpncli`).
    Cisco,
    /// `FortiClient` CLI.
    Forti,
}

impl VpnType {
    /// Every supported type, in display order.
    pub const ALL: [VpnType; 2] = [VpnType::Cisco, VpnType::Forti];

    /// Lowercase identifier used on the command line and in config files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            VpnType::Cisco => "cisco",
            VpnType::Forti => "forti",
        }
    }
}

impl std::fmt::Display for VpnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl std::str::FromStr for VpnType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        VpnType::ALL
            .into_iter()
            .find(|t| t.as_str() == wanted)
            .ok_or_else(|| format!("Unsupported VPN type: {s}"))
    }
}

/// Connection parameters handed to a client.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub host: String,
    pub user: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("host", &self.host)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Saved VPN profile.
///
/// Stored by name in the profile store and used to build client command lines.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Unique profile name.
    pub name: String,
    /// Client family this profile targets.
    pub vpn_type: VpnType,
    /// VPN gateway host.
    pub host: String,
    /// Login user.
    pub user: String,
    /// Login password, stored as plain text.
    pub password: String,
    /// Whether this is the default profile for its `vpn_type`.
    #[serde(default)]
    pub default: bool,
    /// When the profile was first saved.
    pub created_at: DateTime<Utc>,
    /// When the profile was last overwritten.
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// Build a fresh profile stamped with the current time.
    #[must_use]
    pub fn new(name: &str, vpn_type: VpnType, credentials: Credentials) -> Self {
        let now = Utc::now();
        Self {
            name: name.trim().to_string(),
            vpn_type,
            host: credentials.host,
            user: credentials.user,
            password: credentials.password,
            default: false,
            created_at: now,
            updated_at: now,
        }
    }

    #[must_use]
    pub fn credentials(&self) -> Credentials {
        Credentials {
            host: self.host.clone(),
            user: self.user.clone(),
            password: self.password.clone(),
        }
    }
}

impl std::fmt::Debug for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Profile")
            .field("name", &self.name)
            .field("vpn_type", &self.vpn_type)
            .field("host", &self.host)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("default", &self.default)
            .field("created_at", &self.created_at)
            .field("updated_at", &self.updated_at)
            .finish()
    }
}
