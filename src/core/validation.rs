//! Input validation for interactively entered profile fields.

use crate::state::VpnType;

/// A host must contain a dot and be longer than three characters.
#[must_use]
pub fn validate_host(host: &str) -> bool {
    let host = host.trim();
    host.contains('.') && host.len() > 3
}

#[must_use]
pub fn validate_user(user: &str) -> bool {
    !user.trim().is_empty()
}

#[must_use]
pub fn validate_vpn_type(vpn_type: &str) -> bool {
    vpn_type.parse::<VpnType>().is_ok()
}

#[must_use]
pub fn validate_profile_name(name: &str) -> bool {
    !name.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_host() {
        assert!(validate_host("vpn.example.com"));
        assert!(validate_host("10.0.0.1"));
        assert!(!validate_host("a.b"));
        assert!(!validate_host("localhost"));
        assert!(!validate_host(""));
    }

    #[test]
    fn test_validate_user() {
        assert!(validate_user("alice"));
        assert!(!validate_user("   "));
    }

    #[test]
    fn test_validate_vpn_type() {
        assert!(validate_vpn_type("cisco"));
        assert!(validate_vpn_type("Forti"));
        assert!(!validate_vpn_type("wireguard"));
    }

    #[test]
    fn test_validate_profile_name() {
        assert!(validate_profile_name("office"));
        assert!(!validate_profile_name(" \t"));
    }
}
