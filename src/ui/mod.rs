//! Console output.
//!
//! Status lines are styled with crossterm; the profile listing is a ratatui
//! table rendered inline below the prompt.

pub mod table;

use crossterm::style::Stylize;

use crate::constants;
use crate::state::{VpnState, VpnType};
use crate::theme;

pub fn success(msg: &str) {
    println!("{}", msg.with(theme::SUCCESS).bold());
}

pub fn warning(msg: &str) {
    println!("{}", msg.with(theme::WARNING).bold());
}

pub fn info(msg: &str) {
    println!("{}", msg.with(theme::ACCENT));
}

/// ASCII logo, then name, version, description, author and license.
pub fn banner() {
    println!("{}", constants::BANNER_ART.with(theme::ERROR).bold());
    println!(
        "{}",
        format!("{} v{}", constants::APP_NAME, constants::APP_VERSION)
            .with(theme::ACCENT)
            .bold()
    );
    println!("{}", constants::APP_SUMMARY.with(theme::MUTED));
    println!("{}", format!("Author: {}", constants::APP_AUTHORS).with(theme::SUCCESS));
    println!("{}", format!("License: {}", constants::APP_LICENSE).with(theme::ERROR));
    println!();
}

/// `VPN Status (cisco): Connected`, colored by state.
pub fn state_line(vpn_type: VpnType, state: &VpnState) {
    let label = format!("VPN Status ({vpn_type}): ");
    let value = state.to_string();
    let styled = match state {
        VpnState::Connected => value.with(theme::SUCCESS).bold(),
        VpnState::Connecting => value.with(theme::WARNING).bold(),
        VpnState::Disconnected => value.with(theme::ERROR).bold(),
        VpnState::Unknown(_) => value.with(theme::MUTED),
    };
    println!("{label}{styled}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_art_is_five_rows() {
        let rows: Vec<&str> = constants::BANNER_ART
            .lines()
            .filter(|line| !line.trim().is_empty())
            .collect();
        assert_eq!(rows.len(), 5);
        assert!(rows.iter().all(|row| row.len() < 80));
    }
}
