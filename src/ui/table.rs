//! Profile listing table.

use std::io;

use chrono::Local;
use crossterm::tty::IsTty;
use ratatui::{
    backend::CrosstermBackend,
    layout::Constraint,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Cell, Row, Table},
    Terminal, TerminalOptions, Viewport,
};

use crate::state::Profile;
use crate::theme;

const TITLE: &str = " VPN Configurations ";
const HEADERS: [&str; 7] = [
    "Config Name",
    "Host",
    "Username",
    "VPN Type",
    "Default",
    "Created At",
    "Updated At",
];
const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Cell text for one profile, in [`HEADERS`] order. The password is never shown.
fn columns(profile: &Profile) -> [String; 7] {
    [
        profile.name.clone(),
        profile.host.clone(),
        profile.user.clone(),
        profile.vpn_type.to_string(),
        if profile.default { "*" } else { "" }.to_string(),
        profile
            .created_at
            .with_timezone(&Local)
            .format(TIME_FORMAT)
            .to_string(),
        profile
            .updated_at
            .with_timezone(&Local)
            .format(TIME_FORMAT)
            .to_string(),
    ]
}

/// Build the bordered table widget.
#[must_use]
pub fn profiles_table(profiles: &[Profile]) -> Table<'static> {
    let header = Row::new(HEADERS.map(Cell::from)).style(
        Style::default()
            .fg(theme::TABLE_HEADER)
            .add_modifier(Modifier::BOLD),
    );

    let rows = profiles.iter().map(|profile| {
        let [name, host, user, vpn_type, default, created, updated] = columns(profile);
        Row::new(vec![
            Cell::from(name).style(Style::default().fg(theme::TABLE_NAME)),
            Cell::from(host).style(Style::default().fg(theme::TABLE_HOST)),
            Cell::from(user).style(Style::default().fg(theme::TABLE_USER)),
            Cell::from(vpn_type).style(
                Style::default()
                    .fg(theme::TABLE_TYPE)
                    .add_modifier(Modifier::BOLD),
            ),
            Cell::from(default).style(Style::default().fg(theme::TABLE_USER)),
            Cell::from(created).style(Style::default().add_modifier(Modifier::DIM)),
            Cell::from(updated).style(Style::default().add_modifier(Modifier::DIM)),
        ])
        .style(Style::default().fg(theme::TABLE_TEXT))
    });

    let widths = [
        Constraint::Min(12),
        Constraint::Min(16),
        Constraint::Min(10),
        Constraint::Length(8),
        Constraint::Length(7),
        Constraint::Length(19),
        Constraint::Length(19),
    ];

    Table::new(rows, widths).header(header).column_spacing(1).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::TABLE_BORDER))
            .title(Span::styled(
                TITLE,
                Style::default().add_modifier(Modifier::BOLD),
            )),
    )
}

/// Rows the table needs: two borders, the header, one line per profile.
#[must_use]
pub fn table_height(profiles: &[Profile]) -> u16 {
    u16::try_from(profiles.len())
        .unwrap_or(u16::MAX)
        .saturating_add(3)
}

/// Plain, aligned text for non-terminal output.
#[must_use]
pub fn plain_lines(profiles: &[Profile]) -> Vec<String> {
    let mut lines = Vec::with_capacity(profiles.len() + 1);
    lines.push(HEADERS.join("\t"));
    for profile in profiles {
        lines.push(columns(profile).join("\t"));
    }
    lines
}

/// Print the table inline on a terminal, or tab-separated lines when piped.
pub fn print_profiles(profiles: &[Profile]) -> io::Result<()> {
    if !io::stdout().is_tty() {
        for line in plain_lines(profiles) {
            println!("{line}");
        }
        return Ok(());
    }

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::with_options(
        backend,
        TerminalOptions {
            viewport: Viewport::Inline(table_height(profiles)),
        },
    )?;
    terminal.draw(|frame| frame.render_widget(profiles_table(profiles), frame.area()))?;
    drop(terminal);
    println!();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Credentials, VpnType};
    use ratatui::backend::TestBackend;

    fn profile(name: &str, vpn_type: VpnType) -> Profile {
        Profile::new(
            name,
            vpn_type,
            Credentials {
                host: format!("{name}.example.com"),
                user: "alice".to_string(),
                password: "s3cret-pw".to_string(),
            },
        )
    }

    fn rendered(profiles: &[Profile]) -> String {
        let mut terminal = Terminal::new(TestBackend::new(130, table_height(profiles))).unwrap();
        terminal
            .draw(|frame| frame.render_widget(profiles_table(profiles), frame.area()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_table_shows_profiles_without_password() {
        let mut office = profile("office", VpnType::Cisco);
        office.default = true;
        let profiles = vec![office, profile("branch", VpnType::Forti)];

        let text = rendered(&profiles);

        assert!(text.contains("VPN Configurations"));
        assert!(text.contains("Config Name"));
        assert!(text.contains("office.exam"));
        assert!(text.contains("branch"));
        assert!(text.contains("forti"));
        assert!(!text.contains("s3cret-pw"));
    }

    #[test]
    fn test_table_height() {
        assert_eq!(table_height(&[]), 3);
        assert_eq!(table_height(&[profile("a", VpnType::Cisco)]), 4);
    }

    #[test]
    fn test_plain_lines() {
        let mut office = profile("office", VpnType::Cisco);
        office.default = true;
        let lines = plain_lines(&[office]);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Config Name\tHost"));
        assert!(lines[1].starts_with("office\toffice.example.com\talice\tcisco\t*\t"));
        assert!(!lines[1].contains("s3cret-pw"));
    }
}
