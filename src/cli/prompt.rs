//! Interactive prompts for `create`.
//!
//! Reads from any [`BufRead`] so the flow can be driven from a byte buffer.
//! On a real terminal the password is read in raw mode so it never echoes.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::style::Stylize;
use crossterm::terminal;
use crossterm::tty::IsTty;

use crate::error::{Error, Result};
use crate::theme;

/// Keeps the terminal in raw mode for its lifetime.
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

/// Line-oriented question/answer session.
pub struct Prompter<R, W> {
    input: R,
    output: W,
    /// Read secrets from the terminal in raw mode.
    hide_secrets: bool,
}

/// Prompter bound to the process's stdin and stdout.
pub type StdioPrompter = Prompter<StdinLock<'static>, Stdout>;

impl StdioPrompter {
    #[must_use]
    pub fn stdio() -> Self {
        let stdin = io::stdin();
        let hide_secrets = stdin.is_tty();
        Self {
            input: stdin.lock(),
            output: io::stdout(),
            hide_secrets,
        }
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Prompter that reads secrets as plain lines.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            hide_secrets: false,
        }
    }

    /// Print a line of guidance.
    pub fn say(&mut self, msg: &str) -> Result<()> {
        writeln!(self.output, "{}", msg.with(theme::ACCENT))?;
        Ok(())
    }

    fn label(&mut self, label: &str) -> Result<()> {
        write!(self.output, "{}: ", label.bold())?;
        self.output.flush()?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed").into());
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Ask once and return the trimmed answer.
    pub fn ask(&mut self, label: &str) -> Result<String> {
        self.label(label)?;
        Ok(self.read_line()?.trim().to_string())
    }

    /// Ask until `valid` accepts the answer, printing `error_msg` after each
    /// rejection.
    pub fn ask_valid(
        &mut self,
        label: &str,
        error_msg: &str,
        valid: impl Fn(&str) -> bool,
    ) -> Result<String> {
        loop {
            let answer = self.ask(label)?;
            if valid(&answer) {
                return Ok(answer);
            }
            writeln!(self.output, "{}", error_msg.with(theme::ERROR))?;
        }
    }

    /// Ask for a secret. Escape or Ctrl-C cancels.
    pub fn ask_secret(&mut self, label: &str) -> Result<String> {
        self.label(label)?;
        if !self.hide_secrets {
            return self.read_line();
        }
        let secret = read_hidden();
        write!(self.output, "\r\n")?;
        self.output.flush()?;
        secret
    }
}

fn read_hidden() -> Result<String> {
    let _raw = RawModeGuard::enable()?;
    let mut secret = String::new();
    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        match key.code {
            KeyCode::Enter => return Ok(secret),
            KeyCode::Esc => return Err(Error::Cancelled),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Err(Error::Cancelled);
            }
            KeyCode::Backspace => {
                secret.pop();
            }
            KeyCode::Char(c) => secret.push(c),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_ask_trims_answer() {
        let mut p = prompter("  vpn.example.com \r\n");
        assert_eq!(p.ask("Host").unwrap(), "vpn.example.com");
        assert!(String::from_utf8_lossy(&p.output).contains("Host"));
    }

    #[test]
    fn test_ask_valid_repeats_until_accepted() {
        let mut p = prompter("x\n\nvpn.example.com\n");
        let host = p
            .ask_valid("Host", "Please enter a valid host.", |h| h.contains('.'))
            .unwrap();
        assert_eq!(host, "vpn.example.com");
        let shown = String::from_utf8_lossy(&p.output).to_string();
        assert_eq!(shown.matches("Please enter a valid host.").count(), 2);
    }

    #[test]
    fn test_eof_is_an_error() {
        let mut p = prompter("bad\n");
        let err = p.ask_valid("User", "again", |_| false).unwrap_err();
        assert!(
            matches!(err, Error::Io(ref e) if e.kind() == io::ErrorKind::UnexpectedEof),
            "{err:?}"
        );
    }

    #[test]
    fn test_secret_keeps_surrounding_spaces() {
        let mut p = prompter(" pa ss \n");
        assert_eq!(p.ask_secret("Password").unwrap(), " pa ss ");
    }
}
