//! Diagnostic logging via `env_logger`.
//!
//! Logs go to stderr so command output on stdout stays clean. The level comes
//! from the `-v` count unless `AUTOVPN_LOG` is set, e.g.
//! `AUTOVPN_LOG=autovpn=trace autovpn status cisco`.

use env_logger::{Builder, Env};
use log::LevelFilter;

use crate::constants;

/// Map the number of `-v` flags to a level.
#[must_use]
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the global logger. Safe to call more than once.
pub fn init_logging(verbosity: u8) {
    let default = level_for(verbosity).as_str().to_lowercase();
    let _ = Builder::from_env(Env::default().filter_or(constants::LOG_ENV, default))
        .format_timestamp(None)
        .format_target(verbosity > 1)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for_verbosity() {
        assert_eq!(level_for(0), LevelFilter::Warn);
        assert_eq!(level_for(1), LevelFilter::Info);
        assert_eq!(level_for(2), LevelFilter::Debug);
        assert_eq!(level_for(7), LevelFilter::Trace);
    }

    #[test]
    fn test_init_twice_does_not_panic() {
        init_logging(0);
        init_logging(2);
    }
}
