//! Domain state types shared across modules.

mod connection;
mod profile;

pub use connection::{AttemptEvent, ConnectOutcome, VpnState};
pub use profile::{Credentials, Profile, VpnType};
