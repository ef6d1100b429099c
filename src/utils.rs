//! Filesystem helpers: config directory resolution and private file writes.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::constants;

/// Current user's home directory.
pub fn home_dir() -> Option<PathBuf> {
    dirs::home_dir()
}

/// Expand a leading `~/` to the home directory.
pub fn expand_home(path_str: &str) -> PathBuf {
    if let Some(stripped) = path_str.strip_prefix("~/") {
        if let Some(home) = home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path_str)
}

/// Resolve the configuration directory and make sure it exists.
///
/// An explicit directory (flag or `AUTOVPN_CONFIG_DIR`) wins over the
/// platform default (`~/.config/autovpn` on Linux).
pub fn resolve_config_dir(explicit: Option<&Path>) -> io::Result<PathBuf> {
    let dir = match explicit {
        Some(dir) => expand_home(&dir.to_string_lossy()),
        None => dirs::config_dir()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "Unable to locate config dir"))?
            .join(constants::APP_NAME),
    };
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Write `contents` to `path` through a sibling temp file, readable only by the owner.
///
/// The temp file is created with mode 0600, so the contents are never
/// visible to other users, not even briefly.
pub fn write_private(path: &Path, contents: &str) -> io::Result<()> {
    let tmp = path.with_extension("tmp");
    // The mode only applies on creation, so a leftover temp file must go.
    match fs::remove_file(&tmp) {
        Err(e) if e.kind() != io::ErrorKind::NotFound => return Err(e),
        _ => {}
    }
    let mut file = private_options().open(&tmp)?;
    file.write_all(contents.as_bytes())?;
    file.sync_all()?;
    drop(file);
    fs::rename(&tmp, path)
}

#[cfg(unix)]
fn private_options() -> OpenOptions {
    use std::os::unix::fs::OpenOptionsExt;

    let mut options = OpenOptions::new();
    options.write(true).create_new(true).mode(0o600);
    options
}

#[cfg(not(unix))]
fn private_options() -> OpenOptions {
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    options
}
