//! Data-directory resolution.
//!
//! All persistent state (database, config.toml) lives under one directory:
//! `KIMY_DATA_DIR` when set, otherwise `~/.kimy`.

use std::path::PathBuf;

/// Resolve the data directory.
///
/// Falls back to the current directory when no home directory can be
/// determined (e.g. stripped-down containers).
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("KIMY_DATA_DIR") {
        return PathBuf::from(dir);
    }
    match dirs::home_dir() {
        Some(home) => home.join(".kimy"),
        None => PathBuf::from(".kimy"),
    }
}
