//! File operations behind the `init` and `hello` commands
//!
//! Both operations take the directory explicitly; callers resolve it from the
//! process working directory.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{NpxError, Result};

/// Write the default configuration into `dir`, returning the created path.
///
/// An existing file is never modified. The file is opened with exclusive
/// create, so a concurrent `init` that loses the race also gets
/// [`NpxError::ConfigExists`].
pub fn init_config(dir: &Path) -> Result<PathBuf> {
    let path = Config::path_in(dir);
    if path.exists() {
        return Err(NpxError::ConfigExists(path));
    }

    let content = Config::default().to_json_pretty()?;

    let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            return Err(NpxError::ConfigExists(path));
        }
        Err(e) => return Err(e.into()),
    };
    file.write_all(content.as_bytes())?;

    Ok(path)
}

/// Read and parse the configuration in `dir`
pub fn load_config(dir: &Path) -> Result<Config> {
    let path = Config::path_in(dir);
    if !path.exists() {
        return Err(NpxError::ConfigNotFound(path));
    }

    let content = fs::read_to_string(&path)?;
    Config::from_json_str(&content)
}
