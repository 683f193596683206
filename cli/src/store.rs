//! Token file credential store.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracker::session::{CredentialStore, SessionError};

/// Keeps the bearer token as the sole contents of a file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

/// Open `path` for writing, owner-only from the moment it exists.
#[cfg(unix)]
fn private_file(path: &Path) -> std::io::Result<fs::File> {
    use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

    let file = fs::OpenOptions::new().write(true).create(true).truncate(true).mode(0o600).open(path)?;
    // `mode` only applies on creation; tighten files left by older runs.
    file.set_permissions(fs::Permissions::from_mode(0o600))?;
    Ok(file)
}

#[cfg(not(unix))]
fn private_file(path: &Path) -> std::io::Result<fs::File> {
    fs::OpenOptions::new().write(true).create(true).truncate(true).open(path)
}

fn storage_error(path: &Path, error: &std::io::Error) -> SessionError {
    SessionError::Storage(format!("{}: {error}", path.display()))
}

impl CredentialStore for FileStore {
    fn get(&self) -> Option<String> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => {
                let token = raw.trim();
                (!token.is_empty()).then(|| token.to_owned())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "cannot read token file");
                None
            }
        }
    }

    fn set(&self, token: &str) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| storage_error(parent, &e))?;
        }
        let mut file = private_file(&self.path).map_err(|e| storage_error(&self.path, &e))?;
        file.write_all(token.as_bytes()).map_err(|e| storage_error(&self.path, &e))
    }

    fn clear(&self) -> Result<(), SessionError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(storage_error(&self.path, &e)),
        }
    }
}
