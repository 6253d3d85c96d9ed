//! Persisted login credentials.
//!
//! The login token and user info are stored as one JSON file under the
//! state directory. There is no refresh protocol: when the token expires
//! the platform starts answering 401 and the user logs in again.

use std::fs;
use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use aviary_protocol::UserInfo;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredCredentials {
    pub token: String,
    pub user: UserInfo,
}

/// Read stored credentials. A missing file means "not logged in", not an
/// error; a malformed file is an error.
pub fn load(path: &Path) -> Result<Option<StoredCredentials>> {
    let body = match fs::read_to_string(path) {
        Ok(body) => body,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => {
            return Err(err).with_context(|| format!("reading credentials from {}", path.display()))
        }
    };

    let credentials = serde_json::from_str(&body)
        .with_context(|| format!("parsing credentials file {}", path.display()))?;
    Ok(Some(credentials))
}

/// Write credentials, readable only by the owner.
pub fn store(path: &Path, credentials: &StoredCredentials) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating state directory {parent:?}"))?;
    }

    let body = serde_json::to_string_pretty(credentials).context("serializing credentials")?;
    fs::write(path, body)
        .with_context(|| format!("writing credentials to {}", path.display()))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600))
            .with_context(|| format!("restricting permissions on {}", path.display()))?;
    }

    Ok(())
}

/// Remove stored credentials. Already-absent is fine.
pub fn clear(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(err) => {
            Err(err).with_context(|| format!("removing credentials at {}", path.display()))
        }
    }
}
