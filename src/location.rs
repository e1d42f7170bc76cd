//! Keyring file discovery.

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::error::{Error, Result};

/// File name of the public keyring inside a GnuPG home directory.
pub const PUBRING_FILE: &str = "pubring.gpg";

/// Environment variable overriding the GnuPG home directory.
pub const GNUPGHOME_ENV: &str = "GNUPGHOME";

/// Path of a public keyring file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyringLocation {
    path: PathBuf,
}

impl KeyringLocation {
    /// Use an explicit keyring file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Derive the keyring path from a GnuPG home override or a home directory.
    ///
    /// The override names the GnuPG home itself; otherwise `<home>/.gnupg` is
    /// used. An empty override counts as unset.
    ///
    /// # Arguments
    /// * `gnupg_home` - GnuPG home directory override, e.g. from `GNUPGHOME`
    /// * `home` - The user's home directory
    ///
    /// # Returns
    /// The location of `pubring.gpg`, or [`Error::NoHomeDirectory`] when
    /// neither directory is known.
    pub fn resolve(gnupg_home: Option<PathBuf>, home: Option<PathBuf>) -> Result<Self> {
        let gnupg_home = match gnupg_home.filter(|p| !p.as_os_str().is_empty()) {
            Some(dir) => dir,
            None => home.ok_or(Error::NoHomeDirectory)?.join(".gnupg"),
        };

        Ok(Self::new(gnupg_home.join(PUBRING_FILE)))
    }

    /// Resolve from `GNUPGHOME` and `HOME`.
    pub fn from_env() -> Result<Self> {
        let gnupg_home = std::env::var_os(GNUPGHOME_ENV).map(PathBuf::from);
        Self::resolve(gnupg_home, home_dir())
    }

    /// Location of the keyring file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check that the keyring file exists and is not empty.
    pub fn stat(&self) -> Result<()> {
        match std::fs::metadata(&self.path) {
            Ok(meta) if meta.is_file() && meta.len() > 0 => Ok(()),
            Ok(_) => Err(Error::KeyringNotFound(self.path.clone())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(Error::KeyringNotFound(self.path.clone()))
            }
            Err(e) => Err(Error::Io(e)),
        }
    }
}

pub(crate) fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .filter(|h| !h.is_empty())
        .map(PathBuf::from)
        .or_else(|| BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf()))
}
