//! Error types for the ringlookup library.
//!
//! Every lookup either produces its full result or one of these errors;
//! nothing is retried internally.

use std::path::PathBuf;

use thiserror::Error;

/// The main error type for keyring lookups.
#[derive(Error, Debug)]
pub enum Error {
    /// Keyring file is missing or empty
    #[error("Keyring not found: {}", .0.display())]
    KeyringNotFound(PathBuf),

    /// Keyring file could not be opened or decoded
    #[error("Keyring {} is unreadable: {reason}", .path.display())]
    KeyringUnreadable { path: PathBuf, reason: String },

    /// Keyring decoded but holds no certificates
    #[error("No key ring loaded")]
    NoRingLoaded,

    /// Search query matched no certificate
    #[error("No matches for '{0}'")]
    NoMatches(String),

    /// Fingerprint is not a hexadecimal 64-bit key ID
    #[error("Invalid fingerprint '{fingerprint}': {reason}")]
    InvalidFingerprint { fingerprint: String, reason: String },

    /// Exact key ID lookup did not yield exactly one certificate
    #[error("Expected exactly one key for ID {key_id}, found {found}")]
    AmbiguousOrMissingKey { key_id: String, found: usize },

    /// Neither a GnuPG home override nor a home directory is available
    #[error("Unable to determine the home directory")]
    NoHomeDirectory,

    /// Keyring data could not be decoded
    #[error("Keyring parsing failed: {0}")]
    Parse(String),

    /// Serializing a certificate failed
    #[error("Cryptographic operation failed: {0}")]
    Crypto(String),

    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for ringlookup operations.
pub type Result<T> = std::result::Result<T, Error>;
