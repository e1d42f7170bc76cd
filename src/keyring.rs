//! Keyring file decoding.
//!
//! This module reads OpenPGP keyring files that contain multiple
//! certificates and exports single certificates again.

use std::io::Cursor;
use std::path::Path;

use pgp::composed::{Deserializable, SignedPublicKey};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::internal::{fingerprint_to_hex, keyid_to_hex, public_key_to_armored};

/// Parse a keyring file containing multiple certificates.
///
/// # Arguments
/// * `path` - Path to the keyring file
///
/// # Returns
/// Every certificate that decoded, in keyring order.
///
/// Any failure to read or decode the file is reported as
/// [`Error::KeyringUnreadable`].
///
/// # Example
/// ```ignore
/// // Ignored: illustrative example with placeholder file path
/// let certs = parse_keyring_file("pubring.gpg")?;
/// println!("{} certificates", certs.len());
/// ```
pub fn parse_keyring_file(path: impl AsRef<Path>) -> Result<Vec<SignedPublicKey>> {
    let path = path.as_ref();
    let unreadable = |reason: String| Error::KeyringUnreadable {
        path: path.to_path_buf(),
        reason,
    };

    let keyring_data = std::fs::read(path).map_err(|e| unreadable(e.to_string()))?;
    parse_keyring_bytes(&keyring_data).map_err(|e| match e {
        Error::Parse(reason) => unreadable(reason),
        other => other,
    })
}

/// Parse keyring data (armored or binary) containing multiple certificates.
///
/// Certificates that fail to decode are skipped. If the data holds
/// undecodable certificates and nothing else, the last decode error
/// is returned as [`Error::Parse`].
///
/// # Arguments
/// * `data` - Keyring data (armored or binary)
///
/// # Returns
/// Every certificate that decoded, in keyring order.
pub fn parse_keyring_bytes(data: &[u8]) -> Result<Vec<SignedPublicKey>> {
    let mut results = Vec::new();
    let mut last_error = None;

    let cursor = Cursor::new(data);
    let (keys_iter, _headers) = SignedPublicKey::from_reader_many(cursor)
        .map_err(|e| Error::Parse(e.to_string()))?;

    for key_result in keys_iter {
        match key_result {
            Ok(key) => {
                debug!(key_id = %keyid_to_hex(&key.primary_key), "decoded certificate");
                results.push(key);
            }
            Err(e) => {
                warn!(error = %e, "skipping certificate that failed to parse");
                last_error = Some(e.to_string());
            }
        }
    }

    match last_error {
        Some(reason) if results.is_empty() => Err(Error::Parse(reason)),
        _ => Ok(results),
    }
}

/// Export a certificate as an ASCII-armored public key block.
///
/// # Arguments
/// * `key` - The certificate to export
///
/// # Returns
/// The armored `PUBLIC KEY BLOCK` text.
pub fn export_armored(key: &SignedPublicKey) -> Result<String> {
    public_key_to_armored(key)
}

/// Full fingerprint of the certificate's primary key, uppercase hex.
pub fn full_fingerprint(key: &SignedPublicKey) -> String {
    fingerprint_to_hex(&key.primary_key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = parse_keyring_file(dir.path().join("missing.gpg")).unwrap_err();
        assert!(matches!(err, Error::KeyringUnreadable { .. }));
    }

    #[test]
    fn test_parse_garbage_bytes() {
        let err = parse_keyring_bytes(b"this is not an OpenPGP keyring").unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }
}
