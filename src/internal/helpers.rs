//! Internal helper functions.

use pgp::composed::SignedPublicKey;
use pgp::types::KeyDetails;

use crate::error::{Error, Result};
use crate::types::User;

/// Serialize a public key to ASCII-armored format.
pub(crate) fn public_key_to_armored(key: &SignedPublicKey) -> Result<String> {
    key.to_armored_string(None.into())
        .map_err(|e| Error::Crypto(e.to_string()))
}

/// Get the fingerprint as a hex string (uppercase, no spaces).
pub(crate) fn fingerprint_to_hex(key: &impl KeyDetails) -> String {
    hex::encode_upper(key.fingerprint().as_bytes())
}

/// Get the key ID as a hex string.
pub(crate) fn keyid_to_hex(key: &impl KeyDetails) -> String {
    hex::encode_upper(key.key_id().as_ref())
}

/// User IDs bound to the certificate, lossily decoded.
pub(crate) fn user_ids(key: &SignedPublicKey) -> Vec<String> {
    key.details
        .users
        .iter()
        .map(|u| String::from_utf8_lossy(u.id.id()).to_string())
        .collect()
}

/// Whether the primary key or any subkey carries `key_id` (uppercase hex).
pub(crate) fn has_key_id(key: &SignedPublicKey, key_id: &str) -> bool {
    keyid_to_hex(&key.primary_key) == key_id
        || key
            .public_subkeys
            .iter()
            .any(|subkey| keyid_to_hex(&subkey.key) == key_id)
}

/// Build the search record for a certificate.
pub(crate) fn to_user(key: &SignedPublicKey) -> User {
    User {
        fingerprint: keyid_to_hex(&key.primary_key),
        emails: user_ids(key),
    }
}
