//! Key lookup over a local public keyring.

use std::path::PathBuf;

use pgp::composed::SignedPublicKey;
use tracing::debug;

use crate::error::{Error, Result};
use crate::internal::{has_key_id, to_user};
use crate::keyring::parse_keyring_file;
use crate::location::{home_dir, KeyringLocation};
use crate::types::User;

/// A source of public keys that can be searched and resolved.
pub trait KeyService {
    /// Find every key whose key ID or identity contains `query`, ignoring case.
    fn matches(&mut self, query: &str) -> Result<Vec<User>>;

    /// Fetch the single key whose ID is `user.fingerprint`.
    fn key(&mut self, user: &User) -> Result<SignedPublicKey>;
}

#[derive(Debug)]
enum RingState {
    Unloaded,
    Loaded(Vec<SignedPublicKey>),
}

/// Lookup service for a GnuPG public keyring file.
///
/// The keyring is decoded on first use and cached for the lifetime of the
/// service. A failed load leaves the service unloaded, so the next call
/// tries again.
///
/// # Example
///
/// ```no_run
/// use ringlookup::KeyringService;
///
/// let mut service = KeyringService::open().unwrap();
/// for user in service.matches("alice").unwrap() {
///     println!("{user}");
/// }
/// ```
#[derive(Debug)]
pub struct KeyringService {
    location: KeyringLocation,
    state: RingState,
}

impl KeyringService {
    /// Create a service for the keyring at `location`.
    ///
    /// Fails with [`Error::KeyringNotFound`] if the file is missing or empty.
    /// The keyring itself is not read yet.
    pub fn new(location: KeyringLocation) -> Result<Self> {
        location.stat()?;

        Ok(Self {
            location,
            state: RingState::Unloaded,
        })
    }

    /// Open the keyring named by `GNUPGHOME`, or `~/.gnupg/pubring.gpg`.
    pub fn open() -> Result<Self> {
        Self::new(KeyringLocation::from_env()?)
    }

    /// Open the keyring inside `gnupg_home`, falling back to `~/.gnupg`.
    pub fn open_with(gnupg_home: Option<PathBuf>) -> Result<Self> {
        Self::new(KeyringLocation::resolve(gnupg_home, home_dir())?)
    }

    /// The keyring file this service reads.
    pub fn location(&self) -> &KeyringLocation {
        &self.location
    }

    /// Whether the keyring has been decoded and cached.
    pub fn is_loaded(&self) -> bool {
        matches!(self.state, RingState::Loaded(_))
    }

    /// Load the keyring, or return the cached copy.
    ///
    /// Only a keyring holding at least one certificate is cached. An
    /// unreadable file yields [`Error::KeyringUnreadable`] and one without
    /// certificates [`Error::NoRingLoaded`]; either way the next call reads
    /// the file again.
    pub fn ring(&mut self) -> Result<&[SignedPublicKey]> {
        if let RingState::Unloaded = self.state {
            let ring = parse_keyring_file(self.location.path())?;
            debug!(
                path = %self.location.path().display(),
                certificates = ring.len(),
                "loaded keyring"
            );
            if ring.is_empty() {
                return Err(Error::NoRingLoaded);
            }
            self.state = RingState::Loaded(ring);
        }

        match &self.state {
            RingState::Loaded(ring) => Ok(ring),
            RingState::Unloaded => Err(Error::NoRingLoaded),
        }
    }

    /// Every certificate in the keyring, in keyring order.
    pub fn users(&mut self) -> Result<Vec<User>> {
        Ok(self.ring()?.iter().map(to_user).collect())
    }

    /// Find every key whose key ID or identity contains `query`, ignoring case.
    ///
    /// # Arguments
    /// * `query` - Substring of a key ID, name or email address
    ///
    /// # Returns
    /// The matching certificates as [`User`]s, in keyring order. Fails with
    /// [`Error::NoMatches`] rather than returning an empty list.
    pub fn matches(&mut self, query: &str) -> Result<Vec<User>> {
        let users: Vec<User> = self
            .ring()?
            .iter()
            .map(to_user)
            .filter(|user| user.is_match(query))
            .collect();

        debug!(query, matches = users.len(), "searched keyring");

        if users.is_empty() {
            return Err(Error::NoMatches(query.to_string()));
        }

        Ok(users)
    }

    /// Fetch the single certificate whose primary key or subkey has the ID in
    /// `user.fingerprint`.
    ///
    /// # Arguments
    /// * `user` - Search result whose `fingerprint` holds a hexadecimal key ID
    ///
    /// # Returns
    /// A copy of the certificate. Fails with [`Error::InvalidFingerprint`] if the ID is not hexadecimal
    /// and [`Error::AmbiguousOrMissingKey`] unless exactly one certificate
    /// carries it.
    pub fn key(&mut self, user: &User) -> Result<SignedPublicKey> {
        let key_id = parse_key_id(&user.fingerprint)?;

        let found: Vec<&SignedPublicKey> = self
            .ring()?
            .iter()
            .filter(|key| has_key_id(key, &key_id))
            .collect();

        match found.as_slice() {
            [key] => Ok((*key).clone()),
            _ => Err(Error::AmbiguousOrMissingKey {
                key_id,
                found: found.len(),
            }),
        }
    }
}

impl KeyService for KeyringService {
    fn matches(&mut self, query: &str) -> Result<Vec<User>> {
        KeyringService::matches(self, query)
    }

    fn key(&mut self, user: &User) -> Result<SignedPublicKey> {
        KeyringService::key(self, user)
    }
}

/// Normalize a hexadecimal 64-bit key ID to 16 uppercase digits.
fn parse_key_id(fingerprint: &str) -> Result<String> {
    let invalid = |reason: String| Error::InvalidFingerprint {
        fingerprint: fingerprint.to_string(),
        reason,
    };

    if fingerprint.is_empty() {
        return Err(invalid("empty key ID".to_string()));
    }

    // from_str_radix tolerates a leading '+'
    if !fingerprint.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid("not a hexadecimal number".to_string()));
    }

    let id = u64::from_str_radix(fingerprint, 16).map_err(|e| invalid(e.to_string()))?;
    Ok(format!("{:016X}", id))
}
