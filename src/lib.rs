//! # ringlookup
//!
//! Search and resolve OpenPGP public keys in a local GnuPG keyring using
//! [rpgp](https://docs.rs/pgp).
//!
//! - **Discovery**: find `pubring.gpg` under `$GNUPGHOME` or `~/.gnupg`
//! - **Search**: case-insensitive substring match on key IDs and user IDs
//! - **Resolution**: fetch exactly one certificate by its 64-bit key ID
//!
//! ## Quick Start
//!
//! ```no_run
//! use ringlookup::{export_armored, KeyringService};
//!
//! let mut service = KeyringService::open().unwrap();
//!
//! let users = service.matches("alice@example.com").unwrap();
//! let key = service.key(&users[0]).unwrap();
//! println!("{}", export_armored(&key).unwrap());
//! ```
//!
//! ## Design
//!
//! The keyring is decoded lazily on the first search and cached for the
//! lifetime of the [`KeyringService`]. Every operation either returns its
//! full result or an [`Error`]; an empty search result is reported as
//! [`Error::NoMatches`].

mod error;
mod internal;
mod keyring;
mod location;
mod service;
mod types;

// Re-export the OpenPGP types that appear in the public API
pub use pgp::composed::SignedPublicKey;

pub use error::{Error, Result};

pub use types::User;

pub use location::{KeyringLocation, GNUPGHOME_ENV, PUBRING_FILE};

pub use keyring::{
    export_armored,
    full_fingerprint,
    parse_keyring_bytes,
    parse_keyring_file,
};

pub use service::{KeyService, KeyringService};
