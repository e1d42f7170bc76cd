//! Search the local GnuPG public keyring.
//!
//! Run with: cargo run --example lookup -- <query> [--export]
//!
//! Set `GNUPGHOME` to use a keyring other than `~/.gnupg/pubring.gpg` and
//! `RUST_LOG=debug` to see what the library is doing.

use ringlookup::{export_armored, full_fingerprint, KeyringService};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = std::env::args().skip(1);
    let mut query = None;
    let mut export = false;

    for arg in args {
        match arg.as_str() {
            "--export" => export = true,
            _ => query = Some(arg),
        }
    }

    let Some(query) = query else {
        eprintln!("Usage: lookup <query> [--export]");
        std::process::exit(2);
    };

    let mut service = KeyringService::open()?;
    let users = service.matches(&query)?;

    if !export {
        println!("{} match(es) in {}\n", users.len(), service.location().path().display());
        for user in &users {
            println!("{}", user.fingerprint);
            for email in &user.emails {
                println!("  - {}", email);
            }
        }
        return Ok(());
    }

    // Exporting needs a single unambiguous key
    if users.len() != 1 {
        eprintln!("Error: '{}' matches {} keys, refine the query", query, users.len());
        std::process::exit(1);
    }

    let key = service.key(&users[0])?;
    eprintln!("Fingerprint: {}", full_fingerprint(&key));
    print!("{}", export_armored(&key)?);

    Ok(())
}
