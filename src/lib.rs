//! Password hashing and verification with PBKDF2, using the PHC string
//! format for portable, self-describing hash records:
//!
//! ```text
//! $pbkdf2-sha512$i=100000$<b64 salt>$<b64 derived key>
//! ```
//!
//! ```no_run
//! # fn main() -> Result<(), pbkdf2_phc::Error> {
//! let record = pbkdf2_phc::hash(b"correct horse battery staple")?;
//! assert!(pbkdf2_phc::verify(&record, b"correct horse battery staple")?);
//! # Ok(())
//! # }
//! ```
//!
//! Every call is an independent, stateless unit of work; there is no shared
//! mutable state, so concurrent calls need no coordination. Key derivation
//! blocks the calling thread for a time proportional to the iteration count
//! (that cost is the security feature). Embedders running an async runtime
//! should park [`hash`] and [`verify`] on a blocking worker thread; both
//! functions and all their inputs are `Send`. Once derivation starts it
//! runs to completion; there is no cancellation point.

mod crypto;
mod digest;
mod error;
mod format;
mod params;

pub use crate::digest::Digest;
pub use crate::error::Error;
pub use crate::format::HashRecord;
pub use crate::params::{DEFAULT_ITERATIONS, DEFAULT_SALT_SIZE, HashOptions};

use subtle::ConstantTimeEq;

/// Hashes `password` with the default options (100,000 iterations,
/// SHA-512, 16-byte salt) and returns the PHC record string.
///
/// # Errors
///
/// Returns [`Error::SaltGeneration`] if the OS entropy source fails, or
/// [`Error::Derivation`] if the PBKDF2 primitive does.
pub fn hash(password: &[u8]) -> Result<String, Error> {
    hash_with(password, HashOptions::default())
}

/// Hashes `password` with explicit options.
///
/// Options are validated before any work happens: on a validation failure
/// no salt is generated and no derivation runs. The derived-key length is
/// the registry length of the chosen digest.
///
/// # Errors
///
/// Returns a validation error for out-of-range options, plus the failure
/// modes of [`hash`].
pub fn hash_with(password: &[u8], options: HashOptions) -> Result<String, Error> {
    options.validate()?;

    let salt = crypto::generate_salt(options.salt_size)?;
    let key = crypto::derive_key(
        password,
        &salt,
        options.iterations as u32,
        options.digest.output_len(),
        options.digest,
    )?;

    let record = HashRecord::new(options.digest, options.iterations as u32, salt, key.to_vec());
    Ok(record.to_string())
}

/// Checks `password` against a stored PHC record string.
///
/// The record is parsed and its embedded parameters re-validated, then a
/// candidate key is derived with the key length taken from the record's
/// own hash field (not the digest registry), so records created with a
/// custom key length verify correctly. The comparison is constant-time
/// over the equal-length keys.
///
/// A well-formed record with a non-matching password yields `Ok(false)`,
/// not an error.
///
/// # Errors
///
/// Returns a parse error for a malformed record, or
/// [`Error::Derivation`] if the PBKDF2 primitive fails.
pub fn verify(record: &str, password: &[u8]) -> Result<bool, Error> {
    let record: HashRecord = record.parse()?;

    let candidate = crypto::derive_key(
        password,
        record.salt(),
        record.iterations(),
        record.hash().len(),
        record.digest(),
    )?;

    Ok(bool::from(candidate.ct_eq(record.hash())))
}

/// Lists the hash identifiers this crate can produce and verify, in
/// registry order.
pub fn identifiers() -> Vec<String> {
    Digest::ALL.iter().map(|d| d.identifier()).collect()
}
