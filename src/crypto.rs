//! Cryptographic primitives: salt generation and PBKDF2 key derivation.

use getrandom::fill;
use hmac::Hmac;
use pbkdf2::pbkdf2;
use sha1::Sha1;
use sha2::{Sha256, Sha512};
use zeroize::Zeroizing;

use crate::digest::Digest;
use crate::error::Error;

/// Generates `len` fresh random bytes from the OS entropy source.
///
/// # Errors
///
/// Returns [`Error::SaltGeneration`] if the OS random generator is
/// unavailable. The failure is not retried.
pub(crate) fn generate_salt(len: usize) -> Result<Vec<u8>, Error> {
    let mut salt = vec![0u8; len];
    fill(&mut salt).map_err(Error::SaltGeneration)?;
    Ok(salt)
}

/// Derives `key_len` bytes from `password` with PBKDF2-HMAC over `digest`.
///
/// Passwords may be empty and salts may contain NUL bytes; both go through
/// untouched (RFC 6070 covers these cases). The output buffer is zeroized
/// on drop.
///
/// # Errors
///
/// Returns [`Error::Derivation`] if the underlying primitive rejects the
/// request.
pub(crate) fn derive_key(
    password: &[u8],
    salt: &[u8],
    iterations: u32,
    key_len: usize,
    digest: Digest,
) -> Result<Zeroizing<Vec<u8>>, Error> {
    let mut key = Zeroizing::new(vec![0u8; key_len]);

    match digest {
        Digest::Sha1 => pbkdf2::<Hmac<Sha1>>(password, salt, iterations, &mut key),
        Digest::Sha256 => pbkdf2::<Hmac<Sha256>>(password, salt, iterations, &mut key),
        Digest::Sha512 => pbkdf2::<Hmac<Sha512>>(password, salt, iterations, &mut key),
    }
    .map_err(|e| Error::Derivation(e.to_string()))?;

    Ok(key)
}
