//! Hash-generation options and their validation.

use crate::digest::Digest;
use crate::error::Error;

/// Smallest accepted iteration count.
pub const MIN_ITERATIONS: u64 = 1;
/// Largest accepted iteration count (2^32 - 1, the PBKDF2 limit).
pub const MAX_ITERATIONS: u64 = u32::MAX as u64;
/// Largest accepted salt size in bytes.
pub const MAX_SALT_SIZE: usize = 1024;

/// Default iteration count for new hashes.
pub const DEFAULT_ITERATIONS: u64 = 100_000;
/// Default salt size in bytes for new hashes.
pub const DEFAULT_SALT_SIZE: usize = 16;

/// Options controlling how a new hash is generated.
///
/// Defaults are 100,000 iterations, SHA-512, and a 16-byte salt. The
/// derived-key length is always the registry length for the chosen digest
/// and is not configurable here. Fields are adjusted through the consuming
/// setters; the resolved struct is validated as a whole before any salt
/// generation or derivation work starts.
///
/// `iterations` is held as `u64` so out-of-range values such as `2^32` are
/// representable and rejected by [`validate`](Self::validate) rather than
/// silently truncated.
#[derive(Debug, Clone, Copy)]
pub struct HashOptions {
    pub(crate) iterations: u64,
    pub(crate) digest: Digest,
    pub(crate) salt_size: usize,
}

impl Default for HashOptions {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            digest: Digest::Sha512,
            salt_size: DEFAULT_SALT_SIZE,
        }
    }
}

impl HashOptions {
    /// Options with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the iteration count.
    pub fn iterations(mut self, iterations: u64) -> Self {
        self.iterations = iterations;
        self
    }

    /// Sets the digest function.
    pub fn digest(mut self, digest: Digest) -> Self {
        self.digest = digest;
        self
    }

    /// Sets the salt size in bytes.
    pub fn salt_size(mut self, salt_size: usize) -> Self {
        self.salt_size = salt_size;
        self
    }

    /// Checks every field against its permitted range.
    ///
    /// The checks are independent; each field failure has its own error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IterationsOutOfRange`] or
    /// [`Error::SaltSizeOutOfRange`]. The digest needs no check here: it is
    /// validated when the [`Digest`] value is constructed.
    pub fn validate(&self) -> Result<(), Error> {
        if !(MIN_ITERATIONS..=MAX_ITERATIONS).contains(&self.iterations) {
            return Err(Error::IterationsOutOfRange);
        }
        if self.salt_size > MAX_SALT_SIZE {
            return Err(Error::SaltSizeOutOfRange);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let opts = HashOptions::default();
        assert_eq!(opts.iterations, 100_000);
        assert_eq!(opts.digest, Digest::Sha512);
        assert_eq!(opts.salt_size, 16);
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn iterations_bounds_are_inclusive() {
        assert!(HashOptions::new().iterations(1).validate().is_ok());
        assert!(HashOptions::new().iterations(u32::MAX as u64).validate().is_ok());
    }

    #[test]
    fn iterations_zero_is_rejected() {
        let err = HashOptions::new().iterations(0).validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "The 'iterations' option must be in the range (1 <= iterations <= 4294967295)"
        );
    }

    #[test]
    fn iterations_two_pow_32_is_rejected() {
        let err = HashOptions::new().iterations(1 << 32).validate().unwrap_err();
        assert!(matches!(err, Error::IterationsOutOfRange));
    }

    #[test]
    fn salt_size_bounds_are_inclusive() {
        assert!(HashOptions::new().salt_size(0).validate().is_ok());
        assert!(HashOptions::new().salt_size(1024).validate().is_ok());
    }

    #[test]
    fn salt_size_above_limit_is_rejected() {
        let err = HashOptions::new().salt_size(1025).validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "The 'salt_size' option must be in the range (0 <= salt_size <= 1024)"
        );
    }

    #[test]
    fn field_failures_are_independent() {
        let iter_err = HashOptions::new().iterations(0).validate().unwrap_err();
        let salt_err = HashOptions::new().salt_size(2000).validate().unwrap_err();
        assert!(matches!(iter_err, Error::IterationsOutOfRange));
        assert!(matches!(salt_err, Error::SaltSizeOutOfRange));
    }
}
