//! Registry of supported digest functions.
//!
//! Maps each digest name to its native output length, which is also the
//! derived-key length used for freshly produced hashes. The table
//! is fixed and read-only; the order of [`Digest::ALL`] is the order
//! reported by [`identifiers`](crate::identifiers).

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A digest function usable inside the PBKDF2 HMAC construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Digest {
    Sha1,
    Sha256,
    Sha512,
}

impl Digest {
    /// All supported digests, in registry order.
    pub const ALL: [Digest; 3] = [Digest::Sha1, Digest::Sha256, Digest::Sha512];

    /// Lowercase digest name as it appears in hash identifiers.
    pub fn name(self) -> &'static str {
        match self {
            Digest::Sha1 => "sha1",
            Digest::Sha256 => "sha256",
            Digest::Sha512 => "sha512",
        }
    }

    /// Native output length of the digest in bytes.
    pub fn output_len(self) -> usize {
        match self {
            Digest::Sha1 => 20,
            Digest::Sha256 => 32,
            Digest::Sha512 => 64,
        }
    }

    /// Hash identifier for this digest, e.g. `pbkdf2-sha256`.
    pub fn identifier(self) -> String {
        format!("pbkdf2-{}", self.name())
    }

    /// Exact-name registry lookup.
    ///
    /// Used on the parse path, where identifiers are already normalized;
    /// caller-supplied option strings go through [`FromStr`] instead.
    pub fn from_name(name: &str) -> Option<Digest> {
        Digest::ALL.into_iter().find(|d| d.name() == name)
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Digest {
    type Err = Error;

    /// Case-insensitive lookup for caller-supplied digest names.
    fn from_str(s: &str) -> Result<Self, Error> {
        Digest::from_name(s.to_ascii_lowercase().as_str()).ok_or(Error::UnsupportedDigest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_lengths_match_native_hmac_output() {
        assert_eq!(Digest::Sha1.output_len(), 20);
        assert_eq!(Digest::Sha256.output_len(), 32);
        assert_eq!(Digest::Sha512.output_len(), 64);
    }

    #[test]
    fn registry_order_is_fixed() {
        let names: Vec<&str> = Digest::ALL.iter().map(|d| d.name()).collect();
        assert_eq!(names, ["sha1", "sha256", "sha512"]);
    }

    #[test]
    fn identifier_has_pbkdf2_prefix() {
        assert_eq!(Digest::Sha512.identifier(), "pbkdf2-sha512");
    }

    #[test]
    fn from_name_is_exact() {
        assert_eq!(Digest::from_name("sha256"), Some(Digest::Sha256));
        assert_eq!(Digest::from_name("SHA256"), None);
        assert_eq!(Digest::from_name("sha368"), None);
    }

    #[test]
    fn from_str_is_case_insensitive() {
        assert_eq!("SHA256".parse::<Digest>().unwrap(), Digest::Sha256);
        assert_eq!("Sha512".parse::<Digest>().unwrap(), Digest::Sha512);
    }

    #[test]
    fn from_str_rejects_unknown_digest() {
        let err = "sha368".parse::<Digest>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "The 'digest' option must be one of: sha1, sha256, sha512"
        );
    }
}
