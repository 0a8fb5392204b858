//! PHC string format for PBKDF2 hash records.
//!
//! Record Format:
//! ```text
//! $pbkdf2-<digest>$i=<iterations>$<b64-salt>$<b64-hash>
//! ```
//!
//! Salt and hash use the PHC "B64" encoding: standard-alphabet Base64
//! without trailing `=` padding. The grammar is parsed by hand and
//! strictly: format correctness is security-relevant, so nothing is
//! defaulted or coerced and every structural failure has its own error.
//! In particular the legacy positional layout (`$pbkdf2-sha256$6400$...`,
//! no `i=` key) is a hard parse failure, not an alternate version.

use std::fmt;
use std::str::FromStr;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD_NO_PAD;

use crate::digest::Digest;
use crate::error::Error;
use crate::params::{MAX_ITERATIONS, MIN_ITERATIONS};

/// A parsed or freshly produced hash record.
///
/// Immutable once constructed. A record produced by hashing always
/// round-trips through [`fmt::Display`] and [`FromStr`] unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashRecord {
    digest: Digest,
    iterations: u32,
    salt: Vec<u8>,
    hash: Vec<u8>,
}

impl HashRecord {
    pub(crate) fn new(digest: Digest, iterations: u32, salt: Vec<u8>, hash: Vec<u8>) -> Self {
        Self {
            digest,
            iterations,
            salt,
            hash,
        }
    }

    /// Digest function named by the record's identifier.
    pub fn digest(&self) -> Digest {
        self.digest
    }

    /// Iteration count embedded in the record.
    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Raw salt bytes.
    pub fn salt(&self) -> &[u8] {
        &self.salt
    }

    /// Raw derived-key bytes. Their length is the operative key length
    /// when re-deriving for verification; the record is self-describing.
    pub fn hash(&self) -> &[u8] {
        &self.hash
    }
}

impl fmt::Display for HashRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "$pbkdf2-{}$i={}${}${}",
            self.digest,
            self.iterations,
            STANDARD_NO_PAD.encode(&self.salt),
            STANDARD_NO_PAD.encode(&self.hash)
        )
    }
}

impl FromStr for HashRecord {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let Some(rest) = s.strip_prefix('$') else {
            // no leading separator: whatever comes first is not a usable
            // identifier
            let id = s.split('$').next().unwrap_or_default();
            return Err(Error::IncompatibleIdentifier(id.to_string()));
        };

        let mut fields = rest.split('$');

        // split always yields at least one item
        let id = fields.next().unwrap_or_default();
        let digest = parse_identifier(id)?;

        let iterations = match fields.next() {
            Some(param) => parse_iterations_param(param)?,
            None => return Err(Error::MalformedIterationsParam),
        };

        // an empty salt field is a zero-length salt (salt_size 0 is a
        // valid option); an empty hash field is treated as missing, since
        // a zero-length key would verify against every password
        let salt_b64 = fields.next().ok_or(Error::MissingSalt)?;
        let hash_b64 = match fields.next() {
            Some(field) if !field.is_empty() => field,
            _ => return Err(Error::MissingHash),
        };

        if fields.next().is_some() {
            return Err(Error::UnexpectedField);
        }

        let salt = STANDARD_NO_PAD
            .decode(salt_b64)
            .map_err(|_| Error::InvalidEncoding("salt"))?;
        let hash = STANDARD_NO_PAD
            .decode(hash_b64)
            .map_err(|_| Error::InvalidEncoding("hash"))?;

        Ok(Self {
            digest,
            iterations,
            salt,
            hash,
        })
    }
}

/// Validates the `pbkdf2-<digest>` identifier and resolves the digest.
fn parse_identifier(id: &str) -> Result<Digest, Error> {
    let idparts: Vec<&str> = id.split('-').collect();
    let [algorithm, digest_name] = idparts[..] else {
        return Err(Error::IncompatibleIdentifier(id.to_string()));
    };
    if algorithm != "pbkdf2" || digest_name.is_empty() {
        return Err(Error::IncompatibleIdentifier(id.to_string()));
    }
    Digest::from_name(digest_name)
        .ok_or_else(|| Error::UnsupportedDigestFunction(digest_name.to_string()))
}

/// Parses the mandatory `i=<integer>` parameter field.
///
/// The value is read as a wide signed integer first so that `-1` and
/// `4294967296` both fail the range check rather than the integer check.
fn parse_iterations_param(param: &str) -> Result<u32, Error> {
    let value = param
        .strip_prefix("i=")
        .ok_or(Error::MalformedIterationsParam)?;
    let iterations: i128 = value.parse().map_err(|_| Error::MalformedIterationsParam)?;
    if !((MIN_ITERATIONS as i128)..=(MAX_ITERATIONS as i128)).contains(&iterations) {
        return Err(Error::IterationsParamOutOfRange);
    }
    Ok(iterations as u32)
}
