use thiserror::Error;

/// Errors returned by hashing, verification, and record parsing.
///
/// Messages name the offending field and its valid range or set so callers
/// (and tests) can assert on them directly. Nothing is logged or retried
/// internally; every failure is surfaced to the caller.
#[derive(Debug, Error)]
pub enum Error {
    /// The `iterations` option is outside `[1, 2^32 - 1]`.
    #[error("The 'iterations' option must be in the range (1 <= iterations <= 4294967295)")]
    IterationsOutOfRange,

    /// The digest name is not a member of the registry.
    #[error("The 'digest' option must be one of: sha1, sha256, sha512")]
    UnsupportedDigest,

    /// The `salt_size` option is outside `[0, 1024]`.
    #[error("The 'salt_size' option must be in the range (0 <= salt_size <= 1024)")]
    SaltSizeOutOfRange,

    /// The record's identifier is not of the form `pbkdf2-<digest>`.
    #[error("Incompatible {0} identifier found in the hash")]
    IncompatibleIdentifier(String),

    /// The record's identifier names a digest the registry does not know.
    #[error("Unsupported {0} digest function")]
    UnsupportedDigestFunction(String),

    /// The record's `i` param is missing or not an integer.
    #[error("The 'i' param must be an integer")]
    MalformedIterationsParam,

    /// The record's `i` param is an integer outside `[1, 2^32 - 1]`.
    #[error("The 'i' param must be in the range (1 <= i <= 4294967295)")]
    IterationsParamOutOfRange,

    /// The record has no salt field.
    #[error("No salt found in the given string")]
    MissingSalt,

    /// The record has no hash field.
    #[error("No hash found in the given string")]
    MissingHash,

    /// The record carries fields beyond the four the format permits.
    #[error("Unexpected field found in the given string")]
    UnexpectedField,

    /// A salt or hash field is not valid unpadded Base64.
    #[error("The '{0}' field contains invalid base64")]
    InvalidEncoding(&'static str),

    /// The OS entropy source failed while generating a salt.
    #[error("salt generation failed: {0}")]
    SaltGeneration(getrandom::Error),

    /// The PBKDF2 primitive rejected the request.
    #[error("key derivation failed: {0}")]
    Derivation(String),
}
