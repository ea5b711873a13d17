use rand::rand_core;
use thiserror::Error;

/// CMAC Result type.
pub type Result<T> = std::result::Result<T, Error>;

/// CMAC Error type.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Attempted to instantiate an AES key with an input size that is not 128, 192, or 256 bits.
    #[error("invalid key length: {len} bytes (expected 16, 24, or 32)")]
    InvalidKeyLength { len: usize },

    /// Provided a tag for verification that is not the full CMAC output width.
    #[error("invalid tag length: {len} bytes (expected 16)")]
    InvalidTagLength { len: usize },

    /// Computed tag did not match the provided tag. The message was modified since it
    /// was authenticated, or a different key was used.
    #[error("CMAC authentication failed (tag mismatch)")]
    AuthFailed,

    /// OS RNG failed during random key generation.
    #[error("OS RNG failed in random key generation")]
    Rng(#[from] rand_core::OsError),
}
