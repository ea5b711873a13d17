/// Single-block encryption capability consumed by the MAC core.
///
/// CMAC needs exactly one thing from its underlying cipher: encryption of a
/// single 16-byte block under a fixed key, with no chaining and no padding.
/// Implementations must be stateless per call (`Sync` is required) so that one
/// instance can serve concurrent callers.
///
/// The built-in implementation is [`Aes`](crate::Aes); anything else satisfying
/// this trait can be injected through [`Cmac::from_cipher`](crate::Cmac::from_cipher).
pub trait BlockCipher: Sync {
    /// Encrypt one 16-byte block.
    fn encrypt_block(&self, block: &[u8; 16]) -> [u8; 16];
}
