//! Tag computation: ties segmentation, chaining, and subkey masking together
//! (RFC 4493 section 2.4).

use rayon::prelude::*;

use crate::mac::aes::Aes;
use crate::mac::chain::chain;
use crate::mac::cipher::BlockCipher;
use crate::mac::error::{Error, Result};
use crate::mac::key::Key;
use crate::mac::segment::segment;
use crate::mac::subkeys::Subkeys;
use crate::mac::util::{ct_eq, xor_block};

/// Computes and verifies AES-CMAC tags under a fixed key.
///
/// The subkeys are derived once at construction and reused for every message,
/// so repeated calls under the same key pay for the key schedule and subkey
/// derivation only once. Instances are immutable after construction and can be
/// shared freely across threads.
///
/// ## Examples
/// ```
/// # fn main() -> cmac_aes::Result<()> {
/// use cmac_aes::{Cmac, Key, KeySize};
///
/// let key = Key::generate(KeySize::Bits128)?;
/// let mac = Cmac::new(&key);
///
/// let tag = mac.tag(b"attack at dawn");
/// assert!(mac.verify(b"attack at dawn", &tag).is_ok());
/// assert!(mac.verify(b"attack at dusk", &tag).is_err());
/// # Ok(())
/// # }
/// ```
pub struct Cmac<C: BlockCipher> {
    cipher: C,
    subkeys: Subkeys,
}

impl Cmac<Aes> {
    /// Build a CMAC instance over the built-in AES primitive.
    pub fn new(key: &Key) -> Self {
        Self::from_cipher(Aes::new(key))
    }
}

impl<C: BlockCipher> Cmac<C> {
    /// Build a CMAC instance over any single-block cipher. Derives and caches
    /// the subkeys with one cipher invocation.
    pub fn from_cipher(cipher: C) -> Self {
        let subkeys = Subkeys::derive(&cipher);
        Self { cipher, subkeys }
    }

    /// Compute the 16-byte tag for a message of any length, including empty.
    pub fn tag(&self, message: &[u8]) -> [u8; 16] {
        let seg = segment(message);
        let chaining = chain(&self.cipher, message, seg.block_count);

        // a complete final block is masked with K1, a padded one with K2
        let subkey = if seg.last_complete {
            &self.subkeys.k1
        } else {
            &self.subkeys.k2
        };

        let mut y = seg.last_block;
        xor_block(&mut y, subkey);
        xor_block(&mut y, &chaining);

        self.cipher.encrypt_block(&y)
    }

    /// Recompute the tag for `message` and compare it against `tag`, folding
    /// the comparison so it does not exit early on the first mismatched byte.
    ///
    /// Returns [`Error::InvalidTagLength`] when `tag` is not 16 bytes, and
    /// [`Error::AuthFailed`] when the tags do not match.
    pub fn verify(&self, message: &[u8], tag: &[u8]) -> Result<()> {
        let tag: &[u8; 16] = tag
            .try_into()
            .map_err(|_| Error::InvalidTagLength { len: tag.len() })?;

        if ct_eq(&self.tag(message), tag) {
            Ok(())
        } else {
            Err(Error::AuthFailed)
        }
    }
}

/// Compute the AES-CMAC tag of `message` under `key` (16, 24, or 32 bytes of
/// raw key material).
pub fn compute_cmac(message: &[u8], key: &[u8]) -> Result<[u8; 16]> {
    let key = Key::try_from_slice(key)?;
    Ok(Cmac::new(&key).tag(message))
}

/// Verify `tag` against `message` under `key`.
pub fn verify_cmac(message: &[u8], key: &[u8], tag: &[u8]) -> Result<()> {
    let key = Key::try_from_slice(key)?;
    Cmac::new(&key).verify(message, tag)
}

/// Compute tags for many independent messages in parallel under one key.
///
/// Chaining within a single message is strictly sequential, but separate
/// messages share no state, so they fan out across the rayon pool. Output
/// order matches input order.
pub fn compute_cmac_batch(messages: &[&[u8]], key: &[u8]) -> Result<Vec<[u8; 16]>> {
    let key = Key::try_from_slice(key)?;
    let mac = Cmac::new(&key);
    Ok(messages.par_iter().map(|message| mac.tag(message)).collect())
}
