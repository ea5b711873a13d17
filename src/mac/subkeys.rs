//! Subkey derivation (RFC 4493 section 2.3). K1 masks a final block that is
//! complete; K2 masks one that needed padding.

use crate::mac::cipher::BlockCipher;

/// Reduction constant for doubling in GF(2^128): x^7 + x^2 + x + 1. Only the
/// least significant byte of Rb is non-zero.
const RB: u8 = 0x87;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub(crate) struct Subkeys {
    pub k1: [u8; 16],
    pub k2: [u8; 16],
}

impl Subkeys {
    /// Derive both subkeys with a single cipher invocation:
    /// L = E(0^128), K1 = dbl(L), K2 = dbl(K1).
    pub fn derive<C: BlockCipher>(cipher: &C) -> Self {
        let l = cipher.encrypt_block(&[0u8; 16]);
        let k1 = dbl(&l);
        let k2 = dbl(&k1);
        Self { k1, k2 }
    }
}

/// Doubling in GF(2^128): left-shift the 128-bit value one bit (byte 0 is most
/// significant) and reduce by Rb when the shifted-out bit was set. The
/// reduction is branchless.
pub(crate) fn dbl(block: &[u8; 16]) -> [u8; 16] {
    let mut out = [0u8; 16];
    let mut carry = 0u8;

    for i in (0..16).rev() {
        out[i] = (block[i] << 1) | carry;
        carry = block[i] >> 7;
    }

    out[15] ^= RB & 0u8.wrapping_sub(carry);
    out
}
