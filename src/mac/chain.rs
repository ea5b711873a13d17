//! CBC-MAC chaining over every block except the last (RFC 4493 section 2.4,
//! step 6).

use crate::mac::cipher::BlockCipher;
use crate::mac::util::xor_block;

/// Fold the first `block_count - 1` blocks of `message` through
/// X = E(X XOR M_i), starting from the zero block. Each step consumes the
/// previous ciphertext, so a single message chains strictly in order.
pub(crate) fn chain<C: BlockCipher>(cipher: &C, message: &[u8], block_count: usize) -> [u8; 16] {
    let mut x = [0u8; 16];

    for chunk in message.chunks_exact(16).take(block_count - 1) {
        let block: &[u8; 16] = chunk.try_into().unwrap(); // safe unwrap, chunks_exact guarantees 16 bytes
        xor_block(&mut x, block);
        x = cipher.encrypt_block(&x);
    }

    x
}
