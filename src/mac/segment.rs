//! Message segmentation: locate the final block and decide whether it needs
//! padding (RFC 4493 section 2.4, steps 2-4).

/// Outcome of splitting a message into 16-byte blocks.
pub(crate) struct Segmented {
    /// ceil(len / 16), with the empty message counted as one block.
    pub block_count: usize,
    /// True when the message is a non-empty exact multiple of 16 bytes.
    pub last_complete: bool,
    /// The final block: taken verbatim when complete, otherwise the remainder
    /// bytes followed by a single 0x80 marker and zero fill.
    pub last_block: [u8; 16],
}

pub(crate) fn segment(message: &[u8]) -> Segmented {
    let rem = message.len() % 16;
    let mut last = [0u8; 16];

    if !message.is_empty() && rem == 0 {
        last.copy_from_slice(&message[message.len() - 16..]);
        return Segmented {
            block_count: message.len() / 16,
            last_complete: true,
            last_block: last,
        };
    }

    // 0 to 15 remainder bytes, then the 10...0 padding
    last[..rem].copy_from_slice(&message[message.len() - rem..]);
    last[rem] = 0x80;

    Segmented {
        block_count: message.len().div_ceil(16).max(1),
        last_complete: false,
        last_block: last,
    }
}
