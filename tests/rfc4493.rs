// Known-answer tests for the public API.
//
// AES-128 vectors are the four examples from RFC 4493 section 4; AES-192 and
// AES-256 vectors are the CMAC examples from NIST SP 800-38B appendix D
// (which reuse the SP 800-38A sample keys and message).

use hex_literal::hex;

use cmac_aes::{BlockCipher, Cmac, Error, Key, compute_cmac, compute_cmac_batch, verify_cmac};

const KEY_128: [u8; 16] = hex!("2b7e151628aed2a6abf7158809cf4f3c");
const KEY_192: [u8; 24] = hex!("8e73b0f7da0e6452c810f32b809079e562f8ead2522c6b7b");
const KEY_256: [u8; 32] = hex!("603deb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4");

const MESSAGE: [u8; 64] = hex!(
    "6bc1bee22e409f96e93d7e117393172a"
    "ae2d8a571e03ac9c9eb76fac45af8e51"
    "30c81c46a35ce411e5fbc1191a0a52ef"
    "f69f2445df4f9b17ad2b417be66c3710"
);

#[test]
fn aes128_empty_message() {
    let tag = compute_cmac(&[], &KEY_128).unwrap();
    assert_eq!(tag, hex!("bb1d6929e95937287fa37d129b756746"));
}

#[test]
fn aes128_one_block() {
    let tag = compute_cmac(&MESSAGE[..16], &KEY_128).unwrap();
    assert_eq!(tag, hex!("070a16b46b4d4144f79bdd9dd04a287c"));
}

#[test]
fn aes128_forty_bytes() {
    let tag = compute_cmac(&MESSAGE[..40], &KEY_128).unwrap();
    assert_eq!(tag, hex!("dfa66747de9ae63030ca32611497c827"));
}

#[test]
fn aes128_four_blocks() {
    let tag = compute_cmac(&MESSAGE, &KEY_128).unwrap();
    assert_eq!(tag, hex!("51f0bebf7e3b9d92fc49741779363cfe"));
}

#[test]
fn aes192_vectors() {
    let cases: [(&[u8], [u8; 16]); 4] = [
        (&[], hex!("d17ddf46adaacde531cac483de7a9367")),
        (&MESSAGE[..16], hex!("9e99a7bf31e710900662f65e617c5184")),
        (&MESSAGE[..40], hex!("8a1de5be2eb31aad089a82e6ee908b0e")),
        (&MESSAGE, hex!("a1d5df0eed790f794d77589659f39a11")),
    ];

    for (message, expected) in cases {
        assert_eq!(compute_cmac(message, &KEY_192).unwrap(), expected);
    }
}

#[test]
fn aes256_vectors() {
    let cases: [(&[u8], [u8; 16]); 4] = [
        (&[], hex!("028962f61b7bf89efc6b551f4667d983")),
        (&MESSAGE[..16], hex!("28a7023f452e8f82bd4bf28d8c37c35c")),
        (&MESSAGE[..40], hex!("aaf3d8f1de5640c232f5b169b9c911e6")),
        (&MESSAGE, hex!("e1992190549f6ed5696a2c056c315410")),
    ];

    for (message, expected) in cases {
        assert_eq!(compute_cmac(message, &KEY_256).unwrap(), expected);
    }
}

#[test]
fn verify_round_trip() {
    let tag = compute_cmac(&MESSAGE[..40], &KEY_128).unwrap();
    assert!(verify_cmac(&MESSAGE[..40], &KEY_128, &tag).is_ok());
}

#[test]
fn verify_rejects_modified_message() {
    let tag = compute_cmac(&MESSAGE[..40], &KEY_128).unwrap();

    let mut modified = MESSAGE[..40].to_vec();
    modified[17] ^= 0x01;

    match verify_cmac(&modified, &KEY_128, &tag) {
        Err(Error::AuthFailed) => {}
        other => panic!("expected AuthFailed, got {other:?}"),
    }
}

#[test]
fn verify_rejects_corrupted_tag() {
    let mut tag = compute_cmac(&MESSAGE, &KEY_128).unwrap();
    tag[0] ^= 0x80;

    match verify_cmac(&MESSAGE, &KEY_128, &tag) {
        Err(Error::AuthFailed) => {}
        other => panic!("expected AuthFailed, got {other:?}"),
    }
}

#[test]
fn verify_rejects_short_tag() {
    let tag = compute_cmac(&MESSAGE, &KEY_128).unwrap();

    match verify_cmac(&MESSAGE, &KEY_128, &tag[..12]) {
        Err(Error::InvalidTagLength { len: 12 }) => {}
        other => panic!("expected InvalidTagLength, got {other:?}"),
    }
}

#[test]
fn ten_byte_key_is_rejected_up_front() {
    match compute_cmac(b"irrelevant", &[0u8; 10]) {
        Err(Error::InvalidKeyLength { len: 10 }) => {}
        other => panic!("expected InvalidKeyLength, got {other:?}"),
    }
}

#[test]
fn single_bit_flips_change_the_tag() {
    let key = Key::try_from_slice(&KEY_128).unwrap();
    let mac = Cmac::new(&key);

    // 43 bytes: two complete blocks plus a padded remainder
    let baseline: Vec<u8> = (0..43u8).collect();
    let baseline_tag = mac.tag(&baseline);

    for byte in 0..baseline.len() {
        for bit in 0..8 {
            let mut flipped = baseline.clone();
            flipped[byte] ^= 1 << bit;
            assert_ne!(
                mac.tag(&flipped),
                baseline_tag,
                "tag unchanged after flipping bit {bit} of byte {byte}"
            );
        }
    }
}

#[test]
fn batch_matches_serial() {
    let messages: Vec<&[u8]> = vec![&[], &MESSAGE[..16], &MESSAGE[..40], &MESSAGE[..]];

    let batch = compute_cmac_batch(&messages, &KEY_128).unwrap();
    assert_eq!(batch.len(), messages.len());

    for (message, tag) in messages.iter().zip(&batch) {
        assert_eq!(compute_cmac(message, &KEY_128).unwrap(), *tag);
    }
}

// passes blocks through unchanged; L, K1, and K2 all come out zero, so the tag
// of the empty message is just its padded block
struct Identity;

impl BlockCipher for Identity {
    fn encrypt_block(&self, block: &[u8; 16]) -> [u8; 16] {
        *block
    }
}

#[test]
fn injected_cipher_drives_the_mac() {
    let mac = Cmac::from_cipher(Identity);
    assert_eq!(mac.tag(&[]), hex!("80000000000000000000000000000000"));
}
