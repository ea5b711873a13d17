mod mac;

pub use mac::{
    Aes, BlockCipher, Cmac, Error, Key, KeySize, Result, compute_cmac, compute_cmac_batch,
    random_key, verify_cmac,
};
