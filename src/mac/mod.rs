mod aes;
mod chain;
mod cipher;
mod cmac;
mod error;
mod key;
mod segment;
mod subkeys;
mod util;

pub use aes::Aes;
pub use cipher::BlockCipher;
pub use cmac::{Cmac, compute_cmac, compute_cmac_batch, verify_cmac};
pub use error::{Error, Result};
pub use key::{Key, KeySize, random_key};
