pub mod alphabet;
pub mod checksum;
pub mod config;
pub mod error;
pub mod logger;
pub mod mosaic;
pub mod report;
pub mod util;
pub mod xor_key;

#[cfg(test)]
mod test_support;

pub use config::DecryptOptions;
pub use error::{ErrorKind, MosaicError, Result};

use mosaic::MosaicCodec;

/// Decode mosaic text into raw bytes, without the keystream.
pub fn decode<T>(ciphertext: T) -> Result<Vec<u8>>
where
    T: AsRef<str>,
{
    MosaicCodec.decode(ciphertext)
}

/// Decode mosaic text, then apply the keystream if `options` ask for it.
pub fn decrypt<T>(ciphertext: T, options: &DecryptOptions) -> Result<Vec<u8>>
where
    T: AsRef<str>,
{
    let mut plain = MosaicCodec.decode(ciphertext)?;
    if options.apply_keystream {
        log::info!("[decrypt] Applying keystream ({} key bytes)", options.key.len());
        xor_key::xor_in_place(&mut plain, &options.key);
    }
    Ok(plain)
}

/// Decrypt the hex XOR cipher.
pub fn decrypt_xor(ciphertext: &str, key: Option<&str>) -> Result<Vec<u8>> {
    xor_key::xor_decrypt_hex(ciphertext, key)
}
