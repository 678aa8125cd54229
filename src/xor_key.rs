use crate::error::Result;

/// Fallback key used when the caller supplies none.
pub const DEFAULT_KEY: &str = "default-key";

/// Repeating-key XOR. An empty key leaves the data unchanged; applying the
/// same key twice restores the input.
pub fn xor_with_key<K>(data: &[u8], key: K) -> Vec<u8>
where
    K: AsRef<[u8]>,
{
    let mut out = data.to_vec();
    xor_in_place(&mut out, key);
    out
}

pub fn xor_in_place<K>(data: &mut [u8], key: K)
where
    K: AsRef<[u8]>,
{
    let key = key.as_ref();
    if key.is_empty() {
        return;
    }
    data.iter_mut()
        .zip(key.iter().cycle())
        .for_each(|(b, k)| *b ^= k);
}

/// Decrypt the hex XOR cipher: hex-decode (either case), then XOR with `key`.
/// A missing or empty key falls back to `DEFAULT_KEY`.
pub fn xor_decrypt_hex(ciphertext: &str, key: Option<&str>) -> Result<Vec<u8>> {
    let key = key.filter(|k| !k.is_empty()).unwrap_or(DEFAULT_KEY);
    log::info!("[xor] Decrypting {} hex characters", ciphertext.len());
    let mut data = hex::decode(ciphertext)?;
    xor_in_place(&mut data, key);
    Ok(data)
}
