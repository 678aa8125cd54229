use crate::xor_key::DEFAULT_KEY;

/// Environment variable consulted for a key when none is given explicitly.
pub const KEY_ENV: &str = "MOSAIC_KEY";

/// Options for a mosaic decrypt run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecryptOptions {
    /// Apply the repeating-key XOR after decoding.
    pub apply_keystream: bool,
    pub key: Vec<u8>,
}

impl Default for DecryptOptions {
    fn default() -> Self {
        DecryptOptions {
            apply_keystream: false,
            key: DEFAULT_KEY.as_bytes().to_vec(),
        }
    }
}

impl DecryptOptions {
    /// Keystream enabled. `None` selects `DEFAULT_KEY`; a given key is used
    /// as-is, so an empty one makes the keystream a no-op.
    pub fn with_key(key: Option<&str>) -> Self {
        DecryptOptions {
            apply_keystream: true,
            key: key.unwrap_or(DEFAULT_KEY).as_bytes().to_vec(),
        }
    }
}

/// Explicit key first, then `MOSAIC_KEY`.
pub fn resolve_key(explicit: Option<String>) -> Option<String> {
    resolve_key_from(explicit, std::env::var(KEY_ENV).ok())
}

fn resolve_key_from(explicit: Option<String>, env: Option<String>) -> Option<String> {
    explicit.or(env.filter(|k| !k.is_empty()))
}
