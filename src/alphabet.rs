pub const MOSAIC_ALPHABET: &[u8; 47] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%^&*_-?";
pub const NOISE_SET: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";
pub const TERM_CHAR: char = '~';

pub const BASE: u32 = 47;
pub const BLOCK_BYTES: usize = 5;
pub const BLOCK_SYMBOLS: usize = 8;
pub const CHECKSUM_PERIOD: usize = 4;

const INVALID: u8 = u8::MAX;

// symbol -> digit for the unrotated alphabet, ASCII only
static REV_BASE: [u8; 128] = build_rev(MOSAIC_ALPHABET);

static PARAMS: MosaicParams = MosaicParams {
    alphabet: MOSAIC_ALPHABET,
    term_char: TERM_CHAR,
    base: BASE,
    block_bytes: BLOCK_BYTES,
    block_symbols: BLOCK_SYMBOLS,
    checksum_period: CHECKSUM_PERIOD,
};

/// Format parameters of the mosaic encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MosaicParams {
    pub alphabet: &'static [u8; 47],
    pub term_char: char,
    pub base: u32,
    pub block_bytes: usize,
    pub block_symbols: usize,
    pub checksum_period: usize,
}

pub fn params() -> &'static MosaicParams {
    &PARAMS
}

const fn build_rev(alphabet: &[u8; 47]) -> [u8; 128] {
    let mut rev = [INVALID; 128];
    let mut i = 0;
    while i < alphabet.len() {
        rev[alphabet[i] as usize] = i as u8;
        i += 1;
    }
    rev
}

/// Digit value of `c` under the unrotated alphabet.
///
/// Checksum symbols and the trailer pad digit are always read through this.
pub fn base_digit(c: char) -> Option<u32> {
    if !c.is_ascii() {
        return None;
    }
    match REV_BASE[c as usize] {
        INVALID => None,
        v => Some(v as u32),
    }
}

pub fn is_noise(c: char) -> bool {
    c.is_ascii() && NOISE_SET.contains(&(c as u8))
}

/// Rotation applied to the digits of block `block_index`.
pub fn rotation_for_block(block_index: usize) -> u32 {
    ((block_index as u64 * 13 + 11) % BASE as u64) as u32
}

/// Alphabet rotated left by a block's rotation: `rotated[j] = alphabet[(j + rot) % 47]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotatedAlphabet {
    rot: u32,
}

impl RotatedAlphabet {
    pub fn new(rot: u32) -> Self {
        RotatedAlphabet { rot: rot % BASE }
    }

    pub fn for_block(block_index: usize) -> Self {
        Self::new(rotation_for_block(block_index))
    }

    pub fn rotation(&self) -> u32 {
        self.rot
    }

    pub fn symbols(&self) -> [u8; 47] {
        let mut rotated = [0u8; 47];
        for (j, slot) in rotated.iter_mut().enumerate() {
            *slot = MOSAIC_ALPHABET[(j + self.rot as usize) % BASE as usize];
        }
        rotated
    }

    /// Reverse lookup under this rotation. A symbol at base position `p`
    /// sits at `(p - rot) mod 47` in the rotated alphabet.
    pub fn digit(&self, c: char) -> Option<u32> {
        base_digit(c).map(|p| (p + BASE - self.rot) % BASE)
    }
}
