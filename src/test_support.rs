//! Test-only mosaic encoder used to build ciphertext fixtures.

use rand::Rng;

use crate::alphabet::{
    BASE, BLOCK_BYTES, BLOCK_SYMBOLS, CHECKSUM_PERIOD, MOSAIC_ALPHABET, NOISE_SET,
    RotatedAlphabet, TERM_CHAR,
};
use crate::checksum::checksum47;

fn u40_to_digits(block: &[u8; BLOCK_BYTES]) -> [usize; BLOCK_SYMBOLS] {
    let mut value = block
        .iter()
        .fold(0u64, |acc, &b| (acc << 8) | b as u64);
    let mut digits = [0usize; BLOCK_SYMBOLS];
    for d in digits.iter_mut().rev() {
        *d = (value % BASE as u64) as usize;
        value /= BASE as u64;
    }
    digits
}

fn encode_inner(data: &[u8], mut noise: impl FnMut(&mut String)) -> String {
    let mut out = String::new();
    let mut window = Vec::with_capacity(CHECKSUM_PERIOD);

    for (index, chunk) in data.chunks(BLOCK_BYTES).enumerate() {
        let mut block = [0u8; BLOCK_BYTES];
        block[..chunk.len()].copy_from_slice(chunk);

        let rotated = RotatedAlphabet::for_block(index).symbols();
        for d in u40_to_digits(&block) {
            noise(&mut out);
            out.push(rotated[d] as char);
        }
        noise(&mut out);
        out.push(TERM_CHAR);

        window.push(block);
        if window.len() == CHECKSUM_PERIOD {
            noise(&mut out);
            out.push(MOSAIC_ALPHABET[checksum47(&window) as usize] as char);
            window.clear();
        }
    }

    let pad = (BLOCK_BYTES - data.len() % BLOCK_BYTES) % BLOCK_BYTES;
    out.push(TERM_CHAR);
    out.push(TERM_CHAR);
    out.push(MOSAIC_ALPHABET[pad] as char);
    out
}

pub fn encode(data: &[u8]) -> String {
    encode_inner(data, |_| {})
}

/// Same as `encode`, with up to two noise characters before every digit,
/// terminator and checksum symbol.
pub fn encode_with_noise<R: Rng>(data: &[u8], rng: &mut R) -> String {
    encode_inner(data, |out| {
        for _ in 0..rng.random_range(0..3) {
            out.push(NOISE_SET[rng.random_range(0..NOISE_SET.len())] as char);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::encode;

    #[test]
    fn encoder_matches_known_fixtures() {
        assert_eq!(encode(b"AB"), "L@LPVRAG~~~D");
        assert_eq!(encode(b""), "~~A");
        assert_eq!(encode(b"Hello, World!"), "L$DAV@8%~Y^E%QF8Z~@7-4#J@J~~~C");
    }
}
