use crate::alphabet::{
    BASE, BLOCK_BYTES, BLOCK_SYMBOLS, RotatedAlphabet, TERM_CHAR, base_digit, is_noise,
};
use crate::checksum::ChecksumWindow;
use crate::error::{MosaicError, Result};

const U40_MASK: u64 = (1 << 40) - 1;

/// Combine base-47 digits (most significant first) and keep the low 40 bits
/// as 5 big-endian bytes. Values above 2^40 - 1 lose their high bits.
pub fn digits_to_block(digits: &[u32; BLOCK_SYMBOLS]) -> [u8; BLOCK_BYTES] {
    let value = digits
        .iter()
        .fold(0u64, |acc, &d| acc * BASE as u64 + d as u64);
    let bytes = (value & U40_MASK).to_be_bytes();
    let mut block = [0u8; BLOCK_BYTES];
    block.copy_from_slice(&bytes[8 - BLOCK_BYTES..]);
    block
}

pub struct MosaicCodec;

impl MosaicCodec {
    pub fn decode<T>(&self, input: T) -> Result<Vec<u8>>
    where
        T: AsRef<str>,
        Self: Send + Sync,
    {
        let input = input.as_ref();
        log::info!("[mosaic] Decoding {} characters", input.chars().count());
        Scanner::new(input).run()
    }
}

// Cursor state of a single decode run.
struct Scanner {
    symbols: Vec<char>,
    pos: usize,
    block_index: usize,
    out: Vec<u8>,
    window: ChecksumWindow,
}

impl Scanner {
    fn new(input: &str) -> Self {
        let symbols: Vec<char> = input.chars().collect();
        Scanner {
            out: Vec::with_capacity(symbols.len() / (BLOCK_SYMBOLS + 1) * BLOCK_BYTES),
            symbols,
            pos: 0,
            block_index: 0,
            window: ChecksumWindow::new(),
        }
    }

    fn run(mut self) -> Result<Vec<u8>> {
        while self.pos < self.symbols.len() {
            self.skip_whitespace();
            if self.pos >= self.symbols.len() {
                break;
            }

            if self.at_trailer() {
                return self.finish();
            }
            if self.remaining() == 2 && self.at_double_term() {
                return Err(MosaicError::IncompleteTrailer { position: self.pos });
            }

            self.decode_block()?;
            if self.window.is_full() {
                self.verify_checksum()?;
            }
        }

        log::debug!("[mosaic] Input exhausted after {} blocks", self.block_index);
        Err(MosaicError::NoTrailer)
    }

    fn remaining(&self) -> usize {
        self.symbols.len() - self.pos
    }

    fn peek(&self) -> Option<char> {
        self.symbols.get(self.pos).copied()
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.pos += 1;
        }
    }

    fn skip_noise(&mut self) {
        let start = self.pos;
        while self.peek().is_some_and(is_noise) {
            self.pos += 1;
        }
        if self.pos > start {
            log::trace!("[mosaic] Skipped {} noise characters at {start}", self.pos - start);
        }
    }

    fn at_double_term(&self) -> bool {
        self.symbols[self.pos] == TERM_CHAR && self.symbols[self.pos + 1] == TERM_CHAR
    }

    // The trailer needs room for its pad digit; a bare "~~" is not one.
    fn at_trailer(&self) -> bool {
        self.remaining() >= 3 && self.at_double_term()
    }

    fn decode_block(&mut self) -> Result<()> {
        let block = self.block_index;
        let alphabet = RotatedAlphabet::for_block(block);
        let mut digits = [0u32; BLOCK_SYMBOLS];

        for digit in digits.iter_mut() {
            self.skip_noise();
            let position = self.pos;
            let c = self.peek().ok_or(MosaicError::UnexpectedEnd { block })?;
            if c == TERM_CHAR {
                return Err(MosaicError::UnexpectedTerminator { position, block });
            }
            *digit = alphabet.digit(c).ok_or(MosaicError::InvalidDigit {
                position,
                found: c,
                block,
            })?;
            self.pos += 1;
        }

        self.skip_noise();
        match self.peek() {
            Some(TERM_CHAR) => self.pos += 1,
            found => {
                return Err(MosaicError::MissingTerminator {
                    position: self.pos,
                    found,
                    block,
                });
            }
        }

        let bytes = digits_to_block(&digits);
        log::debug!(
            "[mosaic] Block {block} (rot {}): {:02x?}",
            alphabet.rotation(),
            bytes
        );
        self.out.extend_from_slice(&bytes);
        self.window.push(bytes);
        self.block_index += 1;
        Ok(())
    }

    fn verify_checksum(&mut self) -> Result<()> {
        self.skip_noise();
        let position = self.pos;
        let c = self.peek().ok_or(MosaicError::MissingChecksum {
            block: self.block_index - 1,
        })?;
        self.pos += 1;
        let declared = base_digit(c).ok_or(MosaicError::InvalidChecksumChar { position, found: c })?;
        self.window.verify(declared, position)
    }

    fn finish(mut self) -> Result<Vec<u8>> {
        let position = self.pos + 2;
        let found = self.symbols[position];
        let pad = base_digit(found).ok_or(MosaicError::InvalidPadDigit { position, found })?;
        if pad as usize >= BLOCK_BYTES {
            return Err(MosaicError::InvalidPadCount(pad));
        }

        let pad = pad as usize;
        if pad > self.out.len() {
            return Err(MosaicError::PadMismatch {
                pad,
                available: self.out.len(),
            });
        }
        self.out.truncate(self.out.len() - pad);

        self.pos += 3;
        if self.pos != self.symbols.len() {
            return Err(MosaicError::TrailingData {
                position: self.pos,
                remaining: self.remaining(),
            });
        }

        log::debug!(
            "[mosaic] Trailer consumed: {} blocks, pad {pad}, {} bytes",
            self.block_index,
            self.out.len()
        );
        Ok(self.out)
    }
}
