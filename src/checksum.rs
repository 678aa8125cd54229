use crate::alphabet::{BASE, BLOCK_BYTES, CHECKSUM_PERIOD};
use crate::error::{MosaicError, Result};

/// XOR of every byte across `blocks`, reduced modulo 47.
pub fn checksum47(blocks: &[[u8; BLOCK_BYTES]]) -> u32 {
    let x = blocks.iter().flatten().fold(0u8, |acc, &b| acc ^ b);
    x as u32 % BASE
}

/// The most recent blocks awaiting verification.
///
/// Flushed every time it reaches `CHECKSUM_PERIOD` blocks. A partial window
/// left over when the trailer arrives is never checked.
#[derive(Debug, Default)]
pub struct ChecksumWindow {
    blocks: Vec<[u8; BLOCK_BYTES]>,
}

impl ChecksumWindow {
    pub fn new() -> Self {
        ChecksumWindow {
            blocks: Vec::with_capacity(CHECKSUM_PERIOD),
        }
    }

    /// Push a decoded block; returns true once a checksum is due.
    pub fn push(&mut self, block: [u8; BLOCK_BYTES]) -> bool {
        self.blocks.push(block);
        self.is_full()
    }

    pub fn is_full(&self) -> bool {
        self.blocks.len() == CHECKSUM_PERIOD
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Compare the declared checksum digit with the window contents and clear
    /// the window on success. `position` is only used for diagnostics.
    pub fn verify(&mut self, declared: u32, position: usize) -> Result<()> {
        let computed = checksum47(&self.blocks);
        if declared != computed {
            return Err(MosaicError::ChecksumMismatch {
                position,
                declared,
                computed,
            });
        }
        log::debug!("[checksum] group verified: {computed}");
        self.blocks.clear();
        Ok(())
    }
}
