use log::warn;

use crate::error::StoreError;
use crate::store::BitStore;

// How a caller's number is reinterpreted on its way through the byte
// operations. Words always hold their bits big-endian; `Little` only
// byte-reverses the number before storage and after retrieval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endian {
    Big,
    Little,
}

// Whole bytes that fit between `start_bit` and the end of the word, capped
// at the requested count.
pub fn available_bytes(word_size: u64, start_bit: u64, requested_bytes: u64) -> u64 {
    requested_bytes.min(word_size.saturating_sub(start_bit) / 8)
}

// Reverses the low `byte_length` bytes of `number`. A length above 8 is
// treated as 8; bytes past `byte_length` are dropped, not preserved.
pub fn invert_endian(number: u64, byte_length: u64) -> u64 {
    let mut remaining = number;
    let mut inverted = 0u64;
    for _ in 0..byte_length.min(8) {
        inverted = (inverted << 8) | (remaining & 0xff);
        remaining >>= 8;
    }
    inverted
}

impl BitStore {
    // Stores the low `byte_length` bytes of `number` at `start_bit`,
    // narrowing to the whole bytes that fit in the word. With
    // `Endian::Little` the number is byte-reversed before storage, so the
    // word itself always reads big-endian.
    pub fn write_bytes(
        &mut self,
        location: u64,
        start_bit: u64,
        number: u64,
        byte_length: u64,
        endian: Endian,
    ) -> Result<(), StoreError> {
        self.check(location, start_bit)?;

        let usable = available_bytes(self.word_size(), start_bit, byte_length);
        if usable < byte_length {
            warn!(
                "only {} of {} requested bytes fit after bit {}, truncating",
                usable, byte_length, start_bit
            );
        }

        let value = match endian {
            Endian::Little => invert_endian(number, usable),
            Endian::Big => number,
        };

        self.write_number(location, start_bit, value, usable * 8)
    }

    // Reads `byte_length` bytes starting at `start_bit`, narrowed to the
    // whole bytes that fit, and undoes the `Endian::Little` reversal so the
    // caller gets back the number as it was presented to write_bytes.
    pub fn read_bytes(
        &self,
        location: u64,
        start_bit: u64,
        byte_length: u64,
        endian: Endian,
    ) -> Result<u64, StoreError> {
        self.check(location, start_bit)?;

        let usable = available_bytes(self.word_size(), start_bit, byte_length);
        if usable < byte_length {
            warn!(
                "only {} of {} requested bytes fit after bit {}, reading those",
                usable, byte_length, start_bit
            );
        }

        let number = self.read_number(location, start_bit, usable * 8)?;
        Ok(match endian {
            Endian::Little => invert_endian(number, usable),
            Endian::Big => number,
        })
    }
}
