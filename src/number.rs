use log::warn;

use crate::error::StoreError;
use crate::store::BitStore;

// Converts a number into its fixed-length bit sequence, least significant
// bit at index 0. Positions past bit 63 come out false.
pub fn number_to_bits(number: u64, length: u64) -> Vec<bool> {
    let mut remaining = number;
    let mut bits = Vec::with_capacity(length as usize);
    for _ in 0..length {
        bits.push(remaining & 1 == 1);
        remaining >>= 1;
    }
    bits
}

// Inverse of number_to_bits: the highest index is the most significant bit.
// Sequences longer than 64 bits reduce mod 2^64.
pub fn bits_to_number(bits: &[bool]) -> u64 {
    let mut number = 0u64;
    for &bit in bits.iter().rev() {
        number = (number << 1) | bit as u64;
    }
    number
}

impl BitStore {
    // Encodes `number` into `length` bits of the word at `location` starting
    // at `start_bit`. The width narrows to the bits available in the word,
    // and a number too large for the final width is reduced modulo 2^width
    // before encoding; both are silent policy outcomes, not errors. A full
    // 64-bit width already spans the number's domain and is never reduced.
    pub fn write_number(
        &mut self,
        location: u64,
        start_bit: u64,
        number: u64,
        length: u64,
    ) -> Result<(), StoreError> {
        self.check(location, start_bit)?;

        let available = self.word_size() - start_bit;
        let width = length.min(available);
        let mut value = number;
        if width < 64 {
            let limit = 1u64 << width;
            if value >= limit {
                warn!(
                    "number {} does not fit in {} bits, truncating",
                    value, width
                );
                value %= limit;
            }
        }

        let bits = number_to_bits(value, width);
        self.write_run(location, start_bit, &bits)
    }

    // Decodes the `bit_width` bits at `start_bit` back into a number, the
    // bit at `start_bit` being the most significant. Requests past the end
    // of the word clamp to the bits that exist.
    pub fn read_number(
        &self,
        location: u64,
        start_bit: u64,
        bit_width: u64,
    ) -> Result<u64, StoreError> {
        self.check(location, start_bit)?;

        let available = self.word_size() - start_bit;
        let to_read = if bit_width > available {
            warn!(
                "requested a {} bit number but only {} bits remain after bit {}, reading a narrower one",
                bit_width, available, start_bit
            );
            available
        } else {
            bit_width
        };

        let bits = self.read_run(location, start_bit, to_read)?;
        Ok(bits_to_number(&bits))
    }
}
