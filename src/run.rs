use log::{trace, warn};

use crate::error::StoreError;
use crate::store::BitStore;

// Contiguous run transfer between one word of the store and an in-memory
// bool sequence. Convention for both directions: the sequence is least
// significant first, the word keeps its most significant bit at the lowest
// bit index. A run written at `start_bit` therefore places the last sequence
// element at `start_bit` itself.
impl BitStore {
    // Writes `bits` into the word at `location` starting at `start_bit`.
    // Runs that do not fit are truncated to the bits that do: the
    // low-significance prefix `bits[..available]` is kept and the rest of
    // the sequence (the high-significance end of the requested width) is
    // dropped. On a bounds failure nothing is written.
    pub fn write_run(
        &mut self,
        location: u64,
        start_bit: u64,
        bits: &[bool],
    ) -> Result<(), StoreError> {
        self.check(location, start_bit)?;

        // cannot underflow once check has passed
        let available = (self.word_size() - start_bit) as usize;
        let applied = if bits.len() > available {
            warn!(
                "run of {} bits does not fit in {} bits after bit {}, truncating",
                bits.len(),
                available,
                start_bit
            );
            available
        } else {
            bits.len()
        };

        for offset in 0..applied {
            self.set(location, start_bit + offset as u64, bits[applied - offset - 1])?;
        }

        trace!(
            "wrote run of {} bits at location {} bit {}",
            applied, location, start_bit
        );
        Ok(())
    }

    // Reads `bit_count` bits from the word at `location` starting at
    // `start_bit`. Requests past the end of the word clamp to the available
    // count and return a shorter sequence; only bounds and initialization
    // problems are hard errors.
    pub fn read_run(
        &self,
        location: u64,
        start_bit: u64,
        bit_count: u64,
    ) -> Result<Vec<bool>, StoreError> {
        self.check(location, start_bit)?;

        let available = self.word_size() - start_bit;
        let to_read = if bit_count > available {
            warn!(
                "requested {} bits but only {} remain after bit {}, reading those",
                bit_count, available, start_bit
            );
            available
        } else {
            bit_count
        };

        let mut bits = vec![false; to_read as usize];
        for offset in 0..to_read {
            bits[(to_read - offset - 1) as usize] = self.get(location, start_bit + offset)?;
        }

        Ok(bits)
    }
}
