use log::{trace, warn};

use crate::error::StoreError;

// Fixed-size grid of boolean cells: `total_locations` rows ("locations"),
// each `word_size` bits wide. This is the only stateful entity in the crate;
// the run/number/byte codec layers all reach it through `check`, `get` and
// `set`, so every layer fails the same way on a bad address.
#[derive(Debug, Clone)]
pub struct BitStore {
    word_size: u64,
    total_locations: u64,
    initialized: bool,
    cells: Vec<bool>, // row-major, total_locations * word_size cells
}

impl BitStore {
    // Allocates a zeroed `total_locations` x `word_size` store. Allocation
    // failure never panics and never yields a partially usable store: the
    // returned value has zero dimensions, `is_initialized()` is false, and
    // every operation on it fails with StoreError::Uninitialized.
    pub fn new(total_locations: u64, word_size: u64) -> Self {
        let cell_count = match total_locations
            .checked_mul(word_size)
            .and_then(|count| usize::try_from(count).ok())
        {
            Some(count) => count,
            None => {
                warn!(
                    "store dimensions {} x {} exceed the address space, leaving store uninitialized",
                    total_locations, word_size
                );
                return Self::uninitialized();
            }
        };

        let mut cells = Vec::new();
        if cells.try_reserve_exact(cell_count).is_err() {
            warn!(
                "unable to allocate {} cells, leaving store uninitialized",
                cell_count
            );
            return Self::uninitialized();
        }
        cells.resize(cell_count, false);

        trace!(
            "initialized store with {} locations of {} bits",
            total_locations, word_size
        );
        BitStore {
            word_size,
            total_locations,
            initialized: true,
            cells,
        }
    }

    fn uninitialized() -> Self {
        BitStore {
            word_size: 0,
            total_locations: 0,
            initialized: false,
            cells: Vec::new(),
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn word_size(&self) -> u64 {
        self.word_size
    }

    pub fn total_locations(&self) -> u64 {
        self.total_locations
    }

    // Total number of cells, 0 for an uninitialized store.
    pub fn size(&self) -> u64 {
        if !self.initialized {
            return 0;
        }
        self.total_locations * self.word_size
    }

    // Precondition check shared by every operation. Conditions are evaluated
    // in a fixed order (initialized, location, bit) and the first failure is
    // reported.
    pub fn check(&self, location: u64, bit: u64) -> Result<(), StoreError> {
        if !self.initialized {
            warn!("store used before initialization");
            return Err(StoreError::Uninitialized);
        }
        if location >= self.total_locations {
            warn!(
                "location {} out of range, store has {} locations",
                location, self.total_locations
            );
            return Err(StoreError::LocationOutOfRange {
                location,
                total_locations: self.total_locations,
            });
        }
        if bit >= self.word_size {
            warn!(
                "bit {} out of range, word size is {}",
                bit, self.word_size
            );
            return Err(StoreError::BitOutOfRange {
                bit,
                word_size: self.word_size,
            });
        }
        Ok(())
    }

    pub fn get(&self, location: u64, bit: u64) -> Result<bool, StoreError> {
        self.check(location, bit)?;
        Ok(self.cells[self.index(location, bit)])
    }

    pub fn set(&mut self, location: u64, bit: u64, value: bool) -> Result<(), StoreError> {
        self.check(location, bit)?;
        let index = self.index(location, bit);
        self.cells[index] = value;
        Ok(())
    }

    // Only valid after `check` has passed for this address.
    fn index(&self, location: u64, bit: u64) -> usize {
        (location * self.word_size + bit) as usize
    }
}
