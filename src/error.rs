use thiserror::Error;

// Failure kinds shared by every store operation. Truncation is deliberately
// absent: narrowing an over-long request to the bits that fit is a policy
// outcome reported through `log::warn!`, never a failed call.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    #[error("store is not initialized")]
    Uninitialized,
    #[error("location {location} out of range, store has {total_locations} locations")]
    LocationOutOfRange { location: u64, total_locations: u64 },
    #[error("bit {bit} out of range, word size is {word_size}")]
    BitOutOfRange { bit: u64, word_size: u64 },
}
