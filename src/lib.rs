// bitstore: a bit-addressable storage substrate. A store is a fixed grid of
// boolean cells (locations x word size) with codec layers for single bits,
// contiguous bit runs, unsigned numbers, and endian-ordered byte sequences.
// It exists to carry higher-level binary encodings: register files, packed
// records, network frame fields.

use log::info;

mod bytes;
mod error;
mod number;
mod run;
mod store;

#[cfg(test)]
mod tests;

pub use bytes::{available_bytes, invert_endian, Endian};
pub use error::StoreError;
pub use number::{bits_to_number, number_to_bits};
pub use store::BitStore;

// Initializes logging for the library
pub fn init() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    info!("bitstore library initialized");
}
