// src/tests/mod.rs - Centralized unit tests for bitstore

pub mod bytes_tests;

pub mod test_utils {
    pub fn init_logger() {
        let _ = env_logger::builder()
            .filter_level(log::LevelFilter::Debug)
            .try_init();
    }
}
