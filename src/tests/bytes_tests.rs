// src/tests/bytes_tests.rs - Byte-level access and endian inversion

use crate::{available_bytes, invert_endian, BitStore, Endian, StoreError};

#[test]
fn available_bytes_counts_whole_bytes_only() {
    assert_eq!(available_bytes(16, 0, 2), 2);
    assert_eq!(available_bytes(16, 0, 3), 2);
    assert_eq!(available_bytes(16, 5, 2), 1);
    assert_eq!(available_bytes(16, 9, 1), 0);
    assert_eq!(available_bytes(4, 0, 1), 0);
    // start past the end of the word saturates instead of wrapping
    assert_eq!(available_bytes(8, 20, 1), 0);
}

#[test]
fn invert_endian_reverses_the_low_bytes() {
    assert_eq!(invert_endian(0x1234, 2), 0x3412);
    assert_eq!(invert_endian(0x0102_0304, 4), 0x0403_0201);
    assert_eq!(invert_endian(0x1234, 1), 0x34); // bytes past the length are dropped
    assert_eq!(invert_endian(0xFF, 0), 0);
}

#[test]
fn invert_endian_caps_the_length_at_eight_bytes() {
    let number = 0xDEAD_BEEF_CAFE_BABE;
    assert_eq!(invert_endian(number, 9), number.swap_bytes());
    assert_eq!(invert_endian(number, 8), number.swap_bytes());
}

#[test]
fn invert_endian_twice_is_identity_within_the_length() {
    for number in [0u64, 0x12, 0x1234, 0xDEAD_BEEF] {
        assert_eq!(invert_endian(invert_endian(number, 4), 4), number);
    }
}

#[test]
fn little_endian_bytes_round_trip() {
    let mut store = BitStore::new(1, 16);
    store.write_bytes(0, 0, 0x1234, 2, Endian::Little).unwrap();
    assert_eq!(store.read_bytes(0, 0, 2, Endian::Little).unwrap(), 0x1234);
    // physically the word holds the byte-reversed value
    assert_eq!(store.read_bytes(0, 0, 2, Endian::Big).unwrap(), 0x3412);
}

#[test]
fn big_endian_bytes_round_trip() {
    let mut store = BitStore::new(1, 32);
    store.write_bytes(0, 0, 0xCAFE_F00D, 4, Endian::Big).unwrap();
    assert_eq!(store.read_bytes(0, 0, 4, Endian::Big).unwrap(), 0xCAFE_F00D);
    assert_eq!(store.read_number(0, 0, 32).unwrap(), 0xCAFE_F00D);
}

#[test]
fn byte_requests_clamp_to_whole_bytes_that_fit() {
    let mut store = BitStore::new(1, 8);
    // two bytes requested, one fits: only the low byte is stored
    store.write_bytes(0, 0, 0xABCD, 2, Endian::Big).unwrap();
    assert_eq!(store.read_bytes(0, 0, 2, Endian::Big).unwrap(), 0xCD);
}

#[test]
fn little_endian_clamp_keeps_the_low_byte() {
    let mut store = BitStore::new(1, 8);
    store.write_bytes(0, 0, 0xABCD, 2, Endian::Little).unwrap();
    assert_eq!(store.read_bytes(0, 0, 2, Endian::Little).unwrap(), 0xCD);
}

#[test]
fn sub_byte_words_store_nothing() {
    let mut store = BitStore::new(1, 4);
    store.write_bytes(0, 0, 0xFF, 1, Endian::Big).unwrap();
    assert_eq!(store.read_number(0, 0, 4).unwrap(), 0);
    assert_eq!(store.read_bytes(0, 0, 1, Endian::Big).unwrap(), 0);
}

#[test]
fn eight_byte_values_round_trip_both_ways() {
    let mut store = BitStore::new(2, 64);
    let number = 0xDEAD_BEEF_CAFE_BABE;
    store.write_bytes(0, 0, number, 8, Endian::Big).unwrap();
    store.write_bytes(1, 0, number, 8, Endian::Little).unwrap();
    assert_eq!(store.read_bytes(0, 0, 8, Endian::Big).unwrap(), number);
    assert_eq!(store.read_bytes(1, 0, 8, Endian::Little).unwrap(), number);
    assert_eq!(
        store.read_bytes(1, 0, 8, Endian::Big).unwrap(),
        number.swap_bytes()
    );
}

#[test]
fn byte_operations_check_bounds_first() {
    let mut store = BitStore::new(1, 16);
    assert_eq!(
        store.write_bytes(0, 16, 0xFF, 1, Endian::Big),
        Err(StoreError::BitOutOfRange {
            bit: 16,
            word_size: 16
        })
    );
    assert_eq!(
        store.read_bytes(4, 0, 1, Endian::Big),
        Err(StoreError::LocationOutOfRange {
            location: 4,
            total_locations: 1
        })
    );
}

#[test]
fn bytes_write_at_an_offset_within_the_word() {
    let mut store = BitStore::new(1, 24);
    store.write_bytes(0, 8, 0xAB, 1, Endian::Big).unwrap();
    assert_eq!(store.read_bytes(0, 8, 1, Endian::Big).unwrap(), 0xAB);
    // surrounding bytes stay clear
    assert_eq!(store.read_number(0, 0, 8).unwrap(), 0);
    assert_eq!(store.read_number(0, 16, 8).unwrap(), 0);
}
