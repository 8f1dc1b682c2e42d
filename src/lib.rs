//! Lookup of the registration area of mainland China mobile numbers.
//!
//! A flat source table (one line per 7 digit number prefix) is loaded once
//! into a persistent key-value store; afterwards every query normalizes the
//! number, takes its prefix and reads the area fields back from the store.

mod interfaces;
mod memory_store;
mod phonearea;
mod redb_store;
pub(crate) mod string_util;

#[cfg(test)]
mod tests;

pub use interfaces::KeyValueStore;
pub use memory_store::MemoryStore;
pub use phonearea::{
    Area, AreaField, AreaRecord, PhoneArea, errors, generate_db, load_records,
    normalize_phone_number, parse_area_line,
};
pub use redb_store::RedbStore;
