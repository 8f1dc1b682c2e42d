use crate::phonearea::errors::StoreError;

/// Storage API used by the loader and by queries, isolating the concrete
/// key-value engine so different backends can be swapped in easily.
///
/// Keys and values are opaque byte strings. Every write goes straight to
/// the backend; there is no batching or rollback.
pub trait KeyValueStore {
    /// Returns the value stored under `key`, or [`StoreError::NotFound`].
    fn get(&self, key: &[u8]) -> Result<Vec<u8>, StoreError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &[u8], value: &[u8]) -> Result<(), StoreError>;

    /// Atomically increments the counter under `key` and returns the new
    /// value. A missing counter starts at 0, so the first call returns 1.
    /// The counter is kept as decimal text.
    fn incr(&self, key: &[u8]) -> Result<u64, StoreError>;

    /// Makes every previous write durable.
    fn flush(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
