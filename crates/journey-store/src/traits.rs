//! Store trait definitions

use crate::StoreResult;

/// Durable key-value blob storage.
///
/// Writes replace any previous value for the key. With several writers the
/// last completed `set` wins.
pub trait KeyValueStore: Send + Sync {
    /// Read the blob stored under `key`
    fn get(&self, key: &str) -> StoreResult<Option<Vec<u8>>>;

    /// Store `value` under `key`, replacing what was there
    fn set(&self, key: &str, value: &[u8]) -> StoreResult<()>;

    /// Remove `key`; removing a missing key is not an error
    fn remove(&self, key: &str) -> StoreResult<()>;

    /// Check if store is healthy
    fn is_healthy(&self) -> bool;
}
