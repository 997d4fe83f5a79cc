// ABOUTME: Key-value store trait consumed by the settings facade
// ABOUTME: Raw strings only; typed encoding is the caller's responsibility

use crate::StorageResult;

/// Persistent mapping from string key to string value.
///
/// Stores hold raw strings. Encoding booleans, integers and the like is the
/// settings layer's job, which keeps adapters generic and swappable.
///
/// `set` and `remove` are allowed to only stage a change; nothing is durable
/// until `save` returns `Ok`.
pub trait KeyValueStore: Send {
    /// Whether a value is stored under `key`.
    fn contains(&self, key: &str) -> bool;

    /// Read the value stored under `key`. Returns None if not found.
    fn get(&self, key: &str) -> Option<String>;

    /// Insert or replace the value under `key`.
    fn set(&mut self, key: &str, value: &str) -> StorageResult<()>;

    /// Remove `key`. Returns whether it was present.
    fn remove(&mut self, key: &str) -> StorageResult<bool>;

    /// Durably persist all pending changes.
    fn save(&mut self) -> StorageResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn contains(&self, key: &str) -> bool {
        (**self).contains(key)
    }

    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> StorageResult<bool> {
        (**self).remove(key)
    }

    fn save(&mut self) -> StorageResult<()> {
        (**self).save()
    }
}
