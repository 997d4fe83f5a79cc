// ABOUTME: Shared helpers for settings integration tests
// ABOUTME: Store and notifier doubles that record how they were used

#![allow(dead_code)]

use eightpass_settings::{KeyValueStore, MemoryStore, PasswordChangeNotifier, PasswordSource};
use eightpass_storage::{StorageError, StorageResult};
use std::collections::HashMap;
use std::io;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Debug, Default)]
struct Counters {
    sets: HashMap<String, usize>,
    saves: usize,
}

/// Memory store that counts mutations per key and saves. Clones share state.
#[derive(Debug, Clone, Default)]
pub struct CountingStore {
    inner: MemoryStore,
    counters: Arc<Mutex<Counters>>,
}

impl CountingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn backing(&self) -> MemoryStore {
        self.inner.clone()
    }

    pub fn set_count(&self, key: &str) -> usize {
        let counters = self.counters.lock().unwrap();
        counters.sets.get(key).copied().unwrap_or(0)
    }

    pub fn save_count(&self) -> usize {
        self.counters.lock().unwrap().saves
    }
}

impl KeyValueStore for CountingStore {
    fn contains(&self, key: &str) -> bool {
        self.inner.contains(key)
    }

    fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        *self
            .counters
            .lock()
            .unwrap()
            .sets
            .entry(key.to_string())
            .or_insert(0) += 1;
        self.inner.set(key, value)
    }

    fn remove(&mut self, key: &str) -> StorageResult<bool> {
        self.inner.remove(key)
    }

    fn save(&mut self) -> StorageResult<()> {
        self.counters.lock().unwrap().saves += 1;
        self.inner.save()
    }
}

/// Store that stages writes in memory and only commits them to its durable
/// copy on a successful save. Can be told to fail the next save.
#[derive(Debug, Clone, Default)]
pub struct StagingStore {
    staged: MemoryStore,
    durable: MemoryStore,
    fail_next_save: Arc<AtomicBool>,
}

impl StagingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// What a reopened store would see
    pub fn durable(&self) -> MemoryStore {
        self.durable.clone()
    }

    pub fn fail_next_save(&self) {
        self.fail_next_save.store(true, Ordering::SeqCst);
    }
}

impl KeyValueStore for StagingStore {
    fn contains(&self, key: &str) -> bool {
        self.staged.contains(key)
    }

    fn get(&self, key: &str) -> Option<String> {
        self.staged.get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.staged.set(key, value)
    }

    fn remove(&mut self, key: &str) -> StorageResult<bool> {
        self.staged.remove(key)
    }

    fn save(&mut self) -> StorageResult<()> {
        if self.fail_next_save.swap(false, Ordering::SeqCst) {
            return Err(StorageError::Io(io::Error::new(
                io::ErrorKind::Other,
                "disk full",
            )));
        }

        let staged = self.staged.snapshot();
        for key in self.durable.snapshot().keys() {
            if !staged.contains_key(key) {
                self.durable.remove(key)?;
            }
        }
        for (key, value) in &staged {
            self.durable.set(key, value)?;
        }
        Ok(())
    }
}

/// Notifier that records each call and the password it saw
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    calls: Arc<AtomicUsize>,
    seen: Arc<Mutex<Vec<Option<String>>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn seen(&self) -> Vec<Option<String>> {
        self.seen.lock().unwrap().clone()
    }
}

impl PasswordChangeNotifier for RecordingNotifier {
    fn on_password_entered(&self, source: &dyn PasswordSource) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().unwrap().push(source.password());
    }
}
