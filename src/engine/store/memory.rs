//! In-process store with fault injection.

use super::{EnvError, EnvStore, Result};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

/// Keeps the PATH value in memory. `None` models an unset variable.
#[derive(Debug, Default)]
pub struct MemoryStore {
    value: Mutex<Option<String>>,
    writes: AtomicUsize,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl MemoryStore {
    /// Store with the variable unset
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: &str) -> Self {
        Self {
            value: Mutex::new(Some(value.to_string())),
            ..Self::default()
        }
    }

    /// Make every subsequent read fail
    pub fn fail_reads(&self) {
        self.fail_reads.store(true, Ordering::SeqCst);
    }

    /// Make every subsequent write fail
    pub fn fail_writes(&self) {
        self.fail_writes.store(true, Ordering::SeqCst);
    }

    /// Raw stored value, bypassing fault injection
    pub fn value(&self) -> Option<String> {
        self.value.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Number of successful writes
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl EnvStore for MemoryStore {
    fn read_user_path(&self) -> Result<String> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(EnvError::Injected("read denied".to_string()));
        }
        Ok(self.value().unwrap_or_default())
    }

    fn write_user_path(&self, value: &str) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(EnvError::Injected("write denied".to_string()));
        }
        *self.value.lock().unwrap_or_else(|e| e.into_inner()) = Some(value.to_string());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
