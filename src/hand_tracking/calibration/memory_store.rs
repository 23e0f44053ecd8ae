use std::collections::HashMap;

use crate::hand_tracking::calibration::store::SettingsStore;
use crate::hand_tracking::common::error::Result;

/// Volatile settings store
#[derive(Debug, Default, Clone)]
pub struct MemorySettingsStore {
    values: HashMap<String, f32>,
    flushes: u64,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Number of times `flush` was called.
    pub fn flush_count(&self) -> u64 {
        self.flushes
    }
}

impl SettingsStore for MemorySettingsStore {
    fn get_f32(&self, key: &str, default: f32) -> f32 {
        self.values.get(key).copied().unwrap_or(default)
    }

    fn set_f32(&mut self, key: &str, value: f32) {
        self.values.insert(key.to_string(), value);
    }

    fn flush(&mut self) -> Result<()> {
        self.flushes += 1;
        Ok(())
    }
}
