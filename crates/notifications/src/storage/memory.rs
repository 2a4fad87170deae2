//! In-memory settings store

use anyhow::{Result, anyhow};
use log::info;
use std::collections::HashMap;
use std::sync::RwLock;

use super::SettingsStore;
use crate::settings::{Setting, Settings};

/// In-memory implementation of SettingsStore
///
/// Keeps a per-key write counter so callers can observe how often a field
/// was committed.
pub struct InMemorySettingsStore {
    settings: RwLock<Settings>,
    writes: RwLock<HashMap<&'static str, usize>>,
}

impl InMemorySettingsStore {
    /// Create a store holding default settings
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    /// Create a store seeded with the given settings
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            settings: RwLock::new(settings),
            writes: RwLock::new(HashMap::new()),
        }
    }

    /// Number of writes recorded for a key
    pub fn write_count(&self, key: &str) -> usize {
        self.writes
            .read()
            .map(|writes| writes.get(key).copied().unwrap_or(0))
            .unwrap_or(0)
    }

    /// Total number of writes across all keys
    pub fn total_writes(&self) -> usize {
        self.writes
            .read()
            .map(|writes| writes.values().sum())
            .unwrap_or(0)
    }
}

impl Default for InMemorySettingsStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsStore for InMemorySettingsStore {
    fn settings(&self) -> Result<Settings> {
        let settings = self
            .settings
            .read()
            .map_err(|_| anyhow!("settings lock poisoned"))?;
        Ok(settings.clone())
    }

    fn update_setting(&self, setting: Setting) -> Result<()> {
        let key = setting.key();
        info!("Updating setting {} = {}", key, setting.value());

        let mut settings = self
            .settings
            .write()
            .map_err(|_| anyhow!("settings lock poisoned"))?;
        settings.apply(setting);
        drop(settings);

        let mut writes = self
            .writes
            .write()
            .map_err(|_| anyhow!("settings write counter poisoned"))?;
        *writes.entry(key).or_default() += 1;
        Ok(())
    }
}
