//! Storage trait definitions

use anyhow::Result;

use crate::settings::{Setting, Settings};

/// Key-value store for user preferences
///
/// Writes are last-write-wins upserts of a single field. Implementations
/// serialize concurrent writes themselves.
pub trait SettingsStore: Send + Sync {
    /// Current settings snapshot
    fn settings(&self) -> Result<Settings>;

    /// Upsert a single named field
    fn update_setting(&self, setting: Setting) -> Result<()>;
}
