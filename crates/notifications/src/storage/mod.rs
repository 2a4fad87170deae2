//! Settings storage
//!
//! The settings store owns durable user preferences. Components only ever
//! upsert one field at a time through [`SettingsStore::update_setting`].

mod memory;
mod traits;

pub use memory::InMemorySettingsStore;
pub use traits::SettingsStore;
