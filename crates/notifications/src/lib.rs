//! Notifications crate - Business logic for the Beacon notifications client
//!
//! This crate provides platform-independent functionality including:
//! - Domain models (Account, AuthState, Notification)
//! - Settings model and the settings store abstraction
//! - Zoom level/percentage conversion and debounced zoom sync
//! - Appearance control bindings
//! - User type filtering
//!
//! This crate has zero UI dependencies.

pub mod appearance;
pub mod config;
pub mod filters;
pub mod models;
pub mod settings;
pub mod storage;
pub mod zoom;

pub use appearance::{AppearanceBinding, AppearanceField, CheckboxState, ThemeOption};
pub use config::AppConfig;
pub use filters::{UserTypeFilter, UserTypeRow, filter_notifications};
pub use models::{
    Account, AccountNotifications, AuthState, Notification, NotificationMetrics, Platform,
    SubjectUser, UserType,
};
pub use settings::{Setting, SettingError, Settings, Theme, ThemeGroup};
pub use storage::{InMemorySettingsStore, SettingsStore};
pub use zoom::{
    DebounceState, ResizeDebounce, ZoomConfig, ZoomController, ZoomSurface, level_to_percentage,
    percentage_to_level,
};
