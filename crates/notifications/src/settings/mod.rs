//! User preferences shown in the settings screen

mod setting;
mod theme;

pub use setting::{Setting, SettingError};
pub use theme::{Theme, ThemeGroup};

use serde::{Deserialize, Serialize};

use crate::models::UserType;

/// Percentage the window renders at when no zoom has been applied
pub const DEFAULT_ZOOM_PERCENTAGE: i32 = 100;

/// Settings record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub theme: Theme,
    pub zoom_percentage: i32,
    /// Enrich notifications with author details, state and colours
    pub detailed_notifications: bool,
    /// Show metric pills (linked issues, reviews, comments, labels, milestones)
    pub show_pills: bool,
    /// Show the issue/PR/discussion number (requires detailed notifications)
    pub show_number: bool,
    pub show_account_header: bool,
    /// Wrap long notification titles instead of truncating them
    pub wrap_notification_title: bool,
    pub filter_user_types: Vec<UserType>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::System,
            zoom_percentage: DEFAULT_ZOOM_PERCENTAGE,
            detailed_notifications: true,
            show_pills: true,
            show_number: true,
            show_account_header: false,
            wrap_notification_title: false,
            filter_user_types: Vec::new(),
        }
    }
}

impl Settings {
    /// Upsert a single field
    pub fn apply(&mut self, setting: Setting) {
        match setting {
            Setting::Theme(theme) => self.theme = theme,
            Setting::ZoomPercentage(percentage) => self.zoom_percentage = percentage,
            Setting::DetailedNotifications(value) => self.detailed_notifications = value,
            Setting::ShowPills(value) => self.show_pills = value,
            Setting::ShowNumber(value) => self.show_number = value,
            Setting::ShowAccountHeader(value) => self.show_account_header = value,
            Setting::WrapNotificationTitle(value) => self.wrap_notification_title = value,
            Setting::FilterUserTypes(types) => self.filter_user_types = types,
        }
    }

    /// Builder-style variant of [`Settings::apply`]
    pub fn with(mut self, setting: Setting) -> Self {
        self.apply(setting);
        self
    }

    pub fn has_user_type_filter(&self) -> bool {
        !self.filter_user_types.is_empty()
    }

    /// Subject numbers come from detailed notifications
    pub fn shows_number(&self) -> bool {
        self.detailed_notifications && self.show_number
    }
}
