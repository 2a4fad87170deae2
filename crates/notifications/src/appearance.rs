//! Appearance settings bindings
//!
//! Maps the settings record and auth state to the state of each appearance
//! control, and turns control input into settings updates. Views render
//! these states and forward the returned [`Setting`] to the store.

use crate::models::AuthState;
use crate::settings::{Setting, Settings, Theme, ThemeGroup};

/// Boolean appearance fields backed by a checkbox
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppearanceField {
    DetailedNotifications,
    ShowPills,
    ShowNumber,
    ShowAccountHeader,
    WrapNotificationTitle,
}

impl AppearanceField {
    pub const ALL: [AppearanceField; 5] = [
        AppearanceField::DetailedNotifications,
        AppearanceField::ShowPills,
        AppearanceField::ShowNumber,
        AppearanceField::ShowAccountHeader,
        AppearanceField::WrapNotificationTitle,
    ];

    /// Settings key, also used as the control id
    pub fn name(&self) -> &'static str {
        match self {
            AppearanceField::DetailedNotifications => Setting::DETAILED_NOTIFICATIONS,
            AppearanceField::ShowPills => Setting::SHOW_PILLS,
            AppearanceField::ShowNumber => Setting::SHOW_NUMBER,
            AppearanceField::ShowAccountHeader => Setting::SHOW_ACCOUNT_HEADER,
            AppearanceField::WrapNotificationTitle => Setting::WRAP_NOTIFICATION_TITLE,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AppearanceField::DetailedNotifications => "Detailed notifications",
            AppearanceField::ShowPills => "Show notification metric pills",
            AppearanceField::ShowNumber => "Show number",
            AppearanceField::ShowAccountHeader => "Show account header",
            AppearanceField::WrapNotificationTitle => "Show full notification title",
        }
    }

    pub fn tooltip(&self) -> Option<&'static str> {
        match self {
            AppearanceField::DetailedNotifications => Some(
                "Enrich notifications with author or last commenter profile information, \
                 state and GitHub-like colors. Users with a large number of unread \
                 notifications may experience rate limiting.",
            ),
            AppearanceField::ShowPills => Some(
                "Show notification metric pills for linked issues, pr reviews, comments, \
                 labels and milestones.",
            ),
            AppearanceField::ShowNumber => Some(
                "Show GitHub number for discussions, issues and pull requests. \
                 Requires detailed notifications to be enabled.",
            ),
            AppearanceField::ShowAccountHeader => None,
            AppearanceField::WrapNotificationTitle => {
                Some("Wrap long notification titles instead of truncating them.")
            }
        }
    }

    fn setting(&self, value: bool) -> Setting {
        match self {
            AppearanceField::DetailedNotifications => Setting::DetailedNotifications(value),
            AppearanceField::ShowPills => Setting::ShowPills(value),
            AppearanceField::ShowNumber => Setting::ShowNumber(value),
            AppearanceField::ShowAccountHeader => Setting::ShowAccountHeader(value),
            AppearanceField::WrapNotificationTitle => Setting::WrapNotificationTitle(value),
        }
    }
}

/// Rendered state of one checkbox
#[derive(Debug, Clone, PartialEq)]
pub struct CheckboxState {
    pub field: AppearanceField,
    pub checked: bool,
    pub disabled: bool,
}

impl CheckboxState {
    pub fn name(&self) -> &'static str {
        self.field.name()
    }

    pub fn label(&self) -> &'static str {
        self.field.label()
    }

    pub fn tooltip(&self) -> Option<&'static str> {
        self.field.tooltip()
    }
}

/// One option in the theme select
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeOption {
    pub theme: Theme,
    pub label: &'static str,
    pub selected: bool,
}

/// Snapshot binding of settings and auth to appearance controls
pub struct AppearanceBinding<'a> {
    settings: &'a Settings,
    auth: &'a AuthState,
}

impl<'a> AppearanceBinding<'a> {
    pub fn new(settings: &'a Settings, auth: &'a AuthState) -> Self {
        Self { settings, auth }
    }

    /// Theme options grouped as System / Light / Dark
    pub fn theme_options(&self) -> Vec<(ThemeGroup, Vec<ThemeOption>)> {
        Theme::groups()
            .into_iter()
            .map(|(group, themes)| {
                let options = themes
                    .into_iter()
                    .map(|theme| ThemeOption {
                        theme,
                        label: theme.label(),
                        selected: theme == self.settings.theme,
                    })
                    .collect();
                (group, options)
            })
            .collect()
    }

    pub fn select_theme(&self, theme: Theme) -> Setting {
        Setting::Theme(theme)
    }

    pub fn checkbox(&self, field: AppearanceField) -> CheckboxState {
        let settings = self.settings;
        let multiple_accounts = self.auth.has_multiple_accounts();

        let (checked, disabled) = match field {
            AppearanceField::DetailedNotifications => (settings.detailed_notifications, false),
            AppearanceField::ShowPills => (settings.show_pills, false),
            AppearanceField::ShowNumber => (
                settings.detailed_notifications && settings.show_number,
                !settings.detailed_notifications,
            ),
            // Multiple accounts always need a header to tell them apart
            AppearanceField::ShowAccountHeader => {
                (settings.show_account_header || multiple_accounts, multiple_accounts)
            }
            AppearanceField::WrapNotificationTitle => (settings.wrap_notification_title, false),
        };

        CheckboxState {
            field,
            checked,
            disabled,
        }
    }

    pub fn checkboxes(&self) -> Vec<CheckboxState> {
        AppearanceField::ALL
            .into_iter()
            .map(|field| self.checkbox(field))
            .collect()
    }

    /// Settings update for a checkbox change, or `None` if the control is disabled
    pub fn toggle(&self, field: AppearanceField, checked: bool) -> Option<Setting> {
        if self.checkbox(field).disabled {
            return None;
        }
        Some(field.setting(checked))
    }
}
