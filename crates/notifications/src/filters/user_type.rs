//! Filter notifications by the type of user behind the subject
//!
//! User types are only known when detailed notifications are enabled, so the
//! filter is inert otherwise.

use crate::models::{AccountNotifications, Notification, UserType};
use crate::settings::{Setting, Settings};

/// One checkbox row in the user type filter
#[derive(Debug, Clone, PartialEq)]
pub struct UserTypeRow {
    pub user_type: UserType,
    pub title: &'static str,
    pub description: &'static str,
    pub checked: bool,
    /// Notifications across all accounts with this user type
    pub count: usize,
    pub disabled: bool,
}

/// User type filter
pub struct UserTypeFilter;

impl UserTypeFilter {
    /// User types offered as filter options
    pub const TYPES: [UserType; 3] = [UserType::User, UserType::Bot, UserType::Organization];

    pub fn title(user_type: UserType) -> &'static str {
        match user_type {
            UserType::User => "User",
            UserType::Bot => "Bot",
            UserType::Organization => "Organization",
            UserType::Mannequin => "Mannequin",
            UserType::EnterpriseUserAccount => "Enterprise user",
        }
    }

    pub fn description(user_type: UserType) -> &'static str {
        match user_type {
            UserType::User => "Notifications from human users",
            UserType::Bot => "Notifications from bots and apps",
            UserType::Organization => "Notifications from organizations",
            UserType::Mannequin => "Placeholder users from imported repositories",
            UserType::EnterpriseUserAccount => "Enterprise managed users",
        }
    }

    /// Whether the filter currently narrows the notification list
    pub fn is_active(settings: &Settings) -> bool {
        settings.detailed_notifications && settings.has_user_type_filter()
    }

    pub fn count(notifications: &[AccountNotifications], user_type: UserType) -> usize {
        notifications
            .iter()
            .flat_map(|group| &group.notifications)
            .filter(|n| n.user_type() == Some(user_type))
            .count()
    }

    pub fn rows(settings: &Settings, notifications: &[AccountNotifications]) -> Vec<UserTypeRow> {
        Self::TYPES
            .into_iter()
            .map(|user_type| UserTypeRow {
                user_type,
                title: Self::title(user_type),
                description: Self::description(user_type),
                checked: settings.filter_user_types.contains(&user_type),
                count: Self::count(notifications, user_type),
                disabled: !settings.detailed_notifications,
            })
            .collect()
    }

    /// Settings update adding or removing a user type from the filter
    pub fn toggle(settings: &Settings, user_type: UserType, checked: bool) -> Setting {
        let mut types: Vec<UserType> = settings
            .filter_user_types
            .iter()
            .copied()
            .filter(|t| *t != user_type)
            .collect();
        if checked {
            types.push(user_type);
        }
        Setting::FilterUserTypes(types)
    }

    pub fn matches(settings: &Settings, notification: &Notification) -> bool {
        if !Self::is_active(settings) {
            return true;
        }
        notification
            .user_type()
            .is_some_and(|t| settings.filter_user_types.contains(&t))
    }
}

/// Apply the user type filter to every account's notifications
pub fn filter_notifications(
    settings: &Settings,
    notifications: &[AccountNotifications],
) -> Vec<AccountNotifications> {
    notifications
        .iter()
        .map(|group| AccountNotifications {
            account: group.account.clone(),
            notifications: group
                .notifications
                .iter()
                .filter(|n| UserTypeFilter::matches(settings, n))
                .cloned()
                .collect(),
            error: group.error.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Account;

    fn sample() -> Vec<AccountNotifications> {
        vec![
            AccountNotifications::new(
                Account::new("octocat"),
                vec![
                    Notification::new("1", "Bump serde").with_subject_user("dependabot[bot]", UserType::Bot),
                    Notification::new("2", "Fix typo").with_subject_user("hubot", UserType::User),
                    Notification::new("3", "Release notes"),
                ],
            ),
            AccountNotifications::new(
                Account::enterprise("monalisa", "github.example.com"),
                vec![
                    Notification::new("4", "Org announcement")
                        .with_subject_user("github", UserType::Organization),
                    Notification::new("5", "Renovate").with_subject_user("renovate[bot]", UserType::Bot),
                ],
            ),
        ]
    }

    #[test]
    fn test_rows_count_across_accounts() {
        let rows = UserTypeFilter::rows(&Settings::default(), &sample());
        let counts: Vec<(UserType, usize)> = rows.iter().map(|r| (r.user_type, r.count)).collect();
        assert_eq!(
            counts,
            vec![
                (UserType::User, 1),
                (UserType::Bot, 2),
                (UserType::Organization, 1)
            ]
        );
        assert!(rows.iter().all(|r| !r.checked && !r.disabled));
    }

    #[test]
    fn test_rows_disabled_without_details() {
        let settings = Settings {
            detailed_notifications: false,
            ..Settings::default()
        };
        let rows = UserTypeFilter::rows(&settings, &sample());
        assert!(rows.iter().all(|r| r.disabled));
    }

    #[test]
    fn test_toggle_adds_and_removes() {
        let settings = Settings::default();
        let setting = UserTypeFilter::toggle(&settings, UserType::Bot, true);
        assert_eq!(setting, Setting::FilterUserTypes(vec![UserType::Bot]));

        let settings = settings.with(setting);
        // Checking twice does not duplicate
        let setting = UserTypeFilter::toggle(&settings, UserType::Bot, true);
        assert_eq!(setting, Setting::FilterUserTypes(vec![UserType::Bot]));

        let setting = UserTypeFilter::toggle(&settings, UserType::Bot, false);
        assert_eq!(setting, Setting::FilterUserTypes(vec![]));
    }

    #[test]
    fn test_filter_keeps_matching_types() {
        let settings = Settings::default().with(Setting::FilterUserTypes(vec![UserType::Bot]));
        let filtered = filter_notifications(&settings, &sample());

        let ids: Vec<&str> = filtered
            .iter()
            .flat_map(|g| &g.notifications)
            .map(|n| n.id.as_str())
            .collect();
        assert_eq!(ids, vec!["1", "5"]);
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_filter_inert_without_details() {
        let settings = Settings {
            detailed_notifications: false,
            filter_user_types: vec![UserType::Bot],
            ..Settings::default()
        };
        assert!(!UserTypeFilter::is_active(&settings));

        let total: usize = filter_notifications(&settings, &sample())
            .iter()
            .map(|g| g.notifications.len())
            .sum();
        assert_eq!(total, 5);
    }

    #[test]
    fn test_filter_without_selection_keeps_all() {
        let total: usize = filter_notifications(&Settings::default(), &sample())
            .iter()
            .map(|g| g.notifications.len())
            .sum();
        assert_eq!(total, 5);
    }
}
