//! Notification model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Account;

/// GitHub actor type of a notification's subject author
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserType {
    User,
    Bot,
    Organization,
    Mannequin,
    EnterpriseUserAccount,
}

impl UserType {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::User => "User",
            UserType::Bot => "Bot",
            UserType::Organization => "Organization",
            UserType::Mannequin => "Mannequin",
            UserType::EnterpriseUserAccount => "EnterpriseUserAccount",
        }
    }
}

/// Author or last commenter of a notification subject
///
/// Only known when detailed notifications are enabled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectUser {
    pub login: String,
    #[serde(rename = "type")]
    pub user_type: UserType,
}

/// Counts shown as metric pills on a notification row
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NotificationMetrics {
    pub linked_issues: u32,
    pub reviews: u32,
    pub comments: u32,
    pub labels: Vec<String>,
    pub milestone: Option<String>,
}

impl NotificationMetrics {
    /// Pill texts in display order, skipping empty metrics
    pub fn pills(&self) -> Vec<String> {
        let mut pills = Vec::new();
        for (count, noun) in [
            (self.linked_issues, "linked issue"),
            (self.reviews, "review"),
            (self.comments, "comment"),
        ] {
            match count {
                0 => {}
                1 => pills.push(format!("1 {}", noun)),
                n => pills.push(format!("{} {}s", n, noun)),
            }
        }
        pills.extend(self.labels.iter().cloned());
        pills.extend(self.milestone.iter().cloned());
        pills
    }
}

/// A single GitHub notification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub title: String,
    /// Reason GitHub delivered the notification (e.g. "mention", "review_requested")
    pub reason: String,
    pub updated_at: DateTime<Utc>,
    pub unread: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject_user: Option<SubjectUser>,
    /// Issue, pull request or discussion number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<u32>,
    #[serde(default)]
    pub metrics: NotificationMetrics,
}

impl Notification {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            reason: "subscribed".to_string(),
            updated_at: Utc::now(),
            unread: true,
            subject_user: None,
            number: None,
            metrics: NotificationMetrics::default(),
        }
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = reason.into();
        self
    }

    pub fn with_subject_user(mut self, login: impl Into<String>, user_type: UserType) -> Self {
        self.subject_user = Some(SubjectUser {
            login: login.into(),
            user_type,
        });
        self
    }

    pub fn with_number(mut self, number: u32) -> Self {
        self.number = Some(number);
        self
    }

    pub fn with_metrics(mut self, metrics: NotificationMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    /// Subject number as GitHub shows it, e.g. "#42"
    pub fn number_label(&self) -> Option<String> {
        self.number.map(|n| format!("#{}", n))
    }

    pub fn with_updated_at(mut self, updated_at: DateTime<Utc>) -> Self {
        self.updated_at = updated_at;
        self
    }

    pub fn user_type(&self) -> Option<UserType> {
        self.subject_user.as_ref().map(|user| user.user_type)
    }
}

/// Notifications fetched for one account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountNotifications {
    pub account: Account,
    pub notifications: Vec<Notification>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AccountNotifications {
    pub fn new(account: Account, notifications: Vec<Notification>) -> Self {
        Self {
            account,
            notifications,
            error: None,
        }
    }

    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| n.unread).count()
    }
}
