//! Domain models for accounts and notifications

mod account;
mod notification;

pub use account::{Account, AuthState, Platform};
pub use notification::{
    AccountNotifications, Notification, NotificationMetrics, SubjectUser, UserType,
};
