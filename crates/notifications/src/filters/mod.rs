//! Notification filters

mod user_type;

pub use user_type::{UserTypeFilter, UserTypeRow, filter_notifications};
