//! Reusable UI components for Beacon

mod notification_item;
mod section_header;

pub use notification_item::NotificationItem;
pub use section_header::SectionHeader;
