//! GPUI views for Beacon

mod appearance;
mod user_type_filter;

pub use appearance::{AppearanceSettingsView, SettingsChanged};
pub use user_type_filter::UserTypeFilterView;
