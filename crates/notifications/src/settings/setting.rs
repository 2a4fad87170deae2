//! Single-field settings updates

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::Theme;
use crate::models::UserType;

/// Errors raised when parsing a `key`/`value` settings update
#[derive(Debug, thiserror::Error)]
pub enum SettingError {
    #[error("unknown setting: {0}")]
    UnknownKey(String),
    #[error("invalid value for setting '{key}': {source}")]
    InvalidValue {
        key: &'static str,
        source: serde_json::Error,
    },
}

/// One named settings field together with its new value
#[derive(Debug, Clone, PartialEq)]
pub enum Setting {
    Theme(Theme),
    ZoomPercentage(i32),
    DetailedNotifications(bool),
    ShowPills(bool),
    ShowNumber(bool),
    ShowAccountHeader(bool),
    WrapNotificationTitle(bool),
    FilterUserTypes(Vec<UserType>),
}

impl Setting {
    pub const THEME: &'static str = "theme";
    pub const ZOOM_PERCENTAGE: &'static str = "zoomPercentage";
    pub const DETAILED_NOTIFICATIONS: &'static str = "detailedNotifications";
    pub const SHOW_PILLS: &'static str = "showPills";
    pub const SHOW_NUMBER: &'static str = "showNumber";
    pub const SHOW_ACCOUNT_HEADER: &'static str = "showAccountHeader";
    pub const WRAP_NOTIFICATION_TITLE: &'static str = "wrapNotificationTitle";
    pub const FILTER_USER_TYPES: &'static str = "filterUserTypes";

    /// Settings key, as it appears in the serialized settings record
    pub fn key(&self) -> &'static str {
        match self {
            Setting::Theme(_) => Self::THEME,
            Setting::ZoomPercentage(_) => Self::ZOOM_PERCENTAGE,
            Setting::DetailedNotifications(_) => Self::DETAILED_NOTIFICATIONS,
            Setting::ShowPills(_) => Self::SHOW_PILLS,
            Setting::ShowNumber(_) => Self::SHOW_NUMBER,
            Setting::ShowAccountHeader(_) => Self::SHOW_ACCOUNT_HEADER,
            Setting::WrapNotificationTitle(_) => Self::WRAP_NOTIFICATION_TITLE,
            Setting::FilterUserTypes(_) => Self::FILTER_USER_TYPES,
        }
    }

    /// Value as JSON
    pub fn value(&self) -> Value {
        match self {
            Setting::Theme(theme) => serde_json::to_value(theme).unwrap_or(Value::Null),
            Setting::ZoomPercentage(percentage) => Value::from(*percentage),
            Setting::DetailedNotifications(value)
            | Setting::ShowPills(value)
            | Setting::ShowNumber(value)
            | Setting::ShowAccountHeader(value)
            | Setting::WrapNotificationTitle(value) => Value::Bool(*value),
            Setting::FilterUserTypes(types) => {
                Value::Array(types.iter().map(|t| Value::from(t.as_str())).collect())
            }
        }
    }

    /// Parse an untyped `updateSetting(key, value)` call
    pub fn from_key_value(key: &str, value: &Value) -> Result<Self, SettingError> {
        let setting = match key {
            Self::THEME => Setting::Theme(parse(Self::THEME, value)?),
            Self::ZOOM_PERCENTAGE => Setting::ZoomPercentage(parse(Self::ZOOM_PERCENTAGE, value)?),
            Self::DETAILED_NOTIFICATIONS => {
                Setting::DetailedNotifications(parse(Self::DETAILED_NOTIFICATIONS, value)?)
            }
            Self::SHOW_PILLS => Setting::ShowPills(parse(Self::SHOW_PILLS, value)?),
            Self::SHOW_NUMBER => Setting::ShowNumber(parse(Self::SHOW_NUMBER, value)?),
            Self::SHOW_ACCOUNT_HEADER => {
                Setting::ShowAccountHeader(parse(Self::SHOW_ACCOUNT_HEADER, value)?)
            }
            Self::WRAP_NOTIFICATION_TITLE => {
                Setting::WrapNotificationTitle(parse(Self::WRAP_NOTIFICATION_TITLE, value)?)
            }
            Self::FILTER_USER_TYPES => {
                Setting::FilterUserTypes(parse(Self::FILTER_USER_TYPES, value)?)
            }
            other => return Err(SettingError::UnknownKey(other.to_string())),
        };
        Ok(setting)
    }
}

fn parse<T: DeserializeOwned>(key: &'static str, value: &Value) -> Result<T, SettingError> {
    serde_json::from_value(value.clone()).map_err(|source| SettingError::InvalidValue { key, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_zoom_key() {
        assert_eq!(Setting::ZoomPercentage(110).key(), "zoomPercentage");
        assert_eq!(Setting::ZoomPercentage(110).value(), json!(110));
    }

    #[test]
    fn test_from_key_value() {
        let setting = Setting::from_key_value("showNumber", &json!(false)).unwrap();
        assert_eq!(setting, Setting::ShowNumber(false));

        let setting = Setting::from_key_value("theme", &json!("DARK_TRITANOPIA")).unwrap();
        assert_eq!(setting, Setting::Theme(Theme::DarkTritanopia));

        let setting = Setting::from_key_value("filterUserTypes", &json!(["Bot", "User"])).unwrap();
        assert_eq!(setting, Setting::FilterUserTypes(vec![UserType::Bot, UserType::User]));
    }

    #[test]
    fn test_value_parses_back() {
        let original = Setting::FilterUserTypes(vec![UserType::Organization]);
        let parsed = Setting::from_key_value(original.key(), &original.value()).unwrap();
        assert_eq!(parsed, original);
    }

    #[test]
    fn test_unknown_key() {
        let err = Setting::from_key_value("fontSize", &json!(14)).unwrap_err();
        assert!(matches!(err, SettingError::UnknownKey(ref key) if key == "fontSize"));
    }

    #[test]
    fn test_invalid_value() {
        let err = Setting::from_key_value("zoomPercentage", &json!("big")).unwrap_err();
        assert!(matches!(
            err,
            SettingError::InvalidValue {
                key: "zoomPercentage",
                ..
            }
        ));
        assert!(err.to_string().starts_with("invalid value for setting 'zoomPercentage'"));
    }
}
