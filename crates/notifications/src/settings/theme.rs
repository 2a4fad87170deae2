//! Theme choices offered in the appearance settings

use serde::{Deserialize, Serialize};

/// Colour theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Theme {
    #[default]
    System,
    Light,
    LightHighContrast,
    LightColorblind,
    LightTritanopia,
    Dark,
    DarkHighContrast,
    DarkColorblind,
    DarkTritanopia,
    DarkDimmed,
}

/// Option group a theme is listed under
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeGroup {
    System,
    Light,
    Dark,
}

impl ThemeGroup {
    pub fn label(&self) -> &'static str {
        match self {
            ThemeGroup::System => "System",
            ThemeGroup::Light => "Light",
            ThemeGroup::Dark => "Dark",
        }
    }
}

impl Theme {
    pub const ALL: [Theme; 10] = [
        Theme::System,
        Theme::Light,
        Theme::LightHighContrast,
        Theme::LightColorblind,
        Theme::LightTritanopia,
        Theme::Dark,
        Theme::DarkHighContrast,
        Theme::DarkColorblind,
        Theme::DarkTritanopia,
        Theme::DarkDimmed,
    ];

    /// Display label used in the theme select
    pub fn label(&self) -> &'static str {
        match self {
            Theme::System => "System",
            Theme::Light => "Light default",
            Theme::LightHighContrast => "Light high contrast",
            Theme::LightColorblind => "Light Protanopia & Deuteranopia",
            Theme::LightTritanopia => "Light Tritanopia",
            Theme::Dark => "Dark default",
            Theme::DarkHighContrast => "Dark high contrast",
            Theme::DarkColorblind => "Dark Protanopia & Deuteranopia",
            Theme::DarkTritanopia => "Dark Tritanopia",
            Theme::DarkDimmed => "Dark dimmed",
        }
    }

    pub fn group(&self) -> ThemeGroup {
        match self {
            Theme::System => ThemeGroup::System,
            Theme::Light
            | Theme::LightHighContrast
            | Theme::LightColorblind
            | Theme::LightTritanopia => ThemeGroup::Light,
            Theme::Dark
            | Theme::DarkHighContrast
            | Theme::DarkColorblind
            | Theme::DarkTritanopia
            | Theme::DarkDimmed => ThemeGroup::Dark,
        }
    }

    /// Whether the theme uses a dark palette. `None` defers to the OS appearance.
    pub fn is_dark(&self) -> Option<bool> {
        match self.group() {
            ThemeGroup::System => None,
            ThemeGroup::Light => Some(false),
            ThemeGroup::Dark => Some(true),
        }
    }

    /// Themes grouped for display, in select order
    pub fn groups() -> Vec<(ThemeGroup, Vec<Theme>)> {
        [ThemeGroup::System, ThemeGroup::Light, ThemeGroup::Dark]
            .into_iter()
            .map(|group| {
                let themes = Self::ALL
                    .into_iter()
                    .filter(|theme| theme.group() == group)
                    .collect();
                (group, themes)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groups_cover_every_theme_once() {
        let groups = Theme::groups();
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].1, vec![Theme::System]);
        assert_eq!(groups[1].1.len(), 4);
        assert_eq!(groups[2].1.len(), 5);

        let total: usize = groups.iter().map(|(_, themes)| themes.len()).sum();
        assert_eq!(total, Theme::ALL.len());
    }

    #[test]
    fn test_is_dark() {
        assert_eq!(Theme::System.is_dark(), None);
        assert_eq!(Theme::LightTritanopia.is_dark(), Some(false));
        assert_eq!(Theme::DarkDimmed.is_dark(), Some(true));
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Theme::DarkHighContrast).unwrap();
        assert_eq!(json, "\"DARK_HIGH_CONTRAST\"");
        let theme: Theme = serde_json::from_str("\"LIGHT_COLORBLIND\"").unwrap();
        assert_eq!(theme, Theme::LightColorblind);
    }
}
