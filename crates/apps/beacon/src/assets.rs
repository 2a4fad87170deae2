//! Custom assets for Beacon
//!
//! Extends gpui-component with the Lucide icons used by the settings screen.

use gpui::{AssetSource, SharedString};
use rust_embed::RustEmbed;

/// Custom icons embedded from the assets/icons directory
#[derive(RustEmbed)]
#[folder = "assets/icons"]
#[include = "*.svg"]
struct CustomIcons;

/// Asset source that serves custom icons first, then gpui-component-assets
pub struct BeaconAssets;

impl AssetSource for BeaconAssets {
    fn load(&self, path: &str) -> gpui::Result<Option<std::borrow::Cow<'static, [u8]>>> {
        if let Some(icon_name) = path.strip_prefix("icons/")
            && let Some(file) = CustomIcons::get(icon_name)
        {
            return Ok(Some(file.data));
        }

        gpui_component_assets::Assets.load(path)
    }

    fn list(&self, path: &str) -> gpui::Result<Vec<SharedString>> {
        let mut results = Vec::new();

        if path.is_empty() || path == "icons" || path == "icons/" {
            for file in CustomIcons::iter() {
                results.push(format!("icons/{}", file).into());
            }
        }

        results.extend(gpui_component_assets::Assets.list(path)?);

        Ok(results)
    }
}

/// Beacon icon names implementing IconNamed
pub mod icons {
    use gpui::SharedString;
    use gpui_component::IconNamed;

    macro_rules! icon {
        ($name:ident, $file:literal) => {
            #[derive(Clone, Copy)]
            pub struct $name;

            impl IconNamed for $name {
                fn path(self) -> SharedString {
                    concat!("icons/", $file).into()
                }
            }
        };
    }

    icon!(Bell, "bell.svg");
    icon!(Filter, "filter.svg");
    icon!(Paintbrush, "paintbrush.svg");
    icon!(ResetZoom, "rotate-ccw.svg");
    icon!(ZoomIn, "zoom-in.svg");
    icon!(ZoomOut, "zoom-out.svg");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_icons_served() {
        for name in ["bell", "filter", "paintbrush", "rotate-ccw", "zoom-in", "zoom-out"] {
            let path = format!("icons/{}.svg", name);
            let data = BeaconAssets.load(&path).unwrap();
            assert!(data.is_some(), "missing {}", path);
        }
    }

    #[test]
    fn test_lists_custom_icons() {
        let listed = BeaconAssets.list("icons").unwrap();
        assert!(listed.iter().any(|p| p.as_ref() == "icons/zoom-in.svg"));
    }
}
