//! Keyboard shortcut definitions and hint text

use gpui::KeyBinding;

use super::actions::*;

/// Context the zoom shortcuts dispatch in
pub const SETTINGS_CONTEXT: &str = "AppearanceSettings";

/// A single keyboard shortcut for display
pub struct Shortcut {
    pub keys: &'static str,
    pub description: &'static str,
}

/// Returns all keybindings to register with GPUI
pub fn bindings() -> Vec<KeyBinding> {
    vec![
        KeyBinding::new("cmd-=", ZoomIn, Some(SETTINGS_CONTEXT)),
        KeyBinding::new("cmd-+", ZoomIn, Some(SETTINGS_CONTEXT)),
        KeyBinding::new("cmd--", ZoomOut, Some(SETTINGS_CONTEXT)),
        KeyBinding::new("cmd-0", ResetZoom, Some(SETTINGS_CONTEXT)),
    ]
}

/// Zoom shortcuts shown under the zoom controls
pub fn shortcuts() -> Vec<Shortcut> {
    vec![
        Shortcut {
            keys: "⌘ =",
            description: "Zoom in",
        },
        Shortcut {
            keys: "⌘ -",
            description: "Zoom out",
        },
        Shortcut {
            keys: "⌘ 0",
            description: "Reset zoom",
        },
    ]
}
