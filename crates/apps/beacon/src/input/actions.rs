//! GPUI action definitions for keyboard shortcuts

use gpui::actions;

// Zoom actions (settings screen)
actions!(
    beacon,
    [
        ZoomIn,    // Cmd = - zoom in one step
        ZoomOut,   // Cmd - - zoom out one step
        ResetZoom, // Cmd 0 - back to 100%
    ]
);
