//! Window zoom: level/percentage conversion and debounced settings sync
//!
//! The platform exposes zoom as an exponential level where 0 renders at
//! 100% and each whole step doubles or halves the size. The settings screen
//! shows the equivalent percentage and writes it back to the settings store
//! once the window has settled after a resize.

mod controller;
mod debounce;

pub use controller::ZoomController;
pub use debounce::{DebounceState, ResizeDebounce};

use std::time::Duration;

/// Delay after the last resize event before the zoom percentage is committed
pub const RESIZE_DEBOUNCE: Duration = Duration::from_millis(200);

/// Percentage added or removed by one zoom button press
pub const ZOOM_STEP: i32 = 10;

/// Decrease guard bound
pub const MAX_ZOOM_PERCENTAGE: i32 = 120;

/// Platform zoom API
///
/// Calls are synchronous and take effect immediately. Levels outside what the
/// platform can render are clamped by the implementation.
pub trait ZoomSurface {
    fn zoom_level(&self) -> f64;

    fn set_zoom_level(&mut self, level: f64);
}

/// Tunables for [`ZoomController`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomConfig {
    pub debounce: Duration,
    pub step: i32,
    pub max_percentage: i32,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            debounce: RESIZE_DEBOUNCE,
            step: ZOOM_STEP,
            max_percentage: MAX_ZOOM_PERCENTAGE,
        }
    }
}

/// Convert a platform zoom level to a percentage: `round(100 * 2^level)`
pub fn level_to_percentage(level: f64) -> i32 {
    (100.0 * level.exp2()).round() as i32
}

/// Convert a percentage to a platform zoom level: `log2(percentage / 100)`
///
/// # Precondition
///
/// `percentage` must be positive. Zero yields negative infinity and negative
/// input yields NaN; callers guard against both before commanding the platform.
pub fn percentage_to_level(percentage: i32) -> f64 {
    (f64::from(percentage) / 100.0).log2()
}
