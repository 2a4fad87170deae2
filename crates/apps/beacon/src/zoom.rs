//! Window zoom adapter
//!
//! GPUI sizes text and rem-based layout from the window rem size, so the zoom
//! level maps onto it exponentially: `rem = BASE_REM_SIZE * 2^level`.

use gpui::{Window, px};
use log::warn;
use notifications::ZoomSurface;

/// GPUI's default rem size, which is zoom level 0
pub const BASE_REM_SIZE: f32 = 16.0;

/// Levels outside this range would make the window unusable
const MIN_LEVEL: f64 = -3.0;
const MAX_LEVEL: f64 = 3.0;

pub fn rem_for_level(level: f64) -> f32 {
    BASE_REM_SIZE * level.clamp(MIN_LEVEL, MAX_LEVEL).exp2() as f32
}

pub fn level_for_rem(rem: f32) -> f64 {
    (f64::from(rem) / f64::from(BASE_REM_SIZE)).log2()
}

/// Zoom surface backed by a window's rem size
pub struct WindowZoom<'a> {
    window: &'a mut Window,
}

impl<'a> WindowZoom<'a> {
    pub fn new(window: &'a mut Window) -> Self {
        Self { window }
    }
}

impl ZoomSurface for WindowZoom<'_> {
    fn zoom_level(&self) -> f64 {
        level_for_rem(f32::from(self.window.rem_size()))
    }

    fn set_zoom_level(&mut self, level: f64) {
        // Zooming out from 0% asks for -inf
        if !level.is_finite() {
            warn!("Ignoring non-finite zoom level {}", level);
            return;
        }

        self.window.set_rem_size(px(rem_for_level(level)));
        self.window.refresh();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notifications::{level_to_percentage, percentage_to_level};

    #[test]
    fn test_level_zero_is_base_rem() {
        assert_eq!(rem_for_level(0.0), BASE_REM_SIZE);
        assert_eq!(level_for_rem(BASE_REM_SIZE), 0.0);
    }

    #[test]
    fn test_percentage_survives_rem_roundtrip() {
        for percentage in [50, 80, 90, 100, 110, 120, 200] {
            let rem = rem_for_level(percentage_to_level(percentage));
            assert_eq!(level_to_percentage(level_for_rem(rem)), percentage);
        }
    }

    #[test]
    fn test_levels_are_clamped() {
        assert_eq!(rem_for_level(10.0), BASE_REM_SIZE * 8.0);
        assert_eq!(rem_for_level(-10.0), BASE_REM_SIZE / 8.0);
    }
}
