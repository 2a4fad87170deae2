//! Zoom controller for the appearance settings
//!
//! Zoom buttons command the platform directly. The resulting percentage is
//! only read back, displayed and persisted once resizing has settled.

use log::{debug, error, info};
use std::sync::Arc;
use std::time::{Duration, Instant};

use super::{ResizeDebounce, ZoomConfig, ZoomSurface, level_to_percentage, percentage_to_level};
use crate::settings::Setting;
use crate::storage::SettingsStore;

/// Keeps the displayed zoom percentage in step with the platform zoom level
///
/// One controller exists per live settings view. It owns its debounce state,
/// and [`ZoomController::teardown`] drops any pending commit.
pub struct ZoomController {
    config: ZoomConfig,
    store: Arc<dyn SettingsStore>,
    percentage: i32,
    debounce: ResizeDebounce,
}

impl ZoomController {
    /// Create a controller, reading the initial percentage from the surface
    pub fn new(
        config: ZoomConfig,
        store: Arc<dyn SettingsStore>,
        surface: &impl ZoomSurface,
    ) -> Self {
        Self {
            config,
            store,
            percentage: level_to_percentage(surface.zoom_level()),
            debounce: ResizeDebounce::new(config.debounce),
        }
    }

    /// Percentage currently shown to the user
    pub fn displayed_percentage(&self) -> i32 {
        self.percentage
    }

    /// Button label for the current percentage, e.g. "110%"
    pub fn label(&self) -> String {
        format!("{}%", self.percentage)
    }

    pub fn config(&self) -> ZoomConfig {
        self.config
    }

    pub fn debounce_delay(&self) -> Duration {
        self.debounce.delay()
    }

    pub fn pending_sync(&self) -> bool {
        self.debounce.is_pending()
    }

    /// Zoom in by one step. No-op unless the displayed percentage is positive.
    pub fn increase_zoom(&self, surface: &mut impl ZoomSurface) -> bool {
        if self.percentage <= 0 {
            return false;
        }
        let target = self.percentage.saturating_add(self.config.step);
        debug!("Zoom in: {}% -> {}%", self.percentage, target);
        surface.set_zoom_level(percentage_to_level(target));
        true
    }

    /// Zoom out by one step. No-op once the displayed percentage reaches the bound.
    pub fn decrease_zoom(&self, surface: &mut impl ZoomSurface) -> bool {
        if self.percentage >= self.config.max_percentage {
            return false;
        }
        let target = self.percentage.saturating_sub(self.config.step);
        debug!("Zoom out: {}% -> {}%", self.percentage, target);
        surface.set_zoom_level(percentage_to_level(target));
        true
    }

    /// Return to 100%
    pub fn reset_zoom(&self, surface: &mut impl ZoomSurface) {
        debug!("Zoom reset from {}%", self.percentage);
        surface.set_zoom_level(0.0);
    }

    /// Handle a window resize event
    ///
    /// Re-arms the debounce and returns the instant the host must call
    /// [`ZoomController::on_timer`] at.
    pub fn on_resize(&mut self, now: Instant) -> Instant {
        self.debounce.arm(now)
    }

    /// Debounce timer callback
    ///
    /// Commits only if no later resize re-armed the timer. The zoom level is
    /// read at fire time. Returns the committed percentage.
    pub fn on_timer(&mut self, now: Instant, surface: &impl ZoomSurface) -> Option<i32> {
        if !self.debounce.fire(now) {
            return None;
        }

        let percentage = level_to_percentage(surface.zoom_level());
        debug!("Resize settled, zoom is {}%", percentage);
        self.percentage = percentage;

        if let Err(e) = self.store.update_setting(Setting::ZoomPercentage(percentage)) {
            error!("Failed to save zoom percentage: {}", e);
        }
        Some(percentage)
    }

    /// Drop any pending commit when the owning view goes away
    pub fn teardown(&mut self) {
        if self.debounce.cancel() {
            info!("Discarded pending zoom sync on teardown");
        }
    }
}
