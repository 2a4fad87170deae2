//! Beacon - GitHub notifications client
//!
//! This is the main entry point for the Beacon application.

use gpui::prelude::*;
use gpui::{Application, WindowOptions, px, size};
use gpui_component::TitleBar;
use log::{error, info, warn};
use notifications::AppConfig;

mod app;
mod assets;
mod components;
mod input;
mod views;
mod zoom;

use app::BeaconApp;
use assets::BeaconAssets;

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    // Bootstrap config directory
    if let Err(e) = config::init() {
        error!("Failed to initialize config directory: {}", e);
    }

    let app_config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            warn!("Failed to load config: {:#}, using defaults", e);
            if let Some(path) = AppConfig::default_config_path() {
                warn!("Expected config at: {}", path.display());
            }
            AppConfig::default()
        }
    };

    Application::new().with_assets(BeaconAssets).run(move |cx| {
        gpui_component::init(cx);
        cx.bind_keys(input::bindings());

        let window_options = WindowOptions {
            window_bounds: Some(gpui::WindowBounds::Windowed(gpui::Bounds {
                origin: gpui::Point::default(),
                size: size(px(960.), px(640.)),
            })),
            titlebar: Some(TitleBar::title_bar_options()),
            ..Default::default()
        };

        cx.open_window(window_options, |window, cx| {
            cx.new(|cx| BeaconApp::new(app_config, window, cx))
        })
        .expect("Failed to open window");

        info!("Beacon started successfully");
    });
}
