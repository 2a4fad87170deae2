//! Integration tests for the notifications crate
//!
//! These tests drive the settings screen logic end to end: store, zoom
//! controller, appearance bindings and the user type filter.

use notifications::{
    Account, AccountNotifications, AppConfig, AppearanceBinding, AppearanceField, AuthState,
    InMemorySettingsStore, Notification, Setting, Settings, SettingsStore, UserType,
    UserTypeFilter, ZoomController, ZoomSurface, filter_notifications, percentage_to_level,
};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Platform zoom stand-in that behaves like a window: setting the level
/// counts as a resize the caller must report.
struct TestWindow {
    level: f64,
    commands: usize,
}

impl TestWindow {
    fn new() -> Self {
        Self {
            level: 0.0,
            commands: 0,
        }
    }
}

impl ZoomSurface for TestWindow {
    fn zoom_level(&self) -> f64 {
        self.level
    }

    fn set_zoom_level(&mut self, level: f64) {
        self.level = level;
        self.commands += 1;
    }
}

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

fn make_notifications() -> Vec<AccountNotifications> {
    vec![AccountNotifications::new(
        Account::new("octocat"),
        vec![
            Notification::new("1", "Bump tokio").with_subject_user("dependabot[bot]", UserType::Bot),
            Notification::new("2", "Review requested")
                .with_reason("review_requested")
                .with_subject_user("monalisa", UserType::User),
            Notification::new("3", "Security advisory")
                .with_subject_user("github", UserType::Organization),
        ],
    )]
}

#[test]
fn test_zoom_buttons_sync_through_resize() {
    let store = Arc::new(InMemorySettingsStore::new());
    let mut window = TestWindow::new();
    let config = AppConfig::default();
    let mut controller = ZoomController::new(config.zoom_config(), store.clone(), &window);
    let start = Instant::now();

    // Two quick zoom-in presses: only the first lands before the display updates
    assert!(controller.increase_zoom(&mut window));
    controller.on_resize(start);
    assert!(controller.increase_zoom(&mut window));
    let deadline = controller.on_resize(start + ms(40));

    assert_eq!(controller.on_timer(start + ms(200), &window), None);
    assert_eq!(controller.on_timer(deadline, &window), Some(110));
    assert_eq!(window.commands, 2);
    assert_eq!(store.settings().unwrap().zoom_percentage, 110);

    // Next press starts from the committed percentage
    assert!(controller.increase_zoom(&mut window));
    let deadline = controller.on_resize(start + ms(1000));
    assert_eq!(controller.on_timer(deadline, &window), Some(120));

    // At the bound zoom-out is a no-op
    assert!(!controller.decrease_zoom(&mut window));
    assert_eq!(window.commands, 3);

    controller.reset_zoom(&mut window);
    let deadline = controller.on_resize(start + ms(2000));
    assert_eq!(controller.on_timer(deadline, &window), Some(100));
    assert_eq!(store.write_count(Setting::ZOOM_PERCENTAGE), 3);
}

#[test]
fn test_resize_burst_writes_once() {
    let store = Arc::new(InMemorySettingsStore::new());
    let mut window = TestWindow::new();
    let mut controller = ZoomController::new(Default::default(), store.clone(), &window);
    let start = Instant::now();

    let deadline = [0, 50, 100]
        .into_iter()
        .map(|offset| controller.on_resize(start + ms(offset)))
        .last()
        .unwrap();
    assert_eq!(deadline, start + ms(300));

    window.set_zoom_level(percentage_to_level(90));
    for fire_at in [200, 250, 300, 350] {
        controller.on_timer(start + ms(fire_at), &window);
    }

    assert_eq!(store.write_count(Setting::ZOOM_PERCENTAGE), 1);
    assert_eq!(controller.displayed_percentage(), 90);
}

#[test]
fn test_appearance_controls_write_through_store() {
    let store = InMemorySettingsStore::with_settings(Settings {
        detailed_notifications: false,
        ..Settings::default()
    });
    let auth = AuthState::new(vec![Account::new("octocat")]);

    // Show number is ignored while detailed notifications are off
    let settings = store.settings().unwrap();
    let binding = AppearanceBinding::new(&settings, &auth);
    assert!(binding.toggle(AppearanceField::ShowNumber, false).is_none());

    let setting = binding
        .toggle(AppearanceField::DetailedNotifications, true)
        .unwrap();
    store.update_setting(setting).unwrap();

    let settings = store.settings().unwrap();
    let binding = AppearanceBinding::new(&settings, &auth);
    let state = binding.checkbox(AppearanceField::ShowNumber);
    assert!(state.checked);
    assert!(!state.disabled);

    let setting = binding.toggle(AppearanceField::ShowNumber, false).unwrap();
    store.update_setting(setting).unwrap();
    assert!(!store.settings().unwrap().show_number);
}

#[test]
fn test_user_type_filter_flow() {
    let store = InMemorySettingsStore::new();
    let notifications = make_notifications();

    let settings = store.settings().unwrap();
    store
        .update_setting(UserTypeFilter::toggle(&settings, UserType::User, true))
        .unwrap();
    let settings = store.settings().unwrap();
    store
        .update_setting(UserTypeFilter::toggle(&settings, UserType::Organization, true))
        .unwrap();

    let settings = store.settings().unwrap();
    let rows = UserTypeFilter::rows(&settings, &notifications);
    let checked: Vec<UserType> = rows.iter().filter(|r| r.checked).map(|r| r.user_type).collect();
    assert_eq!(checked, vec![UserType::User, UserType::Organization]);

    let visible = filter_notifications(&settings, &notifications);
    let titles: Vec<&str> = visible[0]
        .notifications
        .iter()
        .map(|n| n.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Review requested", "Security advisory"]);
}

#[test]
fn test_untyped_updates() {
    let store = InMemorySettingsStore::new();
    let setting = Setting::from_key_value("zoomPercentage", &serde_json::json!(80)).unwrap();
    store.update_setting(setting).unwrap();
    assert_eq!(store.settings().unwrap().zoom_percentage, 80);

    assert!(Setting::from_key_value("zoom", &serde_json::json!(80)).is_err());
}
