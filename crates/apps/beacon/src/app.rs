//! Main application state and root view

use chrono::{Duration, Utc};
use gpui::prelude::*;
use gpui::*;
use gpui_component::{ActiveTheme, Icon, Theme as UiTheme, ThemeMode};
use log::{error, info};
use notifications::{
    Account, AccountNotifications, AppConfig, AuthState, InMemorySettingsStore, Notification,
    NotificationMetrics, Settings, SettingsStore, Theme, UserType, ZoomSurface,
    filter_notifications, percentage_to_level,
};
use std::sync::Arc;

use crate::assets::icons;
use crate::components::NotificationItem;
use crate::views::{AppearanceSettingsView, SettingsChanged, UserTypeFilterView};
use crate::zoom::WindowZoom;

/// Main application state
pub struct BeaconApp {
    store: Arc<dyn SettingsStore>,
    auth: AuthState,
    notifications: Arc<Vec<AccountNotifications>>,
    appearance_view: Entity<AppearanceSettingsView>,
    filter_view: Entity<UserTypeFilterView>,
    /// Theme last pushed to gpui-component; re-applied when it differs
    applied_theme: Option<Theme>,
}

impl BeaconApp {
    pub fn new(config: AppConfig, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let store: Arc<dyn SettingsStore> =
            Arc::new(InMemorySettingsStore::with_settings(config.settings.clone()));
        let auth = demo_auth();
        let notifications = Arc::new(demo_notifications(&auth));

        // Start at the configured zoom before the controller reads the window
        WindowZoom::new(window)
            .set_zoom_level(percentage_to_level(config.settings.zoom_percentage));

        let appearance_view = cx.new(|cx| {
            AppearanceSettingsView::new(
                store.clone(),
                auth.clone(),
                config.zoom_config(),
                window,
                cx,
            )
        });
        let filter_view =
            cx.new(|_| UserTypeFilterView::new(store.clone(), notifications.clone()));

        cx.subscribe(&appearance_view, Self::handle_settings_changed)
            .detach();
        cx.subscribe(&filter_view, Self::handle_settings_changed)
            .detach();

        // System theme follows the OS appearance
        cx.observe_window_appearance(window, |this, _window, cx| {
            this.applied_theme = None;
            cx.notify();
        })
        .detach();

        appearance_view.update(cx, |view, cx| view.focus(window, cx));

        Self {
            store,
            auth,
            notifications,
            appearance_view,
            filter_view,
            applied_theme: None,
        }
    }

    /// Keep sibling views in step with a setting written by either one
    fn handle_settings_changed<V: 'static>(
        &mut self,
        _: Entity<V>,
        event: &SettingsChanged,
        cx: &mut Context<Self>,
    ) {
        info!("Setting changed: {}", event.0.key());
        self.appearance_view.update(cx, |_, cx| cx.notify());
        self.filter_view.update(cx, |_, cx| cx.notify());
        cx.notify();
    }

    fn apply_theme(&mut self, theme: Theme, window: &mut Window, cx: &mut Context<Self>) {
        if self.applied_theme == Some(theme) {
            return;
        }

        let mode = match theme.is_dark() {
            Some(true) => ThemeMode::Dark,
            Some(false) => ThemeMode::Light,
            None => ThemeMode::from(window.appearance()),
        };
        UiTheme::change(mode, Some(window), cx);
        self.applied_theme = Some(theme);
    }

    fn render_header(&self, cx: &mut Context<Self>) -> impl IntoElement + use<> {
        let theme = cx.theme();
        let unread: usize = self.notifications.iter().map(|g| g.unread_count()).sum();

        div()
            .w_full()
            .px_4()
            .py_3()
            .border_b_1()
            .border_color(theme.border)
            .flex()
            .justify_between()
            .items_center()
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_2()
                    .child(Icon::new(icons::Bell).text_color(theme.foreground))
                    .child(
                        div()
                            .text_lg()
                            .font_weight(FontWeight::BOLD)
                            .text_color(theme.foreground)
                            .child("Beacon"),
                    ),
            )
            .when(unread > 0, |el| {
                el.child(
                    div()
                        .px_2()
                        .py_px()
                        .bg(theme.primary)
                        .rounded_md()
                        .text_xs()
                        .text_color(theme.primary_foreground)
                        .child(format!("{}", unread)),
                )
            })
    }

    fn render_notifications(
        &self,
        settings: &Settings,
        cx: &mut Context<Self>,
    ) -> impl IntoElement + use<> {
        let theme = cx.theme();
        let show_account_header =
            settings.show_account_header || self.auth.has_multiple_accounts();
        let visible = filter_notifications(settings, &self.notifications);

        div()
            .flex()
            .flex_col()
            .children(visible.into_iter().map(|group| {
                let count = group.notifications.len();
                div()
                    .flex()
                    .flex_col()
                    .when(show_account_header, |el| {
                        el.child(
                            div()
                                .px_3()
                                .py_2()
                                .bg(theme.secondary)
                                .flex()
                                .justify_between()
                                .items_center()
                                .child(
                                    div()
                                        .text_sm()
                                        .font_weight(FontWeight::MEDIUM)
                                        .child(group.account.key()),
                                )
                                .child(
                                    div()
                                        .text_xs()
                                        .text_color(theme.muted_foreground)
                                        .child(format!("{}", count)),
                                ),
                        )
                    })
                    .children(group.notifications.into_iter().map(|notification| {
                        NotificationItem::new(notification, settings)
                    }))
            }))
    }
}

impl Render for BeaconApp {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let settings = match self.store.settings() {
            Ok(settings) => settings,
            Err(e) => {
                error!("Failed to read settings: {:#}", e);
                Settings::default()
            }
        };
        self.apply_theme(settings.theme, window, cx);

        let header = self.render_header(cx);
        let list = self.render_notifications(&settings, cx);

        let theme = cx.theme();
        let bg = theme.background;
        let fg = theme.foreground;
        let secondary_bg = theme.secondary;
        let border = theme.border;

        div()
            .flex()
            .flex_col()
            .size_full()
            .bg(bg)
            .text_color(fg)
            .child(header)
            .child(
                div()
                    .flex()
                    .flex_row()
                    .flex_1()
                    .overflow_hidden()
                    // Settings column
                    .child(
                        div()
                            .w(px(360.))
                            .h_full()
                            .p_4()
                            .flex()
                            .flex_col()
                            .gap_6()
                            .bg(secondary_bg)
                            .border_r_1()
                            .border_color(border)
                            .child(self.appearance_view.clone())
                            .child(self.filter_view.clone()),
                    )
                    // Notification list
                    .child(div().flex_1().h_full().overflow_hidden().child(list)),
            )
    }
}

fn demo_auth() -> AuthState {
    AuthState::new(vec![Account::new("octocat")])
}

/// Seed notifications so the filter has something to narrow
fn demo_notifications(auth: &AuthState) -> Vec<AccountNotifications> {
    let now = Utc::now();

    auth.accounts
        .iter()
        .map(|account| {
            AccountNotifications::new(
                account.clone(),
                vec![
                    Notification::new("1", "Bump tokio from 1.47.0 to 1.48.0")
                        .with_reason("subscribed")
                        .with_subject_user("dependabot[bot]", UserType::Bot)
                        .with_number(4521)
                        .with_metrics(NotificationMetrics {
                            labels: vec!["dependencies".to_string()],
                            ..Default::default()
                        })
                        .with_updated_at(now - Duration::minutes(5)),
                    Notification::new("2", "Fix flaky zoom sync test on Linux runners")
                        .with_reason("review_requested")
                        .with_subject_user("monalisa", UserType::User)
                        .with_number(4517)
                        .with_metrics(NotificationMetrics {
                            linked_issues: 1,
                            reviews: 2,
                            comments: 5,
                            milestone: Some("v2.5".to_string()),
                            ..Default::default()
                        })
                        .with_updated_at(now - Duration::hours(3)),
                    Notification::new("3", "Security advisory for an indirect dependency")
                        .with_reason("security_alert")
                        .with_subject_user("github", UserType::Organization)
                        .with_updated_at(now - Duration::days(2)),
                    Notification::new("4", "Release v2.4.0")
                        .with_reason("subscribed")
                        .with_subject_user("release-please[bot]", UserType::Bot)
                        .with_updated_at(now - Duration::days(9)),
                ],
            )
        })
        .collect()
}
