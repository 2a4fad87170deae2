//! Notification row - title, number, reason, subject user and metric pills

use gpui::prelude::*;
use gpui::*;
use gpui_component::ActiveTheme;
use notifications::{Notification, Settings};

#[derive(IntoElement)]
pub struct NotificationItem {
    notification: Notification,
    /// Wrap long titles instead of truncating them
    wrap_title: bool,
    /// Show the subject user, which is only known in detailed mode
    detailed: bool,
    show_number: bool,
    show_pills: bool,
}

impl NotificationItem {
    pub fn new(notification: Notification, settings: &Settings) -> Self {
        Self {
            notification,
            wrap_title: settings.wrap_notification_title,
            detailed: settings.detailed_notifications,
            show_number: settings.shows_number(),
            show_pills: settings.show_pills,
        }
    }

    fn format_date(&self) -> String {
        use chrono::{Local, Utc};
        let local = self.notification.updated_at.with_timezone(&Local);
        let now = Utc::now().with_timezone(&Local);

        if local.date_naive() == now.date_naive() {
            local.format("%H:%M").to_string()
        } else if (now - local).num_days() < 7 {
            local.format("%a").to_string()
        } else {
            local.format("%b %d").to_string()
        }
    }

    fn subtitle(&self) -> String {
        let mut reason = self.notification.reason.replace('_', " ");
        if self.show_number
            && let Some(number) = self.notification.number_label()
        {
            reason = format!("{} · {}", number, reason);
        }
        match (&self.notification.subject_user, self.detailed) {
            (Some(user), true) => format!("{} · {} ({})", reason, user.login, user.user_type.as_str()),
            _ => reason,
        }
    }
}

impl RenderOnce for NotificationItem {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let theme = cx.theme();

        let date_str = self.format_date();
        let subtitle = self.subtitle();
        let unread = self.notification.unread;
        let title = self.notification.title.clone();
        let pills = if self.show_pills {
            self.notification.metrics.pills()
        } else {
            Vec::new()
        };

        div()
            .w_full()
            .px_3()
            .py_2()
            .border_b_1()
            .border_color(theme.border)
            .hover(|style| style.bg(theme.list_hover))
            .flex()
            .justify_between()
            .items_center()
            .gap_3()
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap_1()
                    .overflow_hidden()
                    .flex_1()
                    .child(
                        div()
                            .text_sm()
                            .when(unread, |el| el.font_weight(FontWeight::MEDIUM))
                            .text_color(theme.foreground)
                            .when(!self.wrap_title, |el| el.text_ellipsis())
                            .child(title),
                    )
                    .when(!subtitle.is_empty(), |el| {
                        el.child(
                            div()
                                .text_xs()
                                .text_color(theme.muted_foreground)
                                .text_ellipsis()
                                .child(subtitle),
                        )
                    })
                    .when(!pills.is_empty(), |el| {
                        el.child(div().flex().flex_wrap().gap_1().children(pills.into_iter().map(
                            |pill| {
                                div()
                                    .px_2()
                                    .rounded_md()
                                    .bg(theme.muted)
                                    .text_xs()
                                    .text_color(theme.muted_foreground)
                                    .child(pill)
                            },
                        )))
                    }),
            )
            .child(
                div()
                    .flex_shrink_0()
                    .text_xs()
                    .text_color(theme.muted_foreground)
                    .child(date_str),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notifications::{NotificationMetrics, Setting, UserType};
    use std::prelude::v1::test;

    fn sample() -> Notification {
        Notification::new("1", "Fix zoom sync")
            .with_reason("review_requested")
            .with_subject_user("monalisa", UserType::User)
            .with_number(42)
            .with_metrics(NotificationMetrics {
                comments: 2,
                ..Default::default()
            })
    }

    #[test]
    fn test_subtitle_shows_number_when_enabled() {
        let item = NotificationItem::new(sample(), &Settings::default());
        assert_eq!(item.subtitle(), "#42 · review requested · monalisa (User)");
        assert!(item.show_pills);
    }

    #[test]
    fn test_number_hidden_without_detailed_notifications() {
        let settings = Settings::default().with(Setting::DetailedNotifications(false));
        let item = NotificationItem::new(sample(), &settings);
        assert_eq!(item.subtitle(), "review requested");
    }

    #[test]
    fn test_number_hidden_when_toggled_off() {
        let settings = Settings::default()
            .with(Setting::ShowNumber(false))
            .with(Setting::ShowPills(false));
        let item = NotificationItem::new(sample(), &settings);
        assert_eq!(item.subtitle(), "review requested · monalisa (User)");
        assert!(!item.show_pills);
    }
}
