//! User type filter view
//!
//! One checkbox per filterable user type with the number of matching
//! notifications. Disabled unless detailed notifications are on.

use gpui::prelude::*;
use gpui::*;
use gpui_component::checkbox::Checkbox;
use gpui_component::{ActiveTheme, Disableable, Icon};
use log::error;
use notifications::{AccountNotifications, SettingsStore, UserType, UserTypeFilter, UserTypeRow};
use std::sync::Arc;

use super::SettingsChanged;
use crate::assets::icons;
use crate::components::SectionHeader;

impl EventEmitter<SettingsChanged> for UserTypeFilterView {}

pub struct UserTypeFilterView {
    store: Arc<dyn SettingsStore>,
    notifications: Arc<Vec<AccountNotifications>>,
}

impl UserTypeFilterView {
    pub fn new(store: Arc<dyn SettingsStore>, notifications: Arc<Vec<AccountNotifications>>) -> Self {
        Self {
            store,
            notifications,
        }
    }

    fn toggle(&mut self, user_type: UserType, checked: bool, cx: &mut Context<Self>) {
        let result = self.store.settings().and_then(|settings| {
            let setting = UserTypeFilter::toggle(&settings, user_type, checked);
            self.store.update_setting(setting.clone())?;
            Ok(setting)
        });

        match result {
            Ok(setting) => {
                cx.emit(SettingsChanged(setting));
                cx.notify();
            }
            Err(e) => error!("Failed to update user type filter: {:#}", e),
        }
    }

    fn render_row(&self, row: UserTypeRow, cx: &mut Context<Self>) -> impl IntoElement + use<> {
        let muted = cx.theme().muted_foreground;
        let user_type = row.user_type;

        div()
            .flex()
            .flex_col()
            .gap_0p5()
            .child(
                Checkbox::new(ElementId::Name(
                    format!("filter-user-type-{}", user_type.as_str()).into(),
                ))
                .label(format!("{} ({})", row.title, row.count))
                .checked(row.checked)
                .disabled(row.disabled)
                .on_click(cx.listener(move |view, checked: &bool, _window, cx| {
                    view.toggle(user_type, *checked, cx);
                })),
            )
            .child(div().pl_6().text_xs().text_color(muted).child(row.description))
    }
}

impl Render for UserTypeFilterView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let settings = match self.store.settings() {
            Ok(settings) => settings,
            Err(e) => {
                error!("Failed to read settings: {:#}", e);
                return div().child("Settings unavailable").into_any_element();
            }
        };
        let muted = cx.theme().muted_foreground;
        let rows: Vec<AnyElement> = UserTypeFilter::rows(&settings, &self.notifications)
            .into_iter()
            .map(|row| self.render_row(row, cx).into_any_element())
            .collect();

        div()
            .flex()
            .flex_col()
            .gap_3()
            .child(SectionHeader::new(Icon::new(icons::Filter), "User Type"))
            .when(!settings.detailed_notifications, |el| {
                el.child(
                    div()
                        .text_xs()
                        .text_color(muted)
                        .child("Enable detailed notifications to filter by user type"),
                )
            })
            .children(rows)
            .into_any_element()
    }
}
