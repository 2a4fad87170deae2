//! Appearance settings view
//!
//! Theme, zoom and display toggles. Zoom changes are committed to the
//! settings store only after the window has stopped resizing.

use gpui::prelude::*;
use gpui::*;
use gpui_component::button::{Button, ButtonVariants};
use gpui_component::checkbox::Checkbox;
use gpui_component::{ActiveTheme, Disableable, Icon, Sizable};
use log::{debug, error};
use notifications::{
    AppearanceBinding, AppearanceField, AuthState, CheckboxState, Setting, SettingsStore,
    ThemeOption, ZoomConfig, ZoomController,
};
use std::sync::Arc;
use std::time::Instant;

use crate::assets::icons;
use crate::components::SectionHeader;
use crate::input::keymap::SETTINGS_CONTEXT;
use crate::input::{ResetZoom, ZoomIn, ZoomOut, shortcuts};
use crate::zoom::WindowZoom;

/// Emitted after a setting has been written to the store
pub struct SettingsChanged(pub Setting);

impl EventEmitter<SettingsChanged> for AppearanceSettingsView {}

pub struct AppearanceSettingsView {
    store: Arc<dyn SettingsStore>,
    auth: AuthState,
    zoom: ZoomController,
    focus_handle: FocusHandle,
    sync_task: Option<Task<()>>,
    #[allow(dead_code)]
    bounds_subscription: Subscription,
}

impl AppearanceSettingsView {
    pub fn new(
        store: Arc<dyn SettingsStore>,
        auth: AuthState,
        zoom_config: ZoomConfig,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let zoom = ZoomController::new(zoom_config, store.clone(), &WindowZoom::new(window));
        let bounds_subscription = cx.observe_window_bounds(window, |view, window, cx| {
            view.schedule_sync(window, cx);
        });

        Self {
            store,
            auth,
            zoom,
            focus_handle: cx.focus_handle(),
            sync_task: None,
            bounds_subscription,
        }
    }

    pub fn focus(&self, window: &mut Window, _cx: &mut Context<Self>) {
        window.focus(&self.focus_handle);
    }

    /// Restart the debounce window after a resize
    fn schedule_sync(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let deadline = self.zoom.on_resize(Instant::now());
        let delay = deadline.saturating_duration_since(Instant::now());

        // Replacing the task cancels the previous timer
        self.sync_task = Some(cx.spawn_in(window, async move |this, cx| {
            cx.background_executor().timer(delay).await;

            let _ = this.update_in(cx, |view, window, cx| {
                let surface = WindowZoom::new(window);
                if let Some(percentage) = view.zoom.on_timer(Instant::now().max(deadline), &surface)
                {
                    debug!("Zoom settled at {}%", percentage);
                    cx.emit(SettingsChanged(Setting::ZoomPercentage(percentage)));
                    cx.notify();
                }
            });
        }));
    }

    fn zoom_in(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        if self.zoom.increase_zoom(&mut WindowZoom::new(window)) {
            // A rem change reflows the window like a resize
            self.schedule_sync(window, cx);
        }
    }

    fn zoom_out(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        if self.zoom.decrease_zoom(&mut WindowZoom::new(window)) {
            self.schedule_sync(window, cx);
        }
    }

    fn reset_zoom(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        self.zoom.reset_zoom(&mut WindowZoom::new(window));
        self.schedule_sync(window, cx);
    }

    fn handle_zoom_in(&mut self, _: &ZoomIn, window: &mut Window, cx: &mut Context<Self>) {
        self.zoom_in(window, cx);
    }

    fn handle_zoom_out(&mut self, _: &ZoomOut, window: &mut Window, cx: &mut Context<Self>) {
        self.zoom_out(window, cx);
    }

    fn handle_reset_zoom(&mut self, _: &ResetZoom, window: &mut Window, cx: &mut Context<Self>) {
        self.reset_zoom(window, cx);
    }

    fn write_setting(&mut self, setting: Setting, cx: &mut Context<Self>) {
        if let Err(e) = self.store.update_setting(setting.clone()) {
            error!("Failed to update {}: {:#}", setting.key(), e);
            return;
        }
        cx.emit(SettingsChanged(setting));
        cx.notify();
    }

    fn toggle(&mut self, field: AppearanceField, checked: bool, cx: &mut Context<Self>) {
        let setting = match self.store.settings() {
            Ok(settings) => AppearanceBinding::new(&settings, &self.auth).toggle(field, checked),
            Err(e) => {
                error!("Failed to read settings: {:#}", e);
                return;
            }
        };

        if let Some(setting) = setting {
            self.write_setting(setting, cx);
        }
    }

    fn render_theme_options(
        &self,
        groups: Vec<(notifications::ThemeGroup, Vec<ThemeOption>)>,
        cx: &mut Context<Self>,
    ) -> impl IntoElement + use<> {
        let muted = cx.theme().muted_foreground;

        div()
            .flex()
            .flex_col()
            .gap_2()
            .children(groups.into_iter().map(|(group, options)| {
                div()
                    .flex()
                    .flex_col()
                    .gap_1()
                    .child(div().text_xs().text_color(muted).child(group.label()))
                    .child(div().flex().flex_wrap().gap_1().children(options.into_iter().map(
                        |option| {
                            let theme = option.theme;
                            let button = Button::new(ElementId::Name(
                                format!("theme-{}", option.label).into(),
                            ))
                            .label(option.label)
                            .small()
                            .on_click(cx.listener(move |view, _event, _window, cx| {
                                view.write_setting(Setting::Theme(theme), cx);
                            }));

                            if option.selected {
                                button.primary()
                            } else {
                                button.ghost()
                            }
                        },
                    )))
            }))
    }

    fn render_zoom_controls(&self, cx: &mut Context<Self>) -> impl IntoElement + use<> {
        let muted = cx.theme().muted_foreground;

        div()
            .flex()
            .flex_col()
            .gap_1()
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_1()
                    .child(div().text_sm().mr_2().child("Zoom:"))
                    .child(
                        Button::new("zoom-out")
                            .icon(Icon::new(icons::ZoomOut))
                            .small()
                            .ghost()
                            .on_click(cx.listener(|view, _event, window, cx| {
                                view.zoom_out(window, cx);
                            })),
                    )
                    .child(
                        Button::new("zoom-percentage")
                            .label(self.zoom.label())
                            .small()
                            .ghost()
                            .disabled(true),
                    )
                    .child(
                        Button::new("zoom-in")
                            .icon(Icon::new(icons::ZoomIn))
                            .small()
                            .ghost()
                            .on_click(cx.listener(|view, _event, window, cx| {
                                view.zoom_in(window, cx);
                            })),
                    )
                    .child(
                        Button::new("zoom-reset")
                            .icon(Icon::new(icons::ResetZoom))
                            .small()
                            .danger()
                            .on_click(cx.listener(|view, _event, window, cx| {
                                view.reset_zoom(window, cx);
                            })),
                    ),
            )
            .child(
                div()
                    .flex()
                    .gap_3()
                    .text_xs()
                    .text_color(muted)
                    .children(
                        shortcuts()
                            .into_iter()
                            .map(|s| format!("{} {}", s.keys, s.description)),
                    ),
            )
    }

    fn render_checkbox(
        &self,
        state: CheckboxState,
        cx: &mut Context<Self>,
    ) -> impl IntoElement + use<> {
        let muted = cx.theme().muted_foreground;
        let field = state.field;

        div()
            .flex()
            .flex_col()
            .gap_0p5()
            .child(
                Checkbox::new(ElementId::Name(state.name().into()))
                    .label(state.label())
                    .checked(state.checked)
                    .disabled(state.disabled)
                    .on_click(cx.listener(move |view, checked: &bool, _window, cx| {
                        view.toggle(field, *checked, cx);
                    })),
            )
            .when_some(state.tooltip(), |el, tooltip| {
                el.child(div().pl_6().text_xs().text_color(muted).child(tooltip))
            })
    }
}

impl Drop for AppearanceSettingsView {
    fn drop(&mut self) {
        self.zoom.teardown();
    }
}

impl Render for AppearanceSettingsView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let settings = match self.store.settings() {
            Ok(settings) => settings,
            Err(e) => {
                error!("Failed to read settings: {:#}", e);
                return div().child("Settings unavailable").into_any_element();
            }
        };
        let binding = AppearanceBinding::new(&settings, &self.auth);
        let theme_options = binding.theme_options();
        let checkboxes = binding.checkboxes();

        let theme_section = self.render_theme_options(theme_options, cx);
        let zoom_section = self.render_zoom_controls(cx);
        let checkbox_rows: Vec<AnyElement> = checkboxes
            .into_iter()
            .map(|state| self.render_checkbox(state, cx).into_any_element())
            .collect();

        div()
            .key_context(SETTINGS_CONTEXT)
            .track_focus(&self.focus_handle)
            .on_action(cx.listener(Self::handle_zoom_in))
            .on_action(cx.listener(Self::handle_zoom_out))
            .on_action(cx.listener(Self::handle_reset_zoom))
            .flex()
            .flex_col()
            .gap_4()
            .child(SectionHeader::new(Icon::new(icons::Paintbrush), "Appearance"))
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap_2()
                    .child(div().text_sm().child("Theme:"))
                    .child(theme_section),
            )
            .child(zoom_section)
            .child(div().flex().flex_col().gap_2().children(checkbox_rows))
            .into_any_element()
    }
}
