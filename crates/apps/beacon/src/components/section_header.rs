//! Settings section header - icon followed by a bold title

use gpui::prelude::*;
use gpui::*;
use gpui_component::{ActiveTheme, Icon, Sizable};

#[derive(IntoElement)]
pub struct SectionHeader {
    icon: Icon,
    title: SharedString,
}

impl SectionHeader {
    pub fn new(icon: Icon, title: impl Into<SharedString>) -> Self {
        Self {
            icon,
            title: title.into(),
        }
    }
}

impl RenderOnce for SectionHeader {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let theme = cx.theme();

        div()
            .flex()
            .items_center()
            .gap_2()
            .pb_2()
            .border_b_1()
            .border_color(theme.border)
            .child(self.icon.small().text_color(theme.muted_foreground))
            .child(
                div()
                    .text_base()
                    .font_weight(FontWeight::BOLD)
                    .text_color(theme.foreground)
                    .child(self.title),
            )
    }
}
