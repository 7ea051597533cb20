//! Error Boundary Fallback
//!
//! Static apology panel that replaces a module after a render fault. It offers
//! a single reload action and never retries on its own.

use gpui::{
    App, ClickEvent, IntoElement, ParentElement, RenderOnce, Styled, Window, div, prelude::*, px,
};

use super::card_frame;
use crate::components::primitives::{Button, ClickHandler};
use crate::i18n::{Locale, t};
use crate::theme::{Theme, Typography};

#[derive(IntoElement)]
pub struct ErrorFallback {
    theme: Theme,
    locale: Locale,
    on_reload: Option<ClickHandler>,
}

impl ErrorFallback {
    pub fn new(theme: Theme, locale: Locale) -> Self {
        Self {
            theme,
            locale,
            on_reload: None,
        }
    }

    /// Handler for the reload button
    pub fn on_reload(mut self, handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static) -> Self {
        self.on_reload = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for ErrorFallback {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let mut reload =
            Button::new("fallback-reload", self.theme).child(t(self.locale, "fallback-reload"));
        if let Some(handler) = self.on_reload {
            reload = reload.on_click(handler);
        }

        card_frame(&self.theme)
            .p_4()
            .gap_2()
            .items_start()
            .child(
                div()
                    .text_size(px(Typography::TEXT_2XL))
                    .font_weight(gpui::FontWeight::SEMIBOLD)
                    .child(t(self.locale, "fallback-title")),
            )
            .child(
                div()
                    .text_size(px(Typography::TEXT_LG))
                    .mb(px(12.0))
                    .child(t(self.locale, "fallback-subtitle")),
            )
            .child(reload)
    }
}
