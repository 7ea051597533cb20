//! SubmitButton Component
//!
//! Full-width form submit bar. Shares the disabled/loading click policy of
//! [`super::Button`] but ignores the button type colors.

use gpui::{
    AnyElement, App, ClickEvent, ElementId, FontWeight, InteractiveElement, IntoElement,
    ParentElement, Refineable, RenderOnce, StatefulInteractiveElement, StyleRefinement, Styled,
    Window, div, prelude::*, px,
};

use super::{ClickHandler, ClickShaker, Spinner};
use crate::theme::{AhColors, Theme, Typography};

#[derive(IntoElement)]
pub struct SubmitButton {
    pub(super) id: ElementId,
    pub(super) theme: Theme,
    pub(super) disabled: bool,
    pub(super) loading: bool,
    pub(super) on_click: Option<ClickHandler>,
    pub(super) children: Vec<AnyElement>,
    pub(super) style: StyleRefinement,
}

impl SubmitButton {
    pub fn new(id: impl Into<ElementId>, theme: Theme) -> Self {
        Self {
            id: id.into(),
            theme,
            disabled: false,
            loading: false,
            on_click: None,
            children: Vec::new(),
            style: StyleRefinement::default(),
        }
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn on_click(mut self, handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }

    pub(crate) fn on_click_boxed(mut self, handler: Option<ClickHandler>) -> Self {
        self.on_click = handler;
        self
    }
}

impl ParentElement for SubmitButton {
    fn extend(&mut self, elements: impl IntoIterator<Item = AnyElement>) {
        self.children.extend(elements);
    }
}

impl Styled for SubmitButton {
    fn style(&mut self) -> &mut StyleRefinement {
        &mut self.style
    }
}

impl RenderOnce for SubmitButton {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let interactive = !self.disabled && !self.loading;
        let on_click = if interactive { self.on_click } else { None };
        let foreground = AhColors::white();

        let label = if self.loading {
            Spinner::new(ElementId::Name(format!("{}-spinner", self.id).into()))
                .size(px(Typography::TEXT_BASE))
                .color(foreground)
                .into_any_element()
        } else {
            div().children(self.children).into_any_element()
        };

        let mut element = div()
            .id(self.id.clone())
            .w_full()
            .bg(self.theme.accent)
            .text_color(foreground)
            .text_size(px(Typography::TEXT_BASE))
            .font_weight(FontWeight::SEMIBOLD)
            .rounded_md()
            .overflow_hidden()
            .when(self.disabled, |el| el.opacity(0.5))
            .when(interactive, |el| el.cursor_pointer().hover(|s| s.opacity(0.9)))
            .child(
                ClickShaker::new(ElementId::Name(format!("{}-shaker", self.id).into()))
                    .should_shake(self.disabled)
                    .on_click_boxed(on_click)
                    .w_full()
                    .py(px(12.0))
                    .flex()
                    .items_center()
                    .justify_center()
                    .child(label),
            );
        element.style().refine(&self.style);

        element
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_builder() {
        let submit = SubmitButton::new("send", Theme::light())
            .loading(true)
            .on_click(|_, _, _| {});
        assert!(submit.loading);
        assert!(!submit.disabled);
        assert!(submit.on_click.is_some());
    }
}
