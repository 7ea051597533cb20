//! Button Component

use gpui::{
    AnyElement, App, ClickEvent, ElementId, InteractiveElement, IntoElement, ParentElement, Pixels,
    Refineable, RenderOnce, Rgba, StatefulInteractiveElement, StyleRefinement, Styled, Window, div,
    prelude::*, px,
};

use super::{ClickHandler, ClickShaker, Spinner, SubmitButton};
use crate::theme::{AhColors, Theme};

/// Semantic button type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonType {
    /// Neutral gray button
    #[default]
    Normal,
    /// Washed-out emphasis
    Important,
    /// Destructive or declining action
    Negative,
    /// Confirming action
    Positive,
    /// Form submit, rendered by [`SubmitButton`]
    Submit,
}

/// Background and text color of a button
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonColors {
    pub background: Rgba,
    pub foreground: Rgba,
}

impl ButtonType {
    /// Colors for this type; `Submit` has none, it is styled by [`SubmitButton`]
    pub fn colors(self, theme: &Theme) -> Option<ButtonColors> {
        let (background, foreground) = match self {
            ButtonType::Normal => (AhColors::button_normal_bg(), theme.dark_text),
            ButtonType::Important => (theme.washed_text, AhColors::white()),
            ButtonType::Negative => (theme.negative_color, AhColors::white()),
            ButtonType::Positive => (theme.positive_color, AhColors::white()),
            ButtonType::Submit => return None,
        };
        Some(ButtonColors {
            background,
            foreground,
        })
    }
}

/// Button size
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    /// Small button
    Small,
    /// Medium button (default)
    #[default]
    Medium,
    /// Large button
    Large,
}

impl ButtonSize {
    /// Horizontal padding, vertical padding and font size
    pub fn metrics(self) -> (Pixels, Pixels, Pixels) {
        match self {
            ButtonSize::Small => (px(8.0), px(4.0), px(12.0)),
            ButtonSize::Medium => (px(16.0), px(8.0), px(14.0)),
            ButtonSize::Large => (px(24.0), px(12.0), px(16.0)),
        }
    }
}

/// A themed button component
#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    theme: Theme,
    button_type: ButtonType,
    size: ButtonSize,
    disabled: bool,
    loading: bool,
    on_click: Option<ClickHandler>,
    children: Vec<AnyElement>,
    style: StyleRefinement,
}

impl Button {
    /// Create a new button
    pub fn new(id: impl Into<ElementId>, theme: Theme) -> Self {
        Self {
            id: id.into(),
            theme,
            button_type: ButtonType::Normal,
            size: ButtonSize::Medium,
            disabled: false,
            loading: false,
            on_click: None,
            children: Vec::new(),
            style: StyleRefinement::default(),
        }
    }

    /// Set the button type
    pub fn button_type(mut self, button_type: ButtonType) -> Self {
        self.button_type = button_type;
        self
    }

    /// Set the button size
    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    /// Set whether the button is disabled
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set whether the button is loading
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Set the click handler
    pub fn on_click(mut self, handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }

    /// Create a negative button
    pub fn negative(id: impl Into<ElementId>, theme: Theme) -> Self {
        Self::new(id, theme).button_type(ButtonType::Negative)
    }

    /// Create a positive button
    pub fn positive(id: impl Into<ElementId>, theme: Theme) -> Self {
        Self::new(id, theme).button_type(ButtonType::Positive)
    }

    /// Create a submit button
    pub fn submit(id: impl Into<ElementId>, theme: Theme) -> Self {
        Self::new(id, theme).button_type(ButtonType::Submit)
    }

    /// Whether clicks reach the handler
    pub fn is_interactive(&self) -> bool {
        !self.disabled && !self.loading
    }

    fn into_submit(self) -> SubmitButton {
        let mut submit = SubmitButton::new(self.id, self.theme)
            .disabled(self.disabled)
            .loading(self.loading)
            .on_click_boxed(self.on_click)
            .children(self.children);
        submit.style().refine(&self.style);
        submit
    }
}

impl ParentElement for Button {
    fn extend(&mut self, elements: impl IntoIterator<Item = AnyElement>) {
        self.children.extend(elements);
    }
}

impl Styled for Button {
    fn style(&mut self) -> &mut StyleRefinement {
        &mut self.style
    }
}

impl RenderOnce for Button {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        if self.button_type == ButtonType::Submit {
            return self.into_submit().into_any_element();
        }

        let colors = self.button_type.colors(&self.theme).unwrap_or(ButtonColors {
            background: AhColors::button_normal_bg(),
            foreground: self.theme.dark_text,
        });
        let (padding_x, padding_y, font_size) = self.size.metrics();
        let interactive = self.is_interactive();
        let opacity = if self.disabled { 0.5 } else { 1.0 };
        let on_click = if interactive { self.on_click } else { None };

        let shaker_id = ElementId::Name(format!("{}-shaker", self.id).into());
        let label = if self.loading {
            Spinner::new(ElementId::Name(format!("{}-spinner", self.id).into()))
                .size(font_size)
                .color(colors.foreground)
                .into_any_element()
        } else {
            div()
                .flex()
                .items_center()
                .gap_1()
                .children(self.children)
                .into_any_element()
        };

        let mut element = div()
            .id(self.id)
            .bg(colors.background)
            .text_color(colors.foreground)
            .text_size(font_size)
            .rounded_md()
            .overflow_hidden()
            .opacity(opacity)
            .when(interactive, |el| el.cursor_pointer().hover(|s| s.opacity(0.85)))
            .child(
                ClickShaker::new(shaker_id)
                    .should_shake(self.disabled)
                    .on_click_boxed(on_click)
                    .px(padding_x)
                    .py(padding_y)
                    .flex()
                    .items_center()
                    .justify_center()
                    .child(label),
            );
        element.style().refine(&self.style);

        element.into_any_element()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_builder() {
        let button = Button::new("save", Theme::light())
            .button_type(ButtonType::Positive)
            .size(ButtonSize::Large)
            .disabled(true)
            .on_click(|_, _, _| {});

        assert_eq!(button.button_type, ButtonType::Positive);
        assert_eq!(button.size, ButtonSize::Large);
        assert!(button.disabled);
        assert!(button.on_click.is_some());
    }

    #[test]
    fn test_disabled_or_loading_suppresses_clicks() {
        let theme = Theme::light();
        assert!(Button::new("a", theme).is_interactive());
        assert!(!Button::new("b", theme).disabled(true).is_interactive());
        assert!(!Button::new("c", theme).loading(true).is_interactive());
        assert!(!Button::new("d", theme).disabled(true).loading(true).is_interactive());
    }

    #[test]
    fn test_type_colors() {
        let theme = Theme::light();

        let normal = ButtonType::Normal.colors(&theme);
        assert_eq!(normal.map(|c| c.background), Some(AhColors::button_normal_bg()));
        assert_eq!(normal.map(|c| c.foreground), Some(theme.dark_text));

        let negative = ButtonType::Negative.colors(&theme);
        assert_eq!(negative.map(|c| c.background), Some(theme.negative_color));

        let positive = ButtonType::Positive.colors(&theme);
        assert_eq!(positive.map(|c| c.background), Some(theme.positive_color));

        let important = ButtonType::Important.colors(&theme);
        assert_eq!(important.map(|c| c.background), Some(theme.washed_text));
        assert_eq!(important.map(|c| c.foreground), Some(AhColors::white()));
    }

    #[test]
    fn test_submit_has_no_type_colors() {
        assert_eq!(ButtonType::Submit.colors(&Theme::light()), None);
        assert_eq!(ButtonType::Submit.colors(&Theme::dark()), None);

        let submit = Button::submit("send", Theme::light());
        assert_eq!(submit.button_type, ButtonType::Submit);
    }

    #[test]
    fn test_submit_carries_state_to_submit_button() {
        let theme = Theme::dark();
        let submit = Button::submit("send", theme)
            .disabled(true)
            .loading(true)
            .on_click(|_, _, _| {})
            .child("Send")
            .w(px(120.0))
            .into_submit();

        assert_eq!(submit.id, ElementId::from("send"));
        assert_eq!(submit.theme, theme);
        assert!(submit.disabled);
        assert!(submit.loading);
        assert!(submit.on_click.is_some());
        assert_eq!(submit.children.len(), 1);
        assert!(submit.style.size.width.is_some());
    }

    #[test]
    fn test_submit_without_handler() {
        let submit = Button::submit("send", Theme::light()).into_submit();
        assert!(!submit.disabled);
        assert!(!submit.loading);
        assert!(submit.on_click.is_none());
        assert!(submit.children.is_empty());
    }

    #[test]
    fn test_button_sizes() {
        assert_eq!(ButtonSize::Small.metrics().2, px(12.0));
        assert_eq!(ButtonSize::default().metrics(), (px(16.0), px(8.0), px(14.0)));
        assert_eq!(ButtonSize::Large.metrics().0, px(24.0));
    }
}
