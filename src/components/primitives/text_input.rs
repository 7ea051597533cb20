//! TextInput and TextArea Components
//!
//! Stateless wrappers that put an optional error message above a
//! gpui-component input. The field itself is configured through
//! [`FieldOptions`] when its state entity is created.

use gpui::{
    App, AppContext, Entity, Focusable, IntoElement, ParentElement, Refineable, RenderOnce,
    SharedString, StyleRefinement, Styled, Window, div, prelude::*, px,
};
use gpui_component::Disableable;
use gpui_component::input::{Input, InputState};

use crate::constants::{TEXT_AREA_MIN_HEIGHT, TEXT_AREA_ROWS};
use crate::theme::{AhColors, Typography};

/// Options passed through to the underlying field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldOptions {
    pub placeholder: Option<SharedString>,
    pub default_value: Option<SharedString>,
    /// Hide the typed characters
    pub masked: bool,
    /// Focus the field as soon as it is created
    pub auto_focus: bool,
    /// Multi-line field with this many rows
    pub rows: Option<usize>,
}

impl FieldOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults for a text area
    pub fn text_area() -> Self {
        Self {
            rows: Some(TEXT_AREA_ROWS),
            ..Self::default()
        }
    }

    pub fn placeholder(mut self, placeholder: impl Into<SharedString>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn default_value(mut self, value: impl Into<SharedString>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn masked(mut self, masked: bool) -> Self {
        self.masked = masked;
        self
    }

    pub fn auto_focus(mut self, auto_focus: bool) -> Self {
        self.auto_focus = auto_focus;
        self
    }

    pub fn rows(mut self, rows: usize) -> Self {
        self.rows = Some(rows);
        self
    }
}

/// Create the state entity for a field
pub fn field_state(options: FieldOptions, window: &mut Window, cx: &mut App) -> Entity<InputState> {
    let auto_focus = options.auto_focus;
    let state = cx.new(|cx| {
        let mut state = InputState::new(window, cx);
        if let Some(rows) = options.rows {
            state = state.multi_line(true).rows(rows);
        }
        if let Some(placeholder) = options.placeholder {
            state = state.placeholder(placeholder);
        }
        if let Some(value) = options.default_value {
            state = state.default_value(value);
        }
        state.masked(options.masked)
    });

    if auto_focus {
        state.read(cx).focus_handle(cx).focus(window);
    }
    state
}

/// Error line shown above a field; kept even when empty so the layout does not jump
fn error_line(error: Option<SharedString>) -> impl IntoElement {
    div()
        .min_h(px(Typography::TEXT_XS + 4.0))
        .text_size(px(Typography::TEXT_XS))
        .text_color(AhColors::error_text())
        .children(error)
}

/// Single-line field with an error message
#[derive(IntoElement)]
pub struct TextInput {
    state: Entity<InputState>,
    error: Option<SharedString>,
    disabled: bool,
    style: StyleRefinement,
    wrapper_style: StyleRefinement,
}

impl TextInput {
    pub fn new(state: &Entity<InputState>) -> Self {
        Self {
            state: state.clone(),
            error: None,
            disabled: false,
            style: StyleRefinement::default(),
            wrapper_style: StyleRefinement::default(),
        }
    }

    /// Show an error above the field
    pub fn error(mut self, error: impl Into<SharedString>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Style applied to the wrapper around error line and field
    pub fn wrapper_style(mut self, style: StyleRefinement) -> Self {
        self.wrapper_style = style;
        self
    }
}

impl Styled for TextInput {
    fn style(&mut self) -> &mut StyleRefinement {
        &mut self.style
    }
}

impl RenderOnce for TextInput {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let has_error = self.error.is_some();

        let mut field = Input::new(&self.state)
            .disabled(self.disabled)
            .w_full()
            .when(has_error, |field| field.border_color(AhColors::input_border_error()));
        field.style().refine(&self.style);

        let mut wrapper = div()
            .flex()
            .flex_col()
            .gap_1()
            .child(error_line(self.error))
            .child(field);
        wrapper.style().refine(&self.wrapper_style);

        wrapper
    }
}

/// Multi-line field with an error message
#[derive(IntoElement)]
pub struct TextArea {
    state: Entity<InputState>,
    error: Option<SharedString>,
    disabled: bool,
    style: StyleRefinement,
}

impl TextArea {
    pub fn new(state: &Entity<InputState>) -> Self {
        Self {
            state: state.clone(),
            error: None,
            disabled: false,
            style: StyleRefinement::default(),
        }
    }

    /// Show an error above the field
    pub fn error(mut self, error: impl Into<SharedString>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

impl Styled for TextArea {
    fn style(&mut self) -> &mut StyleRefinement {
        &mut self.style
    }
}

impl RenderOnce for TextArea {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let has_error = self.error.is_some();

        let mut field = Input::new(&self.state)
            .disabled(self.disabled)
            .w_full()
            .min_h(px(TEXT_AREA_MIN_HEIGHT))
            .when(has_error, |field| field.border_color(AhColors::input_border_error()));
        field.style().refine(&self.style);

        div()
            .flex()
            .flex_col()
            .gap_1()
            .child(error_line(self.error))
            .child(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_options_builder() {
        let options = FieldOptions::new()
            .placeholder("Name")
            .default_value("Ada")
            .masked(true)
            .auto_focus(true);

        assert_eq!(options.placeholder.as_ref().map(|p| p.as_ref()), Some("Name"));
        assert_eq!(options.default_value.as_ref().map(|v| v.as_ref()), Some("Ada"));
        assert!(options.masked);
        assert!(options.auto_focus);
        assert_eq!(options.rows, None);
    }

    #[test]
    fn test_text_area_defaults() {
        let options = FieldOptions::text_area();
        assert_eq!(options.rows, Some(TEXT_AREA_ROWS));
        assert!(!options.auto_focus);
        assert_eq!(FieldOptions::text_area().rows(8).rows, Some(8));
    }
}
