//! Spinner Component
//!
//! Rotating loader icon used by buttons and modules while loading.

use std::time::Duration;

use gpui::{
    Animation, AnimationExt, App, ElementId, IntoElement, Pixels, RenderOnce, Rgba, Styled,
    Transformation, Window, percentage, prelude::*, px,
};
use gpui_component::{Icon, IconName};

use crate::constants::SPINNER_PERIOD_MS;

#[derive(IntoElement)]
pub struct Spinner {
    id: ElementId,
    size: Pixels,
    color: Option<Rgba>,
}

impl Spinner {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            size: px(16.0),
            color: None,
        }
    }

    pub fn size(mut self, size: Pixels) -> Self {
        self.size = size;
        self
    }

    pub fn color(mut self, color: Rgba) -> Self {
        self.color = Some(color);
        self
    }
}

impl RenderOnce for Spinner {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        Icon::new(IconName::LoaderCircle)
            .size(self.size)
            .when_some(self.color, |icon, color| icon.text_color(color))
            .with_animation(
                self.id,
                Animation::new(Duration::from_millis(SPINNER_PERIOD_MS)).repeat(),
                |icon, delta| icon.transform(Transformation::rotate(percentage(delta))),
            )
    }
}
