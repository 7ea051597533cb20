//! ClickShaker Component
//!
//! Wraps a clickable region. When `should_shake` is set a click shakes the
//! region sideways for a moment; the click handler runs either way.

use std::time::Duration;

use gpui::{
    Animation, AnimationExt, AnyElement, App, ClickEvent, ElementId, Entity, InteractiveElement,
    IntoElement, ParentElement, Refineable, RenderOnce, StatefulInteractiveElement, StyleRefinement,
    Styled, Window, div, prelude::*, px,
};

use crate::constants::{SHAKE_ANIMATION_MS, SHAKE_DURATION_MS, SHAKE_EASING};
use crate::states::{ShakeState, cubic_bezier, shake_offset};

/// Boxed click handler shared by the clickable primitives
pub type ClickHandler = Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>;

/// Click area that can shake
#[derive(IntoElement)]
pub struct ClickShaker {
    id: ElementId,
    should_shake: bool,
    on_click: Option<ClickHandler>,
    children: Vec<AnyElement>,
    style: StyleRefinement,
}

impl ClickShaker {
    /// Create a new click shaker; `id` also keys its shake state
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            should_shake: false,
            on_click: None,
            children: Vec::new(),
            style: StyleRefinement::default(),
        }
    }

    /// Shake on click
    pub fn should_shake(mut self, should_shake: bool) -> Self {
        self.should_shake = should_shake;
        self
    }

    /// Set the click handler
    pub fn on_click(mut self, handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }

    pub(crate) fn on_click_boxed(mut self, handler: Option<ClickHandler>) -> Self {
        self.on_click = handler;
        self
    }
}

impl ParentElement for ClickShaker {
    fn extend(&mut self, elements: impl IntoIterator<Item = AnyElement>) {
        self.children.extend(elements);
    }
}

impl Styled for ClickShaker {
    fn style(&mut self) -> &mut StyleRefinement {
        &mut self.style
    }
}

/// Reset owed to a shake started by a click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShakeReset {
    pub generation: u64,
    pub delay: Duration,
}

/// Reaction to one click
///
/// The shake flag is set first, then the caller's handler runs in the same
/// call whether or not the area shakes. `Cx` is the app context in the
/// element and a plain recorder in tests.
fn react_to_click<Cx>(
    cx: &mut Cx,
    should_shake: bool,
    trigger: impl FnOnce(&mut Cx) -> u64,
    schedule_reset: impl FnOnce(&mut Cx, ShakeReset),
    on_click: impl FnOnce(&mut Cx),
) {
    if should_shake {
        let generation = trigger(cx);
        schedule_reset(
            cx,
            ShakeReset {
                generation,
                delay: Duration::from_millis(SHAKE_DURATION_MS),
            },
        );
    }
    on_click(cx);
}

/// Clear the shake flag once the reset is due
fn schedule_reset(state: &Entity<ShakeState>, reset: ShakeReset, cx: &mut App) {
    let state = state.downgrade();
    cx.spawn(async move |cx| {
        cx.background_executor().timer(reset.delay).await;
        // The shaker may be gone by now
        let _ = state.update(cx, |shake, cx| {
            if shake.settle(reset.generation) {
                cx.notify();
            }
        });
    })
    .detach();
}

impl RenderOnce for ClickShaker {
    fn render(self, window: &mut Window, cx: &mut App) -> impl IntoElement {
        let state = window.use_keyed_state(self.id.clone(), cx, |_, _| ShakeState::new());
        let shake = *state.read(cx);

        let should_shake = self.should_shake;
        let on_click = self.on_click;

        let mut area = div()
            .id(self.id.clone())
            .relative()
            .children(self.children)
            .on_click(move |event, window, cx| {
                react_to_click(
                    cx,
                    should_shake,
                    |cx| {
                        state.update(cx, |shake, cx| {
                            cx.notify();
                            shake.trigger()
                        })
                    },
                    |cx, reset| schedule_reset(&state, reset, cx),
                    |cx| {
                        if let Some(handler) = on_click.as_ref() {
                            handler(event, window, cx);
                        }
                    },
                );
            });
        area.style().refine(&self.style);

        if !shake.is_shaking() {
            return area.into_any_element();
        }

        // A fresh id per generation restarts the animation on every shake
        let (x1, y1, x2, y2) = SHAKE_EASING;
        area.with_animation(
            ElementId::Name(format!("{}-shake-{}", self.id, shake.generation()).into()),
            Animation::new(Duration::from_millis(SHAKE_ANIMATION_MS))
                .with_easing(cubic_bezier(x1, y1, x2, y2)),
            |area, delta| area.left(px(shake_offset(delta))),
        )
        .into_any_element()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_shaker_builder() {
        let shaker = ClickShaker::new("shaker").should_shake(true).on_click(|_, _, _| {});
        assert!(shaker.should_shake);
        assert!(shaker.on_click.is_some());
        assert!(shaker.children.is_empty());
    }

    /// Stands in for the app context
    #[derive(Default)]
    struct Recorder {
        shake: ShakeState,
        resets: Vec<ShakeReset>,
        /// Shake flag as seen by each handler call
        clicks: Vec<bool>,
    }

    fn click(recorder: &mut Recorder, should_shake: bool) {
        react_to_click(
            recorder,
            should_shake,
            |r| r.shake.trigger(),
            |r, reset| r.resets.push(reset),
            |r| {
                let shaking = r.shake.is_shaking();
                r.clicks.push(shaking);
            },
        );
    }

    #[test]
    fn test_click_shakes_then_settles() {
        let mut recorder = Recorder::default();
        click(&mut recorder, true);

        // Handler ran in the same call and already saw the flag
        assert_eq!(recorder.clicks, vec![true]);
        assert!(recorder.shake.is_shaking());
        assert_eq!(recorder.resets.len(), 1);
        let reset = recorder.resets[0];
        assert_eq!(reset.delay, Duration::from_millis(SHAKE_DURATION_MS));

        assert!(recorder.shake.settle(reset.generation));
        assert!(!recorder.shake.is_shaking());
    }

    #[test]
    fn test_click_without_shake_still_runs_handler() {
        let mut recorder = Recorder::default();
        click(&mut recorder, false);

        assert_eq!(recorder.clicks, vec![false]);
        assert!(!recorder.shake.is_shaking());
        assert!(recorder.resets.is_empty());
    }

    #[test]
    fn test_second_click_outlives_first_reset() {
        let mut recorder = Recorder::default();
        click(&mut recorder, true);
        click(&mut recorder, true);

        let (first, second) = (recorder.resets[0], recorder.resets[1]);
        assert!(!recorder.shake.settle(first.generation));
        assert!(recorder.shake.is_shaking());
        assert!(recorder.shake.settle(second.generation));
        assert_eq!(recorder.clicks, vec![true, true]);
    }

    #[tokio::test]
    async fn test_reset_applies_after_shake_duration() {
        let mut recorder = Recorder::default();
        click(&mut recorder, true);
        let reset = recorder.resets[0];

        tokio::time::sleep(reset.delay).await;
        assert!(recorder.shake.settle(reset.generation));
        assert!(!recorder.shake.is_shaking());
    }

    #[test]
    fn test_click_shaker_defaults() {
        let shaker = ClickShaker::new("shaker");
        assert!(!shaker.should_shake);
        assert!(shaker.on_click.is_none());
    }
}
