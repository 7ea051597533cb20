//! Module Component
//!
//! Card-like region with loading, error and print states, and a retry flow
//! for callers that can refetch their data.
//!
//! Content is supplied one of two ways:
//!
//! - [`ModuleContent::Children`]: a view the caller builds up front. It stays
//!   mounted while loading and is only faded out.
//! - [`ModuleContent::Render`]: a callback invoked only while not loading, for
//!   content that needs the fetched data or is expensive to build.
//!
//! A render callback may fail. The first failure switches the module to its
//! fallback panel until the user reloads it.

use std::rc::Rc;

use gpui::{
    AnyElement, AnyView, App, ClickEvent, Context, InteractiveElement, IntoElement, ParentElement,
    Refineable, Render, StatefulInteractiveElement, StyleRefinement, Styled, Task, Window, div,
    prelude::*, px, relative,
};
use tracing::{debug, error, info};

use super::{ErrorFallback, card_frame};
use crate::components::primitives::{Button, Spinner};
use crate::constants::{
    MODULE_ERROR_HEIGHT, MODULE_LOADING_HEIGHT, MODULE_MAX_HEIGHT, MODULE_SPINNER_SIZE,
};
use crate::error::Result;
use crate::helpers::purge_cache_dir;
use crate::i18n::{Locale, t};
use crate::services::Refetch;
use crate::states::{
    BoundaryState, DisplayState, InFlight, ModuleProps, RetryEffect, RetryEvent, RetryState,
    content_opacity, display_state, settle_refetch, visible_in_print,
};
use crate::theme::{Theme, Typography};

/// Deferred content builder
pub type RenderContent = Rc<dyn Fn(&mut Window, &mut App) -> Result<AnyElement>>;

/// Wrapper click handler
pub type ModuleClickHandler = Rc<dyn Fn(&ClickEvent, &mut Window, &mut App)>;

/// How a module gets its content
#[derive(Clone, Default)]
pub enum ModuleContent {
    #[default]
    Empty,
    /// Eagerly built view, kept mounted while loading
    Children(AnyView),
    /// Built on each render, skipped while loading
    Render(RenderContent),
}

pub struct Module {
    theme: Theme,
    locale: Locale,
    props: ModuleProps,
    retry: RetryState,
    boundary: BoundaryState,
    refetch: Option<Refetch>,
    content: ModuleContent,
    style: StyleRefinement,
    inner_style: StyleRefinement,
    printing: bool,
    on_click: Option<ModuleClickHandler>,
    /// Refetches still running; dropped with the module
    refetch_tasks: InFlight<Task<()>>,
}

impl Module {
    /// Create a new module
    pub fn new(theme: Theme, locale: Locale) -> Self {
        Self {
            theme,
            locale,
            props: ModuleProps::default(),
            retry: RetryState::new(),
            boundary: BoundaryState::new(),
            refetch: None,
            content: ModuleContent::Empty,
            style: StyleRefinement::default(),
            inner_style: StyleRefinement::default(),
            printing: false,
            on_click: None,
            refetch_tasks: InFlight::new(),
        }
    }

    // ==================== Builders ====================

    pub fn props(mut self, props: ModuleProps) -> Self {
        self.props = props;
        self
    }

    /// Enable the retry button with this refetch
    pub fn refetch(mut self, refetch: Refetch) -> Self {
        self.refetch = Some(refetch);
        self
    }

    /// Eagerly mounted content
    pub fn children(mut self, view: impl Into<AnyView>) -> Self {
        self.content = ModuleContent::Children(view.into());
        self
    }

    /// Content built only while not loading
    pub fn render_content(
        mut self,
        render: impl Fn(&mut Window, &mut App) -> Result<AnyElement> + 'static,
    ) -> Self {
        self.content = ModuleContent::Render(Rc::new(render));
        self
    }

    /// Style applied to the card wrapper
    pub fn style(mut self, style: StyleRefinement) -> Self {
        self.style = style;
        self
    }

    /// Style applied to the content column
    pub fn inner_style(mut self, style: StyleRefinement) -> Self {
        self.inner_style = style;
        self
    }

    pub fn on_click(mut self, handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static) -> Self {
        self.on_click = Some(Rc::new(handler));
        self
    }

    // ==================== Getters ====================

    pub fn current_props(&self) -> &ModuleProps {
        &self.props
    }

    pub fn retry_state(&self) -> RetryState {
        self.retry
    }

    pub fn is_faulted(&self) -> bool {
        self.boundary.is_faulted()
    }

    // ==================== Updates ====================

    /// Replace the caller-controlled props
    pub fn set_props(&mut self, props: ModuleProps, cx: &mut Context<Self>) {
        self.retry.dispatch(RetryEvent::PropsChanged {
            error: props.has_error(),
        });
        self.props = props;
        cx.notify();
    }

    /// Switch print preview on or off
    pub fn set_printing(&mut self, printing: bool, cx: &mut Context<Self>) {
        if self.printing != printing {
            self.printing = printing;
            cx.notify();
        }
    }

    pub fn set_theme(&mut self, theme: Theme, cx: &mut Context<Self>) {
        self.theme = theme;
        cx.notify();
    }

    pub fn set_locale(&mut self, locale: Locale, cx: &mut Context<Self>) {
        self.locale = locale;
        cx.notify();
    }

    /// Retry button handler
    fn retry(&mut self, cx: &mut Context<Self>) {
        let Some(refetch) = self.refetch.clone() else {
            return;
        };
        if self.retry.dispatch(RetryEvent::RetryPressed) != RetryEffect::InvokeRefetch {
            return;
        }
        cx.notify();

        debug!("Starting module refetch");
        let refetch = refetch.start(cx);
        let id = self.refetch_tasks.reserve();
        let task = cx.spawn(async move |this, cx| {
            let event = settle_refetch(refetch).await;
            // Released modules simply drop the update
            let _ = this.update(cx, |module, cx| {
                module.retry.dispatch(event);
                // Detach rather than drop, this task is still running
                if let Some(task) = module.refetch_tasks.remove(id) {
                    task.detach();
                }
                cx.notify();
            });
        });
        self.refetch_tasks.insert(id, task);
    }

    /// Fallback reload: clear persisted cache and start over
    fn reload(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        if let Err(e) = purge_cache_dir() {
            error!(error = %e, "Failed to purge cache before reload");
        }
        self.boundary.reset();
        self.retry = RetryState::new();
        self.refetch_tasks.clear();
        info!("Module reloaded after render fault");
        window.refresh();
        cx.notify();
    }

    // ==================== Rendering ====================

    fn render_error_panel(&self, cx: &mut Context<Self>) -> AnyElement {
        let retry_button = self.refetch.as_ref().map(|_| {
            Button::new("module-retry", self.theme)
                .loading(self.retry.is_refetching())
                .on_click(cx.listener(|this, _: &ClickEvent, _window, cx| this.retry(cx)))
                .child(t(self.locale, "module-retry"))
        });

        div()
            .flex()
            .flex_col()
            .items_center()
            .justify_center()
            .h(px(MODULE_ERROR_HEIGHT))
            .child(div().child(t(self.locale, "module-error")))
            .child(
                div()
                    .mb(px(20.0))
                    .text_size(px(Typography::TEXT_SM))
                    .child(t(self.locale, "module-error-hint")),
            )
            .children(retry_button)
            .into_any_element()
    }

    fn render_body(&mut self, window: &mut Window, cx: &mut Context<Self>) -> AnyElement {
        let state = display_state(&self.props, &self.retry);
        if state == DisplayState::Error {
            return self.render_error_panel(cx);
        }

        let render = match &self.content {
            ModuleContent::Empty => return div().into_any_element(),
            ModuleContent::Children(view) => return view.clone().into_any_element(),
            ModuleContent::Render(render) => render.clone(),
        };
        if state == DisplayState::Loading {
            return div().into_any_element();
        }

        let app: &mut App = cx;
        self.boundary
            .guard(render(window, app))
            .unwrap_or_else(|| div().into_any_element())
    }

    fn render_fallback(&self, cx: &mut Context<Self>) -> AnyElement {
        ErrorFallback::new(self.theme, self.locale)
            .on_reload(cx.listener(|this, _: &ClickEvent, window, cx| this.reload(window, cx)))
            .into_any_element()
    }
}

impl Render for Module {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        if !visible_in_print(&self.props, self.printing) {
            return div().into_any_element();
        }
        if self.boundary.is_faulted() {
            return self.render_fallback(cx);
        }

        let body = self.render_body(window, cx);
        if self.boundary.is_faulted() {
            return self.render_fallback(cx);
        }

        let loading = self.props.loading;
        let printing = self.printing;

        // Overlay stays mounted; the spinner only exists while loading
        let overlay = div()
            .absolute()
            .top(relative(0.5))
            .left(relative(0.5))
            .ml(px(-MODULE_SPINNER_SIZE / 2.0))
            .mt(px(-MODULE_SPINNER_SIZE / 2.0))
            .size(px(MODULE_SPINNER_SIZE))
            .when(!loading, |el| el.invisible())
            .when(loading, |el| {
                el.child(Spinner::new("module-spinner").size(px(MODULE_SPINNER_SIZE)))
            });

        let mut content = div()
            .flex()
            .flex_col()
            .opacity(content_opacity(&self.props))
            .child(body);
        content.style().refine(&self.inner_style);

        let mut wrapper = card_frame(&self.theme)
            .id(gpui::ElementId::View(cx.entity_id()))
            .when(printing, |el| el.w_full().shadow_none())
            .map(|el| {
                if loading {
                    el.h(px(MODULE_LOADING_HEIGHT)).justify_center()
                } else {
                    el.max_h(px(MODULE_MAX_HEIGHT))
                }
            })
            .when_some(self.on_click.clone(), |el, handler| {
                el.on_click(move |event, window, cx| handler(event, window, cx))
            })
            .child(overlay)
            .child(content);
        wrapper.style().refine(&self.style);

        wrapper.into_any_element()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_defaults() {
        let module = Module::new(Theme::light(), Locale::SvSE);
        assert_eq!(module.current_props(), &ModuleProps::default());
        assert_eq!(module.retry_state(), RetryState::new());
        assert!(!module.is_faulted());
        assert!(module.refetch.is_none());
        assert!(matches!(module.content, ModuleContent::Empty));
        assert!(module.refetch_tasks.is_empty());
    }

    #[test]
    fn test_module_builder() {
        let module = Module::new(Theme::dark(), Locale::EnUS)
            .props(ModuleProps::new().loading(true).print(true))
            .refetch(Refetch::new(|_cx| async { Ok(()) }))
            .render_content(|_window, _cx| Ok(div().into_any_element()));

        assert!(module.current_props().loading);
        assert!(module.current_props().print);
        assert!(module.refetch.is_some());
        assert!(matches!(module.content, ModuleContent::Render(_)));
    }
}
