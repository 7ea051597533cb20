//! Gallery - Component Showcase
//!
//! One window with every component of the kit and switches for the module
//! states, so the kit can be exercised by hand.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use gpui::{
    App, AppContext, Context, Entity, FocusHandle, InteractiveElement, IntoElement, ParentElement,
    Render, SharedString, StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};
use gpui_component::input::InputState;
use tracing::{info, warn};

use crate::components::composite::Module;
use crate::components::primitives::{
    Button, ButtonSize, ButtonType, FieldOptions, TextArea, TextInput, field_state,
};
use crate::error::Error;
use crate::helpers::GalleryAction;
use crate::i18n::{Locale, t};
use crate::services::{Refetch, run_in_tokio};
use crate::states::{ModuleProps, UiSettings, save_settings};
use crate::theme::{Theme, ThemeMode, Typography};

/// Simulated network delay of the data module's refetch
const REFETCH_DELAY_MS: u64 = 800;

/// Eagerly built content for the notes module
struct NotePanel {
    text: SharedString,
}

impl Render for NotePanel {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        div().p_4().child(self.text.clone())
    }
}

fn report_rows() -> impl IntoElement {
    div().p_4().flex().flex_col().gap_1().children(
        [("Mon", 12), ("Tue", 18), ("Wed", 9), ("Thu", 21), ("Fri", 15)]
            .into_iter()
            .map(|(day, count)| {
                div()
                    .flex()
                    .justify_between()
                    .child(day)
                    .child(count.to_string())
            }),
    )
}

fn section_title(title: SharedString) -> impl IntoElement {
    div()
        .text_size(px(Typography::TEXT_LG))
        .font_weight(gpui::FontWeight::SEMIBOLD)
        .child(title)
}

pub struct Gallery {
    settings: UiSettings,
    theme: Theme,
    locale: Locale,
    focus_handle: FocusHandle,
    data_module: Entity<Module>,
    notes_module: Entity<Module>,
    test_module: Entity<Module>,
    fragile_module: Entity<Module>,
    name_field: Entity<InputState>,
    notes_field: Entity<InputState>,
    name_error: Option<SharedString>,
    loading: bool,
    failing: bool,
    printing: bool,
    broken: Rc<Cell<bool>>,
}

impl Gallery {
    pub fn new(
        settings: UiSettings,
        theme: Theme,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let locale = settings.locale();

        // Succeeds after a delay and clears the simulated outage
        let gallery = cx.weak_entity();
        let refetch = Refetch::new(move |cx: &mut App| {
            let gallery = gallery.clone();
            let mut async_cx = cx.to_async();
            async move {
                run_in_tokio(tokio::time::sleep(Duration::from_millis(REFETCH_DELAY_MS))).await?;
                gallery
                    .update(&mut async_cx, |gallery, cx| gallery.set_failing(false, cx))
                    .map_err(|e| Error::Refetch {
                        message: e.to_string(),
                    })
            }
        });

        let data_module = cx.new(|_| {
            Module::new(theme, locale)
                .props(ModuleProps::new().print(true))
                .refetch(refetch)
                .render_content(|_window, _cx| Ok(report_rows().into_any_element()))
        });

        let notes = cx.new(|_| NotePanel {
            text: "Built once by the caller and kept mounted while loading.".into(),
        });
        let notes_module = cx.new(|_| Module::new(theme, locale).children(notes));

        let test_module = cx.new(|_| {
            Module::new(theme, locale)
                .props(ModuleProps::new().test_refetch(true))
                .refetch(Refetch::tokio(|| async {
                    tokio::time::sleep(Duration::from_millis(REFETCH_DELAY_MS)).await;
                    Ok(())
                }))
                .render_content(|_window, _cx| {
                    Ok(div().p_4().child("Test refetch done").into_any_element())
                })
        });

        let broken = Rc::new(Cell::new(false));
        let fragile_module = cx.new(|_| {
            let broken = broken.clone();
            Module::new(theme, locale).render_content(move |_window, _cx| {
                if broken.get() {
                    return Err(Error::Render {
                        message: "report layout is missing its rows".to_string(),
                    });
                }
                Ok(div().p_4().child("Renders until broken").into_any_element())
            })
        });

        let name_field = field_state(
            FieldOptions::new()
                .placeholder(t(locale, "gallery-name"))
                .auto_focus(true),
            window,
            cx,
        );
        let notes_field = field_state(
            FieldOptions::text_area().placeholder(t(locale, "gallery-notes")),
            window,
            cx,
        );

        Self {
            settings,
            theme,
            locale,
            focus_handle: cx.focus_handle(),
            data_module,
            notes_module,
            test_module,
            fragile_module,
            name_field,
            notes_field,
            name_error: None,
            loading: false,
            failing: false,
            printing: false,
            broken,
        }
    }

    /// Push the current switches into the modules
    fn sync_modules(&mut self, cx: &mut Context<Self>) {
        let props = ModuleProps::new().loading(self.loading).print(true);
        let props = if self.failing { props.error("offline") } else { props };
        let printing = self.printing;

        self.data_module
            .update(cx, |module, cx| module.set_props(props, cx));
        for module in self.modules() {
            module.update(cx, |module, cx| module.set_printing(printing, cx));
        }
        cx.notify();
    }

    fn modules(&self) -> [Entity<Module>; 4] {
        [
            self.data_module.clone(),
            self.notes_module.clone(),
            self.test_module.clone(),
            self.fragile_module.clone(),
        ]
    }

    fn persist_settings(&self) {
        if let Err(e) = save_settings(&self.settings) {
            warn!(error = %e, "Failed to save settings");
        }
    }

    fn toggle_theme(&mut self, cx: &mut Context<Self>) {
        let mode = match self.settings.theme_mode() {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        };
        self.settings.set_theme_mode(mode);
        self.theme = self
            .settings
            .resolve_theme()
            .unwrap_or_else(|_| Theme::for_mode(mode));
        self.persist_settings();

        let theme = self.theme;
        for module in self.modules() {
            module.update(cx, |module, cx| module.set_theme(theme, cx));
        }
        cx.notify();
    }

    fn toggle_locale(&mut self, cx: &mut Context<Self>) {
        self.locale = match self.locale {
            Locale::EnUS => Locale::SvSE,
            Locale::SvSE => Locale::EnUS,
        };
        self.settings.set_locale(self.locale);
        self.persist_settings();
        if self.name_error.is_some() {
            self.name_error = Some(t(self.locale, "gallery-name-required"));
        }

        let locale = self.locale;
        for module in self.modules() {
            module.update(cx, |module, cx| module.set_locale(locale, cx));
        }
        cx.notify();
    }

    fn set_failing(&mut self, failing: bool, cx: &mut Context<Self>) {
        self.failing = failing;
        self.sync_modules(cx);
    }

    fn toggle_broken(&mut self, cx: &mut Context<Self>) {
        self.broken.set(!self.broken.get());
        self.fragile_module.update(cx, |_, cx| cx.notify());
        cx.notify();
    }

    fn submit(&mut self, cx: &mut Context<Self>) {
        let name = self.name_field.read(cx).value().to_string();
        if name.trim().is_empty() {
            self.name_error = Some(t(self.locale, "gallery-name-required"));
        } else {
            self.name_error = None;
            info!(name = %name.trim(), "Gallery form submitted");
        }
        cx.notify();
    }

    fn on_gallery_action(
        &mut self,
        action: &GalleryAction,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        match action {
            GalleryAction::TogglePrintPreview => {
                self.printing = !self.printing;
                self.sync_modules(cx);
            }
            GalleryAction::ToggleLoading => {
                self.loading = !self.loading;
                self.sync_modules(cx);
            }
            GalleryAction::ToggleError => self.set_failing(!self.failing, cx),
        }
    }

    fn render_buttons(&self) -> impl IntoElement {
        let theme = self.theme;
        div()
            .flex()
            .flex_wrap()
            .gap_2()
            .child(Button::new("btn-normal", theme).child("Normal"))
            .child(
                Button::new("btn-important", theme)
                    .button_type(ButtonType::Important)
                    .child("Important"),
            )
            .child(Button::negative("btn-negative", theme).child("Negative"))
            .child(Button::positive("btn-positive", theme).child("Positive"))
            .child(Button::new("btn-disabled", theme).disabled(true).child("Disabled"))
            .child(Button::new("btn-loading", theme).loading(true).child("Loading"))
            .child(
                Button::new("btn-small", theme)
                    .size(ButtonSize::Small)
                    .child("Small"),
            )
            .child(
                Button::positive("btn-large", theme)
                    .size(ButtonSize::Large)
                    .child("Large"),
            )
    }

    fn render_toolbar(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = self.theme;
        let action_button = |id: &'static str, label: SharedString, action: GalleryAction| {
            Button::new(id, theme).child(label).on_click(cx.listener(
                move |this, _, window, cx| this.on_gallery_action(&action, window, cx),
            ))
        };

        div()
            .flex()
            .flex_wrap()
            .gap_2()
            .child(action_button(
                "toggle-loading",
                t(self.locale, "gallery-toggle-loading"),
                GalleryAction::ToggleLoading,
            ))
            .child(action_button(
                "toggle-error",
                t(self.locale, "gallery-toggle-error"),
                GalleryAction::ToggleError,
            ))
            .child(action_button(
                "toggle-print",
                t(self.locale, "gallery-toggle-print"),
                GalleryAction::TogglePrintPreview,
            ))
            .child(
                Button::negative("break-render", theme)
                    .child(t(self.locale, "gallery-break-render"))
                    .on_click(cx.listener(|this, _, _, cx| this.toggle_broken(cx))),
            )
            .child(
                Button::new("toggle-theme", theme)
                    .button_type(ButtonType::Important)
                    .child(t(self.locale, "gallery-toggle-theme"))
                    .on_click(cx.listener(|this, _, _, cx| this.toggle_theme(cx))),
            )
            .child(
                Button::new("toggle-locale", theme)
                    .button_type(ButtonType::Important)
                    .child(t(self.locale, "gallery-toggle-locale"))
                    .on_click(cx.listener(|this, _, _, cx| this.toggle_locale(cx))),
            )
    }

    fn render_fields(&self, cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .flex()
            .flex_col()
            .gap_2()
            .max_w(px(420.0))
            .child(
                TextInput::new(&self.name_field)
                    .when_some(self.name_error.clone(), |input, error| input.error(error)),
            )
            .child(TextArea::new(&self.notes_field))
            .child(
                Button::submit("submit", self.theme)
                    .child(t(self.locale, "gallery-submit"))
                    .on_click(cx.listener(|this, _, _, cx| this.submit(cx))),
            )
    }
}

impl Render for Gallery {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .id("gallery")
            .key_context("Gallery")
            .track_focus(&self.focus_handle)
            .on_action(cx.listener(Self::on_gallery_action))
            .size_full()
            .overflow_y_scroll()
            .bg(self.theme.module_bg())
            .text_color(self.theme.module_text())
            .p_4()
            .flex()
            .flex_col()
            .gap_4()
            .child(section_title(t(self.locale, "gallery-buttons")))
            .child(self.render_buttons())
            .child(section_title(t(self.locale, "gallery-modules")))
            .child(self.render_toolbar(cx))
            .child(
                div()
                    .flex()
                    .flex_wrap()
                    .child(self.data_module.clone())
                    .child(self.notes_module.clone())
                    .child(self.test_module.clone())
                    .child(self.fragile_module.clone()),
            )
            .child(section_title(t(self.locale, "gallery-fields")))
            .child(self.render_fields(cx))
    }
}
