//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use gpui::{
    AnyView, App, AppContext, Application, Bounds, TitlebarOptions, WindowBounds, WindowOptions,
    px,
};
use gpui_component::Root;
use tracing::{error, info, warn};

use crate::app::gallery::Gallery;
use crate::constants::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};
use crate::helpers::{MenuAction, new_key_bindings};
use crate::i18n::t;
use crate::states::UiSettings;
use crate::theme::Theme;

/// Run the component gallery
pub fn run_app() {
    let settings = UiSettings::try_load().unwrap_or_else(|e| {
        warn!(error = %e, "Failed to load settings, using defaults");
        UiSettings::new()
    });
    let locale = settings.locale();
    let theme = settings.resolve_theme().unwrap_or_else(|e| {
        warn!(error = %e, "Invalid base color in settings, ignoring it");
        Theme::for_mode(settings.theme_mode())
    });
    info!(locale = locale.code(), mode = ?settings.theme_mode(), "Resolved UI settings");

    Application::new()
        .with_assets(gpui_component_assets::Assets)
        .run(move |cx: &mut App| {
            gpui_component::init(cx);

            cx.on_action(|action: &MenuAction, cx: &mut App| match action {
                MenuAction::Quit => cx.quit(),
            });
            cx.bind_keys(new_key_bindings());

            // Quit the app when all windows are closed (macOS behavior)
            cx.on_window_closed(|cx| {
                if cx.windows().is_empty() {
                    cx.quit();
                }
            })
            .detach();

            let bounds = Bounds::centered(
                None,
                gpui::size(px(DEFAULT_WINDOW_WIDTH), px(DEFAULT_WINDOW_HEIGHT)),
                cx,
            );
            let window_options = WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(bounds)),
                titlebar: Some(TitlebarOptions {
                    title: Some(t(locale, "app-title")),
                    appears_transparent: false,
                    traffic_light_position: None,
                }),
                ..Default::default()
            };

            let opened: anyhow::Result<_> = cx.open_window(window_options, |window, cx| {
                let gallery = cx.new(|cx| Gallery::new(settings, theme, window, cx));
                cx.new(|cx| Root::new(AnyView::from(gallery), window, cx))
            });
            if let Err(e) = opened {
                error!(error = %e, "Failed to open gallery window");
                cx.quit();
                return;
            }

            cx.activate(true);
        });
}
