//! Module Display State
//!
//! Caller-facing props of a module and the pure rules that decide which of
//! the error panel, loading overlay and content is shown.

use gpui::SharedString;

use super::RetryState;

/// Props the caller controls and may replace at any time
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleProps {
    /// Data for the module is being fetched
    pub loading: bool,
    /// Domain error reported by the caller
    pub error: Option<SharedString>,
    /// Force the error panel once, until the first retry settles
    pub test_refetch: bool,
    /// Keep the module visible in print preview
    pub print: bool,
}

impl ModuleProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn error(mut self, error: impl Into<SharedString>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn clear_error(mut self) -> Self {
        self.error = None;
        self
    }

    pub fn test_refetch(mut self, test_refetch: bool) -> Self {
        self.test_refetch = test_refetch;
        self
    }

    pub fn print(mut self, print: bool) -> Self {
        self.print = print;
        self
    }

    /// Whether the caller reports an error
    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }
}

/// What the module emphasizes this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayState {
    Loading,
    Error,
    Normal,
}

/// Whether the error panel is shown
///
/// A real error always shows. The forced test panel shows only while no retry
/// has settled yet and the module is not loading.
pub fn shows_error(props: &ModuleProps, retry: &RetryState) -> bool {
    props.has_error() || (props.test_refetch && !retry.has_tested_refetch() && !props.loading)
}

/// Derive the display state
pub fn display_state(props: &ModuleProps, retry: &RetryState) -> DisplayState {
    if shows_error(props, retry) {
        DisplayState::Error
    } else if props.loading {
        DisplayState::Loading
    } else {
        DisplayState::Normal
    }
}

/// Content opacity; loading always hides content, error or not
pub fn content_opacity(props: &ModuleProps) -> f32 {
    if props.loading { 0.0 } else { 1.0 }
}

/// Whether the module is visible given the print preview switch
pub fn visible_in_print(props: &ModuleProps, printing: bool) -> bool {
    !printing || props.print
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::states::{RetryEvent, settle_refetch};
    use std::time::Duration;

    fn tested_state() -> RetryState {
        let mut state = RetryState::new();
        state.dispatch(RetryEvent::RetryPressed);
        state.dispatch(RetryEvent::RefetchSettled);
        state
    }

    #[test]
    fn test_loading_without_error_never_shows_error() {
        for test_refetch in [false, true] {
            for retry in [RetryState::new(), tested_state()] {
                let props = ModuleProps::new().loading(true).test_refetch(test_refetch);
                assert!(!shows_error(&props, &retry));
                assert_eq!(display_state(&props, &retry), DisplayState::Loading);
            }
        }
    }

    #[test]
    fn test_error_always_shows() {
        for loading in [false, true] {
            for test_refetch in [false, true] {
                for retry in [RetryState::new(), tested_state()] {
                    let props = ModuleProps::new()
                        .loading(loading)
                        .test_refetch(test_refetch)
                        .error("x");
                    assert!(shows_error(&props, &retry));
                    assert_eq!(display_state(&props, &retry), DisplayState::Error);
                }
            }
        }
    }

    #[test]
    fn test_test_refetch_shows_once() {
        let props = ModuleProps::new().test_refetch(true);
        let mut retry = RetryState::new();
        assert!(shows_error(&props, &retry));

        retry.dispatch(RetryEvent::RetryPressed);
        assert!(shows_error(&props, &retry));

        retry.dispatch(RetryEvent::RefetchSettled);
        assert!(!shows_error(&props, &retry));

        // Toggling the flag does not bring it back
        let toggled = props.clone().test_refetch(false).test_refetch(true);
        assert!(!shows_error(&toggled, &retry));
    }

    #[test]
    fn test_content_opacity_follows_loading_only() {
        assert_eq!(content_opacity(&ModuleProps::new().loading(true).error("x")), 0.0);
        assert_eq!(content_opacity(&ModuleProps::new().error("x")), 1.0);
        assert_eq!(content_opacity(&ModuleProps::new()), 1.0);
    }

    #[test]
    fn test_print_visibility() {
        let plain = ModuleProps::new();
        let printable = ModuleProps::new().print(true);
        assert!(visible_in_print(&plain, false));
        assert!(!visible_in_print(&plain, true));
        assert!(visible_in_print(&printable, true));
    }

    #[tokio::test]
    async fn test_retry_with_delayed_refetch() {
        let mut props = ModuleProps::new().error("x");
        let mut retry = RetryState::new();
        assert!(shows_error(&props, &retry));
        assert!(!retry.is_refetching());

        retry.dispatch(RetryEvent::RetryPressed);
        assert!(retry.is_refetching());

        let event = settle_refetch(async {
            tokio::time::sleep(Duration::from_millis(100)).await;
            Ok(())
        })
        .await;
        retry.dispatch(event);
        assert!(!retry.is_refetching());
        assert!(shows_error(&props, &retry));

        props = props.clear_error();
        retry.dispatch(RetryEvent::PropsChanged {
            error: props.has_error(),
        });
        assert!(!shows_error(&props, &retry));
        assert_eq!(display_state(&props, &retry), DisplayState::Normal);
    }
}
