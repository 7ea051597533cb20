//! Keyboard Actions and Shortcuts

use gpui::{Action, KeyBinding};
use schemars::JsonSchema;
use serde::Deserialize;

/// Application-level actions
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum MenuAction {
    /// Quit the application
    Quit,
}

/// Gallery actions
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum GalleryAction {
    /// Toggle print preview for all modules
    TogglePrintPreview,
    /// Toggle the loading flag of the data module
    ToggleLoading,
    /// Toggle the error flag of the data module
    ToggleError,
}

/// Create global keyboard bindings
pub fn new_key_bindings() -> Vec<KeyBinding> {
    vec![
        KeyBinding::new("secondary-q", MenuAction::Quit, None),
        KeyBinding::new("secondary-p", GalleryAction::TogglePrintPreview, None),
        KeyBinding::new("secondary-l", GalleryAction::ToggleLoading, None),
        KeyBinding::new("secondary-e", GalleryAction::ToggleError, None),
    ]
}
