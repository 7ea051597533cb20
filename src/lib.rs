//! AH Kit Library
//!
//! Themeable GPUI components: a button with shake feedback for disabled
//! clicks, single- and multi-line fields, and a module card with loading,
//! error, retry and print states.

pub mod app;
pub mod components;
pub mod constants;
pub mod error;
pub mod helpers;
pub mod i18n;
pub mod services;
pub mod states;
pub mod theme;
