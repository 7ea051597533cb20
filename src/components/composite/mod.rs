//! Composite Components
//!
//! The module card and its error boundary fallback.

mod error_boundary;
mod module;

pub use error_boundary::*;
pub use module::*;

use gpui::{Div, Styled, div, px};

use crate::constants::MODULE_MARGIN;
use crate::theme::Theme;

/// Card wrapper shared by the module and its fallback
pub(crate) fn card_frame(theme: &Theme) -> Div {
    div()
        .relative()
        .flex()
        .flex_col()
        .flex_grow()
        .flex_shrink()
        .min_h(px(0.0))
        .m(px(MODULE_MARGIN))
        .rounded_md()
        .overflow_hidden()
        .shadow_lg()
        .bg(theme.module_bg())
        .text_color(theme.module_text())
}
