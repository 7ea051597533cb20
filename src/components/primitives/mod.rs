//! Primitive Components
//!
//! Buttons, fields, the click shaker and the spinner.

mod button;
mod click_shaker;
mod spinner;
mod submit_button;
mod text_input;

pub use button::*;
pub use click_shaker::*;
pub use spinner::*;
pub use submit_button::*;
pub use text_input::*;
