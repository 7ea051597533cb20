//! Theme - Colors and Typography
//!
//! A resolved [`Theme`] value is passed into every component constructor.
//! Nothing in the kit looks the theme up from ambient context.

pub mod colors;
pub mod typography;

pub use colors::*;
pub use typography::*;
