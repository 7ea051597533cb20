//! Helper Utilities
//!
//! Directory management and keyboard actions.

mod action;
mod fs;

pub use action::*;
pub use fs::*;
