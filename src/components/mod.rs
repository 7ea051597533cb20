//! UI Components
//!
//! - `primitives`: button, fields, spinner and click shaker
//! - `composite`: module card and its fallback panel

pub mod composite;
pub mod primitives;
