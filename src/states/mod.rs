//! State Layer
//!
//! Plain state objects with pure transitions. Components own one of these
//! per instance and drive it from GPUI events:
//!
//! ```text
//! UI event → dispatch(event) → next state + effect → notify → UI refresh
//! ```

mod boundary;
mod in_flight;
mod module;
mod retry;
mod settings;
mod shake;

pub use boundary::*;
pub use in_flight::*;
pub use module::*;
pub use retry::*;
pub use settings::*;
pub use shake::*;
