//! Service Layer
//!
//! Async plumbing behind the components: the refetch callback type and the
//! tokio bridge used by refetches that talk to network clients.

mod refetch;
mod runtime;

pub use refetch::*;
pub use runtime::*;
