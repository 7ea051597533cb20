//! Retry State
//!
//! The module's error-retry state machine. The state is a plain value and
//! every change goes through [`RetryState::transition`], so the module view
//! only has to dispatch events and act on the returned effect.
//!
//! ```text
//! Idle ──RetryPressed──▶ Retrying ──RefetchSettled──▶ Idle (tested)
//!                           │
//!                           └──PropsChanged{error: false}──▶ Idle
//! ```

use std::future::Future;

use tracing::{debug, warn};

use crate::error::Result;

/// Retry flags owned by a single module
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RetryState {
    /// A refetch started from the retry button is in flight
    error_refetch: bool,
    /// At least one retry has settled during this module's lifetime
    has_tested_refetch: bool,
}

/// Inputs to the retry state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryEvent {
    /// The retry button on the error panel was pressed
    RetryPressed,
    /// The refetch future finished, either way
    RefetchSettled,
    /// The caller handed the module new props
    PropsChanged {
        /// Whether the new props still carry an error
        error: bool,
    },
}

/// Side effect requested by a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryEffect {
    None,
    /// Start the caller's refetch
    InvokeRefetch,
}

impl RetryState {
    /// Fresh state for a newly mounted module
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the retry button should show its loading state
    pub fn is_refetching(&self) -> bool {
        self.error_refetch
    }

    /// Whether a retry has settled at least once
    pub fn has_tested_refetch(&self) -> bool {
        self.has_tested_refetch
    }

    /// Compute the next state for an event
    pub fn transition(self, event: RetryEvent) -> (Self, RetryEffect) {
        match event {
            RetryEvent::RetryPressed if self.error_refetch => (self, RetryEffect::None),
            RetryEvent::RetryPressed => (
                Self {
                    error_refetch: true,
                    ..self
                },
                RetryEffect::InvokeRefetch,
            ),
            RetryEvent::RefetchSettled => (
                Self {
                    error_refetch: false,
                    has_tested_refetch: true,
                },
                RetryEffect::None,
            ),
            // The error went away without the retry button
            RetryEvent::PropsChanged { error: false } if self.error_refetch => (
                Self {
                    error_refetch: false,
                    ..self
                },
                RetryEffect::None,
            ),
            RetryEvent::PropsChanged { .. } => (self, RetryEffect::None),
        }
    }

    /// Apply an event in place
    pub fn dispatch(&mut self, event: RetryEvent) -> RetryEffect {
        let (next, effect) = self.transition(event);
        if next != *self {
            debug!(?event, from = ?*self, to = ?next, "Retry state changed");
        }
        *self = next;
        effect
    }
}

/// Await a refetch and report it as settled
///
/// Failures are logged and otherwise treated exactly like success; the caller
/// re-signals a persistent problem through the module's `error` prop.
pub async fn settle_refetch<F>(refetch: F) -> RetryEvent
where
    F: Future<Output = Result<()>>,
{
    if let Err(e) = refetch.await {
        warn!(error = %e, "Module refetch failed");
    }
    RetryEvent::RefetchSettled
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use futures::executor::block_on;

    #[test]
    fn test_initial_state() {
        let state = RetryState::new();
        assert!(!state.is_refetching());
        assert!(!state.has_tested_refetch());
    }

    #[test]
    fn test_retry_pressed_sets_refetching_immediately() {
        let mut state = RetryState::new();
        let effect = state.dispatch(RetryEvent::RetryPressed);
        assert_eq!(effect, RetryEffect::InvokeRefetch);
        assert!(state.is_refetching());
        assert!(!state.has_tested_refetch());
    }

    #[test]
    fn test_second_press_while_refetching_is_ignored() {
        let mut state = RetryState::new();
        state.dispatch(RetryEvent::RetryPressed);
        assert_eq!(state.dispatch(RetryEvent::RetryPressed), RetryEffect::None);
        assert!(state.is_refetching());
    }

    #[test]
    fn test_settled_clears_refetching_and_marks_tested() {
        let mut state = RetryState::new();
        state.dispatch(RetryEvent::RetryPressed);
        state.dispatch(RetryEvent::RefetchSettled);
        assert!(!state.is_refetching());
        assert!(state.has_tested_refetch());

        // Tested stays set for the rest of the lifetime
        state.dispatch(RetryEvent::RetryPressed);
        state.dispatch(RetryEvent::PropsChanged { error: false });
        assert!(state.has_tested_refetch());
    }

    #[test]
    fn test_error_cleared_by_props_stops_refetching() {
        let mut state = RetryState::new();
        state.dispatch(RetryEvent::RetryPressed);
        state.dispatch(RetryEvent::PropsChanged { error: false });
        assert!(!state.is_refetching());
        assert!(!state.has_tested_refetch());
    }

    #[test]
    fn test_props_with_error_keep_refetching() {
        let mut state = RetryState::new();
        state.dispatch(RetryEvent::RetryPressed);
        state.dispatch(RetryEvent::PropsChanged { error: true });
        assert!(state.is_refetching());
    }

    #[test]
    fn test_props_change_when_idle_is_noop() {
        let mut state = RetryState::new();
        state.dispatch(RetryEvent::PropsChanged { error: false });
        assert_eq!(state, RetryState::new());
    }

    #[test]
    fn test_settle_refetch_treats_failure_like_success() {
        let ok = block_on(settle_refetch(async { Ok(()) }));
        let failed = block_on(settle_refetch(async {
            Err(Error::Refetch {
                message: "offline".to_string(),
            })
        }));
        assert_eq!(ok, RetryEvent::RefetchSettled);
        assert_eq!(failed, RetryEvent::RefetchSettled);
    }
}
