//! Boundary State
//!
//! Latches the first rendering fault raised inside a module. Once faulted the
//! module shows its fallback panel until an explicit reload.

use std::fmt::Display;

use tracing::error;

use crate::error::Result;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoundaryState {
    fault: Option<String>,
}

impl BoundaryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a fault has been caught
    pub fn is_faulted(&self) -> bool {
        self.fault.is_some()
    }

    /// Message of the caught fault
    pub fn fault(&self) -> Option<&str> {
        self.fault.as_deref()
    }

    /// Record a fault; later faults are ignored until reset
    pub fn catch(&mut self, fault: impl Display) {
        if self.fault.is_none() {
            let message = fault.to_string();
            error!(fault = %message, "Caught render fault, showing fallback");
            self.fault = Some(message);
        }
    }

    /// Pass a successful result through, or latch its error
    pub fn guard<T>(&mut self, result: Result<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                self.catch(e);
                None
            }
        }
    }

    /// Forget the fault after a reload
    pub fn reset(&mut self) {
        self.fault = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_guard_passes_values_through() {
        let mut boundary = BoundaryState::new();
        assert_eq!(boundary.guard(Ok(3)), Some(3));
        assert!(!boundary.is_faulted());
    }

    #[test]
    fn test_first_fault_is_kept() {
        let mut boundary = BoundaryState::new();
        let first: Result<()> = Err(Error::Render {
            message: "first".to_string(),
        });
        assert_eq!(boundary.guard(first), None);
        boundary.catch("second");
        assert_eq!(boundary.fault(), Some("Render error: first"));

        // Still faulted even if content would build again
        assert!(boundary.is_faulted());
        boundary.reset();
        assert!(!boundary.is_faulted());
    }
}
