//! State of a single outstanding asynchronous operation, such as posting a task.

use crate::error::AlreadyInFlight;

/// Tracks one operation from start to outcome.
///
/// While `InFlight` the triggering control stays disabled and a second
/// [`start`](PendingOperation::start) is refused. There is no cancellation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PendingOperation<T, E> {
    #[default]
    Idle,
    InFlight,
    Succeeded(T),
    Failed(E),
}

impl<T, E> PendingOperation<T, E> {
    pub fn start(&mut self) -> Result<(), AlreadyInFlight> {
        if self.is_in_flight() {
            return Err(AlreadyInFlight);
        }
        *self = PendingOperation::InFlight;
        Ok(())
    }

    /// Records the outcome. Ignored unless an operation is in flight.
    pub fn finish(&mut self, outcome: Result<T, E>) {
        if !self.is_in_flight() {
            tracing::warn!("outcome arrived with no operation in flight");
            return;
        }
        *self = match outcome {
            Ok(value) => PendingOperation::Succeeded(value),
            Err(error) => PendingOperation::Failed(error),
        };
    }

    /// Clears a finished outcome, e.g. when its notice is dismissed.
    pub fn dismiss(&mut self) {
        if !self.is_in_flight() {
            *self = PendingOperation::Idle;
        }
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self, PendingOperation::InFlight)
    }

    pub fn succeeded(&self) -> Option<&T> {
        match self {
            PendingOperation::Succeeded(value) => Some(value),
            _ => None,
        }
    }

    pub fn failed(&self) -> Option<&E> {
        match self {
            PendingOperation::Failed(error) => Some(error),
            _ => None,
        }
    }
}
