//! Outbound application events.
//!
//! The trigger handler and the stepper emit these through the
//! [`EventSink`](super::ports::EventSink) port. Adapters decide what to do
//! with them.

use super::commands::Gesture;
use crate::error::ActuatorError;
use crate::fsm::PathId;

/// Structured events emitted by the application core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// A gesture selected and armed a path.
    PathStarted { path: PathId, gesture: Gesture },

    /// A path-starting gesture arrived while a run was active.
    TriggerIgnored { gesture: Gesture },

    /// The running path moved between phases.
    PhaseChanged { path: PathId, from: usize, to: usize },

    /// The running path reached its terminal phase and released the selection.
    PathFinished { path: PathId },

    /// This tick's motor command was not delivered; state left as it was.
    MotorFault {
        path: PathId,
        phase: usize,
        error: ActuatorError,
    },
}
