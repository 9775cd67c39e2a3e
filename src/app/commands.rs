//! Inbound gestures delivered by the touch-recognition collaborator.
//!
//! [`TriggerHandler::handle`](super::trigger::TriggerHandler::handle) routes
//! each one to its entry point.

/// Gestures the touch layer reports, at most once per physical gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    /// Short tap; starts PathA when idle.
    Tap,
    /// Slow stroke; starts PathB when idle.
    Caress,
    /// Quick swipe; cue only.
    Fling,
    /// Raw touch; ignored.
    Touch,
}

impl Gesture {
    /// Parse the lowercase name used by the simulation console.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "tap" => Some(Self::Tap),
            "caress" => Some(Self::Caress),
            "fling" => Some(Self::Fling),
            "touch" => Some(Self::Touch),
            _ => None,
        }
    }
}
