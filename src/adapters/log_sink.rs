//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to the
//! `log` facade. A telemetry adapter would implement the same trait.

use log::{info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] as a one-line tagged record.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::PathStarted { path, gesture } => {
                info!("PATH  | start {} ({:?})", path.name(), gesture);
            }
            AppEvent::TriggerIgnored { gesture } => {
                info!("PATH  | {:?} ignored, run in progress", gesture);
            }
            AppEvent::PhaseChanged { path, from, to } => {
                info!("PHASE | {} {} -> {}", path.name(), from, to);
            }
            AppEvent::PathFinished { path } => {
                info!("PATH  | {} done", path.name());
            }
            AppEvent::MotorFault { path, phase, error } => {
                warn!("FAULT | {} phase {}: {}", path.name(), phase, error);
            }
        }
    }
}
