//! Gesture entry points.
//!
//! [`TriggerHandler`] turns gestures into cues and, while no run is active,
//! into a fresh path selection. It is called from the touch collaborator's
//! delivery context and never blocks: the only shared work is one short
//! critical section on the [`SharedSelection`].
//!
//! | Gesture | Cue (always)                         | When idle      |
//! |---------|--------------------------------------|----------------|
//! | tap     | ouch + angry face (temporary)        | start PathA    |
//! | caress  | purr                                 | start PathB    |
//! | fling   | purr + laughing face (temporary)     | -              |
//! | touch   | -                                    | -              |

use log::{debug, info};

use super::commands::Gesture;
use super::events::AppEvent;
use super::ports::{CuePort, EventSink};
use crate::config::{LatchPolicy, SystemConfig};
use crate::fsm::PathId;
use crate::fsm::command::{Expression, Sound};
use crate::fsm::selection::{Selection, SharedSelection};

/// Result of one gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// The selection was idle and now runs `path`.
    Started(PathId),
    /// A run was already active; only the cue fired.
    Ignored,
    /// The gesture never selects a path.
    CueOnly,
}

pub struct TriggerHandler<'a> {
    selection: &'a SharedSelection,
    tick_period_ms: u32,
    latch_policy: LatchPolicy,
    tap_expression_ms: u32,
    fling_expression_ms: u32,
}

impl<'a> TriggerHandler<'a> {
    pub fn new(selection: &'a SharedSelection, config: &SystemConfig) -> Self {
        Self {
            selection,
            tick_period_ms: config.tick_period_ms,
            latch_policy: config.latch_policy,
            tap_expression_ms: config.tap_expression_ms,
            fling_expression_ms: config.fling_expression_ms,
        }
    }

    /// Route a gesture to its entry point.
    pub fn handle(
        &self,
        gesture: Gesture,
        cues: &mut impl CuePort,
        sink: &mut impl EventSink,
    ) -> TriggerOutcome {
        match gesture {
            Gesture::Tap => self.on_tap(cues, sink),
            Gesture::Caress => self.on_caress(cues, sink),
            Gesture::Fling => self.on_fling(cues),
            Gesture::Touch => self.on_touch(),
        }
    }

    pub fn on_tap(&self, cues: &mut impl CuePort, sink: &mut impl EventSink) -> TriggerOutcome {
        cues.play(Sound::Ouch);
        cues.set_temporary_expression(Expression::Angry, self.tap_expression_ms, Expression::Normal);
        let reset_latch = self.latch_policy == LatchPolicy::ResetOnTap;
        self.try_start(PathId::PathA, Gesture::Tap, reset_latch, sink)
    }

    pub fn on_caress(&self, cues: &mut impl CuePort, sink: &mut impl EventSink) -> TriggerOutcome {
        cues.play(Sound::Purr);
        self.try_start(PathId::PathB, Gesture::Caress, false, sink)
    }

    pub fn on_fling(&self, cues: &mut impl CuePort) -> TriggerOutcome {
        cues.play(Sound::Purr);
        cues.set_temporary_expression(
            Expression::Laughing,
            self.fling_expression_ms,
            Expression::Normal,
        );
        TriggerOutcome::CueOnly
    }

    pub fn on_touch(&self) -> TriggerOutcome {
        TriggerOutcome::CueOnly
    }

    fn try_start(
        &self,
        path: PathId,
        gesture: Gesture,
        reset_latch: bool,
        sink: &mut impl EventSink,
    ) -> TriggerOutcome {
        let tick_period_ms = self.tick_period_ms;
        let started = self.selection.update(|s| {
            if s.active {
                return false;
            }
            *s = Selection {
                path: Some(path),
                tick_period_ms,
                active: true,
                phase: 0,
                tick_count: 0,
                ever_completed: s.ever_completed && !reset_latch,
                run: s.run.wrapping_add(1),
            };
            true
        });

        if started {
            info!("{:?}: starting {} @ {}ms", gesture, path.name(), tick_period_ms);
            sink.emit(&AppEvent::PathStarted { path, gesture });
            TriggerOutcome::Started(path)
        } else {
            debug!("{:?}: run in progress, selection unchanged", gesture);
            sink.emit(&AppEvent::TriggerIgnored { gesture });
            TriggerOutcome::Ignored
        }
    }
}
