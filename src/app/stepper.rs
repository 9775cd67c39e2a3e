//! Periodic path stepper: one call per tick from the periodic driver.
//!
//! ```text
//!  SharedSelection ──snapshot──▶ plan_tick ──▶ cue + set_motors ──ok──▶ commit
//!                                                       │
//!                                                      err ──▶ log, leave state
//! ```
//!
//! The lock is held only to take the snapshot and to commit; port calls run
//! outside it so the trigger context is never held up by the motor link.

use log::{debug, info, warn};

use super::events::AppEvent;
use super::ports::{CuePort, EventSink, MotorPort};
use crate::error::ActuatorError;
use crate::fsm::command::PhaseCue;
use crate::fsm::selection::{Selection, SharedSelection};
use crate::fsm::{PathId, TickPlan, plan_tick};

/// What one `step()` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// No path selected; nothing issued.
    Idle,
    /// Drove `phase` this tick; `next_phase` is where the next tick starts.
    Drove {
        path: PathId,
        phase: usize,
        next_phase: usize,
    },
    /// The terminal phase released the selection.
    Finished(PathId),
    /// The motor command failed; selection unchanged.
    MotorFault(ActuatorError),
    /// The selection changed between snapshot and commit; nothing committed.
    Superseded,
}

pub struct PathStepper<'a> {
    selection: &'a SharedSelection,
    /// Ticks that committed while a path was running.
    ticks: u64,
    /// Ticks lost to motor communication failures.
    faults: u64,
}

impl<'a> PathStepper<'a> {
    pub fn new(selection: &'a SharedSelection) -> Self {
        Self {
            selection,
            ticks: 0,
            faults: 0,
        }
    }

    /// Advance the selected path by one tick.
    ///
    /// `hw` satisfies both [`MotorPort`] and [`CuePort`] so a single robot
    /// adapter can be passed without a double mutable borrow.
    pub fn step(
        &mut self,
        hw: &mut (impl MotorPort + CuePort),
        sink: &mut impl EventSink,
    ) -> StepOutcome {
        let current = self.selection.snapshot();

        match plan_tick(&current) {
            TickPlan::Idle => StepOutcome::Idle,

            TickPlan::Drive {
                path,
                phase,
                motors,
                cue,
                next,
            } => {
                fire_cue(hw, cue);

                if let Err(error) = hw.set_motors(motors) {
                    self.faults += 1;
                    warn!(
                        "{} phase {}: {} (tick {} kept)",
                        path.name(),
                        phase,
                        error,
                        current.tick_count
                    );
                    sink.emit(&AppEvent::MotorFault { path, phase, error });
                    return StepOutcome::MotorFault(error);
                }

                if !self.commit(&current, next) {
                    return StepOutcome::Superseded;
                }
                self.ticks += 1;

                if next.phase == phase {
                    debug!("{} phase {} tick {}", path.name(), phase, next.tick_count);
                } else {
                    info!("{} phase: {} -> {}", path.name(), phase, next.phase);
                    sink.emit(&AppEvent::PhaseChanged {
                        path,
                        from: phase,
                        to: next.phase,
                    });
                }

                StepOutcome::Drove {
                    path,
                    phase,
                    next_phase: next.phase,
                }
            }

            TickPlan::Finish { path, next } => {
                if !self.commit(&current, next) {
                    return StepOutcome::Superseded;
                }
                self.ticks += 1;
                info!("{} finished, ready for the next trigger", path.name());
                sink.emit(&AppEvent::PathFinished { path });
                StepOutcome::Finished(path)
            }
        }
    }

    /// Ticks committed since construction.
    pub fn tick_count(&self) -> u64 {
        self.ticks
    }

    /// Ticks dropped because the motor link failed.
    pub fn fault_count(&self) -> u64 {
        self.faults
    }

    // ── Internal ──────────────────────────────────────────────

    /// Store `next` only if nobody touched the selection since `seen`.
    fn commit(&self, seen: &Selection, next: Selection) -> bool {
        let committed = self.selection.update(|s| {
            if s == seen {
                *s = next;
                true
            } else {
                false
            }
        });
        if !committed {
            warn!("selection changed mid-tick (run {}), dropping tick", seen.run);
        }
        committed
    }
}

fn fire_cue(cues: &mut impl CuePort, cue: PhaseCue) {
    if let Some(sound) = cue.sound {
        cues.play(sound);
    }
    if let Some(expression) = cue.expression {
        cues.set_expression(expression);
    }
}
