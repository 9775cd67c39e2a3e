//! Data-driven phase machine.
//!
//! Each path is a fixed table of phase descriptors:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  PathTable                                                   │
//! │  ┌───────┬──────────────┬──────────┬───────────┬──────────┐  │
//! │  │ phase │ MotorCommand │ PhaseCue │ ExitRule  │ LatchRule│  │
//! │  ├───────┼──────────────┼──────────┼───────────┼──────────┤  │
//! │  │ 0     │ (40, 40)     │ Normal   │ At(75)    │ -        │  │
//! │  │ 1     │ (10, 40)     │ Angry    │ AtLeast   │ Skip→6   │  │
//! │  │ ...   │              │          │           │          │  │
//! │  │ last  │ Finish       │          │           │          │  │
//! │  └───────┴──────────────┴──────────┴───────────┴──────────┘  │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! [`plan_tick`] is pure: it takes a [`Selection`] snapshot and returns the
//! command to issue this tick together with the selection to commit if that
//! command is delivered. The stepper owns all I/O and the commit.

pub mod command;
pub mod paths;
pub mod selection;

use command::{MotorCommand, PhaseCue};
use selection::Selection;

// ---------------------------------------------------------------------------
// Path identity
// ---------------------------------------------------------------------------

/// The scripted trajectories. Idle is `Option::None` at the use site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathId {
    /// Started by a tap.
    PathA,
    /// Started by a caress.
    PathB,
}

impl PathId {
    pub fn name(self) -> &'static str {
        match self {
            Self::PathA => "PathA",
            Self::PathB => "PathB",
        }
    }
}

// ---------------------------------------------------------------------------
// Phase descriptors
// ---------------------------------------------------------------------------

/// When a drive phase hands over to the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitRule {
    /// Tick counter equals `n`.
    At(u32),
    /// Tick counter has reached `n`.
    AtLeast(u32),
}

impl ExitRule {
    pub fn is_met(self, ticks: u32) -> bool {
        match self {
            Self::At(n) => ticks == n,
            Self::AtLeast(n) => ticks >= n,
        }
    }

    /// Ticks spent in the phase when entered with a zero counter.
    pub fn ticks(self) -> u32 {
        match self {
            Self::At(n) | Self::AtLeast(n) => n,
        }
    }
}

/// Interaction with the "completed once" latch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LatchRule {
    None,
    /// Jump straight to the given phase when the latch is already set.
    SkipWhenLatched(usize),
    /// Set the latch when leaving through the exit rule.
    SetOnExit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseAction {
    Drive {
        motors: MotorCommand,
        cue: PhaseCue,
        exit: ExitRule,
        latch: LatchRule,
    },
    /// Terminal phase: releases the selection, issues nothing.
    Finish,
}

/// One row of a path table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseDescriptor {
    pub name: &'static str,
    pub action: PhaseAction,
}

impl PhaseDescriptor {
    pub const fn drive(
        name: &'static str,
        motors: MotorCommand,
        cue: PhaseCue,
        exit: ExitRule,
        latch: LatchRule,
    ) -> Self {
        Self {
            name,
            action: PhaseAction::Drive {
                motors,
                cue,
                exit,
                latch,
            },
        }
    }

    pub const fn finish(name: &'static str) -> Self {
        Self {
            name,
            action: PhaseAction::Finish,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self.action, PhaseAction::Finish)
    }
}

/// A path's ordered phases. The last row is always [`PhaseAction::Finish`].
#[derive(Debug)]
pub struct PathTable {
    pub id: PathId,
    pub phases: &'static [PhaseDescriptor],
}

impl PathTable {
    pub fn len(&self) -> usize {
        self.phases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phases.is_empty()
    }

    pub fn terminal_phase(&self) -> usize {
        self.phases.len().saturating_sub(1)
    }

    pub fn phase(&self, index: usize) -> Option<&PhaseDescriptor> {
        self.phases.get(index)
    }
}

// ---------------------------------------------------------------------------
// Tick planning
// ---------------------------------------------------------------------------

/// What one `step()` should do, and what to commit if it succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickPlan {
    /// No path selected.
    Idle,
    /// Issue `motors` (after `cue`), then commit `next`.
    Drive {
        path: PathId,
        phase: usize,
        motors: MotorCommand,
        cue: PhaseCue,
        next: Selection,
    },
    /// Terminal phase reached: commit `next` (idle) without a motor command.
    Finish { path: PathId, next: Selection },
}

impl TickPlan {
    /// The selection this plan commits, if any.
    pub fn next(&self) -> Option<&Selection> {
        match self {
            Self::Idle => None,
            Self::Drive { next, .. } | Self::Finish { next, .. } => Some(next),
        }
    }
}

/// Plan one tick for `sel`.
pub fn plan_tick(sel: &Selection) -> TickPlan {
    let Some(path) = sel.path else {
        return TickPlan::Idle;
    };
    let table = paths::table_for(path);

    let Some(descriptor) = table.phase(sel.phase) else {
        // Unreachable with well-formed tables; release the run rather than spin.
        debug_assert!(false, "{} has no phase {}", path.name(), sel.phase);
        return finish(path, sel);
    };

    match descriptor.action {
        PhaseAction::Finish => finish(path, sel),
        PhaseAction::Drive {
            motors,
            cue,
            exit,
            latch,
        } => {
            let ticks = sel.tick_count.saturating_add(1);
            let mut next = *sel;
            next.tick_count = ticks;

            let target = match latch {
                LatchRule::SkipWhenLatched(to) if sel.ever_completed => Some(to),
                _ if exit.is_met(ticks) => {
                    if latch == LatchRule::SetOnExit {
                        next.ever_completed = true;
                    }
                    Some(sel.phase + 1)
                }
                _ => None,
            };

            if let Some(to) = target {
                next.phase = to.min(table.terminal_phase());
                next.tick_count = 0;
            }

            TickPlan::Drive {
                path,
                phase: sel.phase,
                motors,
                cue,
                next,
            }
        }
    }
}

fn finish(path: PathId, sel: &Selection) -> TickPlan {
    let next = Selection {
        path: None,
        active: false,
        phase: 0,
        tick_count: 0,
        ..*sel
    };
    TickPlan::Finish { path, next }
}
