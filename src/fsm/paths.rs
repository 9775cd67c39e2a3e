//! The two scripted paths.
//!
//! ```text
//!  PathA (tap)
//!   0 cruise ─75─▶ 1 veer ─15─▶ 2 pause ─2─▶ 3 cruise ─16─▶ 4 hard veer
//!                   │                                          │ ≥19, latch
//!                   └──[latched]──────────────┐                ▼
//!                                             ▼        5 sprint ─55─▶ 6 done
//!
//!  PathB (caress)
//!   0..4 as PathA, then 5 cruise ─20─▶ 6 veer ─20─▶ 7 cruise ─20─▶
//!   8 veer right ─20─▶ 9 cruise ─5─▶ 10 veer right ─10─▶ 11 cruise ─50─▶ 12 done
//!   phase 1 skips to 6 when latched.
//! ```

use super::command::{Expression, MotorCommand, PhaseCue, Sound};
use super::{ExitRule, LatchRule, PathId, PathTable, PhaseAction, PhaseDescriptor};

const CRUISE: MotorCommand = MotorCommand::straight(40);
const VEER_LEFT: MotorCommand = MotorCommand::drive(10, 40);
const HARD_VEER_LEFT: MotorCommand = MotorCommand::drive(5, 40);
const VEER_RIGHT: MotorCommand = MotorCommand::drive(40, 10);
const SPRINT: MotorCommand = MotorCommand::straight(70);

const NORMAL_FACE: PhaseCue = PhaseCue::face(Expression::Normal);
const ANGRY: PhaseCue = PhaseCue::face_and_sound(Expression::Angry, Sound::Angry);

/// Phase index both paths jump to from phase 1 once latched.
pub const LATCHED_SKIP_TARGET: usize = 6;

/// Phases 0-4, identical on both paths.
const OPENING: [PhaseDescriptor; 5] = [
    PhaseDescriptor::drive("cruise", CRUISE, NORMAL_FACE, ExitRule::At(75), LatchRule::None),
    PhaseDescriptor::drive(
        "veer",
        VEER_LEFT,
        ANGRY,
        ExitRule::AtLeast(15),
        LatchRule::SkipWhenLatched(LATCHED_SKIP_TARGET),
    ),
    PhaseDescriptor::drive("pause", MotorCommand::stop(), PhaseCue::NONE, ExitRule::At(2), LatchRule::None),
    PhaseDescriptor::drive("cruise", CRUISE, PhaseCue::NONE, ExitRule::At(16), LatchRule::None),
    PhaseDescriptor::drive(
        "hard veer",
        HARD_VEER_LEFT,
        PhaseCue::NONE,
        ExitRule::AtLeast(19),
        LatchRule::SetOnExit,
    ),
];

const PATH_A_PHASES: [PhaseDescriptor; 7] = [
    OPENING[0],
    OPENING[1],
    OPENING[2],
    OPENING[3],
    OPENING[4],
    PhaseDescriptor::drive("sprint", SPRINT, PhaseCue::NONE, ExitRule::At(55), LatchRule::None),
    PhaseDescriptor::finish("done"),
];

const PATH_B_PHASES: [PhaseDescriptor; 13] = [
    OPENING[0],
    OPENING[1],
    OPENING[2],
    OPENING[3],
    OPENING[4],
    PhaseDescriptor::drive("cruise", CRUISE, PhaseCue::NONE, ExitRule::At(20), LatchRule::None),
    PhaseDescriptor::drive("veer", VEER_LEFT, PhaseCue::NONE, ExitRule::At(20), LatchRule::None),
    PhaseDescriptor::drive("cruise", CRUISE, PhaseCue::NONE, ExitRule::At(20), LatchRule::None),
    PhaseDescriptor::drive("veer right", VEER_RIGHT, PhaseCue::NONE, ExitRule::At(20), LatchRule::None),
    PhaseDescriptor::drive("cruise", CRUISE, PhaseCue::NONE, ExitRule::At(5), LatchRule::None),
    PhaseDescriptor::drive("veer right", VEER_RIGHT, PhaseCue::NONE, ExitRule::At(10), LatchRule::None),
    PhaseDescriptor::drive("cruise", CRUISE, PhaseCue::NONE, ExitRule::At(50), LatchRule::None),
    PhaseDescriptor::finish("done"),
];

pub static PATH_A: PathTable = PathTable {
    id: PathId::PathA,
    phases: &PATH_A_PHASES,
};

pub static PATH_B: PathTable = PathTable {
    id: PathId::PathB,
    phases: &PATH_B_PHASES,
};

/// Look up the table for a path.
pub fn table_for(path: PathId) -> &'static PathTable {
    match path {
        PathId::PathA => &PATH_A,
        PathId::PathB => &PATH_B,
    }
}

/// Ticks from trigger to entering the terminal phase when no skip is taken.
pub fn nominal_ticks(table: &PathTable) -> u32 {
    table
        .phases
        .iter()
        .filter_map(|p| match p.action {
            PhaseAction::Drive { exit, .. } => Some(exit.ticks()),
            PhaseAction::Finish => None,
        })
        .sum()
}
