//! Value types a phase emits each tick: one motor command plus an optional
//! face/sound cue.

/// Wheel target used by every scripted phase (degrees per command window).
pub const DEFAULT_TARGET: i16 = 90;

/// One `setMotors` call: per-side speed and target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotorCommand {
    pub left_speed: i16,
    pub left_target: i16,
    pub right_speed: i16,
    pub right_target: i16,
}

impl MotorCommand {
    /// Both wheels forward at different speeds, default target.
    pub const fn drive(left_speed: i16, right_speed: i16) -> Self {
        Self {
            left_speed,
            left_target: DEFAULT_TARGET,
            right_speed,
            right_target: DEFAULT_TARGET,
        }
    }

    /// Both wheels at the same speed.
    pub const fn straight(speed: i16) -> Self {
        Self::drive(speed, speed)
    }

    /// Zero speed on both sides.
    pub const fn stop() -> Self {
        Self::straight(0)
    }
}

/// Faces the display collaborator knows how to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expression {
    Normal,
    Angry,
    Laughing,
}

/// Sound clips the audio collaborator can play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sound {
    Ouch,
    Purr,
    Angry,
}

/// Cue fired alongside a phase's motor command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PhaseCue {
    pub expression: Option<Expression>,
    pub sound: Option<Sound>,
}

impl PhaseCue {
    pub const NONE: Self = Self {
        expression: None,
        sound: None,
    };

    pub const fn face(expression: Expression) -> Self {
        Self {
            expression: Some(expression),
            sound: None,
        }
    }

    pub const fn face_and_sound(expression: Expression, sound: Sound) -> Self {
        Self {
            expression: Some(expression),
            sound: Some(sound),
        }
    }
}
