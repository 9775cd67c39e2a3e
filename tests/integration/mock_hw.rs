//! Mock robot adapter for integration tests.
//!
//! Records every motor and cue call so tests can assert on the full command
//! history without a robot.

use pathrunner::app::events::AppEvent;
use pathrunner::app::ports::{CuePort, EventSink, MotorPort};
use pathrunner::error::ActuatorError;
use pathrunner::fsm::command::{Expression, MotorCommand, Sound};

// ── Call record ───────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum RobotCall {
    Motors(MotorCommand),
    Face(Expression),
    TemporaryFace {
        expression: Expression,
        duration_ms: u32,
        revert_to: Expression,
    },
    Sound(Sound),
}

// ── MockRobot ─────────────────────────────────────────────────

pub struct MockRobot {
    pub calls: Vec<RobotCall>,
    /// While set, every `set_motors` fails.
    pub link_down: bool,
    pub failed_attempts: u32,
}

#[allow(dead_code)]
impl MockRobot {
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            link_down: false,
            failed_attempts: 0,
        }
    }

    pub fn motor_commands(&self) -> Vec<MotorCommand> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                RobotCall::Motors(m) => Some(*m),
                _ => None,
            })
            .collect()
    }

    pub fn sounds(&self) -> Vec<Sound> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                RobotCall::Sound(s) => Some(*s),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl Default for MockRobot {
    fn default() -> Self {
        Self::new()
    }
}

impl MotorPort for MockRobot {
    fn set_motors(&mut self, command: MotorCommand) -> Result<(), ActuatorError> {
        if self.link_down {
            self.failed_attempts += 1;
            return Err(ActuatorError::Communication);
        }
        self.calls.push(RobotCall::Motors(command));
        Ok(())
    }
}

impl CuePort for MockRobot {
    fn set_expression(&mut self, expression: Expression) {
        self.calls.push(RobotCall::Face(expression));
    }

    fn set_temporary_expression(&mut self, expression: Expression, duration_ms: u32, revert_to: Expression) {
        self.calls.push(RobotCall::TemporaryFace {
            expression,
            duration_ms,
            revert_to,
        });
    }

    fn play(&mut self, sound: Sound) {
        self.calls.push(RobotCall::Sound(sound));
    }
}

// ── RecordingSink ─────────────────────────────────────────────

pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}
