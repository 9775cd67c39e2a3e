//! Console robot adapter for host simulation.
//!
//! Implements [`MotorPort`] and [`CuePort`] by logging what a real robot
//! would do. Optionally drops every Nth motor command to exercise the
//! stepper's link-failure path.

use log::{debug, info};

use crate::app::ports::{CuePort, MotorPort};
use crate::error::ActuatorError;
use crate::fsm::command::{Expression, MotorCommand, Sound};

pub struct ConsoleRobot {
    label: &'static str,
    /// Fail every Nth `set_motors` call; `None` never fails.
    link_loss_every: Option<u32>,
    attempts: u32,
    last: Option<MotorCommand>,
}

impl ConsoleRobot {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            link_loss_every: None,
            attempts: 0,
            last: None,
        }
    }

    /// Simulate a flaky motor link. `0` disables the injection.
    pub fn with_link_loss_every(mut self, n: u32) -> Self {
        self.link_loss_every = (n > 0).then_some(n);
        self
    }
}

impl MotorPort for ConsoleRobot {
    fn set_motors(&mut self, command: MotorCommand) -> Result<(), ActuatorError> {
        self.attempts = self.attempts.wrapping_add(1);
        if self
            .link_loss_every
            .is_some_and(|n| self.attempts % n == 0)
        {
            return Err(ActuatorError::Communication);
        }

        // Only log changes; the stepper repeats the same command every tick.
        if self.last != Some(command) {
            info!(
                "[{}] motors L={}/{} R={}/{}",
                self.label,
                command.left_speed,
                command.left_target,
                command.right_speed,
                command.right_target
            );
        }
        self.last = Some(command);
        Ok(())
    }
}

impl CuePort for ConsoleRobot {
    fn set_expression(&mut self, expression: Expression) {
        debug!("[{}] face {:?}", self.label, expression);
    }

    fn set_temporary_expression(&mut self, expression: Expression, duration_ms: u32, revert_to: Expression) {
        info!(
            "[{}] face {:?} for {}ms, then {:?}",
            self.label, expression, duration_ms, revert_to
        );
    }

    fn play(&mut self, sound: Sound) {
        info!("[{}] sound {:?}", self.label, sound);
    }
}
