//! Application core: pure domain logic, zero I/O.
//!
//! The gesture entry points ([`trigger`]) and the periodic stepper
//! ([`stepper`]) share one [`SharedSelection`](crate::fsm::selection::SharedSelection).
//! All interaction with the robot happens through **port traits** defined
//! in [`ports`], keeping this layer fully testable without a robot.

pub mod commands;
pub mod events;
pub mod ports;
pub mod stepper;
pub mod trigger;
