//! Port traits: the hexagonal boundary between domain logic and the robot.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ TriggerHandler / PathStepper (domain)
//! ```
//!
//! Driven adapters (motor board, face display, speaker, event sinks, config
//! storage) implement these traits. The domain consumes them via generics
//! injected at call sites, so it never touches a device directly.

use crate::config::SystemConfig;
use crate::error::ActuatorError;
use crate::fsm::command::{Expression, MotorCommand, Sound};

// ───────────────────────────────────────────────────────────────
// Motor port (driven adapter: domain → wheels)
// ───────────────────────────────────────────────────────────────

/// Write-side port for the two wheel motors.
pub trait MotorPort {
    /// Deliver one `setMotors(leftSpeed, leftTarget, rightSpeed, rightTarget)`.
    ///
    /// Repeating a command is harmless; the stepper re-sends every tick.
    fn set_motors(&mut self, command: MotorCommand) -> Result<(), ActuatorError>;
}

// ───────────────────────────────────────────────────────────────
// Cue port (driven adapter: domain → face + speaker)
// ───────────────────────────────────────────────────────────────

/// Fire-and-forget face and sound output.
///
/// Implementations swallow their own failures; nothing here may block the
/// caller or report back into the domain.
pub trait CuePort {
    /// Switch the face until told otherwise.
    fn set_expression(&mut self, expression: Expression);

    /// Show `expression` for `duration_ms`, then revert to `revert_to`.
    fn set_temporary_expression(&mut self, expression: Expression, duration_ms: u32, revert_to: Expression);

    /// Play a sound clip.
    fn play(&mut self, sound: Sound);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}

// ───────────────────────────────────────────────────────────────
// Configuration port (driven adapter: domain ↔ persistent config)
// ───────────────────────────────────────────────────────────────

/// Loads and persists system configuration.
///
/// Implementations MUST validate before persisting and after loading.
/// Invalid values are rejected with [`ConfigError::ValidationFailed`], not
/// clamped.
pub trait ConfigPort {
    /// Returns [`SystemConfig::default()`] if no stored config exists.
    fn load(&self) -> Result<SystemConfig, ConfigError>;

    fn save(&self, config: &SystemConfig) -> Result<(), ConfigError>;
}

// ───────────────────────────────────────────────────────────────
// Error types
// ───────────────────────────────────────────────────────────────

/// Errors from [`ConfigPort`] operations.
#[derive(Debug)]
pub enum ConfigError {
    /// Stored config could not be parsed.
    Corrupted,
    /// A config field failed range validation.
    ValidationFailed(&'static str),
    /// Generic I/O error from the storage backend.
    IoError,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Corrupted => write!(f, "config corrupted"),
            Self::ValidationFailed(msg) => write!(f, "validation failed: {}", msg),
            Self::IoError => write!(f, "I/O error"),
        }
    }
}

impl core::error::Error for ConfigError {}

impl From<crate::error::Error> for ConfigError {
    fn from(e: crate::error::Error) -> Self {
        let crate::error::Error::Config(msg) = e;
        Self::ValidationFailed(msg)
    }
}
