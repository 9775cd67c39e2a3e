//! System configuration parameters
//!
//! All tunable parameters for the path runner.
//! Values can be overridden from a JSON file (see `adapters::config_file`).

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Lowest period the periodic driver will accept.
pub const MIN_TICK_PERIOD_MS: u32 = 10;

/// Upper bound accepted by [`SystemConfig::validate`].
pub const MAX_TICK_PERIOD_MS: u32 = 10_000;

/// What happens to the "completed once" latch when a new run starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LatchPolicy {
    /// The latch survives every trigger once set.
    #[default]
    Sticky,
    /// A tap clears the latch before PathA starts; caress leaves it alone.
    ResetOnTap,
}

/// Core system configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    // --- Timing ---
    /// Step interval written into the selection on trigger (milliseconds)
    pub tick_period_ms: u32,

    // --- Path behaviour ---
    /// Reset rule for the phase-1 short-circuit latch
    pub latch_policy: LatchPolicy,

    // --- Cues ---
    /// How long the angry face stays up after a tap (milliseconds)
    pub tap_expression_ms: u32,
    /// How long the laughing face stays up after a fling (milliseconds)
    pub fling_expression_ms: u32,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            tick_period_ms: 100, // 10 Hz
            latch_policy: LatchPolicy::Sticky,
            tap_expression_ms: 1500,
            fling_expression_ms: 15_000,
        }
    }
}

impl SystemConfig {
    /// Reject values the driver or the cue adapters cannot honour.
    pub fn validate(&self) -> Result<()> {
        if self.tick_period_ms < MIN_TICK_PERIOD_MS {
            return Err(Error::Config("tick_period_ms must be at least 10"));
        }
        if self.tick_period_ms > MAX_TICK_PERIOD_MS {
            return Err(Error::Config("tick_period_ms must be at most 10000"));
        }
        if self.tap_expression_ms == 0 || self.fling_expression_ms == 0 {
            return Err(Error::Config("expression durations must be non-zero"));
        }
        Ok(())
    }
}
