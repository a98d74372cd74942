//! System configuration parameters
//!
//! Every tunable value of the LightGuard controller is a compile-time
//! constant.  There is no runtime reconfiguration path: thresholds and
//! cadence are fixed per firmware image.

use crate::error::{Error, Result};

// --- Sample domain ---

/// ADC resolution in bits (12-bit oneshot conversion).
pub const SAMPLE_BITS: u32 = 12;
/// Largest raw reading the ADC can produce (`2^12 - 1`).
pub const SAMPLE_MAX: u16 = (1 << SAMPLE_BITS) - 1;

// --- Hysteresis thresholds (raw ADC counts) ---

/// Below this reading the room is dark: LED switches ON.
pub const LED_ON_THRESHOLD: u16 = 600;
/// Above this reading the room is bright: LED switches OFF.
pub const LED_OFF_THRESHOLD: u16 = 1000;

// --- Timing ---

/// Idle time between loop iterations (milliseconds).
///
/// This is the idle duration, not the period: the real period also
/// includes conversion and UART transmit latency.
pub const IDLE_INTERVAL_MS: u32 = 250;

// --- Report UART ---

/// Baud rate of the report UART (8N1).
pub const REPORT_BAUD: u32 = 115_200;

const _: () = assert!(LED_ON_THRESHOLD < LED_OFF_THRESHOLD);
const _: () = assert!(LED_OFF_THRESHOLD <= SAMPLE_MAX);
const _: () = assert!(IDLE_INTERVAL_MS > 0);

/// Parameters of the sense-act-report loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopConfig {
    /// Samples strictly below this turn the LED on (raw counts).
    pub on_threshold: u16,
    /// Samples strictly above this turn the LED off (raw counts).
    pub off_threshold: u16,
    /// Idle time between iterations (milliseconds).
    pub idle_interval_ms: u32,
}

impl LoopConfig {
    /// The configuration baked into this firmware image.
    pub const DEFAULT: Self = Self {
        on_threshold: LED_ON_THRESHOLD,
        off_threshold: LED_OFF_THRESHOLD,
        idle_interval_ms: IDLE_INTERVAL_MS,
    };

    /// Check the range invariants.
    ///
    /// Rejects rather than clamps: an inverted or collapsed threshold pair
    /// would make the LED oscillate on every sample.
    pub fn validate(&self) -> Result<()> {
        if self.on_threshold >= self.off_threshold {
            return Err(Error::Config("on_threshold must be below off_threshold"));
        }
        if self.off_threshold > SAMPLE_MAX {
            return Err(Error::Config("off_threshold outside the 12-bit sample domain"));
        }
        if self.idle_interval_ms == 0 {
            return Err(Error::Config("idle_interval_ms must be non-zero"));
        }
        Ok(())
    }
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
