//! Two-threshold hysteresis for the LED.
//!
//! ```text
//!            sample < on_threshold
//!   ┌─────┐ ─────────────────────▶ ┌────┐
//!   │ Off │                        │ On │
//!   └─────┘ ◀───────────────────── └────┘
//!            sample > off_threshold
//! ```
//!
//! Readings inside `[on_threshold, off_threshold]` never change the state,
//! and neither do readings that push further in the direction the LED is
//! already set for.  This dead band is what keeps the LED from flickering
//! when the light level hovers near a single boundary.

use core::fmt;

use crate::config::LoopConfig;

/// Commanded LED state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LedState {
    #[default]
    Off,
    On,
}

impl LedState {
    pub const fn is_on(self) -> bool {
        matches!(self, Self::On)
    }

    /// Token used in the serial report line.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Off => "OFF",
            Self::On => "ON",
        }
    }
}

impl From<bool> for LedState {
    fn from(on: bool) -> Self {
        if on { Self::On } else { Self::Off }
    }
}

impl fmt::Display for LedState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Threshold pair.  `on_threshold < off_threshold` is checked by
/// [`LoopConfig::validate`] before a `Hysteresis` is ever built from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hysteresis {
    on_threshold: u16,
    off_threshold: u16,
}

impl Hysteresis {
    pub const fn new(on_threshold: u16, off_threshold: u16) -> Self {
        Self {
            on_threshold,
            off_threshold,
        }
    }

    pub const fn from_config(config: &LoopConfig) -> Self {
        Self::new(config.on_threshold, config.off_threshold)
    }

    /// Transition function.  Pure and total.
    pub const fn next(&self, current: LedState, sample: u16) -> LedState {
        match current {
            LedState::Off if sample < self.on_threshold => LedState::On,
            LedState::On if sample > self.off_threshold => LedState::Off,
            other => other,
        }
    }

    pub const fn on_threshold(&self) -> u16 {
        self.on_threshold
    }

    pub const fn off_threshold(&self) -> u16 {
        self.off_threshold
    }
}

impl Default for Hysteresis {
    fn default() -> Self {
        Self::from_config(&LoopConfig::DEFAULT)
    }
}
