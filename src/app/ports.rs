//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ SenseActReportLoop (domain)
//! ```
//!
//! The [`HardwareAdapter`](crate::adapters::hardware::HardwareAdapter)
//! implements all three traits on real peripherals; integration tests
//! implement them on recording mocks.  The loop consumes them via generics,
//! so the domain core never touches hardware directly.
//!
//! Fallible ports have no recoverable errors: any `Err` ends the loop.

use crate::error::{SensorError, SerialError};

// ───────────────────────────────────────────────────────────────
// Sensor port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Acquisition side: one blocking light sample per call.
pub trait SensorPort {
    /// Run one conversion and return the raw reading in `0..=SAMPLE_MAX`.
    fn read_sample(&mut self) -> Result<u16, SensorError>;
}

// ───────────────────────────────────────────────────────────────
// Actuator port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port for the LED.  Fire-and-forget: no readback.
pub trait ActuatorPort {
    /// Drive the LED on (`true`) or off (`false`).
    fn set_state(&mut self, on: bool);
}

// ───────────────────────────────────────────────────────────────
// Report port (driven adapter: domain → serial link)
// ───────────────────────────────────────────────────────────────

/// Emission side: hands one formatted line to the transport.
pub trait ReportPort {
    /// Block until the transport has accepted every byte of `line`.
    fn write_line(&mut self, line: &[u8]) -> Result<(), SerialError>;
}
