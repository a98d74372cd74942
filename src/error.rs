//! Unified error types for the LightGuard firmware.
//!
//! Every variant is an unrecoverable fault: nothing in the firmware retries.
//! Errors exist so the halt path can log *why* it stopped.  All variants are
//! `Copy` so they pass through the loop without allocation.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level firmware error
// ---------------------------------------------------------------------------

/// Every fallible operation in the firmware funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The light sensor could not be read or returned out-of-range data.
    Sensor(SensorError),
    /// The report UART rejected a transmission.
    Serial(SerialError),
    /// Peripheral initialisation failed.
    Init(&'static str),
    /// A configuration invariant does not hold.
    Config(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sensor(e) => write!(f, "sensor: {e}"),
            Self::Serial(e) => write!(f, "serial: {e}"),
            Self::Init(msg) => write!(f, "init: {msg}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

// ---------------------------------------------------------------------------
// Sensor errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorError {
    /// ADC oneshot read returned an error code.
    AdcReadFailed(i32),
    /// Conversion did not complete.
    Timeout,
    /// Reading is above the 12-bit sample domain.
    OutOfRange(u16),
}

impl fmt::Display for SensorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AdcReadFailed(rc) => write!(f, "ADC read failed (rc={rc})"),
            Self::Timeout => write!(f, "ADC conversion timed out"),
            Self::OutOfRange(raw) => write!(f, "reading {raw} out of range"),
        }
    }
}

impl From<SensorError> for Error {
    fn from(e: SensorError) -> Self {
        Self::Sensor(e)
    }
}

// ---------------------------------------------------------------------------
// Serial errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SerialError {
    /// The UART driver refused the bytes.
    WriteFailed(i32),
    /// Fewer bytes were queued than requested.
    ShortWrite { written: usize, expected: usize },
    /// TX FIFO did not drain.
    TxTimeout,
}

impl fmt::Display for SerialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WriteFailed(rc) => write!(f, "UART write failed (rc={rc})"),
            Self::ShortWrite { written, expected } => {
                write!(f, "UART short write ({written}/{expected} bytes)")
            }
            Self::TxTimeout => write!(f, "UART TX timed out"),
        }
    }
}

impl From<SerialError> for Error {
    fn from(e: SerialError) -> Self {
        Self::Serial(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
