//! Application core — pure domain logic, zero I/O.
//!
//! The hysteresis decision, the report line format, and the loop that ties
//! them together.  All interaction with hardware happens through **port
//! traits** defined in [`ports`], keeping this layer fully testable without
//! real peripherals.

pub mod hysteresis;
pub mod ports;
pub mod report;
pub mod service;
