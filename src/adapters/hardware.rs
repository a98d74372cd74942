//! Hardware adapter — bridges real peripherals to domain port traits.
//!
//! Owns the light sensor, the LED and the report UART, exposing them
//! through [`SensorPort`], [`ActuatorPort`] and [`ReportPort`].  This is
//! the only module in the system that touches actual hardware.  On
//! non-espidf targets, the underlying drivers use cfg-gated simulation
//! stubs.

use crate::app::ports::{ActuatorPort, ReportPort, SensorPort};
use crate::drivers::light_sensor::LightSensor;
use crate::drivers::serial::SerialReporter;
use crate::drivers::status_led::StatusLed;
use crate::error::{SensorError, SerialError};

/// Concrete adapter that combines all hardware behind port traits.
pub struct HardwareAdapter {
    sensor: LightSensor,
    led: StatusLed,
    serial: SerialReporter,
}

impl HardwareAdapter {
    pub fn new(sensor: LightSensor, led: StatusLed, serial: SerialReporter) -> Self {
        Self { sensor, led, serial }
    }

    pub fn led_is_on(&self) -> bool {
        self.led.is_on()
    }

    pub fn bytes_sent(&self) -> u64 {
        self.serial.bytes_sent()
    }
}

// ── SensorPort implementation ─────────────────────────────────

impl SensorPort for HardwareAdapter {
    fn read_sample(&mut self) -> Result<u16, SensorError> {
        self.sensor.read()
    }
}

// ── ActuatorPort implementation ───────────────────────────────

impl ActuatorPort for HardwareAdapter {
    fn set_state(&mut self, on: bool) {
        self.led.set(on);
    }
}

// ── ReportPort implementation ─────────────────────────────────

impl ReportPort for HardwareAdapter {
    fn write_line(&mut self, line: &[u8]) -> Result<(), SerialError> {
        self.serial.write_all(line)
    }
}
