//! Mock hardware adapter for integration tests.
//!
//! Plays back a scripted sequence of ADC results and records every
//! actuator call and report line, so tests can assert on the full history
//! without touching real GPIO/ADC/UART registers.

use std::collections::VecDeque;

use embedded_hal::delay::DelayNs;
use lightguard::app::ports::{ActuatorPort, ReportPort, SensorPort};
use lightguard::error::{SensorError, SerialError};

// ── MockHardware ──────────────────────────────────────────────

pub struct MockHardware {
    samples: VecDeque<Result<u16, SensorError>>,
    /// Every `set_state` argument, in call order.
    pub actuator_calls: Vec<bool>,
    /// Every report line, decoded as UTF-8.
    pub lines: Vec<String>,
    /// 1-based index of the `write_line` call that should fail.
    fail_write_at: Option<usize>,
    write_attempts: usize,
}

#[allow(dead_code)]
impl MockHardware {
    pub fn with_samples(samples: &[u16]) -> Self {
        Self {
            samples: samples.iter().copied().map(Ok).collect(),
            actuator_calls: Vec::new(),
            lines: Vec::new(),
            fail_write_at: None,
            write_attempts: 0,
        }
    }

    /// Queue an ADC fault after the scripted samples.
    pub fn then_sensor_fault(mut self, err: SensorError) -> Self {
        self.samples.push_back(Err(err));
        self
    }

    pub fn fail_write_at(mut self, call: usize) -> Self {
        self.fail_write_at = Some(call);
        self
    }

    /// Level the LED was last driven to (`false` if never commanded).
    pub fn led_on(&self) -> bool {
        self.actuator_calls.last().copied().unwrap_or(false)
    }
}

impl SensorPort for MockHardware {
    fn read_sample(&mut self) -> Result<u16, SensorError> {
        // Running out of script behaves like a stalled conversion.
        self.samples.pop_front().unwrap_or(Err(SensorError::Timeout))
    }
}

impl ActuatorPort for MockHardware {
    fn set_state(&mut self, on: bool) {
        self.actuator_calls.push(on);
    }
}

impl ReportPort for MockHardware {
    fn write_line(&mut self, line: &[u8]) -> Result<(), SerialError> {
        self.write_attempts += 1;
        if self.fail_write_at == Some(self.write_attempts) {
            return Err(SerialError::TxTimeout);
        }
        self.lines.push(String::from_utf8(line.to_vec()).expect("report is ASCII"));
        Ok(())
    }
}

// ── MockDelay ─────────────────────────────────────────────────

/// Records requested idle times instead of sleeping.
#[derive(Default)]
pub struct MockDelay {
    pub waits_ms: Vec<u32>,
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.waits_ms.push(ns / 1_000_000);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.waits_ms.push(ms);
    }
}
