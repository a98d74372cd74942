//! Sense → decide → act → report → idle.
//!
//! [`SenseActReportLoop`] owns the only mutable state in the firmware: the
//! commanded LED state and the most recent sample.  All I/O flows through
//! port traits injected at call sites, making the loop testable with mock
//! adapters.
//!
//! ```text
//!  SensorPort ──▶ ┌────────────────────────┐ ──▶ ReportPort
//!                 │  SenseActReportLoop     │
//! ActuatorPort ◀──│  Hysteresis · Report    │
//!                 └────────────────────────┘
//! ```

use embedded_hal::delay::DelayNs;
use log::{debug, info};

use crate::config::LoopConfig;
use crate::error::{Error, Result};

use super::hysteresis::{Hysteresis, LedState};
use super::ports::{ActuatorPort, ReportPort, SensorPort};
use super::report::format_report;

/// What one iteration observed and did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepOutcome {
    /// Raw reading acquired this iteration.
    pub sample: u16,
    /// LED state after the hysteresis decision.
    pub state: LedState,
    /// Whether the actuator was commanded (state changed).
    pub commanded: bool,
}

/// The firmware's control loop.
pub struct SenseActReportLoop {
    hysteresis: Hysteresis,
    state: LedState,
    sample: u16,
    idle_interval_ms: u32,
    iterations: u64,
}

impl SenseActReportLoop {
    /// Build the loop from a validated configuration.  The LED starts `Off`.
    pub fn new(config: LoopConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            hysteresis: Hysteresis::from_config(&config),
            state: LedState::Off,
            sample: 0,
            idle_interval_ms: config.idle_interval_ms,
            iterations: 0,
        })
    }

    // ── Per-iteration orchestration ───────────────────────────

    /// Run one acquire → decide → act → report cycle (no idle).
    ///
    /// The `hw` parameter satisfies all three ports, which avoids a triple
    /// mutable borrow while keeping the port boundary explicit.
    pub fn step(
        &mut self,
        hw: &mut (impl SensorPort + ActuatorPort + ReportPort),
    ) -> Result<StepOutcome> {
        // 1. Acquire
        let sample = hw.read_sample()?;
        self.sample = sample;

        // 2. Decide (state read before the sample is evaluated)
        let prev = self.state;
        let next = self.hysteresis.next(prev, sample);

        // 3. Act only on change
        let commanded = next != prev;
        if commanded {
            hw.set_state(next.is_on());
            self.state = next;
            info!("LED {} -> {} (light={})", prev, next, sample);
        }

        // 4. Report
        let line = format_report(sample, self.state);
        hw.write_line(line.as_bytes())?;

        self.iterations += 1;
        debug!("iteration {}: light={} led={}", self.iterations, sample, self.state);

        Ok(StepOutcome {
            sample,
            state: self.state,
            commanded,
        })
    }

    /// Loop forever: [`step`](Self::step), then idle.
    ///
    /// Only returns when a port reports a fault; the caller must hand that
    /// error to [`fault::halt`](crate::fault::halt).  The LED is left in
    /// whatever state it was last commanded to.
    pub fn run(
        &mut self,
        hw: &mut (impl SensorPort + ActuatorPort + ReportPort),
        delay: &mut impl DelayNs,
    ) -> Error {
        info!(
            "Loop running: on<{} off>{} idle={}ms",
            self.hysteresis.on_threshold(),
            self.hysteresis.off_threshold(),
            self.idle_interval_ms
        );
        loop {
            if let Err(e) = self.step(hw) {
                return e;
            }
            delay.delay_ms(self.idle_interval_ms);
        }
    }

    // ── Queries ───────────────────────────────────────────────

    /// Currently commanded LED state.
    pub fn state(&self) -> LedState {
        self.state
    }

    /// Most recent raw sample (0 before the first iteration).
    pub fn last_sample(&self) -> u16 {
        self.sample
    }

    /// Completed iterations since startup.
    pub fn iterations(&self) -> u64 {
        self.iterations
    }
}
