//! LDR ambient-light sensor driver.
//!
//! The LDR sits in a voltage divider on ADC1_CH4.  Readings are returned
//! raw: no calibration, no scaling, no averaging.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: reads ADC1_CH4 via the oneshot API (initialised by hw_init).
//! On host/test: reads from a static `AtomicU16` for injection.

#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::{AtomicU16, Ordering};

use crate::config::SAMPLE_MAX;
use crate::error::SensorError;

#[cfg(target_os = "espidf")]
use crate::drivers::hw_init;

#[cfg(not(target_os = "espidf"))]
static SIM_LIGHT_ADC: AtomicU16 = AtomicU16::new(0);

#[cfg(not(target_os = "espidf"))]
pub fn sim_set_light_adc(raw: u16) {
    SIM_LIGHT_ADC.store(raw, Ordering::Relaxed);
}

pub struct LightSensor {
    total_reads: u32,
    _adc_gpio: i32,
}

impl LightSensor {
    pub fn new(adc_gpio: i32) -> Self {
        Self {
            total_reads: 0,
            _adc_gpio: adc_gpio,
        }
    }

    /// One blocking conversion.
    pub fn read(&mut self) -> Result<u16, SensorError> {
        self.total_reads = self.total_reads.saturating_add(1);
        let raw = self.read_adc()?;
        if raw > SAMPLE_MAX {
            return Err(SensorError::OutOfRange(raw));
        }
        Ok(raw)
    }

    pub fn total_reads(&self) -> u32 {
        self.total_reads
    }

    #[cfg(target_os = "espidf")]
    fn read_adc(&self) -> Result<u16, SensorError> {
        hw_init::adc1_read(hw_init::ADC1_CH_LIGHT)
    }

    #[cfg(not(target_os = "espidf"))]
    #[allow(clippy::unnecessary_wraps)]
    fn read_adc(&self) -> Result<u16, SensorError> {
        Ok(SIM_LIGHT_ADC.load(Ordering::Relaxed))
    }
}
