//! LightGuard Firmware — Main Entry Point
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │                 Adapters (outer ring)                  │
//! │                                                        │
//! │  HardwareAdapter                        FreeRtos       │
//! │  (Sensor + Actuator + Report)           (DelayNs)      │
//! │                                                        │
//! │  ─────────────── Port Trait Boundary ───────────────   │
//! │                                                        │
//! │  ┌──────────────────────────────────────────────┐      │
//! │  │      SenseActReportLoop (pure logic)         │      │
//! │  │      Hysteresis · Report formatting          │      │
//! │  └──────────────────────────────────────────────┘      │
//! │                                                        │
//! │  fault::halt ◀── every error, init or runtime          │
//! └────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::{Context, Result};
use esp_idf_hal::delay::FreeRtos;
use log::info;

use lightguard::adapters::hardware::HardwareAdapter;
use lightguard::app::service::SenseActReportLoop;
use lightguard::config::LoopConfig;
use lightguard::drivers::hw_init;
use lightguard::drivers::light_sensor::LightSensor;
use lightguard::drivers::serial::SerialReporter;
use lightguard::drivers::status_led::StatusLed;
use lightguard::{fault, pins};

/// Everything up to the first loop iteration.  Order matters: clock, LED
/// pin, ADC, UART (inside `init_peripherals`), then the loop itself.
fn boot() -> Result<(SenseActReportLoop, HardwareAdapter)> {
    let config = LoopConfig::DEFAULT;
    let control = SenseActReportLoop::new(config).context("loop configuration")?;

    hw_init::init_peripherals().context("peripheral init")?;

    let hw = HardwareAdapter::new(
        LightSensor::new(pins::LDR_ADC_GPIO),
        StatusLed::new(pins::LED_GPIO),
        SerialReporter::new(),
    );

    info!(
        "Thresholds: LED on below {}, off above {} (raw 12-bit), idle {}ms",
        config.on_threshold, config.off_threshold, config.idle_interval_ms
    );
    Ok((control, hw))
}

fn main() {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    if let Err(e) = esp_idf_logger::init() {
        fault::halt(&format_args!("logger init: {:?}", e));
    }
    fault::install_panic_handler();

    info!("LightGuard v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Peripherals + control loop ─────────────────────────
    let (mut control, mut hw) = match boot() {
        Ok(parts) => parts,
        Err(e) => fault::halt(&format_args!("{:#}", e)),
    };

    info!("System ready. Entering control loop.");

    // ── 3. Run until a fault, then halt ───────────────────────
    let fault = control.run(&mut hw, &mut FreeRtos);
    fault::halt(&fault)
}
