//! Idle delay for the control loop.
//!
//! - **`target_os = "espidf"`** — `esp_idf_hal::delay::FreeRtos`, which
//!   blocks the calling task with `vTaskDelay`.
//! - **`not(target_os = "espidf")`** — [`StdDelay`], a thread sleep for
//!   host-side simulation.
//!
//! Both implement [`embedded_hal::delay::DelayNs`], which is all the loop
//! asks for.

use embedded_hal::delay::DelayNs;

/// Blocking delay backed by `std::thread::sleep`.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdDelay;

impl DelayNs for StdDelay {
    fn delay_ns(&mut self, ns: u32) {
        std::thread::sleep(std::time::Duration::from_nanos(u64::from(ns)));
    }

    fn delay_ms(&mut self, ms: u32) {
        std::thread::sleep(std::time::Duration::from_millis(u64::from(ms)));
    }
}
