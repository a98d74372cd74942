//! Report UART writer.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: blocking writes to UART1 via hw_init.
//! On host/test: writes to stdout, so a simulated run prints the same lines.

use crate::error::SerialError;

#[cfg(target_os = "espidf")]
use crate::drivers::hw_init;

pub struct SerialReporter {
    #[cfg(target_os = "espidf")]
    port: i32,
    bytes_sent: u64,
}

impl SerialReporter {
    #[cfg(target_os = "espidf")]
    pub fn new() -> Self {
        Self {
            port: hw_init::REPORT_UART_PORT,
            bytes_sent: 0,
        }
    }

    #[cfg(not(target_os = "espidf"))]
    pub fn new() -> Self {
        Self { bytes_sent: 0 }
    }

    pub fn write_all(&mut self, bytes: &[u8]) -> Result<(), SerialError> {
        self.transmit(bytes)?;
        self.bytes_sent += bytes.len() as u64;
        Ok(())
    }

    /// Total bytes accepted by the transport since boot.
    pub fn bytes_sent(&self) -> u64 {
        self.bytes_sent
    }

    #[cfg(target_os = "espidf")]
    fn transmit(&mut self, bytes: &[u8]) -> Result<(), SerialError> {
        hw_init::uart_write_all(self.port, bytes)
    }

    #[cfg(not(target_os = "espidf"))]
    fn transmit(&mut self, bytes: &[u8]) -> Result<(), SerialError> {
        use std::io::Write;

        let mut out = std::io::stdout().lock();
        out.write_all(bytes)
            .and_then(|()| out.flush())
            .map_err(|_| SerialError::WriteFailed(-1))
    }
}

impl Default for SerialReporter {
    fn default() -> Self {
        Self::new()
    }
}
