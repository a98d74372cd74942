//! GPIO / peripheral pin assignments for the LightGuard board.
//!
//! Single source of truth — every driver references this module rather than
//! hard-coding pin numbers.

// ---------------------------------------------------------------------------
// Light sensor (LDR voltage divider → ADC1)
// ---------------------------------------------------------------------------

/// LDR divider output.  ADC1 channel 4 (GPIO 5 on ESP32-S3).
pub const LDR_ADC_GPIO: i32 = 5;

// ---------------------------------------------------------------------------
// Actuator
// ---------------------------------------------------------------------------

/// Digital output: HIGH = LED on.
pub const LED_GPIO: i32 = 10;

// ---------------------------------------------------------------------------
// Report UART
// ---------------------------------------------------------------------------

/// UART1 carries the report lines; UART0 stays the log console.
pub const REPORT_UART_TX_GPIO: i32 = 17;
pub const REPORT_UART_RX_GPIO: i32 = 18;
