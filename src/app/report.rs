//! Serial status line.
//!
//! Wire format, one line per loop iteration:
//!
//! ```text
//! Light: <raw> | LED: <ON|OFF>\r\n
//! ```
//!
//! `<raw>` is the unscaled ADC reading in decimal.

use core::fmt::Write;

use super::hysteresis::LedState;

/// Capacity of the report buffer.  The longest possible line
/// (`"Light: 65535 | LED: OFF\r\n"`) is 25 bytes.
pub const REPORT_CAPACITY: usize = 40;

pub type ReportLine = heapless::String<REPORT_CAPACITY>;

/// Format one status line.  Depends on nothing but its arguments.
pub fn format_report(sample: u16, state: LedState) -> ReportLine {
    let mut line = ReportLine::new();
    // Cannot overflow: every u16 fits in the capacity above.
    let _ = write!(line, "Light: {} | LED: {}\r\n", sample, state.as_str());
    line
}
