//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter    | Implements    | Connects to                 |
//! |------------|---------------|-----------------------------|
//! | `hardware` | SensorPort    | ESP32 ADC1 (LDR)            |
//! |            | ActuatorPort  | ESP32 GPIO (LED)            |
//! |            | ReportPort    | ESP32 UART1                 |
//! | `time`     | DelayNs       | FreeRTOS delay / std sleep  |

pub mod hardware;
pub mod time;
