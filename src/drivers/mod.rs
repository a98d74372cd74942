//! Peripheral drivers and one-shot hardware initialisation.

pub mod hw_init;
pub mod light_sensor;
pub mod serial;
pub mod status_led;
