//! Terminal fault path.
//!
//! The firmware has exactly one error class: unrecoverable.  Init failures,
//! ADC faults, UART faults and panics all end here.  [`halt`] logs the
//! reason, stops the scheduler so nothing else can run, and spins forever.
//! Recovery is a power cycle or an external watchdog.
//!
//! The LED is not touched: it keeps the last commanded level.

use core::fmt;

use log::error;

/// Stop all further work.  Never returns.
pub fn halt(reason: &dyn fmt::Display) -> ! {
    error!("FATAL: {} - halting", reason);

    #[cfg(target_os = "espidf")]
    {
        // SAFETY: suspending the scheduler is always valid from task context;
        // it is never resumed.
        unsafe {
            esp_idf_svc::sys::vTaskSuspendAll();
        }
    }

    loop {
        core::hint::spin_loop();
    }
}

/// Route panics into [`halt`] instead of the default abort-and-reboot.
///
/// Call once during boot, before any peripheral is touched.
pub fn install_panic_handler() {
    std::panic::set_hook(Box::new(|info| {
        let reason = if let Some(msg) = info.payload().downcast_ref::<&str>() {
            *msg
        } else if let Some(msg) = info.payload().downcast_ref::<String>() {
            msg.as_str()
        } else {
            "unknown panic"
        };

        match info.location() {
            Some(loc) => halt(&format_args!("panic at {}:{}: {}", loc.file(), loc.line(), reason)),
            None => halt(&format_args!("panic: {}", reason)),
        }
    }));
}
