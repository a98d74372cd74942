//! One-shot hardware peripheral initialization.
//!
//! Brings up the clock, LED GPIO, ADC and report UART using raw ESP-IDF
//! sys calls, in that order.  Called once from `main()` before the loop
//! starts; any failure is fatal.

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

#[cfg(target_os = "espidf")]
use crate::error::{SensorError, SerialError};

// ── Error type ────────────────────────────────────────────────

/// Errors during one-shot peripheral initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HwInitError {
    ClockConfigFailed(i32),
    GpioConfigFailed(i32),
    AdcInitFailed(i32),
    UartInitFailed(i32),
}

impl core::fmt::Display for HwInitError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::ClockConfigFailed(rc) => write!(f, "clock config failed (rc={})", rc),
            Self::GpioConfigFailed(rc) => write!(f, "GPIO config failed (rc={})", rc),
            Self::AdcInitFailed(rc)    => write!(f, "ADC1 init failed (rc={})", rc),
            Self::UartInitFailed(rc)   => write!(f, "report UART init failed (rc={})", rc),
        }
    }
}

impl std::error::Error for HwInitError {}

#[cfg(target_os = "espidf")]
use log::info;

#[cfg(target_os = "espidf")]
use crate::config::REPORT_BAUD;
#[cfg(target_os = "espidf")]
use crate::pins;

/// ADC1 channel wired to the LDR divider (GPIO 5).
pub const ADC1_CH_LIGHT: u32 = 4;
/// UART port carrying report lines.
pub const REPORT_UART_PORT: i32 = 1;

#[cfg(target_os = "espidf")]
pub fn init_peripherals() -> Result<(), HwInitError> {
    // SAFETY: Called once from main() before the loop; single-threaded.
    unsafe {
        init_clock()?;
        init_led_output()?;
        init_adc()?;
        init_report_uart()?;
    }
    info!("hw_init: all peripherals configured");
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn init_peripherals() -> Result<(), HwInitError> {
    log::info!("hw_init(sim): peripheral init skipped");
    Ok(())
}

// ── Clock ─────────────────────────────────────────────────────

/// Pin the CPU at a fixed frequency.  With power management compiled out
/// the frequency is whatever sdkconfig selected, which is also fine.
#[cfg(target_os = "espidf")]
unsafe fn init_clock() -> Result<(), HwInitError> {
    let cfg = esp_pm_config_t {
        max_freq_mhz: 160,
        min_freq_mhz: 160,
        light_sleep_enable: false,
    };
    let ret = unsafe { esp_pm_configure((&raw const cfg).cast()) };
    if ret == ESP_ERR_NOT_SUPPORTED as i32 {
        info!("hw_init: PM disabled, CPU clock fixed by sdkconfig");
        return Ok(());
    }
    if ret != ESP_OK as i32 { return Err(HwInitError::ClockConfigFailed(ret)); }
    info!("hw_init: CPU clock pinned at 160 MHz");
    Ok(())
}

// ── GPIO output ───────────────────────────────────────────────

#[cfg(target_os = "espidf")]
unsafe fn init_led_output() -> Result<(), HwInitError> {
    let cfg = gpio_config_t {
        pin_bit_mask: 1u64 << pins::LED_GPIO,
        mode: gpio_mode_t_GPIO_MODE_OUTPUT,
        pull_up_en: gpio_pullup_t_GPIO_PULLUP_DISABLE,
        pull_down_en: gpio_pulldown_t_GPIO_PULLDOWN_DISABLE,
        intr_type: gpio_int_type_t_GPIO_INTR_DISABLE,
    };
    let ret = unsafe { gpio_config(&cfg) };
    if ret != ESP_OK as i32 { return Err(HwInitError::GpioConfigFailed(ret)); }
    unsafe { gpio_set_level(pins::LED_GPIO, 0) };

    info!("hw_init: LED output configured (GPIO {})", pins::LED_GPIO);
    Ok(())
}

#[cfg(target_os = "espidf")]
pub fn gpio_write(pin: i32, high: bool) {
    // SAFETY: gpio_set_level writes to an already-configured output pin;
    // pin was validated during init_led_output(). Main-loop only.
    unsafe { gpio_set_level(pin, if high { 1 } else { 0 }); }
}

#[cfg(not(target_os = "espidf"))]
pub fn gpio_write(_pin: i32, _high: bool) {}

// ── ADC (oneshot) ─────────────────────────────────────────────

#[cfg(target_os = "espidf")]
static mut ADC1_HANDLE: adc_oneshot_unit_handle_t = core::ptr::null_mut();

/// SAFETY: Must be called only from the single-threaded init path or the
/// main-loop ADC read path.  `init_adc()` completes before the loop starts.
#[cfg(target_os = "espidf")]
unsafe fn adc1_handle() -> adc_oneshot_unit_handle_t {
    unsafe { ADC1_HANDLE }
}

#[cfg(target_os = "espidf")]
unsafe fn init_adc() -> Result<(), HwInitError> {
    let init_cfg = adc_oneshot_unit_init_cfg_t {
        unit_id: adc_unit_t_ADC_UNIT_1,
        ulp_mode: adc_ulp_mode_t_ADC_ULP_MODE_DISABLE,
        ..Default::default()
    };
    // SAFETY: ADC1_HANDLE is only written here, once at boot.
    let ret = unsafe { adc_oneshot_new_unit(&init_cfg, &raw mut ADC1_HANDLE) };
    if ret != ESP_OK as i32 { return Err(HwInitError::AdcInitFailed(ret)); }

    let chan_cfg = adc_oneshot_chan_cfg_t {
        atten: adc_atten_t_ADC_ATTEN_DB_12,
        bitwidth: adc_bitwidth_t_ADC_BITWIDTH_12,
    };
    let ret = unsafe { adc_oneshot_config_channel(adc1_handle(), ADC1_CH_LIGHT, &chan_cfg) };
    if ret != ESP_OK as i32 { return Err(HwInitError::AdcInitFailed(ret)); }

    info!("hw_init: ADC1 configured (CH{}=LDR, 12-bit)", ADC1_CH_LIGHT);
    Ok(())
}

/// Blocking oneshot conversion.  The driver polls for completion
/// internally and reports a timeout as `ESP_ERR_TIMEOUT`.
#[cfg(target_os = "espidf")]
pub fn adc1_read(channel: u32) -> Result<u16, SensorError> {
    let mut raw: i32 = 0;
    // SAFETY: adc1_handle() contract — single-threaded main-loop access only.
    let ret = unsafe { adc_oneshot_read(adc1_handle(), channel, &mut raw) };
    if ret == ESP_ERR_TIMEOUT as i32 {
        return Err(SensorError::Timeout);
    }
    if ret != ESP_OK as i32 {
        return Err(SensorError::AdcReadFailed(ret));
    }
    Ok(raw.max(0) as u16)
}

// ── Report UART ───────────────────────────────────────────────

#[cfg(target_os = "espidf")]
const UART_TX_BUF_LEN: i32 = 256;
#[cfg(target_os = "espidf")]
const UART_RX_BUF_LEN: i32 = 256;

#[cfg(target_os = "espidf")]
unsafe fn init_report_uart() -> Result<(), HwInitError> {
    let cfg = uart_config_t {
        baud_rate: REPORT_BAUD as i32,
        data_bits: uart_word_length_t_UART_DATA_8_BITS,
        parity: uart_parity_t_UART_PARITY_DISABLE,
        stop_bits: uart_stop_bits_t_UART_STOP_BITS_1,
        flow_ctrl: uart_hw_flowcontrol_t_UART_HW_FLOWCTRL_DISABLE,
        ..Default::default()
    };
    let ret = unsafe { uart_param_config(REPORT_UART_PORT, &cfg) };
    if ret != ESP_OK as i32 { return Err(HwInitError::UartInitFailed(ret)); }

    let ret = unsafe {
        uart_set_pin(
            REPORT_UART_PORT,
            pins::REPORT_UART_TX_GPIO,
            pins::REPORT_UART_RX_GPIO,
            UART_PIN_NO_CHANGE,
            UART_PIN_NO_CHANGE,
        )
    };
    if ret != ESP_OK as i32 { return Err(HwInitError::UartInitFailed(ret)); }

    let ret = unsafe {
        uart_driver_install(
            REPORT_UART_PORT,
            UART_RX_BUF_LEN,
            UART_TX_BUF_LEN,
            0,
            core::ptr::null_mut(),
            0,
        )
    };
    if ret != ESP_OK as i32 { return Err(HwInitError::UartInitFailed(ret)); }

    info!("hw_init: report UART{} at {} baud (8N1)", REPORT_UART_PORT, REPORT_BAUD);
    Ok(())
}

/// Queue `bytes` and block until the TX FIFO has drained.
#[cfg(target_os = "espidf")]
pub fn uart_write_all(port: i32, bytes: &[u8]) -> Result<(), SerialError> {
    // SAFETY: the UART driver was installed in init_report_uart(); the
    // buffer outlives the call and only the main loop writes to this port.
    let written = unsafe { uart_write_bytes(port, bytes.as_ptr().cast(), bytes.len()) };
    if written < 0 {
        return Err(SerialError::WriteFailed(written));
    }
    if written as usize != bytes.len() {
        return Err(SerialError::ShortWrite { written: written as usize, expected: bytes.len() });
    }
    // SAFETY: same driver contract as above.
    let ret = unsafe { uart_wait_tx_done(port, TickType_t::MAX) };
    if ret == ESP_ERR_TIMEOUT as i32 {
        return Err(SerialError::TxTimeout);
    }
    if ret != ESP_OK as i32 {
        return Err(SerialError::WriteFailed(ret));
    }
    Ok(())
}
