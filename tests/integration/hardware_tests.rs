//! HardwareAdapter on host simulation stubs, driven by the real loop.

use lightguard::adapters::hardware::HardwareAdapter;
use lightguard::app::hysteresis::LedState;
use lightguard::app::service::SenseActReportLoop;
use lightguard::config::LoopConfig;
use lightguard::drivers::light_sensor::{LightSensor, sim_set_light_adc};
use lightguard::drivers::serial::SerialReporter;
use lightguard::drivers::status_led::StatusLed;
use lightguard::error::{Error, SensorError};
use lightguard::pins;

// The simulated ADC is a process-wide atomic: keep every use in this one test.
#[test]
fn simulated_board_follows_hysteresis() {
    let mut hw = HardwareAdapter::new(
        LightSensor::new(pins::LDR_ADC_GPIO),
        StatusLed::new(pins::LED_GPIO),
        SerialReporter::new(),
    );
    let mut control = SenseActReportLoop::new(LoopConfig::DEFAULT).unwrap();

    sim_set_light_adc(100);
    let outcome = control.step(&mut hw).unwrap();
    assert_eq!(outcome.state, LedState::On);
    assert!(hw.led_is_on());
    assert_eq!(hw.bytes_sent(), "Light: 100 | LED: ON\r\n".len() as u64);

    sim_set_light_adc(1000);
    control.step(&mut hw).unwrap();
    assert!(hw.led_is_on());

    sim_set_light_adc(1001);
    control.step(&mut hw).unwrap();
    assert!(!hw.led_is_on());

    sim_set_light_adc(4096);
    assert_eq!(
        control.step(&mut hw),
        Err(Error::Sensor(SensorError::OutOfRange(4096)))
    );
    assert!(!hw.led_is_on());
}
