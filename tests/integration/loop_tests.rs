//! SenseActReportLoop → mock ports: ordering, re-command suppression,
//! report lines, and fault termination.

use lightguard::app::hysteresis::LedState;
use lightguard::app::service::SenseActReportLoop;
use lightguard::config::{IDLE_INTERVAL_MS, LoopConfig};
use lightguard::error::{Error, SensorError, SerialError};

use super::mock_hw::{MockDelay, MockHardware};

fn new_loop() -> SenseActReportLoop {
    SenseActReportLoop::new(LoopConfig::DEFAULT).unwrap()
}

#[test]
fn dusk_to_dawn_scenario() {
    let samples = [1200, 800, 550, 900, 1100];
    let mut hw = MockHardware::with_samples(&samples);
    let mut control = new_loop();

    let states: Vec<LedState> = samples
        .iter()
        .map(|_| control.step(&mut hw).unwrap().state)
        .collect();

    assert_eq!(
        states,
        [LedState::Off, LedState::Off, LedState::On, LedState::On, LedState::Off]
    );
    assert_eq!(hw.actuator_calls, [true, false]);
    assert_eq!(
        hw.lines,
        [
            "Light: 1200 | LED: OFF\r\n",
            "Light: 800 | LED: OFF\r\n",
            "Light: 550 | LED: ON\r\n",
            "Light: 900 | LED: ON\r\n",
            "Light: 1100 | LED: OFF\r\n",
        ]
    );
}

#[test]
fn unchanged_state_never_recommands_actuator() {
    // Bright, dead band, bright again: LED stays off the whole time.
    let mut hw = MockHardware::with_samples(&[3000, 700, 1000, 600, 4095]);
    let mut control = new_loop();

    for _ in 0..5 {
        let outcome = control.step(&mut hw).unwrap();
        assert!(!outcome.commanded);
    }
    assert!(hw.actuator_calls.is_empty());
    assert_eq!(hw.lines.len(), 5);
}

#[test]
fn step_reports_post_decision_state() {
    let mut hw = MockHardware::with_samples(&[599]);
    let mut control = new_loop();

    let outcome = control.step(&mut hw).unwrap();

    assert_eq!(outcome.sample, 599);
    assert_eq!(outcome.state, LedState::On);
    assert!(outcome.commanded);
    assert_eq!(hw.lines, ["Light: 599 | LED: ON\r\n"]);
    assert_eq!(control.state(), LedState::On);
    assert_eq!(control.last_sample(), 599);
}

#[test]
fn run_idles_between_iterations_and_stops_on_sensor_fault() {
    let mut hw = MockHardware::with_samples(&[1200, 550, 800])
        .then_sensor_fault(SensorError::AdcReadFailed(-1));
    let mut delay = MockDelay::default();
    let mut control = new_loop();

    let fault = control.run(&mut hw, &mut delay);

    assert_eq!(fault, Error::Sensor(SensorError::AdcReadFailed(-1)));
    assert_eq!(hw.lines.len(), 3);
    assert_eq!(delay.waits_ms, [IDLE_INTERVAL_MS; 3]);
    assert_eq!(control.iterations(), 3);
}

#[test]
fn fault_leaves_led_in_last_commanded_state() {
    let mut hw = MockHardware::with_samples(&[100]).then_sensor_fault(SensorError::Timeout);
    let mut control = new_loop();

    let fault = control.run(&mut hw, &mut MockDelay::default());

    assert!(matches!(fault, Error::Sensor(SensorError::Timeout)));
    // No fail-safe override: the LED stays on.
    assert_eq!(hw.actuator_calls, [true]);
    assert!(hw.led_on());
    assert_eq!(control.state(), LedState::On);
}

#[test]
fn serial_fault_ends_the_loop() {
    let mut hw = MockHardware::with_samples(&[1200, 1200, 1200, 1200]).fail_write_at(2);
    let mut delay = MockDelay::default();
    let mut control = new_loop();

    let fault = control.run(&mut hw, &mut delay);

    assert_eq!(fault, Error::Serial(SerialError::TxTimeout));
    assert_eq!(hw.lines, ["Light: 1200 | LED: OFF\r\n"]);
    // One idle after the first good iteration, none after the fault.
    assert_eq!(delay.waits_ms.len(), 1);
    assert_eq!(control.iterations(), 1);
}

#[test]
fn custom_idle_interval_is_honoured() {
    let cfg = LoopConfig {
        idle_interval_ms: 40,
        ..LoopConfig::DEFAULT
    };
    let mut control = SenseActReportLoop::new(cfg).unwrap();
    let mut hw = MockHardware::with_samples(&[900, 900]);
    let mut delay = MockDelay::default();

    let _ = control.run(&mut hw, &mut delay);

    assert_eq!(delay.waits_ms, [40, 40]);
}
