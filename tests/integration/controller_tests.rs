//! Integration tests for the PumpController → PWM pipeline.
//!
//! These run on the host and verify the full chain from lifecycle hooks
//! and commands down to duty-cycle writes, without any real hardware.

use air_bubbler::app::commands::PumpCommand;
use air_bubbler::app::events::AppEvent;
use air_bubbler::app::ports::LifecycleHooks;
use air_bubbler::app::service::PumpController;

use crate::mock_hw::{BrokenPwm, MockPwm, RecordingSink};

fn make_controller(duty: f64) -> (PumpController<MockPwm, RecordingSink>, MockPwm, RecordingSink) {
    let pwm = MockPwm::new();
    let sink = RecordingSink::new();
    let controller = PumpController::new(duty, pwm.clone(), sink.clone());
    (controller, pwm, sink)
}

// ── Construction ──────────────────────────────────────────────

#[test]
fn construction_holds_output_at_zero() {
    let (controller, pwm, sink) = make_controller(50.0);
    assert_eq!(pwm.live_duty(), 0.0);
    assert_eq!(controller.duty_cycle(), 50.0);
    assert_eq!(sink.events(), vec![AppEvent::Started { duty_cycle: 50.0 }]);
}

// ── Start / sleep / wake round trip ───────────────────────────

#[test]
fn start_sleep_wake_round_trip() {
    let (mut controller, pwm, _sink) = make_controller(50.0);
    assert_eq!(pwm.live_duty(), 0.0);

    controller.start_pumping();
    assert_eq!(pwm.live_duty(), 50.0);

    controller.on_sleep();
    assert_eq!(pwm.live_duty(), 0.0);

    controller.on_wake();
    assert_eq!(pwm.live_duty(), 50.0, "wake must restore the set-point");
}

#[test]
fn start_after_stop_restores_set_point_not_zero() {
    let (mut controller, pwm, _sink) = make_controller(72.0);
    controller.start_pumping();
    controller.stop_pumping();
    assert_eq!(pwm.live_duty(), 0.0);

    controller.start_pumping();
    assert_eq!(pwm.live_duty(), 72.0);
}

// ── OD-reading turbulence dodge ───────────────────────────────

#[test]
fn od_reading_quiets_pump_then_resumes() {
    let (mut controller, pwm, _sink) = make_controller(60.0);
    controller.start_pumping();

    controller.before_od_reading();
    assert_eq!(pwm.live_duty(), 0.0, "pump must be quiet during the reading");

    controller.after_od_reading();
    assert_eq!(pwm.live_duty(), 60.0);
}

// ── set_duty_cycle clamping ───────────────────────────────────

#[test]
fn set_duty_cycle_clamps_high() {
    let (mut controller, pwm, _sink) = make_controller(50.0);
    controller.set_duty_cycle(150.0);
    assert_eq!(controller.duty_cycle(), 100.0);
    assert_eq!(pwm.live_duty(), 100.0);
}

#[test]
fn set_duty_cycle_clamps_low() {
    let (mut controller, pwm, _sink) = make_controller(50.0);
    controller.set_duty_cycle(-10.0);
    assert_eq!(controller.duty_cycle(), 0.0);
    assert_eq!(pwm.live_duty(), 0.0);
}

#[test]
fn set_duty_cycle_rounds_to_whole_percent() {
    let (mut controller, _pwm, _sink) = make_controller(50.0);
    controller.set_duty_cycle(49.6);
    assert_eq!(controller.duty_cycle(), 50.0);
    controller.set_duty_cycle(49.4);
    assert_eq!(controller.duty_cycle(), 49.0);
}

#[test]
fn set_duty_cycle_survives_stop_start() {
    let (mut controller, pwm, _sink) = make_controller(50.0);
    controller.set_duty_cycle(80.0);
    controller.stop_pumping();
    controller.start_pumping();
    assert_eq!(pwm.live_duty(), 80.0, "new set-point must survive a stop");
}

// ── Command dispatch ──────────────────────────────────────────

#[test]
fn commands_map_onto_operations() {
    let (mut controller, pwm, _sink) = make_controller(50.0);

    controller.handle_command(PumpCommand::StartPumping);
    assert_eq!(pwm.live_duty(), 50.0);

    controller.handle_command(PumpCommand::SetDutyCycle(25.0));
    assert_eq!(pwm.live_duty(), 25.0);

    controller.handle_command(PumpCommand::StopPumping);
    assert_eq!(pwm.live_duty(), 0.0);
}

// ── Teardown ──────────────────────────────────────────────────

#[test]
fn teardown_stops_and_releases() {
    let (mut controller, pwm, sink) = make_controller(50.0);
    controller.start_pumping();

    controller.on_teardown();
    assert_eq!(pwm.live_duty(), 0.0);
    assert!(pwm.released(), "PWM handle must be released on teardown");
    assert_eq!(sink.last(), Some(AppEvent::Teardown));
}

#[test]
fn hooks_after_teardown_do_not_panic() {
    let (mut controller, pwm, _sink) = make_controller(50.0);
    controller.on_teardown();

    controller.on_sleep();
    controller.on_wake();
    controller.before_od_reading();
    controller.after_od_reading();
    controller.on_teardown();

    // No writes can reach a released handle.
    let writes_after_release = pwm.writes().len();
    controller.stop_pumping();
    assert_eq!(pwm.writes().len(), writes_after_release);
}

// ── Published settings ────────────────────────────────────────

#[test]
fn duty_cycle_changes_are_published() {
    let (mut controller, _pwm, sink) = make_controller(50.0);
    controller.set_duty_cycle(33.0);
    assert!(
        sink.events()
            .contains(&AppEvent::DutyCycleChanged { duty_cycle: 33.0 }),
        "set_duty_cycle must publish the new value"
    );
}

// ── Degraded hardware ─────────────────────────────────────────

#[test]
fn write_failures_are_absorbed() {
    let sink = RecordingSink::new();
    let mut controller = PumpController::new(50.0, BrokenPwm, sink);
    controller.start_pumping();
    controller.set_duty_cycle(80.0);
    controller.stop_pumping();
    controller.on_teardown();
}
