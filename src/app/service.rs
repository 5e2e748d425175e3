//! Pump controller — the application core.
//!
//! [`PumpController`] owns the duty-cycle set-point and the PWM output
//! handle. It exposes a clean, hardware-agnostic API and implements
//! [`LifecycleHooks`] so the host framework can drive it:
//!
//! ```text
//!  LifecycleHooks ──▶ ┌──────────────────┐ ──▶ PwmChannel
//!  PumpCommand    ──▶ │  PumpController  │
//!                     └──────────────────┘ ──▶ EventSink
//! ```
//!
//! There is no state machine beyond pumping / not pumping; the host's
//! sequential hook dispatch provides all ordering.

use log::{info, warn};

use super::commands::PumpCommand;
use super::events::{AppEvent, SettingsSnapshot};
use super::ports::{EventSink, LifecycleHooks, PwmChannel};

/// Clamp a requested duty cycle into [0, 100], rounding to the nearest
/// whole percent. Non-finite input is treated as 0.
pub fn clamp_duty(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    value.round().clamp(0.0, 100.0)
}

/// Drives the aeration pump via a single PWM output.
pub struct PumpController<P: PwmChannel, S: EventSink> {
    /// Stored set-point in percent. Invariant: within [0, 100].
    duty_cycle: f64,
    /// Whether the live output is currently at the set-point.
    pumping: bool,
    /// Owned PWM handle. `None` only after teardown.
    pwm: Option<P>,
    sink: S,
}

impl<P: PwmChannel, S: EventSink> PumpController<P, S> {
    /// Construct the controller around an already-opened PWM output.
    ///
    /// The output is driven to 0 % immediately; call
    /// [`start_pumping`](Self::start_pumping) to begin aeration.
    pub fn new(duty_cycle: f64, pwm: P, mut sink: S) -> Self {
        let duty_cycle = clamp_duty(duty_cycle);
        sink.emit(&AppEvent::Started { duty_cycle });
        let mut controller = Self {
            duty_cycle,
            pumping: false,
            pwm: Some(pwm),
            sink,
        };
        controller.apply(0.0);
        controller
    }

    // ── Operations ────────────────────────────────────────────

    /// Drive the live output to the stored set-point.
    pub fn start_pumping(&mut self) {
        self.pumping = true;
        self.apply(self.duty_cycle);
        self.sink.emit(&AppEvent::PumpStarted {
            duty_cycle: self.duty_cycle,
        });
        info!("pumping at {:.0}%", self.duty_cycle);
    }

    /// Drive the live output to 0 %. Idempotent, and safe to call after
    /// the handle has been released.
    pub fn stop_pumping(&mut self) {
        self.pumping = false;
        if let Some(pwm) = &mut self.pwm {
            if let Err(e) = pwm.stop() {
                warn!("pump stop failed: {e}");
            }
        }
        self.sink.emit(&AppEvent::PumpStopped);
    }

    /// Clamp and store a new set-point, then apply it to the live
    /// output. Out-of-range input is saturated, never an error.
    pub fn set_duty_cycle(&mut self, value: f64) {
        self.duty_cycle = clamp_duty(value);
        self.pumping = self.duty_cycle > 0.0;
        self.apply(self.duty_cycle);
        self.sink.emit(&AppEvent::DutyCycleChanged {
            duty_cycle: self.duty_cycle,
        });
        info!("duty cycle set to {:.0}%", self.duty_cycle);
    }

    /// Process an inbound command from the host or settings channel.
    pub fn handle_command(&mut self, cmd: PumpCommand) {
        match cmd {
            PumpCommand::StartPumping => self.start_pumping(),
            PumpCommand::StopPumping => self.stop_pumping(),
            PumpCommand::SetDutyCycle(value) => self.set_duty_cycle(value),
        }
    }

    // ── Queries ───────────────────────────────────────────────

    /// Stored duty-cycle set-point in percent.
    pub fn duty_cycle(&self) -> f64 {
        self.duty_cycle
    }

    /// Whether the live output is at the set-point.
    pub fn is_pumping(&self) -> bool {
        self.pumping
    }

    /// Read-only snapshot of the published settings.
    pub fn settings(&self) -> SettingsSnapshot {
        SettingsSnapshot {
            duty_cycle: self.duty_cycle,
            pumping: self.pumping,
        }
    }

    // ── Internal ──────────────────────────────────────────────

    /// Write a duty cycle to the live output if the handle is present.
    /// Write failures after construction are logged, not propagated —
    /// the host has no recovery path beyond teardown anyway.
    fn apply(&mut self, percent: f64) {
        if let Some(pwm) = &mut self.pwm {
            if let Err(e) = pwm.set_duty_percent(percent) {
                warn!("duty write failed: {e}");
            }
        }
    }
}

impl<P: PwmChannel, S: EventSink> LifecycleHooks for PumpController<P, S> {
    fn on_sleep(&mut self) {
        self.stop_pumping();
    }

    fn on_wake(&mut self) {
        self.start_pumping();
    }

    fn before_od_reading(&mut self) {
        self.stop_pumping();
    }

    fn after_od_reading(&mut self) {
        self.start_pumping();
    }

    fn on_teardown(&mut self) {
        self.stop_pumping();
        if let Some(pwm) = self.pwm.take() {
            pwm.release();
        }
        self.sink.emit(&AppEvent::Teardown);
        info!("pump controller torn down");
    }
}
