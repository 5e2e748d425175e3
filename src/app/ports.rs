//! Port traits — the boundary between the pump controller and the
//! outside world.
//!
//! ```text
//!   Host framework ──▶ LifecycleHooks ──▶ PumpController ──▶ PwmChannel
//!                                                │
//!                                                └──▶ EventSink
//! ```
//!
//! The real GPIO adapter and test mocks both implement [`PwmChannel`];
//! the controller consumes it via generics and never touches hardware
//! directly. [`LifecycleHooks`] replaces host-framework base-class
//! inheritance: the host registers the controller and invokes the named
//! hooks, one at a time.

use crate::error::PwmError;

use super::events::AppEvent;

// ───────────────────────────────────────────────────────────────
// PWM port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: a single PWM output with a fixed carrier frequency.
///
/// Implementations hold the output at 0 % duty from the moment they are
/// opened until the first `set_duty_percent` call.
pub trait PwmChannel {
    /// Apply a duty cycle in percent. Callers pass values already
    /// clamped to [0, 100]; implementations may saturate defensively.
    fn set_duty_percent(&mut self, percent: f64) -> Result<(), PwmError>;

    /// Drive the output to 0 % duty.
    fn stop(&mut self) -> Result<(), PwmError>;

    /// Release the underlying GPIO resource. Dropping an implementation
    /// must have the same effect; this exists for explicit teardown.
    fn release(self);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (domain → logging / settings publication)
// ───────────────────────────────────────────────────────────────

/// The controller emits structured [`AppEvent`]s through this port.
/// Adapters decide where they go — serial log, MQTT settings topic,
/// test recorder. The read-only `duty_cycle` published setting is
/// observable through [`AppEvent::DutyCycleChanged`].
pub trait EventSink {
    fn emit(&mut self, event: &AppEvent);
}

impl<T: EventSink + ?Sized> EventSink for &mut T {
    fn emit(&mut self, event: &AppEvent) {
        (**self).emit(event);
    }
}

// ───────────────────────────────────────────────────────────────
// Lifecycle hooks (host framework → domain)
// ───────────────────────────────────────────────────────────────

/// Named callback hooks the host job framework invokes over the life of
/// the plugin. Invocation is strictly sequential — implementations need
/// no internal locking.
pub trait LifecycleHooks {
    /// The job was put to sleep; actuators must go quiet.
    fn on_sleep(&mut self);

    /// The job woke from sleep; resume normal operation.
    fn on_wake(&mut self);

    /// An optical-density reading is about to start. Pump-induced
    /// turbulence would corrupt the measurement, so stop beforehand.
    fn before_od_reading(&mut self);

    /// The optical-density reading finished; resume pumping.
    fn after_od_reading(&mut self);

    /// The job is disconnecting. Stop and release all hardware —
    /// guaranteed, on every exit path.
    fn on_teardown(&mut self);
}
