//! Outbound application events.
//!
//! The [`PumpController`](super::service::PumpController) emits these
//! through the [`EventSink`](super::ports::EventSink) port. Adapters on
//! the other side decide what to do with them — log to stderr, publish
//! to the host's settings channel, record in a test.

/// Structured events emitted by the pump controller.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// The controller finished construction (output held at 0 %).
    Started { duty_cycle: f64 },

    /// The pump was driven to its configured set-point.
    PumpStarted { duty_cycle: f64 },

    /// The pump was driven to 0 %.
    PumpStopped,

    /// The stored duty-cycle set-point changed (published setting).
    DutyCycleChanged { duty_cycle: f64 },

    /// The controller released its PWM output.
    Teardown,
}

/// Read-only snapshot of the controller's published settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SettingsSnapshot {
    /// Stored duty-cycle set-point in percent. Unit: `%`.
    pub duty_cycle: f64,
    /// Whether the live output is currently at the set-point.
    pub pumping: bool,
}
