//! Inbound commands to the pump controller.
//!
//! These represent actions requested by the outside world (host
//! framework, CLI, settings channel) that the
//! [`PumpController`](super::service::PumpController) interprets and
//! acts upon.

/// Commands that external adapters can send into the controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PumpCommand {
    /// Drive the pump at the stored set-point.
    StartPumping,

    /// Drive the pump to 0 %.
    StopPumping,

    /// Update the duty-cycle set-point (clamped and rounded) and apply
    /// it to the live output immediately.
    SetDutyCycle(f64),
}
