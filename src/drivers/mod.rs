//! Hardware adapters.

pub mod pwm;
