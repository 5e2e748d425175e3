//! Air bubbler plugin library.
//!
//! Drives a PWM-controlled aeration pump in response to lifecycle events
//! from the host job framework. The core logic lives in [`app`] behind
//! port traits, so everything is testable without a Raspberry Pi; the
//! real GPIO adapter is guarded by the `raspi` feature inside
//! [`drivers`].

#![deny(unused_must_use)]

pub mod app;
pub mod command;
pub mod config;
pub mod drivers;
pub mod error;
pub mod events;

/// Job name the plugin registers under with the host framework.
pub const JOB_NAME: &str = "air_bubbler";

/// PWM channel name looked up in the pin map.
pub const PWM_CHANNEL: &str = "air_bubbler";
