//! Application core — pure domain logic, zero I/O.
//!
//! This module contains the pump-control rules for the plugin. All
//! interaction with hardware happens through **port traits** defined in
//! [`ports`], keeping this layer fully testable without a real GPIO.

pub mod commands;
pub mod events;
pub mod ports;
pub mod service;
