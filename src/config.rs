//! Plugin configuration.
//!
//! All tunable parameters for the air bubbler. Configuration is loaded
//! once at startup and injected into the controller — no ambient global
//! state. Values can be overridden via a JSON config file.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Core plugin configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BubblerConfig {
    /// Pump PWM duty-cycle set-point (0-100 %).
    pub duty_cycle_percent: f64,
    /// PWM carrier frequency in Hz.
    pub frequency_hz: f64,
    /// PWM channel name → BCM pin assignments.
    pub pins: PinMap,
}

impl Default for BubblerConfig {
    fn default() -> Self {
        Self {
            duty_cycle_percent: 20.0,
            frequency_hz: 60.0,
            pins: PinMap::default(),
        }
    }
}

impl BubblerConfig {
    /// Load configuration from a JSON file, validating ranges.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|_| ConfigError::Unreadable)?;
        let config: Self = serde_json::from_str(&raw).map_err(|_| ConfigError::Unreadable)?;
        config.validate()?;
        Ok(config)
    }

    /// Range-check every field. Invalid values are rejected, not clamped —
    /// a malformed config file should fail loudly at startup.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.duty_cycle_percent.is_finite()
            || !(0.0..=100.0).contains(&self.duty_cycle_percent)
        {
            return Err(ConfigError::Invalid("duty_cycle_percent must be 0-100"));
        }
        if !self.frequency_hz.is_finite() || self.frequency_hz <= 0.0 {
            return Err(ConfigError::Invalid("frequency_hz must be positive"));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Pin map
// ---------------------------------------------------------------------------

/// PWM channel name → BCM pin number.
///
/// Single source of truth for pin assignments — drivers resolve pins
/// through this map rather than hard-coding numbers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PinMap {
    channels: BTreeMap<String, u8>,
}

impl Default for PinMap {
    fn default() -> Self {
        // Default rig wiring: the aeration pump MOSFET gate sits on BCM 17.
        let mut channels = BTreeMap::new();
        channels.insert(crate::PWM_CHANNEL.to_owned(), 17);
        Self { channels }
    }
}

impl PinMap {
    /// An empty map with no channel assignments.
    pub fn empty() -> Self {
        Self {
            channels: BTreeMap::new(),
        }
    }

    /// Assign a channel to a BCM pin.
    pub fn assign(&mut self, channel: &str, pin: u8) {
        self.channels.insert(channel.to_owned(), pin);
    }

    /// Resolve a channel name to its BCM pin.
    pub fn resolve(&self, channel: &'static str) -> Result<u8, ConfigError> {
        self.channels
            .get(channel)
            .copied()
            .ok_or(ConfigError::ChannelNotMapped(channel))
    }
}
